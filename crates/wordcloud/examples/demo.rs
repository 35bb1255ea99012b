use wordcloud::WordCloudBuilder;

fn main() {
    let captions = [
        "Two cats sleeping on a red couch.",
        "A cat on a couch!",
        "An octopus and an octopuss in a tank",
        "\"Psychedelic\" poster of Cinderella",
        "a psychadelic poster",
    ];

    let report = WordCloudBuilder::default().build_report(captions);

    for merge in &report.merges {
        println!(
            "merged {:?} + {:?} -> {:?} (similarity {:.3}, count {})",
            merge.left, merge.right, merge.canonical, merge.similarity, merge.count
        );
    }
    println!();
    for (word, weight) in report.cloud.iter() {
        println!("{word:>14}  {weight:.3}");
    }
}
