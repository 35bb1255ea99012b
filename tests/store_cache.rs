use std::io::Write;

use captioner::{
    memoized_store, CacheKey, CaptionStore, CaptionerConfig, InMemoryCaptionStore, MemoizedStore,
    WordCloudBuilder, LEAST_IMAGES_LIMIT,
};

fn seeded() -> InMemoryCaptionStore {
    let mut store =
        InMemoryCaptionStore::with_images(["owl.jpg", "cat.jpg", "sea.jpg"]).expect("unique");
    store.add_caption(1, "An owl on a branch").expect("image 1");
    store.add_caption(2, "Two cats, one box").expect("image 2");
    store.add_caption(2, "a cat in a box").expect("image 2");
    store
}

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(yaml.as_bytes()).expect("write config");
    file
}

#[test]
fn word_cloud_served_from_store_captions() {
    let store = MemoizedStore::new(seeded(), WordCloudBuilder::default());
    let cloud = store.word_cloud().expect("cloud");

    assert!(cloud.contains("cat"));
    assert!(!cloud.contains("cats"));
    // "on"/"one" scores exactly 0.8 and stays split
    assert!(cloud.contains("on") && cloud.contains("one"));
    assert_eq!(cloud.get("a"), Some(1.0));
    assert_eq!(cloud.get("box"), Some((2.0f64 / 3.0).sqrt()));
    assert_eq!(cloud.get("cat"), Some((2.0f64 / 3.0).sqrt()));
    assert_eq!(cloud.get("owl"), Some((1.0f64 / 3.0).sqrt()));
}

#[test]
fn cloud_is_cached_until_next_write() {
    let mut store = MemoizedStore::new(seeded(), WordCloudBuilder::default());
    let first = store.word_cloud().expect("cloud");
    let second = store.word_cloud().expect("cloud");
    assert_eq!(first, second);

    let stats = store.stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));

    store.add_caption(3, "waves waves waves").expect("image 3");
    assert_eq!(store.stats().entries, 0);

    let third = store.word_cloud().expect("cloud");
    assert_eq!(third.get("waves"), Some(1.0));
    assert_ne!(first, third);
}

#[test]
fn image_reads_are_memoized_per_argument() {
    let mut store = MemoizedStore::new(seeded(), WordCloudBuilder::default());

    let least = store.get_least_images(LEAST_IMAGES_LIMIT).expect("least");
    let ids: Vec<i64> = least.iter().map(|i| i.image_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(store.get_least_images(1).expect("least").len(), 1);
    assert_eq!(store.stats().misses, 2);

    assert_eq!(store.get_image(2).expect("image").captions.len(), 2);
    assert_eq!(store.get_image(2).expect("image").name, "cat.jpg");
    assert_eq!(store.stats().hits, 1);

    let new_id = store.add_image("fox.jpg").expect("new image");
    assert_eq!(new_id, 4);
    assert_eq!(store.count_images(), Ok(4));
    assert_eq!(
        store.get_least_images(LEAST_IMAGES_LIMIT).expect("least")[0].image_id,
        3
    );
}

#[test]
fn cache_key_carries_arguments() {
    assert_ne!(CacheKey::Image(1), CacheKey::Image(2));
    assert_ne!(CacheKey::LeastImages(10), CacheKey::LeastImages(5));
    assert_eq!(CacheKey::Captions(7), CacheKey::Captions(7));
}

#[test]
fn yaml_file_configures_builder_and_cache() {
    let file = write_config(
        "version: \"1.0\"\n\
         name: strict\n\
         word_cloud:\n  similarity_threshold: 0.9\n\
         cache:\n  enabled: false\n",
    );
    let config = CaptionerConfig::from_file(file.path()).expect("config loads");
    assert_eq!(config.name.as_deref(), Some("strict"));

    let store = memoized_store(seeded(), &config).expect("valid config");
    assert_eq!(store.builder().config().similarity_threshold, 0.9);

    // cat/cats scores 6/7, below 0.9
    let cloud = store.word_cloud().expect("cloud");
    assert!(cloud.contains("cat") && cloud.contains("cats"));
    assert_eq!(store.stats().entries, 0);
}

#[test]
fn default_config_enables_cache() {
    let store = memoized_store(seeded(), &CaptionerConfig::default()).expect("defaults valid");
    store.count_captions().expect("count");
    store.count_captions().expect("count");
    assert_eq!(store.stats().hits, 1);
    assert_eq!(store.into_inner().count_captions(), Ok(3));
}
