use std::error::Error;
use std::fs;

use captioner::{CaptionerConfig, WordWeight};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: captioner <captions.txt> [config.yaml]";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(captions_path) = args.next() else {
        return Err(USAGE.into());
    };
    let config = match args.next() {
        Some(path) => CaptionerConfig::from_file(path)?,
        None => CaptionerConfig::default(),
    };

    let content = fs::read_to_string(&captions_path)?;
    let captions: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let builder = config.word_cloud_builder()?;
    let cloud = builder.build(&captions);
    let entries: Vec<WordWeight> = cloud.to_entries();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
