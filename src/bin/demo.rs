// Demo: pull the Options lists out of a generated form file and answer each
// one at random, the way a survey-filling bot would.

use std::error::Error;

use commentlens::CommentEntry;
use rand::seq::IndexedRandom;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const SAMPLE_FILE: &str = "demos/fields.jsonc";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::rng();
    for entry in commentlens::extract_json(SAMPLE_FILE, "//", "Options:", -1)? {
        match entry {
            CommentEntry::Decoded(Value::Array(options)) => {
                match options.choose(&mut rng) {
                    Some(Value::String(choice)) => println!("{}\n", choice),
                    Some(choice) => println!("{}\n", choice),
                    None => {}
                }
            }
            CommentEntry::Decoded(value) => println!("{}", value),
            CommentEntry::Raw(text) => println!("{}", text),
        }
    }
    Ok(())
}
