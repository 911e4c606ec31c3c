use std::env;
use std::fs;

use rs_wordgen_core::model::ngram_model::NGramModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Corpus file: first argument, or a default path
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/corpus.txt".to_owned());
    let corpus = fs::read_to_string(&path)?;

    // Build a 4-gram model; the corpus is read once, fully, before this
    let mut model = NGramModel::new(&corpus, 4)?;
    println!(
        "Model built from {}: {} n-grams, {} distinct m-grams",
        path,
        model.ngram_count(),
        model.mgrams().len()
    );

    // Generate 10 words of 11 characters
    // A word may come out shorter if the model runs out of evidence
    for i in 0..10 {
        println!("Generated word {}: {}", i + 1, model.generate(11)?);
    }

    Ok(())
}
