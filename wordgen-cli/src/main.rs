use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordgen_core::model::ngram_model::NgramModel;

/// Train a word n-gram model on a text file and generate text from it.
#[derive(Parser, Debug)]
#[command(name = "wordgen")]
struct Args {
    /// Text file to train on
    corpus: PathBuf,

    /// Order of the model (context length + 1)
    #[arg(short = 'n', long, default_value_t = 4)]
    order: usize,

    /// Number of tokens to generate
    #[arg(short, long, default_value_t = 100)]
    tokens: usize,

    /// Seed for the random source; omit for a different text on every run
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Splits a raw corpus on the `.` character and puts a `.` back at the end
/// of every fragment.
///
/// This is the convention the model is trained with: a text ending in `.`
/// produces a final sentence of just `"."`, and each `.` of an ellipsis or
/// abbreviation closes a sentence of its own.
fn split_into_sentences(text: &str) -> Vec<String> {
    text.split('.').map(|fragment| format!("{fragment}.")).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.corpus)?;
    let sentences = split_into_sentences(&text);

    let start = Instant::now();
    let mut model = NgramModel::new(args.order)?;
    for sentence in &sentences {
        model.update(sentence);
    }
    log::info!(
        "trained on {} sentences: {} contexts, {} distinct ngrams",
        sentences.len(),
        model.context_count(),
        model.ngram_count()
    );
    println!(
        "Language model creating time: {:.3}s",
        start.elapsed().as_secs_f64()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    println!("{}", "=".repeat(50));
    println!("Generated text:");
    println!("{}", model.generate_text(args.tokens, &mut rng));
    println!("{}", "=".repeat(50));

    Ok(())
}
