use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use review_bayes::{Class, ClassScores, Classifier, ClassifierConfig, Dataset, Tokenizer};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tab-separated training file: `sentence<TAB>label` per line
    #[arg(short, long)]
    dataset: PathBuf,

    /// JSON file with a classifier configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File with one stopword per line, replacing the English defaults
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Skip the class-independent per-token score normalization
    #[arg(long)]
    no_normalization: bool,

    /// Fail unless every class has training examples
    #[arg(long)]
    require_every_class: bool,

    /// Fail on malformed dataset lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the four raw scores after each prediction
    #[arg(short, long)]
    scores: bool,

    /// Print one JSON object per sentence
    #[arg(long)]
    json: bool,

    /// Sentences to classify; read from stdin, one per line, when absent
    sentences: Vec<String>,
}

#[derive(Serialize)]
struct Prediction<'a> {
    sentence: &'a str,
    class: Class,
    scores: ClassScores,
}

fn load_config(args: &Args) -> Result<ClassifierConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config file {:?}", path))?
        }
        None => ClassifierConfig::default(),
    };
    if args.no_normalization {
        config.evidence_normalization = false;
    }
    if args.require_every_class {
        config.require_every_class = true;
    }
    Ok(config)
}

fn load_tokenizer(args: &Args) -> Result<Tokenizer> {
    match &args.stopwords {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read stopword file {:?}", path))?;
            Ok(Tokenizer::with_stopwords(raw.lines()))
        }
        None => Ok(Tokenizer::default()),
    }
}

fn read_sentences(args: &Args) -> Result<Vec<String>> {
    if !args.sentences.is_empty() {
        return Ok(args.sentences.clone());
    }
    let mut sentences = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            sentences.push(line.to_string());
        }
    }
    Ok(sentences)
}

fn print_prediction(args: &Args, sentence: &str, class: Class, scores: ClassScores) -> Result<()> {
    if args.json {
        let prediction = Prediction {
            sentence,
            class,
            scores,
        };
        println!("{}", serde_json::to_string(&prediction)?);
        return Ok(());
    }

    println!("\"{}\" is about {}", sentence, class);
    if args.scores {
        for (class, score) in scores.iter() {
            println!("    {:<8} {:e}", class, score);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start_time = Instant::now();
    let config = load_config(&args)?;
    let tokenizer = load_tokenizer(&args)?;
    let dataset = Dataset::from_path(&args.dataset, args.strict)
        .with_context(|| format!("Failed to load dataset {:?}", args.dataset))?;

    let classifier = Classifier::builder()
        .with_config(config)
        .with_tokenizer(tokenizer)
        .add_examples(dataset.into_examples())
        .build()
        .context("Failed to train classifier")?;
    info!("Classifier trained in {:.2?}: {:?}", start_time.elapsed(), classifier.info());

    let sentences = read_sentences(&args)?;
    info!("=== Running Classifications ({} inputs) ===", sentences.len());
    for sentence in &sentences {
        let (class, scores) = classifier
            .predict(sentence)
            .with_context(|| format!("Failed to classify {:?}", sentence))?;
        print_prediction(&args, sentence, class, scores)?;
    }

    Ok(())
}
