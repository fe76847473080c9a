use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use samad_core::{Mode, SamadStemmer, Stemmer, StemmerConfig};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "samad",
    about = "Light stemmer for Standard Arabic and Moroccan Arabic"
)]
struct Cli {
    /// Stemming mode: standard or dialect
    #[arg(long, env = "SAMAD_MODE")]
    mode: Option<Mode>,

    /// Path to a stemmer config file (JSON)
    #[arg(long, env = "SAMAD_CONFIG")]
    config: Option<PathBuf>,

    /// Print one JSON object per word instead of bare stems
    #[arg(long)]
    json: bool,

    /// Words to stem; read one word per line from stdin when empty
    words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct StemRecord<'a> {
    word: &'a str,
    stem: &'a str,
    mode: Mode,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => StemmerConfig::from_path(path)?,
        None => StemmerConfig::from_env_or_default()?,
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let words = if cli.words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        cli.words
    };
    info!(mode = %config.mode, words = words.len(), "stemming");

    let stemmer = SamadStemmer::from_config(&config);
    let stems = stemmer.stem_all(&words);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (word, stem) in words.iter().zip(&stems) {
        if cli.json {
            let record = StemRecord {
                word,
                stem,
                mode: stemmer.mode(),
            };
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{stem}")?;
        }
    }
    out.flush()?;
    debug!("done");
    Ok(())
}

fn read_words(input: impl BufRead) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,samad=info".into());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}
