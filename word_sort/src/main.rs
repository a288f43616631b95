use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use word_sort::{collect_words, render, SortError};

/// Prints the distinct words of INPUT in byte order, one per line.
///
/// A word is a run of ASCII letters; everything else separates words.
#[derive(Parser, Debug)]
#[command(name = "word-sort", version)]
struct Args {
    /// The text to sort. Exactly one argument is expected; it is read as raw
    /// bytes and may start with `-`.
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: Vec<OsString>,

    /// Write the words to this file instead of stdout
    #[arg(long, short, env = "WORD_SORT_OUTPUT")]
    output: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `word_tree=trace`
    #[arg(long, default_value = "warn", env = "WORD_SORT_LOG")]
    log: String,
}

fn init_logging(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter {directives:?}"))?;

    // stdout is reserved for the sorted words
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .try_init()
        .context("failed to install log subscriber")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log)?;

    let [input] = args.input.as_slice() else {
        return Err(SortError::ArgumentCount(args.input.len()).into());
    };

    let set = collect_words(input.as_encoded_bytes());
    info!(words = set.len(), "sorted input");

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| SortError::Output {
                path: path.clone(),
                source,
            })?;
            render(&set, BufWriter::new(file))?;
        }
        None => render(&set, BufWriter::new(io::stdout().lock()))?,
    }

    Ok(())
}
