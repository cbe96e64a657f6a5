//! kalimat CLI: fetch a verse corpus, suggest next words, rank documents.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::error;

use kalimat::corpus::{fetch_corpus, read_corpus, write_corpus, DEFAULT_CORPUS_URL};
use kalimat::model::NextWordModel;
use kalimat::rank::{Bm25Ranker, TfidfRanker};
use kalimat::types::KalimatResult;

#[derive(Parser)]
#[command(
    name = "kalimat",
    version,
    about = "Next-word suggestion and document ranking for Arabic text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download a verse corpus and write it one verse per line.
    Fetch {
        #[arg(long, default_value = DEFAULT_CORPUS_URL)]
        url: String,
        /// Output file path.
        #[arg(long)]
        output: PathBuf,
    },

    /// Train on a corpus file and suggest next words for a prompt.
    Suggest {
        /// Corpus file, one document per line.
        #[arg(long)]
        corpus: PathBuf,
        /// Prompt text; only its last three tokens carry context.
        #[arg(long)]
        prompt: String,
        /// Maximum number of suggestions.
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },

    /// Rank corpus documents against a query.
    Rank {
        /// Corpus file, one document per line.
        #[arg(long)]
        corpus: PathBuf,
        #[arg(long)]
        query: String,
        /// Maximum number of ranked documents.
        #[arg(long, default_value_t = 5)]
        top: usize,
        #[arg(long, value_enum, default_value = "bm25")]
        method: Method,
        /// Keep the best match even if it is the query document itself.
        #[arg(long)]
        include_top: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Bm25,
    Tfidf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> KalimatResult<()> {
    match cli.command {
        Command::Fetch { url, output } => {
            let verses = fetch_corpus(&url)?;
            write_corpus(&output, &verses)?;
            println!("wrote {} verses to {}", verses.len(), output.display());
        }

        Command::Suggest {
            corpus,
            prompt,
            limit,
        } => {
            let mut model = NextWordModel::new();
            for document in read_corpus(&corpus)? {
                model.train(&document);
            }
            let suggestions = model.suggest(&prompt, limit)?;
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }

        Command::Rank {
            corpus,
            query,
            top,
            method,
            include_top,
        } => {
            let docs = read_corpus(&corpus)?;
            let results = match method {
                Method::Bm25 => {
                    let mut ranker = Bm25Ranker::new();
                    ranker.fit(&docs);
                    ranker.top_n(&query, top, !include_top)?
                }
                Method::Tfidf => {
                    let mut ranker = TfidfRanker::new();
                    ranker.fit(&docs);
                    ranker.top_n(&query, top, !include_top)?
                }
            };
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }
    Ok(())
}
