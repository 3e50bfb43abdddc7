use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use search_cli::{run_queries, run_stats, OutputFormat};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank a small text corpus against free-text queries with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read stop words, a document count, the documents and a query, then print the top hits
    Query {
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Treat every line after the documents as a separate query
        #[arg(long, default_value_t = false)]
        all_queries: bool,
    },
    /// Load the corpus and print index statistics as JSON
    Stats {
        /// Input file (stdin when omitted)
        #[arg(long)]
        input: Option<String>,
    },
}

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>> {
    match input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("failed to open {path}"))?;
            Ok(Box::new(BufReader::new(f)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Query { input, format, all_queries } => {
            run_queries(open_input(input.as_deref())?, &mut out, format, all_queries)
        }
        Commands::Stats { input } => {
            run_stats(open_input(input.as_deref())?, &mut out).map(|_| ())
        }
    }
}
