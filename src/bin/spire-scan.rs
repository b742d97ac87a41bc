//! Command-line front end: print the reply the bot would post for some text.
//!
//! ```text
//! spire-scan --corpus data.yml "Is [[bash]] better than [[pommel strike]]?"
//! echo "[[anchor]]" | spire-scan --config spire.toml --footer
//! spire-scan --corpus data.yml --write-snapshot corpus.bin
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};

use spire_scan::{unescape_brackets, Corpus, ReplyBuilder, ScanConfig};

#[derive(Parser, Debug)]
#[command(name = "spire-scan", version, about = "Look up [[Slay the Spire]] references in text")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus file (YAML, or a .bin snapshot); overrides the config
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Similarity floor; overrides the config
    #[arg(long)]
    min_similarity: Option<f64>,

    /// Corpus date shown in the footer; overrides the config
    #[arg(long)]
    data_date: Option<String>,

    /// Append the signature footer to non-empty replies
    #[arg(long)]
    footer: bool,

    /// Write the loaded corpus as a binary snapshot and exit
    #[arg(long, value_name = "FILE")]
    write_snapshot: Option<PathBuf>,

    /// Text to scan; read from stdin when omitted
    text: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    if let Some(path) = cli.corpus {
        config = config.with_corpus_path(path);
    }
    if let Some(min_similarity) = cli.min_similarity {
        config = config.with_min_similarity(min_similarity);
    }
    if let Some(date) = cli.data_date {
        config = config.with_data_date(date);
    }

    let Some(corpus_path) = config.corpus_path.clone() else {
        bail!("no corpus given (use --corpus or set corpus_path in the config)");
    };
    let corpus = Corpus::load(&corpus_path)
        .with_context(|| format!("Failed to load corpus {}", corpus_path.display()))?;

    if let Some(out) = cli.write_snapshot {
        corpus
            .save_snapshot(&out)
            .with_context(|| format!("Failed to write snapshot {}", out.display()))?;
        info!(path = %out.display(), entities = corpus.len(), "wrote snapshot");
        return Ok(());
    }

    let text = if cli.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read text from stdin")?;
        buf
    } else {
        cli.text.join(" ")
    };

    let builder = ReplyBuilder::new()
        .with_match_config(config.matching.clone())
        .with_config(config.reply.clone());
    let reply = builder.build(&unescape_brackets(&text), &corpus);

    if reply.is_empty() {
        info!("no references matched");
        return Ok(());
    }

    let reply = if cli.footer {
        config
            .footer()
            .sign(&reply, config.reply.max_blocks, &config.reply.line_separator)
    } else {
        reply
    };
    println!("{}", reply);
    Ok(())
}
