use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textrank_summarizer::bridge::NativeHost;
use textrank_summarizer::{Summarizer, SummarizerConfig};

/// Summarize text by extracting its most central sentences
#[derive(Debug, Parser)]
#[command(name = "textrank-summarize", version, about)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Number of sentences to keep
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// Truncate input longer than this many characters
    #[arg(long)]
    max_input_length: Option<usize>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the detailed summary as JSON
    #[arg(long)]
    json: bool,

    /// Serve native-messaging requests on stdin/stdout
    #[arg(long, conflicts_with_all = ["input", "json"])]
    native_host: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries summaries and native-messaging frames
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SummarizerConfig::from_json(&json)
                .map_err(|e| anyhow!("invalid config {}: {}", path.display(), e.detail()))?
        }
        None => SummarizerConfig::default(),
    };

    if let Some(n) = cli.sentences {
        config.target_sentences = n;
    }
    if let Some(len) = cli.max_input_length {
        config.max_input_length = len;
    }
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let summarizer = Summarizer::with_config(config)
        .map_err(|e| anyhow!("invalid summarizer settings: {}", e.detail()))?;

    if cli.native_host {
        tracing::info!("serving native-messaging requests");
        let host = NativeHost::new(summarizer);
        let answered = host
            .serve(&mut io::stdin().lock(), &mut io::stdout().lock())
            .context("native-messaging stream failed")?;
        tracing::debug!(answered, "native host finished");
        return Ok(());
    }

    let text = read_input(cli.input.as_ref())?;
    let summary = summarizer.summarize_detailed(&text);

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", summary.text)?;
    }

    Ok(())
}
