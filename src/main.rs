//! Review Sentiment CLI
//!
//! Terminal front-end for the sentiment classification service.

use anyhow::Context;
use clap::{Parser, Subcommand};
use review_sentiment::{Analyzer, Config, FormView, HttpPredictionClient};
use std::io::{BufRead, IsTerminal, Read, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "review-sentiment")]
#[command(about = "Classify review text with a remote sentiment service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: search standard locations)
    #[arg(short, long)]
    config: Option<String>,

    /// Override api.base_url
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single review
    Analyze {
        /// Review text
        text: Option<String>,
        /// Read the review from stdin
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
        /// Print the form state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit one review per line; `:reset` clears, `:quit` exits
    Interactive,
    /// Show the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Analyze { text, stdin, json } => analyze(config, text, stdin, json).await,
        Commands::Interactive => interactive(config).await,
        Commands::Config => show_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path))?,
        None => Config::load_default()?,
    };

    match &cli.base_url {
        Some(url) => Ok(config.with_base_url(url.as_str())?),
        None => Ok(config),
    }
}

async fn analyze(config: Config, text: Option<String>, stdin: bool, json: bool) -> anyhow::Result<()> {
    let review = if stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        text.unwrap_or_default()
    };

    let client = HttpPredictionClient::new(&config.api)?;
    let analyzer = Analyzer::new(client);
    let view = analyzer.analyze(review).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render(std::io::stdout().is_terminal()));
    }

    let code = exit_code(&view);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Non-zero when the analysis ended in an error
fn exit_code(view: &FormView) -> i32 {
    if view.error.is_some() {
        1
    } else {
        0
    }
}

async fn interactive(config: Config) -> anyhow::Result<()> {
    let client = HttpPredictionClient::new(&config.api)?;
    tracing::info!("Using endpoint {}", client.endpoint());

    let analyzer = Analyzer::new(client);
    let color = std::io::stdout().is_terminal();

    println!("Sentiment Analysis");
    println!("Type or paste text to analyze. `:reset` starts over, `:quit` exits.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":reset" => {
                analyzer.reset();
                println!("Cleared.");
            }
            _ => {
                analyzer.set_text(line);
                let view = analyzer.submit().await;
                print!("{}", view.render(color));
                if view.over_limit {
                    println!("({} characters)", view.counter());
                }
            }
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> anyhow::Result<()> {
    println!("api.base_url       = {}", config.api.base_url);
    match config.api.timeout_secs {
        Some(secs) => println!("api.timeout_secs   = {}", secs),
        None => println!("api.timeout_secs   = (transport default)"),
    }
    if config.api.retry.is_enabled() {
        println!("api.retry.max_attempts = {}", config.api.retry.max_attempts);
        println!("api.retry.backoff_ms   = {}", config.api.retry.backoff_ms);
    } else {
        println!("api.retry          = (disabled)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_sentiment::client::{ScriptedPredictionClient, ScriptedResponse};

    #[tokio::test]
    async fn test_exit_code_success() {
        let client = ScriptedPredictionClient::new();
        client.push(ScriptedResponse::ok("Electronics", 4));

        let view = Analyzer::new(client).analyze("I loved this product").await;
        assert_eq!(exit_code(&view), 0);
    }

    #[tokio::test]
    async fn test_exit_code_request_failure() {
        let client = ScriptedPredictionClient::new().with_failures();

        let view = Analyzer::new(client).analyze("anything").await;
        assert_eq!(exit_code(&view), 1);
    }

    #[tokio::test]
    async fn test_exit_code_empty_input() {
        let view = Analyzer::new(ScriptedPredictionClient::new()).analyze("  ").await;
        assert_eq!(exit_code(&view), 1);
    }
}
