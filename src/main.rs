use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use origin_rewrite::InvokeConfig;

#[derive(Parser, Debug)]
#[command(name = "origin-rewrite")]
#[command(about = "Edge origin-request hook that resolves directory URIs to index.html", long_about = None)]
struct Args {
    /// Path to configuration file (optional)
    #[arg(short, long, default_value = "origin-rewrite.config.yml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the hook against an origin-request event and print the returned request
    Handle {
        /// Event JSON file (reads stdin if omitted or "-")
        event: Option<PathBuf>,
    },
    /// Print the normalized form of each URI
    Rewrite {
        #[arg(required = true)]
        uris: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = InvokeConfig::load(&args.config)?;

    // Initialize tracing subscriber; stdout carries the hook's output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::NONE)
        .init();

    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::Handle { event } => {
            origin_rewrite::run_handle(event.as_deref(), &config, &mut stdout)
        }
        Command::Rewrite { uris } => origin_rewrite::run_rewrite(&uris, &mut stdout),
    }
}
