// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's public events from GitHub (one request)
// 3. Filter/transform them into display events
// 4. Print them
// 5. Exit with proper code (0 = success, 1 = usage error, 2 = error)
//
// Each step finishes completely before the next one starts; there is no
// concurrency here, so we only need tokio's single-threaded runtime.
//
// Rust concepts used:
// - async/await: The HTTP request is async (reqwest)
// - Generics: run() works with any EventSource, so tests can fake GitHub
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod events;  // src/events/ - transforming and printing events
mod github;  // src/github/ - talking to the GitHub API

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use github::{EventSource, GithubClient};

const USAGE: &str = "Usage: gh-activity <username>";

// current_thread: one request, nothing to run in parallel
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match start(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole chain: "context: cause: cause..."
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so they never mix with the summary on stdout
fn init_logging(verbose: bool) {
    let filter = if verbose { "gh_activity=debug,warn" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

// Wires the real GitHub client and stdout into run()
async fn start(cli: &Cli) -> Result<i32> {
    let source = GithubClient::new(&cli.client_config())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(cli, &source, &mut out).await
}

// This is the main application logic
// Returns:
//   Ok(0) = events printed (possibly none)
//   Ok(1) = no username given, usage printed, nothing fetched
//   Err = fetching or printing failed
async fn run<S: EventSource>(cli: &Cli, source: &S, out: &mut impl Write) -> Result<i32> {
    let Some(username) = cli.username() else {
        writeln!(out, "{}", USAGE)?;
        return Ok(1);
    };

    let raw = source
        .fetch_events(username)
        .await
        .with_context(|| format!("could not fetch events for '{}'", username))?;

    debug!(count = raw.len(), "received events");

    let transformed = events::transform(raw, &cli.transform_options());

    if !transformed.skipped.is_empty() {
        debug!(
            skipped = transformed.skipped.len(),
            "dropped events with unparseable timestamps"
        );
    }

    let written = if cli.json {
        events::render_json(&transformed.events, out)
    } else {
        events::render_text(&transformed.events, out)
    };
    written.context("failed to write output")?;

    out.flush()?;
    Ok(0)
}
