// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The whole interface is:
//
//   gh-activity [OPTIONS] <USERNAME>
//
// The flags let one program cover both ways of looking at the feed:
// - default: every event type, with the commits of each push
// - --push-only: push events only, no commit detail
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: The username can be missing, and we handle that ourselves
// =============================================================================

use std::time::Duration;

use clap::Parser;

use crate::events::TransformOptions;
use crate::github::{ClientConfig, DEFAULT_API_BASE};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version,
    about = "Summarize a GitHub user's recent public activity",
    long_about = "gh-activity fetches a user's public event feed from the GitHub API \
                  and prints one line per event, with the commits of each push."
)]
pub struct Cli {
    /// GitHub username whose public events to show
    ///
    /// Optional as far as clap is concerned: if it's missing we print our
    /// own usage line and exit 1 before touching the network.
    pub username: Option<String>,

    /// Only show events of this type (e.g. PushEvent, WatchEvent)
    ///
    /// Matching is exact and case-sensitive.
    #[arg(long = "type", value_name = "EVENT_TYPE")]
    pub event_type: Option<String>,

    /// Don't list the commits under each push
    #[arg(long)]
    pub no_commits: bool,

    /// Shorthand for --type PushEvent --no-commits
    #[arg(long, conflicts_with = "event_type")]
    pub push_only: bool,

    /// Output results in JSON format instead of text
    #[arg(long)]
    pub json: bool,

    /// Give up on the request after this many seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// GitHub API root (useful for GitHub Enterprise)
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // The username, if one was given and it isn't blank
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    // Which events to keep, based on --type / --no-commits / --push-only
    pub fn transform_options(&self) -> TransformOptions {
        if self.push_only {
            return TransformOptions::push_only();
        }

        TransformOptions {
            event_type: self.event_type.clone(),
            include_commits: !self.no_commits,
        }
    }

    // HTTP client settings, based on --api-base / --timeout
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is username an Option<String>?
//    - If it were a plain String, clap would print its own error and exit 2
//    - We want our own usage line and exit code 1, so we check it ourselves
//
// 2. What does value_parser!(u64).range(1..) do?
//    - It makes clap reject --timeout 0 with a normal error message
//    - A zero timeout would make every request fail immediately
//
// 3. Why helper methods on Cli?
//    - main.rs asks for "transform options" and "client config"
//    - It doesn't need to know which flags produce them
// -----------------------------------------------------------------------------
