// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The JSON schema of the public events feed (models.rs)
// - A single GET of /users/{username}/events (fetch.rs)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod models;

// Re-export so callers can write `github::GithubClient` etc.
pub use fetch::{ClientConfig, EventSource, FetchError, GithubClient, DEFAULT_API_BASE};
pub use models::{Commit, RawEvent};

#[cfg(test)]
pub use models::{CommitAuthor, Payload, Repo};
