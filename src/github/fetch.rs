// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub API.
//
// Strategy:
// - Build the URL https://api.github.com/users/{username}/events
// - Make exactly ONE GET request (no pagination, no retries, no auth)
// - Anything other than 200 OK is an error
// - Decode the body as a JSON array of RawEvent
//
// Why a trait (EventSource)?
// - The rest of the program only needs "give me the events for a user"
// - Tests can swap in a fake source and never touch the network
//
// Rust concepts:
// - async functions: For network I/O
// - Traits: To abstract over "where events come from"
// - thiserror: To give every failure mode its own enum variant
// =============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::models::RawEvent;

// Default API root. Overridable with --api-base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

// Default request timeout. Overridable with --timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// GitHub rejects API requests without a User-Agent header
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Everything that can go wrong while fetching the feed
//
// All of these end the run: there is no retry and no partial result.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured API base is not something we can append a path to
    #[error("invalid API base URL '{0}'")]
    InvalidUrl(String),

    /// reqwest refused our client settings (e.g. TLS backend failed to load)
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout, or the body stream broke
    #[error("failed to fetch GitHub events")]
    Transport(#[source] reqwest::Error),

    /// The server answered, but not with 200 OK
    #[error("non-200 response from GitHub API: {status}")]
    Upstream { status: StatusCode },

    /// The body was not a JSON array of event objects
    #[error("failed to decode JSON")]
    Decode(#[from] serde_json::Error),
}

// Settings for the real HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Anything that can produce the event feed for a username
//
// The real implementation is GithubClient; tests provide their own.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    async fn fetch_events(&self, username: &str) -> Result<Vec<RawEvent>, FetchError>;
}

// EventSource backed by the GitHub REST API
pub struct GithubClient {
    client: Client,
    api_base: Url,
}

impl GithubClient {
    // Creates the HTTP client once. Building it does not touch the network.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|_| FetchError::InvalidUrl(config.api_base.clone()))?;

        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_base.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, api_base })
    }
}

impl EventSource for GithubClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<RawEvent>, FetchError> {
        let url = events_url(&self.api_base, username)?;
        debug!(%url, "fetching events");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        // Returning early drops `response`, which closes the body stream
        check_status(response.status())?;

        let body = response.text().await.map_err(FetchError::Transport)?;
        let events = decode_events(&body)?;

        debug!(count = events.len(), "decoded events");
        Ok(events)
    }
}

// Builds {api_base}/users/{username}/events
//
// The username goes in as ONE path segment, so "a/b" or "?x" can't change
// which endpoint we hit; url escapes it for us.
//
// Example:
//   ("https://api.github.com", "octocat")
//     -> "https://api.github.com/users/octocat/events"
pub fn events_url(api_base: &Url, username: &str) -> Result<Url, FetchError> {
    let mut url = api_base.clone();

    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(api_base.to_string()))?
        .pop_if_empty()
        .extend(["users", username, "events"]);

    Ok(url)
}

// Only 200 counts as success; even other 2xx codes are rejected
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::Upstream { status })
    }
}

// Decodes a response body into the ordered list of events
pub fn decode_events(body: &str) -> Result<Vec<RawEvent>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[error("...")] do?
//    - It's from thiserror and generates the Display impl for each variant
//    - {status} inside the string refers to the variant's field
//
// 2. #[source] vs #[from]?
//    - #[source] records the underlying error so it shows up in error chains
//    - #[from] does the same AND generates a From impl, so ? converts it
//    - We can't use #[from] for reqwest::Error twice (Client and Transport)
//      because Rust wouldn't know which variant to pick
//
// 3. Why read the body as text first and then decode?
//    - So a broken connection (Transport) and bad JSON (Decode) stay
//      separate errors instead of both coming out of response.json()
// -----------------------------------------------------------------------------
