// src/github/models.rs
// =============================================================================
// This module describes the JSON returned by the GitHub events endpoint:
//
//   GET https://api.github.com/users/{username}/events
//
// Each element of the returned array is one RawEvent. We only declare the
// fields we care about; serde silently ignores the rest.
//
// Leniency:
// - Every struct is marked #[serde(default)], so a missing field becomes an
//   empty string / zero / None instead of a decode error
// - Fields that are present but null get the same treatment (null_as_default)
// - The only thing that fails decoding is a body that is not an array of
//   objects (or has a field of the wrong JSON type)
//
// Rust concepts:
// - serde derive: Generates the JSON decoding code for us
// - #[serde(rename = "...")]: Maps a JSON key that is a Rust keyword ("type")
// - Option<T>: For fields that only some event types carry
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};

// Reads a JSON null as the field's default value.
//
// #[serde(default)] only covers keys that are missing; a key that is present
// with a null value would otherwise fail the whole array.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// One entry from a user's public event feed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Event type tag, e.g. "PushEvent", "WatchEvent", "MemberEvent"
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub event_type: String,
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    pub actor: Actor,
    #[serde(deserialize_with = "null_as_default")]
    pub repo: Repo,
    #[serde(deserialize_with = "null_as_default")]
    pub payload: Payload,
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    pub public: bool,
    /// RFC3339 timestamp, kept as a string until the transform step parses it
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

// The user who performed the action
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[allow(dead_code)]
pub struct Actor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_login: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
}

// The repository the event happened on
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Repo {
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// "owner/name"
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

// The payload shape depends on the event type. We only model the parts the
// summary uses: an action verb, a commit list (PushEvent), and a member
// record (MemberEvent).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub action: Option<String>,
    pub commits: Option<Vec<Commit>>,
    #[allow(dead_code)]
    pub member: Option<Member>,
}

// A commit summary inside a PushEvent payload
//
// Also serialized as part of the --json output, hence Serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    /// Full commit hash (normally 40 hex characters)
    #[serde(deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: CommitAuthor,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

// The user added to / removed from a repository in a MemberEvent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[allow(dead_code)]
pub struct Member {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. #[serde(default)] vs deserialize_with = "null_as_default"?
//    - default: used when the key is MISSING from the JSON object
//    - null_as_default: used when the key is there but its value is null
//    - Together they make every field forgiving, like the GitHub docs expect
//
// 2. Why Option<String> for action but String for name?
//    - Option says "this may genuinely not exist for some event types"
//    - Plain String fields just fall back to "" when absent
//
// 3. What does #[allow(dead_code)] do here?
//    - We decode some fields (actor, ids, urls) that the summary never reads
//    - Without it, the compiler warns that they're never used
// -----------------------------------------------------------------------------
