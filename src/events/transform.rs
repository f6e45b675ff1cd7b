// src/events/transform.rs
// =============================================================================
// This module turns raw GitHub events into the simpler records we print.
//
// How it works (one pass, in feed order):
// 1. If a type filter is set, skip events of any other type
// 2. Parse created_at as RFC3339
//    - On failure: log a warning, remember the error, drop the event
//    - One bad date never aborts the rest of the batch
// 3. Copy type, repo name and action across
// 4. Copy the commit list too, unless commit detail is turned off
//
// Nothing is sorted or de-duplicated: output order == feed order.
//
// Rust concepts:
// - chrono::DateTime: A parsed point in time instead of a string
// - Consuming iterators: into_iter() moves the raw events so we can reuse
//   their Strings without cloning
// =============================================================================

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::github::{Commit, RawEvent};

// Event type kept by the push-only preset
pub const PUSH_EVENT: &str = "PushEvent";

// Which events to keep and how much detail to carry
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Keep only events whose type is exactly this (None = keep everything)
    pub event_type: Option<String>,
    /// Carry each event's commit list through to the output
    pub include_commits: bool,
}

impl Default for TransformOptions {
    // Everything, with commits
    fn default() -> Self {
        Self {
            event_type: None,
            include_commits: true,
        }
    }
}

impl TransformOptions {
    // Push events only, without commit detail
    pub fn push_only() -> Self {
        Self {
            event_type: Some(PUSH_EVENT.to_string()),
            include_commits: false,
        }
    }

    fn keeps(&self, event_type: &str) -> bool {
        self.event_type.as_deref().map_or(true, |wanted| wanted == event_type)
    }
}

// An event ready to be printed
//
// Unlike RawEvent, created_at is guaranteed to be a valid timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<FixedOffset>,
    pub repo_name: String,
    pub action: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<Commit>,
}

// An event that was dropped because its timestamp didn't parse
#[derive(Debug, Clone, Error)]
#[error("error parsing time for event ({event_type}): {value:?}: {source}")]
pub struct TimestampParseError {
    pub event_type: String,
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

// Result of a transform: the surviving events plus what got dropped
#[derive(Debug, Default)]
pub struct Transformed {
    pub events: Vec<DisplayEvent>,
    pub skipped: Vec<TimestampParseError>,
}

// Maps raw events to display events, preserving order
pub fn transform(raw: Vec<RawEvent>, options: &TransformOptions) -> Transformed {
    let mut out = Transformed::default();

    for event in raw {
        if !options.keeps(&event.event_type) {
            continue;
        }

        match to_display(event, options.include_commits) {
            Ok(display) => out.events.push(display),
            Err(e) => {
                warn!("{}", e);
                out.skipped.push(e);
            }
        }
    }

    out
}

fn to_display(event: RawEvent, include_commits: bool) -> Result<DisplayEvent, TimestampParseError> {
    let created_at = match DateTime::parse_from_rfc3339(&event.created_at) {
        Ok(ts) => ts,
        Err(source) => {
            return Err(TimestampParseError {
                event_type: event.event_type,
                value: event.created_at,
                source,
            })
        }
    };

    let commits = if include_commits {
        event.payload.commits.unwrap_or_default()
    } else {
        Vec::new()
    };

    Ok(DisplayEvent {
        event_type: event.event_type,
        created_at,
        repo_name: event.repo.name,
        action: event.payload.action.unwrap_or_default(),
        commits,
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does transform() take Vec<RawEvent> and not &[RawEvent]?
//    - Taking ownership lets us move each String into the DisplayEvent
//    - With a slice we'd have to .clone() every field instead
//
// 2. What is map_or(true, ...)?
//    - On an Option: None -> the default (true), Some(x) -> the closure's answer
//    - Here: no filter keeps everything, a filter keeps only exact matches
//
// 3. Why return the skipped errors as well as logging them?
//    - Logging is for the person running the tool
//    - The Vec is for code (and tests) that wants to know what got dropped
//
// 4. What is DateTime<FixedOffset>?
//    - A point in time plus the UTC offset it was written with
//    - "2024-01-02T03:04:05+02:00" keeps its +02:00, so we print 03:04:05
// -----------------------------------------------------------------------------
