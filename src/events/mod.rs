// src/events/mod.rs
// =============================================================================
// This module turns the raw feed into something a person can read.
//
// Submodules:
// - transform: Filters raw events and parses their timestamps
// - display: Prints the result as text or JSON
// =============================================================================

mod display;
mod transform;

pub use display::{render_json, render_text};
pub use transform::{transform, TransformOptions};
