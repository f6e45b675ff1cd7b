// src/events/display.rs
// =============================================================================
// This module prints display events, either as text or as JSON.
//
// Text layout:
//
//   GitHub Events Summary:
//   ======================
//   - PushEvent | 2024-01-02 03:04:05 | Repo: octo/repo | Action:
//     Commits:
//       - abcdef1: fix bug (Jane)
//
// Both renderers write to any `impl Write`, so main passes stdout and the
// tests pass a Vec<u8>.
// =============================================================================

use std::io::{self, Write};

use super::transform::DisplayEvent;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SHORT_SHA_LEN: usize = 7;

// Writes the human-readable summary
pub fn render_text(events: &[DisplayEvent], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "GitHub Events Summary:")?;
    writeln!(out, "======================")?;

    if events.is_empty() {
        writeln!(out, "No events found.")?;
        return Ok(());
    }

    for event in events {
        writeln!(
            out,
            "- {} | {} | Repo: {} | Action: {}",
            event.event_type,
            event.created_at.format(TIMESTAMP_FORMAT),
            event.repo_name,
            event.action,
        )?;

        if !event.commits.is_empty() {
            writeln!(out, "  Commits:")?;
            for commit in &event.commits {
                writeln!(
                    out,
                    "    - {}: {} ({})",
                    short_sha(&commit.sha),
                    commit.message,
                    commit.author.name,
                )?;
            }
        }
    }

    Ok(())
}

// Writes the events as a pretty-printed JSON array
pub fn render_json(events: &[DisplayEvent], out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, events)?;
    writeln!(out)
}

// First 7 characters of a commit hash, like `git log --oneline`.
// Anything shorter is returned whole.
pub fn short_sha(sha: &str) -> &str {
    sha.char_indices()
        .nth(SHORT_SHA_LEN)
        .map_or(sha, |(end, _)| &sha[..end])
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `&mut impl Write`?
//    - "A mutable reference to some type that implements std::io::Write"
//    - Stdout, files and Vec<u8> all implement Write
//    - So the same function prints to the terminal or into a test buffer
//
// 2. What does writeln!(out, ...) return?
//    - An io::Result<()>, because writing can fail (e.g. a closed pipe)
//    - The ? passes that failure up to the caller
//
// 3. Why char_indices() in short_sha instead of &sha[..7]?
//    - Rust strings are UTF-8, and slicing counts BYTES, not characters
//    - Slicing through the middle of a character panics
//    - char_indices() gives the byte offset of each character, so we cut
//      at a real character boundary
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Commit, CommitAuthor};
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn event(event_type: &str, ts: &str, repo: &str, action: &str, commits: Vec<Commit>) -> DisplayEvent {
        DisplayEvent {
            event_type: event_type.to_string(),
            created_at: DateTime::parse_from_rfc3339(ts).unwrap(),
            repo_name: repo.to_string(),
            action: action.to_string(),
            commits,
        }
    }

    fn commit(sha: &str, message: &str, author: &str) -> Commit {
        Commit {
            sha: sha.to_string(),
            author: CommitAuthor {
                name: author.to_string(),
            },
            message: message.to_string(),
        }
    }

    fn render(events: &[DisplayEvent]) -> String {
        let mut buf = Vec::new();
        render_text(events, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_push_event_with_commit() {
        let events = vec![event(
            "PushEvent",
            "2024-01-02T03:04:05Z",
            "octo/repo",
            "",
            vec![commit("abcdef1234567", "fix bug", "Jane")],
        )];

        // Note the trailing space after "Action:" when the action is empty
        let expected = concat!(
            "GitHub Events Summary:\n",
            "======================\n",
            "- PushEvent | 2024-01-02 03:04:05 | Repo: octo/repo | Action: \n",
            "  Commits:\n",
            "    - abcdef1: fix bug (Jane)\n",
        );
        assert_eq!(render(&events), expected);
    }

    #[test]
    fn test_render_without_commits() {
        let events = vec![
            event("WatchEvent", "2023-12-31T23:59:59Z", "rust-lang/rust", "started", vec![]),
            event("IssuesEvent", "2024-02-29T12:00:00Z", "octo/repo", "opened", vec![]),
        ];

        let expected = "\
GitHub Events Summary:
======================
- WatchEvent | 2023-12-31 23:59:59 | Repo: rust-lang/rust | Action: started
- IssuesEvent | 2024-02-29 12:00:00 | Repo: octo/repo | Action: opened
";
        assert_eq!(render(&events), expected);
    }

    #[test]
    fn test_render_uses_original_offset() {
        let events = vec![event("PushEvent", "2024-01-02T03:04:05-05:00", "a/b", "", vec![])];
        assert!(render(&events).contains("| 2024-01-02 03:04:05 |"));
    }

    #[test]
    fn test_render_empty() {
        let expected = "\
GitHub Events Summary:
======================
No events found.
";
        assert_eq!(render(&[]), expected);
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(short_sha("abcdef1234567890abcdef1234567890abcdef12"), "abcdef1");
        assert_eq!(short_sha("abcdef1"), "abcdef1");
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha(""), "");
        // 'é' is two bytes; we count characters, not bytes
        assert_eq!(short_sha("abcdefé12"), "abcdefé");
        assert_eq!(short_sha("abcdefé"), "abcdefé");
    }

    #[test]
    fn test_render_short_sha_does_not_panic() {
        let events = vec![event(
            "PushEvent",
            "2024-01-02T03:04:05Z",
            "a/b",
            "",
            vec![commit("abc", "tiny", "Jane")],
        )];
        assert!(render(&events).contains("    - abc: tiny (Jane)\n"));
    }

    #[test]
    fn test_render_json() {
        let events = vec![
            event(
                "PushEvent",
                "2024-01-02T03:04:05Z",
                "octo/repo",
                "",
                vec![commit("abcdef1234567", "fix bug", "Jane")],
            ),
            event("WatchEvent", "2024-01-03T00:00:00Z", "a/b", "started", vec![]),
        ];

        let mut buf = Vec::new();
        render_json(&events, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value[0]["type"], "PushEvent");
        let created_at = value[0]["created_at"].as_str().unwrap();
        assert_eq!(
            DateTime::parse_from_rfc3339(created_at).unwrap(),
            events[0].created_at
        );
        assert_eq!(value[0]["repo_name"], "octo/repo");
        assert_eq!(value[0]["commits"][0]["sha"], "abcdef1234567");
        assert_eq!(value[0]["commits"][0]["author"]["name"], "Jane");
        assert!(value[1].get("commits").is_none());
    }
}
