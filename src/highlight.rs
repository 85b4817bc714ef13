// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Match emphasis for display text.
//!
//! Highlighting is a case-insensitive *literal* re-scan of the display
//! string against the raw query - not the fuzzy-matched term. The query is
//! regex-escaped before the pattern is built, so punctuation in user input
//! is matched literally instead of being interpreted as pattern syntax.

use regex::RegexBuilder;

/// One run of display text, marked or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Split `text` into segments, marking the parts that literally match
/// `query` (case-insensitive).
///
/// An empty or whitespace-only query, or a query with no occurrence in the
/// text, yields the whole text as a single unhighlighted segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let query = query.trim();
    if text.is_empty() || query.is_empty() {
        return vec![Segment {
            text: text.to_string(),
            highlighted: false,
        }];
    }

    // Escaped pattern over user input: "a.b*c" matches only "a.b*c"
    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(_) => {
            return vec![Segment {
                text: text.to_string(),
                highlighted: false,
            }]
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment {
                text: text[cursor..found.start()].to_string(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: found.as_str().to_string(),
            highlighted: true,
        });
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            highlighted: false,
        });
    }

    if segments.is_empty() {
        segments.push(Segment {
            text: text.to_string(),
            highlighted: false,
        });
    }

    segments
}
