// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Selection and keyboard navigation over a result list.
//!
//! A [`QuerySession`] is one open instance of the search surface: current
//! query, the last computed result list, and a selection cursor. It turns
//! key events into at most one externally observable action - committing a
//! navigation or closing - and performs neither itself; the host receives a
//! [`SessionAction`] and does the actual page transition (prefixing the
//! active locale onto the url) or teardown.
//!
//! Transition table:
//!
//! | Event        | Effect                                                  |
//! |--------------|---------------------------------------------------------|
//! | query change | recompute results, `selected = 0`                       |
//! | ArrowDown    | `selected = min(selected + 1, len - 1)`, no wraparound  |
//! | ArrowUp      | `selected = max(selected - 1, 0)`, no wraparound        |
//! | Enter        | emit `Navigate` for selected result (if any), close     |
//! | Escape       | discard state, emit `Closed`                            |

use crate::engine::SearchEngine;
use crate::types::SearchResult;

/// Keys the session reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

/// Modifier state accompanying a character key, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// The global open shortcut: a letter plus a ctrl-or-meta requirement.
///
/// Defaults to Cmd/Ctrl+K. The host listens for it while the search surface
/// is mounted and opens a session on match; the predicate here is pure.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub letter: char,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self { letter: 'k' }
    }
}

impl Shortcut {
    /// Does this key event open the search surface?
    pub fn matches(&self, letter: char, modifiers: KeyModifiers) -> bool {
        (modifiers.ctrl || modifiers.meta) && letter.eq_ignore_ascii_case(&self.letter)
    }
}

/// What the host must do after an event, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Commit navigation to this site-relative url (locale prefixing is the
    /// host's job), then tear the surface down.
    Navigate { url: String },
    /// The session was dismissed without a selection.
    Closed,
}

/// Transient state for one open search surface. Discarded on close.
#[derive(Debug, Default)]
pub struct QuerySession {
    query: String,
    results: Vec<SearchResult>,
    selected: usize,
    open: bool,
}

impl QuerySession {
    /// Open a fresh session: empty query, empty results, cursor at 0.
    pub fn open() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Index of the currently selected result. Meaningful only while
    /// `results` is non-empty.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The result the cursor is on, if any.
    pub fn selected(&self) -> Option<&SearchResult> {
        self.results.get(self.selected)
    }

    /// Update the query, recompute results, and reset the cursor.
    pub fn set_query(&mut self, engine: &SearchEngine, query: &str) {
        self.query = query.to_string();
        self.results = engine.search(query);
        self.selected = 0;
    }

    /// Feed one key event through the transition table.
    pub fn handle_key(&mut self, key: Key) -> Option<SessionAction> {
        if !self.open {
            return None;
        }
        match key {
            Key::ArrowDown => {
                if !self.results.is_empty() {
                    self.selected = (self.selected + 1).min(self.results.len() - 1);
                }
                None
            }
            Key::ArrowUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Key::Enter => {
                let url = self.selected().map(|result| result.item.url.clone())?;
                self.close();
                Some(SessionAction::Navigate { url })
            }
            Key::Escape => {
                self.close();
                Some(SessionAction::Closed)
            }
        }
    }

    /// Discard all transient state and mark the session closed.
    pub fn close(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = 0;
        self.open = false;
    }
}
