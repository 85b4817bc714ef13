// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! The search engine: corpus loading and query evaluation.
//!
//! # State machine (per engine instance)
//!
//! ```text
//! Unloaded ──activate──▶ Loading ──ok──▶ Ready
//!                           │
//!                           └──err──▶ Failed   (terminal; make a new engine to retry)
//! ```
//!
//! Loading happens once, on first activation; every query after that is
//! answered synchronously from the in-memory index with no I/O. A load
//! failure is recovered locally: the engine logs it, parks in `Failed`, and
//! answers every query with an empty result list. It never panics the host
//! and never surfaces the error to callers.

use tracing::warn;

use crate::corpus::{parse_corpus, CorpusSource};
use crate::scoring::{
    combine, field_dissimilarity, CONTENT_WEIGHT, DESCRIPTION_WEIGHT, MAX_RESULTS, TAGS_WEIGHT,
    TITLE_WEIGHT,
};
use crate::types::{SearchItem, SearchResult};
use crate::utils::normalize;

/// Fetch attempts before giving up and entering `Failed`.
pub const LOAD_ATTEMPTS: usize = 2;

/// Externally observable engine state.
///
/// The host needs all four to render distinct UI: a spinner for `Loading`,
/// "no results" for `Ready` + empty, and a degraded state for `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

/// One corpus item with its searchable fields pre-normalized.
///
/// Normalization happens once at index build; queries only pay for their
/// own normalization.
struct IndexedItem {
    item: SearchItem,
    title: String,
    description: String,
    content: String,
    tags: String,
}

impl IndexedItem {
    fn new(item: SearchItem) -> Self {
        let title = normalize(&item.title);
        let description = normalize(&item.description);
        let content = normalize(&item.content);
        let tags = normalize(&item.tags.join(" "));
        Self {
            item,
            title,
            description,
            content,
            tags,
        }
    }
}

enum State {
    Unloaded,
    Loading,
    Ready(Vec<IndexedItem>),
    Failed,
}

/// Loads a corpus once and answers ranked queries over it.
pub struct SearchEngine {
    state: State,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            state: State::Unloaded,
        }
    }

    /// Build a `Ready` engine directly from items, skipping the load path.
    ///
    /// Hosts that embed the corpus (and most tests) use this.
    pub fn from_items(items: Vec<SearchItem>) -> Self {
        Self {
            state: State::Ready(items.into_iter().map(IndexedItem::new).collect()),
        }
    }

    /// Load the corpus from `source` and build the index.
    ///
    /// Idempotent: once `Ready` or `Failed`, further calls are no-ops. The
    /// fetch is retried up to [`LOAD_ATTEMPTS`] times before the engine
    /// parks in `Failed`; a parse failure is not retried (the document will
    /// not get better by reading it again).
    pub fn activate(&mut self, source: &dyn CorpusSource) -> EngineStatus {
        if !matches!(self.state, State::Unloaded) {
            return self.status();
        }
        self.state = State::Loading;

        let mut raw = None;
        for attempt in 1..=LOAD_ATTEMPTS {
            match source.fetch() {
                Ok(document) => {
                    raw = Some(document);
                    break;
                }
                Err(error) => {
                    warn!(attempt, %error, "corpus fetch failed");
                }
            }
        }

        self.state = match raw {
            Some(document) => match parse_corpus(&document) {
                Ok(items) => State::Ready(items.into_iter().map(IndexedItem::new).collect()),
                Err(error) => {
                    warn!(%error, "corpus parse failed");
                    State::Failed
                }
            },
            None => State::Failed,
        };
        self.status()
    }

    pub fn status(&self) -> EngineStatus {
        match self.state {
            State::Unloaded => EngineStatus::Unloaded,
            State::Loading => EngineStatus::Loading,
            State::Ready(_) => EngineStatus::Ready,
            State::Failed => EngineStatus::Failed,
        }
    }

    /// Answer `query` with at most [`MAX_RESULTS`] results, best first.
    ///
    /// Empty and whitespace-only queries answer empty (the host shows quick
    /// links instead). An engine that is not `Ready` answers empty too -
    /// callers never see the difference between "failed" and "nothing
    /// matched" here; they read [`status`](Self::status) for that.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let State::Ready(index) = &self.state else {
            return Vec::new();
        };
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, f64)> = index
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                let fields = [
                    (field_dissimilarity(&entry.title, &query), TITLE_WEIGHT),
                    (
                        field_dissimilarity(&entry.description, &query),
                        DESCRIPTION_WEIGHT,
                    ),
                    (field_dissimilarity(&entry.content, &query), CONTENT_WEIGHT),
                    (field_dissimilarity(&entry.tags, &query), TAGS_WEIGHT),
                ];
                combine(&fields).map(|score| (position, score))
            })
            .collect();

        // Stable sort: equal scores keep corpus insertion order
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.truncate(MAX_RESULTS);

        hits.into_iter()
            .map(|(position, score)| SearchResult {
                item: index[position].item.clone(),
                score,
            })
            .collect()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
