// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search corpus.
//!
//! A corpus is a flat JSON array of [`SearchItem`]s, produced once per site
//! build and read-only for the engine's lifetime. The wire schema is the
//! contract between the builder (build time) and the engine (request time):
//!
//! ```json
//! { "id": "doc-faq", "title": "...", "description": "...", "content": "...",
//!   "url": "/docs/faq", "type": "doc", "category": "...", "tags": ["..."] }
//! ```
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - `id` is unique across the whole corpus and stable across rebuilds
//!   (derived from source type + source identifier).
//! - `content.chars().count() <= CONTENT_CAP` - truncation, never an error.
//! - `url` is a site-relative path starting with `/`; the host prepends the
//!   active locale at navigation time.
//!
//! The builder enforces all three loudly; the engine-side loader only skips
//! offenders (see `corpus.rs`).

use serde::{Deserialize, Serialize};

/// Maximum `content` length in characters. Long doc bodies are truncated to
/// this cap at build time to keep the corpus file small.
pub const CONTENT_CAP: usize = 1000;

/// Which content source produced an item.
///
/// This is a closed set: it contains exactly the types the builder emits.
/// Anything else in a corpus file is rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Service,
    Doc,
    Page,
}

impl ItemType {
    /// Lowercase wire name, matching the serde `rename_all` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Service => "service",
            ItemType::Doc => "doc",
            ItemType::Page => "page",
        }
    }
}

/// One discoverable unit of content.
///
/// `title` and `description` are display strings in the canonical locale;
/// `content` is match-only text (bilingual for services, flattened markdown
/// for docs) and is never shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchItem {
    /// Does this item satisfy the corpus invariants on its own?
    ///
    /// Uniqueness is a whole-corpus property and is checked by the builder;
    /// this covers the per-item part (non-empty id, relative url, capped
    /// content).
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && self.url.starts_with('/')
            && self.content.chars().count() <= CONTENT_CAP
    }
}

/// An `(item, score)` pair produced transiently per query.
///
/// Scores are dissimilarities: 0.0 is a perfect match and results are
/// ordered ascending, best first. Not persisted anywhere.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub item: SearchItem,
    pub score: f64,
}
