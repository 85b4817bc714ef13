// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! The index builder: content sources in, one corpus file out.
//!
//! Runs once per site build. Three sources contribute, in a fixed order
//! that keeps ids and corpus positions stable across rebuilds:
//!
//! 1. the service catalog (bilingual, resolved from the message tables),
//! 2. documentation articles (`docs/*.md`, lexicographic filename order),
//! 3. static page descriptors.
//!
//! Required sources (message tables) fail the build loudly when unreadable;
//! the optional docs directory contributes zero items when absent. The
//! assembled corpus is checked against the data-model invariants before it
//! is written - a build that would emit a broken artifact must not succeed.

pub mod docs;
pub mod messages;
pub mod pages;
pub mod services;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::corpus::write_corpus;
use crate::error::BuildError;
use crate::types::SearchItem;

pub use messages::MessageTable;

/// Locale whose text becomes the display title/description.
pub const CANONICAL_LOCALE: &str = "zh";

/// Locale merged into `content` for bilingual matching.
pub const SECONDARY_LOCALE: &str = "en";

/// What a build produced, for the CLI summary and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub services: usize,
    pub docs: usize,
    pub pages: usize,
}

impl BuildSummary {
    pub fn total(&self) -> usize {
        self.services + self.docs + self.pages
    }
}

/// Build the corpus from `content_dir` and write it to `output`.
///
/// `content_dir` is expected to contain `messages/zh.json`,
/// `messages/en.json`, and optionally `docs/*.md`.
pub fn run_build(content_dir: &Path, output: &Path) -> Result<BuildSummary, BuildError> {
    let messages_dir = content_dir.join("messages");
    let canonical = MessageTable::load(&messages_dir, CANONICAL_LOCALE)?;
    let secondary = MessageTable::load(&messages_dir, SECONDARY_LOCALE)?;

    // Fail on the lookup table before emitting anything
    let required = services::required_message_keys();
    canonical.validate(&required)?;
    secondary.validate(&required)?;

    let service_items = services::service_items(&canonical, &secondary)?;
    let doc_items = docs::doc_items(&content_dir.join("docs"))?;
    let page_items = pages::page_items();

    let summary = BuildSummary {
        services: service_items.len(),
        docs: doc_items.len(),
        pages: page_items.len(),
    };

    let mut items = Vec::with_capacity(summary.total());
    items.extend(service_items);
    items.extend(doc_items);
    items.extend(page_items);
    verify_invariants(&items)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| BuildError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    write_corpus(&items, output)?;

    eprintln!(
        "✅ Build complete: {} items ({} services │ {} docs │ {} pages) → {}",
        summary.total(),
        summary.services,
        summary.docs,
        summary.pages,
        output.display()
    );

    Ok(summary)
}

/// Enforce the corpus-wide invariants: pairwise-distinct ids, relative
/// urls, capped content.
fn verify_invariants(items: &[SearchItem]) -> Result<(), BuildError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            return Err(BuildError::DuplicateId {
                id: item.id.clone(),
            });
        }
        if !item.is_well_formed() {
            return Err(BuildError::InvalidUrl {
                id: item.id.clone(),
                url: item.url.clone(),
            });
        }
    }
    Ok(())
}
