// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! The corpus file: the sole contract between builder and engine.
//!
//! The builder serializes a `Vec<SearchItem>` as one JSON array and the
//! engine reads it back through a [`CorpusSource`]. Reading is defensive:
//! a malformed item or a duplicated id is skipped with a warning instead of
//! failing the whole load, because a half-useful search box beats a dead
//! one. The builder side stays strict - see `build::run_build`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{BuildError, CorpusError};
use crate::types::SearchItem;

/// Serialize `items` to `path` as a pretty-printed JSON array.
///
/// The file is regenerated wholesale on every build; there is no
/// incremental update or versioning.
pub fn write_corpus(items: &[SearchItem], path: &Path) -> Result<(), BuildError> {
    let json = serde_json::to_string_pretty(items).map_err(|source| BuildError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a corpus document, skipping items that fail to decode.
///
/// The array itself must parse; individual elements that are missing a
/// required field, carry an unknown type tag, violate the per-item
/// invariants, or reuse an earlier id are dropped with a warning (first
/// occurrence wins). Zero surviving items is a valid, empty corpus.
pub fn parse_corpus(raw: &str) -> Result<Vec<SearchItem>, CorpusError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    let mut items = Vec::with_capacity(values.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (position, value) in values.into_iter().enumerate() {
        let item: SearchItem = match serde_json::from_value(value) {
            Ok(item) => item,
            Err(error) => {
                warn!(position, %error, "skipping malformed corpus item");
                continue;
            }
        };
        if !item.is_well_formed() {
            warn!(id = %item.id, "skipping corpus item violating invariants");
            continue;
        }
        if !seen_ids.insert(item.id.clone()) {
            warn!(id = %item.id, "skipping corpus item with duplicate id");
            continue;
        }
        items.push(item);
    }

    Ok(items)
}

/// Where the engine gets its corpus document from.
///
/// The shipped implementation reads a file; tests plug in failing or
/// in-memory sources, and a host could back this with an HTTP fetch. A
/// source that can hang is responsible for its own timeout - the engine
/// layers a bounded retry on top, nothing more.
pub trait CorpusSource {
    /// Fetch the raw corpus document.
    fn fetch(&self) -> Result<String, CorpusError>;
}

/// Corpus served from a local file, the static-site deployment shape.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for FileSource {
    fn fetch(&self) -> Result<String, CorpusError> {
        fs::read_to_string(&self.path).map_err(|source| CorpusError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
