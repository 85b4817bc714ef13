// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy: loud at build time, recovered at load time.
//!
//! `BuildError` fails the build step (non-zero exit) because a broken corpus
//! artifact is worse than no artifact. `CorpusError` never reaches the host
//! UI - the engine logs it and degrades to empty results.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing the search corpus.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing message key `{key}` in locale `{locale}`")]
    MissingMessage { locale: String, key: String },

    #[error("invalid front matter in {path}")]
    InvalidFrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("duplicate item id `{id}`")]
    DuplicateId { id: String },

    #[error("item `{id}` has non-relative url `{url}`")]
    InvalidUrl { id: String, url: String },

    #[error("failed to write corpus to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while fetching or parsing a corpus at load time.
///
/// These are recovered inside the engine: the session enters `Failed`,
/// queries answer empty, and the failure is logged for operators.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus is not a valid JSON array")]
    Parse(#[from] serde_json::Error),

    #[error("corpus source unavailable: {reason}")]
    Unavailable { reason: String },
}
