// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Translation message tables for the build step.
//!
//! Messages are nested JSON objects keyed by locale
//! (`messages/zh.json`, `messages/en.json`); values are resolved by
//! dot-path, e.g. `services.model-deployment.title`. Lookups are strict: a
//! missing or non-string key is a [`BuildError::MissingMessage`], never a
//! silently-indexed fallback. Missing translations should fail the build,
//! not ship as blanks.

use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// One locale's message tree with strict dot-path lookup.
#[derive(Debug, Clone)]
pub struct MessageTable {
    locale: String,
    root: serde_json::Value,
}

impl MessageTable {
    /// Load `<dir>/<locale>.json`. An unreadable or malformed file is a
    /// build error: message tables are a required content source.
    pub fn load(dir: &Path, locale: &str) -> Result<Self, BuildError> {
        let path = dir.join(format!("{locale}.json"));
        let raw = fs::read_to_string(&path).map_err(|source| BuildError::Io {
            path: path.clone(),
            source,
        })?;
        let root = serde_json::from_str(&raw).map_err(|source| BuildError::InvalidJson {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            locale: locale.to_string(),
            root,
        })
    }

    /// Build a table from an already-parsed tree (tests mostly).
    pub fn from_value(locale: &str, root: serde_json::Value) -> Self {
        Self {
            locale: locale.to_string(),
            root,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolve a dot-path to its string value.
    pub fn get(&self, key: &str) -> Result<&str, BuildError> {
        let mut value = &self.root;
        for part in key.split('.') {
            match value.get(part) {
                Some(child) => value = child,
                None => return Err(self.missing(key)),
            }
        }
        value.as_str().ok_or_else(|| self.missing(key))
    }

    /// Check that every key in `keys` resolves, reporting the first miss.
    ///
    /// Run before item generation so a build fails on the lookup table, not
    /// halfway through emitting items.
    pub fn validate(&self, keys: &[String]) -> Result<(), BuildError> {
        for key in keys {
            self.get(key)?;
        }
        Ok(())
    }

    fn missing(&self, key: &str) -> BuildError {
        BuildError::MissingMessage {
            locale: self.locale.clone(),
            key: key.to_string(),
        }
    }
}
