// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Documentation articles as corpus items.
//!
//! Each `docs/*.md` file carries YAML front matter (title, description,
//! category, tags) and a markdown body. The body is flattened to plain text
//! for matching: heading markers dropped, links unwrapped to their text,
//! emphasis and code markers dropped, newline runs collapsed - then capped
//! at [`CONTENT_CAP`] characters.
//!
//! Slugs ending in `-en` are locale-suffixed duplicates of a canonical
//! article and are skipped; the canonical article is what gets indexed.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::BuildError;
use crate::types::{ItemType, SearchItem, CONTENT_CAP};
use crate::utils::truncate_chars;

/// Category used when an article's front matter doesn't declare one.
const DEFAULT_CATEGORY: &str = "文档";

static HEADING_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static LINKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static EMPHASIS_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[*_`]").unwrap());
static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Front matter metadata; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    tags: Option<Vec<String>>,
}

/// Emit one corpus item per canonical documentation article.
///
/// A missing `docs/` directory is not an error - a site without docs just
/// contributes zero items. An unreadable file or malformed front matter
/// fails the build. Files are processed in lexicographic filename order so
/// the corpus is stable across rebuilds.
pub fn doc_items(docs_dir: &Path) -> Result<Vec<SearchItem>, BuildError> {
    if !docs_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(docs_dir).map_err(|source| BuildError::Io {
        path: docs_dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();

    let mut items = Vec::new();
    for path in files {
        let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        // Locale-suffixed duplicate; the canonical slug covers it
        if slug.ends_with("-en") {
            continue;
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| BuildError::Io {
            path: path.clone(),
            source,
        })?;
        let (front_matter, body) = split_front_matter(&raw);
        let meta: FrontMatter = match front_matter {
            Some(yaml) if !yaml.trim().is_empty() => {
                serde_yaml::from_str(yaml).map_err(|source| BuildError::InvalidFrontMatter {
                    path: path.clone(),
                    source,
                })?
            }
            _ => FrontMatter::default(),
        };

        items.push(SearchItem {
            id: format!("doc-{slug}"),
            title: meta.title.unwrap_or_else(|| slug.to_string()),
            description: meta.description.unwrap_or_default(),
            content: truncate_chars(&strip_markdown(body), CONTENT_CAP),
            url: format!("/docs/{slug}"),
            kind: ItemType::Doc,
            category: Some(meta.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string())),
            tags: meta.tags.unwrap_or_default(),
        });
    }

    Ok(items)
}

/// Split a document into its front matter block and body.
///
/// Front matter is delimited by `---` lines at the very start of the file;
/// a document without one is all body.
fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw.strip_prefix("---\n").or_else(|| raw.strip_prefix("---\r\n")) else {
        return (None, raw);
    };
    // Empty block: the closing delimiter comes immediately
    for close in ["---\n", "---\r\n"] {
        if let Some(body) = rest.strip_prefix(close) {
            return (Some(""), body);
        }
    }
    for terminator in ["\n---\n", "\n---\r\n"] {
        if let Some(end) = rest.find(terminator) {
            return (Some(&rest[..end]), &rest[end + terminator.len()..]);
        }
    }
    // Unterminated delimiter: treat the whole file as body
    (None, raw)
}

/// Flatten markdown to matchable plain text.
fn strip_markdown(body: &str) -> String {
    let text = HEADING_MARKERS.replace_all(body, "");
    let text = LINKS.replace_all(&text, "$1");
    let text = EMPHASIS_MARKERS.replace_all(&text, "");
    let text = NEWLINE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
