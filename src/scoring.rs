// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Everything here works in *dissimilarity* space: 0.0 is a perfect match,
//! 1.0 is no match at all, and results are sorted ascending. Two layers:
//!
//! 1. **Per-field matching** ([`field_dissimilarity`]): a field matches by
//!    whole-field equality, by literal substring containment of the query
//!    (the path CJK queries take, since Han text has no word boundaries to
//!    tokenize on), or token-by-token with a bounded edit distance. A field
//!    either matches with a score in `[0, 1]` or it doesn't.
//! 2. **Cross-field combination** ([`combine`]): the item score is a
//!    weighted product over the fields that matched within [`THRESHOLD`].
//!    Exponents are the field weights, so a title hit pulls the product
//!    down harder than an identical content hit - field weight dominates
//!    match quality of lighter fields.
//!
//! # Constants
//!
//! | Field       | Weight | Why this value |
//! |-------------|--------|----------------|
//! | title       | 0.4    | What the user sees first; near-exact title hits should win |
//! | description | 0.3    | Display text, one step removed |
//! | content     | 0.2    | Match-only body text, bilingual for services |
//! | tags        | 0.1    | Curated keywords, useful but low-signal |
//!
//! The weights sum to 1. `THRESHOLD` (0.4) gates *per-field* matching only;
//! the combined score is used for ranking, never for inclusion.

use crate::fuzzy::{levenshtein_bounded, max_distance_for};

/// Field weight for `title` matches.
pub const TITLE_WEIGHT: f64 = 0.4;

/// Field weight for `description` matches.
pub const DESCRIPTION_WEIGHT: f64 = 0.3;

/// Field weight for `content` matches.
pub const CONTENT_WEIGHT: f64 = 0.2;

/// Field weight for `tags` matches.
pub const TAGS_WEIGHT: f64 = 0.1;

/// A field matches when its dissimilarity is at or below this.
pub const THRESHOLD: f64 = 0.4;

/// Result list cap: queries answer with at most this many items.
pub const MAX_RESULTS: usize = 8;

/// Floor for the combined-score product, so an exact match (dissimilarity
/// 0.0) still ranks by field weight instead of collapsing every field to 0.
pub const MIN_DISSIMILARITY: f64 = 1e-3;

/// Dissimilarity for a literal substring hit on the whole field.
const SUBSTRING_SCORE: f64 = 0.1;

/// Dissimilarity for a substring hit at token level.
const TOKEN_SUBSTRING_SCORE: f64 = 0.15;

/// How dissimilar is `field` from `query`? `None` when the field does not
/// match at all.
///
/// Both arguments must already be normalized (see `utils::normalize`).
/// Multi-token queries use AND semantics: every query token has to find a
/// home somewhere in the field, and the field score is the mean over query
/// tokens.
pub fn field_dissimilarity(field: &str, query: &str) -> Option<f64> {
    if field.is_empty() || query.is_empty() {
        return None;
    }
    if field == query {
        return Some(0.0);
    }
    if field.contains(query) {
        return Some(SUBSTRING_SCORE);
    }

    let field_tokens: Vec<&str> = field.split(' ').collect();
    let mut total = 0.0;
    let mut count = 0usize;

    for query_token in query.split(' ').filter(|t| !t.is_empty()) {
        let best = field_tokens
            .iter()
            .filter_map(|field_token| token_dissimilarity(query_token, field_token))
            .min_by(|a, b| a.total_cmp(b))?;
        total += best;
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(total / count as f64)
}

/// Dissimilarity of one query token against one field token, if they are
/// close enough to call a match.
fn token_dissimilarity(query_token: &str, field_token: &str) -> Option<f64> {
    if query_token == field_token {
        return Some(0.0);
    }
    if field_token.contains(query_token) {
        return Some(TOKEN_SUBSTRING_SCORE);
    }

    let query_len = query_token.chars().count();
    let max = max_distance_for(query_len);
    let dist = levenshtein_bounded(query_token, field_token, max)?;
    let longest = query_len.max(field_token.chars().count());
    Some(dist as f64 / longest as f64)
}

/// Combine per-field dissimilarities into one item score.
///
/// `fields` pairs each field's dissimilarity (or `None` for no match) with
/// its weight. Only fields within [`THRESHOLD`] participate; if none do, the
/// item is not a hit. The result is `Π max(d, MIN_DISSIMILARITY)^weight`
/// over matched fields - in `(0, 1]`, lower is better.
pub fn combine(fields: &[(Option<f64>, f64)]) -> Option<f64> {
    let mut score = 1.0;
    let mut matched = false;

    for (dissimilarity, weight) in fields {
        if let Some(d) = dissimilarity {
            if *d <= THRESHOLD {
                score *= d.max(MIN_DISSIMILARITY).powf(*weight);
                matched = true;
            }
        }
    }

    matched.then_some(score)
}
