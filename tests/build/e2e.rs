//! End-to-end tests for the build workflow.

use std::collections::HashSet;
use std::fs;

use beacon::build::{run_build, BuildSummary};
use beacon::corpus::parse_corpus;
use beacon::error::BuildError;
use beacon::types::CONTENT_CAP;
use beacon::SearchEngine;
use tempfile::TempDir;

use crate::common::{write_content_fixture, write_content_fixture_without_docs};

#[test]
fn build_produces_expected_counts() {
    let content = write_content_fixture();
    let out = TempDir::new().unwrap();
    let output = out.path().join("search-index.json");

    let summary = run_build(content.path(), &output).unwrap();
    assert_eq!(
        summary,
        BuildSummary {
            services: 3,
            docs: 3, // privacy-policy-en.md is skipped
            pages: 5,
        }
    );
    assert!(output.exists());

    let items = parse_corpus(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(items.len(), summary.total());
}

#[test]
fn build_output_satisfies_corpus_invariants() {
    let content = write_content_fixture();
    let out = TempDir::new().unwrap();
    let output = out.path().join("search-index.json");
    run_build(content.path(), &output).unwrap();

    let items = parse_corpus(&fs::read_to_string(&output).unwrap()).unwrap();

    // Pairwise-distinct ids
    let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids.len(), items.len());

    for item in &items {
        assert!(item.url.starts_with('/'), "{}: url {}", item.id, item.url);
        assert!(
            item.content.chars().count() <= CONTENT_CAP,
            "{}: content over cap",
            item.id
        );
    }
}

#[test]
fn build_ids_are_stable_across_rebuilds() {
    let content = write_content_fixture();
    let out = TempDir::new().unwrap();
    let first_path = out.path().join("first.json");
    let second_path = out.path().join("second.json");

    run_build(content.path(), &first_path).unwrap();
    run_build(content.path(), &second_path).unwrap();

    assert_eq!(
        fs::read_to_string(&first_path).unwrap(),
        fs::read_to_string(&second_path).unwrap()
    );
}

#[test]
fn locale_suffixed_docs_are_not_indexed() {
    let content = write_content_fixture();
    let out = TempDir::new().unwrap();
    let output = out.path().join("search-index.json");
    run_build(content.path(), &output).unwrap();

    let items = parse_corpus(&fs::read_to_string(&output).unwrap()).unwrap();
    assert!(items.iter().any(|item| item.id == "doc-privacy-policy"));
    assert!(!items.iter().any(|item| item.id == "doc-privacy-policy-en"));
}

#[test]
fn missing_docs_directory_is_not_an_error() {
    let content = write_content_fixture_without_docs();
    let out = TempDir::new().unwrap();
    let output = out.path().join("search-index.json");

    let summary = run_build(content.path(), &output).unwrap();
    assert_eq!(summary.docs, 0);
    assert_eq!(summary.total(), 8); // 3 services + 5 pages
}

#[test]
fn missing_message_tables_fail_the_build() {
    let content = TempDir::new().unwrap(); // no messages/ at all
    let out = TempDir::new().unwrap();
    let result = run_build(content.path(), &out.path().join("search-index.json"));
    assert!(matches!(result, Err(BuildError::Io { .. })));
}

#[test]
fn missing_translation_key_fails_the_build() {
    let content = write_content_fixture();
    // Drop one details key from the secondary locale
    let en_path = content.path().join("messages/en.json");
    let mut en: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&en_path).unwrap()).unwrap();
    en["services"]["agent-development"]
        .as_object_mut()
        .unwrap()
        .remove("details");
    fs::write(&en_path, serde_json::to_string(&en).unwrap()).unwrap();

    let out = TempDir::new().unwrap();
    let result = run_build(content.path(), &out.path().join("search-index.json"));
    match result {
        Err(BuildError::MissingMessage { locale, key }) => {
            assert_eq!(locale, "en");
            assert_eq!(key, "services.agent-development.details");
        }
        other => panic!("expected MissingMessage, got {other:?}"),
    }
}

#[test]
fn built_corpus_answers_queries_in_both_languages() {
    let content = write_content_fixture();
    let out = TempDir::new().unwrap();
    let output = out.path().join("search-index.json");
    run_build(content.path(), &output).unwrap();

    let items = parse_corpus(&fs::read_to_string(&output).unwrap()).unwrap();
    let engine = SearchEngine::from_items(items);

    // zh display text
    let results = engine.search("常见问题");
    assert_eq!(results[0].item.id, "doc-faq");

    // en text only exists in merged service content
    let results = engine.search("inference optimization");
    assert!(results
        .iter()
        .any(|r| r.item.id == "service-model-deployment"));

    // Static pages are findable too
    let results = engine.search("应用商店");
    assert!(results.iter().any(|r| r.item.id == "page-store"));
}
