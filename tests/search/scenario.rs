//! The canonical end-to-end scenario: one CJK doc, three query shapes.

use beacon::types::{ItemType, SearchItem};
use beacon::SearchEngine;

fn faq_corpus() -> Vec<SearchItem> {
    vec![SearchItem {
        id: "doc-faq".to_string(),
        title: "常见问题".to_string(),
        description: "关于服务与合作的常见问题".to_string(),
        content: "如何开始合作：通过联系页面预约咨询即可。".to_string(),
        url: "/docs/faq".to_string(),
        kind: ItemType::Doc,
        category: Some("文档".to_string()),
        tags: vec![],
    }]
}

#[test]
fn content_substring_query_finds_the_doc() {
    let engine = SearchEngine::from_items(faq_corpus());
    let results = engine.search("合作");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "doc-faq");
}

#[test]
fn unmatched_query_returns_empty() {
    let engine = SearchEngine::from_items(faq_corpus());
    assert!(engine.search("zzzznotfound").is_empty());
}

#[test]
fn empty_query_returns_empty() {
    // The host shows quick links for this case; the engine stays silent
    let engine = SearchEngine::from_items(faq_corpus());
    assert!(engine.search("").is_empty());
    assert!(engine.search("  \t ").is_empty());
}

#[test]
fn committed_url_carries_no_locale_prefix() {
    let engine = SearchEngine::from_items(faq_corpus());
    let results = engine.search("合作");
    // The host prepends /zh or /en at navigation time
    assert_eq!(results[0].item.url, "/docs/faq");
}
