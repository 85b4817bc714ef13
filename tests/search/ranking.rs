//! Ranking behavior across field weights, typo tolerance, and the cap.

use beacon::scoring::MAX_RESULTS;
use beacon::testing::make_item;
use beacon::types::ItemType;
use beacon::SearchEngine;

/// Items that each match the query through exactly one field, with the same
/// substring-level match quality.
fn one_field_each() -> Vec<beacon::types::SearchItem> {
    let mut by_tags = make_item("doc-by-tags", ItemType::Doc);
    by_tags.tags = vec!["完整部署指南合集".to_string()];

    let mut by_content = make_item("doc-by-content", ItemType::Doc);
    by_content.content = "这里有部署指南可以参考".to_string();

    let mut by_description = make_item("doc-by-description", ItemType::Doc);
    by_description.description = "最新部署指南汇总".to_string();

    let mut by_title = make_item("doc-by-title", ItemType::Doc);
    by_title.title = "模型部署指南大全".to_string();

    // Deliberately inserted worst-field first; ranking must invert this
    vec![by_tags, by_content, by_description, by_title]
}

#[test]
fn field_weights_order_results() {
    let engine = SearchEngine::from_items(one_field_each());
    let ids: Vec<String> = engine
        .search("部署指南")
        .into_iter()
        .map(|r| r.item.id)
        .collect();
    assert_eq!(
        ids,
        [
            "doc-by-title",
            "doc-by-description",
            "doc-by-content",
            "doc-by-tags",
        ]
    );
}

#[test]
fn typo_tolerant_matching() {
    let mut item = make_item("doc-deploy", ItemType::Doc);
    item.title = "deployment guide".to_string();
    let engine = SearchEngine::from_items(vec![item]);

    // One substitution on a ten-character token
    let results = engine.search("deploymant");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, "doc-deploy");

    // Four edits is past the budget
    assert!(engine.search("deplxxxxnt").is_empty());
}

#[test]
fn diacritics_do_not_block_matches() {
    let mut item = make_item("doc-cafe", ItemType::Doc);
    item.title = "Café workflows".to_string();
    let engine = SearchEngine::from_items(vec![item]);
    assert_eq!(engine.search("cafe").len(), 1);
}

#[test]
fn results_are_capped_at_eight() {
    let items: Vec<_> = (0..MAX_RESULTS * 3)
        .map(|i| {
            let mut item = make_item(&format!("doc-{i:02}"), ItemType::Doc);
            item.title = "部署手册".to_string();
            item
        })
        .collect();
    let engine = SearchEngine::from_items(items);
    let results = engine.search("部署");
    assert_eq!(results.len(), MAX_RESULTS);

    // Equal scores: the first indexed items win
    let ids: Vec<String> = results.into_iter().map(|r| r.item.id).collect();
    let expected: Vec<String> = (0..MAX_RESULTS).map(|i| format!("doc-{i:02}")).collect();
    assert_eq!(ids, expected);
}

#[test]
fn better_matches_rank_above_weaker_ones() {
    let mut weak = make_item("doc-weak", ItemType::Doc);
    weak.content = "部署相关内容".to_string();
    let mut strong = make_item("doc-strong", ItemType::Doc);
    strong.title = "部署".to_string();

    let engine = SearchEngine::from_items(vec![weak, strong]);
    let ids: Vec<String> = engine
        .search("部署")
        .into_iter()
        .map(|r| r.item.id)
        .collect();
    assert_eq!(ids, ["doc-strong", "doc-weak"]);
}
