//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating them per test file.

#![doc(hidden)]

use crate::types::{ItemType, SearchItem};

/// Create a simple test item with derived fields.
pub fn make_item(id: &str, kind: ItemType) -> SearchItem {
    SearchItem {
        id: id.to_string(),
        title: format!("Item {id}"),
        description: format!("Description for {id}"),
        content: format!("Content for {id}"),
        url: format!("/items/{id}"),
        kind,
        category: None,
        tags: vec![],
    }
}

/// A small bilingual corpus shaped like a real site build: one service, two
/// docs, one static page.
pub fn make_corpus() -> Vec<SearchItem> {
    vec![
        SearchItem {
            id: "service-model-deployment".to_string(),
            title: "模型部署".to_string(),
            description: "企业级模型私有化部署".to_string(),
            content: "提供端到端的模型部署与推理优化 end-to-end model deployment and \
                      inference optimization"
                .to_string(),
            url: "/services/model-deployment".to_string(),
            kind: ItemType::Service,
            category: Some("aiService".to_string()),
            tags: vec![],
        },
        SearchItem {
            id: "doc-deploy-guide".to_string(),
            title: "部署指南".to_string(),
            description: "模型部署步骤".to_string(),
            content: "如何将模型部署到生产环境".to_string(),
            url: "/docs/deploy-guide".to_string(),
            kind: ItemType::Doc,
            category: Some("文档".to_string()),
            tags: vec!["部署".to_string(), "指南".to_string()],
        },
        SearchItem {
            id: "doc-faq".to_string(),
            title: "常见问题".to_string(),
            description: "常见问题解答".to_string(),
            content: "关于服务与合作的常见问题：如何开始合作".to_string(),
            url: "/docs/faq".to_string(),
            kind: ItemType::Doc,
            category: Some("文档".to_string()),
            tags: vec![],
        },
        SearchItem {
            id: "page-docs".to_string(),
            title: "文档".to_string(),
            description: "产品文档和使用指南".to_string(),
            content: "产品文档和使用指南".to_string(),
            url: "/docs".to_string(),
            kind: ItemType::Page,
            category: None,
            tags: vec![],
        },
    ]
}
