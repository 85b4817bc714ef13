// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Static page descriptors.
//!
//! The handful of top-level pages that should be findable even though they
//! have no long-form content. Display text is canonical-locale literal data;
//! the short description doubles as the matchable `content`.

use crate::types::{ItemType, SearchItem};

/// One indexable static page.
#[derive(Debug, Clone, Copy)]
pub struct PageDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// The static pages worth surfacing in search, in display order.
pub const STATIC_PAGES: &[PageDescriptor] = &[
    PageDescriptor {
        id: "page-home",
        title: "首页",
        description: "水杉智境工作室 - 企业级 AI 解决方案",
        url: "/",
    },
    PageDescriptor {
        id: "page-services",
        title: "服务",
        description: "探索我们的 AI 服务解决方案",
        url: "/services",
    },
    PageDescriptor {
        id: "page-store",
        title: "应用商店",
        description: "发现实用的 AI 应用和工具",
        url: "/store",
    },
    PageDescriptor {
        id: "page-docs",
        title: "文档",
        description: "产品文档和使用指南",
        url: "/docs",
    },
    PageDescriptor {
        id: "page-contact",
        title: "联系我们",
        description: "与我们取得联系",
        url: "/contact",
    },
];

/// Emit one corpus item per static page descriptor.
pub fn page_items() -> Vec<SearchItem> {
    STATIC_PAGES
        .iter()
        .map(|page| SearchItem {
            id: page.id.to_string(),
            title: page.title.to_string(),
            description: page.description.to_string(),
            content: page.description.to_string(),
            url: page.url.to_string(),
            kind: ItemType::Page,
            category: None,
            tags: Vec::new(),
        })
        .collect()
}
