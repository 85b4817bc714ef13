// Copyright 2025-present Metasequoia AI Studio
// SPDX-License-Identifier: Apache-2.0

//! Service descriptors and their bilingual corpus items.
//!
//! The service catalog is a fixed list: ids and category tags live here,
//! all display text lives in the message tables. Display title/description
//! come from the canonical locale (zh); the secondary locale's long-form
//! details are appended to `content` - only when they differ - so a query
//! in either language finds the service.

use crate::build::messages::MessageTable;
use crate::error::BuildError;
use crate::types::{ItemType, SearchItem, CONTENT_CAP};
use crate::utils::truncate_chars;

/// One entry in the service catalog.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDescriptor {
    pub id: &'static str,
    pub category: &'static str,
}

/// The services offered on the site, in display order.
pub const SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        id: "model-deployment",
        category: "aiService",
    },
    ServiceDescriptor {
        id: "model-application",
        category: "aiService",
    },
    ServiceDescriptor {
        id: "agent-development",
        category: "aiService",
    },
];

/// Every message key the service catalog needs, for up-front validation.
pub fn required_message_keys() -> Vec<String> {
    SERVICES
        .iter()
        .flat_map(|service| {
            ["title", "description", "details"]
                .iter()
                .map(move |field| format!("services.{}.{}", service.id, field))
        })
        .collect()
}

/// Emit one corpus item per service descriptor.
pub fn service_items(
    canonical: &MessageTable,
    secondary: &MessageTable,
) -> Result<Vec<SearchItem>, BuildError> {
    SERVICES
        .iter()
        .map(|service| service_item(service, canonical, secondary))
        .collect()
}

fn service_item(
    service: &ServiceDescriptor,
    canonical: &MessageTable,
    secondary: &MessageTable,
) -> Result<SearchItem, BuildError> {
    let title_key = format!("services.{}.title", service.id);
    let description_key = format!("services.{}.description", service.id);
    let details_key = format!("services.{}.details", service.id);

    let title = canonical.get(&title_key)?;
    let description = canonical.get(&description_key)?;
    let details = canonical.get(&details_key)?;
    let details_secondary = secondary.get(&details_key)?;

    // Merge both locales' details so either language matches; skip the
    // secondary copy when the locales share the text
    let content = if details_secondary != details {
        format!("{details} {details_secondary}")
    } else {
        details.to_string()
    };
    let content = truncate_chars(&content, CONTENT_CAP);

    Ok(SearchItem {
        id: format!("service-{}", service.id),
        title: title.to_string(),
        description: description.to_string(),
        content,
        url: format!("/services/{}", service.id),
        kind: ItemType::Service,
        category: Some(service.category.to_string()),
        tags: Vec::new(),
    })
}
