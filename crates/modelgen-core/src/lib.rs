#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for modelgen schema snapshots.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the snapshot JSON exported by
//!   the content platform (`RawSnapshot`, `RawContentType`, `RawProperty`)
//! - **Lookup layer**: `Snapshot`, category/alias indexed, resolving the
//!   semantic value type of every property
//!
//! The type graph itself lives in `modelgen-lib`; this crate only knows about
//! flat, unlinked definitions.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod colors;
mod editors;
mod snapshot;
pub mod utils;

#[cfg(test)]
mod editors_tests;
#[cfg(test)]
mod snapshot_tests;

pub use colors::Colors;
pub use editors::EditorMap;
pub use snapshot::Snapshot;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw snapshot document: every content and media type of one platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub types: Vec<RawContentType>,
    /// Editor alias → value type overrides shipped with the snapshot.
    #[serde(default)]
    pub editors: IndexMap<String, SemanticType>,
}

/// Raw type definition, exactly as the platform describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawContentType {
    pub id: ContentTypeId,
    pub alias: String,
    pub category: ItemCategory,
    /// Parent id; `0` or negative means "no parent".
    #[serde(default)]
    pub parent_id: ContentTypeId,
    /// Every type this one is composed of. May include the parent.
    #[serde(default)]
    pub compositions: Vec<ContentTypeId>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

/// Property declared directly on a raw type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProperty {
    pub alias: String,
    /// Alias of the property editor backing this property.
    #[serde(default)]
    pub editor: Option<String>,
    /// Explicit value type; wins over the editor table.
    #[serde(default)]
    pub value_type: Option<SemanticType>,
}

impl RawContentType {
    /// Parent id, if the sentinel does not mean "no parent".
    pub fn parent(&self) -> Option<ContentTypeId> {
        (self.parent_id > 0).then_some(self.parent_id)
    }

    pub fn property(&self, alias: &str) -> Option<&RawProperty> {
        self.properties.iter().find(|p| p.alias == alias)
    }
}

/// Parse snapshot JSON into the raw document.
pub fn parse_snapshot(json: &str) -> Result<RawSnapshot, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Common Types
// ============================================================================

/// Content type ID as assigned by the platform.
pub type ContentTypeId = i32;

/// Published item namespace a type belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Content,
    Media,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 2] = [ItemCategory::Content, ItemCategory::Media];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Content => "content",
            ItemCategory::Media => "media",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic value type of a property.
///
/// Opaque to graph construction: whatever the resolver returns is carried
/// through to the generator untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    /// Rich text rendered as markup.
    Html,
    /// Reference to another content item.
    Content,
    /// Reference to a media item.
    Media,
    Json,
    /// Platform-defined structured value, by type name.
    Structured(String),
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticType::Text => "text",
            SemanticType::Integer => "integer",
            SemanticType::Decimal => "decimal",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
            SemanticType::Html => "html",
            SemanticType::Content => "content",
            SemanticType::Media => "media",
            SemanticType::Json => "json",
            SemanticType::Structured(name) => name,
        };
        f.write_str(name)
    }
}

// ============================================================================
// Resolver Trait
// ============================================================================

/// Resolves the semantic value type of a property.
///
/// Keyed by `(category, type alias, property alias)`. Returning `None` means
/// the snapshot and the resolver disagree, which callers treat as fatal.
pub trait PropertyTypeResolver {
    fn resolve_property(
        &self,
        category: ItemCategory,
        type_alias: &str,
        property_alias: &str,
    ) -> Option<SemanticType>;
}

impl<F> PropertyTypeResolver for F
where
    F: Fn(ItemCategory, &str, &str) -> Option<SemanticType>,
{
    fn resolve_property(
        &self,
        category: ItemCategory,
        type_alias: &str,
        property_alias: &str,
    ) -> Option<SemanticType> {
        self(category, type_alias, property_alias)
    }
}
