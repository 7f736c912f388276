//! modelgen: typed model graphs from content-type schema snapshots.
//!
//! # Example
//!
//! ```
//! use modelgen_core::Snapshot;
//! use modelgen_lib::Session;
//!
//! let json = r#"{"types": [
//!     {"id": 1, "alias": "page", "category": "content",
//!      "properties": [{"alias": "title", "editor": "textbox"}]},
//!     {"id": 2, "alias": "seo", "category": "content"},
//!     {"id": 3, "alias": "article", "category": "content",
//!      "parent_id": 1, "compositions": [1, 2]}
//! ]}"#;
//!
//! let session = Session::new(Snapshot::parse(json).expect("valid snapshot"));
//! let graph = session.content_types().expect("consistent schema");
//!
//! let article = graph.by_alias("article").unwrap();
//! assert_eq!(graph.base_type(article).unwrap().name(), "Page");
//! assert!(graph.by_alias("seo").unwrap().is_mixin());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fmt;

use modelgen_core::{ContentTypeId, ItemCategory};

pub mod config;
pub mod graph;
pub mod session;

#[cfg(test)]
mod session_tests;

pub use config::Config;
pub use graph::{GraphPrinter, PropertyModel, TypeGraph, TypeIndex, TypeModel, build_type_graph};
pub use session::{SchemaSource, Session};

/// Errors that abort a graph build. No partial graph is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The batch itself is malformed: wrong category, duplicates, unnameable aliases.
    #[error("inconsistent batch: type `{alias}` (id {id}) {issue}")]
    InconsistentBatch {
        id: ContentTypeId,
        alias: String,
        issue: BatchIssue,
    },

    /// A parent or composition id is not part of the batch.
    #[error("type `{alias}` (id {id}) references {relation} {target}, which is not in the batch")]
    DanglingReference {
        id: ContentTypeId,
        alias: String,
        relation: Relation,
        target: ContentTypeId,
    },

    #[error("no value type for property `{property_alias}` of {category} type `{type_alias}`")]
    UnresolvedPropertyType {
        category: ItemCategory,
        type_alias: String,
        property_alias: String,
    },

    /// Parent links loop back on themselves. Aliases are listed along the cycle.
    #[error("inheritance cycle: {}", .chain.join(" -> "))]
    CyclicInheritance { chain: Vec<String> },

    #[error("schema source is not ready")]
    NotReady,
}

/// What is wrong with a type in an inconsistent batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchIssue {
    CategoryMismatch {
        expected: ItemCategory,
        found: ItemCategory,
    },
    DuplicateId,
    DuplicateAlias,
    /// The alias cleans to an empty identifier.
    UnnameableAlias,
    UnnameableProperty(String),
    /// The alias cleans to a name another type already has.
    DuplicateName(String),
    /// Two properties of the type clean to the same name. Holds the later alias.
    DuplicatePropertyName(String),
}

impl fmt::Display for BatchIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchIssue::CategoryMismatch { expected, found } => {
                write!(f, "is a {found} type, expected {expected}")
            }
            BatchIssue::DuplicateId => f.write_str("reuses an id already in the batch"),
            BatchIssue::DuplicateAlias => f.write_str("reuses an alias already in the batch"),
            BatchIssue::UnnameableAlias => f.write_str("has no identifier characters in its alias"),
            BatchIssue::UnnameableProperty(alias) => {
                write!(f, "declares property `{alias}` with no identifier characters")
            }
            BatchIssue::DuplicateName(name) => {
                write!(f, "cleans to `{name}`, which another type already uses")
            }
            BatchIssue::DuplicatePropertyName(alias) => {
                write!(f, "declares property `{alias}` whose name clashes with another property")
            }
        }
    }
}

/// Kind of link a dangling reference came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Parent,
    Composition,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Parent => f.write_str("parent"),
            Relation::Composition => f.write_str("composition"),
        }
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
