//! Session: per-category graph builds over one schema source.

use modelgen_core::{ItemCategory, PropertyTypeResolver, RawContentType, Snapshot};

use crate::graph::{TypeGraph, build_type_graph};
use crate::{Config, Error, Result};

/// Where raw type definitions and property value types come from.
pub trait SchemaSource: PropertyTypeResolver {
    /// Whether the source can be queried yet. A platform that is still
    /// booting reports `false`.
    fn is_ready(&self) -> bool {
        true
    }

    /// Raw types of one category, in the order they should be built.
    fn raw_types(&self, category: ItemCategory) -> Vec<&RawContentType>;
}

impl SchemaSource for Snapshot {
    fn raw_types(&self, category: ItemCategory) -> Vec<&RawContentType> {
        self.types(category).collect()
    }
}

/// Builds type graphs from a schema source.
///
/// Holds no cache: every query rebuilds from the source.
#[derive(Debug, Clone)]
pub struct Session<S> {
    source: S,
    config: Config,
}

impl<S: SchemaSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: S, config: Config) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content_types(&self) -> Result<TypeGraph> {
        self.ensure_ready()?;
        self.build(ItemCategory::Content)
    }

    pub fn media_types(&self) -> Result<TypeGraph> {
        self.ensure_ready()?;
        self.build(ItemCategory::Media)
    }

    /// Content graph followed by the media graph.
    ///
    /// Each category is linked on its own, so a content type cannot name a
    /// media type as parent or composition.
    pub fn content_and_media_types(&self) -> Result<TypeGraph> {
        self.ensure_ready()?;
        let content = self.build(ItemCategory::Content)?;
        let media = self.build(ItemCategory::Media)?;
        content.merge(media)
    }

    /// Build one category, or both when `category` is `None`.
    pub fn types(&self, category: Option<ItemCategory>) -> Result<TypeGraph> {
        match category {
            Some(ItemCategory::Content) => self.content_types(),
            Some(ItemCategory::Media) => self.media_types(),
            None => self.content_and_media_types(),
        }
    }

    fn build(&self, category: ItemCategory) -> Result<TypeGraph> {
        let raw = self.source.raw_types(category);
        tracing::info!(%category, types = raw.len(), "building models");
        build_type_graph(category, raw, &self.source, &self.config)
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.source.is_ready() {
            Ok(())
        } else {
            Err(Error::NotReady)
        }
    }
}
