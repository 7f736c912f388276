//! Category/alias indexed view over a raw snapshot.

use std::collections::HashMap;

use crate::{
    ContentTypeId, EditorMap, ItemCategory, PropertyTypeResolver, RawContentType, RawSnapshot,
    SemanticType, parse_snapshot,
};

/// Queryable schema snapshot.
///
/// Keeps the raw definitions in document order and indexes them by
/// `(category, alias)` so property resolution is a pair of hash lookups.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    types: Vec<RawContentType>,
    index: HashMap<ItemCategory, HashMap<String, usize>>,
    editors: EditorMap,
}

impl Snapshot {
    /// Build from a raw document, layering its editor table over the
    /// built-in defaults.
    pub fn from_raw(raw: RawSnapshot) -> Self {
        let mut editors = EditorMap::default();
        editors.extend(raw.editors);

        let mut index: HashMap<ItemCategory, HashMap<String, usize>> = HashMap::new();
        for (i, ty) in raw.types.iter().enumerate() {
            // First definition wins; duplicates are reported by the graph builder.
            index
                .entry(ty.category)
                .or_default()
                .entry(ty.alias.clone())
                .or_insert(i);
        }

        Self {
            types: raw.types,
            index,
            editors,
        }
    }

    /// Parse snapshot JSON and index it.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        parse_snapshot(json).map(Self::from_raw)
    }

    /// Apply editor overrides on top of the current table.
    pub fn with_editors(mut self, overrides: EditorMap) -> Self {
        self.editors.merge(overrides);
        self
    }

    pub fn editors(&self) -> &EditorMap {
        &self.editors
    }

    /// Raw types of one category, in document order.
    pub fn types(&self, category: ItemCategory) -> impl Iterator<Item = &RawContentType> {
        self.types.iter().filter(move |t| t.category == category)
    }

    pub fn get(&self, category: ItemCategory, alias: &str) -> Option<&RawContentType> {
        let idx = *self.index.get(&category)?.get(alias)?;
        Some(&self.types[idx])
    }

    pub fn by_id(&self, id: ContentTypeId) -> Option<&RawContentType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawContentType> {
        self.types.iter()
    }
}

impl PropertyTypeResolver for Snapshot {
    fn resolve_property(
        &self,
        category: ItemCategory,
        type_alias: &str,
        property_alias: &str,
    ) -> Option<SemanticType> {
        let property = self.get(category, type_alias)?.property(property_alias)?;
        if let Some(value_type) = &property.value_type {
            return Some(value_type.clone());
        }
        let editor = property.editor.as_deref()?;
        self.editors.resolve(editor).cloned()
    }
}
