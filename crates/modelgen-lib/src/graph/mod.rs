//! Type graph: one arena of linked type models per build.
//!
//! Every `TypeModel` lives in `TypeGraph::types`. Parent and mixin links are
//! `TypeIndex` handles into that arena, so marking a node as a mixin is
//! visible from every place that refers to it.
//!
//! # Pipeline
//!
//! ```text
//! raw types → construct nodes → link parents → check cycles → link mixins
//! ```

mod build;
mod cycles;
mod dump;
mod invariants;

#[cfg(test)]
mod dump_tests;

pub use build::build_type_graph;
pub use dump::GraphPrinter;

use std::collections::HashMap;
use std::ops::Index;

use modelgen_core::{ContentTypeId, ItemCategory, SemanticType};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{BatchIssue, Error, Result};

/// Position of a type in its graph's arena.
///
/// Only meaningful for the graph that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIndex(u32);

impl TypeIndex {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn shifted(self, offset: u32) -> Self {
        Self(self.0 + offset)
    }
}

/// One content or media type, linked into its graph.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeModel {
    index: TypeIndex,
    id: ContentTypeId,
    alias: String,
    name: String,
    category: ItemCategory,
    base_type_id: ContentTypeId,
    base_type: Option<TypeIndex>,
    is_mixin: bool,
    mixin_types: Vec<TypeIndex>,
    properties: Vec<PropertyModel>,
}

impl TypeModel {
    pub fn index(&self) -> TypeIndex {
        self.index
    }

    pub fn id(&self) -> ContentTypeId {
        self.id
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// PascalCase identifier for generated code.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Raw parent id; `<= 0` means no parent.
    pub fn base_type_id(&self) -> ContentTypeId {
        self.base_type_id
    }

    /// Linked parent. Use `TypeGraph::base_type` to get the model.
    pub fn base_type(&self) -> Option<TypeIndex> {
        self.base_type
    }

    /// Used as a composition by some type, directly or through a descendant.
    pub fn is_mixin(&self) -> bool {
        self.is_mixin
    }

    /// Composed types, in declaration order, parent excluded.
    pub fn mixin_types(&self) -> &[TypeIndex] {
        &self.mixin_types
    }

    /// Properties declared on this type only.
    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }
}

/// Property declared directly on a type.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PropertyModel {
    pub alias: String,
    pub name: String,
    pub value_type: SemanticType,
}

/// Ordered, fully linked set of type models.
///
/// Read-only once built: all mutation happens inside the builder passes.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    types: Vec<TypeModel>,
    ids: HashMap<ContentTypeId, TypeIndex>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types in build order (input order of the raw batch).
    pub fn iter(&self) -> impl Iterator<Item = &TypeModel> {
        self.types.iter()
    }

    /// # Panics
    /// Panics if `idx` was not produced by this graph.
    pub fn get(&self, idx: TypeIndex) -> &TypeModel {
        self.ensure_type(idx)
    }

    pub fn index_of(&self, id: ContentTypeId) -> Option<TypeIndex> {
        self.ids.get(&id).copied()
    }

    pub fn by_id(&self, id: ContentTypeId) -> Option<&TypeModel> {
        self.index_of(id).map(|idx| self.get(idx))
    }

    /// First type with this alias. Aliases are unique per category, so a
    /// merged content + media graph may hold the same alias twice.
    pub fn by_alias(&self, alias: &str) -> Option<&TypeModel> {
        self.types.iter().find(|t| t.alias == alias)
    }

    pub fn base_type(&self, ty: &TypeModel) -> Option<&TypeModel> {
        ty.base_type.map(|idx| self.get(idx))
    }

    pub fn mixin_types<'a>(&'a self, ty: &'a TypeModel) -> impl Iterator<Item = &'a TypeModel> {
        ty.mixin_types.iter().map(|&idx| self.get(idx))
    }

    /// Parent chain from the direct parent up to the root.
    pub fn ancestors<'a>(&'a self, ty: &'a TypeModel) -> Ancestors<'a> {
        Ancestors {
            graph: self,
            next: ty.base_type,
            remaining: self.types.len(),
        }
    }

    /// Append another graph after this one, re-basing its links.
    ///
    /// Fails if both graphs contain the same id.
    pub fn merge(mut self, other: TypeGraph) -> Result<TypeGraph> {
        if let Some(dup) = other.types.iter().find(|t| self.ids.contains_key(&t.id)) {
            return Err(Error::InconsistentBatch {
                id: dup.id,
                alias: dup.alias.clone(),
                issue: BatchIssue::DuplicateId,
            });
        }

        let offset = self.types.len() as u32;
        self.types.reserve(other.types.len());
        for mut ty in other.types {
            ty.index = ty.index.shifted(offset);
            ty.base_type = ty.base_type.map(|idx| idx.shifted(offset));
            for mixin in &mut ty.mixin_types {
                *mixin = mixin.shifted(offset);
            }
            self.ids.insert(ty.id, ty.index);
            self.types.push(ty);
        }
        Ok(self)
    }

    fn push(&mut self, mut ty: TypeModel) -> TypeIndex {
        let idx = TypeIndex(self.types.len() as u32);
        ty.index = idx;
        self.ids.insert(ty.id, idx);
        self.types.push(ty);
        idx
    }

    /// Mark `idx` and its ancestors as mixins. Returns how many changed.
    ///
    /// Stops at the first node already marked: its ancestors were marked
    /// along with it.
    fn mark_mixin(&mut self, idx: TypeIndex) -> usize {
        let mut marked = 0;
        let mut current = Some(idx);
        while let Some(idx) = current {
            let ty = &mut self.types[idx.index()];
            if ty.is_mixin {
                break;
            }
            ty.is_mixin = true;
            marked += 1;
            current = ty.base_type;
        }
        marked
    }
}

impl Index<TypeIndex> for TypeGraph {
    type Output = TypeModel;

    fn index(&self, idx: TypeIndex) -> &TypeModel {
        self.get(idx)
    }
}

/// Iterator over a type's parent chain.
///
/// Bounded by the graph size, so an unchecked cycle cannot spin forever.
pub struct Ancestors<'a> {
    graph: &'a TypeGraph,
    next: Option<TypeIndex>,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeModel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let ty = self.graph.get(self.next?);
        self.next = ty.base_type;
        Some(ty)
    }
}

/// Serialized form of a type: links become ids.
#[derive(serde::Serialize)]
struct TypeView<'a> {
    id: ContentTypeId,
    alias: &'a str,
    name: &'a str,
    category: ItemCategory,
    base_type: Option<ContentTypeId>,
    is_mixin: bool,
    mixin_types: Vec<ContentTypeId>,
    properties: &'a [PropertyModel],
}

impl Serialize for TypeGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.types.len()))?;
        for ty in &self.types {
            seq.serialize_element(&TypeView {
                id: ty.id,
                alias: &ty.alias,
                name: &ty.name,
                category: ty.category,
                base_type: self.base_type(ty).map(|b| b.id),
                is_mixin: ty.is_mixin,
                mixin_types: self.mixin_types(ty).map(|m| m.id).collect(),
                properties: &ty.properties,
            })?;
        }
        seq.end()
    }
}
