//! Graph construction: raw definitions → linked `TypeGraph`.
//!
//! Passes run over the whole batch in fixed order; each one assumes the
//! previous pass finished for every node, not just the current one:
//! 1. Construct nodes and resolve property value types
//! 2. Link parents
//! 3. Reject parent cycles (optional)
//! 4. Link compositions as mixins, marking each mixin and its ancestors

use std::collections::HashSet;

use modelgen_core::utils::to_pascal_case;
use modelgen_core::{ItemCategory, PropertyTypeResolver, RawContentType, RawProperty};

use super::cycles::check_cycles;
use super::{PropertyModel, TypeGraph, TypeIndex, TypeModel};
use crate::{BatchIssue, Config, Error, Relation, Result};

/// Build the type graph for one category.
///
/// Every raw type must belong to `category`, and every parent or composition
/// it names must be part of `raw_types`. On error nothing is returned: the
/// graph is either fully linked or not built at all.
pub fn build_type_graph<'r, R>(
    category: ItemCategory,
    raw_types: impl IntoIterator<Item = &'r RawContentType>,
    resolver: &R,
    config: &Config,
) -> Result<TypeGraph>
where
    R: PropertyTypeResolver + ?Sized,
{
    let raw: Vec<&RawContentType> = raw_types.into_iter().collect();
    tracing::debug!(%category, types = raw.len(), "building type graph");

    GraphBuilder {
        category,
        raw,
        resolver,
        graph: TypeGraph::new(),
    }
    .run(config)
}

struct GraphBuilder<'a, R: ?Sized> {
    category: ItemCategory,
    /// Parallel to `graph.types`: `raw[i]` built `TypeIndex(i)`.
    raw: Vec<&'a RawContentType>,
    resolver: &'a R,
    graph: TypeGraph,
}

impl<R: PropertyTypeResolver + ?Sized> GraphBuilder<'_, R> {
    fn run(mut self, config: &Config) -> Result<TypeGraph> {
        self.construct_nodes()?;
        self.link_inheritance()?;
        if config.detect_cycles {
            check_cycles(&self.graph)?;
        }
        let mixins = self.discover_mixins()?;

        tracing::debug!(
            category = %self.category,
            types = self.graph.len(),
            mixins,
            "type graph built"
        );
        Ok(self.graph)
    }

    fn construct_nodes(&mut self) -> Result<()> {
        let mut aliases = HashSet::new();
        let mut names = HashSet::new();

        for &raw in &self.raw {
            if raw.category != self.category {
                return Err(inconsistent(
                    raw,
                    BatchIssue::CategoryMismatch {
                        expected: self.category,
                        found: raw.category,
                    },
                ));
            }
            if self.graph.ids.contains_key(&raw.id) {
                return Err(inconsistent(raw, BatchIssue::DuplicateId));
            }
            if !aliases.insert(raw.alias.as_str()) {
                return Err(inconsistent(raw, BatchIssue::DuplicateAlias));
            }

            let name = to_pascal_case(&raw.alias);
            if name.is_empty() {
                return Err(inconsistent(raw, BatchIssue::UnnameableAlias));
            }
            if !names.insert(name.clone()) {
                return Err(inconsistent(raw, BatchIssue::DuplicateName(name)));
            }

            let properties = raw
                .properties
                .iter()
                .map(|prop| property_model(self.resolver, self.category, raw, prop))
                .collect::<Result<Vec<_>>>()?;
            ensure_distinct_property_names(raw, &properties)?;

            self.graph.push(TypeModel {
                index: TypeIndex::from_raw(0),
                id: raw.id,
                alias: raw.alias.clone(),
                name,
                category: raw.category,
                base_type_id: raw.parent_id,
                base_type: None,
                is_mixin: false,
                mixin_types: Vec::new(),
                properties,
            });
        }

        Ok(())
    }

    fn link_inheritance(&mut self) -> Result<()> {
        for i in 0..self.graph.types.len() {
            let ty = &self.graph.types[i];
            if ty.base_type_id <= 0 {
                continue;
            }

            let Some(base) = self.graph.index_of(ty.base_type_id) else {
                return Err(Error::DanglingReference {
                    id: ty.id,
                    alias: ty.alias.clone(),
                    relation: Relation::Parent,
                    target: ty.base_type_id,
                });
            };

            tracing::trace!(alias = %ty.alias, parent = ty.base_type_id, "linked parent");
            self.graph.types[i].base_type = Some(base);
        }

        Ok(())
    }

    /// Returns the number of types marked as mixins.
    fn discover_mixins(&mut self) -> Result<usize> {
        let mut marked = 0;

        for (i, &raw) in self.raw.iter().enumerate() {
            for &target in &raw.compositions {
                let Some(mixin) = self.graph.index_of(target) else {
                    return Err(Error::DanglingReference {
                        id: raw.id,
                        alias: raw.alias.clone(),
                        relation: Relation::Composition,
                        target,
                    });
                };

                // The parent shows up among compositions; that link is inheritance.
                if target == raw.parent_id {
                    continue;
                }

                let mixin_types = &mut self.graph.types[i].mixin_types;
                if mixin_types.contains(&mixin) {
                    continue;
                }
                mixin_types.push(mixin);

                tracing::trace!(alias = %raw.alias, mixin = target, "linked mixin");
                marked += self.graph.mark_mixin(mixin);
            }
        }

        Ok(marked)
    }
}

fn property_model<R: PropertyTypeResolver + ?Sized>(
    resolver: &R,
    category: ItemCategory,
    raw: &RawContentType,
    prop: &RawProperty,
) -> Result<PropertyModel> {
    let name = to_pascal_case(&prop.alias);
    if name.is_empty() {
        return Err(inconsistent(
            raw,
            BatchIssue::UnnameableProperty(prop.alias.clone()),
        ));
    }

    let value_type = resolver
        .resolve_property(category, &raw.alias, &prop.alias)
        .ok_or_else(|| Error::UnresolvedPropertyType {
            category,
            type_alias: raw.alias.clone(),
            property_alias: prop.alias.clone(),
        })?;

    Ok(PropertyModel {
        alias: prop.alias.clone(),
        name,
        value_type,
    })
}

/// Property aliases may differ and still clean to the same name.
fn ensure_distinct_property_names(
    raw: &RawContentType,
    properties: &[PropertyModel],
) -> Result<()> {
    let mut seen = HashSet::new();
    for prop in properties {
        if !seen.insert(prop.name.as_str()) {
            return Err(inconsistent(
                raw,
                BatchIssue::DuplicatePropertyName(prop.alias.clone()),
            ));
        }
    }
    Ok(())
}

fn inconsistent(raw: &RawContentType, issue: BatchIssue) -> Error {
    Error::InconsistentBatch {
        id: raw.id,
        alias: raw.alias.clone(),
        issue,
    }
}
