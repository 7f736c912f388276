//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TypeGraph, TypeIndex, TypeModel};

impl TypeGraph {
    pub(super) fn ensure_type(&self, idx: TypeIndex) -> &TypeModel {
        self.types.get(idx.index()).unwrap_or_else(|| {
            panic!(
                "TypeGraph: index {} out of bounds for {} types \
                 (TypeIndex must come from the same graph)",
                idx.as_u32(),
                self.types.len()
            )
        })
    }
}
