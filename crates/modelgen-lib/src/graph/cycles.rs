//! Parent-chain cycle detection.
//!
//! Each type has at most one parent, so every walk is a straight line. A walk
//! that reaches a node still on the current path has found a cycle; one that
//! reaches a finished node stops there.

use super::{TypeGraph, TypeIndex};
use crate::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

pub(super) fn check_cycles(graph: &TypeGraph) -> Result<()> {
    let Some(cycle) = find_cycle(graph) else {
        return Ok(());
    };

    let chain: Vec<String> = cycle
        .iter()
        .map(|&idx| graph.get(idx).alias().to_owned())
        .collect();
    tracing::debug!(chain = %chain.join(" -> "), "inheritance cycle");
    Err(Error::CyclicInheritance { chain })
}

/// First parent cycle in build order, child to parent, with the entry node
/// repeated at the end.
pub(super) fn find_cycle(graph: &TypeGraph) -> Option<Vec<TypeIndex>> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut path = Vec::new();

    for start in 0..graph.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }

        path.clear();
        let mut current = Some(TypeIndex::from_raw(start as u32));
        while let Some(idx) = current {
            match marks[idx.index()] {
                Mark::Done => break,
                Mark::OnPath => {
                    let pos = path
                        .iter()
                        .position(|&p| p == idx)
                        .expect("node marked on-path must be in path");
                    let mut cycle = path[pos..].to_vec();
                    cycle.push(idx);
                    return Some(cycle);
                }
                Mark::Unvisited => {
                    marks[idx.index()] = Mark::OnPath;
                    path.push(idx);
                    current = graph.get(idx).base_type();
                }
            }
        }

        for idx in &path {
            marks[idx.index()] = Mark::Done;
        }
    }

    None
}
