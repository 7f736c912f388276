//! Input handling shared by every command: load, override, build.

use std::path::PathBuf;

use modelgen_core::ItemCategory;
use modelgen_lib::{Config, Session, TypeGraph};

use super::snapshot_loader::{load_editor_map, load_snapshot};

pub struct InputArgs {
    pub snapshot_path: PathBuf,
    /// `None` builds content and media together.
    pub category: Option<ItemCategory>,
    pub editor_map: Option<PathBuf>,
    pub config: Config,
}

/// Load the snapshot and build the requested graph.
pub fn build_graph(input: &InputArgs) -> Result<TypeGraph, String> {
    let mut snapshot = load_snapshot(&input.snapshot_path)?;
    if let Some(path) = &input.editor_map {
        let overrides = load_editor_map(path)?;
        tracing::debug!(path = %path.display(), editors = overrides.len(), "editor overrides");
        snapshot = snapshot.with_editors(overrides);
    }

    tracing::debug!(
        snapshot = %input.snapshot_path.display(),
        types = snapshot.len(),
        "snapshot loaded"
    );

    let session = Session::with_config(snapshot, input.config.clone());
    session.types(input.category).map_err(|e| e.to_string())
}

/// Build the graph or exit with status 1.
pub fn build_graph_or_exit(input: &InputArgs) -> TypeGraph {
    match build_graph(input) {
        Ok(graph) => graph,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}
