use std::fs;
use std::io::{self, Read};
use std::path::Path;

use modelgen_core::{EditorMap, Snapshot};

/// Load and index a snapshot. `-` reads stdin.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, String> {
    let (json, origin) = if path.as_os_str() == "-" {
        (read_stdin()?, "<stdin>".to_string())
    } else {
        (read_file(path)?, path.display().to_string())
    };

    Snapshot::parse(&json).map_err(|e| format!("invalid snapshot '{}': {}", origin, e))
}

/// Load an editor table override file.
pub fn load_editor_map(path: &Path) -> Result<EditorMap, String> {
    let json = read_file(path)?;
    EditorMap::from_json(&json)
        .map_err(|e| format!("invalid editor map '{}': {}", path.display(), e))
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
