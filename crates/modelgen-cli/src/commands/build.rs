use std::fs;
use std::path::PathBuf;

use modelgen_lib::TypeGraph;

use super::run_common::{InputArgs, build_graph_or_exit};

pub struct BuildArgs {
    pub input: InputArgs,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

pub fn run(args: BuildArgs) {
    let graph = build_graph_or_exit(&args.input);

    let json = match to_json(&graph, args.pretty) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: failed to serialize graph: {}", e);
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{json}\n")) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::info!(path = %path.display(), types = graph.len(), "wrote graph");
        }
        None => println!("{}", json),
    }
}

fn to_json(graph: &TypeGraph, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    }
}
