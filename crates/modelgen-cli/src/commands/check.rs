use super::run_common::{InputArgs, build_graph_or_exit};

pub struct CheckArgs {
    pub input: InputArgs,
}

pub fn run(args: CheckArgs) {
    let graph = build_graph_or_exit(&args.input);
    tracing::info!(types = graph.len(), "snapshot is consistent");

    // Silent on success (like cargo check)
}
