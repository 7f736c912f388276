use modelgen_core::Colors;
use modelgen_lib::GraphPrinter;

use super::run_common::{InputArgs, build_graph_or_exit};

pub struct DumpArgs {
    pub input: InputArgs,
    pub color: bool,
    pub properties: bool,
}

pub fn run(args: DumpArgs) {
    let graph = build_graph_or_exit(&args.input);

    let printer = GraphPrinter::new(&graph)
        .colors(Colors::new(args.color))
        .properties(args.properties);
    print!("{}", printer.dump());
}
