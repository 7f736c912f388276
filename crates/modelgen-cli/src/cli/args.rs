//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so every command declares the same
//! flag the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Snapshot JSON file, or `-` for stdin (positional).
pub fn snapshot_path_arg() -> Arg {
    Arg::new("snapshot_path")
        .value_name("SNAPSHOT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Schema snapshot JSON file (- for stdin)")
}

/// Item category to build (--category).
pub fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .value_name("CATEGORY")
        .default_value("all")
        .value_parser(["content", "media", "all"])
        .help("Item category to build")
}

/// Editor table overrides (--editor-map).
pub fn editor_map_arg() -> Arg {
    Arg::new("editor_map")
        .long("editor-map")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON object mapping editor aliases to value types")
}

/// Skip parent-cycle detection (--no-cycle-check).
pub fn no_cycle_check_arg() -> Arg {
    Arg::new("no_cycle_check")
        .long("no-cycle-check")
        .action(ArgAction::SetTrue)
        .help("Don't reject inheritance cycles")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Log to stderr (-v for debug, -vv for trace)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Omit property lines (--no-properties).
pub fn no_properties_arg() -> Arg {
    Arg::new("no_properties")
        .long("no-properties")
        .action(ArgAction::SetTrue)
        .help("Show types only")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}
