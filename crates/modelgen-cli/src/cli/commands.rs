//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input flags every command accepts.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(snapshot_path_arg())
        .arg(category_arg())
        .arg(editor_map_arg())
        .arg(no_cycle_check_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("modelgen")
        .about("Typed model graphs from content-type schema snapshots")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(build_command())
}

/// Validate a snapshot.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Build the type graph and report errors")
        .after_help(
            r#"EXAMPLES:
  modelgen check schema.json                    # both categories
  modelgen check schema.json --category media   # media types only
  cat schema.json | modelgen check -            # from stdin"#,
        );

    with_input_args(cmd)
}

/// Print the type graph.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the linked type graph")
        .after_help(
            r#"EXAMPLES:
  modelgen dump schema.json                     # types and properties
  modelgen dump schema.json --no-properties     # hierarchy only
  modelgen dump schema.json --editor-map ed.json"#,
        )
        .arg(color_arg())
        .arg(no_properties_arg());

    with_input_args(cmd)
}

/// Emit the type graph as JSON.
pub fn build_command() -> Command {
    let cmd = Command::new("build")
        .about("Emit the type graph as JSON")
        .after_help(
            r#"EXAMPLES:
  modelgen build schema.json                    # pretty JSON to stdout
  modelgen build schema.json -o models.json     # write to file
  modelgen build schema.json --compact          # one line"#,
        )
        .arg(output_file_arg())
        .arg(compact_arg());

    with_input_args(cmd)
}
