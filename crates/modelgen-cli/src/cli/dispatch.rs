//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `From<*Params>` impls bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use modelgen_core::ItemCategory;
use modelgen_lib::Config;

use super::ColorChoice;
use crate::commands::build::BuildArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::run_common::InputArgs;

/// Flags shared by every command.
pub struct InputParams {
    pub snapshot_path: PathBuf,
    /// `None` means both categories.
    pub category: Option<ItemCategory>,
    pub editor_map: Option<PathBuf>,
    pub no_cycle_check: bool,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            snapshot_path: m
                .get_one::<PathBuf>("snapshot_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            category: m
                .get_one::<String>("category")
                .and_then(|s| ItemCategory::from_name(s)),
            editor_map: m.get_one::<PathBuf>("editor_map").cloned(),
            no_cycle_check: m.get_flag("no_cycle_check"),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            snapshot_path: p.snapshot_path,
            category: p.category,
            editor_map: p.editor_map,
            config: Config::default().detect_cycles(!p.no_cycle_check),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
        }
    }
}

pub struct DumpParams {
    pub input: InputParams,
    pub color: ColorChoice,
    pub no_properties: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            color: parse_color(m),
            no_properties: m.get_flag("no_properties"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input.into(),
            color: p.color.should_colorize(),
            properties: !p.no_properties,
        }
    }
}

pub struct BuildParams {
    pub input: InputParams,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            input: p.input.into(),
            output: p.output,
            pretty: !p.compact,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
