mod cli;
mod commands;
mod logging;

use cli::{BuildParams, CheckParams, DumpParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    logging::init(m.get_count("verbose"));

    match name {
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "build" => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
