pub mod build;
pub mod check;
pub mod dump;
pub mod run_common;
pub mod snapshot_loader;
