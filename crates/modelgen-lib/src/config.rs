//! Configuration for graph builds.

/// Options for `build_type_graph` and `Session`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Reject parent chains that loop back on themselves.
    ///
    /// Schema platforms normally guarantee acyclic parents. When disabled, a
    /// cycle goes unreported but mixin propagation still terminates.
    pub detect_cycles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detect_cycles: true,
        }
    }
}

impl Config {
    pub fn detect_cycles(mut self, value: bool) -> Self {
        self.detect_cycles = value;
        self
    }
}
