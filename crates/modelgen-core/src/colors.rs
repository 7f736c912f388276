//! Terminal palette for `modelgen dump`.

/// One escape sequence per role in the graph dump.
///
/// `OFF` renders every role as plain text.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Type names, including parent and mixin references.
    pub blue: &'static str,
    /// Property value types.
    pub green: &'static str,
    /// The `[mixin]` marker.
    pub yellow: &'static str,
    /// Raw aliases and ids.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
