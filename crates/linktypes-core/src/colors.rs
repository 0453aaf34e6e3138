//! ANSI color codes for declarations printed to a terminal.
//!
//! Three semantic colors plus a dim modifier:
//! - Blue: member keys, interface names
//! - Green: quoted literals (module specifiers, discriminants)
//! - Dim: punctuation, keywords, banner comments
//! - Reset: return to default

/// ANSI palette applied to rendered declarations.
///
/// Only standard 16-color codes. With [`Colors::OFF`] every field is empty,
/// so colored and plain renderings share one code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
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
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
