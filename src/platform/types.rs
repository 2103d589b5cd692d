// Platform type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of the operating environment.
///
/// Derived once per invocation by the resolver and passed around as a
/// value, so call sites match on a tagged variant instead of re-testing
/// raw identifier strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformClass {
    Windows,
    Posix,
    Unsupported,
}

impl PlatformClass {
    /// Whether a launch may proceed on this platform
    pub fn is_supported(&self) -> bool {
        !matches!(self, PlatformClass::Unsupported)
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, PlatformClass::Windows)
    }

    pub fn is_posix(&self) -> bool {
        matches!(self, PlatformClass::Posix)
    }
}

impl fmt::Display for PlatformClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformClass::Windows => "windows",
            PlatformClass::Posix => "posix",
            PlatformClass::Unsupported => "unsupported",
        };
        write!(f, "{}", name)
    }
}
