// Platform detection implementation

use crate::platform::PlatformClass;

/// Identifier prefixes recognized as POSIX-family systems
const POSIX_PREFIXES: &[&str] = &["linux", "darwin", "macos"];

/// Identifier prefix recognized as Windows-family systems
const WINDOWS_PREFIX: &str = "win";

/// Classify a raw operating-environment identifier.
///
/// The identifier matches a family if it starts with any of that family's
/// candidate prefixes; anything else is `Unsupported`. Pure function, so
/// classifying the same identifier twice yields the same class.
pub fn classify(identifier: &str) -> PlatformClass {
    if identifier.starts_with(WINDOWS_PREFIX) {
        PlatformClass::Windows
    } else if POSIX_PREFIXES.iter().any(|prefix| identifier.starts_with(prefix)) {
        PlatformClass::Posix
    } else {
        PlatformClass::Unsupported
    }
}

/// Resolve the platform class of the current operating environment
pub fn resolve() -> PlatformClass {
    let identifier = std::env::consts::OS;
    let class = classify(identifier);
    log::debug!("Resolved platform identifier '{}' as {}", identifier, class);
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_windows_identifiers() {
        assert_eq!(classify("windows"), PlatformClass::Windows);
        assert_eq!(classify("win32"), PlatformClass::Windows);
    }

    #[test]
    fn test_classify_posix_identifiers() {
        assert_eq!(classify("linux"), PlatformClass::Posix);
        assert_eq!(classify("darwin"), PlatformClass::Posix);
        assert_eq!(classify("macos"), PlatformClass::Posix);
    }

    #[test]
    fn test_classify_unrecognized_identifiers() {
        assert_eq!(classify("freebsd"), PlatformClass::Unsupported);
        assert_eq!(classify("solaris"), PlatformClass::Unsupported);
        assert_eq!(classify(""), PlatformClass::Unsupported);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        assert_eq!(resolve(), resolve());
    }

    #[test]
    fn test_resolve_matches_classify() {
        assert_eq!(resolve(), classify(std::env::consts::OS));
    }

    #[test]
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    fn test_resolve_supported_on_build_targets() {
        assert!(resolve().is_supported());
    }
}
