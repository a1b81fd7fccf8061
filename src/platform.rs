//! Platform mapping and host detection.
//!
//! Translates the human-readable menu labels into the canonical tokens used
//! in release filenames, and detects which labels match the running host.

/// Canonical OS token for a menu label.
///
/// Unknown labels pass through unchanged; they are treated as
/// already-canonical (e.g. "linux").
pub fn canonical_os(label: &str) -> &str {
    match label {
        "macOS" => "darwin",
        "windows" => "windows",
        "linux" => "linux",
        other => other,
    }
}

/// Canonical architecture token for a menu label.
///
/// Unknown labels pass through unchanged.
pub fn canonical_arch(label: &str) -> &str {
    match label {
        "32 bit" => "386",
        "64 bit" => "amd64",
        other => other,
    }
}

/// Archive suffix for a canonical OS token: windows builds ship as zip,
/// everything else as tar.gz.
pub fn archive_suffix(os_token: &str) -> &str {
    if os_token == "windows" { ".zip" } else { ".tar.gz" }
}

/// Host platform expressed as menu labels.
#[derive(Debug, Clone, PartialEq)]
pub struct HostPlatform {
    pub os: String,
    pub arch: String,
}

impl HostPlatform {
    /// Detect the current host.
    ///
    /// Targets outside the menus fall back to the menu defaults
    /// (linux, 64 bit).
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "macOS".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            "linux".to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86")]
        {
            "32 bit".to_string()
        }
        #[cfg(not(target_arch = "x86"))]
        {
            "64 bit".to_string()
        }
    }
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> HostPlatform;
}

/// Default detector using compile-time detection
pub struct DefaultPlatformDetector;

impl PlatformDetector for DefaultPlatformDetector {
    fn detect(&self) -> HostPlatform {
        HostPlatform::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_os_mapping_table() {
        assert_eq!(canonical_os("macOS"), "darwin");
        assert_eq!(canonical_os("windows"), "windows");
        assert_eq!(canonical_os("linux"), "linux");
    }

    #[test]
    fn test_canonical_os_passthrough() {
        assert_eq!(canonical_os("darwin"), "darwin");
        assert_eq!(canonical_os("freebsd"), "freebsd");
    }

    #[test]
    fn test_canonical_arch_mapping_table() {
        assert_eq!(canonical_arch("32 bit"), "386");
        assert_eq!(canonical_arch("64 bit"), "amd64");
    }

    #[test]
    fn test_canonical_arch_passthrough() {
        assert_eq!(canonical_arch("arm64"), "arm64");
    }

    #[test]
    fn test_archive_suffix() {
        assert_eq!(archive_suffix("windows"), ".zip");
        assert_eq!(archive_suffix("linux"), ".tar.gz");
        assert_eq!(archive_suffix("darwin"), ".tar.gz");
        // Passthrough tokens get the default suffix
        assert_eq!(archive_suffix("freebsd"), ".tar.gz");
    }

    #[test]
    fn test_host_platform_detect_yields_menu_labels() {
        let host = HostPlatform::detect();
        assert!(["macOS", "windows", "linux"].contains(&host.os.as_str()));
        assert!(["32 bit", "64 bit"].contains(&host.arch.as_str()));
    }

    #[test]
    fn test_default_platform_detector() {
        let detector = DefaultPlatformDetector;
        assert_eq!(detector.detect(), HostPlatform::detect());
    }
}
