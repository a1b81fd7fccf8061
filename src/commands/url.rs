use anyhow::Result;
use log::debug;

use crate::platform::{DefaultPlatformDetector, PlatformDetector};
use crate::release::resolve;
use crate::selection::{Selection, Selections};

/// Options for the `url` command, one per CLI flag.
#[derive(Debug, Default)]
pub struct UrlOptions {
    pub os: Option<String>,
    pub arch: Option<String>,
    pub version: Option<String>,
    pub detect: bool,
    pub json: bool,
}

/// Resolve and print the asset URL for the given selections.
#[tracing::instrument(skip(base_url))]
pub fn url(options: UrlOptions, base_url: &str) -> Result<()> {
    let selections = build_selections(&options, &DefaultPlatformDetector);
    debug!("Resolving {:?}", selections);

    let resolved = resolve(&selections, base_url);
    if options.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", resolved);
    }
    Ok(())
}

/// Assemble the three menus, apply host detection if requested, then apply
/// explicit labels. Explicit labels win over detection.
fn build_selections<D: PlatformDetector>(options: &UrlOptions, detector: &D) -> Selections {
    let mut os = Selection::os();
    let mut arch = Selection::arch();
    let mut version = Selection::version();

    if options.detect {
        let host = detector.detect();
        debug!("Detected host platform: {:?}", host);
        os.choose(&host.os);
        arch.choose(&host.arch);
    }

    if let Some(label) = &options.os {
        os.choose(label);
    }
    if let Some(label) = &options.arch {
        arch.choose(label);
    }
    if let Some(label) = &options.version {
        version.choose(label);
    }

    Selections::capture(&os, &arch, &version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HostPlatform;

    struct FixedDetector(HostPlatform);

    impl PlatformDetector for FixedDetector {
        fn detect(&self) -> HostPlatform {
            self.0.clone()
        }
    }

    fn macos_host() -> FixedDetector {
        FixedDetector(HostPlatform {
            os: "macOS".to_string(),
            arch: "64 bit".to_string(),
        })
    }

    #[test]
    fn test_build_selections_defaults() {
        let selections = build_selections(&UrlOptions::default(), &macos_host());
        assert_eq!(selections.os, "linux");
        assert_eq!(selections.arch, "64 bit");
        assert_eq!(selections.version, "");
    }

    #[test]
    fn test_build_selections_explicit_labels() {
        let options = UrlOptions {
            os: Some("windows".to_string()),
            arch: Some("32 bit".to_string()),
            version: Some("v2.0.0".to_string()),
            ..Default::default()
        };
        let selections = build_selections(&options, &macos_host());
        assert_eq!(selections.os, "windows");
        assert_eq!(selections.arch, "32 bit");
        assert_eq!(selections.version, "v2.0.0");
    }

    #[test]
    fn test_build_selections_detect_preselects_host() {
        let options = UrlOptions {
            detect: true,
            ..Default::default()
        };
        let selections = build_selections(&options, &macos_host());
        assert_eq!(selections.os, "macOS");
        assert_eq!(selections.arch, "64 bit");
    }

    #[test]
    fn test_build_selections_explicit_wins_over_detect() {
        let options = UrlOptions {
            os: Some("linux".to_string()),
            detect: true,
            ..Default::default()
        };
        let selections = build_selections(&options, &macos_host());
        assert_eq!(selections.os, "linux");
    }
}
