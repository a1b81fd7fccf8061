//! Release asset URL resolution.
//!
//! A pure transform from a [`Selections`] snapshot to the address of the
//! matching release artifact. No network call is made here; the caller
//! decides what to do with the URL.

use serde::Serialize;

use crate::platform::{archive_suffix, canonical_arch, canonical_os};
use crate::selection::Selections;

/// Default release download location for midlang/mid.
pub const DEFAULT_BASE_URL: &str = "https://github.com/midlang/mid/releases/download";

/// Strip a single leading 'v' from a version label, if present.
///
/// Idempotent after the first strip: "v1.2.3" and "1.2.3" both yield "1.2.3".
pub fn normalize_version(label: &str) -> &str {
    label.strip_prefix('v').unwrap_or(label)
}

/// A resolved release asset address and the tokens it was composed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAsset {
    pub url: String,
    pub os: String,
    pub arch: String,
    pub version: String,
    pub suffix: String,
}

impl std::fmt::Display for ResolvedAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Compute the asset URL for a selection snapshot.
///
/// An empty or unpublished version still yields a syntactically valid URL;
/// whether the asset exists is not checked here.
pub fn resolve(selections: &Selections, base_url: &str) -> ResolvedAsset {
    let os = canonical_os(&selections.os);
    let suffix = archive_suffix(os);
    let arch = canonical_arch(&selections.arch);
    let version = normalize_version(&selections.version);

    let url = format!(
        "{}/v{}/mid{}.{}-{}{}",
        base_url.trim_end_matches('/'),
        version,
        version,
        os,
        arch,
        suffix
    );

    ResolvedAsset {
        url,
        os: os.to_string(),
        arch: arch.to_string(),
        version: version.to_string(),
        suffix: suffix.to_string(),
    }
}
