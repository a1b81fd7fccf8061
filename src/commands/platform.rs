use anyhow::Result;
use log::debug;
use serde_json::json;

use crate::platform::HostPlatform;

/// Print the host platform as the menu labels the download UI would
/// preselect.
#[tracing::instrument]
pub fn platform(json: bool) -> Result<()> {
    let host = HostPlatform::detect();
    debug!("Detected host platform: {:?}", host);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "os": host.os,
                "arch": host.arch,
            }))?
        );
    } else {
        println!("os: {}", host.os);
        println!("arch: {}", host.arch);
    }
    Ok(())
}
