use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::platform::Platform;

const OS_RELEASE_PATH: &str = "/etc/os-release";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsInfo {
    pub architecture: String,
    pub machine_name: String,
    pub os: String,
    pub os_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
}

impl OsInfo {
    pub fn new(platform: &dyn Platform) -> Self {
        OsInfo {
            architecture: architecture().to_string(),
            machine_name: machine_name(),
            os: platform.os_name().to_string(),
            os_version: get_os_version().unwrap_or_else(|err| {
                tracing::warn!("Falling back to the OS family name: {err:#}");
                platform.os_name().to_string()
            }),
            distribution: fs::read_to_string(OS_RELEASE_PATH)
                .ok()
                .and_then(|content| pretty_name(&content)),
        }
    }
}

/// Process architecture, named the way Windows tooling names it.
fn architecture() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "X64",
        "x86" => "X86",
        "aarch64" => "Arm64",
        "arm" => "Arm",
        "s390x" => "S390x",
        "loongarch64" => "LoongArch64",
        "powerpc64" => "Ppc64le",
        other => other,
    }
}

fn machine_name() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

#[cfg(unix)]
fn uname_field(field: &[libc::c_char]) -> Result<&str> {
    use anyhow::Context;

    unsafe { std::ffi::CStr::from_ptr(field.as_ptr()) }
        .to_str()
        .context("Invalid UTF-8 in uname field")
}

#[cfg(unix)]
fn get_os_version() -> Result<String> {
    let utsname = unsafe {
        let mut info: libc::utsname = std::mem::zeroed();
        if libc::uname(&mut info) != 0 {
            return Err(anyhow::anyhow!("Failed to get uname information"));
        }
        info
    };

    let fields = [&utsname.sysname[..], &utsname.release[..], &utsname.version[..]];
    Ok(fields
        .iter()
        .map(|field| uname_field(field))
        .collect::<Result<Vec<_>>>()?
        .join(" "))
}

#[cfg(not(unix))]
fn get_os_version() -> Result<String> {
    Ok(format!("{} {}", std::env::consts::OS, std::env::consts::FAMILY))
}

/// Extracts `PRETTY_NAME` from the contents of an os-release file.
fn pretty_name(os_release: &str) -> Option<String> {
    os_release.lines().find_map(|line| {
        let value = line.trim().strip_prefix("PRETTY_NAME=")?;
        let value = value.trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}
