use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

const LOCALTIME_PATH: &str = "/etc/localtime";
const ZONEINFO_PREFIXES: &[&str] = &[
    "/usr/share/zoneinfo/",
    "/var/db/timezone/zoneinfo/",
    "/usr/lib/zoneinfo/",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeInfo {
    pub utc: DateTime<Utc>,
    pub local: DateTime<Local>,
    pub time_zone: String,
}

impl TimeInfo {
    pub fn new() -> Self {
        let utc = Utc::now();
        let local = utc.with_timezone(&Local);
        TimeInfo {
            utc,
            local,
            time_zone: detect_time_zone(
                std::env::var("TZ").ok(),
                fs::read_link(LOCALTIME_PATH)
                    .ok()
                    .map(|target| target.to_string_lossy().into_owned()),
                &local,
            ),
        }
    }

    pub fn utc_display(&self) -> String {
        self.utc.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn local_display(&self) -> String {
        self.local.format("%Y-%m-%d %H:%M:%S %:z").to_string()
    }
}

impl Default for TimeInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks a zone name from `TZ`, then the `/etc/localtime` link target,
/// then the bare UTC offset.
fn detect_time_zone(
    tz_var: Option<String>,
    localtime_link: Option<String>,
    local: &DateTime<Local>,
) -> String {
    if let Some(tz) = tz_var {
        let tz = tz.trim_start_matches(':');
        if !tz.is_empty() {
            return tz.to_string();
        }
    }

    if let Some(zone) = localtime_link.as_deref().and_then(|target| {
        ZONEINFO_PREFIXES
            .iter()
            .find_map(|prefix| target.split_once(prefix).map(|(_, zone)| zone))
    }) {
        return zone.to_string();
    }

    format!("UTC{}", local.format("%:z"))
}
