//! This module gathers the facts the report prints.
//!
//! # Usage
//!
//! ```
//! use sysinfo_tool::get_machine_info;
//!
//! fn main() -> anyhow::Result<()> {
//!     let machine_info = get_machine_info()?;
//!     println!("Machine Info: {:?}", machine_info.os);
//!     Ok(())
//! }
//! ```

pub mod environment;
pub mod locale;
pub mod network;
pub mod os;
pub mod time;
pub mod user;

use anyhow::Result;
use environment::EnvironmentInfo;
use locale::LocaleInfo;
use network::InterfaceInfo;
use os::OsInfo;
use serde::{Deserialize, Serialize};
use time::TimeInfo;
use user::UserInfo;

use crate::platform::{self, Platform};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineInfo {
    pub tool_version: String,
    pub os: OsInfo,
    pub time: TimeInfo,
    pub locale: LocaleInfo,
    pub user: UserInfo,
    pub network: Vec<InterfaceInfo>,
    pub environment: EnvironmentInfo,
}

pub fn get_machine_info() -> Result<MachineInfo> {
    get_machine_info_for(platform::current())
}

pub fn get_machine_info_for(platform: &dyn Platform) -> Result<MachineInfo> {
    let os = OsInfo::new(platform);
    let user = UserInfo::new(&os.machine_name);

    let machine_info = MachineInfo {
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        time: TimeInfo::new(),
        locale: LocaleInfo::new(),
        network: network::get_interfaces(),
        environment: EnvironmentInfo::new(platform.path_separator()),
        os,
        user,
    };

    if tracing::enabled!(tracing::Level::DEBUG) {
        let snapshot = serde_json::to_string(&machine_info)?;
        tracing::debug!(%snapshot, "Collected machine info");
    }

    Ok(machine_info)
}
