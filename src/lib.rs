//! A tool for printing a snapshot of the host environment.
//!
//! This crate gathers facts about the machine it's running on and prints them
//! as a coloured, two-column report. It covers the OS and architecture, time
//! and locale, the current user, active network interfaces, and every
//! environment variable. Path-like variables are split one entry per line
//! and `LS_COLORS` is decoded into colour samples.
//!
//! # Platform Support
//! - **Linux**: Full support, including `/etc/os-release` and the
//!   `/etc/localtime` zone name.
//! - **Other Unix**: Everything except the distribution name.
//! - **Windows**: `;`-separated path variables and virtual-terminal colour
//!   mode. OS version and user name come from the environment.
//!
//! # Environment Setup
//! - Set `SYSINFO_TOOL_LOG` (e.g. `debug`) to see diagnostics on stderr.

pub mod logging;
pub mod platform;
pub mod report;
pub mod system_info;

pub use report::Printer;
pub use system_info::{get_machine_info, MachineInfo};
