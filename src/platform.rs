//! Platform adapter.
//!
//! Everything that differs between Windows and POSIX hosts, apart from the
//! raw probes in [`crate::system_info`], goes through [`Platform`].

use anyhow::Result;

pub trait Platform {
    /// Display name of the OS family: `Windows`, `Linux`, `OSX` or `Other`.
    fn os_name(&self) -> &'static str;

    /// Separator between entries of path-like environment variables.
    fn path_separator(&self) -> char;

    /// Turns on ANSI escape interpretation for the attached console.
    fn enable_color_mode(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Windows;

#[derive(Debug, Clone, Copy, Default)]
pub struct Posix;

impl Platform for Windows {
    fn os_name(&self) -> &'static str {
        "Windows"
    }

    fn path_separator(&self) -> char {
        ';'
    }

    #[cfg(windows)]
    fn enable_color_mode(&self) -> Result<()> {
        colored::control::set_virtual_terminal(true)
            .map_err(|_| anyhow::anyhow!("Failed to enable virtual terminal processing"))
    }

    #[cfg(not(windows))]
    fn enable_color_mode(&self) -> Result<()> {
        Err(anyhow::anyhow!("No Windows console to configure"))
    }
}

impl Platform for Posix {
    fn os_name(&self) -> &'static str {
        if cfg!(target_os = "linux") {
            "Linux"
        } else if cfg!(target_os = "macos") {
            "OSX"
        } else {
            "Other"
        }
    }

    fn path_separator(&self) -> char {
        ':'
    }

    // POSIX terminals interpret escapes without being asked.
    fn enable_color_mode(&self) -> Result<()> {
        Ok(())
    }
}

/// The adapter for the platform this binary was built for.
pub fn current() -> &'static dyn Platform {
    #[cfg(windows)]
    {
        &Windows
    }
    #[cfg(not(windows))]
    {
        &Posix
    }
}
