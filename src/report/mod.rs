//! Rendering of a [`MachineInfo`] as a two-column, sectioned text report.
//!
//! # Usage
//!
//! ```no_run
//! use sysinfo_tool::{get_machine_info, Printer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let machine_info = get_machine_info()?;
//!     let stdout = std::io::stdout();
//!     Printer::new(stdout.lock(), true).report(&machine_info)?;
//!     Ok(())
//! }
//! ```

pub mod ls_colors;
pub mod sgr;

use anyhow::Result;
use std::io::{self, Write};

use crate::system_info::environment::{self, EnvironmentInfo, VariableKind};
use crate::system_info::network::InterfaceInfo;
use crate::system_info::MachineInfo;

pub const HEADER_WIDTH: usize = 80;
pub const DEFAULT_NAME_WIDTH: usize = 16;
pub const ENV_VAR_WIDTH: usize = 32;
pub const LS_ITEM_WIDTH: usize = 20;
pub const COLOR_MARKER: &str = "(Color)";

const HEADER_CHAR: char = '-';
const PRE_PAD_COUNT: usize = 3;

const HEADER_COLOR: Rgb = Rgb(0x40, 0xa0, 0xf0);
const LABEL_COLOR: Rgb = Rgb(0x60, 0xc0, 0x60);
const SEPARATOR_COLOR: Rgb = Rgb(0xa0, 0xa0, 0xa0);
const VALUE_COLOR: Rgb = Rgb(0xe0, 0xe0, 0xe0);

/// A fixed 24-bit foreground colour.
///
/// Always written as `ESC[38;2;r;g;bm`, whatever `COLORTERM` says, so the
/// label, separator and value shades stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn paint(self, text: &str) -> String {
        let Rgb(r, g, b) = self;
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    }
}

/// True when `err` comes from writing to a pipe whose reader went away.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}

/// Builds the banner line for a section heading, without colour.
pub fn banner(heading: &str) -> String {
    let prefix = HEADER_CHAR.to_string().repeat(PRE_PAD_COUNT);
    let used = PRE_PAD_COUNT + 2 + heading.chars().count();
    let padding = HEADER_WIDTH.saturating_sub(used);
    format!(
        "{prefix} {heading} {}",
        HEADER_CHAR.to_string().repeat(padding)
    )
}

pub struct Printer<W> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Printer { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Rgb) -> String {
        if self.color {
            color.paint(text)
        } else {
            text.to_string()
        }
    }

    pub fn header(&mut self, heading: &str) -> Result<()> {
        let line = self.paint(&banner(heading), HEADER_COLOR);
        writeln!(self.out)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn label(&mut self, name: &str, width: usize) -> Result<()> {
        let label = self.paint(&format!("{name:>width$}"), LABEL_COLOR);
        let separator = self.paint(": ", SEPARATOR_COLOR);
        write!(self.out, "{label}{separator}")?;
        Ok(())
    }

    fn indent(&mut self, width: usize) -> Result<()> {
        write!(self.out, "{:1$}", "", width + 2)?;
        Ok(())
    }

    pub fn value(&mut self, name: &str, value: &str) -> Result<()> {
        self.values(name, [value], DEFAULT_NAME_WIDTH)
    }

    /// Prints `name` once and each value on its own line, aligned under the
    /// first.
    pub fn values<I, S>(&mut self, name: &str, values: I, width: usize) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.label(name, width)?;
        let mut first = true;
        for value in values {
            if first {
                first = false;
            } else {
                self.indent(width)?;
            }
            let value = self.paint(value.as_ref(), VALUE_COLOR);
            writeln!(self.out, "{value}")?;
        }
        if first {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Prints one line per decodable `key=codes` item, with a sample of the
    /// colour and the category description when the key is known.
    pub fn ls_colors(&mut self, name: &str, value: &str) -> Result<()> {
        self.label(name, ENV_VAR_WIDTH)?;
        let entries = ls_colors::parse(value);
        if entries.is_empty() {
            writeln!(self.out)?;
        }

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.indent(ENV_VAR_WIDTH)?;
            }
            let item = self.paint(&format!("{:<1$}", entry.item, LS_ITEM_WIDTH), VALUE_COLOR);
            let marker = if self.color {
                entry.rendition().paint(COLOR_MARKER).to_string()
            } else {
                COLOR_MARKER.to_string()
            };
            write!(self.out, "{item} {marker}")?;
            if let Some(description) = entry.description() {
                write!(self.out, " {description}")?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    pub fn environment(&mut self, env: &EnvironmentInfo) -> Result<()> {
        for (key, value) in &env.variables {
            match environment::classify(key) {
                VariableKind::LsColors => self.ls_colors(key, value)?,
                VariableKind::Split => self.values(key, env.split(value), ENV_VAR_WIDTH)?,
                VariableKind::Plain => self.values(key, [value], ENV_VAR_WIDTH)?,
            }
        }
        Ok(())
    }

    /// Lists active interfaces, separated by blank lines.
    pub fn network(&mut self, interfaces: &[InterfaceInfo]) -> Result<()> {
        let mut first = true;
        for iface in interfaces.iter().filter(|iface| iface.is_active()) {
            if first {
                first = false;
            } else {
                writeln!(self.out)?;
            }
            self.value("Type", &iface.kind.to_string())?;
            self.value("Description", &iface.description)?;
            if iface.description != iface.name {
                self.value("Name", &iface.name)?;
            }
            if let Some(mac) = &iface.mac {
                self.value("MAC", mac)?;
            }
            for addr in &iface.addresses {
                self.value(InterfaceInfo::family_label(addr), &addr.to_string())?;
            }
        }
        Ok(())
    }

    pub fn report(&mut self, info: &MachineInfo) -> Result<()> {
        self.value("Tool Version", &info.tool_version)?;

        self.header("Machine")?;
        self.value("Architecture", &info.os.architecture)?;
        self.value("MachineName", &info.os.machine_name)?;
        self.value("OS", &info.os.os)?;
        self.value("OSVersion", &info.os.os_version)?;
        if let Some(distribution) = &info.os.distribution {
            self.value("Distribution", distribution)?;
        }

        self.header("Time")?;
        self.value("UTC Time", &info.time.utc_display())?;
        self.value("Local Time", &info.time.local_display())?;
        self.value("TimeZone", &info.time.time_zone)?;

        self.header("Region/Culture")?;
        self.value("Region", &info.locale.region)?;
        self.value("Culture", &info.locale.culture)?;
        self.value("UICulture", &info.locale.ui_culture)?;

        self.header("User")?;
        self.value("Domain", &info.user.domain)?;
        self.value("User", &info.user.user)?;

        self.header("Network")?;
        self.network(&info.network)?;

        self.header("Environment")?;
        self.environment(&info.environment)?;

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_info::network::InterfaceKind;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    fn render(f: impl FnOnce(&mut Printer<Vec<u8>>) -> Result<()>) -> Result<String> {
        let mut printer = Printer::new(Vec::new(), false);
        f(&mut printer)?;
        Ok(String::from_utf8(printer.into_inner())?)
    }

    #[test]
    fn test_colored_value_uses_distinct_24bit_shades() -> Result<()> {
        let mut printer = Printer::new(Vec::new(), true);
        printer.value("OS", "Linux")?;
        let out = String::from_utf8(printer.into_inner())?;

        assert_eq!(
            out,
            format!(
                "\x1b[38;2;96;192;96m{:>16}\x1b[0m\x1b[38;2;160;160;160m: \x1b[0m\x1b[38;2;224;224;224mLinux\x1b[0m\n",
                "OS"
            )
        );
        Ok(())
    }

    #[test]
    fn test_colored_header_uses_24bit_blue() -> Result<()> {
        let mut printer = Printer::new(Vec::new(), true);
        printer.header("Time")?;
        let out = String::from_utf8(printer.into_inner())?;
        assert_eq!(out, format!("\n\x1b[38;2;64;160;240m{}\x1b[0m\n", banner("Time")));
        Ok(())
    }

    #[test]
    fn test_is_broken_pipe() {
        let closed = anyhow::Error::new(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("Failed to write report");
        assert!(is_broken_pipe(&closed));

        let denied = anyhow::Error::new(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!is_broken_pipe(&denied));
        assert!(!is_broken_pipe(&anyhow::anyhow!("Broken pipe")));
    }

    #[test]
    fn test_banner_has_fixed_width() {
        for len in 0..(HEADER_WIDTH - PRE_PAD_COUNT - 2) {
            let heading = "x".repeat(len);
            assert_eq!(banner(&heading).chars().count(), HEADER_WIDTH, "heading length {len}");
        }
    }

    #[test]
    fn test_banner_layout() {
        let line = banner("Machine");
        assert!(line.starts_with("--- Machine -"));
        assert!(line.ends_with('-'));
    }

    #[test]
    fn test_banner_long_heading_not_padded() {
        let heading = "y".repeat(90);
        assert_eq!(banner(&heading), format!("--- {heading} "));
    }

    #[test]
    fn test_header_starts_with_blank_line() -> Result<()> {
        let out = render(|p| p.header("Time"))?;
        assert_eq!(out, format!("\n{}\n", banner("Time")));
        Ok(())
    }

    #[test]
    fn test_value_label_right_aligned() -> Result<()> {
        let out = render(|p| p.value("OS", "Linux"))?;
        assert_eq!(out, format!("{}OS: Linux\n", " ".repeat(14)));

        let line = out.trim_end_matches('\n');
        let (label, _) = line.split_once(": ").expect("separator");
        assert_eq!(label.len(), DEFAULT_NAME_WIDTH);
        Ok(())
    }

    #[test]
    fn test_long_label_overflows() -> Result<()> {
        let name = "A_VERY_LONG_VARIABLE_NAME_THAT_OVERFLOWS";
        let out = render(|p| p.values(name, ["v"], ENV_VAR_WIDTH))?;
        assert_eq!(out, format!("{name}: v\n"));
        Ok(())
    }

    #[test]
    fn test_multiple_values_aligned() -> Result<()> {
        let out = render(|p| p.values("PATH", ["/usr/bin", "/bin"], 8))?;
        assert_eq!(out, "    PATH: /usr/bin\n          /bin\n");
        Ok(())
    }

    #[test]
    fn test_ls_colors_lines() -> Result<()> {
        let out = render(|p| p.ls_colors("LS_COLORS", "di=01;34:rs=0:bogus::"))?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("{:>32}: {:<20} (Color) directory", "LS_COLORS", "di=01;34")
        );
        assert_eq!(lines[1], format!("{:34}{:<20} (Color)", "", "rs=0"));
        Ok(())
    }

    #[test]
    fn test_ls_colors_without_entries() -> Result<()> {
        let out = render(|p| p.ls_colors("LS_COLORS", ":"))?;
        assert_eq!(out, format!("{:>32}: \n", "LS_COLORS"));
        Ok(())
    }

    #[test]
    fn test_environment_order_and_completeness() -> Result<()> {
        let env = EnvironmentInfo::from_vars(
            [("b", "2"), ("A", "1"), ("a", "3"), ("_", "4")],
            ':',
        );
        let out = render(|p| p.environment(&env))?;
        let keys: Vec<&str> = out
            .lines()
            .map(|line| line.split_once(": ").expect("separator").0.trim())
            .collect();
        assert_eq!(keys, vec!["A", "_", "a", "b"]);
        Ok(())
    }

    #[test]
    fn test_network_lists_active_interfaces_only() -> Result<()> {
        let interfaces = vec![
            InterfaceInfo {
                name: "lo".to_string(),
                kind: InterfaceKind::Loopback,
                description: "lo".to_string(),
                mac: None,
                is_up: true,
                addresses: vec![IpAddr::V4(Ipv4Addr::LOCALHOST)],
            },
            InterfaceInfo {
                name: "eth0".to_string(),
                kind: InterfaceKind::Ethernet,
                description: "eth0".to_string(),
                mac: Some("52:54:00:12:34:56".to_string()),
                is_up: true,
                addresses: vec![
                    IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5)),
                    IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)),
                ],
            },
            InterfaceInfo {
                name: "eth1".to_string(),
                kind: InterfaceKind::Ethernet,
                description: "eth1".to_string(),
                mac: None,
                is_up: false,
                addresses: Vec::new(),
            },
            InterfaceInfo {
                name: "wlan0".to_string(),
                kind: InterfaceKind::Wireless80211,
                description: "Intel Wi-Fi 6 AX201".to_string(),
                mac: None,
                is_up: true,
                addresses: Vec::new(),
            },
        ];

        let out = render(|p| p.network(&interfaces))?;
        let expected = [
            "            Type: Ethernet",
            "     Description: eth0",
            "             MAC: 52:54:00:12:34:56",
            "    InterNetwork: 10.0.0.5",
            "  InterNetworkV6: fe80::1",
            "",
            "            Type: Wireless80211",
            "     Description: Intel Wi-Fi 6 AX201",
            "            Name: wlan0",
        ];
        assert_eq!(out.lines().collect::<Vec<_>>(), expected);
        Ok(())
    }
}
