use pnet::datalink::{self, NetworkInterface};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterfaceKind {
    Ethernet,
    Wireless80211,
    Tunnel,
    Loopback,
    Unknown,
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterfaceKind::Ethernet => "Ethernet",
            InterfaceKind::Wireless80211 => "Wireless80211",
            InterfaceKind::Tunnel => "Tunnel",
            InterfaceKind::Loopback => "Loopback",
            InterfaceKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub kind: InterfaceKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// Operationally up: `IFF_UP` and `IFF_RUNNING` are both set.
    pub is_up: bool,
    pub addresses: Vec<IpAddr>,
}

impl InterfaceInfo {
    /// Interfaces the report lists: operational and not loopback.
    pub fn is_active(&self) -> bool {
        self.is_up && self.kind != InterfaceKind::Loopback
    }

    /// The address family label used in the report.
    pub fn family_label(addr: &IpAddr) -> &'static str {
        match addr {
            IpAddr::V4(_) => "InterNetwork",
            IpAddr::V6(_) => "InterNetworkV6",
        }
    }
}

impl From<NetworkInterface> for InterfaceInfo {
    fn from(iface: NetworkInterface) -> Self {
        let kind = interface_kind(&iface);
        let mac = iface
            .mac
            .filter(|mac| !mac.is_zero())
            .map(|mac| format!("{}", mac));
        let description = if iface.description.is_empty() {
            iface.name.clone()
        } else {
            iface.description.clone()
        };

        InterfaceInfo {
            kind,
            description,
            mac,
            is_up: iface.is_up() && iface.is_running(),
            addresses: iface.ips.iter().map(|network| network.ip()).collect(),
            name: iface.name,
        }
    }
}

fn interface_kind(iface: &NetworkInterface) -> InterfaceKind {
    if iface.is_loopback() {
        InterfaceKind::Loopback
    } else if iface.is_point_to_point() {
        InterfaceKind::Tunnel
    } else if Path::new("/sys/class/net")
        .join(&iface.name)
        .join("wireless")
        .exists()
    {
        InterfaceKind::Wireless80211
    } else if iface.mac.is_some_and(|mac| !mac.is_zero()) {
        InterfaceKind::Ethernet
    } else {
        InterfaceKind::Unknown
    }
}

pub fn get_interfaces() -> Vec<InterfaceInfo> {
    datalink::interfaces()
        .into_iter()
        .map(InterfaceInfo::from)
        .collect()
}
