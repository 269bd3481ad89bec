//! Fixed sample network used when no inventory exists, and as the canonical render fixture.

use narwhal_core::{ConnectionType, NetworkConnection, NetworkDevice};
use narwhal_layout::TieredOptions;

use crate::builder::build_nodes;
use crate::layout::layout_with;
use crate::model::Topology;
use crate::topology::visual_edges;

struct DemoDevice {
    id: &'static str,
    name: &'static str,
    device_type: &'static str,
    ip: &'static str,
    mac: &'static str,
    manufacturer: &'static str,
    model: &'static str,
    services: &'static [&'static str],
}

const DEVICES: [DemoDevice; 9] = [
    DemoDevice {
        id: "fw-01",
        name: "Perimeter Firewall",
        device_type: "firewall",
        ip: "192.168.1.1",
        mac: "00:1B:17:00:01:01",
        manufacturer: "Fortinet",
        model: "FortiGate 60F",
        services: &["https", "ssh", "ipsec"],
    },
    DemoDevice {
        id: "rt-01",
        name: "Core Router",
        device_type: "router",
        ip: "192.168.1.2",
        mac: "00:1B:17:00:01:02",
        manufacturer: "Cisco",
        model: "ISR 1100",
        services: &["ssh", "snmp"],
    },
    DemoDevice {
        id: "sw-01",
        name: "Office Switch",
        device_type: "switch",
        ip: "192.168.1.3",
        mac: "00:1B:17:00:01:03",
        manufacturer: "Cisco",
        model: "Catalyst 1000-24P",
        services: &["ssh", "snmp"],
    },
    DemoDevice {
        id: "srv-01",
        name: "File Server",
        device_type: "server",
        ip: "192.168.1.10",
        mac: "00:1B:17:00:01:10",
        manufacturer: "Dell",
        model: "PowerEdge T350",
        services: &["smb", "ssh"],
    },
    DemoDevice {
        id: "srv-02",
        name: "Domain Controller",
        device_type: "server",
        ip: "192.168.1.11",
        mac: "00:1B:17:00:01:11",
        manufacturer: "HPE",
        model: "ProLiant ML110",
        services: &["ldap", "dns", "kerberos"],
    },
    DemoDevice {
        id: "ws-01",
        name: "Reception PC",
        device_type: "workstation",
        ip: "192.168.1.101",
        mac: "00:1B:17:00:02:01",
        manufacturer: "Lenovo",
        model: "ThinkCentre M70q",
        services: &["rdp"],
    },
    DemoDevice {
        id: "ws-02",
        name: "Accounting PC",
        device_type: "workstation",
        ip: "192.168.1.102",
        mac: "00:1B:17:00:02:02",
        manufacturer: "HP",
        model: "EliteDesk 800",
        services: &["rdp"],
    },
    DemoDevice {
        id: "prn-01",
        name: "Office Printer",
        device_type: "printer",
        ip: "192.168.1.50",
        mac: "00:1B:17:00:03:01",
        manufacturer: "Brother",
        model: "MFC-L8900CDW",
        services: &["ipp", "http"],
    },
    DemoDevice {
        id: "ap-01",
        name: "Wireless AP",
        device_type: "access point",
        ip: "192.168.1.60",
        mac: "00:1B:17:00:04:01",
        manufacturer: "Ubiquiti",
        model: "UniFi U6 Lite",
        services: &["https"],
    },
];

/// `(source, target, type, bandwidth)`: firewall → router → switch → every leaf.
const LINKS: [(&str, &str, ConnectionType, &str); 8] = [
    ("fw-01", "rt-01", ConnectionType::Wired, "1 Gbps"),
    ("rt-01", "sw-01", ConnectionType::Wired, "1 Gbps"),
    ("sw-01", "srv-01", ConnectionType::Wired, "10 Gbps"),
    ("sw-01", "srv-02", ConnectionType::Wired, "10 Gbps"),
    ("sw-01", "ws-01", ConnectionType::Wired, "1 Gbps"),
    ("sw-01", "ws-02", ConnectionType::Wired, "1 Gbps"),
    ("sw-01", "prn-01", ConnectionType::Wired, "100 Mbps"),
    ("sw-01", "ap-01", ConnectionType::Wireless, "300 Mbps"),
];

pub fn demo_devices() -> Vec<NetworkDevice> {
    DEVICES
        .iter()
        .map(|d| NetworkDevice {
            ip_address: Some(d.ip.to_string()),
            mac_address: Some(d.mac.to_string()),
            manufacturer: Some(d.manufacturer.to_string()),
            model: Some(d.model.to_string()),
            is_online: Some(true),
            services: d.services.iter().map(|s| s.to_string()).collect(),
            ..NetworkDevice::new(d.name, d.device_type).with_id(d.id)
        })
        .collect()
}

pub fn demo_connections() -> Vec<NetworkConnection> {
    LINKS
        .iter()
        .map(|&(source, target, connection_type, bandwidth)| {
            NetworkConnection {
                is_active: Some(true),
                ..NetworkConnection::new(source, target, connection_type)
            }
            .with_bandwidth(bandwidth)
        })
        .collect()
}

/// The fixed 9-device / 8-link sample network, laid out with default spacing.
pub fn generate_demo_topology() -> Topology {
    demo_topology_with(&TieredOptions::default())
}

pub(crate) fn demo_topology_with(options: &TieredOptions) -> Topology {
    let nodes = layout_with(build_nodes(&demo_devices()), options);
    let edges = visual_edges(&demo_connections());
    Topology {
        nodes,
        edges,
        is_demo: true,
    }
}
