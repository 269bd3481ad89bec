//! Best-effort wiring for inventories that carry no explicit connections.
//!
//! The result is always a tree over the supplied ids: it keeps the picture connected without
//! pretending to know the real cabling.

use narwhal_core::model::connection_id;
use narwhal_core::{Category, ConnectionType, NetworkConnection, NetworkDevice, classify};

use crate::builder::assign_ids;
use crate::model::VisualNode;

/// Infers a connected, acyclic edge set for `devices`.
///
/// With `prioritize_gateways` and at least one router/firewall, gateways are chained in input
/// order and every other device hangs off the first gateway. Otherwise devices form a path in
/// input order.
pub fn infer_connections(
    devices: &[NetworkDevice],
    prioritize_gateways: bool,
) -> Vec<NetworkConnection> {
    let ids = assign_ids(devices);
    let classified = ids
        .iter()
        .zip(devices)
        .map(|(id, d)| (id.as_str(), classify(&d.device_type)));
    infer_from_classified(classified, prioritize_gateways)
}

/// Same as [`infer_connections`], for nodes that already carry ids and categories.
pub fn infer_from_nodes(nodes: &[VisualNode], prioritize_gateways: bool) -> Vec<NetworkConnection> {
    infer_from_classified(
        nodes.iter().map(|n| (n.id.as_str(), n.category)),
        prioritize_gateways,
    )
}

fn infer_from_classified<'a>(
    classified: impl Iterator<Item = (&'a str, Category)>,
    prioritize_gateways: bool,
) -> Vec<NetworkConnection> {
    let mut all: Vec<&str> = Vec::new();
    let mut gateways: Vec<&str> = Vec::new();
    let mut others: Vec<&str> = Vec::new();
    for (id, category) in classified {
        all.push(id);
        if category.is_gateway() {
            gateways.push(id);
        } else {
            others.push(id);
        }
    }

    let connections: Vec<NetworkConnection> = match gateways.first() {
        Some(&anchor) if prioritize_gateways => gateways
            .windows(2)
            .map(|pair| wired(pair[0], pair[1]))
            .chain(others.iter().map(|&other| wired(anchor, other)))
            .collect(),
        _ => all.windows(2).map(|pair| wired(pair[0], pair[1])).collect(),
    };

    tracing::debug!(
        devices = all.len(),
        gateways = gateways.len(),
        prioritize_gateways,
        edges = connections.len(),
        "inferred connections"
    );
    connections
}

fn wired(source: &str, target: &str) -> NetworkConnection {
    NetworkConnection {
        id: Some(connection_id(source, target)),
        source: source.to_string(),
        target: target.to_string(),
        connection_type: ConnectionType::Wired,
        is_active: Some(true),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devices(types: &[&str]) -> Vec<NetworkDevice> {
        types
            .iter()
            .enumerate()
            .map(|(i, t)| NetworkDevice::new(format!("d{i}"), *t))
            .collect()
    }

    fn pairs(connections: &[NetworkConnection]) -> Vec<(&str, &str)> {
        connections
            .iter()
            .map(|c| (c.source.as_str(), c.target.as_str()))
            .collect()
    }

    #[test]
    fn gateways_are_chained_before_the_star() {
        let conns = infer_connections(
            &devices(&["server", "router", "firewall", "printer", "router"]),
            true,
        );
        assert_eq!(
            pairs(&conns),
            vec![
                ("device-1", "device-2"),
                ("device-2", "device-4"),
                ("device-1", "device-0"),
                ("device-1", "device-3"),
            ]
        );
    }

    #[test]
    fn disabled_prioritization_builds_a_path() {
        let conns = infer_connections(&devices(&["server", "router", "printer"]), false);
        assert_eq!(
            pairs(&conns),
            vec![("device-0", "device-1"), ("device-1", "device-2")]
        );
    }

    #[test]
    fn generated_connections_carry_ids() {
        let conns = infer_connections(&devices(&["router", "switch"]), true);
        assert_eq!(conns[0].id.as_deref(), Some("edge-device-0-device-1"));
        assert_eq!(conns[0].connection_type, ConnectionType::Wired);
        assert!(conns[0].is_active());
    }

    #[test]
    fn tiny_inputs_have_no_edges() {
        assert!(infer_connections(&[], true).is_empty());
        assert!(infer_connections(&devices(&["router"]), true).is_empty());
        assert!(infer_connections(&devices(&["printer"]), false).is_empty());
    }
}
