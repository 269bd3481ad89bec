use narwhal_core::inventory::ensure_unique_device_ids;
use narwhal_core::{Error as CoreError, NetworkConnection, NetworkDevice, TopologyConfig};
use narwhal_layout::TieredOptions;
use rustc_hash::FxHashSet;

use crate::builder::build_nodes;
use crate::demo::demo_topology_with;
use crate::error::Result;
use crate::infer::infer_from_nodes;
use crate::layout::{layout_with, tiered_options};
use crate::model::{Topology, VisualEdge, VisualNode};
use crate::style::edge_style;

/// Builds a topology with the default config: inferred wiring anchored on gateways, and the demo
/// fixture when `devices` is empty.
pub fn generate_topology_from_devices(devices: &[NetworkDevice]) -> Topology {
    TopologyBuilder::default().build(devices)
}

/// Config-driven topology entry point.
///
/// Construction turns the config's spacing into layout options (rejecting bad values with
/// [`narwhal_layout::Error::InvalidOptions`]), so building is total for inferred wiring.
#[derive(Debug, Clone)]
pub struct TopologyBuilder {
    config: TopologyConfig,
    layout: TieredOptions,
}

impl Default for TopologyBuilder {
    fn default() -> Self {
        Self {
            config: TopologyConfig::default(),
            layout: TieredOptions::default(),
        }
    }
}

impl TopologyBuilder {
    pub fn new(config: TopologyConfig) -> Result<Self> {
        let layout = tiered_options(&config)?;
        Ok(Self { config, layout })
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    pub fn build(&self, devices: &[NetworkDevice]) -> Topology {
        if devices.is_empty() && self.config.demo_when_empty {
            tracing::debug!("empty device list, using demo topology");
            return demo_topology_with(&self.layout);
        }

        let nodes = build_nodes(devices);
        let connections = infer_from_nodes(&nodes, self.config.prioritize_gateways);
        self.finish(nodes, &connections)
    }

    /// Builds a topology from caller-supplied wiring.
    ///
    /// Endpoints must name assigned device ids (explicit, or `device-{i}` for devices without
    /// one), and explicit device ids must be unique. An empty `connections` slice falls back to
    /// inference.
    pub fn build_with_connections(
        &self,
        devices: &[NetworkDevice],
        connections: &[NetworkConnection],
    ) -> Result<Topology> {
        if connections.is_empty() {
            return Ok(self.build(devices));
        }
        ensure_unique_device_ids(devices)?;

        let nodes = build_nodes(devices);
        let known: FxHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        for conn in connections {
            for endpoint in [&conn.source, &conn.target] {
                if !known.contains(endpoint.as_str()) {
                    return Err(CoreError::DanglingConnection {
                        connection_id: conn.resolved_id(),
                        device_id: endpoint.clone(),
                    }
                    .into());
                }
            }
            if conn.source == conn.target {
                return Err(CoreError::SelfLoop {
                    connection_id: conn.resolved_id(),
                    device_id: conn.source.clone(),
                }
                .into());
            }
        }

        Ok(self.finish(nodes, connections))
    }

    fn finish(&self, nodes: Vec<VisualNode>, connections: &[NetworkConnection]) -> Topology {
        let nodes = layout_with(nodes, &self.layout);
        let edges = visual_edges(connections);
        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "topology built");
        Topology {
            nodes,
            edges,
            is_demo: false,
        }
    }
}

/// Attaches presentation styles; edge ids are made unique within the result.
pub(crate) fn visual_edges(connections: &[NetworkConnection]) -> Vec<VisualEdge> {
    let mut used: FxHashSet<String> = FxHashSet::default();
    connections
        .iter()
        .enumerate()
        .map(|(i, conn)| {
            let preferred = conn.resolved_id();
            let id = if used.contains(&preferred) {
                repair_edge_id(&preferred, i, &used)
            } else {
                preferred
            };
            used.insert(id.clone());
            VisualEdge {
                id,
                source: conn.source.clone(),
                target: conn.target.clone(),
                category: conn.connection_type,
                label: conn.bandwidth.clone().unwrap_or_default(),
                animated: conn.is_active(),
                style: edge_style(conn.connection_type),
            }
        })
        .collect()
}

fn repair_edge_id(id: &str, index: usize, used: &FxHashSet<String>) -> String {
    let base = format!("{id}-{index}");
    if !used.contains(&base) {
        return base;
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{base}-{n}");
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
