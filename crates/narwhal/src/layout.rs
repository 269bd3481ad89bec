//! Category-aware driver for the tiered layout engine.

use narwhal_core::{Category, TopologyConfig};
use narwhal_layout::{Algorithm, Band, Graph, Node, TieredOptions};

use crate::error::Result;
use crate::model::{Position, VisualNode};

pub const GATEWAY_TIER: u32 = 0;
pub const SWITCH_TIER: u32 = 1;
pub const SERVER_TIER: u32 = 2;
pub const WORKSTATION_TIER: u32 = 3;

pub fn band_for(category: Category) -> Band {
    match category {
        Category::Router | Category::Firewall => Band::Row(GATEWAY_TIER),
        Category::Switch => Band::Row(SWITCH_TIER),
        Category::Server => Band::Row(SERVER_TIER),
        Category::Workstation => Band::Grid(WORKSTATION_TIER),
        Category::Printer | Category::AccessPoint | Category::Unknown => Band::Side,
    }
}

pub fn tiered_options(config: &TopologyConfig) -> Result<TieredOptions> {
    Ok(TieredOptions::new(
        config.horizontal_spacing,
        config.vertical_spacing,
        config.workstation_columns,
    )?)
}

/// Assigns positions with the default spacing (H = 200, V = 150, 4 workstation columns).
pub fn layout(nodes: Vec<VisualNode>) -> Vec<VisualNode> {
    layout_with(nodes, &TieredOptions::default())
}

pub fn layout_with(mut nodes: Vec<VisualNode>, options: &TieredOptions) -> Vec<VisualNode> {
    let graph = Graph::new(
        nodes
            .iter()
            .map(|n| Node::new(n.id.clone(), band_for(n.category)))
            .collect(),
    );
    let result = narwhal_layout::layout(&graph, &Algorithm::Tiered(options.clone()));
    for (node, point) in nodes.iter_mut().zip(result.points()) {
        node.position = Position {
            x: point.x,
            y: point.y,
        };
    }
    nodes
}
