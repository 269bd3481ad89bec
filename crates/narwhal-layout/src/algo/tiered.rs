use std::collections::BTreeMap;

use crate::algo::TieredOptions;
use crate::graph::{Band, Graph, LayoutResult, Point};

/// Places nodes in horizontal bands, top to bottom by tier.
///
/// - `Row(t)` nodes share y = t * V and are centered on x = 0 in input order.
/// - `Grid(t)` nodes wrap every `grid_columns`; row r sits at y = (t + r) * V and each grid row is
///   centered on its own occupancy.
/// - `Side` nodes stack at x = 2 * H, y = (i + 1) * V.
///
/// Positions depend only on the band partition and the per-band order, never on node ids, so two
/// calls with the same graph are bit-identical.
pub fn layout(graph: &Graph, opts: &TieredOptions) -> LayoutResult {
    let h = opts.horizontal_spacing();
    let v = opts.vertical_spacing();
    let columns = opts.grid_columns();

    let mut rows: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    let mut grids: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    let mut side: Vec<usize> = Vec::new();
    for (idx, n) in graph.nodes.iter().enumerate() {
        match n.band {
            Band::Row(tier) => rows.entry(tier).or_default().push(idx),
            Band::Grid(tier) => grids.entry(tier).or_default().push(idx),
            Band::Side => side.push(idx),
        }
    }

    let mut placed = vec![Point { x: 0.0, y: 0.0 }; graph.nodes.len()];

    for (tier, members) in &rows {
        let count = members.len();
        for (i, &idx) in members.iter().enumerate() {
            placed[idx] = Point {
                x: centered(i, count, h),
                y: f64::from(*tier) * v,
            };
        }
    }

    for (tier, members) in &grids {
        for (i, &idx) in members.iter().enumerate() {
            let row = i / columns;
            let col = i % columns;
            let row_len = (members.len() - row * columns).min(columns);
            placed[idx] = Point {
                x: centered(col, row_len, h),
                y: (f64::from(*tier) + row as f64) * v,
            };
        }
    }

    for (i, &idx) in side.iter().enumerate() {
        placed[idx] = Point {
            x: 2.0 * h,
            y: (i + 1) as f64 * v,
        };
    }

    tracing::trace!(
        nodes = graph.nodes.len(),
        row_tiers = rows.len(),
        grid_tiers = grids.len(),
        side = side.len(),
        "tiered layout"
    );

    let positions = graph
        .nodes
        .iter()
        .zip(placed)
        .map(|(n, p)| (n.id.clone(), p))
        .collect();
    LayoutResult { positions }
}

fn centered(index: usize, count: usize, spacing: f64) -> f64 {
    spacing * (index as f64 - (count as f64 - 1.0) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_is_symmetric() {
        assert_eq!(centered(0, 1, 200.0), 0.0);
        assert_eq!(centered(0, 2, 200.0), -100.0);
        assert_eq!(centered(1, 2, 200.0), 100.0);
        assert_eq!(centered(0, 3, 200.0), -200.0);
        assert_eq!(centered(2, 3, 200.0), 200.0);
    }

    #[test]
    fn grid_rows_use_their_own_width() {
        let graph = Graph::new(
            (0..5)
                .map(|i| crate::graph::Node::new(format!("n{i}"), Band::Grid(0)))
                .collect(),
        );
        let result = layout(&graph, &TieredOptions::default());
        assert_eq!(result.get("n4"), Some(Point { x: 0.0, y: 150.0 }));
    }
}
