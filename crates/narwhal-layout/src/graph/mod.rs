/// Placement class of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// A single horizontal row at the given tier, centered on x = 0.
    Row(u32),
    /// A wrapped grid whose first row sits at the given tier.
    Grid(u32),
    /// The vertical lane to the right of the main hierarchy.
    Side,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub band: Band,
}

impl Node {
    pub fn new(id: impl Into<String>, band: Band) -> Self {
        Self {
            id: id.into(),
            band,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Node positions in the graph's node order.
///
/// Results are positional rather than keyed, so ids never need to be unique for a layout to run.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub positions: Vec<(String, Point)>,
}

impl LayoutResult {
    /// First position recorded for `id`.
    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions
            .iter()
            .find(|(node_id, _)| node_id == id)
            .map(|(_, p)| *p)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions.iter().map(|(_, p)| *p)
    }
}
