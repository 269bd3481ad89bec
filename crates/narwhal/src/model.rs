use indexmap::IndexMap;
use narwhal_core::{Category, ConnectionType, NetworkDevice};
use serde::{Deserialize, Serialize};

use crate::style::EdgeStyle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    pub id: String,
    pub category: Category,
    pub position: Position,
    /// The device record, passed through for click/detail callbacks.
    pub data: NetworkDevice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub category: ConnectionType,
    /// Bandwidth label, empty when unknown.
    pub label: String,
    pub animated: bool,
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Nodes + edges handed to the rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
    #[serde(default, rename = "isDemo")]
    pub is_demo: bool,
}

impl Topology {
    pub fn node(&self, id: &str) -> Option<&VisualNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Bounding box of node centers; renderers use it to fit the viewport.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.nodes.iter().map(|n| (n.position.x, n.position.y)))
    }

    /// Node counts per category, in [`Category::ALL`] order. Absent categories are omitted.
    pub fn category_counts(&self) -> IndexMap<Category, usize> {
        let mut counts: IndexMap<Category, usize> = IndexMap::new();
        for category in Category::ALL {
            let n = self.nodes.iter().filter(|n| n.category == category).count();
            if n > 0 {
                counts.insert(category, n);
            }
        }
        counts
    }
}
