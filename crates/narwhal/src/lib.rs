#![forbid(unsafe_code)]

//! `narwhal` turns an unordered network device inventory into a renderable topology.
//!
//! Pipeline: classify → build nodes → infer connections → tiered layout → styled edges.
//! Every stage is pure and synchronous; nothing here performs I/O or keeps state between calls.
//!
//! ```
//! use narwhal::{NetworkDevice, generate_topology_from_devices};
//!
//! let topology = generate_topology_from_devices(&[
//!     NetworkDevice::new("Edge", "Firewall"),
//!     NetworkDevice::new("Core", "Switch"),
//! ]);
//! assert_eq!(topology.nodes.len(), 2);
//! assert_eq!(topology.edges.len(), 1);
//! ```

pub mod builder;
pub mod demo;
pub mod error;
pub mod infer;
pub mod layout;
pub mod model;
pub mod style;
pub mod topology;

pub use narwhal_core::*;

pub use builder::{assign_ids, build_nodes};
pub use demo::generate_demo_topology;
pub use error::{Error, Result};
pub use infer::infer_connections;
pub use model::{Bounds, Position, Topology, VisualEdge, VisualNode};
pub use style::{EdgeStyle, edge_style};
pub use topology::{TopologyBuilder, generate_topology_from_devices};
