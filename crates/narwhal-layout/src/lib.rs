#![forbid(unsafe_code)]

//! Headless topology layout algorithms.
//!
//! `narwhal-layout` knows nothing about device categories: callers assign each node a [`Band`]
//! and the engine turns bands into coordinates. All work is CPU-bound and deterministic.
//! Options are validated when they are built, so running a layout cannot fail.

pub mod algo;
pub mod error;
pub mod graph;

pub use algo::{Algorithm, TieredOptions};
pub use error::{Error, Result};
pub use graph::{Band, Graph, LayoutResult, Node, Point};

/// Headless layout entry point.
pub fn layout(graph: &Graph, algorithm: &Algorithm) -> LayoutResult {
    match algorithm {
        Algorithm::Tiered(opts) => algo::tiered::layout(graph, opts),
    }
}
