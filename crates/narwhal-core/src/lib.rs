#![forbid(unsafe_code)]

//! Network device model + classifier (headless).
//!
//! Everything in this crate is pure and synchronous. The only fallible entry points sit at the
//! boundary where external device data enters (`inventory`, `config`).

pub mod category;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;

pub use category::{Category, classify};
pub use config::TopologyConfig;
pub use error::{Error, Result};
pub use inventory::Inventory;
pub use model::{ConnectionType, NetworkConnection, NetworkDevice};
