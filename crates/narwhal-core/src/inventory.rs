//! Boundary where external device data enters the core.
//!
//! Accepted shapes:
//! - a bare JSON array of devices
//! - an object `{ "devices": [...], "connections": [...] }` (both keys optional)

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{NetworkConnection, NetworkDevice};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub devices: Vec<NetworkDevice>,
    #[serde(default)]
    pub connections: Vec<NetworkConnection>,
}

impl Inventory {
    pub fn new(devices: Vec<NetworkDevice>) -> Self {
        Self {
            devices,
            connections: Vec::new(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let inventory = if value.is_array() {
            Self::new(serde_json::from_value(value)?)
        } else {
            serde_json::from_value::<Inventory>(value)?
        };
        inventory.validate()?;
        tracing::debug!(
            devices = inventory.devices.len(),
            connections = inventory.connections.len(),
            "inventory loaded"
        );
        Ok(inventory)
    }

    /// Rejects explicit device ids that appear more than once.
    ///
    /// Connection endpoints are checked later, once missing device ids have been generated.
    pub fn validate(&self) -> Result<()> {
        ensure_unique_device_ids(&self.devices)
    }
}

/// Fails with [`Error::DuplicateDeviceId`] on the first explicit id seen twice.
pub fn ensure_unique_device_ids(devices: &[NetworkDevice]) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for id in devices.iter().filter_map(|d| d.id.as_deref()) {
        if !seen.insert(id) {
            return Err(Error::DuplicateDeviceId { id: id.to_string() });
        }
    }
    Ok(())
}
