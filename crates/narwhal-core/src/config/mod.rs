use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub const DEFAULT_HORIZONTAL_SPACING: f64 = 200.0;
pub const DEFAULT_VERTICAL_SPACING: f64 = 150.0;
pub const DEFAULT_WORKSTATION_COLUMNS: usize = 4;

/// Knobs for a single topology build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopologyConfig {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub workstation_columns: usize,
    /// Anchor inferred links on routers/firewalls instead of chaining devices in input order.
    pub prioritize_gateways: bool,
    /// Substitute the demo fixture when the device list is empty.
    pub demo_when_empty: bool,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
            workstation_columns: DEFAULT_WORKSTATION_COLUMNS,
            prioritize_gateways: true,
            demo_when_empty: true,
        }
    }
}

impl TopologyConfig {
    pub fn from_value(value: Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Deep-merges a partial JSON object onto this config.
    ///
    /// Objects merge key by key; any other value replaces what was there.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self> {
        let mut base = serde_json::to_value(self)?;
        if !base.is_object() {
            base = Value::Object(Map::new());
        }
        deep_merge_value(&mut base, overrides);
        Self::from_value(base)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        if self.workstation_columns == 0 {
            return Err(Error::InvalidConfig {
                message: "workstationColumns must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
