use crate::error::{Error, Result};

pub mod tiered;

#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Banded top-down hierarchy with a side lane (network topology default).
    Tiered(TieredOptions),
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Tiered(TieredOptions::default())
    }
}

/// Spacing for [`Algorithm::Tiered`].
///
/// Fields are private so every value in circulation has passed [`TieredOptions::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct TieredOptions {
    horizontal_spacing: f64,
    vertical_spacing: f64,
    grid_columns: usize,
}

impl Default for TieredOptions {
    fn default() -> Self {
        Self {
            horizontal_spacing: 200.0,
            vertical_spacing: 150.0,
            grid_columns: 4,
        }
    }
}

impl TieredOptions {
    pub fn new(horizontal_spacing: f64, vertical_spacing: f64, grid_columns: usize) -> Result<Self> {
        for (name, value) in [
            ("horizontal_spacing", horizontal_spacing),
            ("vertical_spacing", vertical_spacing),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidOptions {
                    message: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        if grid_columns == 0 {
            return Err(Error::InvalidOptions {
                message: "grid_columns must be at least 1".to_string(),
            });
        }
        Ok(Self {
            horizontal_spacing,
            vertical_spacing,
            grid_columns,
        })
    }

    /// Distance between neighbouring nodes in a row, and the side lane offset unit.
    pub fn horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing
    }

    /// Distance between tiers.
    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    /// Column count for [`crate::Band::Grid`] nodes.
    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }
}
