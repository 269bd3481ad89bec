use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, classify};

/// A discovered or manually entered endpoint.
///
/// Field names follow the camelCase JSON shape produced by the assessment front-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDevice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
}

impl NetworkDevice {
    pub fn new(name: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device_type: device_type.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn category(&self) -> Category {
        classify(&self.device_type)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Wired,
    Wireless,
    Vpn,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 4] = [
        ConnectionType::Wired,
        ConnectionType::Wireless,
        ConnectionType::Vpn,
        ConnectionType::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionType::Wired => "wired",
            ConnectionType::Wireless => "wireless",
            ConnectionType::Vpn => "vpn",
            ConnectionType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inferred or explicit link between two devices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub connection_type: ConnectionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl NetworkConnection {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        connection_type: ConnectionType,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            connection_type,
            ..Default::default()
        }
    }

    pub fn with_bandwidth(mut self, bandwidth: impl Into<String>) -> Self {
        self.bandwidth = Some(bandwidth.into());
        self
    }

    /// Links are active unless explicitly marked otherwise.
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    /// Returns the explicit id, or the generated `edge-{source}-{target}` form.
    pub fn resolved_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => connection_id(&self.source, &self.target),
        }
    }
}

pub fn connection_id(source: &str, target: &str) -> String {
    format!("edge-{source}-{target}")
}
