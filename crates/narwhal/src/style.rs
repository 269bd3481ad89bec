//! Presentation policy for edges. Nothing here feeds back into inference or layout.

use narwhal_core::ConnectionType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
}

pub fn edge_style(connection_type: ConnectionType) -> EdgeStyle {
    let (stroke, stroke_width, dash) = match connection_type {
        ConnectionType::Wired => ("#3b82f6", 2.0, None),
        ConnectionType::Wireless => ("#8b5cf6", 2.0, Some("5,5")),
        ConnectionType::Vpn => ("#10b981", 2.0, Some("10,5")),
        ConnectionType::Unknown => ("#94a3b8", 1.0, None),
    };
    EdgeStyle {
        stroke: stroke.to_string(),
        stroke_width,
        stroke_dasharray: dash.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wireless_and_vpn_are_dashed() {
        for t in ConnectionType::ALL {
            let dashed = edge_style(t).stroke_dasharray.is_some();
            assert_eq!(
                dashed,
                matches!(t, ConnectionType::Wireless | ConnectionType::Vpn),
                "{t}"
            );
        }
    }

    #[test]
    fn unknown_links_are_thinner() {
        assert!(
            edge_style(ConnectionType::Unknown).stroke_width
                < edge_style(ConnectionType::Wired).stroke_width
        );
    }
}
