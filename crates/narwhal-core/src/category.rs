use serde::{Deserialize, Serialize};

/// Closed set of visual device categories.
///
/// The same value drives layout tier selection and renderer icon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Router,
    Firewall,
    Switch,
    Server,
    Workstation,
    Printer,
    AccessPoint,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Router,
        Category::Firewall,
        Category::Switch,
        Category::Server,
        Category::Workstation,
        Category::Printer,
        Category::AccessPoint,
        Category::Unknown,
    ];

    /// Routers and firewalls anchor the inferred star topology.
    pub fn is_gateway(self) -> bool {
        matches!(self, Category::Router | Category::Firewall)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Router => "router",
            Category::Firewall => "firewall",
            Category::Switch => "switch",
            Category::Server => "server",
            Category::Workstation => "workstation",
            Category::Printer => "printer",
            Category::AccessPoint => "accessPoint",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(device_type: &str) -> Self {
        classify(device_type)
    }
}

/// Maps a free-text device type label onto a [`Category`].
///
/// Matching is exact after Unicode lower-casing; there is no trimming and no fuzzy
/// matching, so `"Access Point"` classifies but `" router"` does not.
pub fn classify(device_type: &str) -> Category {
    match device_type.to_lowercase().as_str() {
        "router" => Category::Router,
        "firewall" => Category::Firewall,
        "switch" => Category::Switch,
        "server" => Category::Server,
        "workstation" => Category::Workstation,
        "printer" => Category::Printer,
        "access point" => Category::AccessPoint,
        _ => Category::Unknown,
    }
}
