use narwhal_core::{NetworkDevice, classify};
use rustc_hash::FxHashSet;

use crate::model::{Position, VisualNode};

/// Resolves one id per device, in input order.
///
/// A device keeps its explicit id, or gets `device-{i}` when it has none. If that id is already
/// taken within this call the device falls back to `device-{i}`, then `device-{i}-{n}`.
pub fn assign_ids(devices: &[NetworkDevice]) -> Vec<String> {
    let mut used: FxHashSet<String> = FxHashSet::default();
    let mut ids = Vec::with_capacity(devices.len());

    for (i, device) in devices.iter().enumerate() {
        let preferred = match &device.id {
            Some(id) => id.clone(),
            None => generated_id(i),
        };
        let id = if used.contains(&preferred) {
            let repaired = repair_id(i, &used);
            tracing::warn!(
                index = i,
                id = %preferred,
                repaired = %repaired,
                "device id collides with an earlier device"
            );
            repaired
        } else {
            preferred
        };
        used.insert(id.clone());
        ids.push(id);
    }

    ids
}

fn generated_id(index: usize) -> String {
    format!("device-{index}")
}

fn repair_id(index: usize, used: &FxHashSet<String>) -> String {
    let base = generated_id(index);
    if !used.contains(&base) {
        return base;
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{base}-{n}");
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// One node per device, same order. Positions are placeholders until [`crate::layout`] runs.
pub fn build_nodes(devices: &[NetworkDevice]) -> Vec<VisualNode> {
    assign_ids(devices)
        .into_iter()
        .zip(devices)
        .map(|(id, device)| VisualNode {
            id,
            category: classify(&device.device_type),
            position: Position::default(),
            data: device.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ids_are_index_based() {
        let devices = vec![
            NetworkDevice::new("a", "router"),
            NetworkDevice::new("b", "switch").with_id("core"),
            NetworkDevice::new("c", "server"),
        ];
        assert_eq!(assign_ids(&devices), vec!["device-0", "core", "device-2"]);
    }

    #[test]
    fn colliding_ids_are_repaired() {
        let devices = vec![
            NetworkDevice::new("a", "router").with_id("device-1"),
            NetworkDevice::new("b", "switch"),
            NetworkDevice::new("c", "server").with_id("device-1"),
            NetworkDevice::new("d", "server").with_id("x"),
            NetworkDevice::new("e", "server").with_id("x"),
        ];
        assert_eq!(
            assign_ids(&devices),
            vec!["device-1", "device-1-1", "device-2", "x", "device-4"]
        );
    }
}
