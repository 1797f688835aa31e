//! JSON merge helpers for layered configuration.

use serde_json::Value;

/// Merge overlay values into the base, recursively overriding objects.
///
/// An explicit `null` in the overlay replaces the base value, so a later
/// layer can switch a bounded history back to unbounded.
pub(super) fn merge_json_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}
