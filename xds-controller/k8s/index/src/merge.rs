//! Recursive JSON merging for template application.
//!
//! A virtual service spec is merged over its template's spec as plain JSON:
//! objects merge key-wise, arrays concatenate, scalars are overridden. A
//! service can steer the merge per dotted path with `templateOptions`:
//! `replace` takes the service's value wholesale and `delete` drops the key
//! from the merged result. The default `merge` modifier is a no-op marker.
//!
//! Key order is preserved (base keys first, then keys only the overlay
//! has), so merging is deterministic for hashing downstream.

use envoy_xds_controller_k8s_api::xds::{Modifier, TemplateOption};
use serde_json::Value;

/// Merges `overlay` onto `base`, honoring per-path modifiers.
pub(crate) fn merge(base: Value, overlay: Value, options: &[TemplateOption]) -> Value {
    let replace: Vec<&str> = options
        .iter()
        .filter(|opt| opt.modifier == Modifier::Replace)
        .map(|opt| opt.field.as_str())
        .collect();

    let mut merged = merge_values(base, overlay, "", &replace);

    for opt in options {
        if opt.modifier == Modifier::Delete {
            delete_path(&mut merged, &opt.field);
        }
    }
    merged
}

fn merge_values(base: Value, overlay: Value, path: &str, replace: &[&str]) -> Value {
    if replace.contains(&path) {
        return overlay;
    }
    match (base, overlay) {
        (Value::Object(base), Value::Object(mut overlay)) => {
            // Base keys first in their original order, then whatever only
            // the overlay carries.
            let mut merged = serde_json::Map::with_capacity(base.len() + overlay.len());
            for (key, base_value) in base {
                let child = join_path(path, &key);
                match overlay.shift_remove(&key) {
                    Some(overlay_value) => {
                        merged.insert(key, merge_values(base_value, overlay_value, &child, replace));
                    }
                    None => {
                        merged.insert(key, base_value);
                    }
                }
            }
            for (key, value) in overlay {
                merged.insert(key, value);
            }
            Value::Object(merged)
        }
        (Value::Array(base), Value::Array(overlay)) => {
            let mut merged = base;
            merged.extend(overlay);
            Value::Array(merged)
        }
        // Scalars and mismatched shapes: the overlay wins.
        (_, overlay) => overlay,
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

/// Removes the key at a dotted path. Unknown paths are a no-op.
fn delete_path(value: &mut Value, path: &str) {
    let mut keys = path.split('.').peekable();
    let mut current = value;
    while let Some(key) = keys.next() {
        let Some(map) = current.as_object_mut() else {
            return;
        };
        if keys.peek().is_none() {
            map.remove(key);
            return;
        }
        match map.get_mut(key) {
            Some(next) => current = next,
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn opt(field: &str, modifier: Modifier) -> TemplateOption {
        TemplateOption {
            field: field.to_owned(),
            modifier,
        }
    }

    #[test]
    fn objects_merge_recursively() {
        let base = json!({"virtualHost": {"name": "base", "domains": ["a.com"]}, "useRemoteAddress": false});
        let overlay = json!({"virtualHost": {"name": "override"}, "useRemoteAddress": true});
        let merged = merge(base, overlay, &[]);
        assert_eq!(
            merged,
            json!({"virtualHost": {"name": "override", "domains": ["a.com"]}, "useRemoteAddress": true}),
        );
    }

    #[test]
    fn arrays_concatenate_in_order() {
        let base = json!({"routes": [{"name": "r1"}, {"name": "r2"}]});
        let overlay = json!({"routes": [{"name": "r3"}]});
        let merged = merge(base, overlay, &[]);
        assert_eq!(
            merged["routes"],
            json!([{"name": "r1"}, {"name": "r2"}, {"name": "r3"}]),
        );
    }

    #[test]
    fn replace_takes_the_overlay_wholesale() {
        let base = json!({"virtualHost": {"routes": [{"name": "r1"}, {"name": "r2"}]}});
        let overlay = json!({"virtualHost": {"routes": [{"name": "r3"}]}});
        let merged = merge(
            base.clone(),
            overlay.clone(),
            &[opt("virtualHost.routes", Modifier::Replace)],
        );
        assert_eq!(merged["virtualHost"]["routes"], json!([{"name": "r3"}]));

        // Without the modifier the arrays concatenate.
        let merged = merge(base, overlay, &[]);
        assert_eq!(
            merged["virtualHost"]["routes"],
            json!([{"name": "r1"}, {"name": "r2"}, {"name": "r3"}]),
        );
    }

    #[test]
    fn delete_drops_the_merged_key() {
        let base = json!({"tlsConfig": {"secretRef": {"name": "cert"}}, "listener": {"name": "http"}});
        let merged = merge(base, json!({}), &[opt("tlsConfig", Modifier::Delete)]);
        assert_eq!(merged, json!({"listener": {"name": "http"}}));
    }

    #[test]
    fn delete_of_an_unknown_path_is_a_noop() {
        let base = json!({"listener": {"name": "http"}});
        let merged = merge(
            base.clone(),
            json!({}),
            &[opt("accessLog.path", Modifier::Delete)],
        );
        assert_eq!(merged, base);
    }

    #[test]
    fn scalars_prefer_the_overlay() {
        let merged = merge(json!({"a": 1, "b": "x"}), json!({"b": {"nested": true}}), &[]);
        assert_eq!(merged, json!({"a": 1, "b": {"nested": true}}));
    }

    #[test]
    fn empty_overlay_preserves_the_base() {
        let base = json!({"listener": {"name": "http"}, "useRemoteAddress": true});
        assert_eq!(merge(base.clone(), json!({}), &[]), base);
    }
}
