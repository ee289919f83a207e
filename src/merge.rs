//! Deep merge of mapping trees, used by the `imports` protocol.
//!
//! Nested mappings merge key by key; every other value (scalars and sequences
//! alike) is replaced wholesale by the overlay.

use crate::{Mapping, Value};

/// Merges `overlay` into `base`; overlay values win on key collisions.
///
/// # Examples
///
/// ```rust
/// use serde_confyaml::merge::deep_merge;
/// use serde_confyaml::{yaml, Value};
///
/// let Value::Mapping(mut base) = yaml!({ "db": { "host": "a", "port": 1 }, "tags": ["x"] }) else {
///     unreachable!()
/// };
/// let Value::Mapping(overlay) = yaml!({ "db": { "port": 2 }, "tags": ["y", "z"] }) else {
///     unreachable!()
/// };
///
/// deep_merge(&mut base, overlay);
/// assert_eq!(Value::Mapping(base), yaml!({ "db": { "host": "a", "port": 2 }, "tags": ["y", "z"] }));
/// ```
pub fn deep_merge(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        match value {
            Value::Mapping(incoming) => match base.get_mut(&key) {
                Some(Value::Mapping(existing)) => deep_merge(existing, incoming),
                _ => {
                    base.insert(key, Value::Mapping(incoming));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}

/// Applies imported trees leftmost-first, then the document's own entries last.
///
/// Imported values that are not mappings carry no keys and are skipped.
pub(crate) fn merge_imports(own: Mapping, imported: Vec<Value>) -> Mapping {
    let mut merged = Mapping::new();
    for tree in imported {
        if let Value::Mapping(map) = tree {
            deep_merge(&mut merged, map);
        }
    }
    deep_merge(&mut merged, own);
    merged
}
