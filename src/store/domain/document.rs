//! Document payloads and write semantics.

use serde_json::{Map, Value};

/// Opaque key-value document stored in a backend.
pub type Document = Map<String, Value>;

/// How a `set` call treats an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Merge the supplied fields into the existing document, descending into
    /// nested maps present on both sides.
    Merge,
    /// Replace the existing document entirely.
    Overwrite,
}

impl WriteMode {
    /// Applies `incoming` to `existing` according to the write mode.
    pub fn apply(self, existing: &mut Document, incoming: &Document) {
        match self {
            Self::Merge => merge_nested(existing, incoming),
            Self::Overwrite => existing.clone_from(incoming),
        }
    }
}

/// Replaces the top-level fields named in `delta`, as an `update` call does.
///
/// Nested maps in `delta` replace the stored value wholesale.
pub fn update_fields(existing: &mut Document, delta: &Document) {
    for (field, value) in delta {
        existing.insert(field.clone(), value.clone());
    }
}

fn merge_nested(existing: &mut Document, incoming: &Document) {
    for (field, value) in incoming {
        if let (Some(Value::Object(current)), Value::Object(nested)) =
            (existing.get_mut(field), value)
        {
            merge_nested(current, nested);
            continue;
        }
        existing.insert(field.clone(), value.clone());
    }
}
