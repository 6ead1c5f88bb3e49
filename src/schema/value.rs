//! Scalar helpers for YAML property values.
//!
//! Property values stay as [`serde_yaml::Value`] until rendered. These
//! helpers define how scalars become SQL text fragments and how
//! scalar-or-sequence properties (`values`, primary key `columns`) normalize
//! to string lists.

use serde_yaml::Value;

/// Render a scalar value as text.
///
/// Strings are emitted verbatim (no quoting or escaping), numbers and
/// booleans in their plain form, null as the empty string. Non-scalar values
/// fall back to their flow-style YAML serialization.
pub fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Normalize a scalar-or-sequence value into a list of rendered strings.
///
/// A scalar becomes a one-element list; a sequence renders each element.
pub fn as_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().map(render_scalar).collect(),
        scalar => vec![render_scalar(scalar)],
    }
}

/// Loose truthiness for flag-like properties (`not_null`).
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
