//! Identifier nesting helpers for the positional-array wire dialect.
//!
//! The upstream wraps bare identifiers in one to four layers of
//! single-element arrays, and the depth differs per operation with no
//! discernible rule. Call sites state the depth explicitly through these
//! helpers instead of stacking `json!` brackets inline.

use serde_json::{json, Value};

/// `id` → `[id]`
pub fn wrap_single(id: &str) -> Value {
    json!([id])
}

/// `id` → `[[id]]`
pub fn wrap_double(id: &str) -> Value {
    json!([[id]])
}

/// `id` → `[[[id]]]`
pub fn wrap_triple(id: &str) -> Value {
    json!([[[id]]])
}

/// `id` → `[[[[id]]]]`
pub fn wrap_quadruple(id: &str) -> Value {
    json!([[[[id]]]])
}

/// `[a, b]` → `[[a], [b]]`. The upstream "double-wrapped id list" shape.
pub fn wrap_each_single(ids: &[String]) -> Value {
    Value::Array(ids.iter().map(|id| json!([id])).collect())
}

/// `[a, b]` → `[[[a]], [[b]]]`. The upstream "triple-wrapped id list" shape.
pub fn wrap_each_double(ids: &[String]) -> Value {
    Value::Array(ids.iter().map(|id| json!([[id]])).collect())
}

/// Peels exactly one single-element array layer. Returns `None` when the
/// value is not an array of length one.
pub fn unwrap_single(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) if items.len() == 1 => items.first(),
        _ => None,
    }
}

/// Peels exactly two layers.
pub fn unwrap_double(value: &Value) -> Option<&Value> {
    unwrap_single(value).and_then(unwrap_single)
}

/// Peels exactly three layers.
pub fn unwrap_triple(value: &Value) -> Option<&Value> {
    unwrap_double(value).and_then(unwrap_single)
}

/// Peels exactly four layers.
pub fn unwrap_quadruple(value: &Value) -> Option<&Value> {
    unwrap_triple(value).and_then(unwrap_single)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_inverts_wrap_at_every_depth() {
        let id = "src_0123";
        let expected = json!(id);

        assert_eq!(unwrap_single(&wrap_single(id)), Some(&expected));
        assert_eq!(unwrap_double(&wrap_double(id)), Some(&expected));
        assert_eq!(unwrap_triple(&wrap_triple(id)), Some(&expected));
        assert_eq!(unwrap_quadruple(&wrap_quadruple(id)), Some(&expected));
    }

    #[test]
    fn unwrap_refuses_wrong_depth() {
        let wrapped = wrap_double("nb_1");
        // One layer too few leaves an array, one too many finds nothing.
        assert_eq!(unwrap_single(&wrapped), Some(&json!(["nb_1"])));
        assert_eq!(unwrap_triple(&wrapped), None);
    }

    #[test]
    fn unwrap_refuses_multi_element_arrays() {
        let value = json!(["a", "b"]);
        assert_eq!(unwrap_single(&value), None);
    }

    #[test]
    fn list_wrapping_matches_captured_shapes() {
        let ids = vec![String::from("s1"), String::from("s2")];
        assert_eq!(wrap_each_single(&ids), json!([["s1"], ["s2"]]));
        assert_eq!(wrap_each_double(&ids), json!([[["s1"]], [["s2"]]]));
        assert_eq!(wrap_each_double(&[]), json!([]));
    }
}
