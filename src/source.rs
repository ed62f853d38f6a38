//! Host-side field access.
//!
//! The parser only ever asks a host structure three things: whether a key is
//! set, and to hand a key back as text or as an integer. [`FieldSource`]
//! derives all three from a single lookup so that a host only implements
//! [`FieldSource::field`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::error::CredentialError;

/// Loosely typed value as handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Array(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
}

/// Shape of a [`FieldValue`], used in type mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Null,
    Bool,
    Integer,
    Float,
    Text,
    Array,
    Object,
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Null => FieldKind::Null,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Array(_) => FieldKind::Array,
            FieldValue::Object(_) => FieldKind::Object,
        }
    }

    /// Integer view of the value. Floats with no fractional part count,
    /// since JavaScript bridges hand every number over as a double.
    /// Integral values beyond the i64 range saturate to `i64::MIN`/`i64::MAX`
    /// so range checks still see them as integers.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            FieldValue::Integer(value) => Some(value),
            // `as` saturates at the i64 bounds
            FieldValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                Some(value as i64)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Null => write!(f, "null"),
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Text => write!(f, "text"),
            FieldKind::Array => write!(f, "array"),
            FieldKind::Object => write!(f, "object"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                // u64 beyond i64::MAX, or a real float
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(items) => FieldValue::Array(items.iter().map(FieldValue::from).collect()),
            Value::Object(map) => FieldValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// A key-value structure supplied by the host environment.
///
/// A key holding [`FieldValue::Null`] is treated exactly like an absent key.
pub trait FieldSource {
    /// Raw lookup of `key`.
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Whether `key` is present with a non-null value.
    fn has_key(&self, key: &str) -> bool {
        !matches!(self.field(key), None | Some(FieldValue::Null))
    }

    /// Fetch `key` as text. `Ok(None)` when absent.
    fn get_text(&self, key: &'static str) -> Result<Option<String>, CredentialError> {
        match self.field(key) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Text(value)) => Ok(Some(value)),
            Some(other) => Err(CredentialError::TypeMismatch {
                key,
                expected: FieldKind::Text,
                actual: other.kind(),
            }),
        }
    }

    /// Fetch `key` as an integer. `Ok(None)` when absent.
    fn get_int(&self, key: &'static str) -> Result<Option<i64>, CredentialError> {
        match self.field(key) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(value) => value
                .as_integer()
                .map(Some)
                .ok_or(CredentialError::TypeMismatch {
                    key,
                    expected: FieldKind::Integer,
                    actual: value.kind(),
                }),
        }
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, key: &str) -> Option<FieldValue> {
        (**self).field(key)
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, FieldValue, S> {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.get(key).cloned()
    }
}

impl FieldSource for BTreeMap<String, FieldValue> {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.get(key).cloned()
    }
}

impl FieldSource for Map<String, Value> {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.get(key).map(FieldValue::from)
    }
}

/// Anything but a JSON object holds no keys.
impl FieldSource for Value {
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.as_object().and_then(|map| map.get(key)).map(FieldValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(5432), Some(5432))]
    #[case(json!(5432.0), Some(5432))]
    #[case(json!(-1), Some(-1))]
    #[case(json!(u64::MAX), Some(i64::MAX))]
    #[case(json!(1e300), Some(i64::MAX))]
    #[case(json!(-1e300), Some(i64::MIN))]
    #[case(json!(5432.5), None)]
    #[case(json!("5432"), None)]
    #[case(json!(true), None)]
    fn integer_view(#[case] raw: Value, #[case] expected: Option<i64>) {
        assert_eq!(FieldValue::from(&raw).as_integer(), expected);
    }

    #[test]
    fn null_counts_as_absent() {
        let source = json!({ "hostname": null, "port": 25 });

        assert!(!source.has_key("hostname"));
        assert!(source.has_key("port"));
        assert!(!source.has_key("username"));
        assert_eq!(source.get_text("hostname"), Ok(None));
    }

    #[test]
    fn text_lookup_reports_actual_shape() {
        let source = json!({ "hostname": ["a", "b"] });

        assert_eq!(
            source.get_text("hostname"),
            Err(CredentialError::TypeMismatch {
                key: "hostname",
                expected: FieldKind::Text,
                actual: FieldKind::Array,
            })
        );
    }

    #[test]
    fn int_lookup_rejects_text() {
        let mut source = HashMap::new();
        source.insert("port".to_string(), FieldValue::from("993"));

        assert_eq!(
            source.get_int("port"),
            Err(CredentialError::TypeMismatch {
                key: "port",
                expected: FieldKind::Integer,
                actual: FieldKind::Text,
            })
        );
    }

    #[test]
    fn non_object_json_has_no_keys() {
        let source = json!(["hostname", "port"]);
        assert_eq!(source.field("hostname"), None);
    }

    #[test]
    fn nested_json_converts() {
        let value = FieldValue::from(&json!({ "a": [1, "b", null] }));
        let mut expected = BTreeMap::new();
        expected.insert(
            "a".to_string(),
            FieldValue::Array(vec![
                FieldValue::Integer(1),
                FieldValue::from("b"),
                FieldValue::Null,
            ]),
        );
        assert_eq!(value, FieldValue::Object(expected));
    }
}
