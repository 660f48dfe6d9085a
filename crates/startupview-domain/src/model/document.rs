//! Document - A raw, schemaless record as the store hands it over
//!
//! The store knows nothing about startups or investors. It returns an id
//! and a bag of typed fields; the mappers in `service::mapper` turn that
//! into entities.

use std::collections::BTreeMap;

/// A single field value inside a document
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Non-negative whole number, accepting integers and finite doubles
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Integer(n) => u64::try_from(*n).ok(),
            FieldValue::Double(d) if d.is_finite() && *d >= 0.0 => Some(d.trunc() as u64),
            _ => None,
        }
    }

    /// Build a map value from `(key, value)` pairs
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        FieldValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(values: Vec<FieldValue>) -> Self {
        FieldValue::Array(values)
    }
}

/// A document: its id within the collection plus its fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: String,
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder: set a field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builder: replace all fields
    pub fn with_fields(mut self, fields: BTreeMap<String, FieldValue>) -> Self {
        self.fields = fields;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// String field, `None` when missing or not a string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Array field, empty when missing or not an array
    pub fn get_array(&self, name: &str) -> &[FieldValue] {
        self.get(name).and_then(FieldValue::as_array).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let doc = Document::new("d-1")
            .with_field("name", "Acme")
            .with_field("count", 3i64)
            .with_field("tags", vec![FieldValue::from("a")]);

        assert_eq!(doc.id(), "d-1");
        assert_eq!(doc.get_str("name"), Some("Acme"));
        assert_eq!(doc.get_str("count"), None);
        assert_eq!(doc.get_array("tags").len(), 1);
        assert!(doc.get_array("missing").is_empty());
        assert!(doc.get_array("name").is_empty());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(FieldValue::Integer(7).as_u64(), Some(7));
        assert_eq!(FieldValue::Integer(-1).as_u64(), None);
        assert_eq!(FieldValue::Double(4.9).as_u64(), Some(4));
        assert_eq!(FieldValue::Double(f64::NAN).as_u64(), None);
        assert_eq!(FieldValue::from("7").as_u64(), None);
    }

    #[test]
    fn test_map_builder() {
        let value = FieldValue::map([("id", "s1"), ("name", "Acme")]);
        let map = value.as_map().unwrap();
        assert_eq!(map.get("id").and_then(FieldValue::as_str), Some("s1"));
    }
}
