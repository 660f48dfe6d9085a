//! Fixture files - Seed an in-memory store from JSON or YAML
//!
//! ```yaml
//! startups:
//!   s1:
//!     startup_name: Acme
//!     startup_industry_id: ind-1
//! investors:
//!   v1:
//!     investor_name: Seed Fund
//!     investor_startups:
//!       - { id: s1, name: Acme }
//! industry:
//!   ind-1: { industry_name: Fintech, industry_count: 1 }
//! ```
//!
//! Top-level keys are collection names; each maps document ids to fields.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use startupview_domain::{Collection, Document, FieldValue};
use tracing::info;

use super::in_memory::InMemoryDocumentStore;
use crate::error::AdapterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// `.yaml` / `.yml` are YAML, anything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => FixtureFormat::Yaml,
            _ => FixtureFormat::Json,
        }
    }
}

/// Load a fixture file into a fresh in-memory store
pub fn load_fixture(path: &Path) -> Result<InMemoryDocumentStore, AdapterError> {
    let content = std::fs::read_to_string(path)?;
    let store = parse_fixture(&content, FixtureFormat::from_path(path))?;

    info!(
        path = %path.display(),
        startups = store.count(Collection::Startups).unwrap_or(0),
        investors = store.count(Collection::Investors).unwrap_or(0),
        industries = store.count(Collection::Industries).unwrap_or(0),
        "loaded fixture"
    );
    Ok(store)
}

/// Parse fixture content into a fresh in-memory store
pub fn parse_fixture(
    content: &str,
    format: FixtureFormat,
) -> Result<InMemoryDocumentStore, AdapterError> {
    let root: Value = match format {
        FixtureFormat::Json => serde_json::from_str(content)?,
        FixtureFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let Value::Object(collections) = root else {
        return Err(AdapterError::Fixture(
            "top level must map collection names to documents".to_string(),
        ));
    };

    let store = InMemoryDocumentStore::new();
    for (name, documents) in collections {
        let collection = Collection::from_name(&name)
            .ok_or_else(|| AdapterError::Fixture(format!("unknown collection '{}'", name)))?;
        let Value::Object(documents) = documents else {
            return Err(AdapterError::Fixture(format!(
                "collection '{}' must map document ids to fields",
                name
            )));
        };

        for (id, fields) in documents {
            let Value::Object(fields) = fields else {
                return Err(AdapterError::Fixture(format!(
                    "document '{}/{}' must be an object",
                    name, id
                )));
            };
            let fields: BTreeMap<String, FieldValue> = fields
                .into_iter()
                .map(|(key, value)| (key, json_to_field(value)))
                .collect();
            store
                .insert(collection, Document::new(id).with_fields(fields))
                .map_err(|e| AdapterError::Fixture(e.to_string()))?;
        }
    }

    Ok(store)
}

/// Plain JSON value to document value
pub fn json_to_field(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => FieldValue::String(s),
        Value::Array(values) => FieldValue::Array(values.into_iter().map(json_to_field).collect()),
        Value::Object(map) => FieldValue::Map(
            map.into_iter()
                .map(|(key, value)| (key, json_to_field(value)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use startupview_domain::DocumentStore;
    use std::io::Write;

    const YAML: &str = r#"
startups:
  s1:
    startup_name: Acme
    startup_industry_id: ind-1
    startup_investors:
      - { id: v1, name: Seed Fund }
industry:
  ind-1: { industry_name: Fintech, industry_count: 1 }
"#;

    #[tokio::test]
    async fn test_parse_yaml_fixture() {
        let store = parse_fixture(YAML, FixtureFormat::Yaml).unwrap();

        let doc = store
            .get_document(Collection::Startups, "s1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.get_str("startup_name"), Some("Acme"));
        assert_eq!(doc.get_array("startup_investors").len(), 1);

        let industry = store
            .get_document(Collection::Industries, "ind-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(industry.get("industry_count"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn test_load_json_fixture_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"investors": {{"v1": {{"investor_name": "Seed Fund"}}, "v2": {{}}}}}}"#
        )
        .unwrap();

        let store = load_fixture(file.path()).unwrap();
        assert_eq!(store.count(Collection::Investors).unwrap(), 2);
        assert_eq!(store.count(Collection::Startups).unwrap(), 0);
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        let err = parse_fixture(r#"{"founders": {}}"#, FixtureFormat::Json).unwrap_err();
        assert!(err.to_string().contains("founders"));
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let err = parse_fixture(r#"{"startups": {"s1": 3}}"#, FixtureFormat::Json).unwrap_err();
        assert!(matches!(err, AdapterError::Fixture(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(FixtureFormat::from_path(Path::new("a.yml")), FixtureFormat::Yaml);
        assert_eq!(FixtureFormat::from_path(Path::new("a.json")), FixtureFormat::Json);
        assert_eq!(FixtureFormat::from_path(Path::new("a")), FixtureFormat::Json);
    }

    #[test]
    fn test_json_numbers() {
        assert_eq!(json_to_field(serde_json::json!(3)), FieldValue::Integer(3));
        assert_eq!(json_to_field(serde_json::json!(2.5)), FieldValue::Double(2.5));
    }
}
