//! Cloud Firestore Document Store (REST v1)
//!
//! - get:      `GET  {base}/projects/{p}/databases/{db}/documents/{collection}/{id}`
//! - list:     `GET  .../documents/{collection}?pageSize=&pageToken=` until no token
//! - filtered: `POST .../documents:runQuery` with an `EQUAL` field filter
//!
//! Requests carry the optional API key as `?key=`. Firestore's typed values
//! (`stringValue`, `integerValue`, `mapValue`, ...) are decoded into
//! [`FieldValue`]s.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use startupview_domain::{Collection, Document, DocumentStore, EqualityFilter, FieldValue, StoreError};
use tracing::debug;

use crate::error::AdapterError;

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";

/// Documents per listing page requested from Firestore
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: DEFAULT_DATABASE.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Firestore over its REST API
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: Client,
    /// `.../projects/{p}/databases/{db}/documents`
    documents_url: Url,
    api_key: Option<String>,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> Result<Self, AdapterError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        let mut documents_url = Url::parse(&config.base_url)
            .map_err(|e| AdapterError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        documents_url
            .path_segments_mut()
            .map_err(|_| AdapterError::InvalidUrl(config.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "projects",
                config.project_id.as_str(),
                "databases",
                config.database.as_str(),
                "documents",
            ]);

        Ok(Self {
            client,
            documents_url,
            api_key: config.api_key,
        })
    }

    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, AdapterError> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| AdapterError::InvalidUrl(self.documents_url.to_string()))?
            .extend(segments);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    /// `.../databases/{db}/documents:runQuery`
    fn run_query_url(&self) -> Result<Url, AdapterError> {
        let mut url = self.url(&[], &[])?;
        url.path_segments_mut()
            .map_err(|_| AdapterError::InvalidUrl(self.documents_url.to_string()))?
            .pop()
            .push("documents:runQuery");
        Ok(url)
    }

    async fn fetch(&self, collection: Collection, id: &str) -> Result<Option<Document>, AdapterError> {
        let url = self.url(&[collection.as_str(), id], &[])?;
        debug!(%collection, id, "firestore get");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let wire: WireDocument = checked(response).await?.json().await?;
        wire.into_document().map(Some)
    }

    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>, AdapterError> {
        let page_size = PAGE_SIZE.to_string();
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", page_size.as_str())];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.as_str()));
            }
            let url = self.url(&[collection.as_str()], &query)?;
            debug!(%collection, page = page_token.is_some(), "firestore list");

            let page: ListResponse = checked(self.client.get(url).send().await?)
                .await?
                .json()
                .await?;
            for wire in page.documents {
                documents.push(wire.into_document()?);
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(documents)
    }

    async fn run_query(
        &self,
        collection: Collection,
        filter: &EqualityFilter,
    ) -> Result<Vec<Document>, AdapterError> {
        let url = self.run_query_url()?;
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection.as_str() }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": filter.field() },
                        "op": "EQUAL",
                        "value": field_to_wire(filter.value()),
                    }
                }
            }
        });
        debug!(%collection, field = filter.field(), "firestore runQuery");

        let items: Vec<RunQueryItem> = checked(self.client.post(url).json(&body).send().await?)
            .await?
            .json()
            .await?;

        items
            .into_iter()
            .filter_map(|item| item.document)
            .map(WireDocument::into_document)
            .collect()
    }
}

impl DocumentStore for FirestoreStore {
    async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.fetch(collection, id).await?)
    }

    async fn list_documents(
        &self,
        collection: Collection,
        filter: Option<&EqualityFilter>,
    ) -> Result<Vec<Document>, StoreError> {
        let documents = match filter {
            Some(filter) => self.run_query(collection, filter).await?,
            None => self.list_all(collection).await?,
        };
        Ok(documents)
    }
}

/// Error out on non-success statuses, keeping the body for the message
async fn checked(response: Response) -> Result<Response, AdapterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AdapterError::Status {
        status: status.as_u16(),
        body,
    })
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct WireDocument {
    /// `projects/{p}/databases/{db}/documents/{collection}/{id}`
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, WireValue>,
}

impl WireDocument {
    fn into_document(self) -> Result<Document, AdapterError> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AdapterError::Decode(format!("document without id: '{}'", self.name)))?
            .to_string();

        let fields = self
            .fields
            .into_iter()
            .map(|(key, value)| Ok((key, value.into_field()?)))
            .collect::<Result<BTreeMap<_, _>, AdapterError>>()?;

        Ok(Document::new(id).with_fields(fields))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum WireValue {
    NullValue(()),
    BooleanValue(bool),
    /// int64 travels as a string
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(WireGeoPoint),
    ArrayValue(WireArray),
    MapValue(WireMap),
}

#[derive(Debug, Deserialize)]
struct WireGeoPoint {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct WireArray {
    #[serde(default)]
    values: Vec<WireValue>,
}

#[derive(Debug, Deserialize)]
struct WireMap {
    #[serde(default)]
    fields: BTreeMap<String, WireValue>,
}

impl WireValue {
    fn into_field(self) -> Result<FieldValue, AdapterError> {
        Ok(match self {
            WireValue::NullValue(()) => FieldValue::Null,
            WireValue::BooleanValue(b) => FieldValue::Bool(b),
            WireValue::IntegerValue(raw) => FieldValue::Integer(
                raw.parse()
                    .map_err(|_| AdapterError::Decode(format!("bad integerValue '{}'", raw)))?,
            ),
            WireValue::DoubleValue(d) => FieldValue::Double(d),
            WireValue::TimestampValue(s)
            | WireValue::StringValue(s)
            | WireValue::BytesValue(s)
            | WireValue::ReferenceValue(s) => FieldValue::String(s),
            WireValue::GeoPointValue(point) => FieldValue::map([
                ("latitude", point.latitude),
                ("longitude", point.longitude),
            ]),
            WireValue::ArrayValue(array) => FieldValue::Array(
                array
                    .values
                    .into_iter()
                    .map(WireValue::into_field)
                    .collect::<Result<_, _>>()?,
            ),
            WireValue::MapValue(map) => FieldValue::Map(
                map.fields
                    .into_iter()
                    .map(|(key, value)| Ok((key, value.into_field()?)))
                    .collect::<Result<_, AdapterError>>()?,
            ),
        })
    }
}

/// Filter value in Firestore's typed encoding
fn field_to_wire(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        FieldValue::Integer(i) => json!({ "integerValue": i.to_string() }),
        FieldValue::Double(d) => json!({ "doubleValue": d }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Array(values) => json!({
            "arrayValue": { "values": values.iter().map(field_to_wire).collect::<Vec<_>>() }
        }),
        FieldValue::Map(fields) => json!({
            "mapValue": {
                "fields": fields
                    .iter()
                    .map(|(k, v)| (k.clone(), field_to_wire(v)))
                    .collect::<serde_json::Map<_, _>>()
            }
        }),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<WireDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunQueryItem {
    document: Option<WireDocument>,
}
