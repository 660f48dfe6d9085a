//! Configuration for StartupView
//!
//! Read from JSON (`.json`) or YAML (`.yaml` / `.yml`). Keys are camelCase.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use startupview_adapter::repository::{
    load_fixture, ConfiguredStore, FirestoreConfig, FirestoreStore,
};

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Where documents come from; `--fixture` overrides it
    #[serde(default)]
    pub store: Option<StoreConfig>,

    #[serde(default)]
    pub server: ServerConfig,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreConfig {
    Firestore {
        project_id: String,
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default)]
        database: Option<String>,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    Fixture {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: None,
            server: ServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON or YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content, is_yaml(path))
            .with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str, yaml: bool) -> anyhow::Result<Self> {
        let config = if yaml {
            serde_yaml::from_str(content)?
        } else {
            serde_json::from_str(content)?
        };
        Ok(config)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Build the document store
///
/// A fixture path given on the command line wins over the configured store.
pub fn build_store(
    store: Option<&StoreConfig>,
    fixture: Option<&Path>,
) -> anyhow::Result<ConfiguredStore> {
    if let Some(path) = fixture {
        return fixture_store(path);
    }

    match store {
        Some(StoreConfig::Fixture { path }) => fixture_store(path),
        Some(StoreConfig::Firestore {
            project_id,
            api_key,
            database,
            base_url,
            timeout_secs,
        }) => {
            let mut config = FirestoreConfig::new(project_id.as_str());
            config.api_key = api_key.clone();
            if let Some(database) = database {
                config.database = database.clone();
            }
            if let Some(base_url) = base_url {
                config.base_url = base_url.clone();
            }
            if let Some(secs) = timeout_secs {
                config.timeout = Duration::from_secs(*secs);
            }
            let store = FirestoreStore::new(config).context("creating Firestore client")?;
            Ok(store.into())
        }
        None => bail!("no document store configured: pass --config <file> or --fixture <file>"),
    }
}

fn fixture_store(path: &Path) -> anyhow::Result<ConfiguredStore> {
    let store =
        load_fixture(path).with_context(|| format!("loading fixture {}", path.display()))?;
    Ok(store.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
store:
  kind: firestore
  projectId: thestartupview
  apiKey: secret
  timeoutSecs: 5
server:
  bind: "0.0.0.0:8080"
logLevel: debug
"#;

        let config = AppConfig::parse(yaml, true).unwrap();

        assert_eq!(
            config.store,
            Some(StoreConfig::Firestore {
                project_id: "thestartupview".to_string(),
                api_key: Some("secret".to_string()),
                database: None,
                base_url: None,
                timeout_secs: Some(5),
            })
        );
        assert_eq!(config.server.bind.port(), 8080);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_json_defaults() {
        let json = r#"{ "store": { "kind": "fixture", "path": "demos/directory.yaml" } }"#;

        let config = AppConfig::parse(json, false).unwrap();

        assert_eq!(
            config.store,
            Some(StoreConfig::Fixture {
                path: PathBuf::from("demos/directory.yaml"),
            })
        );
        assert_eq!(config.server.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_unknown_store_kind_is_rejected() {
        let json = r#"{ "store": { "kind": "postgres" } }"#;
        assert!(AppConfig::parse(json, false).is_err());
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "logLevel: warn").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(config.store.is_none());
    }

    #[test]
    fn test_build_store_requires_a_source() {
        let err = build_store(None, None).unwrap_err();
        assert!(err.to_string().contains("--fixture"));
    }

    #[test]
    fn test_fixture_flag_overrides_configured_store() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"industry": {{"ind-1": {{"industry_name": "Fintech"}}}}}}"#).unwrap();
        let configured = StoreConfig::Firestore {
            project_id: "p".to_string(),
            api_key: None,
            database: None,
            base_url: None,
            timeout_secs: None,
        };

        let store = build_store(Some(&configured), Some(file.path())).unwrap();
        assert_eq!(store.kind(), "in-memory");
    }

    #[test]
    fn test_build_firestore_store() {
        let configured = StoreConfig::Firestore {
            project_id: "p".to_string(),
            api_key: None,
            database: Some("other".to_string()),
            base_url: Some("http://localhost:8080/v1".to_string()),
            timeout_secs: Some(1),
        };

        let store = build_store(Some(&configured), None).unwrap();
        assert_eq!(store.kind(), "firestore");
    }
}
