use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Settings for one workbench instance.
///
/// ```yaml
/// serverUrl: https://api.example.com/graphql
/// query: "{ me { id } }"
/// explorerIsOpen: true
/// headers:
///   Authorization: Bearer token
/// timeout: 60
/// retry: 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchConfig {
    /// Endpoint used for introspection and shown in the code exporter.
    pub server_url: String,

    /// Initial contents of the query editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Initial contents of the variables editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,

    #[serde(default)]
    pub explorer_is_open: bool,

    #[serde(default)]
    pub exporter_is_open: bool,

    #[serde(default)]
    pub disable_explorer: bool,

    #[serde(default)]
    pub disable_exporter: bool,

    /// Extra HTTP headers sent with every request.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Retry attempts for failed requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
}

impl WorkbenchConfig {
    /// A config for `server_url` with every other setting at its default.
    #[must_use]
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            query: None,
            variables: None,
            explorer_is_open: false,
            exporter_is_open: false,
            disable_explorer: false,
            disable_exporter: false,
            headers: BTreeMap::new(),
            timeout: None,
            retry: None,
        }
    }

    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_json() {
        let config: WorkbenchConfig =
            serde_json::from_str(r#"{ "serverUrl": "http://localhost:4000" }"#).unwrap();
        assert_eq!(config, WorkbenchConfig::new("http://localhost:4000"));
        assert_eq!(config.timeout_duration(), None);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: WorkbenchConfig = serde_json::from_str(
            r#"{
                "serverUrl": "http://localhost:4000",
                "explorerIsOpen": true,
                "disableExporter": true,
                "timeout": 5
            }"#,
        )
        .unwrap();
        assert!(config.explorer_is_open);
        assert!(config.disable_exporter);
        assert!(!config.exporter_is_open);
        assert_eq!(config.timeout_duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_serializes_without_unset_options() {
        let json = serde_json::to_value(WorkbenchConfig::new("http://x")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "serverUrl": "http://x",
                "explorerIsOpen": false,
                "exporterIsOpen": false,
                "disableExplorer": false,
                "disableExporter": false
            })
        );
    }
}
