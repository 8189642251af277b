use crate::{ConfigError, Result, WorkbenchConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
pub const CONFIG_FILES: &[&str] = &[
    ".graphiqlrc.yml",
    ".graphiqlrc.yaml",
    ".graphiqlrc.json",
    ".graphiqlrc",
    "graphiql.config.yml",
    "graphiql.config.yaml",
    "graphiql.config.json",
];

/// Find a config file by walking up the directory tree from `start_dir`.
#[tracing::instrument(fields(start = %start_dir.display()))]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();
    let mut checked_dirs = 0;

    loop {
        tracing::trace!(dir = %current_dir.display(), "Checking directory for config files");
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), checked_dirs, "Found config file");
                return Some(config_path);
            }
        }

        checked_dirs += 1;
        if !current_dir.pop() {
            tracing::debug!(checked_dirs, "No config file found");
            return None;
        }
    }
}

/// Load a config from `path`, detecting the format from its extension.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, and the errors of
/// [`load_config_from_str`] otherwise.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<WorkbenchConfig> {
    tracing::debug!("Reading config file");
    let contents = fs::read_to_string(path)?;
    let config = load_config_from_str(&contents, path)?;
    tracing::info!(server_url = %config.server_url, "Config loaded successfully");
    Ok(config)
}

/// Load a config from a string. `path` is used for format detection and
/// error messages only.
///
/// A bare `.graphiqlrc` is tried as YAML first, then JSON.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions and
/// [`ConfigError::Invalid`] when parsing or validation fails.
#[tracing::instrument(skip(contents), fields(path = %path.display(), size = contents.len()))]
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<WorkbenchConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        "" if file_name == ".graphiqlrc" => {
            tracing::trace!("Trying YAML then JSON for .graphiqlrc");
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;
    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<WorkbenchConfig> {
    serde_saphyr::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<WorkbenchConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

fn validate_config(config: &WorkbenchConfig, path: &Path) -> Result<()> {
    let invalid = |message: &str| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    if config.server_url.trim().is_empty() {
        return Err(invalid("serverUrl must not be empty"));
    }

    if config.headers.keys().any(|name| name.trim().is_empty()) {
        return Err(invalid("header names must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let file = write_temp(
            ".yml",
            r"
serverUrl: https://api.example.com/graphql
query: '{ me { id } }'
explorerIsOpen: true
headers:
  Authorization: Bearer token
retry: 2
",
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server_url, "https://api.example.com/graphql");
        assert_eq!(config.query.as_deref(), Some("{ me { id } }"));
        assert!(config.explorer_is_open);
        assert_eq!(
            config.headers.get("Authorization").map(String::as_str),
            Some("Bearer token")
        );
        assert_eq!(config.retry, Some(2));
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(".json", r#"{ "serverUrl": "http://localhost:4000", "disableExplorer": true }"#);
        let config = load_config(file.path()).unwrap();
        assert!(config.disable_explorer);
    }

    #[test]
    fn test_bare_graphiqlrc_accepts_json() {
        let config = load_config_from_str(
            r#"{ "serverUrl": "http://localhost:4000" }"#,
            Path::new(".graphiqlrc"),
        )
        .unwrap();
        assert_eq!(config.server_url, "http://localhost:4000");
    }

    #[test]
    fn test_missing_server_url_is_invalid() {
        let result = load_config_from_str("query: '{ a }'\n", Path::new("c.yml"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_blank_server_url_is_invalid() {
        let err = load_config_from_str(r#"{ "serverUrl": "  " }"#, Path::new("c.json")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid config in c.json: serverUrl must not be empty"
        );
    }

    #[test]
    fn test_blank_header_name_is_invalid() {
        let result = load_config_from_str(
            r#"{ "serverUrl": "http://x", "headers": { "": "v" } }"#,
            Path::new("c.json"),
        );
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_config_from_str("serverUrl = 'x'", Path::new("c.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(".graphiqlrc.json"), "{}").unwrap();

        assert_eq!(
            find_config(&nested),
            Some(root.path().join(".graphiqlrc.json"))
        );
    }

    #[test]
    fn test_find_config_prefers_earlier_names() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("graphiql.config.yml"), "").unwrap();
        fs::write(root.path().join(".graphiqlrc.yaml"), "").unwrap();

        assert_eq!(
            find_config(root.path()),
            Some(root.path().join(".graphiqlrc.yaml"))
        );
    }
}
