//! Argument handling shared by the subcommands.

use anyhow::{Context, Result};
use graphql_config::{find_config, load_config, WorkbenchConfig};
use graphql_introspect::{HttpFetcher, IntrospectionClient};
use graphql_locator::ClickPosition;
use graphql_types::Position;
use std::path::Path;
use std::time::Duration;

/// Default timeout in seconds for introspection requests.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Where in the document the user clicked.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ClickArgs {
    /// Byte offset of the click
    #[arg(long, conflicts_with_all = ["line", "character"], required_unless_present = "line")]
    pub offset: Option<usize>,

    /// End of the clicked range; defaults to the end of the token at --offset
    #[arg(long, requires = "offset")]
    pub end: Option<usize>,

    /// Zero-based line of the click
    #[arg(long, requires = "character")]
    pub line: Option<u32>,

    /// Zero-based column of the click, in UTF-16 code units
    #[arg(long, requires = "line")]
    pub character: Option<u32>,
}

impl ClickArgs {
    /// Turn the arguments into a click interval over `text`.
    pub fn resolve(&self, text: &str) -> Result<ClickPosition> {
        match (self.offset, self.end, self.line, self.character) {
            (Some(start), Some(end), _, _) => Ok(ClickPosition::new(start, end)),
            (Some(offset), None, _, _) => Ok(ClickPosition::from_token_at(text, offset)),
            (None, _, Some(line), Some(character)) => {
                ClickPosition::from_editor_position(text, Position::new(line, character))
                    .with_context(|| format!("Position {line}:{character} is outside the document"))
            }
            _ => anyhow::bail!("Either --offset or --line and --character is required"),
        }
    }
}

/// Load the config from `--config`, or discover it from the working
/// directory. `Ok(None)` when no file exists and none was requested.
pub fn load_optional_config(config_path: Option<&Path>) -> Result<Option<WorkbenchConfig>> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        let current_dir = std::env::current_dir()?;
        match find_config(&current_dir) {
            Some(path) => path,
            None => return Ok(None),
        }
    };

    load_config(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
        .map(Some)
}

/// Parses a header string in "Name: Value" format.
pub fn parse_header(header: &str) -> Result<(String, String)> {
    let Some((name, value)) = header.split_once(':') else {
        anyhow::bail!("Invalid header format: '{header}'. Expected 'Header-Name: Header-Value'");
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("Header name cannot be empty");
    }
    Ok((name, value.trim().to_string()))
}

/// Resolved introspection settings from config file and CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: u64,
    pub retry: u32,
}

impl FetchSettings {
    /// Combine the config with command-line overrides. CLI headers replace
    /// config headers of the same name, compared case-insensitively.
    pub fn resolve(
        url: Option<String>,
        config: Option<&WorkbenchConfig>,
        cli_headers: &[String],
        cli_timeout: Option<u64>,
        cli_retry: Option<u32>,
    ) -> Result<Self> {
        let url = url
            .or_else(|| config.map(|c| c.server_url.clone()))
            .context("No server URL given. Pass a URL or set serverUrl in .graphiqlrc")?;

        let mut headers: Vec<(String, String)> = config
            .map(|c| c.headers.clone().into_iter().collect())
            .unwrap_or_default();

        for header in cli_headers {
            let (name, value) = parse_header(header).context("Failed to parse headers")?;
            headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        Ok(Self {
            url,
            headers,
            timeout: cli_timeout
                .or_else(|| config.and_then(|c| c.timeout))
                .unwrap_or(DEFAULT_TIMEOUT),
            retry: cli_retry.or_else(|| config.and_then(|c| c.retry)).unwrap_or(0),
        })
    }

    pub fn fetcher(&self) -> HttpFetcher {
        IntrospectionClient::new()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_retries(self.retry)
            .with_headers(self.headers.iter().cloned())
            .fetcher(&self.url)
    }
}

/// Read a query document, attaching the path to any error.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
