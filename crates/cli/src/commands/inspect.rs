//! `graphiql inspect`: replay an inspect-operation click against a workbench
//! built from the config and report where the explorer would scroll.

use crate::commands::common::{load_optional_config, read_document, ClickArgs, FetchSettings};
use crate::commands::locate::{report_error, resolve_click, target_json, CommandFailure};
use crate::{ExitCode, OutputFormat, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_introspect::{Fetcher, GraphQLRequest, IntrospectionError};
use graphql_workbench::{InspectError, Workbench, WorkbenchOptions};
use std::path::{Path, PathBuf};

/// Serves a saved introspection result instead of asking a server.
struct FileFetcher {
    path: PathBuf,
}

impl Fetcher for FileFetcher {
    async fn fetch(
        &self,
        _request: GraphQLRequest,
    ) -> graphql_introspect::Result<serde_json::Value> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| IntrospectionError::Network(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&contents).map_err(|e| IntrospectionError::Parse(e.to_string()))
    }
}

pub struct InspectArgs<'a> {
    pub config_path: Option<&'a Path>,
    pub file: Option<&'a Path>,
    pub introspection: Option<&'a Path>,
    pub click: &'a ClickArgs,
    pub format: OutputFormat,
    pub output_opts: OutputOptions,
}

#[tracing::instrument(skip(args))]
pub async fn run(args: InspectArgs<'_>) -> Result<()> {
    let format = args.format;
    let config = match load_optional_config(args.config_path) {
        Ok(config) => config,
        Err(e) => {
            report_error(format, &format!("{e:#}"));
            ExitCode::ConfigError.exit();
        }
    };

    let mut options = config
        .as_ref()
        .map_or_else(|| WorkbenchOptions::new(String::new()), WorkbenchOptions::from);
    if let Some(file) = args.file {
        match read_document(file) {
            Ok(text) => options.query = text,
            Err(e) => {
                report_error(format, &format!("{e:#}"));
                ExitCode::IoError.exit();
            }
        }
    }

    let mut bench = Workbench::new(options);
    let loaded = if let Some(path) = args.introspection {
        bench
            .load_schema(&FileFetcher {
                path: path.to_path_buf(),
            })
            .await
    } else {
        let settings = FetchSettings::resolve(None, config.as_ref(), &[], None, None)
            .context("Pass --introspection <FILE> or configure serverUrl")?;
        bench.load_schema(&settings.fetcher()).await
    };
    if !loaded {
        report_error(
            format,
            "Failed to load schema; set RUST_LOG=graphql_workbench=debug for details",
        );
        ExitCode::SchemaError.exit();
    }

    let click = resolve_click(args.click, bench.query()).unwrap_or_else(|f| f.exit(format));
    let mut scrolled_to = None;
    let mut navigator = |selector: &str| {
        scrolled_to = Some(selector.to_string());
        true
    };

    match bench.inspect_operation(click, &mut navigator) {
        Ok(target) => {
            match format {
                OutputFormat::Human => {
                    if args.output_opts.show_info {
                        println!("{} {}", "✓".green(), target.to_string().cyan());
                    }
                    if let Some(selector) = scrolled_to {
                        println!("{selector}");
                    }
                }
                OutputFormat::Json => println!("{}", target_json(&target)),
            }
            Ok(())
        }
        Err(InspectError::Lookup(failure)) => CommandFailure::from(&failure).exit(format),
        Err(e @ InspectError::SchemaNotLoaded) => {
            report_error(format, &e.to_string());
            ExitCode::SchemaError.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_introspect::fetch_client_schema;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_fetcher_serves_saved_introspection() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"{{ "data": {{ "__schema": {{
                "queryType": {{ "name": "Query" }},
                "types": [{{ "kind": "OBJECT", "name": "Query", "fields": [] }}]
            }} }} }}"#
        )
        .unwrap();

        let fetcher = FileFetcher {
            path: file.path().to_path_buf(),
        };
        let schema = fetch_client_schema(&fetcher).await.unwrap();
        assert_eq!(schema.query_type(), Some("Query"));
    }

    #[tokio::test]
    async fn test_file_fetcher_missing_file() {
        let fetcher = FileFetcher {
            path: PathBuf::from("/nonexistent/introspection.json"),
        };
        let result = fetcher.fetch(GraphQLRequest::introspection()).await;
        assert!(matches!(result, Err(IntrospectionError::Network(_))));
    }
}
