//! `graphiql schema`: introspect a server and summarize what the explorer
//! would show.

use crate::commands::common::{load_optional_config, FetchSettings};
use crate::commands::locate::report_error;
use crate::{ExitCode, OutputFormat, OutputOptions};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_introspect::{fetch_client_schema, ClientSchema, Fetcher, GraphQLRequest};
use std::path::Path;

#[tracing::instrument(skip(cli_headers, output_opts))]
pub async fn run(
    url: Option<String>,
    config_path: Option<&Path>,
    cli_headers: &[String],
    timeout: Option<u64>,
    retry: Option<u32>,
    format: OutputFormat,
    output_opts: OutputOptions,
) -> Result<()> {
    let config = match load_optional_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            report_error(format, &format!("{e:#}"));
            ExitCode::ConfigError.exit();
        }
    };

    let settings = FetchSettings::resolve(url, config.as_ref(), cli_headers, timeout, retry)?;
    let fetcher = settings.fetcher();
    let start_time = std::time::Instant::now();

    match format {
        OutputFormat::Json => {
            let body = fetcher
                .fetch(GraphQLRequest::introspection())
                .await
                .with_context(|| format!("Failed to fetch schema from {}", settings.url));
            match body {
                Ok(body) => {
                    let pretty = serde_json::to_string_pretty(&body)
                        .context("Failed to serialize introspection response")?;
                    println!("{pretty}");
                }
                Err(e) => {
                    report_error(format, &format!("{e:#}"));
                    ExitCode::SchemaError.exit();
                }
            }
        }
        OutputFormat::Human => match fetch_client_schema(&fetcher).await {
            Ok(schema) => {
                if output_opts.show_info {
                    println!(
                        "{} Schema loaded from {} in {:.2}s",
                        "✓".green(),
                        settings.url.cyan(),
                        start_time.elapsed().as_secs_f64()
                    );
                }
                print!("{}", summarize(&schema));
            }
            Err(e) => {
                report_error(
                    format,
                    &format!("Failed to fetch schema from {}: {e}", settings.url),
                );
                ExitCode::SchemaError.exit();
            }
        },
    }

    Ok(())
}

/// Root operation types followed by every named type and its fields.
fn summarize(schema: &ClientSchema) -> String {
    let mut out = String::new();
    let roots = [
        ("query", schema.query_type()),
        ("mutation", schema.mutation_type()),
        ("subscription", schema.subscription_type()),
    ];
    for (operation, name) in roots {
        if let Some(name) = name {
            out.push_str(&format!("{operation}: {name}\n"));
        }
    }

    for name in schema.type_names() {
        let kind = schema.get_type(name).map_or("", |ty| ty.kind.as_str());
        out.push_str(&format!("\n{name} ({kind})\n"));
        for (field, type_string) in schema.fields_of(name) {
            out.push_str(&format!("  {field}: {type_string}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_introspect::decode_introspection;

    #[test]
    fn test_summarize() {
        let response = decode_introspection(serde_json::json!({
            "data": { "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "types": [
                    { "kind": "OBJECT", "name": "Query", "fields": [
                        { "name": "me", "args": [], "type": { "kind": "NON_NULL", "name": null,
                            "ofType": { "kind": "OBJECT", "name": "User", "ofType": null } } }
                    ]},
                    { "kind": "OBJECT", "name": "Mutation", "fields": [] },
                    { "kind": "OBJECT", "name": "User", "fields": [
                        { "name": "tags", "args": [], "type": { "kind": "LIST", "name": null,
                            "ofType": { "kind": "SCALAR", "name": "String", "ofType": null } } }
                    ]},
                    { "kind": "SCALAR", "name": "String" },
                    { "kind": "OBJECT", "name": "__Type", "fields": [] }
                ]
            }}
        }))
        .unwrap();
        let schema = ClientSchema::from_introspection(response).unwrap();

        assert_eq!(
            summarize(&schema),
            "query: Query\nmutation: Mutation\n\
             \nMutation (OBJECT)\n\
             \nQuery (OBJECT)\n  me: User!\n\
             \nString (SCALAR)\n\
             \nUser (OBJECT)\n  tags: [String]\n"
        );
    }
}
