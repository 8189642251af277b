mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use commands::common::ClickArgs;
use std::path::PathBuf;

pub use exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "graphiql")]
#[command(about = "Locate GraphQL definitions the way the GraphiQL explorer does", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a .graphiqlrc config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (success marks, timings)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the operation or fragment a click lands in
    Locate {
        /// Query document to read
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        click: ClickArgs,

        /// Print the explorer CSS selector instead of the identifier
        #[arg(long)]
        selector: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Introspect a GraphQL server and list its types
    ///
    /// The endpoint is the URL argument, or serverUrl from the config file.
    Schema {
        /// GraphQL endpoint URL to introspect
        #[arg(value_name = "URL")]
        url: Option<String>,

        /// HTTP headers to include in the request (can be specified multiple times)
        /// Format: "Header-Name: Header-Value"
        #[arg(long = "header", short = 'H', value_name = "HEADER")]
        headers: Vec<String>,

        /// Request timeout in seconds (overrides config file)
        #[arg(long)]
        timeout: Option<u64>,

        /// Number of retry attempts on failure (overrides config file)
        #[arg(long)]
        retry: Option<u32>,

        /// Output format; json prints the raw introspection response
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Replay an inspect-operation click against the configured workbench
    ///
    /// Loads the schema first, as the explorer does, then prints the selector
    /// the explorer would scroll to.
    Inspect {
        /// Query document to use instead of the config's initial query
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Saved introspection response to load instead of querying serverUrl
        #[arg(long, value_name = "FILE")]
        introspection: Option<PathBuf>,

        #[command(flatten)]
        click: ClickArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };

    match cli.command {
        Commands::Locate {
            file,
            click,
            selector,
            format,
        } => {
            commands::locate::run(&file, &click, selector, format, output_opts);
            Ok(())
        }
        Commands::Schema {
            url,
            headers,
            timeout,
            retry,
            format,
        } => {
            commands::schema::run(
                url,
                cli.config.as_deref(),
                &headers,
                timeout,
                retry,
                format,
                output_opts,
            )
            .await
        }
        Commands::Inspect {
            file,
            introspection,
            click,
            format,
        } => {
            commands::inspect::run(commands::inspect::InspectArgs {
                config_path: cli.config.as_deref(),
                file: file.as_deref(),
                introspection: introspection.as_deref(),
                click: &click,
                format,
                output_opts,
            })
            .await
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` and silent by default
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply `--color`/`--no-color`, falling back to `NO_COLOR`, `CLICOLOR_FORCE`
/// and `CLICOLOR`. With none of them set the `colored` crate decides from
/// TTY detection.
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    let env = |name: &str| std::env::var(name).ok();
    if let Some(enabled) = color_override(force_color, no_color, env) {
        colored::control::set_override(enabled);
    }
}

/// The color override implied by flags and environment, highest priority
/// first. `None` leaves the default in place.
fn color_override(
    force_color: bool,
    no_color: bool,
    env: impl Fn(&str) -> Option<String>,
) -> Option<bool> {
    if force_color {
        return Some(true);
    }
    if no_color || env("NO_COLOR").is_some() {
        return Some(false);
    }
    if let Some(force) = env("CLICOLOR_FORCE") {
        return (!force.is_empty() && force != "0").then_some(true);
    }
    (env("CLICOLOR").as_deref() == Some("0")).then_some(false)
}
