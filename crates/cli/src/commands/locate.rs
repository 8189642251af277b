use crate::commands::common::{read_document, ClickArgs};
use crate::{ExitCode, OutputFormat, OutputOptions};
use colored::Colorize;
use graphql_locator::{locate, ClickPosition, LookupFailure, TargetIdentifier};
use std::path::Path;

/// A failure already mapped to the exit code the process ends with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub code: ExitCode,
    pub message: String,
}

impl CommandFailure {
    pub fn new(code: ExitCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn exit(&self, format: OutputFormat) -> ! {
        report_error(format, &self.message);
        self.code.exit()
    }
}

impl From<&LookupFailure> for CommandFailure {
    fn from(failure: &LookupFailure) -> Self {
        Self::new(exit_code_for(failure), failure.to_string())
    }
}

/// Resolve a click in `file` and print the definition it lands in.
#[tracing::instrument(skip(click, output_opts), fields(file = %file.display()))]
pub fn run(
    file: &Path,
    click: &ClickArgs,
    selector: bool,
    format: OutputFormat,
    output_opts: OutputOptions,
) {
    let text = read_document(file).unwrap_or_else(|e| {
        CommandFailure::new(ExitCode::IoError, format!("{e:#}")).exit(format)
    });

    match lookup(&text, click) {
        Ok(target) => print_target(&target, selector, format, output_opts),
        Err(failure) => failure.exit(format),
    }
}

/// Click arguments to an interval over `text`. A position that does not
/// exist in the document gets its own exit code.
pub fn resolve_click(click: &ClickArgs, text: &str) -> Result<ClickPosition, CommandFailure> {
    click
        .resolve(text)
        .map_err(|e| CommandFailure::new(ExitCode::InvalidPosition, format!("{e:#}")))
}

pub fn lookup(text: &str, click: &ClickArgs) -> Result<TargetIdentifier, CommandFailure> {
    let click = resolve_click(click, text)?;
    tracing::debug!(%click, "Resolved click");
    locate(text, click).map_err(|failure| CommandFailure::from(&failure))
}

pub fn exit_code_for(failure: &LookupFailure) -> ExitCode {
    match failure {
        LookupFailure::ParseFailure(_) => ExitCode::ParseError,
        LookupFailure::EmptyDocument | LookupFailure::NoMatch { .. } => ExitCode::LookupError,
    }
}

pub fn target_json(target: &TargetIdentifier) -> serde_json::Value {
    serde_json::json!({
        "kind": target.kind.as_str(),
        "name": target.name,
        "identifier": target.to_string(),
        "selector": target.explorer_selector(),
    })
}

fn print_target(
    target: &TargetIdentifier,
    selector: bool,
    format: OutputFormat,
    output_opts: OutputOptions,
) {
    match format {
        OutputFormat::Human => {
            let text = if selector {
                target.explorer_selector()
            } else {
                target.to_string()
            };
            if output_opts.show_info {
                println!("{} {}", "✓".green(), text.cyan());
            } else {
                println!("{text}");
            }
        }
        OutputFormat::Json => println!("{}", target_json(target)),
    }
}

pub fn report_error(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Human => eprintln!("{} {}", "✗".red(), message.red()),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": message })),
    }
}
