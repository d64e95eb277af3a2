pub mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, ExtractorConfig};
use crate::extract::{extract_version, Component, ExtractionError};
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "openaptx-version",
    version,
    about = "Print the openaptx version defined in openaptx.h"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding the header (defaults to the executable's directory)
    #[arg(long, value_name = "DIR")]
    pub source_root: Option<String>,

    /// Header file name inside the source root
    #[arg(long, value_name = "NAME")]
    pub header: Option<String>,

    /// Print only one version component
    #[arg(long, value_enum)]
    pub component: Option<Component>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

/// Failures surfaced to the user as a single `ERROR:` line on stderr.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("ERROR: Could not resolve source root: {0}")]
    Config(#[from] ConfigError),
    #[error("ERROR: Could not read {header} file in {}: {}", source_root.display(), io_reason(source))]
    Read {
        header: String,
        source_root: PathBuf,
        #[source]
        source: ExtractionError,
    },
    #[error("ERROR: Could not extract openaptx version from {header} file in {}", source_root.display())]
    Extract {
        header: String,
        source_root: PathBuf,
        #[source]
        source: ExtractionError,
    },
    #[error("ERROR: Could not render output: {0}")]
    Render(#[from] serde_json::Error),
}

fn io_reason(err: &ExtractionError) -> String {
    match err {
        ExtractionError::Io { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

impl RunError {
    fn from_extraction(config: &ExtractorConfig, source: ExtractionError) -> Self {
        let header = config.header_name.clone();
        let source_root = config.source_root.clone();
        match source {
            ExtractionError::Io { .. } => RunError::Read {
                header,
                source_root,
                source,
            },
            ExtractionError::Incomplete { .. } => RunError::Extract {
                header,
                source_root,
                source,
            },
        }
    }
}

/// Resolve the header, extract the version and render the stdout line.
pub fn execute(cli: &Cli) -> Result<String, RunError> {
    let config = ExtractorConfig::resolve(cli.source_root.as_deref(), cli.header.as_deref())?;
    let version = extract_version(&config.header_path())
        .map_err(|err| RunError::from_extraction(&config, err))?;
    debug!(%version, "extracted version");
    Ok(output::render(&version, cli.component, cli.format)?)
}

/// Run the CLI application.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    crate::logging::init_logging(cli.verbose);

    match execute(&cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Some(source) = std::error::Error::source(&err) {
                debug!(cause = %source, "extraction failed");
            }
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
