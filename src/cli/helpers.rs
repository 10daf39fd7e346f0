//! Shared helper functions for CLI commands

use miette::{IntoDiagnostic, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalOpts;
use crate::core::{Config, FormDefinition};
use crate::render::{FormRenderer, RendererRegistry};

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
pub fn init_logging(global: &GlobalOpts) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if global.quiet {
        EnvFilter::new("error")
    } else if global.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layered config with command-line overrides applied
pub fn load_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    if global.raw {
        config.escape = Some(false);
    }
    config
}

/// A renderer with the built-in field types
pub fn build_renderer(global: &GlobalOpts) -> Result<FormRenderer> {
    let config = load_config(global);
    FormRenderer::from_config(&config, RendererRegistry::default()).into_diagnostic()
}

pub fn load_form(path: &Path) -> Result<FormDefinition> {
    Ok(FormDefinition::load(path)?)
}

/// Write `output` to `path`, or to stdout when no path is given
pub fn emit(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, output).into_diagnostic(),
        None => {
            println!("{}", output);
            Ok(())
        }
    }
}
