//! `formfields render` - splice a form's fields into a page template

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{build_renderer, emit, load_form};
use crate::cli::GlobalOpts;
use crate::render::FORM_FIELDS_PLACEHOLDER;

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Form definition file (YAML, or JSON with a .json extension)
    pub form: PathBuf,

    /// Page template file, used instead of the form's own template
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs, global: &GlobalOpts) -> Result<()> {
    let form = load_form(&args.form)?;
    let renderer = build_renderer(global)?;

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path).into_diagnostic()?,
        None => form.template.clone(),
    };

    if !template.contains(FORM_FIELDS_PLACEHOLDER) {
        tracing::warn!(
            placeholder = FORM_FIELDS_PLACEHOLDER,
            "template has no placeholder, fields will not appear in the output"
        );
    }

    let html = renderer.render_form_fields(&template, &form);
    emit(&html, args.output.as_deref())?;

    if let Some(path) = &args.output {
        if !global.quiet {
            println!(
                "{} Rendered {} field(s) to {}",
                style("✓").green(),
                form.fields.len(),
                style(path.display()).cyan()
            );
        }
    }

    Ok(())
}
