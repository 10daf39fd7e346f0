//! `formfields field` - render one field of a form

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{build_renderer, emit, load_form};
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct FieldArgs {
    /// Form definition file (YAML, or JSON with a .json extension)
    pub form: PathBuf,

    /// Key of the field within the form
    pub key: String,
}

pub fn run(args: FieldArgs, global: &GlobalOpts) -> Result<()> {
    let form = load_form(&args.form)?;
    let renderer = build_renderer(global)?;

    let Some(html) = renderer.render_field(&args.key, &form) else {
        let known = form.fields.keys().cloned().collect::<Vec<_>>().join(", ");
        return Err(miette::miette!(
            code = "formfields::field::unknown",
            help = format!("Fields in this form: {}", known),
            "Unknown field '{}' in {}",
            args.key,
            args.form.display()
        ));
    };

    emit(&html, None)
}
