//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, field::FieldArgs, render::RenderArgs, types::TypesArgs,
};

#[derive(Parser)]
#[command(name = "formfields")]
#[command(author, version, about = "Form field rendering engine")]
#[command(long_about = "Render declarative form field definitions to markup and splice them into page templates at the {{form_fields}} placeholder.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Emit interpolated values without HTML escaping
    #[arg(long, global = true)]
    pub raw: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a form's fields into its page template
    Render(RenderArgs),

    /// Render a single field of a form
    Field(FieldArgs),

    /// List built-in field types
    Types(TypesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
