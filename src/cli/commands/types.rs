//! `formfields types` - list built-in field types

use console::style;
use miette::Result;

use crate::cli::helpers::build_renderer;
use crate::cli::GlobalOpts;
use crate::render::{dispatch_key, is_button_type};

#[derive(clap::Args, Debug)]
pub struct TypesArgs {
    /// Print only the type names, one per line
    #[arg(long)]
    pub names_only: bool,
}

pub fn run(args: TypesArgs, global: &GlobalOpts) -> Result<()> {
    let renderer = build_renderer(global)?;
    let types = renderer.registry().builtin_types();

    if args.names_only {
        for tag in types {
            println!("{}", tag);
        }
        return Ok(());
    }

    println!("{}", style("Built-in field types:").bold());
    println!();
    println!("{:<10} {:<8} {}", "TYPE", "BUTTON", "DISPATCH KEY");
    println!("{}", "-".repeat(40));
    for tag in types {
        let button = if is_button_type(tag) { "yes" } else { "" };
        println!("{:<10} {:<8} {}", tag, button, dispatch_key(tag));
    }
    println!();
    println!(
        "Other types render through host-registered hooks, or to nothing."
    );

    Ok(())
}
