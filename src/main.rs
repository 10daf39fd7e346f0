use clap::Parser;
use formfields::cli::helpers::init_logging;
use formfields::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior so piping to `head` exits quietly.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logging(&global);

    match cli.command {
        Commands::Render(args) => formfields::cli::commands::render::run(args, &global),
        Commands::Field(args) => formfields::cli::commands::field::run(args, &global),
        Commands::Types(args) => formfields::cli::commands::types::run(args, &global),
        Commands::Completions(args) => formfields::cli::commands::completions::run(args),
    }
}
