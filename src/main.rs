use clap::Parser;
use hst::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
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

    match cli.command {
        Commands::Select(args) => hst::cli::commands::select::run(args, &global),
        Commands::List(args) => hst::cli::commands::list::run(args, &global),
        Commands::Show(args) => hst::cli::commands::show::run(args, &global),
        Commands::Bores(args) => hst::cli::commands::bores::run(args, &global),
        Commands::Check(args) => hst::cli::commands::check::run(args, &global),
        Commands::Completions(args) => hst::cli::commands::completions::run(args),
    }
}
