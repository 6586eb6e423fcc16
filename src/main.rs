use bx::cli::{Cli, Commands};
use bx::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Export(args) => bx::cli::export::run(args, &printer)?,
        Commands::Check(args) => bx::cli::check::run(args, &printer)?,
        Commands::Palette(args) => bx::cli::palette::run(args, &printer)?,
        Commands::Init(args) => bx::cli::init::run(args, &printer)?,
        Commands::List(args) => bx::cli::list::run(args, &printer)?,
        Commands::Completions(args) => bx::cli::completions::run(args)?,
    }

    Ok(())
}
