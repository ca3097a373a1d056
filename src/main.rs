use clap::Parser;
use miette::Result;
use snip::cli::{Cli, Commands};
use snip::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Slice(args) => snip::cli::slice::run(args, &printer)?,
        Commands::Batch(args) => snip::cli::batch::run(args, &printer)?,
        Commands::Init(args) => snip::cli::init::run(args, &printer)?,
        Commands::Completions(args) => snip::cli::completions::run(args)?,
    }

    Ok(())
}
