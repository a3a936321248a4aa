use clap::Parser;
use gradx::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => gradx::cli::build::run(args)?,
        Commands::Init(args) => gradx::cli::init::run(args)?,
        Commands::Validate(args) => gradx::cli::validate::run(args)?,
        Commands::Completions(args) => gradx::cli::completions::run(args)?,
    }

    Ok(())
}
