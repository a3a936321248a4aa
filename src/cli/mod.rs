pub mod build;
pub mod completions;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

/// gradx - gradient background-image utility generator
#[derive(Parser, Debug)]
#[command(name = "gradx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a CSS stylesheet from a theme file
    Build(build::BuildArgs),

    /// Write a starter gradients.yaml
    Init(init::InitArgs),

    /// Check a theme file without generating output
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
