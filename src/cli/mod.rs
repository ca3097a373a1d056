pub mod batch;
pub mod completions;
pub mod init;
pub mod slice;

use clap::{Parser, Subcommand};

/// snip - Spritesheet slicer
#[derive(Parser, Debug)]
#[command(name = "snip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slice a single spritesheet into transparent sprite PNGs
    Slice(slice::SliceArgs),

    /// Slice every sheet listed in a manifest
    Batch(batch::BatchArgs),

    /// Initialize a snip project (generates sheets.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
