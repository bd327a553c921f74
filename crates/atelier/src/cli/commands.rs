//! CLI command definitions.

use atelier_core::{AspectRatio, ResolutionTier};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atelier - cake recommendations, concept images, and animated videos.
#[derive(Parser, Debug)]
#[command(name = "atelier")]
#[command(about = "Creative generation studio backed by Gemini and Veo")]
#[command(version)]
pub struct Cli {
    /// Configuration file layered over the user config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Prompt for an API key when none is selected or the key is rejected
    #[arg(long, global = true)]
    pub interactive_key: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a cake for an occasion
    Recommend {
        /// The occasion, in free text
        occasion: String,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a concept image of a cake
    Image {
        /// Description of the cake
        prompt: String,

        /// Resolution tier (1K, 2K, 4K)
        #[arg(short, long, default_value_t = ResolutionTier::OneK)]
        tier: ResolutionTier,

        /// Where to write the image
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Animate an image into a short video
    Animate {
        /// Image file to animate
        image: PathBuf,

        /// Frame shape (16:9, 9:16)
        #[arg(short, long, default_value_t = AspectRatio::Portrait)]
        aspect_ratio: AspectRatio,

        /// Where to write the video
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}
