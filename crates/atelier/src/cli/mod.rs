//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the atelier binary.

mod commands;
mod credentials;
mod run;

pub use commands::{Cli, Commands};
pub use credentials::PromptCredentials;
pub use run::{image_mime, load_source_image, run_command};
