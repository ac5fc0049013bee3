use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{generate_command, init_command, show_command};

#[derive(Parser, Debug)]
#[command(name = "isolgen")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate interfaces for every contract under the source directory
    #[command(visible_alias = "g")]
    Generate {
        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        root: Option<String>,

        /// Regenerate every file, ignoring the fingerprint cache
        #[arg(short, long)]
        force: bool,

        /// Do not print created and edited files
        #[arg(short, long)]
        quiet: bool,

        /// Delete the output directory before generating
        #[arg(long)]
        clear: bool,
    },
    /// Print the interface of one file without writing anything
    ///
    /// Files ordered before it are processed first, as `generate` would, so facets
    /// merge into the diamond and shared types resolve.
    #[command(visible_alias = "s")]
    Show {
        /// Path to the Solidity file
        file: String,

        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        root: Option<String>,

        /// Print the registered structs and enums instead of the interface
        #[arg(long)]
        types: bool,
    },
    /// Write a default .isolgen.json
    Init {
        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        root: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Generate {
                root,
                force,
                quiet,
                clear,
            } => generate_command(root.as_deref(), force, quiet, clear),
            Commands::Show { file, root, types } => show_command(&file, root.as_deref(), types),
            Commands::Init { root, force } => init_command(root.as_deref(), force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from(["isolgen", "generate", "--force", "--quiet", "--clear"]).unwrap();
        match cli.command {
            Commands::Generate {
                root,
                force,
                quiet,
                clear,
            } => {
                assert!(root.is_none());
                assert!(force && quiet && clear);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_file() {
        assert!(Cli::try_parse_from(["isolgen", "show"]).is_err());
    }
}
