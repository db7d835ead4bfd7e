use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands::{
    class_command, filter_command, method_command, scope_command, session_command,
};

#[derive(Parser, Debug)]
#[command(name = "csharp-test-filter")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configuration file (defaults to the nearest .csharp-test-filter.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Saved LSP documentSymbol response to use instead of the built-in parser
    #[arg(long, global = true, conflicts_with = "no_symbols")]
    pub symbols: Option<PathBuf>,

    /// Resolve from raw text patterns only
    #[arg(long, global = true)]
    pub no_symbols: bool,

    /// Do not print informational messages and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full test scope at a location
    #[command(visible_alias = "s")]
    Scope {
        /// Path to the C# file with optional line and column (e.g., CalculatorTests.cs:12:5)
        location: String,

        /// Print the scope as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the test filter at a location
    #[command(visible_alias = "f")]
    Filter {
        /// Path to the C# file with optional line and column (e.g., CalculatorTests.cs:12:5)
        location: String,

        /// JSON breakpoint list; a breakpoint is added to the resolved test method
        #[arg(short, long)]
        breakpoints: Option<PathBuf>,
    },
    /// Print the class name at a location
    Class {
        /// Path to the C# file with optional line (e.g., CalculatorTests.cs:12)
        location: String,
    },
    /// Print the method name at a location
    Method {
        /// Path to the C# file with optional line (e.g., CalculatorTests.cs:12)
        location: String,
    },
    /// Resolve locations read from stdin, one per line, with a long-lived engine
    Session {
        /// JSON breakpoint list; a breakpoint is added to each resolved test method
        #[arg(short, long)]
        breakpoints: Option<PathBuf>,
    },
}

impl Cli {
    /// Execute the command
    pub async fn execute(self) -> Result<()> {
        let options = self.options;
        match self.command {
            Commands::Scope { location, json } => scope_command(&options, &location, json).await,
            Commands::Filter {
                location,
                breakpoints,
            } => filter_command(&options, &location, breakpoints.as_deref()).await,
            Commands::Class { location } => class_command(&options, &location).await,
            Commands::Method { location } => method_command(&options, &location).await,
            Commands::Session { breakpoints } => {
                session_command(&options, breakpoints.as_deref()).await
            }
        }
    }
}
