//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Renamer - Normalize TV episode and movie filenames
#[derive(Parser, Debug)]
#[command(name = "renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Do not ask for confirmation
    #[arg(short = 'y', long, global = true)]
    pub no_confirm: bool,

    /// Omit show title from filename
    #[arg(short, long, global = true)]
    pub simple: bool,

    /// Recursively descend into directories
    #[arg(short, long, global = true)]
    pub recursive: bool,

    /// Skip the TVmaze lookup and use the names found in the files
    #[arg(long, global = true)]
    pub offline: bool,

    /// Set log level
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info,
        global = true
    )]
    pub loglevel: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename TV episode files
    Episodes {
        /// FILE location
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
    },

    /// Rename movie files
    Movies {
        /// FILE location
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive for the tracing filter.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Info => "renamer=info",
            LogLevel::Warn => "renamer=warn",
            LogLevel::Error => "renamer=error",
        }
    }
}
