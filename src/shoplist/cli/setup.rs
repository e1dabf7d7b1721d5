use clap::{Parser, Subcommand, ValueEnum};
use shoplist::sort::SortOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shoplist", bin_name = "shoplist", version)]
#[command(about = "A small, durable shopping list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the list and config (overrides SHOPLIST_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the list
    #[command(alias = "a")]
    Add {
        /// Item name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Quantity; anything but a positive integer counts as 1
        #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
        qty: Option<String>,
    },

    /// Show the list
    #[command(alias = "ls")]
    List,

    /// Rename an item or change its quantity
    #[command(alias = "e")]
    Edit {
        /// Item position, or id:<token>
        selector: String,

        /// New name (words are joined with spaces)
        name: Vec<String>,

        /// New quantity
        #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
        qty: Option<String>,
    },

    /// Mark items as purchased
    #[command(alias = "done")]
    Check {
        /// Positions (3), ranges (2-4) or id:<token>
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Mark items as pending
    Uncheck {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Flip the purchased flag of items
    #[command(alias = "t")]
    Toggle {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete items
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove every item
    Clear,

    /// Reorder the list and keep the new order
    Sort {
        /// az, za, purchased or pending
        order: SortOrder,
    },

    /// Export the list as name;quantity;purchased lines
    Export {
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "dir")]
        stdout: bool,

        /// Directory to write into (defaults to the export-dir setting)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Replace the list with the contents of an export file
    Import {
        /// File to read; omit or use - for stdin
        file: Option<PathBuf>,
    },

    /// Show pending, purchased and total counts
    Stats,

    /// Show or change the theme
    Theme {
        action: Option<ThemeArg>,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Check stored data and repair what can be repaired
    Doctor,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show one setting
    Get { key: String },
    /// Change a setting
    Set { key: String, value: String },
}
