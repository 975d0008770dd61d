//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dev::DevCommands;
use crate::productivity::ProductivityCommands;

/// Unified command-line launcher for developer and productivity tools
#[derive(Parser, Debug)]
#[command(name = "pocket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: XDG config dir)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Open resolved links in the browser instead of printing them
    #[arg(short, long, global = true)]
    pub open: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Developer tool commands
    #[command(
        visible_alias = "d",
        long_about = "Interact with developer tools: GitHub, GitLab, Jira, Cloudflare, Vercel, Docker Hub, etc."
    )]
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },

    /// Productivity tool commands
    #[command(
        visible_aliases = ["p", "prod"],
        long_about = "Interact with productivity tools: Calendar, Notion, Todoist, Trello, etc."
    )]
    Productivity {
        #[command(subcommand)]
        command: ProductivityCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
