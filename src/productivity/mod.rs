//! Productivity tool integrations, composed into the `productivity`
//! command group. Same shape as the `dev` group.

pub mod calendar;
pub mod notion;
pub mod todoist;
pub mod trello;

use clap::Subcommand;
use url::Url;

use crate::config::Settings;
use crate::link::LinkResult;

/// Productivity tool subcommands, one per integration.
/// Variant order is the help-listing order.
#[derive(Subcommand, Debug)]
pub enum ProductivityCommands {
    /// Google Calendar views
    Calendar {
        #[command(subcommand)]
        command: calendar::CalendarCommands,
    },

    /// Notion pages
    Notion {
        #[command(subcommand)]
        command: notion::NotionCommands,
    },

    /// Todoist views and search
    Todoist {
        #[command(subcommand)]
        command: todoist::TodoistCommands,
    },

    /// Trello boards and search
    Trello {
        #[command(subcommand)]
        command: trello::TrelloCommands,
    },
}

/// Delegate to the matching integration.
pub fn resolve(command: &ProductivityCommands, settings: &Settings) -> LinkResult<Url> {
    match command {
        ProductivityCommands::Calendar { command } => calendar::resolve(command),
        ProductivityCommands::Notion { command } => notion::resolve(command),
        ProductivityCommands::Todoist { command } => todoist::resolve(command),
        ProductivityCommands::Trello { command } => trello::resolve(command, settings),
    }
}
