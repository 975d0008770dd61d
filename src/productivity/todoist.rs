//! Todoist integration.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkResult};

const HOST: &str = "app.todoist.com";

/// Todoist subcommands.
#[derive(Subcommand, Debug)]
pub enum TodoistCommands {
    /// Open the today view
    Today,

    /// Open the upcoming view
    Upcoming,

    /// Search tasks
    Search {
        /// Search query
        query: String,
    },
}

#[instrument]
pub fn resolve(command: &TodoistCommands) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        TodoistCommands::Today => Ok(link::join(base, &["app", "today"])),
        TodoistCommands::Upcoming => Ok(link::join(base, &["app", "upcoming"])),
        TodoistCommands::Search { query } => Ok(link::join(base, &["app", "search", query])),
    }
}
