//! Notion integration.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkResult};

const HOST: &str = "www.notion.so";

/// Notion subcommands.
#[derive(Subcommand, Debug)]
pub enum NotionCommands {
    /// Open the workspace home
    Home,

    /// Create a new page (notion.new)
    New,

    /// Open a page by id or slug
    Page {
        /// Page id or SLUG-id
        id: String,
    },
}

#[instrument]
pub fn resolve(command: &NotionCommands) -> LinkResult<Url> {
    match command {
        NotionCommands::Home => link::service_url(HOST),
        NotionCommands::New => link::service_url("notion.new"),
        NotionCommands::Page { id } => {
            let base = link::service_url(HOST)?;
            let id = link::require_segment(id, "PAGE-ID")?;
            Ok(link::join(base, &[id]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_home_when_resolving_then_workspace_root() {
        let url = resolve(&NotionCommands::Home).unwrap();
        assert_eq!(url.as_str(), "https://www.notion.so/");
    }

    #[test]
    fn given_new_when_resolving_then_notion_new() {
        let url = resolve(&NotionCommands::New).unwrap();
        assert_eq!(url.as_str(), "https://notion.new/");
    }

    #[test]
    fn given_page_id_when_resolving_then_page_link() {
        let url = resolve(&NotionCommands::Page {
            id: "Meeting-Notes-83715d".into(),
        })
        .unwrap();
        assert_eq!(url.as_str(), "https://www.notion.so/Meeting-Notes-83715d");
    }

    #[test]
    fn given_page_id_with_space_when_resolving_then_invalid() {
        assert!(resolve(&NotionCommands::Page {
            id: "Meeting Notes".into(),
        })
        .is_err());
    }
}
