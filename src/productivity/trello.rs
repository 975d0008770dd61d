//! Trello integration. The boards overview needs a username from
//! `[trello] user` or the per-command flag.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::config::Settings;
use crate::link::{self, LinkError, LinkResult};

const HOST: &str = "trello.com";

/// Trello subcommands.
#[derive(Subcommand, Debug)]
pub enum TrelloCommands {
    /// Open a board by its short id
    Board {
        /// Board short id (from the board URL)
        id: String,
    },

    /// Open the boards overview
    Boards {
        /// Username (overrides config)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Search cards and boards
    Search {
        /// Search query
        query: String,
    },
}

#[instrument(skip(settings))]
pub fn resolve(command: &TrelloCommands, settings: &Settings) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        TrelloCommands::Board { id } => {
            let id = link::require_segment(id, "BOARD-ID")?;
            Ok(link::join(base, &["b", id]))
        }
        TrelloCommands::Boards { user } => {
            let user = user
                .as_deref()
                .or(settings.trello.user.as_deref())
                .ok_or(LinkError::MissingSetting {
                    key: "trello.user",
                    hint: "set [trello] user in the config or pass --user",
                })?;
            Ok(link::join(base, &["u", user, "boards"]))
        }
        TrelloCommands::Search { query } => {
            Ok(link::with_query(link::join(base, &["search"]), "q", query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_board_id_when_resolving_then_board_link() {
        let url = resolve(
            &TrelloCommands::Board {
                id: "aBcD1234".into(),
            },
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://trello.com/b/aBcD1234");
    }

    #[test]
    fn given_user_in_config_when_resolving_boards_then_overview() {
        let mut settings = Settings::default();
        settings.trello.user = Some("jdoe".into());
        let url = resolve(&TrelloCommands::Boards { user: None }, &settings).unwrap();
        assert_eq!(url.as_str(), "https://trello.com/u/jdoe/boards");
    }

    #[test]
    fn given_no_user_when_resolving_boards_then_missing_setting() {
        let err = resolve(&TrelloCommands::Boards { user: None }, &Settings::default())
            .unwrap_err();
        assert!(matches!(err, LinkError::MissingSetting { key, .. } if key == "trello.user"));
    }
}
