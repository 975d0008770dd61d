//! GitHub integration: repositories, issues, pull requests, and search.
//!
//! The host is configurable via `[github] host` for GitHub Enterprise;
//! everything else is plain path composition on top of it.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::config::Settings;
use crate::link::{self, LinkResult};

/// GitHub subcommands.
#[derive(Subcommand, Debug)]
pub enum GithubCommands {
    /// Open a repository
    Repo {
        /// Repository as OWNER/NAME
        repo: String,
    },

    /// Open the issue list, or a single issue
    Issues {
        /// Repository as OWNER/NAME
        repo: String,
        /// Issue number
        number: Option<u64>,
    },

    /// Open the pull request list, or a single pull request
    Pulls {
        /// Repository as OWNER/NAME
        repo: String,
        /// Pull request number
        number: Option<u64>,
    },

    /// Search repositories
    Search {
        /// Search query
        query: String,
    },
}

#[instrument(skip(settings))]
pub fn resolve(command: &GithubCommands, settings: &Settings) -> LinkResult<Url> {
    let base = link::service_url(&settings.github.host)?;
    match command {
        GithubCommands::Repo { repo } => {
            let (owner, name) = link::split_slug(repo, "OWNER/NAME")?;
            Ok(link::join(base, &[owner, name]))
        }
        GithubCommands::Issues { repo, number } => {
            let (owner, name) = link::split_slug(repo, "OWNER/NAME")?;
            let url = link::join(base, &[owner, name, "issues"]);
            Ok(match number {
                Some(n) => link::join(url, &[&n.to_string()]),
                None => url,
            })
        }
        GithubCommands::Pulls { repo, number } => {
            let (owner, name) = link::split_slug(repo, "OWNER/NAME")?;
            // The list lives under /pulls, a single PR under /pull/N
            Ok(match number {
                Some(n) => link::join(base, &[owner, name, "pull", &n.to_string()]),
                None => link::join(base, &[owner, name, "pulls"]),
            })
        }
        GithubCommands::Search { query } => {
            Ok(link::with_query(link::join(base, &["search"]), "q", query))
        }
    }
}
