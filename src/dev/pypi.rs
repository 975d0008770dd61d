//! PyPI integration.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkResult};

const HOST: &str = "pypi.org";

/// PyPI subcommands.
#[derive(Subcommand, Debug)]
pub enum PypiCommands {
    /// Open a project page
    #[command(disable_version_flag = true)]
    Project {
        /// Project name
        name: String,
        /// Pin a specific release
        version: Option<String>,
    },

    /// Search projects
    Search {
        /// Search query
        query: String,
    },
}

#[instrument]
pub fn resolve(command: &PypiCommands) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        PypiCommands::Project { name, version } => {
            let name = link::require_segment(name, "PROJECT")?;
            Ok(match version {
                Some(v) => link::join(base, &["project", name, v]),
                None => link::join(base, &["project", name]),
            })
        }
        PypiCommands::Search { query } => {
            Ok(link::with_query(link::join(base, &["search"]), "q", query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_project_when_resolving_then_project_page() {
        let url = resolve(&PypiCommands::Project {
            name: "requests".into(),
            version: None,
        })
        .unwrap();
        assert_eq!(url.as_str(), "https://pypi.org/project/requests");
    }

    #[test]
    fn given_release_when_resolving_then_pinned() {
        let url = resolve(&PypiCommands::Project {
            name: "requests".into(),
            version: Some("2.31.0".into()),
        })
        .unwrap();
        assert_eq!(url.as_str(), "https://pypi.org/project/requests/2.31.0");
    }

    #[test]
    fn given_name_with_space_when_resolving_then_invalid() {
        assert!(resolve(&PypiCommands::Project {
            name: "bad name".into(),
            version: None,
        })
        .is_err());
    }
}
