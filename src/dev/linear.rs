//! Linear integration. All links are scoped to a workspace, which comes
//! from `[linear] workspace` or the per-command flag.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::config::Settings;
use crate::link::{self, LinkError, LinkResult};

/// Linear subcommands.
#[derive(Subcommand, Debug)]
pub enum LinearCommands {
    /// Open an issue by key (e.g. ENG-123)
    Issue {
        /// Issue key
        key: String,
        /// Workspace slug (overrides config)
        #[arg(short, long)]
        workspace: Option<String>,
    },

    /// Open a team board by key
    Team {
        /// Team key (e.g. ENG)
        key: String,
        /// Workspace slug (overrides config)
        #[arg(short, long)]
        workspace: Option<String>,
    },
}

#[instrument(skip(settings))]
pub fn resolve(command: &LinearCommands, settings: &Settings) -> LinkResult<Url> {
    let base = link::service_url("linear.app")?;
    match command {
        LinearCommands::Issue { key, workspace } => {
            let workspace = required_workspace(workspace.as_deref(), settings)?;
            let key = link::require_segment(key, "ISSUE-KEY")?;
            Ok(link::join(base, &[workspace, "issue", key]))
        }
        LinearCommands::Team { key, workspace } => {
            let workspace = required_workspace(workspace.as_deref(), settings)?;
            let key = link::require_segment(key, "TEAM-KEY")?;
            Ok(link::join(base, &[workspace, "team", key]))
        }
    }
}

fn required_workspace<'a>(
    flag: Option<&'a str>,
    settings: &'a Settings,
) -> LinkResult<&'a str> {
    flag.or(settings.linear.workspace.as_deref())
        .ok_or(LinkError::MissingSetting {
            key: "linear.workspace",
            hint: "set [linear] workspace in the config or pass --workspace",
        })
}
