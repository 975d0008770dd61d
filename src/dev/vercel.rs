//! Vercel integration. Project links are scoped to a team or personal
//! scope from `[vercel] scope` or the per-command flag.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::config::Settings;
use crate::link::{self, LinkError, LinkResult};

const HOST: &str = "vercel.com";

/// Vercel subcommands.
#[derive(Subcommand, Debug)]
pub enum VercelCommands {
    /// Open a project overview
    Project {
        /// Project name
        project: String,
        /// Team or personal scope (overrides config)
        #[arg(short, long)]
        scope: Option<String>,
    },

    /// Open the deployments of a project
    Deployments {
        /// Project name
        project: String,
        /// Team or personal scope (overrides config)
        #[arg(short, long)]
        scope: Option<String>,
    },
}

#[instrument(skip(settings))]
pub fn resolve(command: &VercelCommands, settings: &Settings) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        VercelCommands::Project { project, scope } => {
            let scope = required_scope(scope.as_deref(), settings)?;
            let project = link::require_segment(project, "PROJECT")?;
            Ok(link::join(base, &[scope, project]))
        }
        VercelCommands::Deployments { project, scope } => {
            let scope = required_scope(scope.as_deref(), settings)?;
            let project = link::require_segment(project, "PROJECT")?;
            Ok(link::join(base, &[scope, project, "deployments"]))
        }
    }
}

fn required_scope<'a>(flag: Option<&'a str>, settings: &'a Settings) -> LinkResult<&'a str> {
    flag.or(settings.vercel.scope.as_deref())
        .ok_or(LinkError::MissingSetting {
            key: "vercel.scope",
            hint: "set [vercel] scope in the config or pass --scope",
        })
}
