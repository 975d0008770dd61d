//! GitLab integration. Projects may live in nested groups, so the
//! project argument is a full path like `group/sub/project`.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::config::Settings;
use crate::link::{self, LinkResult};

/// GitLab subcommands.
#[derive(Subcommand, Debug)]
pub enum GitlabCommands {
    /// Open a project
    Project {
        /// Project path as GROUP/PROJECT (nested groups allowed)
        project: String,
    },

    /// Open the issue list, or a single issue
    Issues {
        /// Project path as GROUP/PROJECT
        project: String,
        /// Issue IID
        iid: Option<u64>,
    },

    /// Open the merge request list, or a single merge request
    Mr {
        /// Project path as GROUP/PROJECT
        project: String,
        /// Merge request IID
        iid: Option<u64>,
    },

    /// Open the pipeline list
    Pipelines {
        /// Project path as GROUP/PROJECT
        project: String,
    },
}

#[instrument(skip(settings))]
pub fn resolve(command: &GitlabCommands, settings: &Settings) -> LinkResult<Url> {
    let base = link::service_url(&settings.gitlab.host)?;
    match command {
        GitlabCommands::Project { project } => {
            let segments = link::split_path(project, "GROUP/PROJECT")?;
            Ok(link::join(base, &segments))
        }
        GitlabCommands::Issues { project, iid } => {
            let url = project_feature(base, project, "issues")?;
            Ok(match iid {
                Some(n) => link::join(url, &[&n.to_string()]),
                None => url,
            })
        }
        GitlabCommands::Mr { project, iid } => {
            let url = project_feature(base, project, "merge_requests")?;
            Ok(match iid {
                Some(n) => link::join(url, &[&n.to_string()]),
                None => url,
            })
        }
        GitlabCommands::Pipelines { project } => project_feature(base, project, "pipelines"),
    }
}

/// Project features live under the `/-/` namespace separator.
fn project_feature(base: Url, project: &str, feature: &str) -> LinkResult<Url> {
    let mut segments = link::split_path(project, "GROUP/PROJECT")?;
    segments.push("-");
    segments.push(feature);
    Ok(link::join(base, &segments))
}
