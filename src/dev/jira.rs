//! Jira integration. Links target an Atlassian cloud site
//! (SITE.atlassian.net) taken from `[jira] site` or the per-command flag.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::config::Settings;
use crate::link::{self, LinkError, LinkResult};

/// Jira subcommands.
#[derive(Subcommand, Debug)]
pub enum JiraCommands {
    /// Open an issue by key (e.g. PROJ-123)
    Issue {
        /// Issue key
        key: String,
        /// Atlassian site name (overrides config)
        #[arg(short, long)]
        site: Option<String>,
    },

    /// Search issues with a JQL query
    Search {
        /// JQL query
        jql: String,
        /// Atlassian site name (overrides config)
        #[arg(short, long)]
        site: Option<String>,
    },
}

#[instrument(skip(settings))]
pub fn resolve(command: &JiraCommands, settings: &Settings) -> LinkResult<Url> {
    match command {
        JiraCommands::Issue { key, site } => {
            let base = site_url(site.as_deref(), settings)?;
            let key = link::require_segment(key, "ISSUE-KEY")?;
            Ok(link::join(base, &["browse", key]))
        }
        JiraCommands::Search { jql, site } => {
            let base = site_url(site.as_deref(), settings)?;
            Ok(link::with_query(link::join(base, &["issues"]), "jql", jql))
        }
    }
}

fn site_url(flag: Option<&str>, settings: &Settings) -> LinkResult<Url> {
    let site = flag
        .or(settings.jira.site.as_deref())
        .ok_or(LinkError::MissingSetting {
            key: "jira.site",
            hint: "set [jira] site in the config or pass --site",
        })?;
    link::service_url(&format!("{site}.atlassian.net"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_settings() -> Settings {
        let mut settings = Settings::default();
        settings.jira.site = Some("acme".into());
        settings
    }

    #[test]
    fn given_issue_key_when_resolving_then_browse_link() {
        let url = resolve(
            &JiraCommands::Issue {
                key: "PROJ-123".into(),
                site: None,
            },
            &site_settings(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://acme.atlassian.net/browse/PROJ-123");
    }

    #[test]
    fn given_jql_when_resolving_then_query_encoded() {
        let url = resolve(
            &JiraCommands::Search {
                jql: "assignee = currentUser()".into(),
                site: None,
            },
            &site_settings(),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme.atlassian.net/issues?jql=assignee+%3D+currentUser%28%29"
        );
    }

    #[test]
    fn given_no_site_when_resolving_then_missing_setting() {
        let err = resolve(
            &JiraCommands::Issue {
                key: "PROJ-1".into(),
                site: None,
            },
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LinkError::MissingSetting { key, .. } if key == "jira.site"));
    }

    #[test]
    fn given_site_flag_when_resolving_then_flag_wins() {
        let url = resolve(
            &JiraCommands::Issue {
                key: "OPS-9".into(),
                site: Some("other".into()),
            },
            &site_settings(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://other.atlassian.net/browse/OPS-9");
    }
}
