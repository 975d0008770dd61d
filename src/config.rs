//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `-c FILE` if given, else `$XDG_CONFIG_HOME/pocket/pocket.toml`
//! 3. Environment variables: `POCKET_*` prefix
//!
//! Settings hold per-service hosts, sites, and workspaces plus the
//! browser opener. No tokens or credentials are stored here.

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("config error: {0}")]
    Env(String),

    #[error("serialize config: {0}")]
    Serialize(String),
}

/// GitHub settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GithubSettings {
    /// Host of the GitHub instance (change for GitHub Enterprise)
    pub host: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            host: "github.com".into(),
        }
    }
}

/// GitLab settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitlabSettings {
    /// Host of the GitLab instance (change for self-managed)
    pub host: String,
}

impl Default for GitlabSettings {
    fn default() -> Self {
        Self {
            host: "gitlab.com".into(),
        }
    }
}

/// Jira settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct JiraSettings {
    /// Atlassian site name (SITE.atlassian.net)
    pub site: Option<String>,
}

/// Linear settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LinearSettings {
    /// Workspace slug (linear.app/WORKSPACE)
    pub workspace: Option<String>,
}

/// Vercel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct VercelSettings {
    /// Team or personal scope (vercel.com/SCOPE)
    pub scope: Option<String>,
}

/// Trello settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TrelloSettings {
    /// Username for the boards overview (trello.com/u/USER/boards)
    pub user: Option<String>,
}

/// Unified configuration for pocket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Browser command used with --open (default: platform opener)
    pub browser: Option<String>,
    pub github: GithubSettings,
    pub gitlab: GitlabSettings,
    pub jira: JiraSettings,
    pub linear: LinearSettings,
    pub vercel: VercelSettings,
    pub trello: TrelloSettings,
}

/// Raw host section for intermediate parsing (fields are Option to detect
/// "not specified", so unspecified values inherit from the base layer).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawHostSettings {
    pub host: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub browser: Option<String>,
    pub github: RawHostSettings,
    pub gitlab: RawHostSettings,
    pub jira: JiraSettings,
    pub linear: LinearSettings,
    pub vercel: VercelSettings,
    pub trello: TrelloSettings,
}

/// Get the XDG config directory for pocket.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pocket").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pocket.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// Scalar options: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            browser: overlay.browser.clone().or_else(|| self.browser.clone()),
            github: GithubSettings {
                host: overlay
                    .github
                    .host
                    .clone()
                    .unwrap_or_else(|| self.github.host.clone()),
            },
            gitlab: GitlabSettings {
                host: overlay
                    .gitlab
                    .host
                    .clone()
                    .unwrap_or_else(|| self.gitlab.host.clone()),
            },
            jira: JiraSettings {
                site: overlay.jira.site.clone().or_else(|| self.jira.site.clone()),
            },
            linear: LinearSettings {
                workspace: overlay
                    .linear
                    .workspace
                    .clone()
                    .or_else(|| self.linear.workspace.clone()),
            },
            vercel: VercelSettings {
                scope: overlay
                    .vercel
                    .scope
                    .clone()
                    .or_else(|| self.vercel.scope.clone()),
            },
            trello: TrelloSettings {
                user: overlay
                    .trello
                    .user
                    .clone()
                    .or_else(|| self.trello.user.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Config file given with `-c/--config`; bypasses the
    ///   global file and must exist.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Config file (explicit, else global if present)
    /// 3. Environment variables: `POCKET_*` prefix
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut current = Self::default();

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply POCKET_* environment variables as explicit overrides.
    ///
    /// Uses the config crate for env var parsing; `__` separates sections,
    /// e.g. `POCKET_JIRA__SITE=mycorp` sets `[jira] site`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ConfigError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("POCKET").separator("__"));

        let config = builder
            .build()
            .map_err(|e| ConfigError::Env(e.to_string()))?;

        if let Ok(val) = config.get_string("browser") {
            settings.browser = Some(val);
        }
        if let Ok(val) = config.get_string("github.host") {
            settings.github.host = val;
        }
        if let Ok(val) = config.get_string("gitlab.host") {
            settings.gitlab.host = val;
        }
        if let Ok(val) = config.get_string("jira.site") {
            settings.jira.site = Some(val);
        }
        if let Ok(val) = config.get_string("linear.workspace") {
            settings.linear.workspace = Some(val);
        }
        if let Ok(val) = config.get_string("vercel.scope") {
            settings.vercel.scope = Some(val);
        }
        if let Ok(val) = config.get_string("trello.user") {
            settings.trello.user = Some(val);
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# pocket configuration
#
# Location: ~/.config/pocket/pocket.toml (XDG)
# Every value can also be set via POCKET_* environment variables,
# e.g. POCKET_JIRA__SITE=mycorp overrides [jira] site.

# Browser command used with --open (default: platform opener)
# browser = "firefox"

[github]
# Host of the GitHub instance (change for GitHub Enterprise)
# host = "github.com"

[gitlab]
# Host of the GitLab instance (change for self-managed)
# host = "gitlab.com"

[jira]
# Atlassian site name, as in SITE.atlassian.net
# site = "mycorp"

[linear]
# Workspace slug, as in linear.app/WORKSPACE
# workspace = "mycorp"

[vercel]
# Team or personal scope, as in vercel.com/SCOPE
# scope = "mycorp"

[trello]
# Username for the boards overview
# user = "jdoe"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_defaulting_then_known_hosts() {
        let settings = Settings::default();
        assert_eq!(settings.github.host, "github.com");
        assert_eq!(settings.gitlab.host, "gitlab.com");
        assert!(settings.jira.site.is_none());
        assert!(settings.browser.is_none());
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins_where_set() {
        let base = Settings::default();
        let overlay: RawSettings = toml::from_str(
            r#"
[github]
host = "github.example.com"

[jira]
site = "mycorp"
"#,
        )
        .unwrap();

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.github.host, "github.example.com");
        assert_eq!(merged.jira.site.as_deref(), Some("mycorp"));
        // Unspecified values keep the base layer
        assert_eq!(merged.gitlab.host, "gitlab.com");
        assert!(merged.trello.user.is_none());
    }

    #[test]
    fn given_template_when_parsing_then_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        // Template is fully commented out, so nothing is specified
        assert!(raw.browser.is_none());
        assert!(raw.github.host.is_none());
    }

    #[test]
    fn given_settings_when_rendering_then_round_trips() {
        let mut settings = Settings::default();
        settings.jira.site = Some("mycorp".into());

        let rendered = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&rendered).unwrap();

        assert_eq!(raw.jira.site.as_deref(), Some("mycorp"));
        assert_eq!(raw.github.host.as_deref(), Some("github.com"));
    }
}
