//! Developer tool integrations
//!
//! Each integration module owns its subcommand surface and resolves an
//! invocation to the matching web resource. This module only composes
//! them into the `dev` command group.

pub mod cloudflare;
pub mod dockerhub;
pub mod github;
pub mod gitlab;
pub mod jira;
pub mod linear;
pub mod npm;
pub mod pypi;
pub mod vercel;

use clap::Subcommand;
use url::Url;

use crate::config::Settings;
use crate::link::LinkResult;

/// Developer tool subcommands, one per integration.
/// Variant order is the help-listing order.
#[derive(Subcommand, Debug)]
pub enum DevCommands {
    /// GitHub repositories, issues, and pull requests
    Github {
        #[command(subcommand)]
        command: github::GithubCommands,
    },

    /// GitLab projects, merge requests, and pipelines
    Gitlab {
        #[command(subcommand)]
        command: gitlab::GitlabCommands,
    },

    /// Linear issues and teams
    Linear {
        #[command(subcommand)]
        command: linear::LinearCommands,
    },

    /// npm registry packages
    Npm {
        #[command(subcommand)]
        command: npm::NpmCommands,
    },

    /// PyPI projects
    Pypi {
        #[command(subcommand)]
        command: pypi::PypiCommands,
    },

    /// Jira issues and JQL searches
    Jira {
        #[command(subcommand)]
        command: jira::JiraCommands,
    },

    /// Cloudflare dashboard
    Cloudflare {
        #[command(subcommand)]
        command: cloudflare::CloudflareCommands,
    },

    /// Vercel projects and deployments
    Vercel {
        #[command(subcommand)]
        command: vercel::VercelCommands,
    },

    /// Docker Hub images and tags
    Dockerhub {
        #[command(subcommand)]
        command: dockerhub::DockerhubCommands,
    },
}

/// Delegate to the matching integration.
pub fn resolve(command: &DevCommands, settings: &Settings) -> LinkResult<Url> {
    match command {
        DevCommands::Github { command } => github::resolve(command, settings),
        DevCommands::Gitlab { command } => gitlab::resolve(command, settings),
        DevCommands::Linear { command } => linear::resolve(command, settings),
        DevCommands::Npm { command } => npm::resolve(command),
        DevCommands::Pypi { command } => pypi::resolve(command),
        DevCommands::Jira { command } => jira::resolve(command, settings),
        DevCommands::Cloudflare { command } => cloudflare::resolve(command),
        DevCommands::Vercel { command } => vercel::resolve(command, settings),
        DevCommands::Dockerhub { command } => dockerhub::resolve(command),
    }
}
