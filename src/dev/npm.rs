//! npm registry integration.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkError, LinkResult};

const HOST: &str = "www.npmjs.com";

/// npm subcommands.
#[derive(Subcommand, Debug)]
pub enum NpmCommands {
    /// Open a package page
    #[command(disable_version_flag = true)]
    Package {
        /// Package name (scoped names like @scope/name allowed)
        name: String,
        /// Pin a specific version
        #[arg(long)]
        version: Option<String>,
    },

    /// Search packages
    Search {
        /// Search query
        query: String,
    },
}

#[instrument]
pub fn resolve(command: &NpmCommands) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        NpmCommands::Package { name, version } => {
            let mut segments = vec!["package"];
            segments.extend(package_segments(name)?);
            let url = link::join(base, &segments);
            Ok(match version {
                Some(v) => link::join(url, &["v", v]),
                None => url,
            })
        }
        NpmCommands::Search { query } => {
            Ok(link::with_query(link::join(base, &["search"]), "q", query))
        }
    }
}

/// A package name is either `name` or `@scope/name`.
fn package_segments(name: &str) -> LinkResult<Vec<&str>> {
    let invalid = || LinkError::InvalidSlug {
        value: name.to_string(),
        expected: "PACKAGE or @SCOPE/PACKAGE",
    };
    match name.split_once('/') {
        None if link::is_segment(name) => Ok(vec![name]),
        Some((scope, bare))
            if scope.starts_with('@') && link::is_segment(scope) && link::is_segment(bare) =>
        {
            Ok(vec![scope, bare])
        }
        _ => Err(invalid()),
    }
}
