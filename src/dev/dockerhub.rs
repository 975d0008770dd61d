//! Docker Hub integration. Official images (no namespace) live under
//! `_/NAME`, everything else under `r/OWNER/NAME`.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkResult};

const HOST: &str = "hub.docker.com";

/// Docker Hub subcommands.
#[derive(Subcommand, Debug)]
pub enum DockerhubCommands {
    /// Open an image page
    Image {
        /// Image as NAME (official) or OWNER/NAME
        image: String,
    },

    /// Open the tag list of an image
    Tags {
        /// Image as NAME (official) or OWNER/NAME
        image: String,
    },

    /// Search images
    Search {
        /// Search query
        query: String,
    },
}

#[instrument]
pub fn resolve(command: &DockerhubCommands) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        DockerhubCommands::Image { image } => {
            let segments = image_segments(image)?;
            Ok(link::join(base, &segments))
        }
        DockerhubCommands::Tags { image } => {
            let mut segments = image_segments(image)?;
            segments.push("tags");
            Ok(link::join(base, &segments))
        }
        DockerhubCommands::Search { query } => {
            Ok(link::with_query(link::join(base, &["search"]), "q", query))
        }
    }
}

fn image_segments(image: &str) -> LinkResult<Vec<&str>> {
    if image.contains('/') {
        let (owner, name) = link::split_slug(image, "OWNER/NAME")?;
        Ok(vec!["r", owner, name])
    } else {
        let name = link::require_segment(image, "NAME")?;
        Ok(vec!["_", name])
    }
}
