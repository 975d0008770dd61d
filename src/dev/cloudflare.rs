//! Cloudflare integration. The dashboard supports account-relative deep
//! links of the form `?to=/:account/<zone>/<page>`, which lets pocket
//! link into a zone without knowing the account id.

use clap::Subcommand;
use tracing::instrument;
use url::Url;

use crate::link::{self, LinkResult};

const HOST: &str = "dash.cloudflare.com";

/// Cloudflare subcommands.
#[derive(Subcommand, Debug)]
pub enum CloudflareCommands {
    /// Open the dashboard
    Dash,

    /// Open a zone overview
    Zone {
        /// Zone name (e.g. example.com)
        zone: String,
    },

    /// Open the DNS records of a zone
    Dns {
        /// Zone name (e.g. example.com)
        zone: String,
    },
}

#[instrument]
pub fn resolve(command: &CloudflareCommands) -> LinkResult<Url> {
    let base = link::service_url(HOST)?;
    match command {
        CloudflareCommands::Dash => Ok(base),
        CloudflareCommands::Zone { zone } => deep_link(base, zone, None),
        CloudflareCommands::Dns { zone } => deep_link(base, zone, Some("dns")),
    }
}

fn deep_link(mut base: Url, zone: &str, page: Option<&str>) -> LinkResult<Url> {
    let zone = link::require_segment(zone, "ZONE")?;
    let target = match page {
        Some(page) => format!("to=/:account/{zone}/{page}"),
        None => format!("to=/:account/{zone}"),
    };
    // '/' and ':' are valid query characters; set_query keeps them readable
    base.set_query(Some(&target));
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_dash_when_resolving_then_dashboard_root() {
        let url = resolve(&CloudflareCommands::Dash).unwrap();
        assert_eq!(url.as_str(), "https://dash.cloudflare.com/");
    }

    #[test]
    fn given_zone_when_resolving_then_account_deep_link() {
        let url = resolve(&CloudflareCommands::Zone {
            zone: "example.com".into(),
        })
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dash.cloudflare.com/?to=/:account/example.com"
        );
    }

    #[test]
    fn given_dns_when_resolving_then_dns_page() {
        let url = resolve(&CloudflareCommands::Dns {
            zone: "example.com".into(),
        })
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dash.cloudflare.com/?to=/:account/example.com/dns"
        );
    }

    #[test]
    fn given_zone_with_slash_when_resolving_then_invalid() {
        assert!(resolve(&CloudflareCommands::Zone {
            zone: "example.com/evil".into(),
        })
        .is_err());
    }
}
