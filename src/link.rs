//! Shared link construction helpers used by every integration.
//!
//! All integrations resolve their subcommands to a canonical `https` URL.
//! The helpers here own the percent-encoding and the input validation so
//! the integration modules stay straight-line code.

use thiserror::Error;
use url::Url;

/// Errors produced while resolving an invocation to a URL.
/// These are independent of the CLI layer.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("invalid {expected}: '{value}'")]
    InvalidSlug {
        value: String,
        expected: &'static str,
    },

    #[error("invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("invalid host '{host}'")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("missing setting '{key}': {hint}")]
    MissingSetting {
        key: &'static str,
        hint: &'static str,
    },
}

/// Result type for link resolution.
pub type LinkResult<T> = Result<T, LinkError>;

/// Build the `https` base URL for a service host.
pub fn service_url(host: &str) -> LinkResult<Url> {
    if host.is_empty() || host.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(LinkError::InvalidHost {
            host: host.to_string(),
            source: url::ParseError::EmptyHost,
        });
    }
    Url::parse(&format!("https://{host}/")).map_err(|source| LinkError::InvalidHost {
        host: host.to_string(),
        source,
    })
}

/// Append path segments to a URL, percent-encoding each segment.
pub fn join(mut url: Url, segments: &[&str]) -> Url {
    {
        let mut parts = url
            .path_segments_mut()
            .expect("https URLs always have path segments");
        parts.pop_if_empty();
        for segment in segments {
            parts.push(segment);
        }
    }
    url
}

/// Append a single query parameter (form-encoded).
pub fn with_query(mut url: Url, key: &str, value: &str) -> Url {
    url.query_pairs_mut().append_pair(key, value);
    url
}

/// Split an `OWNER/NAME` slug into its two parts.
///
/// `expected` names the shape in the error message, e.g. `"OWNER/NAME"`.
pub fn split_slug<'a>(value: &'a str, expected: &'static str) -> LinkResult<(&'a str, &'a str)> {
    let invalid = || LinkError::InvalidSlug {
        value: value.to_string(),
        expected,
    };
    let (owner, name) = value.split_once('/').ok_or_else(invalid)?;
    if !is_segment(owner) || !is_segment(name) {
        return Err(invalid());
    }
    Ok((owner, name))
}

/// Split a `/`-separated path (e.g. a GitLab project with nested groups)
/// into non-empty segments. Requires at least two segments.
pub fn split_path<'a>(value: &'a str, expected: &'static str) -> LinkResult<Vec<&'a str>> {
    let segments: Vec<&str> = value.split('/').collect();
    if segments.len() < 2 || !segments.iter().all(|s| is_segment(s)) {
        return Err(LinkError::InvalidSlug {
            value: value.to_string(),
            expected,
        });
    }
    Ok(segments)
}

/// A single non-empty identifier with no whitespace or separators.
pub fn is_segment(value: &str) -> bool {
    !value.is_empty() && !value.contains('/') && !value.chars().any(char::is_whitespace)
}

/// Validate a bare identifier (issue key, board id, page id).
pub fn require_segment<'a>(value: &'a str, expected: &'static str) -> LinkResult<&'a str> {
    if is_segment(value) {
        Ok(value)
    } else {
        Err(LinkError::InvalidSlug {
            value: value.to_string(),
            expected,
        })
    }
}
