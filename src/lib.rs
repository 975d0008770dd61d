//! pocket: unified command-line launcher for developer and productivity tools
//!
//! The crate is a command aggregator. Two groups compose the integrations:
//! `dev` (GitHub, GitLab, Linear, npm, PyPI, Jira, Cloudflare, Vercel,
//! Docker Hub) and `productivity` (Calendar, Notion, Todoist, Trello).
//! Each integration owns its subcommands and resolves them to the
//! canonical web URL for the requested resource; the CLI prints the link
//! or opens it in the browser.

pub mod cli;
pub mod config;
pub mod dev;
pub mod exitcode;
pub mod link;
pub mod productivity;
