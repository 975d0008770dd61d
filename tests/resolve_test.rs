//! End-to-end routing: a parsed invocation reaches the right integration
//! and resolves to the expected link.

use clap::Parser;
use rstest::rstest;
use url::Url;

use pocket::cli::args::{Cli, Commands};
use pocket::config::Settings;
use pocket::{dev, productivity};

/// Parse argv and run the group resolution, as execute_command would.
fn resolve(argv: &[&str], settings: &Settings) -> Url {
    let cli = Cli::try_parse_from(argv).expect("argv parses");
    match cli.command.expect("subcommand given") {
        Commands::Dev { command } => dev::resolve(&command, settings).expect("resolves"),
        Commands::Productivity { command } => {
            productivity::resolve(&command, settings).expect("resolves")
        }
        other => panic!("not a group command: {other:?}"),
    }
}

#[rstest]
#[case(
    &["pocket", "dev", "github", "repo", "rust-lang/rust"],
    "https://github.com/rust-lang/rust"
)]
#[case(
    &["pocket", "dev", "gitlab", "mr", "gitlab-org/gitlab", "123"],
    "https://gitlab.com/gitlab-org/gitlab/-/merge_requests/123"
)]
#[case(
    &["pocket", "dev", "npm", "package", "@types/node"],
    "https://www.npmjs.com/package/@types/node"
)]
#[case(
    &["pocket", "dev", "pypi", "project", "requests"],
    "https://pypi.org/project/requests"
)]
#[case(
    &["pocket", "dev", "cloudflare", "dns", "example.com"],
    "https://dash.cloudflare.com/?to=/:account/example.com/dns"
)]
#[case(
    &["pocket", "dev", "dockerhub", "image", "redis"],
    "https://hub.docker.com/_/redis"
)]
#[case(
    &["pocket", "productivity", "calendar", "day", "2025-03-07"],
    "https://calendar.google.com/calendar/r/day/2025/3/7"
)]
#[case(
    &["pocket", "productivity", "notion", "new"],
    "https://notion.new/"
)]
#[case(
    &["pocket", "productivity", "todoist", "upcoming"],
    "https://app.todoist.com/app/upcoming"
)]
#[case(
    &["pocket", "productivity", "trello", "board", "aBcD1234"],
    "https://trello.com/b/aBcD1234"
)]
fn given_invocation_when_resolving_then_canonical_link(
    #[case] argv: &[&str],
    #[case] expected: &str,
) {
    let url = resolve(argv, &Settings::default());
    assert_eq!(url.as_str(), expected);
}

#[test]
fn given_configured_workspaces_when_resolving_then_settings_flow_through() {
    let mut settings = Settings::default();
    settings.jira.site = Some("acme".into());
    settings.linear.workspace = Some("acme".into());
    settings.vercel.scope = Some("acme".into());

    assert_eq!(
        resolve(&["pocket", "dev", "jira", "issue", "PROJ-1"], &settings).as_str(),
        "https://acme.atlassian.net/browse/PROJ-1"
    );
    assert_eq!(
        resolve(&["pocket", "dev", "linear", "issue", "ENG-42"], &settings).as_str(),
        "https://linear.app/acme/issue/ENG-42"
    );
    assert_eq!(
        resolve(&["pocket", "dev", "vercel", "project", "site"], &settings).as_str(),
        "https://vercel.com/acme/site"
    );
}

#[test]
fn given_missing_setting_when_resolving_then_error_names_the_key() {
    let cli = Cli::try_parse_from(["pocket", "dev", "jira", "issue", "PROJ-1"]).unwrap();
    let Some(Commands::Dev { command }) = cli.command else {
        panic!("expected dev command");
    };

    let err = dev::resolve(&command, &Settings::default()).unwrap_err();

    assert!(err.to_string().contains("jira.site"));
}
