use std::io;
use std::path::Path;
use std::process;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};
use url::Url;

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::{dev, productivity};

#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const DEFAULT_OPENER: &str = "xdg-open";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        // No subcommand: behave like `pocket --help`
        Cli::command()
            .print_long_help()
            .map_err(|e| CliError::io("print help", e))?;
        return Ok(());
    };

    match command {
        Commands::Dev { command } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let url = dev::resolve(command, &settings)?;
            deliver(&url, cli.open, &settings)
        }
        Commands::Productivity { command } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let url = productivity::resolve(command, &settings)?;
            deliver(&url, cli.open, &settings)
        }
        Commands::Config { command } => execute_config(command, cli.config.as_deref()),
        Commands::Completion { shell } => {
            print_completions(*shell);
            Ok(())
        }
    }
}

/// Print the resolved link, or hand it to the browser under `--open`.
#[instrument(skip(settings))]
fn deliver(url: &Url, open: bool, settings: &Settings) -> CliResult<()> {
    if open {
        open_in_browser(url, settings.browser.as_deref())
    } else {
        output::info(url);
        Ok(())
    }
}

fn open_in_browser(url: &Url, browser: Option<&str>) -> CliResult<()> {
    let opener = browser.unwrap_or(DEFAULT_OPENER);
    debug!("opening {} with {}", url, opener);

    let status = process::Command::new(opener)
        .arg(url.as_str())
        .status()
        .map_err(|source| CliError::io(format!("launch '{}'", opener), source))?;

    if !status.success() {
        return Err(CliError::Browser {
            message: format!("'{}' exited with {}", opener, status),
        });
    }
    Ok(())
}

#[instrument]
fn execute_config(command: &ConfigCommands, explicit: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(explicit)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = match explicit {
                Some(path) => path.to_path_buf(),
                None => global_config_path().ok_or_else(|| {
                    CliError::io(
                        "locate config dir",
                        io::Error::new(io::ErrorKind::NotFound, "no home directory"),
                    )
                })?,
            };
            if path.exists() && !force {
                output::warning(&format!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                ));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CliError::io(format!("create {}", parent.display()), e))?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| CliError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            match explicit {
                Some(path) => output::info(&path.display()),
                None => match global_config_path() {
                    Some(path) => {
                        output::info(&path.display());
                        if !path.exists() {
                            output::detail("(not created yet, run: pocket config init)");
                        }
                    }
                    None => output::warning("no config directory available"),
                },
            }
            Ok(())
        }
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
