//! Command-line surface
//!
//! Parses arguments with clap, loads configuration and hands off to the
//! workflows. Library errors are wrapped with `anyhow` context here and
//! nowhere else.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::config;
use crate::domain::BumpKind;
use crate::process::SystemRunner;
use crate::ui;
use crate::workflow::{PrWorkflow, ReleaseWorkflow};

#[derive(Debug, Parser)]
#[command(
    name = "release-tool",
    version,
    about = "Bump a package, cut a release branch and open release pull requests",
    after_help = "Assumes exclusive use of the working tree; do not run two instances in one checkout."
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = ".",
        help = "Repository root to operate on"
    )]
    pub directory: PathBuf,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "More log output (-v, -vv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Commands {
    /// Bump a package and create a release branch.
    ///
    /// Failures after the version bump leave the working tree modified; there is
    /// no rollback.
    #[command(visible_alias = "release")]
    Bump {
        #[arg(value_enum, help = "Desired version bump")]
        kind: BumpKind,
    },

    /// Open pull-requests for a release branch.
    Pr {
        #[arg(help = "GitHub users to review the pull-requests")]
        reviewers: Vec<String>,
    },
}

/// Log level for a `-v` count, unless `RUST_LOG` says otherwise
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .format_timestamp(None)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let root = cli.directory;

    config::load_env_file(&root);
    let config = config::load_config(cli.config.as_deref(), &root)
        .context("loading configuration")?
        .with_env(|key| std::env::var(key).ok());
    log::debug!("configuration: {:?}", config);

    let runner = SystemRunner::new(root.clone());

    match cli.command {
        Commands::Bump { kind } => {
            let outcome = ReleaseWorkflow::new(&runner, &config.repository, root)
                .run(kind)
                .context("release workflow failed")?;
            ui::display_release_summary(&outcome);
        }
        Commands::Pr { reviewers } => {
            let opened = PrWorkflow::new(
                &runner,
                &config.repository,
                &root,
                config.pull_request.default_reviewers.clone(),
            )
            .run(&reviewers)
            .context("pull request workflow failed")?;
            ui::display_pull_requests(&opened);
        }
    }

    Ok(())
}
