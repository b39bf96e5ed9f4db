//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "linthound")]
#[command(about = "Post static-analysis findings to GitHub pull request diffs without duplicates")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Post findings (JSON Lines) as review comments
    Post {
        /// Pull request URL
        url: String,
        /// Head commit SHA the findings were produced for
        #[arg(long)]
        sha: String,
        /// JSON Lines file with findings (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Maximum number of concurrent create-comment requests
        #[arg(long)]
        max_concurrency: Option<usize>,
        /// Print rendered comments, do not post
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the rename-aware diff between the PR base and the given head
    Diff {
        /// Pull request URL
        url: String,
        /// Head commit SHA
        #[arg(long)]
        sha: String,
    },
    /// Show effective merged config
    Config,
}

#[derive(Debug)]
pub struct PostArgs {
    pub url: String,
    pub sha: String,
    pub input: Option<PathBuf>,
    pub max_concurrency: Option<usize>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum CliAction {
    Post(PostArgs),
    Diff { url: String, sha: String },
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Commands::Post {
                url,
                sha,
                input,
                max_concurrency,
                dry_run,
            } => CliAction::Post(PostArgs {
                url,
                sha,
                input,
                max_concurrency,
                dry_run,
            }),
            Commands::Diff { url, sha } => CliAction::Diff { url, sha },
            Commands::Config => CliAction::InspectConfig,
        }
    }
}
