//! `linthound` 바이너리 진입점.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};

use linthound::application::usecases::post_findings::PostOptions;
use linthound::interface::cli::command::PostArgs;
use linthound::interface::cli::input::read_comments;
use linthound::interface::cli::{Cli, CliAction};
use linthound::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    if let Err(err) = run(&composition, action).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(composition: &AppComposition, action: CliAction) -> Result<()> {
    match action {
        CliAction::InspectConfig => {
            let json = composition.inspect_config_usecase().execute()?;
            println!("{json}");
        }
        CliAction::Diff { url, sha } => {
            let output = composition.show_diff_usecase().execute(&url, &sha).await?;
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&output.diff)
                .and_then(|_| stdout.flush())
                .context("failed to write diff to stdout")?;
        }
        CliAction::Post(args) => {
            let comments = load_comments(&args)?;
            let options = PostOptions {
                url: args.url,
                head_sha: args.sha,
                max_concurrency: args.max_concurrency,
                dry_run: args.dry_run,
            };
            composition
                .post_findings_usecase()
                .execute(options, comments)
                .await?;
        }
    }
    Ok(())
}

fn load_comments(args: &PostArgs) -> Result<Vec<linthound::Comment>> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open findings file {}", path.display()))?;
            read_comments(BufReader::new(file))
        }
        None => read_comments(io::stdin().lock()),
    }
}
