use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use ugit::areas::repository::Repository;
use ugit::artifacts::core::config::RepositoryConfig;
use ugit::artifacts::core::pager::LogOutput;
use ugit::commands::porcelain::log::LogOptions;
use ugit::errors::{ENGINE_FAILURE_EXIT_CODE, UgitError};

/// Exit status for usage errors
const USAGE_EXIT_CODE: u8 = 1;

/// Variable holding the tracing filter directive
const LOG_FILTER_VAR: &str = "UGIT_LOG";

#[derive(Parser)]
#[command(
    name = "ugit",
    version = "0.1.0",
    about = "A minimal local version-control core",
    long_about = "ugit stages files into a staging area, snapshots them into \
    timestamp-identified commits, keeps a linear history log \
    and restores any commit into the working directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .ugit directory in the current directory or at the specified path. \
        It fails if a repository already exists there."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command copies the file into the staging area and appends its path to the index."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        path: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Snapshot the staged files",
        long_about = "This command copies every file listed in the index from the staging area \
        into a new commit and records it in the history log."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command prints the history log, oldest commit first."
    )]
    Log {
        #[arg(long, help = "Show each commit as '<id> <message>'")]
        oneline: bool,
    },
    #[command(
        name = "checkout",
        about = "Restore the files of a commit",
        long_about = "This command copies every file listed in the current index from the given commit \
        into the working directory, overwriting local changes."
    )]
    Checkout {
        #[arg(index = 1, help = "The id of the commit to restore")]
        commit_id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            let code = e
                .downcast_ref::<UgitError>()
                .map(UgitError::exit_code)
                .unwrap_or(ENGINE_FAILURE_EXIT_CODE);
            ExitCode::from(code)
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = RepositoryConfig::load_from_env()?;
    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => {
                    std::fs::create_dir_all(path)?;
                    path.clone()
                }
                None => pwd,
            };
            let repository = open(&path, config)?;

            repository.init().await?
        }
        Commands::Add { path } => {
            let repository = open(&pwd, config)?;

            repository.add(path).await?
        }
        Commands::Commit { message } => {
            let repository = open(&pwd, config)?;

            repository.commit(message).await?;
        }
        Commands::Log { oneline } => {
            let output = LogOutput::select(config.use_pager);
            let opts = LogOptions {
                oneline: *oneline,
                color: output.is_terminal(),
            };
            let repository = Repository::with_config(&pwd, output.writer(), config)?;

            repository.log(&opts)?;
            drop(repository);
            output.finish()?
        }
        Commands::Checkout { commit_id } => {
            let repository = open(&pwd, config)?;

            repository.checkout(commit_id).await?;
        }
    }

    Ok(())
}

fn open(path: &Path, config: RepositoryConfig) -> Result<Repository> {
    Ok(Repository::with_config(
        path,
        Box::new(std::io::stdout()),
        config,
    )?)
}
