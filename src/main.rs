use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use svcs::areas::repository::Repository;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "svcs",
    about = "A minimal local version control system",
    long_about = "Tracks a set of files in the working directory, records snapshots of their \
    contents under a commit message and restores earlier snapshots on demand. \
    All state is kept in the vcs directory of the working root.",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(short = 'h', long, action = ArgAction::SetTrue, help = "Print the command list")]
    help: bool,
    #[arg(
        long,
        global = true,
        hide = true,
        env = "SVCS_WORK_TREE",
        help = "Working root to operate on instead of the current directory"
    )]
    work_tree: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "config",
        about = "Get and set a username.",
        long_about = "Without an argument this command prints the configured author name. \
        With a name it stores that name as the author of future commits."
    )]
    Config {
        #[arg(index = 1, help = "The author name to store")]
        name: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add a file to the index.",
        long_about = "This command starts tracking the given file. \
        Without an argument it lists the tracked files."
    )]
    Add {
        #[arg(index = 1, help = "The path of the file to track")]
        path: Option<String>,
    },
    #[command(name = "log", about = "Show commit logs.")]
    Log,
    #[command(
        name = "commit",
        about = "Save changes.",
        long_about = "This command snapshots every tracked file when at least one of them \
        changed since the latest commit."
    )]
    Commit {
        #[arg(index = 1, allow_hyphen_values = true, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Restore a file.",
        long_about = "This command overwrites the working files with their contents \
        in the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "The id of the commit to restore")]
        commit_id: Option<String>,
    },
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let work_tree = match cli.work_tree {
        Some(work_tree) => work_tree,
        None => std::env::current_dir()?,
    };
    let mut repository =
        Repository::new(&work_tree.to_string_lossy(), Box::new(std::io::stdout()))?;

    if cli.help {
        return repository.help();
    }

    match &cli.command {
        None => repository.help()?,
        Some(Commands::Config { name }) => repository.config(name.as_deref())?,
        Some(Commands::Add { path }) => repository.add(path.as_deref()).await?,
        Some(Commands::Log) => repository.log()?,
        Some(Commands::Commit { message }) => repository.commit(message.as_deref()).await?,
        Some(Commands::Checkout { commit_id }) => {
            repository.checkout(commit_id.as_deref()).await?
        }
        Some(Commands::External(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            repository.unknown_command(name)?
        }
    }

    Ok(())
}
