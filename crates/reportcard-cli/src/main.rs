//! The `reportcard` command-line interface.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use reportcard_store::{load_config_from, ReportStore};

mod commands;
mod prompt;

use prompt::Prompter;

#[derive(Parser)]
#[command(name = "reportcard", version, about = "Student report card generator")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report card store (JSON), overrides the config file
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Without a subcommand, an interactive menu is shown
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new student report card interactively
    Create,

    /// Show a saved report card
    View {
        /// Student name (asks from a list if omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a saved report card
    Delete {
        /// Student name (asks from a list if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List saved report cards
    List,

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reportcard=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Init) = cli.command {
        return commands::init::execute();
    }

    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(store_path) = cli.store {
        config.store_path = store_path;
    }
    tracing::debug!("using store {}", config.store_path.display());
    let mut store = ReportStore::load(&config.store_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match cli.command {
        None => commands::menu::execute(&mut prompter, &mut store, &config),
        Some(Commands::Create) => commands::create::execute(&mut prompter, &mut store, &config),
        Some(Commands::View { name }) => commands::view::execute(&mut prompter, &store, name),
        Some(Commands::Delete { name, yes }) => {
            commands::delete::execute(&mut prompter, &mut store, name, yes)
        }
        Some(Commands::List) => commands::list::execute(&store),
        Some(Commands::Init) => commands::init::execute(),
    }
}
