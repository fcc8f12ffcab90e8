use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use ticklist_core::{ListFilter, TaskId, TaskStore};

mod actions;
mod config;
mod menu;
mod state;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TICKLIST_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "ticklist", version = VERSION, about = "Personal task tracker")]
struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default when no command is given)
    Menu,

    /// Add a task
    Add {
        description: String,

        /// Category (default: General)
        #[arg(long, short, default_value = "")]
        category: String,

        /// Due date, YYYY-MM-DD, not in the past
        #[arg(long, short)]
        due: Option<String>,
    },

    /// Mark a task completed
    Done { id: TaskId },

    /// Delete a task
    Delete { id: TaskId },

    /// List tasks with overdue status
    List {
        /// Only tasks that are not completed
        #[arg(long, default_value_t = false)]
        incomplete: bool,
    },

    /// Config file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.ticklist/config.toml
    Init,

    /// Print the effective settings
    Show,
}

fn init_tracing() {
    if std::env::var("TICKLIST_DEBUG").is_err() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ticklist=debug,ticklist_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Open the configured store, report a bad tasks file, then run `f` against stdout.
fn with_store<F>(file: Option<PathBuf>, f: F) -> Result<()>
where
    F: FnOnce(&mut TaskStore, &mut io::StdoutLock<'static>) -> io::Result<()>,
{
    let cfg = config::load_config()?;
    let clock = cfg.system_clock().context("config [clock].timezone")?;
    let path = cfg.tasks_path(file)?;
    tracing::debug!(path = %path.display(), "using tasks file");

    let mut out = io::stdout().lock();

    let (mut store, load_err) = TaskStore::open(path, clock);
    if let Some(e) = &load_err {
        actions::report_load_error(&mut out, e)?;
    }

    f(&mut store, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let file = cli.file;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => with_store(file, |store, out| {
            menu::run_menu(store, &mut io::stdin().lock(), out)
        }),
        Command::Add {
            description,
            category,
            due,
        } => with_store(file, |store, out| {
            actions::add(
                store,
                out,
                &description,
                &category,
                due.as_deref().unwrap_or(""),
            )
        }),
        Command::Done { id } => with_store(file, |store, out| actions::complete(store, out, id)),
        Command::Delete { id } => with_store(file, |store, out| actions::delete(store, out, id)),
        Command::List { incomplete } => with_store(file, |store, out| {
            actions::list(store, out, ListFilter::from_incomplete_only(incomplete))
        }),
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => config::show_config(file),
        },
    }
}
