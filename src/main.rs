//! # taskform - interactive task capture
//!
//! A small terminal form that collects the fields of a task and appends the
//! result to a local JSON task list.
//!
//! ## Usage
//!
//! ```bash
//! # Open the form (same as `taskform new`)
//! taskform
//!
//! # Store somewhere other than ./db/tasks.json
//! taskform --db ~/notes/tasks.json
//!
//! # Show what has been captured so far
//! taskform list
//! ```
//!
//! ## Keys
//!
//! - `tab`, `down`, `right`, `enter`: next field
//! - `shift+tab`, `up`, `left`: previous field
//! - `enter` on `[ Submit ]`: save and exit; on `[ Cancel ]`: exit without saving
//! - `esc`, `ctrl+c`: exit without saving
//! - `ctrl+r`: cycle the caret between blink, static and hidden
//!
//! The task list is a single JSON array. Each save locks a file next to
//! it, writes the new array to a temp file and renames it into place.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod logging;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod cursor;
    pub mod enums;
    pub mod focus;
    pub mod input;
    pub mod run;
    pub mod task_form;
}

use cli::Cli;
use cmd::*;
use store::{TaskStore, DEFAULT_DB_PATH};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = TaskStore::new(cli.db.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)));

    match cli.command.unwrap_or(Commands::New) {
        Commands::New => cmd_new(&store, cli.wrap)?,
        Commands::List => cmd_list(&store)?,
        Commands::Completions { shell } => cmd_completions(shell),
    }
    Ok(())
}
