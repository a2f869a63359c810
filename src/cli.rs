use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::tui::focus::WrapPolicy;

/// Capture a task in an interactive form and append it to a JSON task list.
/// Storage defaults to ./db/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "taskform", version, about = "Interactive task capture form")]
pub struct Cli {
    /// Path to the JSON task list.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Where backward navigation lands when leaving the first field.
    #[arg(long, value_enum, default_value_t = WrapPolicy::Legacy, global = true)]
    pub wrap: WrapPolicy,

    /// Append log output to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
