//! Command implementations for the CLI interface.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::error::StoreError;
use crate::store::TaskStore;
use crate::task::Task;
use crate::tui::{enums::FormState, focus::WrapPolicy, run::run_form_tui, task_form::TaskForm};

#[derive(Subcommand)]
pub enum Commands {
    /// Open the form and append the captured task (default).
    New,

    /// Print the stored tasks.
    List,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the interactive form and persist the result if it was submitted.
pub fn cmd_new(store: &TaskStore, policy: WrapPolicy) -> anyhow::Result<()> {
    let form = run_form_tui(policy).context("could not run the task form")?;
    let state = persist_outcome(form, store, Utc::now())
        .with_context(|| format!("could not save task to {}", store.path().display()))?;
    if state == FormState::Committed {
        println!("Task saved to {}", store.path().display());
    }
    Ok(())
}

/// Append the form's task when it was committed. Abandoned forms never
/// touch the store.
pub fn persist_outcome(
    form: TaskForm,
    store: &TaskStore,
    now: DateTime<Utc>,
) -> Result<FormState, StoreError> {
    let state = form.state();
    match form.into_task(now) {
        Some(task) => store.append(task)?,
        None => info!(?state, "nothing to save"),
    }
    Ok(state)
}

/// Print every stored task.
pub fn cmd_list(store: &TaskStore) -> Result<(), StoreError> {
    let tasks = store.load()?;
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    for line in format_table(&tasks) {
        println!("{line}");
    }
    Ok(())
}

pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

/// Render tasks as table rows, header first.
pub fn format_table(tasks: &[Task]) -> Vec<String> {
    let mut out = vec![format!(
        "{:<4} {:<12} {:<10} {:<24} {}",
        "#", "Status", "Urgency", "Assigned By", "Title"
    )];
    for (i, t) in tasks.iter().enumerate() {
        out.push(format!(
            "{:<4} {:<12} {:<10} {:<24} {}",
            i + 1,
            truncate(or_dash(&t.status), 12),
            truncate(or_dash(&t.urgency), 10),
            truncate(or_dash(&t.assigned_by), 24),
            t.title
        ));
    }
    out
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
