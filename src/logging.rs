//! Logging setup.
//!
//! Output goes to stderr unless a log file is given. While the form is on
//! screen stderr shares the terminal, so the default level stays at `warn`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool, log_file: Option<&Path>) -> io::Result<()> {
    let default = if verbose { "taskform=debug" } else { "taskform=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi))
        .init();
    Ok(())
}
