use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::error::Result;

/// Maps the numeric `--log-level` (0=info, 1=debug, 2=trace) to a filter directive.
pub fn level_directive(log_level: u8) -> &'static str {
    match log_level {
        0 => "fullname_csv=info,parse_full_name_csv=info",
        1 => "fullname_csv=debug,parse_full_name_csv=debug,info",
        _ => "fullname_csv=trace,parse_full_name_csv=trace,info",
    }
}

/// Installs the process-wide subscriber. `RUST_LOG` wins over `log_level`.
/// When `log_file` is given, events are also appended there without ANSI colours.
pub fn init_cli_logger(log_level: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(log_level)));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(file_layer)
        .init();

    Ok(())
}
