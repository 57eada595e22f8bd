//! Factory robot hazard analyzer CLI.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use hazard_infra::config::{SessionConfig, render_model_table};
use hazard_infra::console::ConsoleInput;
use hazard_infra::session::{exit_code, run_session};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let config = SessionConfig::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("hazard-analyzer: logging disabled: {e}");
    }

    if config.show_model {
        print!("{}", render_model_table());
        return ExitCode::SUCCESS;
    }

    let mut console = ConsoleInput::new(io::stdin().lock(), io::stdout().lock());
    let result = run_session(&config, &mut console);
    if let Err(err) = &result {
        tracing::error!(%err, "session aborted");
        eprintln!("hazard-analyzer: {err}");
    }
    ExitCode::from(exit_code(&result))
}
