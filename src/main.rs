use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use xdg_history_shell::{repl, Session, SessionConfig};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_env().context("locating the history file")?;
    let mut session = Session::install(config).context("starting the interactive session")?;

    let code = repl::run(&mut session).context("reading input")?;
    session.close().context("saving history")?;

    Ok(ExitCode::from((code & 0xff) as u8))
}
