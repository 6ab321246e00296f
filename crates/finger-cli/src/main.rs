use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use finger_cli::commands::{Report, list, user};
use finger_cli::{Cli, Config};
use finger_core::ReportContext;
use finger_host::SystemHost;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so report output stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(usage) => {
            println!("{usage}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let host = SystemHost::new(&config.utmp_path, &config.passwd_path);
    // Sampled once so every record in the run agrees on the current time
    let ctx = ReportContext::new(Utc::now(), Local, &config.device_dir);
    let report = Report::new(&host, ctx, &config.mail_dir);

    let mut out = io::stdout().lock();
    if cli.users.is_empty() {
        list::run(&mut out, &report, mode, cli.json)?;
    } else {
        user::run(&mut out, &report, mode, &cli.users, cli.json)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
