//! CLI for listing CloudPools-tiered files.

mod host;
mod prompt;
mod resolve;

use anyhow::Result;
use clap::Parser;
use cpls_core::config::CplsConfig;
use cpls_core::{config, report};
use std::io;
use std::path::PathBuf;

use prompt::TerminalPrompt;
use resolve::resolve;

/// Query the Platform API for files moved to the cloud by CloudPools jobs.
#[derive(Debug, Parser)]
#[command(name = "cpls", version)]
#[command(override_usage = "cpls --user USER [OPTIONS]")]
#[command(
    about = "List files that CloudPools jobs have tiered to the cloud",
    long_about = None
)]
pub struct Cli {
    /// User name for the Platform API; prompted for if omitted.
    #[arg(short = 'u', long, value_name = "USER")]
    pub user: Option<String>,

    /// Password for the user; prompted for (without echo) if omitted.
    #[arg(short = 'p', long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Cluster IP or name; defaults to the local node's address.
    #[arg(short = 'i', long = "ip", value_name = "IP")]
    pub ip: Option<String>,

    /// Platform API TCP port [default: 8080].
    #[arg(short = 'P', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Print a CSV table instead of a list of file names.
    #[arg(long)]
    pub csv: bool,

    /// Omit the header row in CSV output.
    #[arg(long)]
    pub no_header: bool,

    /// Print the sum of the file totals reported for each job; overrides --csv.
    #[arg(long)]
    pub show_count: bool,

    /// Read settings from this file instead of ~/.config/cpls/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use plain HTTP instead of HTTPS.
    #[arg(long)]
    pub http: bool,

    /// Verify the server's TLS certificate.
    #[arg(long)]
    pub verify_tls: bool,

    /// CA bundle used to verify the server certificate.
    #[arg(long, value_name = "PATH")]
    pub ca_cert: Option<PathBuf>,

    /// Stop at the first job without files instead of skipping it.
    #[arg(long)]
    pub stop_at_empty_job: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config_or_default(config::load_or_init()),
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let run = resolve(&cli, &cfg, &mut TerminalPrompt, host::detect_host)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        report::run(&run, &mut out)?;
        Ok(())
    }
}

/// The default config file is optional: if it cannot be read or created the
/// run continues with built-in defaults.
fn config_or_default(loaded: Result<CplsConfig>) -> CplsConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        CplsConfig::default()
    })
}

#[cfg(test)]
mod tests;
