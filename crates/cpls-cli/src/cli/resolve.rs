//! Merge flags, config file and prompts into the immutable `RunConfig`.

use anyhow::{Context, Result};
use cpls_core::config::{ConnectionTarget, CplsConfig, RunConfig, Scheme};
use cpls_core::credentials::Credentials;
use cpls_core::error::ConfigError;
use cpls_core::output::{EmptyFilesPolicy, OutputMode};

use super::prompt::Prompt;
use super::Cli;

/// Flags override the config file. Missing user/password are prompted for;
/// a missing host comes from `detect_host`. Fails before any network activity
/// if the user or password ends up empty.
pub fn resolve<P, D>(cli: &Cli, cfg: &CplsConfig, prompt: &mut P, detect_host: D) -> Result<RunConfig>
where
    P: Prompt,
    D: FnOnce() -> String,
{
    let user = match cli.user.clone().or_else(|| cfg.user.clone()) {
        Some(u) => u,
        None => prompt.user().context("reading user name")?,
    };
    if user.is_empty() {
        return Err(ConfigError::MissingUser.into());
    }

    let password = match &cli.password {
        Some(p) => p.clone(),
        None => prompt.password(&user).context("reading password")?,
    };
    let credentials = Credentials::new(user, password)?;

    let host = cli
        .ip
        .clone()
        .or_else(|| cfg.host.clone())
        .unwrap_or_else(detect_host);
    let scheme = if cli.http { Scheme::Http } else { cfg.scheme };
    let port = cli.port.unwrap_or(cfg.port);
    let target = ConnectionTarget::new(scheme, host, port);

    let mut http = cfg.http_options();
    http.verify_tls |= cli.verify_tls;
    if cli.ca_cert.is_some() {
        http.ca_cert = cli.ca_cert.clone();
    }

    let empty_files = if cli.stop_at_empty_job {
        EmptyFilesPolicy::FirstEmptyJob
    } else {
        cfg.empty_files
    };

    Ok(RunConfig {
        target,
        credentials,
        http,
        mode: OutputMode::select(cli.show_count, cli.csv, cli.no_header),
        empty_files,
    })
}
