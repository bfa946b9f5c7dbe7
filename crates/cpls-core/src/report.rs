//! One full run: connect, build the job collection, render it.

use std::io::Write;

use crate::aggregate::build_job_collection;
use crate::api::ApiClient;
use crate::config::RunConfig;
use crate::error::ReportError;
use crate::output::{render, RenderOutcome};

/// Nothing is written to `out` unless every API request succeeded.
pub fn run<W: Write>(cfg: &RunConfig, out: &mut W) -> Result<RenderOutcome, ReportError> {
    let client = ApiClient::connect(&cfg.target, &cfg.credentials, &cfg.http).map_err(|source| {
        ReportError::InvalidTarget {
            target: cfg.target.to_string(),
            source,
        }
    })?;
    tracing::info!(
        api = client.base_url(),
        user = cfg.credentials.user(),
        mode = ?cfg.mode,
        "querying Platform API"
    );

    let jobs = build_job_collection(&client)?;
    let outcome = render(&jobs, cfg.mode, cfg.empty_files, out)?;
    tracing::info!(?outcome, "report written");
    Ok(outcome)
}
