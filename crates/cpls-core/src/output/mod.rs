//! Renders a job collection as a file list, a CSV table, or a single count line.

mod count;
mod csv;
mod list;

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::model::{Job, JobCollection};

pub use self::csv::CSV_HEADER;

/// Printed instead of file names or rows when there is nothing to list.
pub const NO_FILES_NOTICE: &str = "No CloudPools Jobs Files Found";

/// Exactly one of these runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One file name per line.
    #[default]
    List,
    /// Comma-joined rows, optionally preceded by the header row.
    Csv { header: bool },
    /// Sum of the server-reported `files.total` of every job.
    Count,
}

impl OutputMode {
    /// Count wins over CSV, CSV wins over list.
    pub fn select(show_count: bool, csv: bool, no_header: bool) -> Self {
        if show_count {
            OutputMode::Count
        } else if csv {
            OutputMode::Csv { header: !no_header }
        } else {
            OutputMode::List
        }
    }
}

/// When the "no files found" notice replaces the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyFilesPolicy {
    /// Only when no job has any file. Empty jobs are otherwise skipped.
    #[default]
    Aggregate,
    /// At the first job without files; output stops there. The notice is
    /// followed by a blank line.
    FirstEmptyJob,
}

/// What `render` wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// This many file lines or rows.
    Files(usize),
    /// The count line with this sum.
    Count(u64),
    /// The notice, after `written` lines or rows.
    NoFiles { written: usize },
}

/// Writes `jobs` to `out` in the given mode.
pub fn render<W: Write>(
    jobs: &JobCollection,
    mode: OutputMode,
    policy: EmptyFilesPolicy,
    out: &mut W,
) -> io::Result<RenderOutcome> {
    tracing::debug!(?mode, ?policy, jobs = jobs.len(), "rendering");
    let outcome = match mode {
        OutputMode::Count => count::write_count(jobs, out)?,
        OutputMode::List => write_files(jobs, policy, None, out, list::write_job)?,
        OutputMode::Csv { header } => {
            let header = header.then_some(CSV_HEADER);
            write_files(jobs, policy, header, out, csv::write_job)?
        }
    };
    out.flush()?;
    Ok(outcome)
}

/// Walks jobs in order, applying the empty-files policy around `write_job`.
fn write_files<W, F>(
    jobs: &JobCollection,
    policy: EmptyFilesPolicy,
    header: Option<&str>,
    out: &mut W,
    mut write_job: F,
) -> io::Result<RenderOutcome>
where
    W: Write,
    F: FnMut(&Job, &mut W) -> io::Result<()>,
{
    match policy {
        EmptyFilesPolicy::Aggregate => {
            if let Some(h) = header {
                writeln!(out, "{}", h)?;
            }
            let total = jobs.enumerated_files();
            if total == 0 {
                writeln!(out, "{}", NO_FILES_NOTICE)?;
                return Ok(RenderOutcome::NoFiles { written: 0 });
            }
            for job in jobs.jobs() {
                write_job(job, out)?;
            }
            Ok(RenderOutcome::Files(total))
        }
        EmptyFilesPolicy::FirstEmptyJob => {
            if let Some(h) = header {
                writeln!(out, "{}", h)?;
            }
            let mut written = 0;
            for job in jobs.jobs() {
                if job.files.is_empty() {
                    tracing::debug!(job_id = job.id(), "job has no files; stopping");
                    writeln!(out, "{}\n", NO_FILES_NOTICE)?;
                    return Ok(RenderOutcome::NoFiles { written });
                }
                write_job(job, out)?;
                written += job.files.len();
            }
            Ok(RenderOutcome::Files(written))
        }
    }
}
