//! CSV mode. Values are written verbatim, without quoting.

use std::io::{self, Write};

use crate::model::{render_value, Job};

/// file_name, job_engine_job_id, cloudpools_job_id, completion_time, create_time, state_change_time
pub const CSV_HEADER: &str =
    "file_name,job_engine_job_id,cloudpools_job_id,completion_time,create_time,state_change_time";

/// One row per file; the job columns repeat on every row.
pub(super) fn write_job<W: Write>(job: &Job, out: &mut W) -> io::Result<()> {
    let j = &job.job;
    let engine_id = render_value(&j.job_engine_job.id);
    let completion = render_value(&j.completion_time);
    let created = render_value(&j.create_time);
    let changed = render_value(&j.state_change_time);
    for file in &job.files {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            file.name, engine_id, j.id, completion, created, changed
        )?;
    }
    Ok(())
}
