//! List mode: one file name per line.

use std::io::{self, Write};

use crate::model::Job;

pub(super) fn write_job<W: Write>(job: &Job, out: &mut W) -> io::Result<()> {
    for file in &job.files {
        writeln!(out, "{}", file.name)?;
    }
    Ok(())
}
