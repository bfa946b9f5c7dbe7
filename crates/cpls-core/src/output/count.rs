use std::io::{self, Write};

use super::RenderOutcome;
use crate::model::JobCollection;

/// Independent of how many file names were fetched.
pub(super) fn write_count<W: Write>(jobs: &JobCollection, out: &mut W) -> io::Result<RenderOutcome> {
    let total = jobs.reported_total();
    writeln!(out, "Total number of CloudPools files: {}", total)?;
    Ok(RenderOutcome::Count(total))
}
