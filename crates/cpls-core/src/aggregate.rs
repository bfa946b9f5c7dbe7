//! Builds the job collection: list jobs, drop system jobs, fetch each job's files.

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::model::{CloudJob, Job, JobCollection};

/// Job ids up to and including this one belong to system-internal jobs.
pub const SYSTEM_JOB_MAX_ID: u64 = 4;

pub fn is_user_job(id: u64) -> bool {
    id > SYSTEM_JOB_MAX_ID
}

/// Keeps non-system jobs, preserving response order.
pub fn retain_user_jobs(jobs: Vec<CloudJob>) -> Vec<CloudJob> {
    jobs.into_iter().filter(|j| is_user_job(j.id)).collect()
}

/// Fetches the job list and then the files of every retained job, in order.
///
/// The first failing request aborts the whole build; no partial collection is
/// returned.
pub fn build_job_collection<T: Transport>(client: &ApiClient<T>) -> Result<JobCollection, ApiError> {
    let listed = client.fetch_jobs()?;
    let listed_count = listed.len();
    let retained = retain_user_jobs(listed);
    tracing::info!(
        listed = listed_count,
        retained = retained.len(),
        "fetched CloudPools job list"
    );

    let mut jobs = Vec::with_capacity(retained.len());
    for job in retained {
        let files = client.fetch_job_files(job.id)?;
        tracing::debug!(
            job_id = job.id,
            state = job.state.as_deref().unwrap_or("-"),
            files = files.files.len(),
            reported_total = ?files.total,
            "fetched jobs-files"
        );
        jobs.push(Job::new(job, files));
    }

    Ok(JobCollection::new(jobs))
}
