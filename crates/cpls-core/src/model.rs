//! Platform API payloads for CloudPools jobs and the enriched job collection.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;

/// Body of `GET /platform/3/cloud/jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<CloudJob>,
}

/// One CloudPools job as listed by the API. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CloudJob {
    pub id: u64,
    /// The job-engine job that ran this CloudPools job.
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_engine_job: JobEngineRef,
    #[serde(default)]
    pub completion_time: Value,
    #[serde(default)]
    pub create_time: Value,
    #[serde(default)]
    pub state_change_time: Value,
    /// Server-side file summary; `total` feeds count mode.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: FileSummary,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobEngineRef {
    #[serde(default)]
    pub id: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// Body of `GET /platform/3/cloud/jobs-files/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobFiles {
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<TieredFile>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Explicit JSON `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A file moved to a cloud tier by a job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TieredFile {
    pub name: String,
}

/// A listed job together with the files fetched for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub job: CloudJob,
    pub files: Vec<TieredFile>,
}

impl Job {
    pub fn new(job: CloudJob, files: JobFiles) -> Self {
        Self {
            job,
            files: files.files,
        }
    }

    pub fn id(&self) -> u64 {
        self.job.id
    }
}

/// Retained jobs in API response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCollection {
    jobs: Vec<Job>,
}

impl JobCollection {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of file names actually fetched across all jobs.
    pub fn enumerated_files(&self) -> usize {
        self.jobs.iter().map(|j| j.files.len()).sum()
    }

    /// Sum of the server-reported `files.total` of every job.
    pub fn reported_total(&self) -> u64 {
        self.jobs.iter().map(|j| j.job.files.total).sum()
    }
}

impl FromIterator<Job> for JobCollection {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Text form of a raw API value: strings unquoted, everything else as JSON.
pub fn render_value(v: &Value) -> Cow<'_, str> {
    match v {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
