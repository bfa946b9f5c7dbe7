//! Platform API client for CloudPools jobs.
//!
//! Two authenticated GETs: the job list and the per-job file list. Any status
//! other than 200 is returned as an [`ApiError`]; nothing is retried.

mod status;
mod transport;

pub use transport::{CurlTransport, HttpResponse, Transport};

use serde::de::DeserializeOwned;

use crate::config::{ConnectionTarget, HttpOptions};
use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::model::{CloudJob, JobFiles, JobsList};

/// Collection endpoint listing every CloudPools job.
pub const JOBS_PATH: &str = "/platform/3/cloud/jobs";

/// Per-job file listing endpoint (job id appended).
pub const JOBS_FILES_PATH: &str = "/platform/3/cloud/jobs-files";

pub fn job_files_path(job_id: u64) -> String {
    format!("{}/{}", JOBS_FILES_PATH, job_id)
}

/// Authenticated client bound to one cluster.
pub struct ApiClient<T: Transport = CurlTransport> {
    transport: T,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ApiClient<CurlTransport> {
    /// Client using libcurl with the given transport options.
    pub fn connect(
        target: &ConnectionTarget,
        credentials: &Credentials,
        http: &HttpOptions,
    ) -> Result<Self, url::ParseError> {
        Self::with_transport(target, credentials, CurlTransport::new(http.clone()))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Fails if the target does not form a valid base URL. The authorization
    /// header is computed here once and reused for every request.
    pub fn with_transport(
        target: &ConnectionTarget,
        credentials: &Credentials,
        transport: T,
    ) -> Result<Self, url::ParseError> {
        let base = url::Url::parse(&target.base_url())?;
        let base_url = base.as_str().trim_end_matches('/').to_string();
        let headers = vec![
            (
                "Authorization".to_string(),
                credentials.authorization_header(),
            ),
            ("Cache-Control".to_string(), "no-cache".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        Ok(Self {
            transport,
            base_url,
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All CloudPools jobs, unfiltered, in response order.
    pub fn fetch_jobs(&self) -> Result<Vec<CloudJob>, ApiError> {
        let list: JobsList = self.get_json(JOBS_PATH)?;
        Ok(list.jobs)
    }

    /// Files tiered by one job.
    pub fn fetch_job_files(&self, job_id: u64) -> Result<JobFiles, ApiError> {
        self.get_json(&job_files_path(job_id))
    }

    fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .transport
            .get(&url, &self.headers)
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        tracing::debug!(path, status = resp.status, bytes = resp.body.len(), "GET");

        match resp.status {
            200 => serde_json::from_slice(&resp.body).map_err(|source| ApiError::Decode {
                path: path.to_string(),
                source,
            }),
            401 => Err(ApiError::Unauthorized {
                path: path.to_string(),
            }),
            status => Err(ApiError::RequestFailed {
                path: path.to_string(),
                status,
                reason: resp.reason,
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod fake;
