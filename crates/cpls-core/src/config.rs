use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::net::Ipv6Addr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::credentials::Credentials;
use crate::output::{EmptyFilesPolicy, OutputMode};

/// Default Platform API port.
pub const DEFAULT_PORT: u16 = 8080;

/// URL scheme used to reach the Platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

/// Global configuration loaded from `~/.config/cpls/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CplsConfig {
    /// Cluster address; auto-detected by the CLI when unset.
    #[serde(default)]
    pub host: Option<String>,
    /// Platform API port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// User name; prompted for when unset. The password is never stored.
    #[serde(default)]
    pub user: Option<String>,
    /// "https" (default) or "http".
    #[serde(default)]
    pub scheme: Scheme,
    /// Verify the server certificate. Off by default: cluster endpoints usually
    /// present a self-signed certificate.
    #[serde(default)]
    pub verify_tls: bool,
    /// CA bundle used when `verify_tls` is on.
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,
    /// Connect timeout in seconds (None = curl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// When the "no files found" notice fires: "aggregate" or "first-empty-job".
    #[serde(default)]
    pub empty_files: EmptyFilesPolicy,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for CplsConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            user: None,
            scheme: Scheme::Https,
            verify_tls: false,
            ca_cert: None,
            connect_timeout_secs: None,
            timeout_secs: None,
            empty_files: EmptyFilesPolicy::Aggregate,
        }
    }
}

impl CplsConfig {
    /// Transport settings derived from this config.
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            verify_tls: self.verify_tls,
            ca_cert: self.ca_cert.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cpls")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CplsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CplsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<CplsConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: CplsConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

/// Where the Platform API lives. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
}

impl ConnectionTarget {
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    /// `scheme://host:port`, with IPv6 literals bracketed.
    pub fn base_url(&self) -> String {
        let host = if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        format!("{}://{}:{}", self.scheme.as_str(), host, self.port)
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url())
    }
}

/// Curl knobs for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpOptions {
    pub verify_tls: bool,
    pub ca_cert: Option<PathBuf>,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

/// Fully resolved settings for one run, handed to the core by the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: ConnectionTarget,
    pub credentials: Credentials,
    pub http: HttpOptions,
    pub mode: OutputMode,
    pub empty_files: EmptyFilesPolicy,
}
