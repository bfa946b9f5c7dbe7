//! Blocking GET transport. One curl Easy handle per request; no connection reuse.

use std::str;

use crate::config::HttpOptions;

use super::status;

/// Status, reason phrase and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub reason: String,
    pub body: Vec<u8>,
}

/// Performs a single GET and returns the full response.
pub trait Transport {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpResponse, curl::Error>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: HttpOptions,
}

impl CurlTransport {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }
}

impl Transport for CurlTransport {
    /// Runs in the current thread and blocks until the body is fully read.
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpResponse, curl::Error> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.ssl_verify_peer(self.options.verify_tls)?;
        easy.ssl_verify_host(self.options.verify_tls)?;
        if let Some(ca) = &self.options.ca_cert {
            easy.cainfo(ca)?;
        }
        if let Some(t) = self.options.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.options.timeout {
            easy.timeout(t)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        let reason = status::final_status(&header_lines)
            .filter(|(c, _)| *c == code)
            .map(|(_, r)| r)
            .unwrap_or_else(|| status::canonical_reason(code).to_string());

        Ok(HttpResponse {
            status: code,
            reason,
            body,
        })
    }
}
