//! In-memory transport for unit tests: canned responses keyed by path, with a request log.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{HttpResponse, Transport};

#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: HashMap<String, HttpResponse>,
    pub(crate) requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn json(mut self, path: &str, body: serde_json::Value) -> Self {
        self.routes.insert(
            path.to_string(),
            HttpResponse {
                status: 200,
                reason: "OK".to_string(),
                body: body.to_string().into_bytes(),
            },
        );
        self
    }

    pub(crate) fn status(mut self, path: &str, status: u32, reason: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            HttpResponse {
                status,
                reason: reason.to_string(),
                body: Vec::new(),
            },
        );
        self
    }

    pub(crate) fn raw(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(
            path.to_string(),
            HttpResponse {
                status: 200,
                reason: "OK".to_string(),
                body: body.as_bytes().to_vec(),
            },
        );
        self
    }

    /// Paths requested so far, in order.
    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(url, _)| path_of(url).to_string())
            .collect()
    }
}

fn path_of(url: &str) -> &str {
    let after_scheme = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    after_scheme
        .find('/')
        .map(|i| &after_scheme[i..])
        .unwrap_or("/")
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpResponse, curl::Error> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), headers.to_vec()));
        Ok(self
            .routes
            .get(path_of(url))
            .cloned()
            .unwrap_or_else(|| HttpResponse {
                status: 404,
                reason: "Not Found".to_string(),
                body: Vec::new(),
            }))
    }
}
