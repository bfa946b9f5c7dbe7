//! Minimal HTTP/1.1 server that mimics the CloudPools Platform API for integration tests.
//!
//! Routes map a request path to a canned status and JSON body. Requests whose
//! `Authorization` header does not match the expected value get 401.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status_line: String,
    pub body: String,
}

impl Route {
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status_line: "200 OK".to_string(),
            body: body.to_string(),
        }
    }

    pub fn status(status_line: &str) -> Self {
        Self {
            status_line: status_line.to_string(),
            body: "{}".to_string(),
        }
    }
}

/// A recorded request: path plus lower-cased header map.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub headers: HashMap<String, String>,
}

pub struct ApiServer {
    pub port: u16,
    pub seen: Arc<Mutex<Vec<Seen>>>,
}

impl ApiServer {
    pub fn paths(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.path.clone())
            .collect()
    }
}

/// Starts the server in a background thread. It runs until the process exits.
pub fn start(expected_auth: &str, routes: Vec<(&str, Route)>) -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let expected_auth = Arc::new(expected_auth.to_string());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_bg = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &routes, &expected_auth, &seen_bg);
        }
    });
    ApiServer { port, seen }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    expected_auth: &str,
    seen: &Mutex<Vec<Seen>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, headers) = parse_request(request);
    seen.lock().unwrap().push(Seen {
        path: path.clone(),
        headers: headers.clone(),
    });

    let route = if headers.get("authorization").map(String::as_str) != Some(expected_auth) {
        Route::status("401 Unauthorized")
    } else {
        routes
            .get(&path)
            .cloned()
            .unwrap_or_else(|| Route::status("404 Not Found"))
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status_line,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn parse_request(request: &str) -> (String, HashMap<String, String>) {
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let mut headers = HashMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }
    (path, headers)
}
