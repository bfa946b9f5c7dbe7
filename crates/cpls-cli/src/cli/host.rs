//! Default cluster address: the local node's own address.

use std::io;
use std::net::ToSocketAddrs;

const FALLBACK_HOST: &str = "127.0.0.1";

/// Local hostname resolved to its first IPv4 address, else the hostname, else loopback.
pub fn detect_host() -> String {
    match local_hostname() {
        Ok(name) if !name.is_empty() => match first_ipv4(&name) {
            Some(ip) => ip,
            None => {
                tracing::debug!(hostname = %name, "hostname did not resolve to IPv4");
                name
            }
        },
        Ok(_) => FALLBACK_HOST.to_string(),
        Err(e) => {
            tracing::warn!("gethostname failed: {}", e);
            FALLBACK_HOST.to_string()
        }
    }
}

fn first_ipv4(name: &str) -> Option<String> {
    (name, 0u16)
        .to_socket_addrs()
        .ok()?
        .find(|a| a.is_ipv4())
        .map(|a| a.ip().to_string())
}

#[cfg(unix)]
fn local_hostname() -> io::Result<String> {
    let mut buf = vec![0u8; 256];
    // SAFETY: buf is valid for buf.len() bytes; gethostname NUL-terminates on success
    // when the name fits, and we stop at the first NUL or the buffer end otherwise.
    let ret = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if ret != 0 {
        return Err(io::Error::last_os_error());
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(end);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(not(unix))]
fn local_hostname() -> io::Result<String> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "hostname lookup not supported on this platform",
    ))
}
