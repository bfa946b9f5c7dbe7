//! Status line parsing for curl header callbacks.

/// Status code and reason phrase from the last `HTTP/...` line in `lines`.
///
/// Curl hands us every header block (redirects, `100 Continue`), so the final
/// status line is the one that matters. HTTP/2 status lines carry no reason
/// phrase; the canonical one is substituted.
pub(crate) fn final_status(lines: &[String]) -> Option<(u32, String)> {
    lines
        .iter()
        .rev()
        .find_map(|l| parse_status_line(l))
        .map(|(code, reason)| {
            let reason = if reason.is_empty() {
                canonical_reason(code).to_string()
            } else {
                reason
            };
            (code, reason)
        })
}

fn parse_status_line(line: &str) -> Option<(u32, String)> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts.next().unwrap_or("").trim().to_string();
    Some((code, reason))
}

pub(crate) fn canonical_reason(code: u32) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        409 => "Conflict",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}
