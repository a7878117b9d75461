//! Best-effort client address extraction.
//!
//! Proxy headers are consulted first, in a fixed order, and the first public
//! address found wins. The transport peer is the fallback.

use std::net::SocketAddr;

use axum::http::HeaderMap;
use tracker_core::event::UNKNOWN_ORIGIN;

/// Headers that may carry the original client address, most trusted first.
pub const CLIENT_IP_HEADERS: [&str; 7] = [
    "x-forwarded-for",
    "x-real-ip",
    "cf-connecting-ip",
    "x-client-ip",
    "x-forwarded",
    "forwarded-for",
    "forwarded",
];

const PRIVATE_PREFIXES: [&str; 5] = ["127.", "10.", "192.168.", "172.", "169.254."];
const LOCAL_LITERALS: [&str; 3] = ["localhost", "::1", "0.0.0.0"];

/// Returns the client address for a request: the first public address in the
/// proxy headers, else the peer address, else `"unknown"`.
#[must_use]
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    CLIENT_IP_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name)?.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(normalize_candidate)
        .find(|candidate| !candidate.is_empty() && !is_private_ip(candidate))
        .map(str::to_owned)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN_ORIGIN.to_owned())
}

/// Strips whitespace and, for RFC 7239 elements such as
/// `for="[2001:db8::1]";proto=https`, reduces the entry to the `for` address.
fn normalize_candidate(entry: &str) -> &str {
    let entry = entry.trim();
    let Some(forwarded_for) = entry
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            key.trim().eq_ignore_ascii_case("for").then_some(value)
        })
    else {
        return entry;
    };

    forwarded_for
        .trim()
        .trim_matches('"')
        .trim_start_matches('[')
        .split(']')
        .next()
        .unwrap_or_default()
}

/// Loopback, RFC 1918, link-local and unspecified addresses.
fn is_private_ip(ip: &str) -> bool {
    PRIVATE_PREFIXES.iter().any(|prefix| ip.starts_with(prefix)) || LOCAL_LITERALS.contains(&ip)
}
