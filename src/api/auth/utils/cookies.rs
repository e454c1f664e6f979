//! Cookie handling utilities for HTTP requests and responses.
//!
//! This module provides functions to extract cookies from `Set-Cookie` headers,
//! build a `Cookie` header value from a list of name/value pairs, and add that
//! header to a request's header map.

use crate::handler::error::ApiError;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use std::collections::HashMap;

/// Extracts all cookies from the `Set-Cookie` headers of an HTTP response.
///
/// Attributes such as `Path` or `HttpOnly` are ignored. If a name appears more
/// than once, the last value wins.
///
/// # Example
/// ```
/// use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
/// use libunipolmove::utils::cookies::extract_cookies;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(SET_COOKIE, HeaderValue::from_static("MRHSession=abc123; Path=/"));
/// headers.append(SET_COOKIE, HeaderValue::from_static("LastMRH_Session=def; secure"));
///
/// let cookies = extract_cookies(&headers);
/// assert_eq!(cookies.get("MRHSession"), Some(&"abc123".to_string()));
/// assert_eq!(cookies.get("LastMRH_Session"), Some(&"def".to_string()));
/// ```
pub fn extract_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for value in headers.get_all(SET_COOKIE) {
        if let Ok(cookie_str) = value.to_str() {
            if let Some((name, value)) = parse_set_cookie(cookie_str) {
                cookies.insert(name, value);
            }
        }
    }
    cookies
}

/// Builds a `Cookie` header value, keeping the order of `cookies`.
///
/// # Example
/// ```
/// use libunipolmove::utils::cookies::build_cookie_header;
///
/// let header = build_cookie_header(&[("MRHSession", "xyz"), ("isLogged", "true")]);
/// assert_eq!(header, "MRHSession=xyz; isLogged=true");
/// ```
pub fn build_cookie_header(cookies: &[(&str, &str)]) -> String {
    cookies
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Sets the `Cookie` header of `headers` from `cookies`.
///
/// Nothing is inserted for an empty list. An existing `Cookie` header is
/// overwritten.
///
/// # Errors
/// Returns [`ApiError::InvalidHeader`] if a cookie value contains characters
/// that cannot appear in a header.
pub fn add_cookies_to_headers(
    headers: &mut HeaderMap,
    cookies: &[(&str, &str)],
) -> Result<(), ApiError> {
    if !cookies.is_empty() {
        let cookie_str = build_cookie_header(cookies);
        let header_value = HeaderValue::from_str(&cookie_str)
            .map_err(|e| ApiError::InvalidHeader(format!("Invalid cookie header: {}", e)))?;
        headers.insert(COOKIE, header_value);
    }
    Ok(())
}

/// Parses a single `Set-Cookie` header string into a cookie name and value.
///
/// Returns `None` when there is no `name=value` pair or the name is empty.
fn parse_set_cookie(cookie_str: &str) -> Option<(String, String)> {
    let mut parts = cookie_str.splitn(2, '=');
    let name = parts.next()?.trim();
    if name.is_empty() {
        return None;
    }
    let rest = parts.next()?;
    let value = rest.split(';').next().unwrap_or(rest).trim();
    Some((name.to_string(), value.to_string()))
}
