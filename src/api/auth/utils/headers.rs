//! Request header sets for the login form and the authenticated APIs.

use crate::api::auth::session::ApiCredentials;
use crate::handler::config::ClientConfig;
use crate::handler::error::ApiError;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT,
};

pub const REQUEST_ID: HeaderName = HeaderName::from_static("x-unipol-requestid");
pub const SEQUENCE_ID: HeaderName = HeaderName::from_static("x-unipol-sequenceid");
pub const SESSION_ID: HeaderName = HeaderName::from_static("x-unipol-sessionid");
pub const CHANNEL: HeaderName = HeaderName::from_static("x-unipol-canale");
pub const CLIENT_ID: HeaderName = HeaderName::from_static("x-ibm-client-id");
pub const CLIENT_SECRET: HeaderName = HeaderName::from_static("x-ibm-client-secret");

fn header_value(name: &HeaderName, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::InvalidHeader(format!("Invalid {} header: {}", name, e)))
}

/// Headers common to every call: tracing ids, language and browser identification.
/// A fresh request id is generated on each invocation.
fn base_headers(
    config: &ClientConfig,
    session_id: &str,
    accept: &'static str,
    referer: &str,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(accept));
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value(&ACCEPT_LANGUAGE, &config.accept_language)?,
    );
    headers.insert(
        REQUEST_ID,
        header_value(&REQUEST_ID, &uuid::Uuid::new_v4().to_string())?,
    );
    headers.insert(SEQUENCE_ID, HeaderValue::from_static("0"));
    headers.insert(SESSION_ID, header_value(&SESSION_ID, session_id)?);
    headers.insert(USER_AGENT, header_value(&USER_AGENT, &config.user_agent)?);
    headers.insert(REFERER, header_value(&REFERER, referer)?);
    Ok(headers)
}

/// Headers for the login form post. Carries no API key pair.
pub fn login_headers(config: &ClientConfig, session_id: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = base_headers(
        config,
        session_id,
        "application/json, text/plain, */*",
        &config.login_referer(),
    )?;
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    Ok(headers)
}

/// Headers for an authenticated API call signed with `credentials`.
pub fn api_headers(
    config: &ClientConfig,
    session_id: &str,
    credentials: &ApiCredentials,
) -> Result<HeaderMap, ApiError> {
    let mut headers = base_headers(
        config,
        session_id,
        "application/json",
        &config.movements_referer(),
    )?;
    headers.insert(CLIENT_ID, header_value(&CLIENT_ID, &credentials.client_id)?);
    headers.insert(
        CLIENT_SECRET,
        header_value(&CLIENT_SECRET, &credentials.client_secret)?,
    );
    headers.insert(CHANNEL, header_value(&CHANNEL, &config.channel)?);
    Ok(headers)
}
