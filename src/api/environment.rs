//! Discovery of the API key pairs published in the service's public
//! `environment.json`.

use crate::api::auth::session::ApiCredentials;
use crate::client::ensure_success;
use crate::handler::config::ClientConfig;
use crate::handler::error::ApiError;
use reqwest::blocking::Client;
use serde_json::Value;

const MOVEMENTS_HEADERS: &str = "headers_ut_prv_mobility_service";
const PDF_HEADERS: &str = "headers_us";

/// Key pairs for the two APIs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCredentials {
    pub movements: ApiCredentials,
    pub pdf: ApiCredentials,
}

/// Downloads the configuration document and extracts both key pairs.
///
/// # Errors
/// - [`ApiError::RequestFailed`] if the endpoint is unreachable.
/// - [`ApiError::HttpStatus`] on a non-success status.
/// - [`ApiError::JsonError`] if the body is not JSON.
/// - [`ApiError::MissingConfigKey`] if an expected key is absent.
pub fn fetch_remote_credentials(
    client: &Client,
    config: &ClientConfig,
) -> Result<RemoteCredentials, ApiError> {
    let url = config.environment_url();
    log::debug!("Fetching remote configuration from: {}", url);
    let response = ensure_success(client.get(&url).send()?)?;
    let document: Value = serde_json::from_str(&response.text()?)?;
    parse_remote_credentials(&document)
}

pub fn parse_remote_credentials(document: &Value) -> Result<RemoteCredentials, ApiError> {
    Ok(RemoteCredentials {
        movements: credentials_at(document, MOVEMENTS_HEADERS)?,
        pdf: credentials_at(document, PDF_HEADERS)?,
    })
}

fn credentials_at(document: &Value, section: &str) -> Result<ApiCredentials, ApiError> {
    Ok(ApiCredentials {
        client_id: string_at(document, section, "x-ibm-client-id")?,
        client_secret: string_at(document, section, "x-ibm-client-secret")?,
    })
}

fn string_at(document: &Value, section: &str, key: &str) -> Result<String, ApiError> {
    document
        .get("apiConnect")
        .and_then(|api| api.get(section))
        .and_then(|headers| headers.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::MissingConfigKey(format!("apiConnect.{}.{}", section, key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_both_pairs() {
        let doc = json!({
            "apiConnect": {
                "headers_ut_prv_mobility_service": {
                    "x-ibm-client-id": "mov-id",
                    "x-ibm-client-secret": "mov-secret"
                },
                "headers_us": {
                    "x-ibm-client-id": "pdf-id",
                    "x-ibm-client-secret": "pdf-secret"
                }
            }
        });
        let creds = parse_remote_credentials(&doc).unwrap();
        assert_eq!(creds.movements, ApiCredentials::new("mov-id", "mov-secret"));
        assert_eq!(creds.pdf, ApiCredentials::new("pdf-id", "pdf-secret"));
    }

    #[test]
    fn test_missing_key_is_named() {
        let doc = json!({
            "apiConnect": {
                "headers_ut_prv_mobility_service": {
                    "x-ibm-client-id": "mov-id",
                    "x-ibm-client-secret": "mov-secret"
                },
                "headers_us": { "x-ibm-client-id": "pdf-id" }
            }
        });
        match parse_remote_credentials(&doc) {
            Err(ApiError::MissingConfigKey(key)) => {
                assert_eq!(key, "apiConnect.headers_us.x-ibm-client-secret")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_string_value_is_missing() {
        let doc = json!({ "apiConnect": { "headers_ut_prv_mobility_service": { "x-ibm-client-id": 42 } } });
        assert!(matches!(
            parse_remote_credentials(&doc),
            Err(ApiError::MissingConfigKey(_))
        ));
    }
}
