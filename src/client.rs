use crate::api::auth::session::{Session, SessionCookies};
use crate::api::auth::utils::{add_cookies_to_headers, api_headers};
use crate::api::auth::ApiCredentials;
use crate::api::environment::fetch_remote_credentials;
use crate::handler::config::ClientConfig;
use crate::handler::error::ApiError;
use reqwest::blocking::{Client, Response};
use reqwest::header::HeaderMap;

/// Blocking client for the Unipol Move movements portal.
///
/// Construction downloads the public configuration document to obtain the
/// API key pairs, so it already needs the network.
///
/// # Example
/// ```no_run
/// use libunipolmove::UnipolMoveClient;
///
/// let mut client = UnipolMoveClient::new("P000000000")?;
/// if client.login("me@example.com", "secret")? {
///     let movements = client.fetch_all_movements(100, "ULTIMO_ANNO")?;
///     println!("{} movements", movements.len());
/// }
/// # Ok::<(), libunipolmove::ApiError>(())
/// ```
pub struct UnipolMoveClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
    pub(crate) session: Session,
}

impl UnipolMoveClient {
    pub fn new(contract_id: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_config(contract_id, ClientConfig::default())
    }

    pub fn with_config(
        contract_id: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        Self::with_session(contract_id, config, None, None)
    }

    /// Builds a client that reuses cookies and/or a session id from an
    /// earlier login. Supplying cookies makes the client authenticated
    /// without calling [`login`](Self::login).
    pub fn with_session(
        contract_id: impl Into<String>,
        config: ClientConfig,
        cookies: Option<SessionCookies>,
        session_id: Option<String>,
    ) -> Result<Self, ApiError> {
        let client = Self::build_client(&config)?;
        let credentials = fetch_remote_credentials(&client, &config)?;
        let session = Session {
            contract_id: contract_id.into(),
            cookies,
            session_id: session_id.unwrap_or_else(Session::generate_session_id),
            movements_credentials: credentials.movements,
            pdf_credentials: credentials.pdf,
        };
        log::debug!(
            "Client ready for contract {} (authenticated: {})",
            session.contract_id,
            session.is_authenticated()
        );
        Ok(Self {
            client,
            config,
            session,
        })
    }

    fn build_client(config: &ClientConfig) -> Result<Client, ApiError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| {
            log::error!("Failed to build HTTP client: {}", e);
            ApiError::from(e)
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn contract_id(&self) -> &str {
        &self.session.contract_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// API headers plus session cookies for an authenticated call.
    pub(crate) fn authenticated_headers(
        &self,
        credentials: &ApiCredentials,
    ) -> Result<HeaderMap, ApiError> {
        let cookies = self
            .session
            .cookies
            .as_ref()
            .ok_or(ApiError::NotAuthenticated)?;
        let mut headers = api_headers(&self.config, &self.session.session_id, credentials)?;
        add_cookies_to_headers(&mut headers, &cookies.request_pairs())?;
        Ok(headers)
    }
}

/// Passes successful responses through and turns any other status into
/// [`ApiError::HttpStatus`], logging a snippet of the body.
pub(crate) fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body_snippet = response
        .text()
        .unwrap_or_default()
        .chars()
        .take(200)
        .collect::<String>();
    log::error!("HTTP {} for {} - {}", status, url, body_snippet);
    Err(ApiError::HttpStatus {
        status: status.as_u16(),
        url,
    })
}
