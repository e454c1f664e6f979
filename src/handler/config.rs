//! Client configuration.
//!
//! Everything the client would otherwise hardcode (service root, browser
//! identification, default query values) lives in [`ClientConfig`] and is
//! handed over at construction.

use crate::api::movements::structs::PaymentStatus;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.unipolmove.it";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:144.0) Gecko/20100101 Firefox/144.0";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "it-IT,it;q=0.8,en-US;q=0.5,en;q=0.3";
pub const DEFAULT_CHANNEL: &str = "WEB";
/// Interval keyword selecting the last twelve months.
pub const LAST_YEAR: &str = "ULTIMO_ANNO";
/// Sort key for date, descending.
pub const ORDER_BY_DATE_DESC: &str = "date-D";
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub const ENVIRONMENT_ENDPOINT: &str = "/app/config/environment.json";
pub const LOGIN_ENDPOINT: &str = "/login";
const LOGIN_PAGE: &str = "/app/login";
const MOVEMENTS_PAGE: &str = "/app/post-vendita/homepage/movements";

/// Connection settings and request defaults for [`UnipolMoveClient`](crate::UnipolMoveClient).
///
/// # Example
/// ```
/// use libunipolmove::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_page_size(50)
///     .with_timeout(Duration::from_secs(20));
/// assert_eq!(config.page_size, 50);
/// assert_eq!(config.login_url(), "https://www.unipolmove.it/login");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root, without trailing slash.
    pub base_url: String,
    /// Browser identification sent on every request.
    pub user_agent: String,
    /// Value of `Accept-Language`.
    pub accept_language: String,
    /// Value of `X-UNIPOL-CANALE`.
    pub channel: String,
    /// Per-request timeout. `None` keeps the HTTP library default.
    pub timeout: Option<Duration>,
    /// Default `limite` for a single page and batch size for full fetches.
    pub page_size: u32,
    /// Default interval keyword.
    pub interval: String,
    /// Default sort key.
    pub order_by: String,
    /// Default payment-status filter.
    pub payment_status: Vec<PaymentStatus>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            timeout: None,
            page_size: DEFAULT_PAGE_SIZE,
            interval: LAST_YEAR.to_string(),
            order_by: ORDER_BY_DATE_DESC.to_string(),
            payment_status: PaymentStatus::default_filter(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    pub fn with_payment_status(mut self, payment_status: Vec<PaymentStatus>) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub fn full_url(&self, endpoint: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        format!("{}/{}", base, endpoint)
    }

    pub fn environment_url(&self) -> String {
        self.full_url(ENVIRONMENT_ENDPOINT)
    }

    pub fn login_url(&self) -> String {
        self.full_url(LOGIN_ENDPOINT)
    }

    pub fn movements_url(&self, contract_id: &str) -> String {
        self.full_url(&format!(
            "/api/ut/prv/unipolmove/portale-tlpd/servizi-mobilita/v6/contratti/{}/movimenti",
            contract_id
        ))
    }

    pub fn pdf_url(&self, contract_id: &str) -> String {
        self.full_url(&format!(
            "/api/us/prv/tpd/telepedaggio-us/post-vendita/v1/contratti/{}/movimenti/stampa",
            contract_id
        ))
    }

    pub fn login_referer(&self) -> String {
        self.full_url(LOGIN_PAGE)
    }

    pub fn movements_referer(&self) -> String {
        self.full_url(MOVEMENTS_PAGE)
    }
}
