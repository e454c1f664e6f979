use crate::api::auth::session::{LAST_MRH_SESSION_COOKIE, MRH_SESSION_COOKIE, SessionCookies};
use crate::api::auth::utils::{extract_cookies, login_headers};
use crate::client::{UnipolMoveClient, ensure_success};
use crate::handler::error::ApiError;
use std::collections::HashMap;

impl UnipolMoveClient {
    /// Posts the login form and stores the session cookies on success.
    ///
    /// Returns `Ok(false)` when the service answers successfully but does not
    /// hand out both session cookies (wrong credentials end up here). The
    /// session is left untouched in that case.
    ///
    /// # Errors
    /// Transport failures and non-success statuses are returned as
    /// [`ApiError`].
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool, ApiError> {
        let url = self.config.login_url();
        log::info!("Starting login process to: {}", url);
        let headers = login_headers(&self.config, &self.session.session_id)?;
        let mut login_form = HashMap::new();
        login_form.insert("username", username);
        login_form.insert("password", password);
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .form(&login_form)
            .send()
            .map_err(|e| {
                log::error!("Network error during login: {}", e);
                ApiError::from(e)
            })?;
        let response = ensure_success(response)?;
        let mut cookies = extract_cookies(response.headers());
        log::debug!("Received {} cookies", cookies.len());
        match (
            cookies.remove(MRH_SESSION_COOKIE),
            cookies.remove(LAST_MRH_SESSION_COOKIE),
        ) {
            (Some(mrh_session), Some(last_mrh_session)) => {
                self.session.cookies = Some(SessionCookies {
                    mrh_session,
                    last_mrh_session,
                });
                log::info!("Login successful");
                Ok(true)
            }
            _ => {
                log::warn!(
                    "Login response lacks {} or {} cookie",
                    MRH_SESSION_COOKIE,
                    LAST_MRH_SESSION_COOKIE
                );
                Ok(false)
            }
        }
    }
}
