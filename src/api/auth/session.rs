//! In-memory session state shared by every authenticated call.

use std::fmt;

pub const MRH_SESSION_COOKIE: &str = "MRHSession";
pub const LAST_MRH_SESSION_COOKIE: &str = "LastMRH_Session";
pub const IS_LOGGED_COOKIE: &str = "isLogged";

/// A per-API key pair issued by the service's public configuration document.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ApiCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// The two cookies proving an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookies {
    pub mrh_session: String,
    pub last_mrh_session: String,
}

impl SessionCookies {
    pub fn new(mrh_session: impl Into<String>, last_mrh_session: impl Into<String>) -> Self {
        Self {
            mrh_session: mrh_session.into(),
            last_mrh_session: last_mrh_session.into(),
        }
    }

    /// Cookie pairs sent with every authenticated request, in wire order.
    pub fn request_pairs(&self) -> [(&str, &str); 3] {
        [
            (MRH_SESSION_COOKIE, self.mrh_session.as_str()),
            (LAST_MRH_SESSION_COOKIE, self.last_mrh_session.as_str()),
            (IS_LOGGED_COOKIE, "true"),
        ]
    }
}

impl fmt::Debug for SessionCookies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookies")
            .field("mrh_session", &"***")
            .field("last_mrh_session", &"***")
            .finish()
    }
}

/// Everything the client knows about the current contract and login.
///
/// Built once at construction; only a successful login writes to it.
#[derive(Debug, Clone)]
pub struct Session {
    pub contract_id: String,
    pub cookies: Option<SessionCookies>,
    /// Value of `X-UNIPOL-SESSIONID`.
    pub session_id: String,
    pub movements_credentials: ApiCredentials,
    pub pdf_credentials: ApiCredentials,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.cookies.is_some()
    }

    pub fn generate_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(cookies: Option<SessionCookies>) -> Session {
        Session {
            contract_id: "P000000000".into(),
            cookies,
            session_id: Session::generate_session_id(),
            movements_credentials: ApiCredentials::new("mov-id", "mov-secret"),
            pdf_credentials: ApiCredentials::new("pdf-id", "pdf-secret"),
        }
    }

    #[test]
    fn test_authenticated_only_with_cookies() {
        assert!(!session(None).is_authenticated());
        assert!(session(Some(SessionCookies::new("a", "b"))).is_authenticated());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", session(Some(SessionCookies::new("mrh", "last"))));
        assert!(!rendered.contains("mov-secret"));
        assert!(!rendered.contains("mrh\""));
        assert!(rendered.contains("mov-id"));
    }

    #[test]
    fn test_generated_session_ids_differ() {
        let a = Session::generate_session_id();
        let b = Session::generate_session_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
