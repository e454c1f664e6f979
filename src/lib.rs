pub mod api;
pub mod client;
pub mod handler;
pub use crate::api::auth::{ApiCredentials, Session, SessionCookies};
pub use crate::api::environment::RemoteCredentials;
pub use crate::api::movements::{
    Movement, MovementPage, MovementQuery, MovementQueryBuilder, PaymentStatus,
    filter_movements_by_date, parse_movement_date,
};
pub use crate::api::report::{ReportRequest, build_report_payload};
pub use client::UnipolMoveClient;
pub use handler::config::{ClientConfig, LAST_YEAR};
pub use handler::env::{EnvConfig, EnvError};
pub use handler::error::ApiError;
pub mod utils {
    pub use crate::api::auth::utils::cookies;
    pub use crate::api::auth::utils::headers;
}
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
pub fn name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: version(),
        name: name(),
        authors: env!("CARGO_PKG_AUTHORS"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        repository: env!("CARGO_PKG_REPOSITORY"),
    }
}
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub name: &'static str,
    pub authors: &'static str,
    pub description: &'static str,
    /// Empty when the package declares no repository.
    pub repository: &'static str,
}
impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} v{}\n{}\nAuthors: {}",
            self.name, self.version, self.description, self.authors
        )?;
        if !self.repository.is_empty() {
            write!(f, "\nRepository: {}", self.repository)?;
        }
        Ok(())
    }
}
