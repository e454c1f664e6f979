pub mod login;
pub mod session;
pub mod utils;
pub use session::{ApiCredentials, Session, SessionCookies};
