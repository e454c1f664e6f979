use std::env;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Environment variable {0} not found")]
    NotFound(String),
    #[error("Invalid environment variable: {0}")]
    Invalid(String),
}
/// Values a driver needs to run the full movement flow.
///
/// The core client never reads the environment itself; this is only a
/// convenience for binaries and examples.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub contract_id: String,
    pub username: String,
    pub password: String,
    pub recipient: String,
}
impl EnvConfig {
    pub fn load() -> Result<Self, EnvError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            contract_id: get_env("UNIPOL_CONTRACT_ID")?,
            username: get_env("UNIPOL_USERNAME")?,
            password: get_env("UNIPOL_PASSWORD")?,
            recipient: get_env("REPORT_RECIPIENT")?,
        })
    }
    pub fn from_values(
        contract_id: String,
        username: String,
        password: String,
        recipient: String,
    ) -> Self {
        Self {
            contract_id,
            username,
            password,
            recipient,
        }
    }
}
fn get_env(key: &str) -> Result<String, EnvError> {
    let value = env::var(key).map_err(|_| EnvError::NotFound(key.to_string()))?;
    if value.trim().is_empty() {
        return Err(EnvError::Invalid(format!("{} is empty", key)));
    }
    Ok(value)
}
