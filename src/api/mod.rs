pub mod auth;
pub mod environment;
pub mod movements;
pub mod report;
