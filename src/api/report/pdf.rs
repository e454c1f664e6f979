//! Server-side PDF expense reports.

use crate::api::movements::structs::Movement;
use crate::client::{UnipolMoveClient, ensure_success};
use crate::handler::error::ApiError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON body of the report request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest<'a> {
    #[serde(rename = "intestatario")]
    pub recipient: &'a str,
    #[serde(rename = "listaMovimenti")]
    pub movements: Vec<Movement>,
}

/// Builds the report body from copies of `movements`, each marked
/// `checked: true` and numbered by its position in the slice.
pub fn build_report_payload<'a>(movements: &[Movement], recipient: &'a str) -> ReportRequest<'a> {
    ReportRequest {
        recipient,
        movements: movements
            .iter()
            .enumerate()
            .map(|(idx, movement)| movement.for_report(idx))
            .collect(),
    }
}

impl UnipolMoveClient {
    /// Asks the service to render `movements` as a PDF addressed to
    /// `recipient` and returns the document bytes unchanged.
    ///
    /// When `output_path` is given the bytes are also written there.
    ///
    /// # Errors
    /// - [`ApiError::NotAuthenticated`] if no session cookies are set.
    /// - [`ApiError::HttpStatus`] if the service rejects the request.
    /// - [`ApiError::IoError`] if the file cannot be written.
    pub fn generate_pdf_report(
        &self,
        movements: &[Movement],
        recipient: &str,
        output_path: Option<&Path>,
    ) -> Result<Vec<u8>, ApiError> {
        let headers = self.authenticated_headers(&self.session.pdf_credentials)?;
        let url = self.config.pdf_url(&self.session.contract_id);
        let payload = build_report_payload(movements, recipient);
        log::info!(
            "Requesting PDF report for {} movements from: {}",
            payload.movements.len(),
            url
        );
        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&payload)
            .send()?;
        let pdf = ensure_success(response)?
            .bytes()
            .map(|bytes| bytes.to_vec())?;
        log::debug!("Received {} bytes of PDF", pdf.len());
        if let Some(path) = output_path {
            fs::write(path, &pdf).map_err(|e| {
                log::error!("Failed to write report to {:?}: {}", path, e);
                ApiError::from(e)
            })?;
            log::info!("Report saved at {:?}", path);
        }
        Ok(pdf)
    }
}
