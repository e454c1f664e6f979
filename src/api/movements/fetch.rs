use super::structs::{Movement, MovementPage, MovementQuery};
use crate::client::{UnipolMoveClient, ensure_success};
use crate::handler::error::ApiError;

impl UnipolMoveClient {
    /// Default query for this client's configuration, ready to be tweaked.
    pub fn movement_query(&self) -> MovementQuery {
        MovementQuery::from_config(&self.config)
    }

    /// Fetches a single page of movements.
    ///
    /// # Errors
    /// - [`ApiError::NotAuthenticated`] if no session cookies are set.
    /// - [`ApiError::HttpStatus`] if the service rejects the request.
    /// - [`ApiError::RequestFailed`] / [`ApiError::JsonError`] for transport
    ///   or decoding failures.
    pub fn fetch_movements(&self, query: &MovementQuery) -> Result<MovementPage, ApiError> {
        let headers = self.authenticated_headers(&self.session.movements_credentials)?;
        let url = format!(
            "{}?{}",
            self.config.movements_url(&self.session.contract_id),
            query.to_query_string()
        );
        log::debug!("Fetching movements from: {}", url);
        let response = self.client.get(&url).headers(headers).send()?;
        let body = ensure_success(response)?.text()?;
        let page: MovementPage = serde_json::from_str(&body)?;
        log::debug!(
            "Page at offset {} returned {} movements",
            query.offset,
            page.movements.len()
        );
        Ok(page)
    }

    /// Walks every page of `interval`, `batch_size` records at a time.
    ///
    /// Stops at the first empty or short page. A failing page aborts the
    /// whole walk.
    pub fn fetch_all_movements(
        &self,
        batch_size: u32,
        interval: &str,
    ) -> Result<Vec<Movement>, ApiError> {
        if batch_size == 0 {
            return Err(ApiError::InvalidArgument(
                "batch size must be greater than zero".into(),
            ));
        }
        log::info!(
            "Fetching all movements for interval {} in batches of {}",
            interval,
            batch_size
        );
        let mut query = MovementQuery::builder(&self.config)
            .offset(1)
            .limit(batch_size)
            .interval(interval)
            .build();
        let mut all_movements = Vec::new();
        loop {
            let page = self.fetch_movements(&query)?;
            let count = page.movements.len();
            if count == 0 {
                break;
            }
            all_movements.extend(page.movements);
            if count < batch_size as usize {
                break;
            }
            query.offset += batch_size;
        }
        log::info!("Fetched {} movements", all_movements.len());
        Ok(all_movements)
    }
}
