//! Client-side date filtering of movement lists.

use super::structs::Movement;
use crate::client::UnipolMoveClient;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a movement date, either `YYYY-MM-DD` or a timestamp.
///
/// Timestamps carrying an offset (or `Z`) are converted to UTC before the
/// calendar date is taken.
pub fn parse_movement_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if !raw.contains('T') {
        return NaiveDate::parse_from_str(raw, DATE_FORMAT).ok();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}

/// Keeps the movements whose resolved date lies in `start..=end`.
///
/// Records without a usable date are skipped, never reported as errors.
pub fn filter_movements_by_date(
    movements: &[Movement],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Movement> {
    movements
        .iter()
        .filter(|movement| {
            let Some(value) = movement.resolved_date_value() else {
                log::debug!("Skipping movement without a date");
                return false;
            };
            let Some(raw) = value.as_str() else {
                log::debug!("Skipping movement with non-text date {}", value);
                return false;
            };
            match parse_movement_date(raw) {
                Some(date) => start <= date && date <= end,
                None => {
                    log::debug!("Skipping movement with unparseable date {:?}", raw);
                    false
                }
            }
        })
        .cloned()
        .collect()
}

impl UnipolMoveClient {
    pub fn filter_movements_by_date(
        &self,
        movements: &[Movement],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Movement> {
        filter_movements_by_date(movements, start, end)
    }
}
