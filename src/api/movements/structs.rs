use crate::handler::config::ClientConfig;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One toll-gate traversal as returned by the service.
///
/// Only the keys the client reads are named; everything else is kept in
/// [`extra`](Self::extra). Named fields hold the raw JSON value: `None` means
/// the key was absent, `Some(Value::Null)` that it was sent as `null`, so a
/// record serializes back to exactly the keys it was read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    #[serde(rename = "dataIngresso", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<Value>,
    #[serde(rename = "dataUscita", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<Value>,
    #[serde(rename = "inizioTratta", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<Value>,
    #[serde(rename = "fineTratta", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub exit_point: Option<Value>,
    /// Amount, sent by the service either as a string or a number.
    #[serde(rename = "saldo", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    #[serde(rename = "statoPagamento", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<Value>,
    /// Licence plate.
    #[serde(rename = "targa", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub plate: Option<Value>,
    /// On-board device code.
    #[serde(rename = "dispositivo", default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub device: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A present key always yields `Some`, even when its value is `null`.
fn keep_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn display(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(other) => other.to_string(),
    }
}

impl Movement {
    /// Entry date value if present and not blank, otherwise the exit date.
    /// The value may be of any JSON type.
    pub fn resolved_date_value(&self) -> Option<&Value> {
        self.entry_date
            .as_ref()
            .filter(|v| !is_blank(v))
            .or_else(|| self.exit_date.as_ref().filter(|v| !is_blank(v)))
    }

    /// The resolved date when it is text.
    pub fn resolved_date(&self) -> Option<&str> {
        self.resolved_date_value().and_then(Value::as_str)
    }

    /// Amount rendered for display, `N/A` when absent.
    pub fn amount_display(&self) -> String {
        display(self.amount.as_ref())
    }

    pub fn entry_point_display(&self) -> String {
        display(self.entry_point.as_ref())
    }

    pub fn exit_point_display(&self) -> String {
        display(self.exit_point.as_ref())
    }

    /// Copy of this record marked for inclusion in a report at `index`.
    pub fn for_report(&self, index: usize) -> Movement {
        let mut copy = self.clone();
        copy.extra.insert("checked".to_string(), Value::Bool(true));
        copy.extra
            .insert("id".to_string(), Value::String(index.to_string()));
        copy
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Movement>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Movement>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of the movements listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementPage {
    #[serde(rename = "listaMovimenti", default, deserialize_with = "null_as_empty")]
    pub movements: Vec<Movement>,
    #[serde(rename = "dispositivi", default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payment-status codes accepted by the `statoPagamento` filter.
///
/// Only `0` and `1` have a known meaning; other codes are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// `0`, DA_ADDEBITARE.
    ToBeCharged,
    /// `1`, ADDEBITATO.
    Charged,
    Other(String),
}

impl PaymentStatus {
    pub fn code(&self) -> &str {
        match self {
            PaymentStatus::ToBeCharged => "0",
            PaymentStatus::Charged => "1",
            PaymentStatus::Other(code) => code,
        }
    }

    /// The filter the web portal itself sends: `0,1,3,4`.
    pub fn default_filter() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::ToBeCharged,
            PaymentStatus::Charged,
            PaymentStatus::Other("3".to_string()),
            PaymentStatus::Other("4".to_string()),
        ]
    }

    pub fn join(statuses: &[PaymentStatus]) -> String {
        statuses
            .iter()
            .map(PaymentStatus::code)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<&str> for PaymentStatus {
    fn from(code: &str) -> Self {
        match code.trim() {
            "0" => PaymentStatus::ToBeCharged,
            "1" => PaymentStatus::Charged,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parameters of a single movements page request.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementQuery {
    /// 1-based position of the first record.
    pub offset: u32,
    pub limit: u32,
    pub interval: String,
    pub order_by: String,
    pub payment_status: Vec<PaymentStatus>,
}

impl MovementQuery {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            offset: 1,
            limit: config.page_size,
            interval: config.interval.clone(),
            order_by: config.order_by.clone(),
            payment_status: config.payment_status.clone(),
        }
    }

    pub fn builder(config: &ClientConfig) -> MovementQueryBuilder {
        MovementQueryBuilder {
            query: Self::from_config(config),
        }
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let params = [
            ("offset", self.offset.to_string()),
            ("limite", self.limit.to_string()),
            ("intervallo", self.interval.clone()),
            ("ordinaPer", self.order_by.clone()),
            ("statoPagamento", PaymentStatus::join(&self.payment_status)),
        ];
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Default for MovementQuery {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

/// Builder pattern for movement queries
pub struct MovementQueryBuilder {
    query: MovementQuery,
}

impl MovementQueryBuilder {
    pub fn offset(mut self, offset: u32) -> Self {
        self.query.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = limit;
        self
    }

    pub fn interval(mut self, interval: &str) -> Self {
        self.query.interval = interval.to_string();
        self
    }

    pub fn order_by(mut self, order_by: &str) -> Self {
        self.query.order_by = order_by.to_string();
        self
    }

    pub fn payment_status(mut self, statuses: Vec<PaymentStatus>) -> Self {
        self.query.payment_status = statuses;
        self
    }

    pub fn build(self) -> MovementQuery {
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let raw = json!({
            "dataIngresso": "2024-03-05T08:10:00Z",
            "saldo": 2.5,
            "caselloIngresso": "0421",
            "targa": "AB123CD"
        });
        let movement: Movement = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(movement.resolved_date(), Some("2024-03-05T08:10:00Z"));
        assert_eq!(movement.plate, Some(json!("AB123CD")));
        assert_eq!(movement.extra.get("caselloIngresso"), Some(&json!("0421")));
        assert_eq!(serde_json::to_value(&movement).unwrap(), raw);
    }

    #[test]
    fn test_resolved_date_falls_back_to_exit() {
        let movement: Movement =
            serde_json::from_value(json!({"dataIngresso": "", "dataUscita": "2024-01-02"}))
                .unwrap();
        assert_eq!(movement.resolved_date(), Some("2024-01-02"));
        assert_eq!(Movement::default().resolved_date(), None);
    }

    #[test]
    fn test_for_report_leaves_original_alone() {
        let movement: Movement =
            serde_json::from_value(json!({"dataIngresso": "2024-03-05", "saldo": "2.50"}))
                .unwrap();
        let copy = movement.for_report(3);
        assert_eq!(copy.extra.get("checked"), Some(&json!(true)));
        assert_eq!(copy.extra.get("id"), Some(&json!("3")));
        assert!(movement.extra.is_empty());
    }

    #[test]
    fn test_amount_display() {
        let text: Movement = serde_json::from_value(json!({"saldo": "1.10"})).unwrap();
        let number: Movement = serde_json::from_value(json!({"saldo": 4.2})).unwrap();
        assert_eq!(text.amount_display(), "1.10");
        assert_eq!(number.amount_display(), "4.2");
        assert_eq!(Movement::default().amount_display(), "N/A");
    }

    #[test]
    fn test_drifted_field_types_still_deserialize() {
        let page: MovementPage = serde_json::from_value(json!({
            "listaMovimenti": [
                {"dataIngresso": "2024-03-05", "saldo": "2.50"},
                {"dataIngresso": 1709596800000u64, "inizioTratta": {"codice": "0421", "nome": "MILANO"}},
                {"dataUscita": ["2024-03-06"], "fineTratta": 7, "targa": {"paese": "I"}}
            ]
        }))
        .unwrap();
        assert_eq!(page.movements.len(), 3);
        let drifted = &page.movements[1];
        assert_eq!(drifted.resolved_date_value(), Some(&json!(1709596800000u64)));
        assert_eq!(drifted.resolved_date(), None);
        assert_eq!(drifted.entry_point_display(), r#"{"codice":"0421","nome":"MILANO"}"#);
        assert_eq!(page.movements[2].exit_point_display(), "7");
    }

    #[test]
    fn test_null_fields_survive_report_copy() {
        let movement: Movement = serde_json::from_value(json!({
            "dataIngresso": "2024-03-05",
            "dataUscita": null,
            "fineTratta": null,
            "saldo": "2.50",
            "note": null
        }))
        .unwrap();
        assert_eq!(movement.exit_date, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(movement.for_report(0)).unwrap(),
            json!({
                "dataIngresso": "2024-03-05",
                "dataUscita": null,
                "fineTratta": null,
                "saldo": "2.50",
                "note": null,
                "checked": true,
                "id": "0"
            })
        );
    }

    #[test]
    fn test_null_entry_date_falls_back_to_exit() {
        let movement: Movement =
            serde_json::from_value(json!({"dataIngresso": null, "dataUscita": "2024-01-03"}))
                .unwrap();
        assert_eq!(movement.resolved_date(), Some("2024-01-03"));
    }

    #[test]
    fn test_page_tolerates_missing_and_null_list() {
        let missing: MovementPage = serde_json::from_value(json!({"dispositivi": []})).unwrap();
        let null: MovementPage = serde_json::from_value(json!({"listaMovimenti": null})).unwrap();
        assert!(missing.movements.is_empty());
        assert!(null.movements.is_empty());
        assert_eq!(missing.devices, Some(json!([])));
    }

    #[test]
    fn test_payment_status_codes_pass_through() {
        assert_eq!(PaymentStatus::join(&PaymentStatus::default_filter()), "0,1,3,4");
        assert_eq!(PaymentStatus::from("1"), PaymentStatus::Charged);
        assert_eq!(PaymentStatus::from("7"), PaymentStatus::Other("7".into()));
    }

    #[test]
    fn test_default_query_string() {
        let query = MovementQuery::default();
        assert_eq!(
            query.to_query_string(),
            "offset=1&limite=100&intervallo=ULTIMO_ANNO&ordinaPer=date-D&statoPagamento=0%2C1%2C3%2C4"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let query = MovementQuery::builder(&ClientConfig::default())
            .offset(11)
            .limit(10)
            .payment_status(vec![PaymentStatus::Charged])
            .build();
        assert_eq!(query.offset, 11);
        assert_eq!(query.limit, 10);
        assert_eq!(query.interval, "ULTIMO_ANNO");
        assert!(query.to_query_string().ends_with("statoPagamento=1"));
    }
}
