#![allow(dead_code)]
use libunipolmove::{ClientConfig, SessionCookies, UnipolMoveClient};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const CONTRACT: &str = "P000000000";
pub const SESSION_ID: &str = "00000000-0000-4000-8000-000000000000";
pub const COOKIE_HEADER: &str = "MRHSession=mrh-1; LastMRH_Session=last-1; isLogged=true";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn environment_body() -> String {
    json!({
        "production": true,
        "apiConnect": {
            "headers_ut_prv_mobility_service": {
                "x-ibm-client-id": "mov-id",
                "x-ibm-client-secret": "mov-secret"
            },
            "headers_us": {
                "x-ibm-client-id": "pdf-id",
                "x-ibm-client-secret": "pdf-secret"
            }
        }
    })
    .to_string()
}

pub fn mock_environment(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/app/config/environment.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(environment_body())
        .create()
}

pub fn config_for(server: &ServerGuard) -> ClientConfig {
    ClientConfig::default().with_base_url(server.url())
}

pub fn anonymous_client(server: &mut ServerGuard) -> UnipolMoveClient {
    let _environment = mock_environment(server);
    UnipolMoveClient::with_config(CONTRACT, config_for(server)).unwrap()
}

pub fn authenticated_client(server: &mut ServerGuard) -> UnipolMoveClient {
    let _environment = mock_environment(server);
    UnipolMoveClient::with_session(
        CONTRACT,
        config_for(server),
        Some(SessionCookies::new("mrh-1", "last-1")),
        Some(SESSION_ID.to_string()),
    )
    .unwrap()
}

pub fn movements_path() -> Matcher {
    Matcher::Regex(format!(
        "^/api/ut/prv/unipolmove/portale-tlpd/servizi-mobilita/v6/contratti/{}/movimenti",
        CONTRACT
    ))
}

pub fn pdf_path() -> String {
    format!(
        "/api/us/prv/tpd/telepedaggio-us/post-vendita/v1/contratti/{}/movimenti/stampa",
        CONTRACT
    )
}

/// A page body holding `count` movements numbered from `first`.
pub fn page_body(first: usize, count: usize) -> String {
    let movements: Vec<_> = (first..first + count)
        .map(|n| {
            json!({
                "dataIngresso": format!("2024-03-{:02}", (n % 28) + 1),
                "saldo": format!("{}.00", n),
                "progressivo": n
            })
        })
        .collect();
    json!({
        "dispositivi": [{"codice": "OBU-1"}],
        "listaMovimenti": movements,
        "totale": 5
    })
    .to_string()
}
