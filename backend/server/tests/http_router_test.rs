#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common_utils::crypto;
use connector_integration::{
    connectors::{paysera::transformers::sign_data, Paysera},
    WebToPayRedirect,
};
use domain_types::router_data::GatewaySettings;
use gateway_server::{
    client_lookup::StaticClientLookup,
    http::{create_router, AppState},
};
use http_body_util::BodyExt;
use hyperswitch_masking::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;

const PASSWORD: &str = "router-test-password";

fn router() -> Router {
    let gateway = Paysera::new(
        Arc::new(WebToPayRedirect::new("https://bank.paysera.com/pay/")),
        Arc::new(StaticClientLookup::new(["42".to_string()])),
        "https://gateway.test/callback/paysera",
    );
    let settings = GatewaySettings {
        project_id: "123456".to_string(),
        project_password: Secret::new(PASSWORD.to_string()),
        sandbox: Some("true".to_string()),
    };
    create_router(AppState::new(Arc::new(gateway), settings))
}

/// Form encoded `data` and `ss1` for the given callback fields.
fn signed_form(fields: &[(&str, &str)], password: &str) -> String {
    let query = serde_urlencoded::to_string(fields).unwrap();
    let data = crypto::encode_safe_url_base64(query.as_bytes());
    let ss1 = sign_data(&data, &Secret::new(password.to_string()));
    serde_urlencoded::to_string([("data", data.as_str()), ("ss1", ss1.as_str())]).unwrap()
}

fn approved_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("projectid", "123456"),
        ("orderid", "42-1700000000-abc123"),
        ("requestid", "987654"),
        ("amount", "1050"),
        ("currency", "EUR"),
        ("status", "1"),
    ]
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn payment_body() -> Value {
    json!({
        "contact": { "client_id": "42", "country": "LT" },
        "amount": "10.50",
        "currency": "EUR",
        "invoices": [{ "id": "7", "amount": "10.50" }],
        "options": { "return_url": "https://billing.test/invoice/7" }
    })
}

#[tokio::test]
async fn health_reports_the_gateway() {
    let response = router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "paysera-gateway");
}

#[tokio::test]
async fn authentic_callback_is_acknowledged() {
    let request = Request::post("/callback/paysera")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(signed_form(&approved_fields(), PASSWORD)))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"OK");
}

#[tokio::test]
async fn callback_parameters_are_read_from_the_query_too() {
    let uri = format!(
        "/callback/paysera?{}",
        signed_form(&approved_fields(), PASSWORD)
    );

    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_bytes(response).await, b"OK");
}

#[tokio::test]
async fn forged_callback_gets_no_acknowledgement() {
    let request = Request::post("/callback/paysera")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(signed_form(&approved_fields(), "wrong-password")))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn pending_callback_gets_no_acknowledgement() {
    let mut fields = approved_fields();
    fields.retain(|(key, _)| *key != "status");
    fields.push(("status", "2"));
    let request = Request::post("/callback/paysera")
        .body(Body::from(signed_form(&fields, PASSWORD)))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn tampered_return_is_declined() {
    let uri = format!(
        "/return/paysera?{}&client_id=42",
        signed_form(&approved_fields(), "wrong-password")
    );

    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "declined");
    assert_eq!(body["client_id"], "42");
    assert!(body["transaction_id"].is_null());
}

#[tokio::test]
async fn signed_return_is_approved() {
    let uri = format!(
        "/return/paysera?{}&client_id=42",
        signed_form(&approved_fields(), PASSWORD)
    );

    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["status"], "approved");
    assert_eq!(body["transaction_id"], "987654");
    assert_eq!(body["currency"], "EUR");
}

#[tokio::test]
async fn process_asks_for_confirmation_before_redirecting() {
    let response = router()
        .oneshot(json_request("POST", "/payments/process", payment_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["action"], "confirm");
    assert_eq!(body["proceed_url"], "/payments/process?proceed=true");
}

#[tokio::test]
async fn confirmed_process_redirects_to_the_payment_page() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/payments/process?proceed=true",
            payment_body(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://bank.paysera.com/pay/?data="));
    assert!(location.contains("&sign="));
}

#[tokio::test]
async fn process_without_return_url_is_a_bad_request() {
    let mut body = payment_body();
    body["options"] = json!({});

    let response = router()
        .oneshot(json_request("POST", "/payments/process", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "400");
}

#[tokio::test]
async fn malformed_payment_body_is_rejected() {
    let response = router()
        .oneshot(json_request("POST", "/payments/process", json!({ "amount": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_are_validated() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/settings/validate",
            json!({ "project_id": "", "project_password": "", "sandbox": "maybe" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["project_id", "project_password", "sandbox"]);
    assert!(body["meta"].get("project_password").is_none());
}

#[tokio::test]
async fn valid_settings_default_the_sandbox_flag() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/settings/validate",
            json!({ "project_id": "123456", "project_password": "secret" }),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert!(body["errors"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["sandbox"], "false");
}

#[tokio::test]
async fn settings_schema_lists_encrypted_fields() {
    let response = router()
        .oneshot(Request::get("/settings/schema").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["gateway"], "paysera");
    assert_eq!(body["fields"].as_array().unwrap().len(), 3);
    assert_eq!(body["encryptable_fields"], json!(["project_password"]));
}

#[tokio::test]
async fn refund_and_void_are_not_implemented() {
    let refund = router()
        .oneshot(json_request(
            "POST",
            "/payments/refund",
            json!({ "reference_id": "42-1", "transaction_id": "987654", "amount": "1.00" }),
        ))
        .await
        .unwrap();
    assert_eq!(refund.status(), StatusCode::NOT_IMPLEMENTED);

    let void = router()
        .oneshot(json_request(
            "POST",
            "/payments/void",
            json!({ "reference_id": "42-1", "transaction_id": "987654" }),
        ))
        .await
        .unwrap();
    assert_eq!(void.status(), StatusCode::NOT_IMPLEMENTED);
}
