#![allow(clippy::unwrap_used)]

use common_utils::Method;
use domain_types::types::Proxy;
use external_services::ApiClient;
use wiremock::{
    matchers::{body_string, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), &Proxy::default()).unwrap()
}

#[tokio::test]
async fn get_places_body_in_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payments"))
        .and(query_param("orderid", "42-1700000000"))
        .and(query_param("paytext", "two words"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-trace", "abc")
                .set_body_string("{\"ok\":true}"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send(
            "payments",
            [("orderid", "42-1700000000"), ("paytext", "two words")],
            Method::Get,
        )
        .await;

    assert_eq!(result.status_code(), Some(200));
    assert_eq!(result.body, "{\"ok\":true}");
    assert!(result.headers.iter().any(|line| line == "x-trace: abc"));
    assert!(!result.is_transport_failure());
}

#[tokio::test]
async fn delete_places_body_in_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/payments/7"))
        .and(query_param("reason", "duplicate"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send("/payments/7", [("reason", "duplicate")], Method::Delete)
        .await;

    assert_eq!(result.status_code(), Some(204));
    assert_eq!(result.body, "");
}

#[tokio::test]
async fn post_places_body_in_form_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("amount=1000&paytext=two+words"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send(
            "payments",
            [("amount", "1000"), ("paytext", "two words")],
            Method::Post,
        )
        .await;

    assert_eq!(result.status_code(), Some(201));
    assert_eq!(result.body, "created");
}

#[tokio::test]
async fn put_uses_form_payload_as_well() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/clients/3"))
        .and(body_string("name=Jane"))
        .respond_with(ResponseTemplate::new(200).set_body_string("updated"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send("clients/3", [("name", "Jane")], Method::Put)
        .await;

    assert_eq!(result.body, "updated");
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"error\":\"missing\"}"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send("unknown", Vec::<(String, String)>::new(), Method::Get)
        .await;

    assert_eq!(result.status_code(), Some(404));
    assert!(!result.is_transport_failure());
}

#[tokio::test]
async fn unreachable_host_yields_fixed_failure_payload() {
    let client = ApiClient::new("http://127.0.0.1:1", &Proxy::default()).unwrap();

    let result = client
        .send("payments", [("amount", "1")], Method::Post)
        .await;

    assert!(result.headers.is_empty());
    assert!(result.is_transport_failure());
    let payload = result.json().unwrap();
    assert_eq!(payload["status"], 500);
    assert_eq!(
        payload["message"],
        "An internal error occurred, or the server did not respond to the request."
    );
}
