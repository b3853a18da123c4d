use std::{str::FromStr, time::Duration};

use common_utils::{
    request::{Method, Request, RequestBuilder},
    CustomResult,
};
use domain_types::{
    errors::ApiClientError,
    types::{Proxy, RawHttpResult},
};
use error_stack::{report, ResultExt};
use reqwest::Client;
use serde_json::{json, Value};

/// Upper bound on establishing a connection, in seconds
const CONNECT_TIMEOUT_SECS: u64 = 30;
const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// HTTP client for one processor API. Every call is a single round trip: no
/// retries, and transport failures come back as [`RawHttpResult::no_response`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, proxy: &Proxy) -> CustomResult<Self, ApiClientError> {
        let client = get_client_builder(proxy)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .inspect_err(|err| {
                info_log(
                    "ERROR",
                    &json!(format!("Failed to construct base client. Error: {:?}", err)),
                );
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Sends `body` to `{base_url}/{route}`. GET and DELETE carry it as a query
    /// string, every other method as a form encoded payload.
    pub async fn send<K, V>(
        &self,
        route: &str,
        body: impl IntoIterator<Item = (K, V)>,
        method: Method,
    ) -> RawHttpResult
    where
        K: Into<String>,
        V: Into<String>,
    {
        let url = format!("{}/{}", self.base_url, route.trim_start_matches('/'));
        let request = RequestBuilder::new()
            .method(method)
            .url(&url)
            .params(body)
            .build();

        match call_connector_api(&self.client, request).await {
            Ok(response) => response,
            Err(error) => {
                error_log(
                    "REQUEST_FAILURE",
                    &json!(format!("Unable to send request to connector: {error:?}")),
                );
                RawHttpResult::no_response()
            }
        }
    }
}

pub async fn call_connector_api(
    client: &Client,
    request: Request,
) -> CustomResult<RawHttpResult, ApiClientError> {
    let mut url =
        reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;
    let method = reqwest::Method::from_str(&request.method.to_string())
        .change_context(ApiClientError::UrlEncodingFailed)?;

    debug_log(
        "OUTGOING_REQUEST",
        &json!({ "method": request.method.to_string(), "url": url.as_str() }),
    );

    let request = if request.method.sends_params_in_query() {
        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(request.params.iter());
        }
        client.request(method, url)
    } else {
        let payload = serde_urlencoded::to_string(&request.params)
            .change_context(ApiClientError::UrlEncodingFailed)?;
        client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, FORM_URL_ENCODED)
            .body(payload)
    };

    let response = request.send().await.map_err(|error| {
        let api_error = match error {
            error if error.is_timeout() => ApiClientError::RequestTimeoutReceived,
            _ => ApiClientError::RequestNotSent(error.to_string()),
        };
        report!(api_error)
    })?;

    handle_response(response).await
}

/// Flattens the response back into raw header lines followed by the body.
async fn handle_response(
    response: reqwest::Response,
) -> CustomResult<RawHttpResult, ApiClientError> {
    let status = response.status();
    let mut raw = format!(
        "{:?} {} {}\r\n",
        response.version(),
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );
    for (name, value) in response.headers() {
        raw.push_str(name.as_str());
        raw.push_str(": ");
        raw.push_str(&String::from_utf8_lossy(value.as_bytes()));
        raw.push_str("\r\n");
    }
    raw.push_str("\r\n");

    let body = response
        .text()
        .await
        .change_context(ApiClientError::ResponseDecodingFailed)?;
    raw.push_str(&body);

    info_log(
        "INCOMING_RESPONSE",
        &json!({ "status_code": status.as_u16() }),
    );

    Ok(RawHttpResult::from_raw_response(&raw))
}

/// Certificate and hostname verification stay on, TLS 1.2 is the floor and
/// connecting may take at most [`CONNECT_TIMEOUT_SECS`].
fn get_client_builder(proxy_config: &Proxy) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let mut client_builder = Client::builder()
        .use_rustls_tls()
        .danger_accept_invalid_certs(false)
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or_default(),
        ));

    // Proxy all HTTPS traffic through the configured HTTPS proxy
    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::ClientConstructionFailed)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTPS proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    // Proxy all HTTP traffic through the configured HTTP proxy
    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::ClientConstructionFailed)
                .inspect_err(|err| {
                    info_log(
                        "PROXY_ERROR",
                        &json!(format!("HTTP proxy configuration error. Error: {:?}", err)),
                    );
                })?,
        );
    }

    Ok(client_builder)
}

#[inline]
pub fn debug_log(action: &str, message: &Value) {
    tracing::debug!(tags = %action, json_value= %message);
}

#[inline]
pub fn info_log(action: &str, message: &Value) {
    tracing::info!(tags = %action, json_value= %message);
}

#[inline]
pub fn error_log(action: &str, message: &Value) {
    tracing::error!(tags = %action, json_value= %message);
}
