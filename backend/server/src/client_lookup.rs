use std::collections::HashSet;

use async_trait::async_trait;
use common_utils::Method;
use external_services::ApiClient;
use interfaces::connector_types::ClientLookup;

/// Confirms clients against a billing API: `GET {lookup_url}/{client_id}`
/// answering 2xx means the client exists.
#[derive(Debug, Clone)]
pub struct HttpClientLookup {
    client: ApiClient,
}

impl HttpClientLookup {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientLookup for HttpClientLookup {
    async fn exists(&self, client_id: &str) -> bool {
        // ids come from processor supplied order ids and end up in a URL path
        if client_id.is_empty() || !client_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }

        let response = self
            .client
            .send(client_id, Vec::<(String, String)>::new(), Method::Get)
            .await;
        let exists = response
            .status_code()
            .is_some_and(|status| (200..300).contains(&status));

        tracing::debug!(client_id, exists, "client lookup");
        exists
    }
}

/// Fixed set of known client ids.
#[derive(Debug, Clone, Default)]
pub struct StaticClientLookup {
    known: HashSet<String>,
}

impl StaticClientLookup {
    pub fn new(known: impl IntoIterator<Item = String>) -> Self {
        Self {
            known: known.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ClientLookup for StaticClientLookup {
    async fn exists(&self, client_id: &str) -> bool {
        self.known.contains(client_id)
    }
}
