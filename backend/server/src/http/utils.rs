use std::collections::HashMap;

use axum::{
    extract::{FromRequest, Request},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use domain_types::connector_types::RequestContext;
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON extractor that rejects with the common error body
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError {
                status: StatusCode::BAD_REQUEST,
                message: rejection.to_string(),
            }
            .into_response()),
        }
    }
}

/// Request data handed to the gateway. A form body that does not parse is
/// treated as empty.
pub fn request_context(uri: &Uri, query: HashMap<String, String>, body: &[u8]) -> RequestContext {
    let form = if body.is_empty() {
        HashMap::new()
    } else {
        serde_urlencoded::from_bytes(body).unwrap_or_default()
    };
    RequestContext {
        query,
        form,
        uri: uri.path_and_query().map(ToString::to_string),
    }
}
