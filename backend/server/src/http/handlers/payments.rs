use std::collections::HashMap;

use axum::{
    extract::{OriginalUri, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use domain_types::{
    connector_types::ProcessResponse,
    types::{ActionResponse, PaymentRequest, RefundData, VoidData},
};

use crate::http::{error::HttpError, state::AppState, utils::request_context, ValidatedJson};

pub async fn process(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<HashMap<String, String>>,
    ValidatedJson(payload): ValidatedJson<PaymentRequest>,
) -> Result<Response, HttpError> {
    let context = request_context(&uri, query, &[]);
    let response = state
        .gateway
        .build_payment(&context, &state.settings, payload)?;

    Ok(match response {
        ProcessResponse::Redirect { url } => Redirect::to(&url).into_response(),
        confirm @ ProcessResponse::Confirm { .. } => Json(confirm).into_response(),
    })
}

pub async fn refund(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefundData>,
) -> Result<Json<ActionResponse>, HttpError> {
    Ok(Json(state.gateway.refund(payload)?))
}

pub async fn void(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VoidData>,
) -> Result<Json<ActionResponse>, HttpError> {
    Ok(Json(state.gateway.void(payload)?))
}
