use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{OriginalUri, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use domain_types::types::TransactionResult;

use crate::http::{state::AppState, utils::request_context};

/// Server to server notification from the processor. Always answers 200: the
/// acknowledgement body is written only for accepted notifications, which is what
/// stops the processor from redelivering.
pub async fn callback(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let context = request_context(&uri, query, &body);
    let outcome = state
        .gateway
        .validate_callback(&context, &state.settings)
        .await;

    match (outcome.acknowledgement(), outcome.transaction()) {
        (Some(acknowledgement), Some(transaction)) => {
            tracing::info!(
                tags = "TRANSACTION",
                status = %transaction.status,
                reference_id = ?transaction.reference_id,
                transaction_id = ?transaction.transaction_id,
                client_id = ?transaction.client_id,
                "callback accepted"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                acknowledgement,
            )
                .into_response()
        }
        _ => StatusCode::OK.into_response(),
    }
}

/// Payer's browser coming back from the hosted payment page.
pub async fn payment_return(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<HashMap<String, String>>,
) -> Json<TransactionResult> {
    let context = request_context(&uri, query, &[]);
    Json(state.gateway.handle_return(&context, &state.settings))
}
