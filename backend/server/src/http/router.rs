use axum::{
    routing::{get, post},
    Router,
};

use super::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/callback/paysera",
            get(handlers::callbacks::callback).post(handlers::callbacks::callback),
        )
        .route("/return/paysera", get(handlers::callbacks::payment_return))
        .route("/payments/process", post(handlers::payments::process))
        .route("/payments/refund", post(handlers::payments::refund))
        .route("/payments/void", post(handlers::payments::void))
        .route("/settings/schema", get(handlers::settings::schema))
        .route("/settings/validate", post(handlers::settings::validate))
        .with_state(state)
}
