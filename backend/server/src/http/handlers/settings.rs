use axum::{extract::State, Json};
use domain_types::router_data::{GatewaySettingsInput, SettingsValidation};
use serde_json::json;

use crate::http::{state::AppState, ValidatedJson};

pub async fn schema(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "gateway": state.gateway.id(),
        "fields": state.gateway.settings_schema(),
        "encryptable_fields": state.gateway.encryptable_fields(),
    }))
}

/// Evaluates submitted settings. The input comes back default filled, with the
/// password left out, next to the first failed rule of each field.
pub async fn validate(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<GatewaySettingsInput>,
) -> Json<SettingsValidation> {
    let validation = state.gateway.edit_settings(payload);
    tracing::info!(valid = validation.is_valid(), "settings validated");
    Json(validation)
}
