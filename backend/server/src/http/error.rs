use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_types::errors::ConnectorError;
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    code: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: ErrorDetail {
                message: self.message.clone(),
                code: format!("{}", self.status.as_u16()),
            },
        });
        (self.status, body).into_response()
    }
}

impl From<error_stack::Report<ConnectorError>> for HttpError {
    fn from(report: error_stack::Report<ConnectorError>) -> Self {
        let status = match report.current_context() {
            ConnectorError::FlowNotSupported { .. } => StatusCode::NOT_IMPLEMENTED,
            ConnectorError::MissingRequiredField { .. }
            | ConnectorError::InvalidDataFormat { .. } => StatusCode::BAD_REQUEST,
            ConnectorError::FailedToObtainIntegrationUrl
            | ConnectorError::RequestEncodingFailed
            | ConnectorError::InvalidConnectorConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!(error = ?report, "request failed");
        }
        Self {
            status,
            message: report.current_context().to_string(),
        }
    }
}
