#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConnectorError {
    #[error("Error while obtaining URL for the integration")]
    FailedToObtainIntegrationUrl,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid Data format")]
    InvalidDataFormat { field_name: &'static str },
    #[error("Invalid connector configuration: {config}")]
    InvalidConnectorConfig { config: &'static str },
    #[error("{flow} flow not supported by {connector} connector")]
    FlowNotSupported { flow: String, connector: String },
}

/// Raised when an inbound payload cannot be trusted.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("\"data\" parameter not found")]
    MissingData,
    #[error("Callback carries no signature")]
    MissingSignature,
    #[error("Invalid sign parameters, check the project password")]
    InvalidSignature,
    #[error("Callback payload could not be decoded")]
    MalformedPayload,
    #[error("Project ID not provided in callback")]
    MissingProjectId,
    #[error("Bad project ID in callback")]
    ProjectIdMismatch,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiClientError {
    #[error("URL encoding of request payload failed")]
    UrlEncodingFailed,
    #[error("Failed to construct API client")]
    ClientConstructionFailed,
    #[error("Failed to send request to connector {0}")]
    RequestNotSent(String),
    #[error("Server responded with Request Timeout")]
    RequestTimeoutReceived,
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
}
