#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid host for socket: {0}")]
    AddressError(#[from] std::net::AddrParseError),
    #[error("Failed while building the configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("Failed to construct the HTTP client: {0}")]
    HttpClientError(String),
    #[error("Error while creating the server: {0}")]
    IoError(#[from] std::io::Error),
}
