//! Commonly used constants

use base64::engine::{general_purpose::GeneralPurposeConfig, DecodePaddingMode, GeneralPurpose};

/// Standard alphabet, padding optional on decode.
pub const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// URL-safe alphabet, padding optional on decode.
pub const BASE64_ENGINE_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Characters to use for generating random identifiers
pub(crate) const ALPHABETS: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Header carrying the per request identifier
pub const X_REQUEST_ID: &str = "x-request-id";

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "GATEWAY";

/// Environment variable selecting the configuration file
pub const RUN_ENV: &str = "RUN_ENV";

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    /// Environment selected through `RUN_ENV`, falling back to development.
    pub fn current_env() -> Self {
        std::env::var(RUN_ENV)
            .ok()
            .and_then(|env| env.parse().ok())
            .unwrap_or_default()
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}

/// Error name of the payload returned when a request never produced a response
pub const NO_RESPONSE_ERROR: &str = "Transport Error";
/// Message of the payload returned when a request never produced a response
pub const NO_RESPONSE_MESSAGE: &str =
    "An internal error occurred, or the server did not respond to the request.";
/// Status marker of the payload returned when a request never produced a response
pub const NO_RESPONSE_STATUS: u16 = 500;
