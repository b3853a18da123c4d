//! Common utilities for the gateway crates

pub mod consts;
pub mod crypto;
pub mod errors;
pub mod request;
pub mod types;

pub use errors::{CryptoError, CustomResult, ParsingError, ValidationError};
pub use request::{Method, Request, RequestBuilder};
pub use types::MinorUnit;

/// Random identifier of `length` characters drawn from `[0-9a-zA-Z]`.
pub fn generate_alphanumeric(length: usize) -> String {
    use rand::seq::SliceRandom;

    let mut rng = rand::thread_rng();
    (0..length)
        .filter_map(|_| consts::ALPHABETS.choose(&mut rng))
        .collect()
}

pub mod date_time {
    use time::OffsetDateTime;

    /// Return the UNIX timestamp of the current date and time in UTC
    pub fn now_unix_timestamp() -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}
