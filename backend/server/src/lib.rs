pub mod app;
pub mod client_lookup;
pub mod configs;
pub mod error;
pub mod http;
pub mod logger;
pub mod utils;

#[macro_export]
macro_rules! service_name {
    () => {
        env!("CARGO_CRATE_NAME")
    };
}
