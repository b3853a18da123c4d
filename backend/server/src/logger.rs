pub mod config;
pub mod setup;
pub use setup::setup;

pub use tracing::{debug, error, event as log, info, warn};
