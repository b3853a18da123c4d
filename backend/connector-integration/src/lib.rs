pub mod connectors;
pub mod utils;

pub use connectors::paysera::transformers::WebToPayRedirect;
