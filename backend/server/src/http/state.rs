use std::sync::Arc;

use domain_types::router_data::GatewaySettings;
use interfaces::connector_types::NonmerchantGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn NonmerchantGateway>,
    pub settings: Arc<GatewaySettings>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn NonmerchantGateway>, settings: GatewaySettings) -> Self {
        Self {
            gateway,
            settings: Arc::new(settings),
        }
    }
}
