use async_trait::async_trait;
use common_utils::CustomResult;
use domain_types::{
    connector_types::{CallbackOutcome, ProcessResponse, RequestContext, SettingsField},
    errors::ConnectorError,
    router_data::{GatewaySettings, GatewaySettingsInput, SettingsValidation},
    types::{
        ActionResponse, PaymentIntent, PaymentRequest, RefundData, TransactionResult, VoidData,
    },
};

/// Contract a non-merchant (redirect based) gateway offers to the orchestrator.
#[async_trait]
pub trait NonmerchantGateway: Send + Sync {
    /// Identifier used in routes and logs
    fn id(&self) -> &'static str;

    fn settings_schema(&self) -> Vec<SettingsField>;

    /// Settings that must be stored encrypted
    fn encryptable_fields(&self) -> &'static [&'static str];

    fn edit_settings(&self, input: GatewaySettingsInput) -> SettingsValidation;

    fn build_payment(
        &self,
        context: &RequestContext,
        settings: &GatewaySettings,
        request: PaymentRequest,
    ) -> CustomResult<ProcessResponse, ConnectorError>;

    /// Server to server notification. Never fails: untrusted input is `Rejected`.
    async fn validate_callback(
        &self,
        context: &RequestContext,
        settings: &GatewaySettings,
    ) -> CallbackOutcome;

    /// Browser coming back from the hosted payment page. Untrusted input
    /// degrades to a declined record.
    fn handle_return(
        &self,
        context: &RequestContext,
        settings: &GatewaySettings,
    ) -> TransactionResult;

    fn refund(&self, data: RefundData) -> CustomResult<ActionResponse, ConnectorError>;

    fn void(&self, data: VoidData) -> CustomResult<ActionResponse, ConnectorError>;
}

/// Turns a payment intent into the URL of the processor's hosted payment page.
pub trait RedirectGenerator: Send + Sync {
    fn redirect_url(&self, intent: &PaymentIntent) -> CustomResult<String, ConnectorError>;
}

#[async_trait]
pub trait ClientLookup: Send + Sync {
    async fn exists(&self, client_id: &str) -> bool;
}
