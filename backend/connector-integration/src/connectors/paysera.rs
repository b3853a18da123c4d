pub mod constants;
pub mod transformers;


use std::sync::Arc;

use async_trait::async_trait;
use common_enums::{SettingsFieldKind, TransactionStatus};
use common_utils::{date_time, generate_alphanumeric, CustomResult, MinorUnit, ValidationError};
use domain_types::{
    connector_types::{CallbackOutcome, ProcessResponse, RequestContext, SettingsField},
    errors::{ConnectorError, SignatureError},
    router_data::{GatewaySettings, GatewaySettingsInput, SettingsValidation},
    types::{
        ActionResponse, GatewayResponse, PaymentIntent, PaymentRequest, RefundData,
        TransactionResult, VoidData,
    },
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::Secret;
use interfaces::connector_types::{ClientLookup, NonmerchantGateway, RedirectGenerator};
use rust_decimal::Decimal;

use self::transformers::PayseraCallbackData;
use crate::utils;

/// A settings rule: field, rule name, predicate that must hold, message on failure.
type SettingsRule = (
    &'static str,
    &'static str,
    fn(&Paysera, &GatewaySettingsInput) -> bool,
    &'static str,
);

/// Paysera hosted payment page gateway.
#[derive(Clone)]
pub struct Paysera {
    redirect: Arc<dyn RedirectGenerator>,
    client_lookup: Arc<dyn ClientLookup>,
    /// Server to server callback endpoint handed to the processor
    callback_url: String,
}

impl Paysera {
    pub fn new(
        redirect: Arc<dyn RedirectGenerator>,
        client_lookup: Arc<dyn ClientLookup>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            redirect,
            client_lookup,
            callback_url: callback_url.into(),
        }
    }

    /// Signs a synthetic payment with the given credentials so bad ones are
    /// caught before they are stored.
    pub fn validate_connection(
        &self,
        project_id: &str,
        project_password: &str,
    ) -> CustomResult<(), ConnectorError> {
        let intent = PaymentIntent {
            project_id: project_id.to_string(),
            project_secret: Secret::new(project_password.to_string()),
            order_id: constants::SELF_TEST_ORDER_ID.to_string(),
            amount: MinorUnit::new(constants::SELF_TEST_AMOUNT),
            currency: constants::SELF_TEST_CURRENCY.to_string(),
            buyer_country: Some(constants::SELF_TEST_COUNTRY.to_string()),
            description: None,
            accept_url: self.callback_url.clone(),
            cancel_url: self.callback_url.clone(),
            callback_url: self.callback_url.clone(),
            sandbox: true,
        };
        let url = self.redirect.redirect_url(&intent)?;
        if url.is_empty() {
            return Err(report!(ConnectorError::FailedToObtainIntegrationUrl));
        }
        Ok(())
    }

    /// Assembles the outbound payment for one checkout attempt.
    pub fn build_intent(
        &self,
        settings: &GatewaySettings,
        request: &mut PaymentRequest,
    ) -> CustomResult<PaymentIntent, ConnectorError> {
        if request.amount.is_sign_negative() {
            return Err(report!(ConnectorError::InvalidDataFormat {
                field_name: "amount"
            }));
        }
        let amount = MinorUnit::from_major_unit(request.amount)
            .change_context(ConnectorError::InvalidDataFormat {
                field_name: "amount",
            })?;
        // WebToPay has no recurring parameters: the rounded amount stays on the
        // request for the caller and is not sent to the processor
        if let Some(recur) = request.options.recur.as_mut() {
            recur.amount = common_utils::types::round_major_unit(recur.amount);
        }

        let token = utils::encode_invoices(&request.invoices);
        let return_url = request
            .options
            .return_url
            .as_deref()
            .ok_or_else(utils::missing_field_err("options.return_url"))?;
        let accept_url = utils::append_query_param(
            return_url,
            constants::INVOICES_PARAM,
            &token,
            "options.return_url",
        )?;
        let callback_url = utils::append_query_param(
            &self.callback_url,
            constants::INVOICES_PARAM,
            &token,
            "callback_url",
        )?;

        Ok(PaymentIntent {
            project_id: settings.project_id.clone(),
            project_secret: settings.project_password.clone(),
            order_id: Self::order_id(request.contact.client_id.as_deref()),
            amount,
            currency: request.currency.clone(),
            buyer_country: request.contact.country.clone(),
            description: request.options.description.clone(),
            cancel_url: accept_url.clone(),
            accept_url,
            callback_url,
            sandbox: settings.is_sandbox(),
        })
    }

    /// `{client_id}-{unix timestamp}-{random suffix}`. Everything before the
    /// first hyphen is read back as the client id.
    fn order_id(client_id: Option<&str>) -> String {
        format!(
            "{}-{}-{}",
            client_id.unwrap_or_default(),
            date_time::now_unix_timestamp(),
            generate_alphanumeric(constants::ORDER_ID_SUFFIX_LENGTH)
        )
    }

    /// Authenticates the processor parameters carried by `context`.
    pub fn validate_response(
        context: &RequestContext,
        settings: &GatewaySettings,
    ) -> CustomResult<PayseraCallbackData, SignatureError> {
        transformers::validate_and_parse(
            &context.params(),
            &settings.project_id,
            &settings.project_password,
        )
    }

    /// Client id confirmed by the lookup, taken from the part of the order id
    /// before the first hyphen.
    pub async fn recover_client_id(&self, order_id: Option<&str>) -> Option<String> {
        let order_id = order_id?;
        let candidate = order_id
            .split_once('-')
            .map_or(order_id, |(client_id, _)| client_id)
            .trim();
        if candidate.is_empty() {
            return None;
        }
        self.client_lookup
            .exists(candidate)
            .await
            .then(|| candidate.to_string())
    }

    /// Caller facing record of a validated callback.
    pub async fn normalize(
        &self,
        response: GatewayResponse,
        invoices_token: Option<&str>,
    ) -> TransactionResult {
        let client_id = self.recover_client_id(response.order_id.as_deref()).await;
        TransactionResult {
            client_id,
            amount: response.amount.map(MinorUnit::to_major_unit),
            currency: response.currency,
            invoices: utils::decode_invoices(invoices_token.unwrap_or_default()),
            status: TransactionStatus::Approved,
            reference_id: response.order_id.clone(),
            transaction_id: response.request_id,
            parent_transaction_id: None,
        }
    }

    fn settings_rules() -> [SettingsRule; 4] {
        [
            (
                "project_id",
                "empty",
                |_: &Self, input: &GatewaySettingsInput| !input.project_id().trim().is_empty(),
                constants::PROJECT_ID_EMPTY,
            ),
            (
                "project_password",
                "empty",
                |_: &Self, input: &GatewaySettingsInput| !input.project_password().is_empty(),
                constants::PROJECT_PASSWORD_EMPTY,
            ),
            (
                "project_password",
                "valid",
                |gateway: &Self, input: &GatewaySettingsInput| {
                    gateway
                        .validate_connection(input.project_id(), input.project_password())
                        .is_ok()
                },
                constants::PROJECT_PASSWORD_INVALID,
            ),
            (
                "sandbox",
                "valid",
                |_: &Self, input: &GatewaySettingsInput| {
                    matches!(input.sandbox.as_deref(), None | Some("true" | "false"))
                },
                constants::SANDBOX_INVALID,
            ),
        ]
    }

    fn unsupported(flow: &str) -> error_stack::Report<ConnectorError> {
        report!(ConnectorError::FlowNotSupported {
            flow: flow.to_string(),
            connector: constants::CONNECTOR_NAME.to_string(),
        })
    }
}

#[async_trait]
impl NonmerchantGateway for Paysera {
    fn id(&self) -> &'static str {
        constants::CONNECTOR_NAME
    }

    fn settings_schema(&self) -> Vec<SettingsField> {
        vec![
            SettingsField {
                name: "project_id",
                label: "Project ID",
                kind: SettingsFieldKind::Text,
                encrypted: false,
                options: Vec::new(),
            },
            SettingsField {
                name: "project_password",
                label: "Project Password",
                kind: SettingsFieldKind::Password,
                encrypted: true,
                options: Vec::new(),
            },
            SettingsField {
                name: "sandbox",
                label: "Sandbox",
                kind: SettingsFieldKind::Checkbox,
                encrypted: false,
                options: vec!["true", "false"],
            },
        ]
    }

    fn encryptable_fields(&self) -> &'static [&'static str] {
        &["project_password"]
    }

    fn edit_settings(&self, mut input: GatewaySettingsInput) -> SettingsValidation {
        if input.sandbox.is_none() {
            input.sandbox = Some(constants::DEFAULT_SANDBOX.to_string());
        }

        // only the first failing rule of a field is reported
        let mut errors: Vec<ValidationError> = Vec::new();
        for (field, rule, holds, message) in Self::settings_rules() {
            if errors.iter().any(|error| error.field == field) {
                continue;
            }
            if !holds(self, &input) {
                errors.push(ValidationError::new(field, rule, message));
            }
        }

        SettingsValidation {
            meta: input,
            errors,
        }
    }

    fn build_payment(
        &self,
        context: &RequestContext,
        settings: &GatewaySettings,
        mut request: PaymentRequest,
    ) -> CustomResult<ProcessResponse, ConnectorError> {
        let intent = self.build_intent(settings, &mut request)?;

        if context.query_param(constants::PROCEED_PARAM) != Some("true") {
            let uri = context.uri.as_deref().unwrap_or_default();
            let separator = if uri.contains('?') { '&' } else { '?' };
            return Ok(ProcessResponse::Confirm {
                proceed_url: format!("{uri}{separator}{}=true", constants::PROCEED_PARAM),
            });
        }

        tracing::info!(
            tags = "OUTGOING_REDIRECT",
            order_id = %intent.order_id,
            amount = %intent.amount,
            currency = %intent.currency,
            sandbox = intent.sandbox,
        );
        let url = self.redirect.redirect_url(&intent)?;
        Ok(ProcessResponse::Redirect { url })
    }

    async fn validate_callback(
        &self,
        context: &RequestContext,
        settings: &GatewaySettings,
    ) -> CallbackOutcome {
        let uri = context.uri.as_deref().unwrap_or_default();
        let response = match Self::validate_response(context, settings) {
            Ok(callback) => {
                let success = callback.is_successful();
                tracing::info!(
                    tags = "CALLBACK",
                    uri,
                    success,
                    callback_type = ?callback.callback_type(),
                    response = ?callback,
                );
                if !success {
                    return CallbackOutcome::Rejected;
                }
                GatewayResponse::from(callback)
            }
            Err(error) => {
                tracing::warn!(tags = "CALLBACK", uri, success = false, error = ?error);
                return CallbackOutcome::Rejected;
            }
        };

        let params = context.params();
        let transaction = self
            .normalize(
                response,
                params.get(constants::INVOICES_PARAM).map(String::as_str),
            )
            .await;
        CallbackOutcome::Accepted {
            transaction,
            acknowledgement: constants::CALLBACK_ACKNOWLEDGEMENT,
        }
    }

    fn handle_return(
        &self,
        context: &RequestContext,
        settings: &GatewaySettings,
    ) -> TransactionResult {
        let response = Self::validate_response(context, settings)
            .inspect_err(|error| {
                tracing::warn!(
                    tags = "RETURN",
                    uri = context.uri.as_deref().unwrap_or_default(),
                    error = ?error,
                );
            })
            .ok()
            .map(GatewayResponse::from);

        let status = if response.is_some() {
            TransactionStatus::Approved
        } else {
            TransactionStatus::Declined
        };
        let (amount, currency, transaction_id) = match response {
            Some(response) => (
                response.amount.map(MinorUnit::to_major_unit),
                response.currency,
                response.request_id,
            ),
            None => (None::<Decimal>, None, None),
        };

        TransactionResult {
            client_id: context
                .query_param(constants::CLIENT_ID_PARAM)
                .map(str::to_string),
            amount,
            currency,
            invoices: utils::decode_invoices(
                context
                    .query_param(constants::INVOICES_PARAM)
                    .unwrap_or_default(),
            ),
            status,
            reference_id: None,
            transaction_id,
            parent_transaction_id: None,
        }
    }

    fn refund(&self, _data: RefundData) -> CustomResult<ActionResponse, ConnectorError> {
        Err(Self::unsupported("refund"))
    }

    fn void(&self, _data: VoidData) -> CustomResult<ActionResponse, ConnectorError> {
        Err(Self::unsupported("void"))
    }
}
