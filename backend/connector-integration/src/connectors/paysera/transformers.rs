use std::collections::HashMap;

use common_enums::TransactionStatus;
use common_utils::{crypto, CustomResult, MinorUnit};
use domain_types::{
    errors::{ConnectorError, SignatureError},
    types::{GatewayResponse, PaymentIntent},
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::{
    connector_types::RedirectGenerator,
    verification::{SourceVerification, SourceVerificationSecrets},
};
use serde::{Deserialize, Serialize};

use super::constants;

/// Outbound WebToPay parameters, serialised as a query string before encoding.
#[derive(Debug, Serialize)]
pub struct PayseraPaymentRequest {
    pub projectid: String,
    pub orderid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paytext: Option<String>,
    pub amount: MinorUnit,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub accepturl: String,
    pub cancelurl: String,
    pub callbackurl: String,
    pub test: u8,
    pub version: &'static str,
}

impl TryFrom<&PaymentIntent> for PayseraPaymentRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(intent: &PaymentIntent) -> Result<Self, Self::Error> {
        let project_id = intent.project_id.trim();
        if project_id.is_empty() || !project_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(report!(ConnectorError::InvalidConnectorConfig {
                config: "project_id"
            }));
        }
        if intent.project_secret.peek().is_empty() {
            return Err(report!(ConnectorError::InvalidConnectorConfig {
                config: "project_password"
            }));
        }

        Ok(Self {
            projectid: project_id.to_string(),
            orderid: intent.order_id.clone(),
            paytext: intent.description.clone(),
            amount: intent.amount,
            currency: intent.currency.clone(),
            country: intent.buyer_country.clone(),
            accepturl: intent.accept_url.clone(),
            cancelurl: intent.cancel_url.clone(),
            callbackurl: intent.callback_url.clone(),
            test: u8::from(intent.sandbox),
            version: constants::API_VERSION,
        })
    }
}

/// Builds hosted payment page URLs the way the WebToPay library does:
/// `data` is the URL-safe base64 of the parameters and `sign` is
/// `md5(data + project password)`.
#[derive(Debug, Clone)]
pub struct WebToPayRedirect {
    pay_url: String,
}

impl WebToPayRedirect {
    pub fn new(pay_url: impl Into<String>) -> Self {
        Self {
            pay_url: pay_url.into(),
        }
    }
}

impl RedirectGenerator for WebToPayRedirect {
    fn redirect_url(&self, intent: &PaymentIntent) -> CustomResult<String, ConnectorError> {
        let request = PayseraPaymentRequest::try_from(intent)?;
        let query = serde_urlencoded::to_string(&request)
            .change_context(ConnectorError::RequestEncodingFailed)?;
        let data = crypto::encode_safe_url_base64(query.as_bytes());
        let sign = sign_data(&data, &intent.project_secret);

        let mut url = url::Url::parse(&self.pay_url)
            .change_context(ConnectorError::FailedToObtainIntegrationUrl)
            .attach_printable("connectors.paysera.pay_url is not an absolute URL")?;
        url.query_pairs_mut()
            .append_pair(constants::DATA_PARAM, &data)
            .append_pair("sign", &sign);
        Ok(url.into())
    }
}

/// `md5_hex(data + password)`, used for both the outbound `sign` and the inbound `ss1`.
pub fn sign_data(data: &str, password: &Secret<String>) -> String {
    let mut message = data.as_bytes().to_vec();
    message.extend_from_slice(password.peek().as_bytes());
    crypto::md5_hex(&message)
}

/// Checks `ss1` against `md5(data + project password)`.
#[derive(Debug, Clone, Copy)]
pub struct PayseraSs1Verification;

impl SourceVerification for PayseraSs1Verification {
    type Payload = HashMap<String, String>;

    fn get_secrets(
        &self,
        secrets: &SourceVerificationSecrets,
    ) -> CustomResult<Vec<u8>, SignatureError> {
        Ok(secrets.project_password.peek().as_bytes().to_vec())
    }

    fn get_algorithm(
        &self,
    ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, SignatureError> {
        Ok(Box::new(crypto::Md5))
    }

    fn get_signature(
        &self,
        payload: &Self::Payload,
        _secrets: &[u8],
    ) -> CustomResult<Vec<u8>, SignatureError> {
        let ss1 = non_empty(payload, constants::SS1_PARAM).ok_or_else(|| {
            let report = report!(SignatureError::MissingSignature);
            if payload.contains_key(constants::SS2_PARAM) {
                report.attach_printable("only ss1 signatures are verified, ss2 is not supported")
            } else {
                report
            }
        })?;
        hex::decode(ss1.trim()).change_context(SignatureError::InvalidSignature)
    }

    fn get_message(
        &self,
        payload: &Self::Payload,
        secrets: &[u8],
    ) -> CustomResult<Vec<u8>, SignatureError> {
        let data = non_empty(payload, constants::DATA_PARAM)
            .ok_or_else(|| report!(SignatureError::MissingData))?;
        let mut message = data.as_bytes().to_vec();
        message.extend_from_slice(secrets);
        Ok(message)
    }
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayseraCallbackType {
    Macro,
    Micro,
}

/// Decoded contents of the callback `data` parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayseraCallbackData {
    pub projectid: Option<String>,
    pub orderid: Option<String>,
    pub requestid: Option<String>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub callback_type: Option<String>,
    pub to: Option<String>,
    pub sms: Option<String>,
    pub from: Option<String>,
}

impl PayseraCallbackData {
    pub fn callback_type(&self) -> PayseraCallbackType {
        match self.callback_type.as_deref() {
            Some("micro") => PayseraCallbackType::Micro,
            Some(_) => PayseraCallbackType::Macro,
            None if self.to.is_some() || self.sms.is_some() || self.from.is_some() => {
                PayseraCallbackType::Micro
            }
            None => PayseraCallbackType::Macro,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.status.as_deref().map(str::trim) == Some(constants::STATUS_SUCCESS)
    }
}

pub fn map_status(status: Option<&str>) -> TransactionStatus {
    match status.map(str::trim) {
        Some(constants::STATUS_SUCCESS) => TransactionStatus::Approved,
        Some(constants::STATUS_PENDING) | Some(constants::STATUS_ACCEPTED) => {
            TransactionStatus::Pending
        }
        _ => TransactionStatus::Declined,
    }
}

impl From<PayseraCallbackData> for GatewayResponse {
    fn from(data: PayseraCallbackData) -> Self {
        Self {
            status: map_status(data.status.as_deref()),
            amount: data
                .amount
                .as_deref()
                .and_then(|amount| amount.trim().parse::<MinorUnit>().ok()),
            currency: data.currency,
            order_id: data.orderid,
            request_id: data.requestid,
        }
    }
}

/// Authenticates inbound processor parameters and decodes their payload.
pub fn validate_and_parse(
    params: &HashMap<String, String>,
    project_id: &str,
    project_password: &Secret<String>,
) -> CustomResult<PayseraCallbackData, SignatureError> {
    if non_empty(params, constants::DATA_PARAM).is_none() {
        return Err(report!(SignatureError::MissingData));
    }

    let secrets = SourceVerificationSecrets {
        project_id: project_id.to_string(),
        project_password: project_password.clone(),
    };
    if !PayseraSs1Verification.verify(&secrets, params)? {
        return Err(report!(SignatureError::InvalidSignature));
    }

    let data = params
        .get(constants::DATA_PARAM)
        .ok_or_else(|| report!(SignatureError::MissingData))?;
    let decoded = crypto::decode_safe_url_base64(data)
        .change_context(SignatureError::MalformedPayload)?;
    let decoded =
        String::from_utf8(decoded).change_context(SignatureError::MalformedPayload)?;
    let callback: PayseraCallbackData = serde_urlencoded::from_str(&decoded)
        .change_context(SignatureError::MalformedPayload)?;

    match callback.projectid.as_deref().map(str::trim) {
        None | Some("") => Err(report!(SignatureError::MissingProjectId)),
        Some(received) if received != project_id.trim() => {
            Err(report!(SignatureError::ProjectIdMismatch)
                .attach_printable(format!("callback carries project {received}")))
        }
        Some(_) => Ok(callback),
    }
}
