use common_enums::TransactionStatus;
use common_utils::{consts, MinorUnit};
use hyperswitch_masking::Secret;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice and the share of the payment applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRef {
    pub id: String,
    pub amount: Decimal,
}

impl InvoiceRef {
    pub fn new(id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub client_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// ISO 3166 alpha-2 country code
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringOptions {
    pub amount: Decimal,
    pub term: u32,
    pub period: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentOptions {
    pub description: Option<String>,
    pub return_url: Option<String>,
    pub recur: Option<RecurringOptions>,
}

/// Everything the caller knows about a checkout attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub contact: Contact,
    pub amount: Decimal,
    /// ISO 4217 currency code
    pub currency: String,
    #[serde(default)]
    pub invoices: Vec<InvoiceRef>,
    #[serde(default)]
    pub options: PaymentOptions,
}

/// Canonical outbound payment, built once per checkout attempt.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub project_id: String,
    pub project_secret: Secret<String>,
    pub order_id: String,
    pub amount: MinorUnit,
    pub currency: String,
    pub buyer_country: Option<String>,
    pub description: Option<String>,
    pub accept_url: String,
    pub cancel_url: String,
    pub callback_url: String,
    pub sandbox: bool,
}

/// Trusted view of a processor response. Only produced after the signature checked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub status: TransactionStatus,
    pub amount: Option<MinorUnit>,
    pub currency: Option<String>,
    pub order_id: Option<String>,
    pub request_id: Option<String>,
}

/// Caller facing transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub client_id: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub invoices: Vec<InvoiceRef>,
    pub status: TransactionStatus,
    pub reference_id: Option<String>,
    pub transaction_id: Option<String>,
    pub parent_transaction_id: Option<String>,
}

/// Outcome of a refund or void request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub status: TransactionStatus,
    pub reference_id: Option<String>,
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefundData {
    pub reference_id: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VoidData {
    pub reference_id: String,
    pub transaction_id: String,
    pub notes: Option<String>,
}

/// Proxy settings of the outbound HTTP client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Proxy {
    pub http_url: Option<String>,
    pub https_url: Option<String>,
    pub idle_pool_connection_timeout: Option<u64>,
}

/// Raw outcome of one transport call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RawHttpResult {
    pub headers: Vec<String>,
    pub body: String,
}

impl RawHttpResult {
    /// Splits a raw multi-line response: the last line is the body, every line
    /// before it is a header line.
    pub fn from_raw_response(raw: &str) -> Self {
        let mut lines: Vec<String> = raw
            .split('\n')
            .map(|line| line.trim_end_matches('\r').to_owned())
            .collect();
        let body = lines.pop().unwrap_or_default();
        Self {
            headers: lines,
            body,
        }
    }

    /// Success shaped result standing in for a response that never arrived.
    pub fn no_response() -> Self {
        let payload = serde_json::json!({
            "error": consts::NO_RESPONSE_ERROR,
            "message": consts::NO_RESPONSE_MESSAGE,
            "status": consts::NO_RESPONSE_STATUS,
        });
        Self {
            headers: Vec::new(),
            body: payload.to_string(),
        }
    }

    /// Status code from the leading `HTTP/x y reason` line.
    pub fn status_code(&self) -> Option<u16> {
        self.headers
            .first()
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|code| code.parse().ok())
    }

    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.body.trim()).ok()
    }

    pub fn is_transport_failure(&self) -> bool {
        self.json().is_some_and(|value| {
            value.get("status").and_then(serde_json::Value::as_u64)
                == Some(u64::from(consts::NO_RESPONSE_STATUS))
                && value.get("error").and_then(serde_json::Value::as_str)
                    == Some(consts::NO_RESPONSE_ERROR)
        })
    }
}
