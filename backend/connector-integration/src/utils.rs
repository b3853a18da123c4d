use std::str::FromStr;

use base64::Engine;
use common_utils::consts::BASE64_ENGINE;
use domain_types::{errors, types::InvoiceRef};
use error_stack::{Report, ResultExt};
use rust_decimal::Decimal;

type Error = Report<errors::ConnectorError>;

const INVOICE_SEPARATOR: char = '|';
const AMOUNT_SEPARATOR: char = '=';

pub fn missing_field_err(
    message: &'static str,
) -> Box<dyn Fn() -> Report<errors::ConnectorError> + 'static> {
    Box::new(move || {
        errors::ConnectorError::MissingRequiredField {
            field_name: message,
        }
        .into()
    })
}

/// Packs invoices into a single token as base64 of `id=amount|id=amount`.
pub fn encode_invoices(invoices: &[InvoiceRef]) -> String {
    let joined = invoices
        .iter()
        .map(|invoice| format!("{}{AMOUNT_SEPARATOR}{}", invoice.id, invoice.amount))
        .collect::<Vec<_>>()
        .join(&INVOICE_SEPARATOR.to_string());
    BASE64_ENGINE.encode(joined)
}

/// Reverses [`encode_invoices`]. Never fails: an undecodable token gives no
/// invoices and entries without an `id=amount` shape are skipped.
pub fn decode_invoices(token: &str) -> Vec<InvoiceRef> {
    // a `+` that went through form decoding unescaped comes back as a space
    let token = token.trim().replace(' ', "+");
    if token.is_empty() {
        return Vec::new();
    }

    let decoded = match BASE64_ENGINE
        .decode(token.as_bytes())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
    {
        Some(decoded) => decoded,
        None => return Vec::new(),
    };

    decoded
        .split(INVOICE_SEPARATOR)
        .filter_map(|entry| {
            let (id, amount) = entry.split_once(AMOUNT_SEPARATOR)?;
            let amount = Decimal::from_str(amount.trim()).ok()?;
            Some(InvoiceRef::new(id, amount))
        })
        .collect()
}

/// Adds `key=value` to the query of an absolute URL, keeping existing pairs.
pub fn append_query_param(
    base: &str,
    key: &str,
    value: &str,
    field_name: &'static str,
) -> Result<String, Error> {
    let mut url = url::Url::parse(base)
        .change_context(errors::ConnectorError::InvalidDataFormat { field_name })?;
    url.query_pairs_mut().append_pair(key, value);
    Ok(url.into())
}
