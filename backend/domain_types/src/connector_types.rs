use std::collections::HashMap;

use common_enums::SettingsFieldKind;
use serde::Serialize;

use crate::types::TransactionResult;

/// Inbound request data handed to every entry point.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub query: HashMap<String, String>,
    pub form: HashMap<String, String>,
    /// Path and query of the current request
    pub uri: Option<String>,
}

impl RequestContext {
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Query and form parameters merged, form values winning on conflicts.
    pub fn params(&self) -> HashMap<String, String> {
        let mut params = self.query.clone();
        params.extend(self.form.clone());
        params
    }
}

/// What the payer's browser should do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProcessResponse {
    /// Render a confirmation that submits back to `proceed_url`.
    Confirm { proceed_url: String },
    /// Send the browser to the processor's hosted payment page.
    Redirect { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Authentic and approved. `acknowledgement` must be written back verbatim
    /// as the response body or the processor keeps redelivering.
    Accepted {
        transaction: TransactionResult,
        acknowledgement: &'static str,
    },
    /// Untrusted or not approved, nothing is recorded.
    Rejected,
}

impl CallbackOutcome {
    pub fn acknowledgement(&self) -> Option<&'static str> {
        match self {
            Self::Accepted {
                acknowledgement, ..
            } => Some(acknowledgement),
            Self::Rejected => None,
        }
    }

    pub fn transaction(&self) -> Option<&TransactionResult> {
        match self {
            Self::Accepted { transaction, .. } => Some(transaction),
            Self::Rejected => None,
        }
    }
}

/// Describes one gateway setting for whichever UI renders the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: SettingsFieldKind,
    pub encrypted: bool,
    pub options: Vec<&'static str>,
}
