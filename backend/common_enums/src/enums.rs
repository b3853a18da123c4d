use serde::{Deserialize, Serialize};

/// Status vocabulary shared by processor responses and caller-facing transaction records.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    Approved,
    #[default]
    Declined,
    Void,
    Pending,
    Reconciled,
    Refunded,
    Returned,
}

/// Kind of input rendered for a gateway setting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SettingsFieldKind {
    Text,
    Password,
    Checkbox,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn status_serializes_as_lowercase_literals() {
        let approved = serde_json::to_string(&TransactionStatus::Approved).unwrap();
        assert_eq!(approved, "\"approved\"");
        assert_eq!(TransactionStatus::Declined.to_string(), "declined");
    }

    #[test]
    fn status_vocabulary_is_closed() {
        let names: Vec<String> = TransactionStatus::iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            [
                "approved",
                "declined",
                "void",
                "pending",
                "reconciled",
                "refunded",
                "returned"
            ]
        );
        assert_eq!(
            TransactionStatus::from_str("refunded").unwrap(),
            TransactionStatus::Refunded
        );
    }
}
