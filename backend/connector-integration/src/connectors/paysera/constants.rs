// WebToPay protocol
pub const API_VERSION: &str = "1.6";
pub const CONNECTOR_NAME: &str = "paysera";

// Inbound parameter names
pub const DATA_PARAM: &str = "data";
pub const SS1_PARAM: &str = "ss1";
pub const SS2_PARAM: &str = "ss2";
pub const INVOICES_PARAM: &str = "invoices";
pub const CLIENT_ID_PARAM: &str = "client_id";
pub const PROCEED_PARAM: &str = "proceed";

/// Body the processor expects back from an accepted callback
pub const CALLBACK_ACKNOWLEDGEMENT: &str = "OK";

// Processor status codes
pub const STATUS_SUCCESS: &str = "1";
pub const STATUS_PENDING: &str = "2";
pub const STATUS_ACCEPTED: &str = "3";

// Synthetic payment used to exercise the signing path with fresh credentials
pub const SELF_TEST_ORDER_ID: &str = "0";
pub const SELF_TEST_AMOUNT: i64 = 1;
pub const SELF_TEST_CURRENCY: &str = "USD";
pub const SELF_TEST_COUNTRY: &str = "LT";

pub const DEFAULT_SANDBOX: &str = "false";
pub const ORDER_ID_SUFFIX_LENGTH: usize = 6;

// Settings messages
pub const PROJECT_ID_EMPTY: &str = "Please enter a valid Project ID.";
pub const PROJECT_PASSWORD_EMPTY: &str = "Please enter a valid Project Password.";
pub const PROJECT_PASSWORD_INVALID: &str = "The provided Project Password seems to be invalid.";
pub const SANDBOX_INVALID: &str = "Sandbox must be \"true\" or \"false\".";
