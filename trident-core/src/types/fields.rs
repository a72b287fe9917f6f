//! Field names of the Trident API. Names are case-sensitive.

// Request fields.
pub const TRANSACTION_TYPE: &str = "transaction_type";
pub const PROFILE_ID: &str = "profile_id";
pub const PROFILE_KEY: &str = "profile_key";
pub const CARD_NUMBER: &str = "card_number";
pub const CARD_EXP_DATE: &str = "card_exp_date";
/// Stored card token, used in place of `card_number`.
pub const CARD_ID: &str = "card_id";
pub const CARDHOLDER_STREET_ADDRESS: &str = "cardholder_street_address";
pub const CARDHOLDER_ZIP: &str = "cardholder_zip";
pub const INVOICE_NUMBER: &str = "invoice_number";
pub const CLIENT_REFERENCE_NUMBER: &str = "client_reference_number";
pub const TRANSACTION_AMOUNT: &str = "transaction_amount";
/// Sent on follow-up requests (refund, void, settle) and returned on responses.
pub const TRANSACTION_ID: &str = "transaction_id";

// Response fields.
pub const AUTH_RESPONSE_TEXT: &str = "auth_response_text";
pub const ERROR_CODE: &str = "error_code";
pub const AVS_RESULT: &str = "avs_result";
pub const CVV2_RESULT: &str = "cvv2_result";
pub const AUTH_CODE: &str = "auth_code";

/// Error codes the gateway uses for an approved transaction.
pub const APPROVED_ERROR_CODES: [&str; 2] = ["000", "085"];
