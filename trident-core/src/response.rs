//! [`TransactionResponse`] decodes the gateway's `key=value&...` reply.

use std::str::FromStr;

use url::form_urlencoded;

use crate::{
    errors::{Error, Result},
    types::{Record, fields},
};

/// A decoded gateway response.
///
/// Immutable after parsing. Keys and values are form-decoded (`+` is a space, `%XX` is a
/// byte); on duplicate keys the last occurrence wins. The undecoded body stays available
/// through [`raw`](Self::raw).
///
/// ```
/// use trident_core::response::TransactionResponse;
///
/// let response =
///     TransactionResponse::parse("error_code=000&transaction_id=12345&auth_response_text=APPROVAL")
///         .unwrap();
///
/// assert!(response.is_approved());
/// assert_eq!(response.transaction_id(), Some("12345"));
/// assert_eq!(response.avs_result(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionResponse {
    fields: Record<String>,
    raw: String,
}

impl TransactionResponse {
    /// Decode a raw response body.
    ///
    /// Empty tokens (such as the one after a trailing `&`) are skipped. A token without
    /// `=`, or with nothing before it, fails with [`Error::MalformedField`].
    pub fn parse(raw: &str) -> Result<Self> {
        let mut decoded = Record::new();

        for token in raw.split('&').filter(|token| !token.is_empty()) {
            let (key, value) = token
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| Error::MalformedField(token.to_owned()))?;
            decoded.insert(decode_component(key), decode_component(value));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!("Decoded gateway response: fields={}", decoded.len());

        Ok(TransactionResponse {
            fields: decoded,
            raw: raw.to_owned(),
        })
    }

    /// The value of `key`, or `None` if the gateway did not send it.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The value of `key`, or an empty string if the gateway did not send it.
    pub fn value_or_empty(&self, key: &str) -> &str {
        self.value(key).unwrap_or_default()
    }

    /// `auth_response_text`
    pub fn response_text(&self) -> Option<&str> {
        self.value(fields::AUTH_RESPONSE_TEXT)
    }

    /// `transaction_id`
    pub fn transaction_id(&self) -> Option<&str> {
        self.value(fields::TRANSACTION_ID)
    }

    /// `error_code`
    pub fn error_code(&self) -> Option<&str> {
        self.value(fields::ERROR_CODE)
    }

    /// `avs_result`
    pub fn avs_result(&self) -> Option<&str> {
        self.value(fields::AVS_RESULT)
    }

    /// `cvv2_result`
    pub fn cvv_result(&self) -> Option<&str> {
        self.value(fields::CVV2_RESULT)
    }

    /// `auth_code`
    pub fn auth_code(&self) -> Option<&str> {
        self.value(fields::AUTH_CODE)
    }

    /// Whether the gateway approved the transaction: `error_code` is `000` or `085`.
    pub fn is_approved(&self) -> bool {
        self.error_code()
            .is_some_and(|code| fields::APPROVED_ERROR_CODES.contains(&code))
    }

    pub fn fields(&self) -> &Record<String> {
        &self.fields
    }

    /// The response body exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromStr for TransactionResponse {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TransactionResponse::parse(s)
    }
}

fn decode_component(component: &str) -> String {
    // Prefixed with `=` so the whole component decodes as one value, `=` included.
    let input = format!("={component}");
    form_urlencoded::parse(input.as_bytes())
        .next()
        .map(|(_, decoded)| decoded.into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{request::TransactionRequest, types::TransactionType};

    #[test]
    fn approval_response() {
        let response =
            TransactionResponse::parse("error_code=000&transaction_id=12345&auth_response_text=APPROVAL")
                .unwrap();

        assert_eq!(response.error_code(), Some("000"));
        assert_eq!(response.transaction_id(), Some("12345"));
        assert_eq!(response.response_text(), Some("APPROVAL"));
        assert!(response.is_approved());
        assert_eq!(response.len(), 3);
    }

    #[test]
    fn decline_response() {
        let response = TransactionResponse::parse("error_code=400&auth_response_text=DECLINE").unwrap();

        assert!(!response.is_approved());
        assert_eq!(response.response_text(), Some("DECLINE"));
    }

    #[test]
    fn approval_codes() {
        for (body, approved) in [
            ("error_code=000", true),
            ("error_code=085", true),
            ("error_code=0", false),
            ("error_code=00", false),
            ("error_code=0000", false),
            ("error_code=", false),
            ("auth_response_text=APPROVAL", false),
        ] {
            let response = TransactionResponse::parse(body).unwrap();
            assert_eq!(response.is_approved(), approved, "{body}");
        }
    }

    #[test]
    fn missing_fields_are_absent() {
        let response = TransactionResponse::parse("error_code=000").unwrap();

        assert_eq!(response.value("card_id"), None);
        assert_eq!(response.value_or_empty("card_id"), "");
        assert_eq!(response.auth_code(), None);
        assert_eq!(response.cvv_result(), None);
    }

    #[test]
    fn all_named_accessors() {
        let response = TransactionResponse::parse(
            "auth_response_text=Exact+Match&transaction_id=t1&error_code=085&avs_result=Y&cvv2_result=M&auth_code=T1234H",
        )
        .unwrap();

        assert_eq!(response.response_text(), Some("Exact Match"));
        assert_eq!(response.transaction_id(), Some("t1"));
        assert_eq!(response.error_code(), Some("085"));
        assert_eq!(response.avs_result(), Some("Y"));
        assert_eq!(response.cvv_result(), Some("M"));
        assert_eq!(response.auth_code(), Some("T1234H"));
    }

    #[test]
    fn value_splits_on_first_equals() {
        let response = TransactionResponse::parse("note=a=b&k=").unwrap();

        assert_eq!(response.value("note"), Some("a=b"));
        assert_eq!(response.value("k"), Some(""));
    }

    #[test]
    fn values_are_percent_decoded_and_raw_is_kept() {
        let raw = "auth_response_text=No%20Match%26Retry&x=a+b";
        let response = TransactionResponse::parse(raw).unwrap();

        assert_eq!(response.response_text(), Some("No Match&Retry"));
        assert_eq!(response.value("x"), Some("a b"));
        assert_eq!(response.raw(), raw);
    }

    #[test]
    fn last_duplicate_wins() {
        let response = TransactionResponse::parse("error_code=400&error_code=000").unwrap();
        assert_eq!(response.error_code(), Some("000"));
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let response = TransactionResponse::parse("error_code=000&&transaction_id=1&").unwrap();
        assert_eq!(response.len(), 2);

        let empty = TransactionResponse::parse("").unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_approved());
    }

    #[test]
    fn token_without_separator_is_malformed() {
        let err = TransactionResponse::parse("error_code=000&truncated").unwrap_err();
        assert!(matches!(err, Error::MalformedField(token) if token == "truncated"));

        assert!("garbage".parse::<TransactionResponse>().is_err());
    }

    #[test]
    fn token_with_empty_key_is_malformed() {
        let err = TransactionResponse::parse("auth_response_text=ok&=x").unwrap_err();
        assert!(matches!(err, Error::MalformedField(token) if token == "=x"));

        assert!(matches!(
            TransactionResponse::parse("="),
            Err(Error::MalformedField(token)) if token == "="
        ));
    }

    #[test]
    fn undecodable_values_are_kept_lossily() {
        let response = TransactionResponse::parse("auth_response_text=%FF%FE&k=%").unwrap();

        assert_eq!(response.response_text(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(response.value("k"), Some("%"));
    }

    #[test]
    fn decodes_own_serialized_request() {
        let request = TransactionRequest::new("https://gateway.test/api", TransactionType::Sale);
        request.add_credentials("pid", "p&key=");
        request.add_avs_data("123 N. Main", "55555");
        request.add_client_ref("ünïcode / 100%");

        let response = TransactionResponse::parse(&request.serialize().unwrap()).unwrap();

        let expected: Record<String> = request.parameters().into_iter().collect();
        assert_eq!(response.fields(), &expected);
    }
}
