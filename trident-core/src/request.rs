//! [`TransactionRequest`] accumulates the parameters of one gateway call and runs it.

use parking_lot::RwLock;
use url::form_urlencoded;

use crate::{
    errors::{Error, Result},
    response::TransactionResponse,
    transport::{RunError, Transport},
    types::{TransactionType, fields},
};

#[derive(Debug, Default)]
struct RequestState {
    parameters: Vec<(String, String)>,
    host_url: String,
}

/// A single outbound transaction.
///
/// Parameters are kept in insertion order and keys may repeat. All methods take `&self`;
/// mutation and serialization are guarded by a read/write lock, so a request can be
/// shared between threads. Create one request per transaction and never reuse it for an
/// unrelated one.
///
/// ```
/// use trident_core::{request::TransactionRequest, types::{TransactionType, GATEWAY_URL_CERT}};
///
/// let request = TransactionRequest::new(GATEWAY_URL_CERT, TransactionType::Sale);
/// request.add_credentials("pid", "pkey");
/// request.add_amount("1.00");
///
/// assert_eq!(
///     request.serialize().unwrap(),
///     "transaction_type=D&profile_id=pid&profile_key=pkey&transaction_amount=1.00"
/// );
/// ```
#[derive(Debug, Default)]
pub struct TransactionRequest {
    state: RwLock<RequestState>,
}

impl TransactionRequest {
    pub fn new(host_url: impl Into<String>, transaction_type: TransactionType) -> Self {
        let request = TransactionRequest::default();
        request.init(host_url, transaction_type);
        request
    }

    /// Reset the request: drop all parameters, add `transaction_type`, set the host URL.
    pub fn init(&self, host_url: impl Into<String>, transaction_type: TransactionType) {
        let mut state = self.state.write();
        state.parameters.clear();
        state.parameters.push((
            fields::TRANSACTION_TYPE.to_owned(),
            transaction_type.code().to_owned(),
        ));
        state.host_url = host_url.into();
    }

    /// Append a parameter. Content is not validated.
    pub fn add_parameter(&self, key: impl Into<String>, value: impl Into<String>) {
        self.state.write().parameters.push((key.into(), value.into()));
    }

    pub fn add_credentials(&self, profile_id: impl Into<String>, profile_key: impl Into<String>) {
        self.add_parameter(fields::PROFILE_ID, profile_id);
        self.add_parameter(fields::PROFILE_KEY, profile_key);
    }

    pub fn add_card_data(&self, card_number: impl Into<String>, exp_date: impl Into<String>) {
        self.add_parameter(fields::CARD_NUMBER, card_number);
        self.add_parameter(fields::CARD_EXP_DATE, exp_date);
    }

    /// Use a stored card token (`card_id`) instead of a card number.
    pub fn add_token_data(&self, token: impl Into<String>, exp_date: impl Into<String>) {
        self.add_parameter(fields::CARD_ID, token);
        self.add_parameter(fields::CARD_EXP_DATE, exp_date);
    }

    pub fn add_avs_data(&self, street_address: impl Into<String>, zip: impl Into<String>) {
        self.add_parameter(fields::CARDHOLDER_STREET_ADDRESS, street_address);
        self.add_parameter(fields::CARDHOLDER_ZIP, zip);
    }

    pub fn add_invoice(&self, invoice: impl Into<String>) {
        self.add_parameter(fields::INVOICE_NUMBER, invoice);
    }

    pub fn add_client_ref(&self, reference: impl Into<String>) {
        self.add_parameter(fields::CLIENT_REFERENCE_NUMBER, reference);
    }

    pub fn add_amount(&self, amount: impl Into<String>) {
        self.add_parameter(fields::TRANSACTION_AMOUNT, amount);
    }

    pub fn add_transaction_id(&self, transaction_id: impl Into<String>) {
        self.add_parameter(fields::TRANSACTION_ID, transaction_id);
    }

    pub fn set_host_url(&self, host_url: impl Into<String>) {
        self.state.write().host_url = host_url.into();
    }

    pub fn host_url(&self) -> String {
        self.state.read().host_url.clone()
    }

    /// A snapshot of the parameters in insertion order.
    pub fn parameters(&self) -> Vec<(String, String)> {
        self.state.read().parameters.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().parameters.is_empty()
    }

    /// Serialize the parameters into a form body: `key=value` pairs joined by `&`.
    ///
    /// Values are form-encoded, keys are written as given. Fails with
    /// [`Error::EmptyRequest`] when there are no parameters.
    pub fn serialize(&self) -> Result<String> {
        encode_parameters(&self.state.read().parameters)
    }

    /// Serialize the request and execute it over `transport`, blocking until the gateway
    /// answers.
    ///
    /// The host URL and body are captured under one read lock, so concurrent writers
    /// cannot interleave with the snapshot.
    pub fn run<T: Transport>(
        &self,
        transport: &T,
    ) -> std::result::Result<TransactionResponse, RunError<T::Error>> {
        let (host_url, body) = {
            let state = self.state.read();

            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Running transaction: host='{}', parameters={}",
                state.host_url,
                state.parameters.len()
            );

            (state.host_url.clone(), encode_parameters(&state.parameters)?)
        };

        let raw = transport
            .execute(&host_url, &body)
            .map_err(RunError::Transport)?;

        Ok(TransactionResponse::parse(&raw)?)
    }
}

fn encode_parameters(parameters: &[(String, String)]) -> Result<String> {
    if parameters.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let pairs: Vec<String> = parameters
        .iter()
        .map(|(key, value)| {
            let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
            format!("{key}={encoded}")
        })
        .collect();

    Ok(pairs.join("&"))
}
