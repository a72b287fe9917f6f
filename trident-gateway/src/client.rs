//! [`HttpTransport`] executes gateway calls over HTTPS with a blocking `reqwest` client.

use http::{
    StatusCode,
    header::{CONTENT_LENGTH, CONTENT_TYPE},
};
use trident_core::{
    errors::UrlError,
    request::TransactionRequest,
    response::TransactionResponse,
    transport::{RunError, Transport},
    types::parse_gateway_url,
};

use crate::config::{TransportConfig, non_zero};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The gateway URL is malformed or not absolute. No request was sent.
    #[error(transparent)]
    InvalidUrl(#[from] UrlError),
    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The gateway answered with a status other than `200 OK`.
    #[error("Gateway responded with HTTP status {0}")]
    Status(StatusCode),
}

impl TransportError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Status(status) => Some(*status),
            TransportError::Http(err) => err.status(),
            TransportError::InvalidUrl(_) => None,
        }
    }
}

/// A [`Transport`] that POSTs form bodies with a blocking `reqwest` client.
///
/// Each call blocks the calling thread. Do not call it from inside an async runtime;
/// use `spawn_blocking` there.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a transport with [`TransportConfig::default`].
    pub fn new() -> Result<Self, TransportError> {
        HttpTransport::from_config(&TransportConfig::default())
    }

    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(non_zero(config.timeout))
            .connect_timeout(non_zero(config.connect_timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(HttpTransport { client })
    }

    /// Wrap a preconfigured client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        HttpTransport { client }
    }
}

impl Transport for HttpTransport {
    type Error = TransportError;

    fn execute(&self, url: &str, body: &str) -> Result<String, Self::Error> {
        let url = parse_gateway_url(url)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Posting to gateway: url='{}', bytes={}", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CONTENT_LENGTH, body.len().to_string())
            .body(body.to_owned())
            .send()?;

        let status = response.status();

        #[cfg(feature = "tracing")]
        tracing::debug!("Gateway responded: status={}", status);

        if status != StatusCode::OK {
            return Err(TransportError::Status(status));
        }

        Ok(response.text()?)
    }
}

/// Runs a [`TransactionRequest`] over a default [`HttpTransport`].
pub trait SendTransaction {
    /// Build an [`HttpTransport`] with default settings and run the request over it.
    ///
    /// Prefer [`TransactionRequest::run`] with a shared transport when sending many
    /// requests, so connections are reused.
    fn send(&self) -> Result<TransactionResponse, RunError<TransportError>>;
}

impl SendTransaction for TransactionRequest {
    fn send(&self) -> Result<TransactionResponse, RunError<TransportError>> {
        let transport = HttpTransport::new().map_err(RunError::Transport)?;
        self.run(&transport)
    }
}
