//! The [`Transport`] seam between a transaction request and the network.

use crate::errors::Error;

/// Executes one synchronous POST of a form-encoded body to the gateway.
///
/// Implementations block the calling thread for the full round trip and must treat any
/// status other than `200 OK` as a failure. They never retry.
///
/// ```
/// use trident_core::transport::Transport;
///
/// struct Approve;
///
/// impl Transport for Approve {
///     type Error = std::convert::Infallible;
///
///     fn execute(&self, _url: &str, _body: &str) -> Result<String, Self::Error> {
///         Ok("error_code=000&auth_response_text=Exact+Match".to_owned())
///     }
/// }
/// ```
pub trait Transport {
    type Error: std::error::Error + 'static;

    /// POST `body` to `url` and return the full response body on `200 OK`.
    fn execute(&self, url: &str, body: &str) -> Result<String, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, url: &str, body: &str) -> Result<String, Self::Error> {
        (**self).execute(url, body)
    }
}

/// Failure of [`TransactionRequest::run`](crate::request::TransactionRequest::run).
#[derive(Debug, thiserror::Error)]
pub enum RunError<E: std::error::Error + 'static> {
    /// The request could not be serialized, or the response could not be decoded.
    #[error(transparent)]
    Transaction(#[from] Error),

    /// The transport failed; no response was decoded.
    #[error("Transport error: {0}")]
    Transport(#[source] E),
}

impl<E: std::error::Error + 'static> RunError<E> {
    pub fn as_transport(&self) -> Option<&E> {
        match self {
            RunError::Transport(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_transaction(&self) -> Option<&Error> {
        match self {
            RunError::Transaction(e) => Some(e),
            _ => None,
        }
    }
}
