/// Error types for Trident core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request has no parameters to serialize.
    #[error("Transaction request has no parameters")]
    EmptyRequest,

    /// A response token is not a `key=value` pair with a non-empty key.
    #[error("Malformed response field `{0}`: expected `key=value`")]
    MalformedField(String),
}

/// A gateway URL that cannot be the target of a request.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    /// The URL could not be parsed, e.g. because it is relative.
    #[error("Invalid gateway URL: {0}")]
    Parse(#[from] url::ParseError),

    /// The URL parsed, but has no host or path to POST to (e.g. `mailto:`).
    #[error("Gateway URL cannot be used as a request target: {0}")]
    CannotBeABase(String),
}

/// A specialized `Result` type for Trident core operations.
pub type Result<T> = std::result::Result<T, Error>;
