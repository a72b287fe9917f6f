use std::time::Duration;

use bon::Builder;

/// Default total time allowed for one gateway round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("trident-gateway/", env!("CARGO_PKG_VERSION"));

/// Configuration of an [`HttpTransport`](crate::client::HttpTransport).
///
/// ```
/// use std::time::Duration;
/// use trident_gateway::config::TransportConfig;
///
/// let config = TransportConfig::builder()
///     .timeout(Duration::from_secs(60))
///     .build();
///
/// assert_eq!(config.timeout, Duration::from_secs(60));
/// assert_eq!(config.connect_timeout, Duration::from_secs(10));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Total time allowed for one request. `Duration::ZERO` disables the timeout.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    /// Time allowed to connect. `Duration::ZERO` disables the timeout.
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
    /// `User-Agent` header sent with every request.
    #[builder(into, default = DEFAULT_USER_AGENT.to_owned())]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig::builder().build()
    }
}

pub(crate) fn non_zero(duration: Duration) -> Option<Duration> {
    (!duration.is_zero()).then_some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TransportConfig::default();

        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(config.user_agent.starts_with("trident-gateway/"));
    }

    #[test]
    fn zero_disables_timeout() {
        assert_eq!(non_zero(Duration::ZERO), None);
        assert_eq!(non_zero(DEFAULT_TIMEOUT), Some(DEFAULT_TIMEOUT));
    }
}
