use std::{fmt::Display, str::FromStr};

/// Certification gateway, used while a merchant integration is being certified.
pub const GATEWAY_URL_CERT: &str = "https://cert.merchante-solutions.com/mes-api/tridentApi";
/// Test gateway.
pub const GATEWAY_URL_TEST: &str = "https://test.merchante-solutions.com/mes-api/tridentApi";
/// Production gateway.
pub const GATEWAY_URL_LIVE: &str = "https://api.merchante-solutions.com/mes-api/tridentApi";

/// A gateway environment. Always chosen explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayEnvironment {
    Cert,
    Test,
    Live,
}

impl GatewayEnvironment {
    /// The endpoint URL of this environment.
    pub fn url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Cert => GATEWAY_URL_CERT,
            GatewayEnvironment::Test => GATEWAY_URL_TEST,
            GatewayEnvironment::Live => GATEWAY_URL_LIVE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GatewayEnvironment::Cert => "cert",
            GatewayEnvironment::Test => "test",
            GatewayEnvironment::Live => "live",
        }
    }
}

/// Error returned when a string does not name a gateway environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown gateway environment `{0}`; expected one of cert, test, live")]
pub struct UnknownEnvironment(pub String);

impl FromStr for GatewayEnvironment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cert" => Ok(GatewayEnvironment::Cert),
            "test" => Ok(GatewayEnvironment::Test),
            "live" => Ok(GatewayEnvironment::Live),
            _ => Err(UnknownEnvironment(s.to_owned())),
        }
    }
}

impl Display for GatewayEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
