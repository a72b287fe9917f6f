//! Miscellaneous common types used throughout the Trident codebase.

use url::Url;

use crate::errors::UrlError;

/// Represents the decoded fields of a gateway response. The key is a `String`.
pub type Record<V> = std::collections::HashMap<String, V>;

/// Validate that `url` is well-formed and absolute, so it can be the target of a POST.
///
/// ```
/// use trident_core::types::{parse_gateway_url, GATEWAY_URL_CERT};
///
/// assert!(parse_gateway_url(GATEWAY_URL_CERT).is_ok());
/// assert!(parse_gateway_url("/mes-api/tridentApi").is_err());
/// assert!(parse_gateway_url("mailto:ops@example.com").is_err());
/// ```
pub fn parse_gateway_url(url: &str) -> Result<Url, UrlError> {
    let parsed = Url::parse(url)?;
    if parsed.cannot_be_a_base() {
        return Err(UrlError::CannotBeABase(url.to_owned()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_url_errors_are_url_specific() {
        assert!(matches!(
            parse_gateway_url("/mes-api/tridentApi"),
            Err(UrlError::Parse(url::ParseError::RelativeUrlWithoutBase))
        ));
        assert!(matches!(
            parse_gateway_url("mailto:ops@example.com"),
            Err(UrlError::CannotBeABase(url)) if url == "mailto:ops@example.com"
        ));
        assert_eq!(
            parse_gateway_url("https://gateway.test/api").unwrap().host_str(),
            Some("gateway.test")
        );
    }
}
