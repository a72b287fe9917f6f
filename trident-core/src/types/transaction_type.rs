//! [`TransactionType`] selects the payment operation a request performs.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The payment operation requested from the gateway.
///
/// Sent on the wire as a single-letter code in the `transaction_type` field.
///
/// ```
/// use trident_core::types::TransactionType;
///
/// assert_eq!(TransactionType::Sale.code(), "D");
/// assert_eq!("U".parse::<TransactionType>().unwrap(), TransactionType::Refund);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// `D`: authorize and capture in one step.
    Sale,
    /// `P`: authorize only.
    PreAuth,
    /// `S`: settle a previous pre-authorization.
    Settle,
    /// `J`: re-authorize a previous authorization.
    ReAuth,
    /// `O`: offline transaction with a voice authorization code.
    Offline,
    /// `V`: void a transaction that has not settled yet.
    Void,
    /// `C`: credit a card without a prior sale.
    Credit,
    /// `U`: refund a settled sale.
    Refund,
    /// `A`: card verification with no amount.
    Verify,
    /// `T`: store a card and return a token.
    Tokenize,
    /// `X`: remove a stored card token.
    Detokenize,
    /// `Z`: close the current batch.
    BatchClose,
}

impl TransactionType {
    pub const ALL: [TransactionType; 12] = [
        TransactionType::Sale,
        TransactionType::PreAuth,
        TransactionType::Settle,
        TransactionType::ReAuth,
        TransactionType::Offline,
        TransactionType::Void,
        TransactionType::Credit,
        TransactionType::Refund,
        TransactionType::Verify,
        TransactionType::Tokenize,
        TransactionType::Detokenize,
        TransactionType::BatchClose,
    ];

    /// The wire code of this transaction type.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Sale => "D",
            TransactionType::PreAuth => "P",
            TransactionType::Settle => "S",
            TransactionType::ReAuth => "J",
            TransactionType::Offline => "O",
            TransactionType::Void => "V",
            TransactionType::Credit => "C",
            TransactionType::Refund => "U",
            TransactionType::Verify => "A",
            TransactionType::Tokenize => "T",
            TransactionType::Detokenize => "X",
            TransactionType::BatchClose => "Z",
        }
    }
}

/// Error returned when a string is not a known transaction type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transaction type code `{0}`")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownTransactionType(s.to_owned()))
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for TransactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_parse_back() {
        for t in TransactionType::ALL {
            assert_eq!(t.code().parse::<TransactionType>().unwrap(), t);
            assert_eq!(t.to_string(), t.code());
        }

        let mut codes: Vec<_> = TransactionType::ALL.iter().map(|t| t.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), TransactionType::ALL.len());
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "Q".parse::<TransactionType>().unwrap_err();
        assert_eq!(err, UnknownTransactionType("Q".to_owned()));

        // Codes are case-sensitive.
        assert!("d".parse::<TransactionType>().is_err());
    }

    #[test]
    fn serde_uses_wire_code() {
        assert_eq!(
            serde_json::to_value(TransactionType::BatchClose).unwrap(),
            serde_json::json!("Z")
        );

        let t: TransactionType = serde_json::from_value(serde_json::json!("V")).unwrap();
        assert_eq!(t, TransactionType::Void);

        assert!(serde_json::from_value::<TransactionType>(serde_json::json!("void")).is_err());
    }
}
