//! SASL quality of protection values

use std::fmt;
use std::str::FromStr;

use rehber_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A SASL quality of protection (QoP) value: the guarantee applied to
/// traffic on the connection after authentication completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityOfProtection {
    /// Authentication only, with no protection for subsequent traffic
    #[serde(rename = "auth")]
    Auth,

    /// Authentication plus integrity protection for subsequent traffic
    #[serde(rename = "auth-int")]
    AuthInt,

    /// Authentication plus integrity and confidentiality protection for
    /// subsequent traffic
    #[serde(rename = "auth-conf")]
    AuthConf,
}

impl QualityOfProtection {
    /// All defined QoP values.
    pub const VALUES: [QualityOfProtection; 3] = [
        QualityOfProtection::Auth,
        QualityOfProtection::AuthInt,
        QualityOfProtection::AuthConf,
    ];

    /// The name used for this QoP on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityOfProtection::Auth => "auth",
            QualityOfProtection::AuthInt => "auth-int",
            QualityOfProtection::AuthConf => "auth-conf",
        }
    }

    /// Decode a comma-delimited QoP preference string into an ordered list,
    /// most preferred first. Order is preserved exactly and duplicates are
    /// kept. Whitespace around each name is ignored.
    pub fn decode_list(text: &str) -> Result<Vec<QualityOfProtection>> {
        let mut list = Vec::new();
        for name in text.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            list.push(name.parse()?);
        }
        Ok(list)
    }

    /// Render an ordered QoP list as a comma-delimited string.
    pub fn join(list: &[QualityOfProtection]) -> String {
        list.iter()
            .map(|qop| qop.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for QualityOfProtection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityOfProtection {
    type Err = Error;

    /// Case-insensitive decode of a single QoP name.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auth" => Ok(QualityOfProtection::Auth),
            "auth-int" => Ok(QualityOfProtection::AuthInt),
            "auth-conf" => Ok(QualityOfProtection::AuthConf),
            other => Err(Error::InvalidArgument(format!(
                "Unrecognized QoP value '{}' (expected one of: auth, auth-int, auth-conf)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(QualityOfProtection::Auth.to_string(), "auth");
        assert_eq!(QualityOfProtection::AuthInt.to_string(), "auth-int");
        assert_eq!(QualityOfProtection::AuthConf.to_string(), "auth-conf");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "AUTH-CONF".parse::<QualityOfProtection>().unwrap(),
            QualityOfProtection::AuthConf
        );
        assert_eq!(
            "Auth".parse::<QualityOfProtection>().unwrap(),
            QualityOfProtection::Auth
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "auth-something".parse::<QualityOfProtection>().unwrap_err();
        assert!(err.to_string().contains("auth-something"));
        assert!(err.to_string().contains("auth-conf"));
    }

    #[test]
    fn test_decode_list_preserves_order_and_duplicates() {
        let list = QualityOfProtection::decode_list("auth-conf, auth-int,auth,auth").unwrap();
        assert_eq!(
            list,
            vec![
                QualityOfProtection::AuthConf,
                QualityOfProtection::AuthInt,
                QualityOfProtection::Auth,
                QualityOfProtection::Auth,
            ]
        );
    }

    #[test]
    fn test_decode_list_propagates_unknown_names() {
        assert!(QualityOfProtection::decode_list("auth,bogus").is_err());
    }

    #[test]
    fn test_join() {
        assert_eq!(
            QualityOfProtection::join(&[
                QualityOfProtection::AuthConf,
                QualityOfProtection::Auth,
            ]),
            "auth-conf,auth"
        );
        assert_eq!(QualityOfProtection::join(&[]), "");
    }
}
