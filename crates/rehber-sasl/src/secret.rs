//! Binary-safe secret storage
//!
//! Secrets are kept as raw octets so passwords that are not valid UTF-8
//! round-trip unchanged. An absent or empty input becomes an explicit
//! zero-length secret, which is the anonymous-bind case rather than a
//! "missing" state.

use std::fmt;

/// A secret value stored as raw bytes.
///
/// Construct it from text, raw bytes, or an absent value; every form
/// converges on the same byte-sequence representation:
///
/// ```
/// use rehber_sasl::Secret;
///
/// let from_text = Secret::from("hunter2");
/// let from_bytes = Secret::from(b"hunter2".as_slice());
/// assert_eq!(from_text, from_bytes);
///
/// let anonymous = Secret::from(None::<&str>);
/// assert!(anonymous.is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// An explicit zero-length secret, used for anonymous binds.
    pub fn empty() -> Self {
        Secret(Vec::new())
    }

    /// The raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of secret bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the zero-length secret.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Debug must never reveal the bytes.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} bytes redacted>)", self.0.len())
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Secret(value.as_bytes().to_vec())
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret(value.into_bytes())
    }
}

impl From<&[u8]> for Secret {
    fn from(value: &[u8]) -> Self {
        Secret(value.to_vec())
    }
}

impl From<Vec<u8>> for Secret {
    fn from(value: Vec<u8>) -> Self {
        Secret(value)
    }
}

impl<T> From<Option<T>> for Secret
where
    Secret: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Secret::from(inner),
            None => Secret::empty(),
        }
    }
}
