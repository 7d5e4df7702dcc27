//! Rehber Core Library
//!
//! Shared types for the Rehber LDAP client toolkit: version information,
//! error types, and tool result codes.

pub mod error;
pub mod result_code;

pub use error::{Error, Result};
pub use result_code::ResultCode;

/// Rehber version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name used in version output
pub const PRODUCT_NAME: &str = "Rehber LDAP Client Toolkit";

/// Version banner lines, one entry per output line.
pub fn version_lines() -> Vec<String> {
    vec![
        format!("{} {}", PRODUCT_NAME, VERSION),
        "Supported SASL mechanisms: DIGEST-MD5".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lines_mention_product_and_version() {
        let lines = version_lines();
        assert!(!lines.is_empty());
        assert!(lines[0].contains(PRODUCT_NAME));
        assert!(lines[0].contains(VERSION));
    }
}
