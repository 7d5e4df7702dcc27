//! Tool result codes
//!
//! Integer values follow the LDAP result code assignments so that tool exit
//! codes line up with what directory administrators already expect.

use std::fmt;

/// Result of a tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The operation completed successfully
    Success,
    /// A client-side problem occurred while processing the operation
    LocalError,
    /// A supplied parameter was missing or invalid
    ParamError,
}

impl ResultCode {
    /// The stable integer value for this result code.
    pub fn int_value(&self) -> i32 {
        match self {
            ResultCode::Success => 0,
            ResultCode::LocalError => 82,
            ResultCode::ParamError => 89,
        }
    }

    /// The human-readable name for this result code.
    pub fn name(&self) -> &'static str {
        match self {
            ResultCode::Success => "success",
            ResultCode::LocalError => "local error",
            ResultCode::ParamError => "param error",
        }
    }

    /// Process exit code for this result, clamped to the range the OS keeps.
    pub fn exit_code(&self) -> i32 {
        self.int_value() & 0xff
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.int_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_values_are_stable() {
        assert_eq!(ResultCode::Success.int_value(), 0);
        assert_eq!(ResultCode::LocalError.int_value(), 82);
        assert_eq!(ResultCode::ParamError.int_value(), 89);
    }

    #[test]
    fn test_display_includes_name_and_value() {
        assert_eq!(ResultCode::ParamError.to_string(), "param error (89)");
    }
}
