//! Error types for wire-format conversions

use thiserror::Error;

/// Errors raised while converting wire values into typed enums
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Unknown time-in-force code
    #[error("Unknown time in force code: {0}")]
    UnknownTimeInForce(u8),

    /// Unknown order status code
    #[error("Unknown order status code: {0}")]
    UnknownOrderStatus(u8),

    /// Unknown candle resolution
    #[error("Unknown resolution: {0}")]
    UnknownResolution(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TypesError::UnknownResolution("7".to_string());
        assert!(err.to_string().contains("7"));

        let err = TypesError::UnknownOrderStatus(9);
        assert_eq!(err.to_string(), "Unknown order status code: 9");
    }
}
