/*
[INPUT]:  Error sources (HTTP, exchange responses, validation, serialization)
[OUTPUT]: Structured error types carrying the exchange code and message verbatim
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::validate::ValidationError;

/// Exchange error code returned when the request timestamp falls outside
/// the `recvWindow`. The only code that triggers an automatic clock
/// re-sync and retry.
pub const INVALID_TIMESTAMP_CODE: i64 = -1021;

/// Main error type for the futures adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed before the exchange produced an answer
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange rejected the request; code and message exactly as returned
    #[error("exchange error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Order input failed a pre-flight check; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not match any expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error (missing or malformed credentials)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BinanceError {
    /// Check if the exchange rejected the request timestamp (code -1021)
    pub fn is_timestamp_error(&self) -> bool {
        matches!(self, BinanceError::Api { code, .. } if *code == INVALID_TIMESTAMP_CODE)
    }

    /// Check if the error was reported by the exchange itself, as opposed
    /// to transport or local failures
    pub fn is_api_error(&self) -> bool {
        matches!(self, BinanceError::Api { .. })
    }

    /// Get the exchange error code (if the exchange produced one)
    pub fn api_code(&self) -> Option<i64> {
        match self {
            BinanceError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_error_detection() {
        let err = BinanceError::Api {
            code: -1021,
            message: "Timestamp for this request is outside of the recvWindow.".to_string(),
        };
        assert!(err.is_timestamp_error());
        assert!(err.is_api_error());
        assert_eq!(err.api_code(), Some(-1021));

        let other = BinanceError::Api {
            code: -4164,
            message: "Order's notional must be no smaller than 100".to_string(),
        };
        assert!(!other.is_timestamp_error());
        assert_eq!(other.api_code(), Some(-4164));
    }

    #[test]
    fn test_api_error_display_keeps_code_and_message() {
        let err = BinanceError::Api {
            code: -4164,
            message: "Order's notional must be no smaller than 100".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("-4164"));
        assert!(rendered.contains("Order's notional must be no smaller than 100"));
    }

    #[test]
    fn test_non_api_errors_have_no_code() {
        let err = BinanceError::Config("BINANCE_API_KEY is not set".to_string());
        assert!(!err.is_api_error());
        assert_eq!(err.api_code(), None);
    }
}
