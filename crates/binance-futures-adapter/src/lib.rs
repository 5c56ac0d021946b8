/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public futures testnet adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;
pub mod validate;

// Re-export commonly used types from http
pub use http::{
    BinanceError,
    BinanceFuturesClient,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
    TESTNET_BASE_URL,
};

// Re-export all types
pub use types::*;

// Re-export the pre-flight checks
pub use validate::{normalize_symbol, validate_order, ValidationError};
