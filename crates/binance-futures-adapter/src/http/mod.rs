/*
[INPUT]:  HTTP client configuration and exchange endpoints
[OUTPUT]: HTTP responses and typed exchange results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod signature;
pub mod trade;

pub use error::{BinanceError, Result, INVALID_TIMESTAMP_CODE};
pub use signature::RequestSigner;

pub use client::{
    BinanceFuturesClient, ClientConfig, Credentials, API_KEY_ENV, API_SECRET_ENV,
    TESTNET_BASE_URL,
};
