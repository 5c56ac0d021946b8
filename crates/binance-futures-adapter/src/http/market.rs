/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Market data (server time, ticker prices, exchange metadata)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BinanceFuturesClient, Result};
use crate::types::{ExchangeInfo, ServerTime, SymbolPrice};
use crate::validate::normalize_symbol;

impl BinanceFuturesClient {
    /// Current exchange time in epoch milliseconds
    ///
    /// GET /fapi/v1/time
    pub async fn server_time(&self) -> Result<i64> {
        let response: ServerTime = self.send_public("/fapi/v1/time").await?;
        Ok(response.server_time)
    }

    /// Latest traded price for a symbol
    ///
    /// GET /fapi/v1/ticker/price?symbol={symbol}
    pub async fn symbol_price(&self, symbol: &str) -> Result<SymbolPrice> {
        let symbol = normalize_symbol(symbol)?;
        let endpoint = format!("/fapi/v1/ticker/price?symbol={symbol}");
        self.send_public(&endpoint).await
    }

    /// Trading rules and per-symbol precision metadata
    ///
    /// GET /fapi/v1/exchangeInfo
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        self.send_public("/fapi/v1/exchangeInfo").await
    }
}
