/*
[INPUT]:  Account-scoped queries (balances, open orders, account totals)
[OUTPUT]: Typed account state from signed endpoints
[POS]:    HTTP layer - account endpoints (require API key + query signature)
[UPDATE]: When adding new account endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{BinanceFuturesClient, Result};
use crate::types::{AccountSummary, AssetBalance, Order};
use crate::validate::normalize_symbol;

impl BinanceFuturesClient {
    /// Per-asset wallet balances
    ///
    /// GET /fapi/v2/balance
    pub async fn balances(&self) -> Result<Vec<AssetBalance>> {
        self.send_signed(Method::GET, "/fapi/v2/balance", &[]).await
    }

    /// Open orders, exchange-wide or filtered to one symbol
    ///
    /// GET /fapi/v1/openOrders
    pub async fn open_orders(&self, symbol: Option<&str>) -> Result<Vec<Order>> {
        let params = match symbol {
            Some(symbol) => vec![("symbol", normalize_symbol(symbol)?)],
            None => Vec::new(),
        };
        self.send_signed(Method::GET, "/fapi/v1/openOrders", &params)
            .await
    }

    /// Account-wide margin totals and trading permissions
    ///
    /// GET /fapi/v2/account
    pub async fn account(&self) -> Result<AccountSummary> {
        self.send_signed(Method::GET, "/fapi/v2/account", &[]).await
    }
}
