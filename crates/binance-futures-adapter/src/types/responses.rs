/*
[INPUT]:  Exchange schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for exchange communication
[UPDATE]: When exchange schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, Side};

/// GET /fapi/v1/time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

/// GET /fapi/v1/ticker/price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPrice {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub time: i64,
}

/// An order as the exchange reports it, both in placement and cancel
/// acknowledgements and in open-order listings.
///
/// The exchange pads unused decimal fields with `"0"` rather than
/// omitting them, so the decimals here are zero when not applicable.
/// `order_type` stays a plain string because listings may contain kinds
/// placed through other tools (`TAKE_PROFIT_MARKET` and friends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i64,
    pub symbol: String,
    pub status: OrderStatus,
    pub client_order_id: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(default)]
    pub time_in_force: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub avg_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub orig_qty: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_qty: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub stop_price: Decimal,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub update_time: i64,
}

/// DELETE /fapi/v1/allOpenOrders
///
/// Success is reported through the same `{code, msg}` shape the exchange
/// uses for errors, with `code` set to 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelAllAck {
    pub code: i64,
    pub msg: String,
}

/// One asset entry from GET /fapi/v2/balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub asset: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cross_wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cross_un_pnl: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_withdraw_amount: Decimal,
    #[serde(default)]
    pub margin_available: bool,
    #[serde(default)]
    pub update_time: i64,
}

impl AssetBalance {
    /// Entries the exchange pads with all-zero amounts carry no information
    pub fn is_zero(&self) -> bool {
        self.balance.is_zero() && self.cross_un_pnl.is_zero()
    }
}

/// Account-wide totals from GET /fapi/v2/account, trimmed to the fields
/// the adapter surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub can_trade: bool,
    #[serde(default)]
    pub can_deposit: bool,
    #[serde(default)]
    pub can_withdraw: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_unrealized_profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_margin_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_withdraw_amount: Decimal,
}

/// GET /fapi/v1/exchangeInfo, trimmed to symbol metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(default)]
    pub timezone: String,
    pub server_time: i64,
    pub symbols: Vec<SymbolMeta>,
}

/// Per-symbol trading metadata from the exchange info endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMeta {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    pub price_precision: u32,
    pub quantity_precision: u32,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_deserializes_placement_ack() {
        let value = json!({
            "orderId": 4055218449_i64,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-a1b2c3",
            "price": "61900",
            "avgPrice": "0.00000",
            "origQty": "0.010",
            "executedQty": "0",
            "cumQty": "0",
            "cumQuote": "0",
            "timeInForce": "GTC",
            "type": "STOP",
            "reduceOnly": false,
            "closePosition": false,
            "side": "SELL",
            "positionSide": "BOTH",
            "stopPrice": "62000",
            "workingType": "CONTRACT_PRICE",
            "priceProtect": false,
            "origType": "STOP",
            "updateTime": 1_717_000_000_123_i64
        });

        let order: Order = serde_json::from_value(value).expect("ack should deserialize");

        assert_eq!(order.order_id, 4055218449);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.order_type, "STOP");
        assert_eq!(order.stop_price.to_string(), "62000");
        assert_eq!(order.avg_price, Decimal::ZERO);
    }

    #[test]
    fn order_tolerates_missing_optional_fields() {
        let value = json!({
            "orderId": 1,
            "symbol": "ETHUSDT",
            "status": "CANCELED",
            "clientOrderId": "c-1",
            "side": "BUY",
            "type": "LIMIT",
            "price": "2400.50",
            "origQty": "0.5",
            "executedQty": "0"
        });

        let order: Order = serde_json::from_value(value).expect("order should deserialize");

        assert_eq!(order.status, OrderStatus::Canceled);
        assert_eq!(order.stop_price, Decimal::ZERO);
        assert_eq!(order.update_time, 0);
        assert!(!order.reduce_only);
    }

    #[test]
    fn balance_entry_deserializes_and_detects_zero() {
        let value = json!({
            "accountAlias": "SgsR",
            "asset": "USDT",
            "balance": "15000.00000000",
            "crossWalletBalance": "15000.00000000",
            "crossUnPnl": "0.00000000",
            "availableBalance": "14980.12345678",
            "maxWithdrawAmount": "14980.12345678",
            "marginAvailable": true,
            "updateTime": 1_717_000_000_000_i64
        });

        let entry: AssetBalance = serde_json::from_value(value).expect("balance entry");
        assert_eq!(entry.asset, "USDT");
        assert!(!entry.is_zero());

        let padded = json!({
            "asset": "BNB",
            "balance": "0.00000000",
            "crossWalletBalance": "0.00000000",
            "crossUnPnl": "0.00000000",
            "availableBalance": "0.00000000",
            "maxWithdrawAmount": "0.00000000"
        });
        let padded: AssetBalance = serde_json::from_value(padded).expect("padded entry");
        assert!(padded.is_zero());
    }

    #[test]
    fn cancel_all_ack_parses_success_shape() {
        let ack: CancelAllAck = serde_json::from_str(
            r#"{"code": 200, "msg": "The operation of cancel all open order is done."}"#,
        )
        .expect("cancel-all ack");

        assert_eq!(ack.code, 200);
        assert!(ack.msg.contains("cancel all open order"));
    }

    #[test]
    fn exchange_info_keeps_symbol_metadata() {
        let value = json!({
            "timezone": "UTC",
            "serverTime": 1_717_000_000_000_i64,
            "futuresType": "U_MARGINED",
            "rateLimits": [],
            "symbols": [{
                "symbol": "BTCUSDT",
                "status": "TRADING",
                "baseAsset": "BTC",
                "quoteAsset": "USDT",
                "pricePrecision": 2,
                "quantityPrecision": 3,
                "filters": []
            }]
        });

        let info: ExchangeInfo = serde_json::from_value(value).expect("exchange info");
        assert_eq!(info.symbols.len(), 1);
        assert_eq!(info.symbols[0].quantity_precision, 3);
    }
}
