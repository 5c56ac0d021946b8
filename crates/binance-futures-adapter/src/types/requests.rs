/*
[INPUT]:  Caller order intent (symbol, side, type, quantity, prices)
[OUTPUT]: Typed request structs and their canonical wire parameters
[POS]:    Data layer - type definitions for exchange communication
[UPDATE]: When exchange schema changes or new order fields added
*/

use rust_decimal::Decimal;

use super::enums::{OrderType, Side, TimeInForce};

/// A single order to be placed on the futures testnet.
///
/// Construct through [`OrderRequest::market`], [`OrderRequest::limit`] or
/// [`OrderRequest::stop_limit`], then hand to
/// [`crate::BinanceFuturesClient::place_order`], which validates the
/// fields before anything touches the network.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Decimal,
    /// Limit price; required for LIMIT and STOP_LIMIT, forbidden for MARKET
    pub price: Option<Decimal>,
    /// Trigger price; required for STOP_LIMIT, forbidden otherwise
    pub stop_price: Option<Decimal>,
    /// Defaults to GTC for LIMIT and STOP_LIMIT; never sent for MARKET
    pub time_in_force: Option<TimeInForce>,
    pub reduce_only: bool,
    pub client_order_id: Option<String>,
}

impl OrderRequest {
    /// Market order: executes immediately at the best available price
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
            reduce_only: false,
            client_order_id: None,
        }
    }

    /// Limit order: rests on the book at `price` until filled or canceled
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            stop_price: None,
            time_in_force: Some(TimeInForce::Gtc),
            reduce_only: false,
            client_order_id: None,
        }
    }

    /// Stop-limit order: once the mark crosses `stop_price`, a limit order
    /// at `price` is placed
    pub fn stop_limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        stop_price: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::StopLimit,
            quantity,
            price: Some(price),
            stop_price: Some(stop_price),
            time_in_force: Some(TimeInForce::Gtc),
            reduce_only: false,
            client_order_id: None,
        }
    }

    /// Override the time in force (GTC unless set)
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Mark the order as position-reducing only
    pub fn reduce_only(mut self) -> Self {
        self.reduce_only = true;
        self
    }

    /// Attach a caller-chosen id, echoed back in the acknowledgement
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Build the request parameters in canonical order.
    ///
    /// The order of this list is the order signed and sent: symbol, side,
    /// type, quantity, then the per-type price fields, then the optional
    /// extras. `recvWindow`, `timestamp` and `signature` are appended by
    /// the client at send time.
    pub fn wire_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.wire_name().to_string()),
            ("quantity", self.quantity.to_string()),
        ];

        match self.order_type {
            OrderType::Market => {}
            OrderType::Limit => {
                if let Some(price) = self.price {
                    params.push(("price", price.to_string()));
                }
                params.push(("timeInForce", self.effective_time_in_force().as_str().to_string()));
            }
            OrderType::StopLimit => {
                if let Some(stop_price) = self.stop_price {
                    params.push(("stopPrice", stop_price.to_string()));
                }
                if let Some(price) = self.price {
                    params.push(("price", price.to_string()));
                }
                params.push(("timeInForce", self.effective_time_in_force().as_str().to_string()));
            }
        }

        if self.reduce_only {
            params.push(("reduceOnly", "true".to_string()));
        }
        if let Some(id) = &self.client_order_id {
            params.push(("newClientOrderId", id.clone()));
        }

        params
    }

    fn effective_time_in_force(&self) -> TimeInForce {
        self.time_in_force.unwrap_or(TimeInForce::Gtc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_market_order_params_exclude_price_fields() {
        let order = OrderRequest::market("BTCUSDT", Side::Buy, dec("0.002"));
        let params = order.wire_params();

        assert_eq!(param(&params, "symbol"), Some("BTCUSDT"));
        assert_eq!(param(&params, "side"), Some("BUY"));
        assert_eq!(param(&params, "type"), Some("MARKET"));
        assert_eq!(param(&params, "quantity"), Some("0.002"));
        assert_eq!(param(&params, "price"), None);
        assert_eq!(param(&params, "stopPrice"), None);
        assert_eq!(param(&params, "timeInForce"), None);
    }

    #[test]
    fn test_limit_order_params_include_price_and_gtc_default() {
        let order = OrderRequest::limit("ETHUSDT", Side::Sell, dec("0.5"), dec("2400.50"));
        let params = order.wire_params();

        assert_eq!(param(&params, "type"), Some("LIMIT"));
        assert_eq!(param(&params, "price"), Some("2400.50"));
        assert_eq!(param(&params, "timeInForce"), Some("GTC"));
        assert_eq!(param(&params, "stopPrice"), None);
    }

    #[test]
    fn test_stop_limit_order_maps_to_stop_with_both_prices() {
        let order =
            OrderRequest::stop_limit("BTCUSDT", Side::Sell, dec("0.01"), dec("62000"), dec("61900"));
        let params = order.wire_params();

        assert_eq!(param(&params, "type"), Some("STOP"));
        assert_eq!(param(&params, "stopPrice"), Some("62000"));
        assert_eq!(param(&params, "price"), Some("61900"));
        assert_eq!(param(&params, "timeInForce"), Some("GTC"));
    }

    #[test]
    fn test_params_keep_canonical_insertion_order() {
        let order =
            OrderRequest::stop_limit("BTCUSDT", Side::Buy, dec("1"), dec("100"), dec("99"));
        let keys: Vec<&str> = order.wire_params().iter().map(|(k, _)| *k).collect();

        assert_eq!(
            keys,
            vec!["symbol", "side", "type", "quantity", "stopPrice", "price", "timeInForce"]
        );
    }

    #[test]
    fn test_optional_extras_are_appended_last() {
        let order = OrderRequest::limit("BTCUSDT", Side::Buy, dec("1"), dec("100"))
            .with_time_in_force(TimeInForce::Ioc)
            .reduce_only()
            .with_client_order_id("cli-42");
        let params = order.wire_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();

        assert_eq!(param(&params, "timeInForce"), Some("IOC"));
        assert_eq!(param(&params, "reduceOnly"), Some("true"));
        assert_eq!(param(&params, "newClientOrderId"), Some("cli-42"));
        assert_eq!(
            keys,
            vec!["symbol", "side", "type", "quantity", "price", "timeInForce", "reduceOnly", "newClientOrderId"]
        );
    }

    #[test]
    fn test_quantity_keeps_caller_scale() {
        let order = OrderRequest::market("BTCUSDT", Side::Buy, dec("0.0020"));
        let params = order.wire_params();

        // Decimal preserves trailing scale; the exchange accepts both forms.
        assert_eq!(param(&params, "quantity"), Some("0.0020"));
    }
}
