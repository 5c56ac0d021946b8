/*
[INPUT]:  User-supplied order fields before any network activity
[OUTPUT]: Normalized order requests, or the first violated rule as a typed error
[POS]:    Validation layer - pre-flight checks in front of the HTTP client
[UPDATE]: When exchange constraints on order fields change
*/

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{OrderRequest, OrderType};

/// A pre-flight rule violation. Produced before anything is signed or
/// sent, naming the offending field and the expectation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol must not be empty")]
    EmptySymbol,

    #[error("symbol '{0}' is too short for a trading pair")]
    SymbolTooShort(String),

    #[error("symbol '{0}' may only contain letters and digits")]
    SymbolNotAlphanumeric(String),

    #[error("unknown side '{0}', expected BUY or SELL")]
    UnknownSide(String),

    #[error("unknown order type '{0}', expected MARKET, LIMIT or STOP_LIMIT")]
    UnknownOrderType(String),

    #[error("unknown time in force '{0}', expected GTC, IOC, FOK or GTX")]
    UnknownTimeInForce(String),

    #[error("quantity must be greater than zero, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("price must be greater than zero, got {0}")]
    NonPositivePrice(Decimal),

    #[error("stop price must be greater than zero, got {0}")]
    NonPositiveStopPrice(Decimal),

    #[error("{0} orders require a price")]
    MissingPrice(OrderType),

    #[error("{0} orders require a stop price")]
    MissingStopPrice(OrderType),

    #[error("{0} orders do not take a price")]
    UnexpectedPrice(OrderType),

    #[error("{0} orders do not take a stop price")]
    UnexpectedStopPrice(OrderType),
}

/// Trim, uppercase and check a trading pair symbol.
///
/// The exchange only knows uppercase alphanumeric pairs (BTCUSDT,
/// ETHUSDT, 1000PEPEUSDT), so lowercase input is normalized rather than
/// rejected.
pub fn normalize_symbol(symbol: &str) -> Result<String, ValidationError> {
    let symbol = symbol.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }
    if symbol.len() < 2 {
        return Err(ValidationError::SymbolTooShort(symbol));
    }
    if !symbol.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ValidationError::SymbolNotAlphanumeric(symbol));
    }
    Ok(symbol)
}

/// Check every order field against the exchange's constraints, failing
/// fast on the first violation. Side and type are already closed enums;
/// their unknown-value errors are produced at the `FromStr` boundary.
///
/// Pure and deterministic: no network access, no side effects. Returns
/// the request with its symbol normalized, ready for wire-parameter
/// construction.
pub fn validate_order(mut order: OrderRequest) -> Result<OrderRequest, ValidationError> {
    order.symbol = normalize_symbol(&order.symbol)?;

    if order.quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity(order.quantity));
    }

    match order.order_type {
        OrderType::Market => {
            if order.price.is_some() {
                return Err(ValidationError::UnexpectedPrice(OrderType::Market));
            }
            if order.stop_price.is_some() {
                return Err(ValidationError::UnexpectedStopPrice(OrderType::Market));
            }
        }
        OrderType::Limit => {
            let price = order
                .price
                .ok_or(ValidationError::MissingPrice(OrderType::Limit))?;
            if price <= Decimal::ZERO {
                return Err(ValidationError::NonPositivePrice(price));
            }
            if order.stop_price.is_some() {
                return Err(ValidationError::UnexpectedStopPrice(OrderType::Limit));
            }
        }
        OrderType::StopLimit => {
            let stop_price = order
                .stop_price
                .ok_or(ValidationError::MissingStopPrice(OrderType::StopLimit))?;
            if stop_price <= Decimal::ZERO {
                return Err(ValidationError::NonPositiveStopPrice(stop_price));
            }
            let price = order
                .price
                .ok_or(ValidationError::MissingPrice(OrderType::StopLimit))?;
            if price <= Decimal::ZERO {
                return Err(ValidationError::NonPositivePrice(price));
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_symbol_uppercases_and_trims() {
        assert_eq!(normalize_symbol(" btcusdt ").unwrap(), "BTCUSDT");
        assert_eq!(normalize_symbol("1000PEPEUSDT").unwrap(), "1000PEPEUSDT");
    }

    #[test]
    fn test_normalize_symbol_rejects_bad_input() {
        assert_eq!(normalize_symbol("  "), Err(ValidationError::EmptySymbol));
        assert_eq!(
            normalize_symbol("B"),
            Err(ValidationError::SymbolTooShort("B".to_string()))
        );
        assert_eq!(
            normalize_symbol("BTC-USD"),
            Err(ValidationError::SymbolNotAlphanumeric("BTC-USD".to_string()))
        );
    }

    #[test]
    fn test_market_order_passes_and_normalizes() {
        let order = OrderRequest::market("btcusdt", Side::Buy, dec("0.002"));
        let validated = validate_order(order).unwrap();
        assert_eq!(validated.symbol, "BTCUSDT");
    }

    #[test]
    fn test_market_order_rejects_price_fields() {
        let mut order = OrderRequest::market("BTCUSDT", Side::Buy, dec("1"));
        order.price = Some(dec("100"));
        assert_eq!(
            validate_order(order),
            Err(ValidationError::UnexpectedPrice(OrderType::Market))
        );

        let mut order = OrderRequest::market("BTCUSDT", Side::Buy, dec("1"));
        order.stop_price = Some(dec("100"));
        assert_eq!(
            validate_order(order),
            Err(ValidationError::UnexpectedStopPrice(OrderType::Market))
        );
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let order = OrderRequest::market("BTCUSDT", Side::Buy, Decimal::ZERO);
        assert_eq!(
            validate_order(order),
            Err(ValidationError::NonPositiveQuantity(Decimal::ZERO))
        );

        let order = OrderRequest::market("BTCUSDT", Side::Sell, dec("-0.5"));
        assert!(matches!(
            validate_order(order),
            Err(ValidationError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn test_limit_order_requires_positive_price_and_no_stop() {
        let mut order = OrderRequest::limit("BTCUSDT", Side::Buy, dec("1"), dec("100"));
        order.price = None;
        assert_eq!(
            validate_order(order),
            Err(ValidationError::MissingPrice(OrderType::Limit))
        );

        let order = OrderRequest::limit("BTCUSDT", Side::Buy, dec("1"), dec("0"));
        assert_eq!(
            validate_order(order),
            Err(ValidationError::NonPositivePrice(Decimal::ZERO))
        );

        let mut order = OrderRequest::limit("BTCUSDT", Side::Buy, dec("1"), dec("100"));
        order.stop_price = Some(dec("99"));
        assert_eq!(
            validate_order(order),
            Err(ValidationError::UnexpectedStopPrice(OrderType::Limit))
        );
    }

    #[test]
    fn test_stop_limit_requires_both_prices() {
        let mut order =
            OrderRequest::stop_limit("BTCUSDT", Side::Sell, dec("1"), dec("100"), dec("99"));
        order.stop_price = None;
        assert_eq!(
            validate_order(order),
            Err(ValidationError::MissingStopPrice(OrderType::StopLimit))
        );

        let mut order =
            OrderRequest::stop_limit("BTCUSDT", Side::Sell, dec("1"), dec("100"), dec("99"));
        order.price = None;
        assert_eq!(
            validate_order(order),
            Err(ValidationError::MissingPrice(OrderType::StopLimit))
        );

        let order =
            OrderRequest::stop_limit("BTCUSDT", Side::Sell, dec("1"), dec("-1"), dec("99"));
        assert!(matches!(
            validate_order(order),
            Err(ValidationError::NonPositiveStopPrice(_))
        ));
    }
}
