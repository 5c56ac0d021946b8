/*
[INPUT]:  Validated order requests and cancellation targets
[OUTPUT]: Exchange acknowledgements for placement and cancellation
[POS]:    HTTP layer - trading endpoints (require API key + query signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use tracing::{error, info};

use crate::http::{BinanceFuturesClient, Result};
use crate::types::{CancelAllAck, Order, OrderRequest};
use crate::validate::{normalize_symbol, validate_order};

impl BinanceFuturesClient {
    /// Validate an order, build its wire parameters, sign and submit.
    /// Validation failures short-circuit before anything is sent.
    ///
    /// POST /fapi/v1/order
    pub async fn place_order(&self, order: OrderRequest) -> Result<Order> {
        let order = validate_order(order)?;
        let params = order.wire_params();
        info!(
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type,
            quantity = %order.quantity,
            "placing order"
        );

        match self
            .send_signed::<Order>(Method::POST, "/fapi/v1/order", &params)
            .await
        {
            Ok(ack) => {
                info!(order_id = ack.order_id, status = %ack.status, "order accepted");
                Ok(ack)
            }
            Err(err) => {
                error!(error = %err, "order rejected");
                Err(err)
            }
        }
    }

    /// Cancel a single order by exchange-assigned id
    ///
    /// DELETE /fapi/v1/order
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<Order> {
        let symbol = normalize_symbol(symbol)?;
        let params = vec![
            ("symbol", symbol),
            ("orderId", order_id.to_string()),
        ];

        let ack: Order = self
            .send_signed(Method::DELETE, "/fapi/v1/order", &params)
            .await?;
        info!(order_id = ack.order_id, status = %ack.status, "order canceled");
        Ok(ack)
    }

    /// Cancel every open order on a symbol
    ///
    /// DELETE /fapi/v1/allOpenOrders
    pub async fn cancel_all_orders(&self, symbol: &str) -> Result<CancelAllAck> {
        let symbol = normalize_symbol(symbol)?;
        let params = vec![("symbol", symbol.clone())];

        let ack: CancelAllAck = self
            .send_signed(Method::DELETE, "/fapi/v1/allOpenOrders", &params)
            .await?;
        info!(%symbol, "all open orders canceled");
        Ok(ack)
    }
}
