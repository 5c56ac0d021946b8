/*
[INPUT]:  Typed adapter results
[OUTPUT]: Styled console rendering (summaries, tables, errors)
[POS]:    CLI presentation layer
[UPDATE]: When console formatting changes
*/

use console::style;

use binance_futures_adapter::{AssetBalance, Order, OrderRequest, SymbolPrice};

pub fn order_summary(order: &OrderRequest) {
    println!();
    println!("{}", style("Order summary").bold());
    println!("  {} {}", style("Symbol:").dim(), order.symbol);
    println!("  {} {}", style("Side:  ").dim(), order.side);
    println!("  {} {}", style("Type:  ").dim(), order.order_type);
    println!("  {} {}", style("Qty:   ").dim(), order.quantity);
    if let Some(stop_price) = order.stop_price {
        println!("  {} {}", style("Stop:  ").dim(), stop_price);
    }
    if let Some(price) = order.price {
        println!("  {} {}", style("Price: ").dim(), price);
    }
    if let Some(time_in_force) = order.time_in_force {
        println!("  {} {}", style("TIF:   ").dim(), time_in_force);
    }
    if order.reduce_only {
        println!("  {}", style("Reduce-only").yellow());
    }
}

pub fn order_ack(heading: &str, ack: &Order) {
    println!();
    println!("{} {}", style("✓").green().bold(), style(heading).bold());
    println!("  {} {}", style("Order ID:").dim(), ack.order_id);
    println!("  {} {}", style("Symbol:  ").dim(), ack.symbol);
    println!("  {} {} {}", style("Order:   ").dim(), ack.side, ack.order_type);
    println!("  {} {}", style("Status:  ").dim(), ack.status);
    println!(
        "  {} {} filled of {}",
        style("Qty:     ").dim(),
        ack.executed_qty,
        ack.orig_qty
    );
    if !ack.stop_price.is_zero() {
        println!("  {} {}", style("Stop:    ").dim(), ack.stop_price);
    }
    if !ack.price.is_zero() {
        println!("  {} {}", style("Price:   ").dim(), ack.price);
    }
    if !ack.avg_price.is_zero() {
        println!("  {} {}", style("Avg fill:").dim(), ack.avg_price);
    }
}

pub fn balances_table(balances: &[AssetBalance]) {
    if balances.is_empty() {
        println!("{}", style("No non-zero balances.").yellow());
        return;
    }

    println!("{}", style("Asset balances").bold());
    println!(
        "{}",
        style(format!(
            "  {:<8} {:>20} {:>20} {:>20}",
            "ASSET", "BALANCE", "AVAILABLE", "UNREALIZED PNL"
        ))
        .dim()
    );
    for entry in balances {
        println!(
            "  {:<8} {:>20} {:>20} {:>20}",
            entry.asset,
            entry.balance.to_string(),
            entry.available_balance.to_string(),
            entry.cross_un_pnl.to_string()
        );
    }
}

pub fn open_orders_table(orders: &[Order]) {
    if orders.is_empty() {
        println!("{}", style("No open orders.").yellow());
        return;
    }

    println!("{}", style(format!("Open orders ({})", orders.len())).bold());
    println!(
        "{}",
        style(format!(
            "  {:<12} {:<10} {:<5} {:<12} {:>14} {:>14} {:>14}",
            "ORDER ID", "SYMBOL", "SIDE", "TYPE", "PRICE", "QTY", "FILLED"
        ))
        .dim()
    );
    for order in orders {
        println!(
            "  {:<12} {:<10} {:<5} {:<12} {:>14} {:>14} {:>14}",
            order.order_id,
            order.symbol,
            order.side.as_str(),
            order.order_type,
            order.price.to_string(),
            order.orig_qty.to_string(),
            order.executed_qty.to_string()
        );
    }
}

pub fn symbol_price(price: &SymbolPrice) {
    println!(
        "{} {}",
        style(&price.symbol).cyan().bold(),
        style(price.price.to_string()).green()
    );
}

/// Single-line error rendering; the full chain also lands in the log file.
pub fn render_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("✗").red().bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_futures_adapter::{OrderType, Side};
    use rust_decimal::Decimal;

    // Rendering goes to stdout; these only assert the helpers accept the
    // real shapes without panicking.
    #[test]
    fn test_summary_renders_every_order_shape() {
        let market = OrderRequest::market("BTCUSDT", Side::Buy, Decimal::new(2, 3));
        order_summary(&market);

        let stop = OrderRequest::stop_limit(
            "BTCUSDT",
            Side::Sell,
            Decimal::new(10, 3),
            Decimal::new(62_000, 0),
            Decimal::new(61_900, 0),
        )
        .reduce_only();
        assert_eq!(stop.order_type, OrderType::StopLimit);
        order_summary(&stop);
    }

    #[test]
    fn test_tables_handle_empty_input() {
        balances_table(&[]);
        open_orders_table(&[]);
    }
}
