/*
[INPUT]:  Parsed CLI arguments and a configured adapter client
[OUTPUT]: Executed exchange calls with rendered results
[POS]:    CLI layer - one handler per subcommand
[UPDATE]: When adding subcommands or changing a command's flow
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use binance_futures_adapter::{validate_order, BinanceFuturesClient, OrderRequest};

use crate::interactive;
use crate::output;
use crate::TradeArgs;

/// Build an order from flags (or prompts), confirm, and place it.
pub async fn trade(client: &BinanceFuturesClient, args: TradeArgs) -> Result<()> {
    let (order, assume_yes) = if args.has_order_flags() {
        (order_from_flags(&args)?, args.yes)
    } else {
        (interactive::prompt_order()?, false)
    };

    let order = validate_order(order)?;
    output::order_summary(&order);

    if !assume_yes && !confirm("Submit this order?")? {
        println!("{}", style("Order not submitted.").yellow());
        return Ok(());
    }

    let ack = client.place_order(order).await?;
    output::order_ack("Order placed", &ack);
    Ok(())
}

pub async fn balance(client: &BinanceFuturesClient) -> Result<()> {
    let balances = client.balances().await?;
    let non_zero: Vec<_> = balances.into_iter().filter(|b| !b.is_zero()).collect();
    output::balances_table(&non_zero);
    Ok(())
}

pub async fn price(client: &BinanceFuturesClient, symbol: &str) -> Result<()> {
    let price = client.symbol_price(symbol).await?;
    output::symbol_price(&price);
    Ok(())
}

pub async fn open_orders(client: &BinanceFuturesClient, symbol: Option<&str>) -> Result<()> {
    let orders = client.open_orders(symbol).await?;
    output::open_orders_table(&orders);
    Ok(())
}

pub async fn cancel(client: &BinanceFuturesClient, symbol: &str, order_id: i64) -> Result<()> {
    let ack = client.cancel_order(symbol, order_id).await?;
    output::order_ack("Order canceled", &ack);
    Ok(())
}

pub async fn cancel_all(client: &BinanceFuturesClient, symbol: &str, assume_yes: bool) -> Result<()> {
    if !assume_yes && !confirm(&format!("Cancel ALL open orders on {symbol}?"))? {
        println!("{}", style("Nothing canceled.").yellow());
        return Ok(());
    }

    let ack = client.cancel_all_orders(symbol).await?;
    println!("{} {}", style("✓").green().bold(), ack.msg);
    Ok(())
}

/// Assemble the order exactly as flagged; validation decides whether the
/// combination is acceptable, so a stray --price on a MARKET order is
/// still caught.
fn order_from_flags(args: &TradeArgs) -> Result<OrderRequest> {
    let symbol = args.symbol.clone().context("--symbol is required")?;
    let side = args.side.context("--side is required")?;
    let order_type = args.order_type.context("--type is required")?;
    let quantity = args.qty.context("--qty is required")?;

    Ok(OrderRequest {
        symbol,
        side,
        order_type,
        quantity,
        price: args.price,
        stop_price: args.stop_price,
        time_in_force: args.tif,
        reduce_only: args.reduce_only,
        client_order_id: args.client_order_id.clone(),
    })
}

fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("read confirmation")?;
    Ok(confirmed)
}
