/*
[INPUT]:  User keyboard input via dialoguer prompts
[OUTPUT]: An OrderRequest assembled from the answers
[POS]:    CLI interactive flow
[UPDATE]: When prompt order or offered fields change
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use rust_decimal::Decimal;
use std::str::FromStr;

use binance_futures_adapter::{OrderRequest, Side};

/// Prompt for every order field. The result still goes through
/// `validate_order`, so answers only need to parse here.
pub fn prompt_order() -> Result<OrderRequest> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Interactive order entry").bold().cyan());

    let kinds = vec!["Market", "Limit", "Stop-limit"];
    let kind_index = Select::with_theme(&theme)
        .with_prompt("Order type")
        .items(&kinds)
        .default(0)
        .interact()?;

    let symbol: String = Input::with_theme(&theme)
        .with_prompt("Symbol")
        .default("BTCUSDT".to_string())
        .interact_text()?;

    let sides = vec!["BUY", "SELL"];
    let side_index = Select::with_theme(&theme)
        .with_prompt("Side")
        .items(&sides)
        .default(0)
        .interact()?;
    let side = if side_index == 0 { Side::Buy } else { Side::Sell };

    let quantity = prompt_decimal(&theme, "Quantity")?;

    let order = match kind_index {
        0 => OrderRequest::market(symbol, side, quantity),
        1 => {
            let price = prompt_decimal(&theme, "Limit price")?;
            OrderRequest::limit(symbol, side, quantity, price)
        }
        _ => {
            let stop_price = prompt_decimal(&theme, "Trigger price")?;
            let price = prompt_decimal(&theme, "Limit price")?;
            OrderRequest::stop_limit(symbol, side, quantity, stop_price, price)
        }
    };

    Ok(order)
}

fn prompt_decimal(theme: &ColorfulTheme, prompt: &str) -> Result<Decimal> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?;
    Decimal::from_str(raw.trim()).with_context(|| format!("{prompt} must be a decimal number"))
}
