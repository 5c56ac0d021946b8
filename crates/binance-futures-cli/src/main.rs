/*
[INPUT]:  CLI arguments, .env file, BINANCE_API_KEY / BINANCE_API_SECRET
[OUTPUT]: Executed trading commands, console output, logs/trading.log
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use binance_futures_adapter::{
    BinanceFuturesClient, ClientConfig, Credentials, OrderType, Side, TimeInForce,
};

mod commands;
mod interactive;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "binance-futures-cli",
    version,
    about = "Binance USDT-M futures testnet trading CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Tracing filter for console and file logs
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// REST base URL (defaults to the futures testnet)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Signed request freshness window in milliseconds
    #[arg(long = "recv-window", value_name = "MS", global = true)]
    recv_window: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place an order (prompts interactively when no flags are given)
    Trade(TradeArgs),
    /// Show non-zero asset balances
    Balance,
    /// Show the latest price for a symbol
    Price {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,
    },
    /// List open orders, optionally filtered to one symbol
    OpenOrders {
        /// Trading pair, e.g. BTCUSDT
        symbol: Option<String>,
    },
    /// Cancel a single order by id
    Cancel {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,
        /// Exchange-assigned order id
        order_id: i64,
    },
    /// Cancel every open order on a symbol
    CancelAll {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct TradeArgs {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long, short = 's')]
    symbol: Option<String>,

    /// BUY or SELL
    #[arg(long)]
    side: Option<Side>,

    /// MARKET, LIMIT, or STOP_LIMIT
    #[arg(long = "type", short = 't')]
    order_type: Option<OrderType>,

    /// Order quantity in the base asset
    #[arg(long, short = 'q')]
    qty: Option<Decimal>,

    /// Limit price (LIMIT and STOP_LIMIT)
    #[arg(long)]
    price: Option<Decimal>,

    /// Trigger price (STOP_LIMIT)
    #[arg(long = "stop-price")]
    stop_price: Option<Decimal>,

    /// Time in force (defaults to GTC)
    #[arg(long)]
    tif: Option<TimeInForce>,

    /// Only reduce an existing position
    #[arg(long = "reduce-only")]
    reduce_only: bool,

    /// Client-chosen order id echoed back by the exchange
    #[arg(long = "client-order-id")]
    client_order_id: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

impl TradeArgs {
    /// True when the user supplied at least one order field on the command line.
    fn has_order_flags(&self) -> bool {
        self.symbol.is_some()
            || self.side.is_some()
            || self.order_type.is_some()
            || self.qty.is_some()
            || self.price.is_some()
            || self.stop_price.is_some()
    }
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let _guard = match init_tracing(&args.log_level) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("failed to initialize logging: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args).await {
        output::render_error(&err);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    dotenvy::dotenv().ok();

    let client = build_client(&args)?;
    match args.command {
        Command::Trade(trade_args) => commands::trade(&client, trade_args).await,
        Command::Balance => commands::balance(&client).await,
        Command::Price { symbol } => commands::price(&client, &symbol).await,
        Command::OpenOrders { symbol } => commands::open_orders(&client, symbol.as_deref()).await,
        Command::Cancel { symbol, order_id } => commands::cancel(&client, &symbol, order_id).await,
        Command::CancelAll { symbol, yes } => commands::cancel_all(&client, &symbol, yes).await,
    }
}

fn build_client(args: &Cli) -> Result<BinanceFuturesClient> {
    let credentials = Credentials::from_env()
        .context("load API credentials (set BINANCE_API_KEY and BINANCE_API_SECRET)")?;

    let mut config = ClientConfig::default();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(recv_window) = args.recv_window {
        config.recv_window = recv_window;
    }
    debug!(
        base_url = %config.base_url,
        recv_window = config.recv_window,
        "client configured"
    );

    BinanceFuturesClient::with_config(credentials, config).context("initialize HTTP client")
}

/// Console layer plus a plain-text file layer at logs/trading.log.
fn init_tracing(log_level: &str) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    let file_appender = tracing_appender::rolling::never("logs", "trading.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trade_flags_parse() {
        let cli = Cli::parse_from([
            "binance-futures-cli",
            "trade",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--type",
            "STOP_LIMIT",
            "--qty",
            "0.002",
            "--price",
            "61900",
            "--stop-price",
            "62000",
            "--yes",
        ]);

        let Command::Trade(args) = cli.command else {
            panic!("expected trade subcommand");
        };
        assert!(args.has_order_flags());
        assert!(args.yes);
        assert_eq!(args.side, Some(Side::Buy));
        assert_eq!(args.order_type, Some(OrderType::StopLimit));
        assert_eq!(args.qty, Some(Decimal::new(2, 3)));
    }

    #[test]
    fn test_trade_without_flags_selects_interactive() {
        let cli = Cli::parse_from(["binance-futures-cli", "trade"]);
        let Command::Trade(args) = cli.command else {
            panic!("expected trade subcommand");
        };
        assert!(!args.has_order_flags());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "binance-futures-cli",
            "price",
            "BTCUSDT",
            "--recv-window",
            "7000",
        ]);
        assert_eq!(cli.recv_window, Some(7000));
    }
}
