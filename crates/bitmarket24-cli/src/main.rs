/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: API results printed as JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use bitmarket24::{
    Bitmarket24Client, ClientOrdersQuery, MarketId, OrderStatus, OrderType, RawResponse,
    SortDirection,
};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "bitmarket24-cli", version, about = "Bitmarket24 exchange command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", default_value = "bitmarket24.yaml")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Market for this invocation, overriding `default_market`
    #[arg(long, global = true)]
    market: Option<MarketId>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Public market status document
    MarketStatus,
    /// Public order book
    OrderBook,
    /// Account balances
    Balance,
    /// Own orders in a market
    Orders {
        #[arg(long = "type")]
        order_type: Option<OrderType>,
        /// Repeatable status filter
        #[arg(long = "status")]
        statuses: Vec<OrderStatus>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        dir: Option<SortDirection>,
    },
    /// Own trades in a market
    Trades {
        #[arg(long = "type")]
        order_type: OrderType,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Trading turnover
    Turnover,
    /// Fee schedule
    Fee,
    /// Details of one order
    OrderInfo { order_id: u64 },
    /// Fills of one order
    OrderTrades { order_id: u64 },
    /// Cancel one order
    Cancel { order_id: u64 },
    /// Cancel all orders in a market
    CancelAll {
        #[arg(long = "type")]
        order_type: Option<OrderType>,
    },
    /// Place a buy offer
    Bid {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        rate: Decimal,
    },
    /// Place a sell offer
    Ask {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        rate: Decimal,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(config_path = %args.config_path.display(), "starting bitmarket24 cli");
    let config = CliConfig::from_file(&args.config_path).context("load config")?;
    let client = config.build_client(args.market)?;

    run(&client, args.command).await
}

async fn run(client: &Bitmarket24Client, command: Command) -> Result<()> {
    match command {
        Command::MarketStatus => print_json(&client.get_market_status(None).await?),
        Command::OrderBook => print_json(&client.get_order_book(None).await?),
        Command::Balance => print_json(&client.get_client_balance().await?),
        Command::Orders {
            order_type,
            statuses,
            limit,
            offset,
            dir,
        } => {
            let query = ClientOrdersQuery {
                market: None,
                order_type,
                statuses,
                limit,
                offset,
                dir,
            };
            print_json(&client.get_client_orders(&query).await?)
        }
        Command::Trades {
            order_type,
            limit,
            offset,
        } => print_json(
            &client
                .get_client_trades(order_type, None, limit, offset)
                .await?,
        ),
        Command::Turnover => print_json(&client.get_client_turnover().await?),
        Command::Fee => print_json(&client.get_client_fee().await?),
        Command::OrderInfo { order_id } => print_json(&client.get_order_info(order_id).await?),
        Command::OrderTrades { order_id } => {
            print_json(&client.get_order_trades(order_id).await?)
        }
        Command::Cancel { order_id } => {
            let cancelled = client.cancel_order(order_id).await?;
            println!("{}", serde_json::json!({ "order_id": order_id, "cancelled": cancelled }));
            Ok(())
        }
        Command::CancelAll { order_type } => {
            print_raw(&client.cancel_orders(None, order_type).await?)
        }
        Command::Bid { amount, rate } => print_raw(&client.place_bid(amount, rate, None).await?),
        Command::Ask { amount, rate } => print_raw(&client.place_ask(amount, rate, None).await?),
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_raw(response: &RawResponse) -> Result<()> {
    let body = response
        .json::<serde_json::Value>()
        .unwrap_or_else(|_| serde_json::Value::String(response.body.clone()));
    print_json(&serde_json::json!({ "status": response.status, "body": body }))
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
