use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use otc_core::{Instrument, Quantity, Side};
use otc_runner::{ConsoleReporter, TradingClient, confirm, load_config};

/// Command-line client for the OTC RFQ trading API
#[derive(Parser, Debug)]
#[command(name = "otc-client", version)]
#[command(about = "Request quotes and trade on an OTC RFQ API", long_about = None)]
struct Cli {
    /// JSON config file with auth_token and base_url
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tradable instruments
    Instruments,
    /// List supported currencies
    Currencies,
    /// Show the account balance
    Balance,
    /// Request a quote and trade it after confirmation
    Trade {
        /// Instrument symbol, e.g. BTCUSD.SPOT
        #[arg(long)]
        instrument: String,

        #[arg(long, value_enum)]
        side: SideArg,

        #[arg(long)]
        quantity: Quantity,

        /// Trade without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

async fn run(cli: Cli) -> otc_runner::Result<()> {
    let mut config = load_config(&cli.config)?;
    config.apply_env_overrides();

    let client = TradingClient::from_config(&config)?
        .with_reporter(Arc::new(ConsoleReporter::stdout()));

    match cli.command {
        Command::Instruments => {
            for instrument in client.get_instruments().await? {
                println!("{}", instrument.name);
            }
        }
        Command::Currencies => {
            for (code, info) in client.get_supported_currencies().await? {
                println!("{}: {}", code, info);
            }
        }
        Command::Balance => {
            println!("Account Balance: {}", client.get_balance().await?);
        }
        Command::Trade {
            instrument,
            side,
            quantity,
            yes,
        } => {
            let instrument = Instrument::new(instrument);
            let side = Side::from(side);
            let quote = client.request_quote(&instrument, side, quantity).await?;

            let proceed = yes
                || confirm(
                    &mut io::stdin().lock(),
                    &mut io::stdout(),
                    "Proceed for trade?",
                    Some(true),
                )?;
            if !proceed {
                info!("Trade for quote {} cancelled", quote.client_rfq_id);
                println!("Trade cancelled.");
                return Ok(());
            }

            client
                .make_trade(&instrument, side, quantity, quote.price, &quote.valid_until)
                .await?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
