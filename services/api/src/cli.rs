use crate::quote::{run_partners, run_quote, run_rules, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use price_protection::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Price Protection Calculator",
    about = "Calculate partner price protection floors and positioning language",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Calculate the non-incumbent floor price for a deal
    Quote(QuoteArgs),
    /// List selectable partners and their tiers
    Partners,
    /// Print the partner pricing rules reference
    Rules,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Partners => {
            run_partners();
            Ok(())
        }
        Command::Rules => {
            run_rules();
            Ok(())
        }
    }
}
