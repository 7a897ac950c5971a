mod cli;
mod infra;
mod quote;
mod routes;
mod server;

use price_protection::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
