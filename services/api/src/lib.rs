mod cli;
mod infra;
mod routes;
mod server;

use benefit_check::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
