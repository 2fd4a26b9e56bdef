mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use fra_atlas::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
