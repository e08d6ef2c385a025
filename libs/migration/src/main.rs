//! Standalone migration runner for the users schema.
//!
//! Reads `DATABASE_URL` and accepts the usual `sea-orm-migration` commands
//! (`up`, `down`, `status`, `fresh`, ...).

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
