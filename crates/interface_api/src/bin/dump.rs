//! Employee Records - Table Dump
//!
//! Opens the store and prints every employee's name and value, followed by
//! the total count. Useful for checking connectivity against a database file
//! without starting the server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin employee-dump -- sqlite://SqliteDB.db
//! ```
//!
//! The connection string comes from the first argument, then the same
//! environment lookup the server uses (`API_DATABASE_URL`, then
//! `DATABASE_URL`), then the default `sqlite://SqliteDB.db`. The file must
//! already exist.

use anyhow::Context;
use domain_employee::EmployeePort;
use infra_db::{create_pool, DatabaseConfig, SqliteEmployeeAdapter};
use interface_api::config::ApiConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let url = std::env::args()
        .nth(1)
        .or_else(ApiConfig::database_url_from_env)
        .unwrap_or_else(|| DatabaseConfig::default().url);

    let pool = create_pool(DatabaseConfig::new(url.clone()).create_if_missing(false))
        .await
        .with_context(|| format!("could not open {url}"))?;
    println!("Successfully connected to database!");

    let adapter = SqliteEmployeeAdapter::new(pool);
    let employees = adapter
        .list()
        .await
        .context("could not read the Employees table")?;

    println!();
    println!("=== EMPLOYEES TABLE CONTENTS ===");
    println!("{:<24}{:>12}", "Name", "Value");
    println!("{:<24}{:>12}", "----", "-----");
    for employee in &employees {
        println!("{:<24}{:>12}", employee.name, employee.value);
    }

    let total = adapter.count().await.context("could not count employees")?;
    println!();
    println!("Total employees found: {total}");
    Ok(())
}
