//! HTTP server for the Salary Engine.
//!
//! Environment:
//! - `SALARY_ENGINE_ADDR`: listen address, default `127.0.0.1:3000`
//! - `SALARY_ENGINE_CONFIG`: optional YAML rate table; the compiled-in
//!   standard tables are used when unset
//!
//! The binary installs no `tracing` subscriber, so it writes no log output.
//! The library's request and config events reach a subscriber only when the
//! router is embedded in an application that installs one.

use std::error::Error;

use tokio::net::TcpListener;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::var("SALARY_ENGINE_CONFIG") {
        Ok(path) => ConfigLoader::load(path)?,
        Err(_) => ConfigLoader::standard(),
    };
    let addr = std::env::var("SALARY_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(&addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
