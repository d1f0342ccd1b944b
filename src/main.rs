//! Biomegen - Entry Point
//!
//! This is the main executable that reads the server configuration,
//! binds the HTTP listener, and serves requests until shut down.

use anyhow::Result;

use biomegen::server::{ApiServer, ServerConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting biomegen v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::from_env();
    log::info!(
        "Binding {} (allowed origin: {})",
        config.addr,
        config.allowed_origin
    );

    let server = ApiServer::bind(config)?;
    log::info!("Listening on http://{}", server.local_addr());

    server.run();

    log::info!("Biomegen shut down cleanly");
    Ok(())
}
