//! Server configuration

use std::net::SocketAddr;

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub addr: SocketAddr,
    /// Origin allowed by the CORS headers, typically the frontend dev server
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".parse().expect("valid default addr"),
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build a config from `BIOMEGEN_ADDR` and `BIOMEGEN_ORIGIN`, falling
    /// back to the defaults for anything unset. A set but unparsable
    /// address logs a warning and keeps the default.
    pub fn from_env() -> Self {
        let default = Self::default();

        let addr = std::env::var("BIOMEGEN_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    log::warn!("invalid BIOMEGEN_ADDR value {raw:?}, using {}", default.addr);
                    None
                }
            })
            .unwrap_or(default.addr);

        let allowed_origin = std::env::var("BIOMEGEN_ORIGIN").unwrap_or(default.allowed_origin);

        Self {
            addr,
            allowed_origin,
        }
    }
}
