//! HTTP API server
//!
//! A small tiny_http front end over the generator. `POST /generate` runs
//! one world generation and returns the grid as JSON; `/legend` returns
//! the static biome metadata table. Every response carries CORS headers
//! so a browser frontend on another origin can call the API directly.

use std::io::{Cursor, Read};
use std::net::SocketAddr;

use tiny_http::{Header, Method, Request, Response, Server};

use crate::biome::generator::generate_world;
use crate::biome::kind::legend;
use crate::server::config::ServerConfig;
use crate::server::request::params_from_request;

/// Errors surfaced by the API server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: SocketAddr, reason: String },
    #[error("i/o error while answering a request: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The HTTP front end for the world generator.
pub struct ApiServer {
    server: Server,
    local_addr: SocketAddr,
    cors: Vec<Header>,
}

impl ApiServer {
    /// Bind the listener. Port 0 picks an ephemeral port; `local_addr`
    /// reports which one.
    pub fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let server = Server::http(config.addr).map_err(|e| ServerError::Bind {
            addr: config.addr,
            reason: e.to_string(),
        })?;
        let local_addr = server.server_addr().to_ip().unwrap_or(config.addr);

        Ok(Self {
            server,
            local_addr,
            cors: cors_headers(&config),
        })
    }

    /// Address the server actually listens on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until the process exits.
    ///
    /// tiny_http has no graceful shutdown; the loop ends when the server
    /// is dropped. A failed request is logged and never stops the loop.
    pub fn run(&self) {
        for request in self.server.incoming_requests() {
            if let Err(e) = self.handle_request(request) {
                log::error!("request failed: {e}");
            }
        }
    }

    fn handle_request(&self, mut request: Request) -> Result<(), ServerError> {
        let method = request.method().clone();
        let url = request.url().to_string();
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url.as_str(), ""),
        };
        log::debug!("{method} {url}");

        // Preflight requests are answered before routing, like the CORS
        // middleware the browser expects in front of the router.
        let routed = if method == Method::Options {
            Ok(Response::from_string(""))
        } else {
            match (&method, path) {
                (Method::Post, "/generate") => {
                    let mut body = String::new();
                    request.as_reader().read_to_string(&mut body)?;
                    generate_response(&body, query)
                }
                (_, "/generate") => Ok(text_response("Method not allowed", 405)),
                (_, "/legend") => legend_response(),
                _ => Ok(text_response("Not Found", 404)),
            }
        };

        let response = routed.unwrap_or_else(|e| {
            log::error!("failed to build response for {method} {url}: {e}");
            text_response("Internal server error", 500)
        });

        request.respond(self.with_cors(response))?;
        Ok(())
    }

    fn with_cors(&self, mut response: Response<Cursor<Vec<u8>>>) -> Response<Cursor<Vec<u8>>> {
        for header in &self.cors {
            response.add_header(header.clone());
        }
        response
    }
}

/// Generate a world from the request's form fields and encode it.
fn generate_response(body: &str, query: &str) -> Result<Response<Cursor<Vec<u8>>>, ServerError> {
    let params = params_from_request(body, query);
    log::info!("generating world with {params:?}");

    let grid = generate_world(&params);
    Ok(json_response(serde_json::to_string(&grid)?))
}

/// Encode the static biome legend.
fn legend_response() -> Result<Response<Cursor<Vec<u8>>>, ServerError> {
    Ok(json_response(serde_json::to_string(&legend())?))
}

fn json_response(json: String) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(json.into_bytes()).with_header(header("Content-Type", "application/json"))
}

fn text_response(message: &str, status: u16) -> Response<Cursor<Vec<u8>>> {
    Response::from_string(message).with_status_code(status)
}

/// The headers attached to every response.
fn cors_headers(config: &ServerConfig) -> Vec<Header> {
    let mut headers = vec![
        header("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        header("Access-Control-Allow-Headers", "Content-Type"),
    ];

    match Header::from_bytes(
        &b"Access-Control-Allow-Origin"[..],
        config.allowed_origin.as_bytes(),
    ) {
        Ok(origin) => headers.push(origin),
        Err(()) => log::warn!(
            "allowed origin {:?} is not a valid header value; origin header disabled",
            config.allowed_origin
        ),
    }

    headers
}

/// Build a header from static name/value strings, which are always valid
/// ASCII.
fn header(name: &str, value: &str) -> Header {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).expect("static header is valid")
}
