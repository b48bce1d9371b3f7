//! Server configuration from command-line flags and environment variables.

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "REST API for tracking todo items", long_about = None)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(short = 'H', long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to listen on; `0` picks an ephemeral port.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Origin allowed to call the API from a browser, or `*` for any.
    #[arg(long, env = "TODO_CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,

    /// Default log filter; `RUST_LOG` takes precedence when set.
    #[arg(long, env = "TODO_LOG", default_value = "info")]
    pub log: String,

    /// Insert a few sample todo items on startup.
    #[arg(long, env = "TODO_SEED_DEMO")]
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("invalid listen address {addr}"))
    }

    pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        let origin = if self.cors_origin == "*" {
            AllowOrigin::from(Any)
        } else {
            let value = HeaderValue::from_str(&self.cors_origin)
                .with_context(|| format!("invalid CORS origin {}", self.cors_origin))?;
            AllowOrigin::exact(value)
        };
        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]))
    }
}
