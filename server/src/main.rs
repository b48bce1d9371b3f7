use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_core::InMemoryTodoItemsService;
use todo_server::{demo_items, router, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let service = if config.seed_demo {
        let items = demo_items();
        tracing::info!(count = items.len(), "seeding demo todo items");
        InMemoryTodoItemsService::with_items(items).context("invalid demo seed")?
    } else {
        InMemoryTodoItemsService::new()
    };
    let app = router(Arc::new(service)).layer(config.cors_layer()?);

    let addr = config.addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, cors_origin = %config.cors_origin, "listening");

    todo_server::serve(listener, app).await?;
    Ok(())
}
