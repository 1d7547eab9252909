//! The DM endpoint the chat client talks to.

pub mod handlers;
pub mod llama;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::network::transport::MESSAGE_PATH;

pub use llama::CompletionClient;

pub fn router(completion: CompletionClient) -> Router {
    Router::new()
        .route(MESSAGE_PATH, post(handlers::message))
        .with_state(completion)
}

pub async fn serve(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let completion = CompletionClient::from_config(config)?;
    let listener = TcpListener::bind(&config.listen_addr).await?;
    log::info!(
        "DM server listening on {}, completions from {}",
        listener.local_addr()?,
        config.llama_url
    );

    axum::serve(listener, router(completion))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            log::info!("Received shutdown signal, stopping DM server...");
        })
        .await?;

    Ok(())
}
