//! Haiku REST API server
//!
//! Serves haiku generation over HTTP, backed by the Datamuse API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin haiku_server --features server
//!
//! curl "http://localhost:3000/api/haiku?keyword=ocean"
//! curl "http://localhost:3000/api/haiku?keyword=ocean&starts_with=s"
//! curl http://localhost:3000/api/health
//! ```

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use haiku_gen::api::create_haiku_router;
use haiku_gen::datamuse::DatamuseClient;
use haiku_gen::haiku::HaikuGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let client = DatamuseClient::new()?;
    let generator = Arc::new(HaikuGenerator::new(Arc::new(client)));

    let app = create_haiku_router(generator)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr =
        std::env::var("HAIKU_SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    println!("haiku_server listening on http://{}", addr);
    println!("  GET /api/haiku?keyword=<kw>&starts_with=<letter>");
    println!("  GET /api/health");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
