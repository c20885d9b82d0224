//! Static host for the compiled bundle using Axum
//!
//! Serves Trunk's `dist/` directory. Any path that is not a file falls back
//! to `index.html` so deep links like `/expenses/3/edit` reach the client
//! router. Without a build, every page shows setup instructions instead.

use anyhow::Result;
use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Liveness probe path
pub const HEALTH_PATH: &str = "/healthz";

/// Create the router serving `dist`
pub fn create_router(dist: &Path) -> Router {
    let index = dist.join("index.html");
    let router = Router::new().route(HEALTH_PATH, get(health_handler));

    let router = if index.is_file() {
        info!(dist = %dist.display(), "serving web bundle");
        router.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
    } else {
        warn!(dist = %dist.display(), "web bundle not found, serving build instructions");
        router.fallback(placeholder_handler)
    };

    router.layer(TraceLayer::new_for_http())
}

/// Run the static host on localhost
pub async fn run(dist: PathBuf, port: u16) -> Result<()> {
    let router = create_router(&dist);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web UI listening on http://{}", addr);
    println!("Web UI listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn placeholder_handler() -> Html<&'static str> {
    Html(PLACEHOLDER_HTML)
}

const PLACEHOLDER_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Expense Tracker - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 1.75rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #3b82f6;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>Expense Tracker - Build Required</h1>
        <p>The Leptos WASM front end has not been compiled yet.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build front end: <code>cd crates/spendboard-web && trunk build --release</code></li>
                <li>Restart: <code>spendboard serve</code></li>
            </ol>
        </div>

        <p>Set <code>SPENDBOARD_API_BASE_URL</code> at build time to point the UI at a backend
        other than <code>http://127.0.0.1:8000</code>.</p>
    </div>
</body>
</html>"#;
