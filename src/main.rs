use axum::{
    Router,
    extract::Extension,
    routing::{delete, get, post},
};
use catalog_service::catalog::handlers::{
    handle_create_record, handle_delete_record, handle_get_record, handle_list_catalog,
    handle_update_record,
};
use catalog_service::catalog::protocol::{
    ENDPOINT_CREATE, ENDPOINT_DELETE, ENDPOINT_LIST, ENDPOINT_RECORD,
};
use catalog_service::store::file::JsonStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;
    let mut db_path = PathBuf::from("database/db.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--db" => {
                db_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--db <path>]", args[0]);
                eprintln!(
                    "Example: {} --bind 127.0.0.1:3000 --db database/db.json",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Load the catalog document:
    let store = Arc::new(JsonStore::open(&db_path)?);
    tracing::info!("Loaded catalog store from {}", store.path().display());

    // 2. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_LIST, get(handle_list_catalog))
        .route(
            ENDPOINT_RECORD,
            get(handle_get_record).put(handle_update_record),
        )
        .route(ENDPOINT_CREATE, post(handle_create_record))
        .route(ENDPOINT_DELETE, delete(handle_delete_record))
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
