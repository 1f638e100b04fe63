pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;

use std::net::SocketAddr;
use tokio::net::TcpListener;

use shared::{config, data::db, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::tracing::initialize()?;

    let config = config::load_config()?;
    let db_path = config::get_database_path(&config)?;
    tracing::info!("Database: {}", db_path.display());
    db::initialize_database(&db_path).await?;

    let app = routes::configure_routes(&config.server.static_dir);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    logger::log("startup", &format!("Server listening on {}", addr));
    axum::serve(listener, app).await?;

    Ok(())
}
