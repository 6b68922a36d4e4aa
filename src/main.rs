use rsvp_server::{AppState, Config, cors_layer, create_router};
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione (legge anche il .env)
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rsvp_server=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.print_info();

    // Una sola connessione per tutta la vita del processo; se fallisce il server
    // parte comunque e rifiuta le submission
    let pool = connect(&config).await;

    let state = Arc::new(AppState::new(pool, config.notifications.clone()));
    let app = create_router(state).layer(cors_layer(&config)?);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect(config: &Config) -> Option<MySqlPool> {
    let url = config.database_url.as_deref()?;

    match MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect(url)
        .await
    {
        Ok(pool) => {
            info!("Connected to database");
            Some(pool)
        }
        Err(e) => {
            error!("Failed to connect to database, RSVPs will be rejected: {}", e);
            None
        }
    }
}
