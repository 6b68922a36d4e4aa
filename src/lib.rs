//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod rsvp;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::{root, submit_rsvp};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use repositories::RsvpStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Crea il router principale dell'applicazione
pub fn create_router<S: RsvpStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/rsvp", post(submit_rsvp::<S>))
        .with_state(state)
}

/// CORS per la pagina statica: solo l'origine configurata, oppure tutte
pub fn cors_layer(config: &Config) -> Result<CorsLayer, String> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .map_err(|_| format!("Invalid CORS_ALLOWED_ORIGIN: {}", origin))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
