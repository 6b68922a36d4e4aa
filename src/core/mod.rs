//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori HTTP
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::{AppError, SUBMISSION_FAILED_MESSAGE};
pub use state::AppState;
