//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene la pipeline RSVP con il suo store, costruita una sola volta all'avvio.

use crate::repositories::{MySqlStore, RsvpStore};
use crate::rsvp::{NotificationSettings, RsvpPipeline};
use sqlx::MySqlPool;

/// Stato condiviso tra tutte le route
pub struct AppState<S = MySqlStore> {
    /// Pipeline di submission, con lo store (se connesso) iniettato alla costruzione
    pub rsvp: RsvpPipeline<S>,
}

impl AppState<MySqlStore> {
    /// Crea lo stato di produzione a partire dal pool MySQL.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni, `None` se la connessione all'avvio è fallita
    /// * `settings` - Indirizzi e dettagli dell'evento per i template email
    pub fn new(pool: Option<MySqlPool>, settings: NotificationSettings) -> Self {
        Self::with_store(pool.map(MySqlStore::new), settings)
    }
}

impl<S: RsvpStore> AppState<S> {
    pub fn with_store(store: Option<S>, settings: NotificationSettings) -> Self {
        Self {
            rsvp: RsvpPipeline::new(store, settings),
        }
    }
}
