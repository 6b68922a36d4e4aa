//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! `MySqlStore` li mette insieme dietro al trait `RsvpStore` usato dalla pipeline.

// ************************* NOTA SU SQLX ************************* //

/*
   Qui usiamo sqlx::query / sqlx::query_as (verifica a run-time) invece delle macro
   query! / query_as!: le macro vogliono un database raggiungibile (o la cache .sqlx)
   già in fase di compilazione, e questo servizio deve compilare e partire anche
   senza database (in quel caso ogni submission risponde StoreUnavailable).
   Le entità implementano FromRow a mano, i parametri passano con .bind() nell'ordine
   dei placeholder `?`.
   Lo schema vive in migrations/, i dati di prova in fixtures/.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod mail;
pub mod rsvp;
pub mod store;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Read};

pub use mail::MailRepository;
pub use rsvp::RsvpRepository;
pub use store::{MySqlStore, RsvpStore};
