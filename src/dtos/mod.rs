//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene i DTOs usati per la comunicazione con la pagina e con lo store.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod mail;
pub mod rsvp;

// Re-exports per facilitare l'import
pub use mail::{CreateMailDTO, NotificationDTO};
pub use rsvp::{
    AdditionalGuestDTO, CreateRsvpDTO, RsvpAcceptedDTO, RsvpFormDTO, SUBMISSION_ACCEPTED_MESSAGE,
};
