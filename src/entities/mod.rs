//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti nel database.
//! `Rsvp` e `Mail` corrispondono alle tabelle `rsvps` e `mail`; `Invitee` è una voce
//! della lista statica compilata nel binario.

pub mod enums;
pub mod invitee;
pub mod mail;
pub mod rsvp;

// Re-exports per facilitare l'import
pub use enums::{Attendance, MailKind};
pub use invitee::Invitee;
pub use mail::Mail;
pub use rsvp::{AdditionalGuest, Rsvp};
