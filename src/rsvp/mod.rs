//! RSVP module - Il flusso di una risposta dal form alla coda email
//!
//! - `matcher`: chi è nella lista dell'after-party
//! - `composer` + `templates`: quali email mandare e con che contenuto
//! - `pipeline`: persistenza della risposta e accodamento delle email

pub mod composer;
pub mod matcher;
pub mod pipeline;
pub mod templates;

pub use composer::{NotificationSettings, compose_notifications};
pub use matcher::{AFTER_PARTY_ROSTER, is_invited, is_invited_in};
pub use pipeline::{
    NotifyFailure, NotifyReport, QueuedMail, RsvpPipeline, Submission, SubmissionError,
};
