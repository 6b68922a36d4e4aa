//! RSVP submission pipeline - persist, match, compose, notify
//!
//! Ogni passo aspetta il precedente. Solo la scrittura della risposta decide
//! l'esito della submission; l'accodamento delle email è best effort e ogni
//! fallimento finisce nel `NotifyReport` senza fermare gli altri.

use super::composer::{NotificationSettings, compose_notifications};
use super::matcher::is_invited;
use crate::dtos::{CreateRsvpDTO, NotificationDTO};
use crate::entities::MailKind;
use crate::repositories::RsvpStore;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The store connection was never established
    #[error("RSVP store is not connected")]
    StoreUnavailable,
    #[error("failed to persist RSVP: {0}")]
    PersistFailure(#[source] sqlx::Error),
}

/// A notification document the store refused
#[derive(Debug, thiserror::Error)]
#[error("failed to enqueue {kind} mail for {recipient}: {source}")]
pub struct NotifyFailure {
    pub kind: MailKind,
    pub recipient: String,
    #[source]
    pub source: sqlx::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedMail {
    pub kind: MailKind,
    pub mail_id: i32,
}

/// Outcome of the notify step, one entry per composed document
#[derive(Debug, Default)]
pub struct NotifyReport {
    pub queued: Vec<QueuedMail>,
    pub failures: Vec<NotifyFailure>,
}

impl NotifyReport {
    pub fn attempted(&self) -> usize {
        self.queued.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// An accepted submission
#[derive(Debug)]
pub struct Submission {
    pub rsvp_id: i32,
    pub notifications: NotifyReport,
}

pub struct RsvpPipeline<S> {
    store: Option<S>,
    settings: NotificationSettings,
}

impl<S: RsvpStore> RsvpPipeline<S> {
    /// `store` is `None` when the connection could not be established at
    /// startup; every submission then fails with `StoreUnavailable`.
    pub fn new(store: Option<S>, settings: NotificationSettings) -> Self {
        Self { store, settings }
    }

    #[instrument(skip_all, fields(attending = record.attendance.as_str(), num_guests = record.num_guests))]
    pub async fn submit(&self, record: &CreateRsvpDTO) -> Result<Submission, SubmissionError> {
        let store = self.store.as_ref().ok_or_else(|| {
            warn!("Submission rejected: store not connected");
            SubmissionError::StoreUnavailable
        })?;

        let rsvp_id = store.insert_rsvp(record).await.map_err(|e| {
            warn!("Failed to persist RSVP: {}", e);
            SubmissionError::PersistFailure(e)
        })?;
        info!(rsvp_id, "RSVP persisted");

        let (primary_invited, additional_invited) = classify_guests(record);
        debug!(primary_invited, additional_invited, "After-party check done");

        let documents =
            compose_notifications(record, primary_invited, additional_invited, &self.settings);
        let notifications = notify(store, rsvp_id, &documents).await;

        if notifications.is_complete() {
            info!(rsvp_id, queued = notifications.queued.len(), "Notifications queued");
        } else {
            warn!(
                rsvp_id,
                queued = notifications.queued.len(),
                failed = notifications.failures.len(),
                "Some notifications could not be queued"
            );
        }

        Ok(Submission {
            rsvp_id,
            notifications,
        })
    }
}

/// Matcher verdicts for (primary, additional). Nothing is checked for
/// guests who declined.
fn classify_guests(record: &CreateRsvpDTO) -> (bool, bool) {
    if !record.attendance.is_attending() {
        return (false, false);
    }

    let primary = is_invited(&record.first_name, &record.last_name);
    let additional = record
        .additional_guest
        .as_ref()
        .is_some_and(|guest| is_invited(&guest.first_name, &guest.last_name));

    (primary, additional)
}

async fn notify<S: RsvpStore>(
    store: &S,
    rsvp_id: i32,
    documents: &[NotificationDTO],
) -> NotifyReport {
    let mut report = NotifyReport::default();

    for document in documents {
        match store.insert_mail(rsvp_id, document).await {
            Ok(mail_id) => report.queued.push(QueuedMail {
                kind: document.kind,
                mail_id,
            }),
            Err(source) => {
                let failure = NotifyFailure {
                    kind: document.kind,
                    recipient: document.to.clone(),
                    source,
                };
                warn!(rsvp_id, "{}", failure);
                report.failures.push(failure);
            }
        }
    }

    report
}
