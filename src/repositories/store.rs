//! RsvpStore - Il punto di contatto tra pipeline e persistenza
//!
//! La pipeline vede lo store solo attraverso questo trait: due collezioni
//! append-only, una per le risposte e una per la posta in uscita.

use super::{Create, MailRepository, RsvpRepository};
use crate::dtos::{CreateMailDTO, CreateRsvpDTO, NotificationDTO};
use sqlx::MySqlPool;
use std::future::Future;
use std::sync::Arc;

/// External store used by the submission pipeline.
///
/// Both methods return the identity assigned by the store.
pub trait RsvpStore: Send + Sync + 'static {
    /// Appends a record to the RSVP collection
    fn insert_rsvp(
        &self,
        record: &CreateRsvpDTO,
    ) -> impl Future<Output = Result<i32, sqlx::Error>> + Send;

    /// Appends one document to the outbound mail collection
    fn insert_mail(
        &self,
        rsvp_id: i32,
        notification: &NotificationDTO,
    ) -> impl Future<Output = Result<i32, sqlx::Error>> + Send;
}

impl<T: RsvpStore> RsvpStore for Arc<T> {
    async fn insert_rsvp(&self, record: &CreateRsvpDTO) -> Result<i32, sqlx::Error> {
        self.as_ref().insert_rsvp(record).await
    }

    async fn insert_mail(
        &self,
        rsvp_id: i32,
        notification: &NotificationDTO,
    ) -> Result<i32, sqlx::Error> {
        self.as_ref().insert_mail(rsvp_id, notification).await
    }
}

/// Store di produzione: le tabelle `rsvps` e `mail` su MySQL
pub struct MySqlStore {
    pub rsvps: RsvpRepository,
    pub mail: MailRepository,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            rsvps: RsvpRepository::new(pool.clone()),
            mail: MailRepository::new(pool),
        }
    }
}

impl RsvpStore for MySqlStore {
    async fn insert_rsvp(&self, record: &CreateRsvpDTO) -> Result<i32, sqlx::Error> {
        let rsvp = self.rsvps.create(record).await?;
        Ok(rsvp.rsvp_id)
    }

    async fn insert_mail(
        &self,
        rsvp_id: i32,
        notification: &NotificationDTO,
    ) -> Result<i32, sqlx::Error> {
        let mail = self
            .mail
            .create(&CreateMailDTO {
                rsvp_id,
                notification,
            })
            .await?;
        Ok(mail.mail_id)
    }
}
