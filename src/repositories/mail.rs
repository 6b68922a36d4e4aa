//! MailRepository - Repository per la coda dei documenti email in uscita

use super::{Create, Read};
use crate::dtos::CreateMailDTO;
use crate::entities::Mail;
use chrono::{SubsecRound, Utc};
use sqlx::{Error, MySqlPool};

pub struct MailRepository {
    connection_pool: MySqlPool,
}

impl MailRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

}

impl<'a> Create<Mail, CreateMailDTO<'a>> for MailRepository {
    async fn create(&self, data: &CreateMailDTO<'a>) -> Result<Mail, Error> {
        let notification = data.notification;
        let now = Utc::now().trunc_subsecs(3);

        let result = sqlx::query(
            r#"
            INSERT INTO mail (
                rsvp_id, kind, to_address, from_address, reply_to, subject, html, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.rsvp_id)
        .bind(notification.kind.as_str())
        .bind(&notification.to)
        .bind(&notification.from)
        .bind(&notification.reply_to)
        .bind(&notification.subject)
        .bind(&notification.html)
        .bind(now)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        Ok(Mail {
            mail_id: new_id,
            rsvp_id: data.rsvp_id,
            kind: notification.kind,
            to_address: notification.to.clone(),
            from_address: notification.from.clone(),
            reply_to: notification.reply_to.clone(),
            subject: notification.subject.clone(),
            html: notification.html.clone(),
            created_at: now,
        })
    }
}

impl Read<Mail, i32> for MailRepository {
    async fn read(&self, id: &i32) -> Result<Option<Mail>, Error> {
        let mail = sqlx::query_as::<_, Mail>(
            r#"
            SELECT
                mail_id, rsvp_id, kind, to_address, from_address, reply_to,
                subject, html, created_at
            FROM mail
            WHERE mail_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(mail)
    }
}
