//! Mail entity - Documento in coda nella collezione `mail`
//!
//! Ogni riga viene consumata in modo asincrono dal mail dispatcher esterno;
//! questo servizio si limita ad accodarla.

use super::enums::MailKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mail {
    pub mail_id: i32,
    pub rsvp_id: i32,
    pub kind: MailKind,
    pub to_address: String,
    pub from_address: Option<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, MySqlRow> for Mail {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        let kind: String = row.try_get("kind")?;
        let kind = kind
            .parse::<MailKind>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "kind".to_string(),
                source: e.into(),
            })?;

        Ok(Mail {
            mail_id: row.try_get("mail_id")?,
            rsvp_id: row.try_get("rsvp_id")?,
            kind,
            to_address: row.try_get("to_address")?,
            from_address: row.try_get("from_address")?,
            reply_to: row.try_get("reply_to")?,
            subject: row.try_get("subject")?,
            html: row.try_get("html")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
