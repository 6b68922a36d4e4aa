//! Mail DTOs - Documenti di notifica prima dell'accodamento

use crate::entities::MailKind;
use serde::{Deserialize, Serialize};

/// Un messaggio in uscita, prodotto dal composer e non ancora accodato.
///
/// `from` e `reply_to` sono assenti per l'avviso all'host: in quel caso il
/// dispatcher usa il suo mittente di default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotificationDTO {
    pub kind: MailKind,
    pub to: String,
    pub from: Option<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// DTO per accodare un documento (senza mail_id, assegnato dal database)
#[derive(Debug, Clone, Copy)]
pub struct CreateMailDTO<'a> {
    pub rsvp_id: i32,
    pub notification: &'a NotificationDTO,
}
