//! Rsvp entity - Entità risposta RSVP persistita

use super::enums::Attendance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, Row};

/// Nome e cognome dell'accompagnatore (presente solo con 2 ospiti)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalGuest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rsvp {
    pub rsvp_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attendance: Attendance,
    pub num_guests: u8,
    pub additional_guest: Option<AdditionalGuest>,
    pub allergies: Option<String>,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

// l'accompagnatore è salvato su due colonne nullable, quindi niente derive
impl<'r> FromRow<'r, MySqlRow> for Rsvp {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        let attendance: String = row.try_get("attendance")?;
        let attendance = attendance
            .parse::<Attendance>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "attendance".to_string(),
                source: e.into(),
            })?;

        let guest_first_name: Option<String> = row.try_get("guest_first_name")?;
        let guest_last_name: Option<String> = row.try_get("guest_last_name")?;
        let additional_guest = match (guest_first_name, guest_last_name) {
            (Some(first_name), Some(last_name)) => Some(AdditionalGuest {
                first_name,
                last_name,
            }),
            _ => None,
        };

        Ok(Rsvp {
            rsvp_id: row.try_get("rsvp_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            attendance,
            num_guests: row.try_get("num_guests")?,
            additional_guest,
            allergies: row.try_get("allergies")?,
            message: row.try_get("message")?,
            submitted_at: row.try_get("submitted_at")?,
        })
    }
}
