//! RSVP DTOs - Data Transfer Objects per le risposte RSVP

use crate::entities::{AdditionalGuest, Attendance, Rsvp};
use chrono::{DateTime, SubsecRound, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // cifre, spazi e la punteggiatura tipica dei numeri di telefono; vuoto = non fornito
    static ref PHONE_RE: Regex = Regex::new(r"^([0-9+().\-\s]{7,25})?$").unwrap();
    // almeno un carattere che non sia spazio
    static ref NAME_RE: Regex = Regex::new(r"\S").unwrap();
}

/// Messaggio mostrato dalla pagina quando la risposta è stata salvata
pub const SUBMISSION_ACCEPTED_MESSAGE: &str =
    "Thank you for your RSVP! We look forward to celebrating with you.";

/// Payload inviato dal form della pagina (stessi nomi dei campi del form)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RsvpFormDTO {
    #[validate(
        length(min = 1, max = 100, message = "First name must be between 1 and 100 characters"),
        regex(path = *NAME_RE, message = "First name must not be blank")
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 100, message = "Last name must be between 1 and 100 characters"),
        regex(path = *NAME_RE, message = "Last name must not be blank")
    )]
    pub last_name: String,

    #[validate(email(message = "Email address is not valid"))]
    pub email: String,

    #[serde(default)]
    #[validate(regex(path = *PHONE_RE, message = "Phone number is not valid"))]
    pub phone: Option<String>,

    pub attending: Attendance,

    /// Missing means one guest, as the page's `parseInt(..) || 1`
    #[serde(default)]
    #[validate(range(min = 1, max = 2, message = "Number of guests must be 1 or 2"))]
    pub num_guests: Option<u8>,

    #[serde(default)]
    #[validate(nested)]
    pub additional_guest: Option<AdditionalGuestDTO>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Allergies note is too long"))]
    pub allergies: Option<String>,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Message is too long"))]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalGuestDTO {
    #[validate(length(max = 100, message = "Guest first name is too long"))]
    pub first_name: String,
    #[validate(length(max = 100, message = "Guest last name is too long"))]
    pub last_name: String,
}

impl RsvpFormDTO {
    /// Builds the immutable record the pipeline persists.
    ///
    /// The additional guest survives only when attending with two guests and
    /// both names are non-blank. Guest count is 2 exactly when a guest
    /// survives, otherwise 1.
    pub fn into_record(self, submitted_at: DateTime<Utc>) -> CreateRsvpDTO {
        let attendance = self.attending;
        let requested_guests = match attendance {
            Attendance::Attending => self.num_guests.unwrap_or(1),
            Attendance::NotAttending => 1,
        };

        let additional_guest = self
            .additional_guest
            .filter(|_| attendance.is_attending() && requested_guests == 2)
            .and_then(|guest| {
                let first_name = guest.first_name.trim();
                let last_name = guest.last_name.trim();
                if first_name.is_empty() || last_name.is_empty() {
                    None
                } else {
                    Some(AdditionalGuest {
                        first_name: first_name.to_string(),
                        last_name: last_name.to_string(),
                    })
                }
            });

        // due ospiti senza un accompagnatore con nome non hanno senso nelle email
        let num_guests = if additional_guest.is_some() { 2 } else { 1 };

        let allergies = match attendance {
            Attendance::Attending => non_blank(self.allergies),
            Attendance::NotAttending => None,
        };

        CreateRsvpDTO {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_blank(self.phone),
            attendance,
            num_guests,
            additional_guest,
            allergies,
            message: non_blank(self.message),
            // millisecondi, come il toISOString() del browser
            submitted_at: submitted_at.trunc_subsecs(3),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// DTO per creare una nuova risposta (senza rsvp_id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRsvpDTO {
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

impl CreateRsvpDTO {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Rsvp> for CreateRsvpDTO {
    fn from(value: Rsvp) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            attendance: value.attendance,
            num_guests: value.num_guests,
            additional_guest: value.additional_guest,
            allergies: value.allergies,
            message: value.message,
            submitted_at: value.submitted_at,
        }
    }
}

/// Risposta al client quando la submission è andata a buon fine
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RsvpAcceptedDTO {
    pub rsvp_id: i32,
    pub message: String,
}
