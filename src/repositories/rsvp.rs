//! RsvpRepository - Repository per la gestione delle risposte RSVP

use super::{Create, Read};
use crate::dtos::CreateRsvpDTO;
use crate::entities::Rsvp;
use sqlx::{Error, MySqlPool};

pub struct RsvpRepository {
    connection_pool: MySqlPool,
}

impl RsvpRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Rsvp, CreateRsvpDTO> for RsvpRepository {
    async fn create(&self, data: &CreateRsvpDTO) -> Result<Rsvp, Error> {
        let (guest_first_name, guest_last_name) = match &data.additional_guest {
            Some(guest) => (Some(guest.first_name.as_str()), Some(guest.last_name.as_str())),
            None => (None, None),
        };

        let result = sqlx::query(
            r#"
            INSERT INTO rsvps (
                first_name, last_name, email, phone, attendance, num_guests,
                guest_first_name, guest_last_name, allergies, message, submitted_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.attendance.as_str())
        .bind(data.num_guests)
        .bind(guest_first_name)
        .bind(guest_last_name)
        .bind(&data.allergies)
        .bind(&data.message)
        .bind(data.submitted_at)
        .execute(&self.connection_pool)
        .await?;

        // Get the last inserted ID
        let new_id = result.last_insert_id() as i32;

        Ok(Rsvp {
            rsvp_id: new_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            attendance: data.attendance,
            num_guests: data.num_guests,
            additional_guest: data.additional_guest.clone(),
            allergies: data.allergies.clone(),
            message: data.message.clone(),
            submitted_at: data.submitted_at,
        })
    }
}

impl Read<Rsvp, i32> for RsvpRepository {
    async fn read(&self, id: &i32) -> Result<Option<Rsvp>, Error> {
        let rsvp = sqlx::query_as::<_, Rsvp>(
            r#"
            SELECT
                rsvp_id, first_name, last_name, email, phone, attendance, num_guests,
                guest_first_name, guest_last_name, allergies, message, submitted_at
            FROM rsvps
            WHERE rsvp_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(rsvp)
    }
}
