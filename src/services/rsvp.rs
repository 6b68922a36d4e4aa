//! RSVP services - Ricezione del form RSVP

use crate::core::{AppError, AppState};
use crate::dtos::{RsvpAcceptedDTO, RsvpFormDTO, SUBMISSION_ACCEPTED_MESSAGE};
use crate::repositories::RsvpStore;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(attending = body.attending.as_str()))]
pub async fn submit_rsvp<S: RsvpStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<RsvpFormDTO>,
) -> Result<(StatusCode, Json<RsvpAcceptedDTO>), AppError> {
    debug!("Received RSVP form");
    // 1. Validare il form (nomi, email, telefono, numero ospiti)
    // 2. Costruire il record immutabile con il timestamp di ricezione
    // 3. Passarlo alla pipeline: persistenza, controllo after-party, email
    // 4. Rispondere 201 con l'id assegnato, oppure con il messaggio di errore generico

    body.validate().map_err(|e| {
        warn!("RSVP form rejected: {}", e);
        AppError::from(e)
    })?;

    let record = body.into_record(Utc::now());
    let submission = state.rsvp.submit(&record).await?;

    info!(
        rsvp_id = submission.rsvp_id,
        notifications = submission.notifications.attempted(),
        "RSVP accepted"
    );

    Ok((
        StatusCode::CREATED,
        Json(RsvpAcceptedDTO {
            rsvp_id: submission.rsvp_id,
            message: SUBMISSION_ACCEPTED_MESSAGE.to_string(),
        }),
    ))
}
