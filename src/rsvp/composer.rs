//! Notification composer - Da una risposta ai documenti email da accodare

use super::templates;
use crate::dtos::{CreateRsvpDTO, NotificationDTO};
use crate::entities::MailKind;
use serde::{Deserialize, Serialize};

/// Event facts and addresses used by the mail templates
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotificationSettings {
    /// Receives the host alerts; also sender and reply-to of guest mail
    pub host_email: String,
    pub couple: String,
    pub event_date: String,
    pub event_location: String,
    pub after_party_url: String,
    pub monogram: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            host_email: "dustin.mcafee@my.maryvillecollege.edu".to_string(),
            couple: "Dustin & Sarah".to_string(),
            event_date: "April 2, 2026 at 4:00 PM".to_string(),
            event_location: "Norris Dam Tea Room, Norris Cir, Andersonville, TN 37705".to_string(),
            after_party_url: "https://www.mcafee-mandel-wedding.com/afterparty.html".to_string(),
            monogram: "D & S // 04.02.26".to_string(),
        }
    }
}

/// Builds the documents for one submission, in delivery order:
/// host alert, guest confirmation, then one after-party invite per eligible
/// guest (primary first).
///
/// The verdicts are ignored when the guest declined, and `additional_invited`
/// is ignored when the record has no additional guest.
pub fn compose_notifications(
    record: &CreateRsvpDTO,
    primary_invited: bool,
    additional_invited: bool,
    settings: &NotificationSettings,
) -> Vec<NotificationDTO> {
    let mut after_party_guests: Vec<&str> = Vec::new();
    if record.attendance.is_attending() {
        if primary_invited {
            after_party_guests.push(&record.first_name);
        }
        if let Some(guest) = record.additional_guest.as_ref().filter(|_| additional_invited) {
            after_party_guests.push(&guest.first_name);
        }
    }

    let mut documents = Vec::with_capacity(2 + after_party_guests.len());
    documents.push(host_alert(record, &after_party_guests, settings));
    documents.push(guest_confirmation(record, settings));
    documents.extend(
        after_party_guests
            .iter()
            .map(|first_name| after_party_invite(first_name, &record.email, settings)),
    );
    documents
}

fn host_alert(
    record: &CreateRsvpDTO,
    after_party_guests: &[&str],
    settings: &NotificationSettings,
) -> NotificationDTO {
    let marker = if after_party_guests.is_empty() { "" } else { "🎉 " };

    NotificationDTO {
        kind: MailKind::HostAlert,
        to: settings.host_email.clone(),
        from: None,
        reply_to: None,
        subject: format!("{}New RSVP from {}", marker, record.full_name()),
        html: templates::host_alert_html(record, after_party_guests),
    }
}

fn guest_confirmation(record: &CreateRsvpDTO, settings: &NotificationSettings) -> NotificationDTO {
    let subject = if record.attendance.is_attending() {
        format!("RSVP Confirmed - {}'s Wedding", settings.couple)
    } else {
        format!("RSVP Received - {}'s Wedding", settings.couple)
    };

    NotificationDTO {
        kind: MailKind::GuestConfirmation,
        to: record.email.clone(),
        from: Some(settings.host_email.clone()),
        reply_to: Some(settings.host_email.clone()),
        subject,
        html: templates::guest_confirmation_html(record, settings),
    }
}

// l'accompagnatore non ha un suo indirizzo: l'invito va a chi ha compilato il form
fn after_party_invite(
    guest_first_name: &str,
    email: &str,
    settings: &NotificationSettings,
) -> NotificationDTO {
    NotificationDTO {
        kind: MailKind::AfterPartyInvite,
        to: email.to_string(),
        from: Some(settings.host_email.clone()),
        reply_to: Some(settings.host_email.clone()),
        subject: "🤫 You've Been Selected - Secret After-Party".to_string(),
        html: templates::after_party_html(guest_first_name, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AdditionalGuest, Attendance};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn attending_pair() -> CreateRsvpDTO {
        CreateRsvpDTO {
            first_name: "Sarah".into(),
            last_name: "Roberts".into(),
            email: "sarah@example.com".into(),
            phone: Some("865-555-0100".into()),
            attendance: Attendance::Attending,
            num_guests: 2,
            additional_guest: Some(AdditionalGuest {
                first_name: "Gavin".into(),
                last_name: "Powers".into(),
            }),
            allergies: None,
            message: None,
            submitted_at: Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap(),
        }
    }

    fn kinds(documents: &[NotificationDTO]) -> Vec<MailKind> {
        documents.iter().map(|d| d.kind).collect()
    }

    #[test]
    fn both_guests_invited_yields_four_documents() {
        let settings = NotificationSettings::default();
        let documents = compose_notifications(&attending_pair(), true, true, &settings);

        assert_eq!(
            kinds(&documents),
            vec![
                MailKind::HostAlert,
                MailKind::GuestConfirmation,
                MailKind::AfterPartyInvite,
                MailKind::AfterPartyInvite,
            ]
        );

        let alert = &documents[0];
        assert_eq!(alert.to, settings.host_email);
        assert_eq!(alert.from, None);
        assert_eq!(alert.subject, "🎉 New RSVP from Sarah Roberts");
        assert_eq!(alert.html.matches("AFTER-PARTY INVITE SENT").count(), 2);

        // entrambi gli inviti vanno all'email di chi ha compilato il form
        assert!(documents[2].html.contains("Hey Sarah,"));
        assert!(documents[3].html.contains("Hey Gavin,"));
        assert!(documents[2..].iter().all(|d| d.to == "sarah@example.com"));
    }

    #[test]
    fn only_additional_guest_invited() {
        let settings = NotificationSettings::default();
        let documents = compose_notifications(&attending_pair(), false, true, &settings);

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[0].subject, "🎉 New RSVP from Sarah Roberts");
        assert!(documents[2].html.contains("Hey Gavin,"));
    }

    #[test]
    fn nobody_invited_has_plain_subject() {
        let settings = NotificationSettings::default();
        let documents = compose_notifications(&attending_pair(), false, false, &settings);

        assert_eq!(
            kinds(&documents),
            vec![MailKind::HostAlert, MailKind::GuestConfirmation]
        );
        assert_eq!(documents[0].subject, "New RSVP from Sarah Roberts");
        assert_eq!(documents[1].subject, "RSVP Confirmed - Dustin & Sarah's Wedding");
        assert_eq!(documents[1].from.as_deref(), Some(settings.host_email.as_str()));
        assert_eq!(documents[1].reply_to.as_deref(), Some(settings.host_email.as_str()));
    }

    #[test]
    fn declining_never_produces_invites() {
        let settings = NotificationSettings::default();
        let mut record = attending_pair();
        record.attendance = Attendance::NotAttending;
        record.num_guests = 1;
        record.additional_guest = None;

        let documents = compose_notifications(&record, true, true, &settings);

        assert_eq!(
            kinds(&documents),
            vec![MailKind::HostAlert, MailKind::GuestConfirmation]
        );
        assert_eq!(documents[0].subject, "New RSVP from Sarah Roberts");
        assert_eq!(documents[1].subject, "RSVP Received - Dustin & Sarah's Wedding");
    }

    #[test]
    fn additional_verdict_without_guest_is_ignored() {
        let settings = NotificationSettings::default();
        let mut record = attending_pair();
        record.num_guests = 1;
        record.additional_guest = None;

        let documents = compose_notifications(&record, false, true, &settings);
        assert_eq!(documents.len(), 2);
    }
}
