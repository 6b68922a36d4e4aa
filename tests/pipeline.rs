//! Integration tests per la pipeline di submission
//!
//! Usano lo store in memoria di `common` per controllare l'ordine delle
//! scritture e per simulare i fallimenti dello store.

mod common;

#[cfg(test)]
mod pipeline_tests {
    use super::common::MemoryStore;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rsvp_server::dtos::CreateRsvpDTO;
    use rsvp_server::entities::{AdditionalGuest, Attendance, MailKind};
    use rsvp_server::rsvp::{NotificationSettings, RsvpPipeline, SubmissionError};
    use std::sync::Arc;

    fn record(
        first_name: &str,
        last_name: &str,
        attendance: Attendance,
        additional_guest: Option<(&str, &str)>,
    ) -> CreateRsvpDTO {
        CreateRsvpDTO {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: "guest@example.com".to_string(),
            phone: None,
            attendance,
            num_guests: if additional_guest.is_some() { 2 } else { 1 },
            additional_guest: additional_guest.map(|(first, last)| AdditionalGuest {
                first_name: first.to_string(),
                last_name: last.to_string(),
            }),
            allergies: None,
            message: None,
            submitted_at: Utc.with_ymd_and_hms(2026, 2, 14, 10, 30, 0).unwrap(),
        }
    }

    fn pipeline(store: Option<Arc<MemoryStore>>) -> RsvpPipeline<Arc<MemoryStore>> {
        RsvpPipeline::new(store, NotificationSettings::default())
    }

    // ============================================================
    // Documenti prodotti
    // ============================================================

    #[tokio::test]
    async fn attending_pair_both_on_roster_queues_four_documents() {
        let store = MemoryStore::new();
        let submission = pipeline(Some(store.clone()))
            .submit(&record(
                "Sarah",
                "Roberts",
                Attendance::Attending,
                Some(("Gavin", "Powers")),
            ))
            .await
            .unwrap();

        assert_eq!(
            store.mail_kinds(),
            vec![
                MailKind::HostAlert,
                MailKind::GuestConfirmation,
                MailKind::AfterPartyInvite,
                MailKind::AfterPartyInvite,
            ]
        );
        assert!(submission.notifications.is_complete());
        assert_eq!(submission.notifications.queued.len(), 4);

        // un solo avviso all'host, con il riepilogo di entrambi gli ospiti
        let mail = store.mail();
        let alert = &mail[0].1;
        assert!(alert.html.contains("Additional Guest:</strong> Gavin Powers"));
        assert!(alert.subject.starts_with("🎉 "));
        assert!(mail.iter().all(|(id, _)| *id == submission.rsvp_id));
    }

    #[tokio::test]
    async fn attending_pair_with_one_eligible_guest_queues_one_invite() {
        let store = MemoryStore::new();
        pipeline(Some(store.clone()))
            .submit(&record(
                "Zzz",
                "Nobody",
                Attendance::Attending,
                Some(("Kayci", "Austin")),
            ))
            .await
            .unwrap();

        let invites: Vec<_> = store
            .mail()
            .into_iter()
            .filter(|(_, m)| m.kind == MailKind::AfterPartyInvite)
            .collect();
        assert_eq!(invites.len(), 1);
        assert!(invites[0].1.html.contains("Hey Kayci,"));
        assert_eq!(invites[0].1.to, "guest@example.com");
    }

    #[tokio::test]
    async fn attending_pair_nobody_eligible_queues_no_invite() {
        let store = MemoryStore::new();
        pipeline(Some(store.clone()))
            .submit(&record(
                "Zzz",
                "Nobody",
                Attendance::Attending,
                Some(("Qqq", "Stranger")),
            ))
            .await
            .unwrap();

        assert_eq!(
            store.mail_kinds(),
            vec![MailKind::HostAlert, MailKind::GuestConfirmation]
        );
    }

    #[tokio::test]
    async fn declining_guest_on_roster_gets_no_invite() {
        let store = MemoryStore::new();
        pipeline(Some(store.clone()))
            .submit(&record("Drew", "Brown", Attendance::NotAttending, None))
            .await
            .unwrap();

        assert_eq!(
            store.mail_kinds(),
            vec![MailKind::HostAlert, MailKind::GuestConfirmation]
        );
        let mail = store.mail();
        assert_eq!(mail[0].1.subject, "New RSVP from Drew Brown");
        assert!(mail[1].1.subject.starts_with("RSVP Received"));
    }

    // ============================================================
    // Errori dello store
    // ============================================================

    #[tokio::test]
    async fn missing_store_fails_with_store_unavailable() {
        let result = pipeline(None)
            .submit(&record("Drew", "Brown", Attendance::Attending, None))
            .await;

        assert!(matches!(result, Err(SubmissionError::StoreUnavailable)));
    }

    #[tokio::test]
    async fn persist_failure_attempts_no_notifications() {
        let store = MemoryStore::failing_rsvp_writes();
        let result = pipeline(Some(store.clone()))
            .submit(&record("Drew", "Brown", Attendance::Attending, None))
            .await;

        assert!(matches!(result, Err(SubmissionError::PersistFailure(_))));
        assert!(store.mail_attempts().is_empty());
        assert!(store.rsvps().is_empty());
    }

    #[tokio::test]
    async fn notify_failure_does_not_stop_other_documents() {
        let store = MemoryStore::failing_mail(&[MailKind::HostAlert]);
        let submission = pipeline(Some(store.clone()))
            .submit(&record(
                "Sarah",
                "Roberts",
                Attendance::Attending,
                Some(("Gavin", "Powers")),
            ))
            .await
            .expect("submission must succeed once the RSVP is persisted");

        assert_eq!(store.mail_attempts().len(), 4);
        assert_eq!(
            store.mail_kinds(),
            vec![
                MailKind::GuestConfirmation,
                MailKind::AfterPartyInvite,
                MailKind::AfterPartyInvite,
            ]
        );

        let report = &submission.notifications;
        assert!(!report.is_complete());
        assert_eq!(report.attempted(), 4);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind, MailKind::HostAlert);
        assert_eq!(report.failures[0].recipient, NotificationSettings::default().host_email);
    }

    #[tokio::test]
    async fn every_notification_failing_still_accepts_the_rsvp() {
        let store = MemoryStore::failing_mail(&[
            MailKind::HostAlert,
            MailKind::GuestConfirmation,
            MailKind::AfterPartyInvite,
        ]);
        let submission = pipeline(Some(store.clone()))
            .submit(&record("Drew", "Brown", Attendance::Attending, None))
            .await
            .unwrap();

        assert_eq!(store.rsvps().len(), 1);
        assert_eq!(submission.notifications.failures.len(), 3);
        assert!(submission.notifications.queued.is_empty());
    }

    #[tokio::test]
    async fn persisted_record_is_the_submitted_one() {
        let store = MemoryStore::new();
        let submitted = record(
            "Robyn",
            "Southam",
            Attendance::Attending,
            Some(("Brady", "Milward")),
        );

        pipeline(Some(store.clone())).submit(&submitted).await.unwrap();

        assert_eq!(store.rsvps(), vec![submitted]);
    }
}
