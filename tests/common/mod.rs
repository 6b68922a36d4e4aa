#![allow(dead_code)]

use axum_test::TestServer;
use rsvp_server::core::AppState;
use rsvp_server::dtos::{CreateRsvpDTO, NotificationDTO};
use rsvp_server::entities::MailKind;
use rsvp_server::repositories::RsvpStore;
use rsvp_server::rsvp::NotificationSettings;
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Store in memoria per i test, con fallimenti programmabili
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rsvps: Vec<CreateRsvpDTO>,
    mail: Vec<(i32, NotificationDTO)>,
    mail_attempts: Vec<MailKind>,
    fail_rsvp_writes: bool,
    failing_mail_kinds: Vec<MailKind>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Ogni insert nella collezione rsvps fallisce
    pub fn failing_rsvp_writes() -> Arc<Self> {
        let store = Self::default();
        store.inner.lock().unwrap().fail_rsvp_writes = true;
        Arc::new(store)
    }

    /// Le insert in mail per i tipi indicati falliscono
    pub fn failing_mail(kinds: &[MailKind]) -> Arc<Self> {
        let store = Self::default();
        store.inner.lock().unwrap().failing_mail_kinds = kinds.to_vec();
        Arc::new(store)
    }

    pub fn rsvps(&self) -> Vec<CreateRsvpDTO> {
        self.inner.lock().unwrap().rsvps.clone()
    }

    pub fn mail(&self) -> Vec<(i32, NotificationDTO)> {
        self.inner.lock().unwrap().mail.clone()
    }

    pub fn mail_kinds(&self) -> Vec<MailKind> {
        self.mail().into_iter().map(|(_, m)| m.kind).collect()
    }

    /// Tipi di tutte le insert in mail tentate, riuscite o no
    pub fn mail_attempts(&self) -> Vec<MailKind> {
        self.inner.lock().unwrap().mail_attempts.clone()
    }
}

impl RsvpStore for MemoryStore {
    async fn insert_rsvp(&self, record: &CreateRsvpDTO) -> Result<i32, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_rsvp_writes {
            return Err(sqlx::Error::PoolTimedOut);
        }
        inner.rsvps.push(record.clone());
        Ok(inner.rsvps.len() as i32)
    }

    async fn insert_mail(
        &self,
        rsvp_id: i32,
        notification: &NotificationDTO,
    ) -> Result<i32, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.mail_attempts.push(notification.kind);
        if inner.failing_mail_kinds.contains(&notification.kind) {
            return Err(sqlx::Error::Protocol(format!(
                "mail collection rejected {}",
                notification.kind
            )));
        }
        inner.mail.push((rsvp_id, notification.clone()));
        Ok(inner.mail.len() as i32)
    }
}

/// Crea un AppState per i test
pub fn create_test_state(store: Option<Arc<MemoryStore>>) -> Arc<AppState<Arc<MemoryStore>>> {
    Arc::new(AppState::with_store(store, NotificationSettings::default()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState<Arc<MemoryStore>>>) -> TestServer {
    let app = rsvp_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Form compilato come lo manda la pagina: Sarah Roberts + Gavin Powers, entrambi in lista
pub fn attending_pair_form() -> serde_json::Value {
    json!({
        "firstName": "Sarah",
        "lastName": "Roberts",
        "email": "sarah@example.com",
        "phone": "865-555-0100",
        "attending": "yes",
        "numGuests": 2,
        "additionalGuest": { "firstName": "Gavin", "lastName": "Powers" },
        "allergies": "",
        "message": "Can't wait!"
    })
}
