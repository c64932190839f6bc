//! Shared test infrastructure.
//!
//! - Proposal forms and raw records for the service and store tests
//! - A store that always fails, for the generic-error path
//! - Feed payloads and tracker construction against a wiremock server

#![allow(dead_code)]

use std::time::Duration;

use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agenda_digital::config::TrackerConfig;
use agenda_digital::errors::StoreError;
use agenda_digital::models::proposal::{
    MemoryProposalStore, NewProposal, Proposal, ProposalForm, ProposalStore,
};
use agenda_digital::public_info::PublicInfoTracker;
use agenda_digital::services::ProposalService;

// ============================================================================
// PROPOSALS
// ============================================================================

pub const VALID_EMAIL: &str = "ana@example.com";

pub fn form(email: &str, category: &str) -> ProposalForm {
    ProposalForm {
        name: "Ana".to_string(),
        email: email.to_string(),
        category: category.to_string(),
        title: "T".to_string(),
        content: "C".to_string(),
    }
}

pub fn memory_service() -> ProposalService<MemoryProposalStore> {
    ProposalService::new(MemoryProposalStore::new())
}

/// A record built outside the insert policy, e.g. with `approved = false`.
pub fn raw_proposal(title: &str, approved: bool) -> Proposal {
    Proposal {
        id: Uuid::now_v7(),
        name: "Legacy".to_string(),
        email: VALID_EMAIL.to_string(),
        category: 3,
        title: title.to_string(),
        content: "contenido".to_string(),
        approved,
    }
}

/// Store whose backend is never reachable.
#[derive(Debug, Default)]
pub struct FailingStore;

impl ProposalStore for FailingStore {
    async fn insert(&self, _proposal: NewProposal) -> Result<Uuid, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Proposal, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn list_approved(&self) -> Result<Vec<Proposal>, StoreError> {
        Err(StoreError::Db(sqlx::Error::PoolTimedOut))
    }
}

// ============================================================================
// PUBLIC INFO FEED
// ============================================================================

pub const FEED_PATH: &str = "/portal-core/rest/solicitudes";

pub fn feed_request(id: i64, institution: i64, state: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "fecha": "2024-05-10T09:30:00",
        "diasHabilesFaltantes": 7,
        "titulo": format!("Solicitud {id}"),
        "estado": { "id": 1, "nombre": state },
        "institucion": { "id": institution, "nombre": "MITIC" },
        "usuario": { "nombre": "Juan" }
    })
}

/// Two requests for the target institution (one answered) and one for another.
pub fn sample_feed() -> serde_json::Value {
    serde_json::json!([
        feed_request(101, 924, "RESPONDIDO"),
        feed_request(102, 55, "RESPONDIDO"),
        feed_request(103, 924, "PENDIENTE"),
    ])
}

pub fn tracker_config(server: &MockServer) -> TrackerConfig {
    TrackerConfig {
        url: format!("{}{FEED_PATH}", server.uri()),
        fetch_timeout: Duration::from_secs(2),
        refresh_every: Duration::from_millis(100),
    }
}

pub fn tracker_for(server: &MockServer) -> PublicInfoTracker {
    PublicInfoTracker::new(&tracker_config(server)).expect("build tracker")
}

/// Replace every mock on `server` with one answering `response`.
pub async fn serve_feed(server: &MockServer, response: ResponseTemplate) {
    server.reset().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}
