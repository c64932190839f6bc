pub mod memory;
pub mod queries;
pub mod types;
pub mod view;

use std::future::Future;

use uuid::Uuid;

use crate::errors::StoreError;

pub use memory::MemoryProposalStore;
pub use queries::PgProposalStore;
pub use types::*;

/// Persistence for proposals. Records are created once and never updated.
pub trait ProposalStore: Send + Sync {
    /// Persist a proposal under a fresh time-ordered identifier, always
    /// approved. Returns the identifier.
    fn insert(&self, proposal: NewProposal) -> impl Future<Output = Result<Uuid, StoreError>> + Send;

    /// Look up a proposal by identifier, approved or not.
    fn find_by_id(&self, id: Uuid) -> impl Future<Output = Result<Proposal, StoreError>> + Send;

    /// Approved proposals, newest first.
    fn list_approved(&self) -> impl Future<Output = Result<Vec<Proposal>, StoreError>> + Send;
}
