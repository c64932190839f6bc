use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use super::types::{NewProposal, Proposal};
use super::ProposalStore;
use crate::errors::StoreError;

/// Volatile proposal store. Keys are UUIDv7, so map order is creation order.
#[derive(Debug, Default)]
pub struct MemoryProposalStore {
    docs: RwLock<BTreeMap<Uuid, Proposal>>,
}

impl MemoryProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a record exactly as given, bypassing the insert policy.
    pub fn insert_raw(&self, proposal: Proposal) {
        let mut docs = self.docs.write().unwrap_or_else(PoisonError::into_inner);
        docs.insert(proposal.id, proposal);
    }

    pub fn len(&self) -> usize {
        self.docs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProposalStore for MemoryProposalStore {
    async fn insert(&self, proposal: NewProposal) -> Result<Uuid, StoreError> {
        let id = Uuid::now_v7();
        self.insert_raw(Proposal {
            id,
            name: proposal.name,
            email: proposal.email,
            category: proposal.category,
            title: proposal.title,
            content: proposal.content,
            approved: true,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Proposal, StoreError> {
        let docs = self.docs.read().unwrap_or_else(PoisonError::into_inner);
        docs.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn list_approved(&self) -> Result<Vec<Proposal>, StoreError> {
        let docs = self.docs.read().unwrap_or_else(PoisonError::into_inner);
        Ok(docs.values().rev().filter(|p| p.approved).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_proposal(title: &str) -> NewProposal {
        NewProposal {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            category: 1,
            title: title.to_string(),
            content: "C".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_sets_approved_and_finds_by_id() {
        let store = MemoryProposalStore::new();
        let id = store.insert(new_proposal("T")).await.unwrap();
        let found = store.find_by_id(id).await.unwrap();
        assert!(found.approved);
        assert_eq!(found.title, "T");
        assert!(matches!(store.find_by_id(Uuid::now_v7()).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryProposalStore::new();
        for title in ["first", "second", "third"] {
            store.insert(new_proposal(title)).await.unwrap();
        }
        let titles: Vec<_> = store
            .list_approved()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }
}
