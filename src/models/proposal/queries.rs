use sqlx::PgPool;
use uuid::Uuid;

use super::types::{NewProposal, Proposal};
use super::ProposalStore;
use crate::errors::StoreError;

/// Proposal store backed by the `proposals` table.
#[derive(Debug, Clone)]
pub struct PgProposalStore {
    pool: PgPool,
}

impl PgProposalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ProposalStore for PgProposalStore {
    async fn insert(&self, proposal: NewProposal) -> Result<Uuid, StoreError> {
        let id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO proposals (id, name, email, category, title, content, approved) \
             VALUES ($1, $2, $3, $4, $5, $6, TRUE)",
        )
        .bind(id)
        .bind(&proposal.name)
        .bind(&proposal.email)
        .bind(proposal.category)
        .bind(&proposal.title)
        .bind(&proposal.content)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Proposal, StoreError> {
        sqlx::query_as::<_, Proposal>(
            "SELECT id, name, email, category, title, content, approved \
             FROM proposals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn list_approved(&self) -> Result<Vec<Proposal>, StoreError> {
        let rows = sqlx::query_as::<_, Proposal>(
            "SELECT id, name, email, category, title, content, approved \
             FROM proposals WHERE approved = TRUE \
             ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
