use std::fmt;

use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::proposal::{
    view, NewProposal, ProposalForm, ProposalStore, ProposalView,
};
use crate::sanitize::strip_tags;
use crate::validate::{validate_category, validate_email, ValidationError};

/// Why a submission was not stored. The messages are what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    InvalidEmail,
    InvalidCategory,
    Generic,
}

impl SubmitError {
    pub fn message(self) -> &'static str {
        match self {
            SubmitError::InvalidEmail => "Dirección inválida",
            SubmitError::InvalidCategory => "Categoría inválida",
            SubmitError::Generic => "Error",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SubmitError {}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::InvalidEmail => SubmitError::InvalidEmail,
            ValidationError::InvalidCategory => SubmitError::InvalidCategory,
        }
    }
}

/// Result of a submission: the listing to show next plus what happened.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub proposals: Vec<ProposalView>,
    pub result: Result<Uuid, SubmitError>,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<SubmitError> {
        self.result.err()
    }
}

/// Submission and listing of proposals. Holds no state besides the store, so
/// one instance is shared by all request handlers.
#[derive(Debug)]
pub struct ProposalService<S> {
    store: S,
}

impl<S: ProposalStore> ProposalService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sanitize, validate and persist a submission.
    ///
    /// Validation failures and store failures never write anything; in every
    /// case the caller gets a listing to show alongside the outcome.
    pub async fn submit(&self, form: ProposalForm) -> SubmitOutcome {
        let name = strip_tags(&form.name);
        let title = strip_tags(&form.title);
        let content = strip_tags(&form.content);

        let category = match validate_email(&form.email).and_then(|()| validate_category(&form.category)) {
            Ok(category) => category,
            Err(e) => {
                log::debug!("Rejected proposal submission: {e}");
                return self.outcome(Err(e.into())).await;
            }
        };

        let new = NewProposal {
            name,
            email: form.email,
            category,
            title,
            content,
        };

        match self.store.insert(new).await {
            Ok(id) => {
                log::info!("Stored proposal {id}");
                self.outcome(Ok(id)).await
            }
            Err(e) => {
                log::error!("Failed to store proposal: {e}");
                self.outcome(Err(SubmitError::Generic)).await
            }
        }
    }

    /// Every approved proposal in display form, newest first.
    pub async fn list(&self) -> Result<Vec<ProposalView>, StoreError> {
        let proposals = self.store.list_approved().await?;
        Ok(proposals.iter().map(view::render).collect())
    }

    /// A single proposal by its display identifier.
    pub async fn get_by_id(&self, id: &str) -> Result<ProposalView, StoreError> {
        let id = Uuid::parse_str(id).map_err(|_| StoreError::NotFound)?;
        let proposal = self.store.find_by_id(id).await?;
        Ok(view::render(&proposal))
    }

    async fn outcome(&self, result: Result<Uuid, SubmitError>) -> SubmitOutcome {
        let proposals = self.list().await.unwrap_or_else(|e| {
            log::error!("Failed to list proposals: {e}");
            Vec::new()
        });
        SubmitOutcome { proposals, result }
    }
}
