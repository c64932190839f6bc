pub mod proposal_service;

pub use proposal_service::{ProposalService, SubmitError, SubmitOutcome};
