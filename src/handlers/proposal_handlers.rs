use actix_web::{web, HttpResponse};

use crate::errors::{render, AppError};
use crate::models::proposal::{ProposalForm, ProposalStore};
use crate::services::ProposalService;
use crate::templates_structs::{ProposalDetailTemplate, ProposalListTemplate};

/// GET /propuestas
pub async fn list<S: ProposalStore>(
    service: web::Data<ProposalService<S>>,
) -> Result<HttpResponse, AppError> {
    let proposals = service.list().await?;
    render(ProposalListTemplate {
        proposals,
        error: None,
        success: false,
    })
}

/// POST /propuestas
/// Always answers with the listing page, flagged with the submission outcome.
pub async fn submit<S: ProposalStore>(
    service: web::Data<ProposalService<S>>,
    form: web::Form<ProposalForm>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.submit(form.into_inner()).await;
    render(ProposalListTemplate {
        error: outcome.error().map(|e| e.message().to_string()),
        success: outcome.is_success(),
        proposals: outcome.proposals,
    })
}

/// GET /propuestas/{id}
pub async fn detail<S: ProposalStore>(
    service: web::Data<ProposalService<S>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let p = service.get_by_id(&path.into_inner()).await?;
    render(ProposalDetailTemplate { p })
}
