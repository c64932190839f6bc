pub mod proposal_handlers;
pub mod public_info_handlers;

use actix_web::web;

use crate::errors::not_found_page;
use crate::models::proposal::ProposalStore;

/// Register every route. Expects `web::Data<ProposalService<S>>` and
/// `web::Data<PublicInfoTracker>` in app data.
pub fn configure<S: ProposalStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/propuestas", web::get().to(proposal_handlers::list::<S>))
        .route("/propuestas", web::post().to(proposal_handlers::submit::<S>))
        .route("/propuestas/{id}", web::get().to(proposal_handlers::detail::<S>))
        .route("/solicitudes", web::get().to(public_info_handlers::list))
        .default_service(web::to(|| async { not_found_page() }));
}
