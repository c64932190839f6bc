use actix_web::{web, HttpResponse};

use crate::errors::{render, AppError};
use crate::public_info::PublicInfoTracker;
use crate::templates_structs::PublicInfoListTemplate;

/// GET /solicitudes
/// Reads the cached snapshot; never touches the remote feed.
pub async fn list(tracker: web::Data<PublicInfoTracker>) -> Result<HttpResponse, AppError> {
    render(PublicInfoListTemplate {
        reqs: tracker.snapshot(),
        refreshed_at: tracker
            .refreshed_at()
            .map(|ts| ts.format("%d/%m/%Y %H:%M UTC").to_string()),
    })
}
