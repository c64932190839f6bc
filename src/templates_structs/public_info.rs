use std::sync::Arc;

use askama::Template;

use crate::public_info::PublicInfoRequest;

#[derive(Template)]
#[template(path = "public_info/list.html")]
pub struct PublicInfoListTemplate {
    pub reqs: Arc<Vec<PublicInfoRequest>>,
    /// Last successful refresh, formatted; `None` before the first one.
    pub refreshed_at: Option<String>,
}
