use askama::Template;

use crate::models::proposal::ProposalView;

/// Listing page with the submission form.
#[derive(Template)]
#[template(path = "proposals/list.html")]
pub struct ProposalListTemplate {
    pub proposals: Vec<ProposalView>,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Template)]
#[template(path = "proposals/detail.html")]
pub struct ProposalDetailTemplate {
    pub p: ProposalView,
}
