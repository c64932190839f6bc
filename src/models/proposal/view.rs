use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::types::{Category, Proposal, ProposalView};

/// Maximum number of characters kept by [`truncate`].
pub const TRUNCATE_AT: usize = 50;
pub const ELLIPSIS: &str = "...";
pub const LINE_BREAK: &str = "<br />";

const DATE_FORMAT: &str = "%d/%m/%y";

/// Project a stored proposal into its display form. Pure and deterministic.
pub fn render(p: &Proposal) -> ProposalView {
    let category = Category::from_code(p.category);
    let date = created_at(&p.id)
        .map(|ts| ts.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    ProposalView {
        id: p.id.to_string(),
        name: p.name.clone(),
        category: category.label().to_string(),
        category_link: category.link().to_string(),
        date,
        truncated_title: truncate(&p.title),
        title: p.title.clone(),
        truncated_content: truncate(&p.content),
        content: content_to_html(&p.content),
    }
}

/// Keep the first [`TRUNCATE_AT`] characters and append [`ELLIPSIS`] when the
/// input is longer; otherwise return it unchanged.
pub fn truncate(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_AT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &s[..cut]),
        None => s.to_string(),
    }
}

/// HTML-escape `s`, drop carriage returns, then turn each newline into
/// [`LINE_BREAK`]. `\r\n` becomes one break, not two.
pub fn content_to_html(s: &str) -> String {
    escape_html(s).replace('\r', "").replace('\n', LINE_BREAK)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Creation time embedded in a time-based identifier.
pub fn created_at(id: &Uuid) -> Option<DateTime<Utc>> {
    let (secs, nanos) = id.get_timestamp()?.to_unix();
    DateTime::from_timestamp(i64::try_from(secs).ok()?, nanos)
}
