// Template context structures for Askama templates, organized by page.

mod proposal;
mod public_info;

pub use proposal::*;
pub use public_info::*;
