use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted citizen proposal.
///
/// The identifier is a UUIDv7, so it is time-ordered and carries the creation
/// time; there is no separate timestamp column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Proposal {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub category: i32,
    pub title: String,
    pub content: String,
    pub approved: bool,
}

/// Sanitized, validated fields ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProposal {
    pub name: String,
    pub email: String,
    pub category: i32,
    pub title: String,
    pub content: String,
}

/// Raw submission as posted by the proposal form. Missing fields are empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProposalForm {
    pub name: String,
    pub email: String,
    pub category: String,
    pub title: String,
    pub content: String,
}

/// Display-ready projection of a [`Proposal`]. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_link: String,
    pub date: String,
    pub truncated_title: String,
    pub title: String,
    pub truncated_content: String,
    /// Content with `\r` removed and `\n` turned into `<br />`.
    pub content: String,
}

/// Policy area a proposal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    General,
    GobiernoDigital,
    EconomiaDigital,
    Conectividad,
    FortalecimientoInstitucional,
}

impl Category {
    /// Map a stored code to a category. Unknown codes, including legacy or
    /// corrupted values, fall back to [`Category::General`].
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Category::GobiernoDigital,
            2 => Category::EconomiaDigital,
            3 => Category::Conectividad,
            4 => Category::FortalecimientoInstitucional,
            _ => Category::General,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::GobiernoDigital => "Gobierno Digital",
            Category::EconomiaDigital => "Economía Digital",
            Category::Conectividad => "Conectividad",
            Category::FortalecimientoInstitucional => "Fortalecimiento Institucional",
        }
    }

    pub fn link(self) -> &'static str {
        match self {
            Category::General => "#",
            Category::GobiernoDigital => "/gobierno-digital",
            Category::EconomiaDigital => "/economia-digital",
            Category::Conectividad => "/conectividad",
            Category::FortalecimientoInstitucional => "/fortalecimiento-institucional",
        }
    }
}
