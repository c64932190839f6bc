use serde::{Deserialize, Serialize};

use super::{ANSWERED_STATE, INSTITUTION_ID};

/// A tracked request, as cached and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicInfoRequest {
    pub id: i64,
    pub date: String,
    pub remaining_days: i64,
    pub title: String,
    pub state_name: String,
    pub institution_id: i64,
    pub replied: bool,
}

/// One element of the portal's JSON array. Missing or null fields read as
/// zero/empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedRequest {
    pub id: Option<i64>,
    pub fecha: Option<String>,
    #[serde(rename = "diasHabilesFaltantes")]
    pub dias_habiles_faltantes: Option<i64>,
    pub titulo: Option<String>,
    pub estado: Option<FeedState>,
    pub institucion: Option<FeedInstitution>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedState {
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedInstitution {
    pub id: Option<i64>,
}

impl FeedRequest {
    pub fn institution_id(&self) -> i64 {
        self.institucion.as_ref().and_then(|i| i.id).unwrap_or_default()
    }
}

impl From<FeedRequest> for PublicInfoRequest {
    fn from(raw: FeedRequest) -> Self {
        let institution_id = raw.institution_id();
        let state_name = raw.estado.and_then(|s| s.nombre).unwrap_or_default();
        PublicInfoRequest {
            id: raw.id.unwrap_or_default(),
            date: raw.fecha.unwrap_or_default(),
            remaining_days: raw.dias_habiles_faltantes.unwrap_or_default(),
            title: raw.titulo.unwrap_or_default(),
            replied: state_name == ANSWERED_STATE,
            state_name,
            institution_id,
        }
    }
}

/// Keep the target institution's requests and derive `replied`.
pub fn filter_requests(raw: Vec<FeedRequest>) -> Vec<PublicInfoRequest> {
    raw.into_iter()
        .filter(|r| r.institution_id() == INSTITUTION_ID)
        .map(PublicInfoRequest::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<FeedRequest> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn keeps_only_target_institution() {
        let raw = parse(
            r#"[
                {"id": 1, "fecha": "2024-01-02", "diasHabilesFaltantes": 3, "titulo": "A",
                 "estado": {"nombre": "RESPONDIDO"}, "institucion": {"id": 924}},
                {"id": 2, "fecha": "2024-01-03", "diasHabilesFaltantes": 5, "titulo": "B",
                 "estado": {"nombre": "PENDIENTE"}, "institucion": {"id": 17}},
                {"id": 3, "fecha": "2024-01-04", "diasHabilesFaltantes": 0, "titulo": "C",
                 "estado": {"nombre": "PENDIENTE"}, "institucion": {"id": 924}}
            ]"#,
        );
        let kept = filter_requests(raw);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 1);
        assert!(kept[0].replied);
        assert_eq!(kept[0].remaining_days, 3);
        assert_eq!(kept[1].id, 3);
        assert!(!kept[1].replied);
        assert_eq!(kept[1].state_name, "PENDIENTE");
    }

    #[test]
    fn replied_requires_exact_sentinel() {
        let raw = parse(
            r#"[
                {"id": 1, "estado": {"nombre": "respondido"}, "institucion": {"id": 924}},
                {"id": 2, "estado": {"nombre": "RESPONDIDO "}, "institucion": {"id": 924}}
            ]"#,
        );
        assert!(filter_requests(raw).iter().all(|r| !r.replied));
    }

    #[test]
    fn tolerates_missing_and_null_fields() {
        let raw = parse(
            r#"[
                {"id": 9, "fecha": null, "titulo": null, "estado": null, "institucion": {"id": 924},
                 "extra": {"ignored": true}},
                {"id": 10}
            ]"#,
        );
        let kept = filter_requests(raw);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 9);
        assert_eq!(kept[0].date, "");
        assert_eq!(kept[0].state_name, "");
        assert!(!kept[0].replied);
    }
}
