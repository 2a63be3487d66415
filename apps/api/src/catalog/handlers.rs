//! Read-only HTTP exposure of the catalogs for the UI collaborator.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::catalog::{
    phase_definition, scenario, Difficulty, Employer, PhaseDefinition, ScenarioDefinition,
    EMPLOYER, PHASE_DEFINITIONS,
};
use crate::errors::AppError;

#[derive(Serialize)]
pub struct CatalogResponse {
    pub employer: Employer,
    pub phases: &'static [PhaseDefinition],
    pub difficulties: Vec<DifficultyInfo>,
}

/// Difficulty tier as shown to the trainee: wire key, Norwegian label, and
/// the recommended next tier.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyInfo {
    pub key: Difficulty,
    pub label: &'static str,
    pub next_level: Option<Difficulty>,
}

/// GET /api/v1/phases
///
/// Returns the employer, all phases with their rubric pillars, and the
/// difficulty tiers.
pub async fn handle_list_phases() -> Json<CatalogResponse> {
    let difficulties = Difficulty::ALL
        .into_iter()
        .map(|d| DifficultyInfo {
            key: d,
            label: d.label_no(),
            next_level: d.next_level(),
        })
        .collect();
    Json(CatalogResponse {
        employer: EMPLOYER,
        phases: &PHASE_DEFINITIONS,
        difficulties,
    })
}

/// GET /api/v1/scenarios/:phase_id/:difficulty
pub async fn handle_get_scenario(
    Path((phase_id, difficulty)): Path<(String, Difficulty)>,
) -> Result<Json<&'static ScenarioDefinition>, AppError> {
    // Reject ids the rubric catalog does not know either, so both catalogs
    // present the same phase universe.
    if phase_definition(&phase_id).is_none() {
        return Err(AppError::NotFound(format!("Unknown phase '{phase_id}'")));
    }
    scenario(&phase_id, difficulty)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No scenario for phase '{phase_id}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_phases_includes_employer() {
        let Json(response) = handle_list_phases().await;
        assert_eq!(response.employer.label, "Rema 1000 Nygårdsgaten");
        assert_eq!(response.phases.len(), 4);
        assert_eq!(response.difficulties.len(), 3);
        assert_eq!(response.difficulties[0].label, "Lett");
        assert_eq!(response.difficulties[2].next_level, None);
    }

    #[tokio::test]
    async fn test_get_scenario_known_pair() {
        let result =
            handle_get_scenario(Path(("phase-2".to_string(), Difficulty::Moderate))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_scenario_unknown_phase_is_not_found() {
        let result = handle_get_scenario(Path(("phase-9".to_string(), Difficulty::Easy))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
