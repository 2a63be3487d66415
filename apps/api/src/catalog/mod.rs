//! Static reference data for the simulator: the four workflow phases with
//! their scoring rubrics, and one scenario per (phase, difficulty) pair.
//!
//! All of this is compiled-in, immutable data. `verify()` cross-checks the
//! two tables at startup so a configuration defect aborts the process before
//! it can serve a request.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod phases;
pub mod scenarios;

pub use phases::{phase_definition, PhaseDefinition, PHASE_DEFINITIONS};
pub use scenarios::{scenario, Employer, ScenarioDefinition, EMPLOYER, SCENARIO_PHASES};

/// How resistant the simulated employer is, and how strictly the transcript
/// is scored. Ordering is by increasing strictness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Difficult];

    /// The wire/display key ("Easy", "Moderate", "Difficult").
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
        }
    }

    /// Norwegian display label shown to the trainee.
    pub fn label_no(self) -> &'static str {
        match self {
            Difficulty::Easy => "Lett",
            Difficulty::Moderate => "Moderat",
            Difficulty::Difficult => "Vanskelig",
        }
    }

    /// The recommended next tier after mastering this one.
    pub fn next_level(self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => Some(Difficulty::Moderate),
            Difficulty::Moderate => Some(Difficulty::Difficult),
            Difficulty::Difficult => None,
        }
    }
}

/// Cross-checks the rubric and scenario tables. Both must cover the same
/// phase ids in the same order, and pillar ids must be unique within each
/// phase. Scenario totality over difficulties is enforced structurally by
/// `ScenarioSet`, so only phase alignment needs a runtime check.
pub fn verify() -> Result<()> {
    if PHASE_DEFINITIONS.len() != SCENARIO_PHASES.len() {
        bail!(
            "rubric catalog has {} phases but scenario catalog has {}",
            PHASE_DEFINITIONS.len(),
            SCENARIO_PHASES.len()
        );
    }

    for (rubric, scen) in PHASE_DEFINITIONS.iter().zip(SCENARIO_PHASES.iter()) {
        if rubric.id != scen.id {
            bail!(
                "phase id mismatch between catalogs: rubric '{}' vs scenario '{}'",
                rubric.id,
                scen.id
            );
        }
        if rubric.pillars.is_empty() {
            bail!("phase '{}' has an empty rubric", rubric.id);
        }
        for (i, pillar) in rubric.pillars.iter().enumerate() {
            if pillar.id.is_empty() {
                bail!("phase '{}' has a pillar with an empty id", rubric.id);
            }
            if rubric.pillars[..i].iter().any(|p| p.id == pillar.id) {
                bail!("phase '{}' has duplicate pillar id '{}'", rubric.id, pillar.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_verify() {
        verify().unwrap();
    }

    #[test]
    fn test_scenario_lookup_total_over_cross_product() {
        for phase in PHASE_DEFINITIONS.iter() {
            for difficulty in Difficulty::ALL {
                assert!(
                    scenario(phase.id, difficulty).is_some(),
                    "missing scenario for ({}, {:?})",
                    phase.id,
                    difficulty
                );
            }
        }
    }

    #[test]
    fn test_pillar_counts_per_phase() {
        let counts: Vec<usize> = PHASE_DEFINITIONS.iter().map(|p| p.pillars.len()).collect();
        assert_eq!(counts, vec![5, 4, 6, 5]);
    }

    #[test]
    fn test_difficulty_serde_wire_strings() {
        for difficulty in Difficulty::ALL {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{}\"", difficulty.as_str()));
            let back: Difficulty = serde_json::from_str(&json).unwrap();
            assert_eq!(back, difficulty);
        }
    }

    #[test]
    fn test_difficulty_ordering_by_strictness() {
        assert!(Difficulty::Easy < Difficulty::Moderate);
        assert!(Difficulty::Moderate < Difficulty::Difficult);
    }

    #[test]
    fn test_next_level_progression() {
        assert_eq!(Difficulty::Easy.next_level(), Some(Difficulty::Moderate));
        assert_eq!(Difficulty::Moderate.next_level(), Some(Difficulty::Difficult));
        assert_eq!(Difficulty::Difficult.next_level(), None);
    }

    #[test]
    fn test_unknown_phase_is_none() {
        assert!(phase_definition("phase-99").is_none());
        assert!(scenario("phase-99", Difficulty::Easy).is_none());
    }
}
