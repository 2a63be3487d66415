//! Rubric catalog: the four training phases and their scoring pillars.
//! Pillar counts intentionally vary by phase (5, 4, 6, 5).

use serde::Serialize;

/// One scored sub-skill within a phase's rubric. The description is the
/// question the analysis model answers when scoring it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PillarDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A stage of the employer-engagement workflow with its rubric.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhaseDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub pillars: &'static [PillarDefinition],
}

pub const PHASE_DEFINITIONS: [PhaseDefinition; 4] = [
    PhaseDefinition {
        id: "phase-1",
        label: "Trinn 1: Første kontakt",
        pillars: &[
            PillarDefinition {
                id: "intro_name",
                label: "Navn",
                description: "Presenterte du deg med fullt navn?",
            },
            PillarDefinition {
                id: "intro_role",
                label: "Rolle",
                description: "Forklarte du tydelig hvilken rolle du har som jobbkonsulent?",
            },
            PillarDefinition {
                id: "intro_company",
                label: "Virksomhet",
                description: "Sa du hvilken virksomhet du kommer fra på en måte som skaper trygghet?",
            },
            PillarDefinition {
                id: "intro_purpose",
                label: "Formål",
                description: "Forklarte du kort og forståelig hvorfor du tar kontakt?",
            },
            PillarDefinition {
                id: "followup_meeting",
                label: "Oppfølgingsmøte",
                description: "Ble det avtalt et konkret oppfølgingsmøte med dato og klokkeslett?",
            },
        ],
    },
    PhaseDefinition {
        id: "phase-2",
        label: "Trinn 2: Lære om arbeidsgiver",
        pillars: &[
            PillarDefinition {
                id: "relationship",
                label: "Relasjonsbygging",
                description: "Viste du genuin interesse for bedriften og folkene?",
            },
            PillarDefinition {
                id: "work_tasks",
                label: "Arbeidsoppgaver",
                description: "Kartla du hvilke konkrete arbeidsoppgaver som finnes?",
            },
            PillarDefinition {
                id: "physical_env",
                label: "Fysisk arbeidsmiljø",
                description: "Kartla du fysisk arbeidsmiljø (tempo, støy, løft, skift)?",
            },
            PillarDefinition {
                id: "psychosocial_env",
                label: "Psykososialt arbeidsmiljø",
                description: "Kartla du psykososialt miljø (kultur, støtte, stressnivå)?",
            },
        ],
    },
    PhaseDefinition {
        id: "phase-3a",
        label: "Trinn 3a: Jobbmatch",
        pillars: &[
            PillarDefinition {
                id: "education",
                label: "Utdanning",
                description: "Samsvar mellom jobbsøkers utdanning og jobbens krav.",
            },
            PillarDefinition {
                id: "experience",
                label: "Erfaring",
                description: "Samsvar mellom tidligere erfaring og arbeidsoppgaver.",
            },
            PillarDefinition {
                id: "preferences",
                label: "Preferanser vs behov",
                description: "Samsvar mellom jobbsøkers ønsker og arbeidsgivers behov.",
            },
            PillarDefinition {
                id: "psych_health",
                label: "Psykisk helse og miljø",
                description: "Samsvar mellom jobbsøkers psykiske helse og arbeidsmiljø.",
            },
            PillarDefinition {
                id: "physical_health",
                label: "Fysisk helse og miljø",
                description: "Samsvar mellom jobbsøkers fysiske helse og arbeidsmiljø.",
            },
            PillarDefinition {
                id: "cognitive",
                label: "Kognitiv funksjon",
                description: "Samsvar mellom jobbsøkers kognitive fungering og jobbens krav.",
            },
        ],
    },
    PhaseDefinition {
        id: "phase-3b",
        label: "Trinn 3b: Videre relasjon",
        pillars: &[
            PillarDefinition {
                id: "trust",
                label: "Relasjon og tillit",
                description: "Hvor godt bygget og forsterket du en trygg relasjon?",
            },
            PillarDefinition {
                id: "future_needs",
                label: "Fremtidige behov",
                description: "Utforsket du mulige jobbåpninger og behov fremover?",
            },
            PillarDefinition {
                id: "followup_freq",
                label: "Oppfølgingsfrekvens",
                description: "Avtale om rytme for oppfølging som passer arbeidsgiver.",
            },
            PillarDefinition {
                id: "visibility",
                label: "Synlighet",
                description: "Er det lett for arbeidsgiver å forstå hvordan du kan kontaktes?",
            },
            PillarDefinition {
                id: "value",
                label: "Opplevd verdi",
                description: "Får arbeidsgiver reell verdi ut av kontakten?",
            },
        ],
    },
];

/// Looks up a phase by id. Returns `None` for unknown ids.
pub fn phase_definition(phase_id: &str) -> Option<&'static PhaseDefinition> {
    PHASE_DEFINITIONS.iter().find(|p| p.id == phase_id)
}
