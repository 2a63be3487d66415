//! Prompts for the transcript analysis turn. The system prompt fixes the
//! vocabulary, the per-phase rubrics, the scoring policy and the exact JSON
//! schema; the user prompt carries the concrete context and transcript.

use crate::catalog::Difficulty;

/// System prompt for transcript analysis. Static: the rubric listing covers
/// all four phases, and the user prompt pins which one applies.
pub const ANALYZE_SYSTEM_PROMPT: &str = r#"Du er en ekspert på jobbutvikling (arbeidsgiverkontakt) i norsk arbeidsinkludering,
med særlig vekt på IPS og ordinært, lønnet arbeid. Du skal analysere en samtale
mellom en jobbkonsulent og en arbeidsgiver.

VIKTIG: FOKUS PÅ ORDINÆRT ARBEID
- Målet med samtalene er ALLTID ordinært, lønnet arbeid – vanlige ansettelser.
- Hvis jobbkonsulenten snakker om arbeidspraksis, arbeidsutprøving, lønnstilskudd eller lignende tiltak, skal dette TREKKE NED scoren betydelig.
- Belønne jobbkonsulenter som fokuserer på å lære om arbeidsgiveren, forstå deres behov, og matche til ordinære stillinger.
- Ordet "samarbeid" bør unngås til fordel for "bli bedre kjent med", "lære om", "forstå behovene til" etc.

VIKTIG SPRÅKBRUK (MÅ FØLGES):
- Bruk alltid begrepet "jobbsøker" om personen som skal i jobb – aldri "klient", "bruker" eller lignende.
- Bruk alltid "jobbkonsulent" om den profesjonelle.
- Bruk "arbeidsgiver" om den andre parten i samtalen.
- Når du gir tilbakemeldinger (good/improve), skriver du direkte til jobbkonsulenten som "du".
- Skriv på norsk, tydelig og konkret.

FASE 1 – FØRSTE KONTAKT
Søyler: Navn, Rolle, Virksomhet, Formål, Oppfølgingsmøte

FASE 2 – KARTLEGGING
Søyler: Relasjonsbygging, Arbeidsoppgaver, Fysisk arbeidsmiljø, Psykososialt arbeidsmiljø

FASE 3A – JOBBMATCH
Søyler: Utdanning, Arbeidserfaring, Preferanser vs behov, Psykisk helse og miljø, Fysisk helse og miljø, Kognitiv fungering

FASE 3B – VIDERE RELASJON
Søyler: Relasjon og tillit, Utforsking av fremtidige behov, Oppfølging over tid, Synlighet og tilgjengelighet, Opplevd verdi

SCORINGSREGLER:
- Score 0–100 skal reflektere kvalitet gitt fase og vanskelighetsgrad.
- Høy vanskelighetsgrad krever mer for samme score.
- Hvis det er lite data om en søyle, gi lavere score og forklar konkret hva som mangler.

FORMAT PÅ SVAR:
Du skal returnere KUN gyldig JSON med denne strukturen:
{
  "score": number (0-100),
  "phaseKey": string,
  "phaseLabel": string,
  "difficulty": "Easy" | "Moderate" | "Difficult",
  "pillars": [
    {
      "id": string,
      "label": string,
      "description": string,
      "score": number (0-100)
    }
  ],
  "good": string[] (konkrete styrker, skrevet til "du"),
  "improve": string[] (forbedringspunkter, skrevet til "du"),
  "nextLevel": string | null ("Moderate", "Difficult", eller null)
}"#;

pub struct AnalyzePromptParams<'a> {
    pub phase_key: &'a str,
    pub phase_label: &'a str,
    pub difficulty: Difficulty,
    pub character_label: &'a str,
    pub scenario_description: &'a str,
}

/// Builds the user prompt: concrete phase/difficulty/scenario context plus
/// the serialized transcript.
pub fn build_analyze_user_prompt(params: &AnalyzePromptParams<'_>, transcript: &str) -> String {
    format!(
        "Du skal nå analysere en jobbutviklings-samtale for ÉN bestemt fase.\n\
         \n\
         Kontekst:\n\
         - Virksomhet: {character_label}\n\
         - FaseKey: {phase_key}\n\
         - Fase: {phase_label}\n\
         - Vanskelighetsgrad: {difficulty}\n\
         - {difficulty_text}\n\
         - Scenario: {scenario_description}\n\
         \n\
         Transkripsjon (Jobbkonsulent og Arbeidsgiver):\n\
         {transcript}",
        character_label = params.character_label,
        phase_key = params.phase_key,
        phase_label = params.phase_label,
        difficulty = params.difficulty.as_str(),
        difficulty_text = difficulty_text(params.difficulty),
        scenario_description = params.scenario_description,
        transcript = transcript,
    )
}

/// Scoring-stringency line: higher difficulty demands more evidence for the
/// same score.
fn difficulty_text(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "NIVÅ: LETT. Arbeidsgiver er relativt positiv og åpen. De fleste gode samtaler vil typisk ende i oppfølgingsmøte."
        }
        Difficulty::Moderate => {
            "NIVÅ: MIDDELS. Arbeidsgiver er mer ambivalent. Omtrent 3 av 10 gode samtaler ender ikke i møte."
        }
        Difficulty::Difficult => {
            "NIVÅ: VANSKELIG. Arbeidsgiver er skeptisk. Omtrent 5 av 10 gode samtaler ender ikke i møte."
        }
    }
}
