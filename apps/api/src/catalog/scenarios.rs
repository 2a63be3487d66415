//! Scenario catalog: the concrete situational text for every
//! (phase, difficulty) pair, plus the employer and job-seeker profiles shown
//! alongside phase 3a.
//!
//! Totality over difficulties is guaranteed by `ScenarioSet` holding one
//! field per tier rather than a map.

use serde::Serialize;

use crate::catalog::Difficulty;

/// The single employer the simulator is built around.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employer {
    pub id: &'static str,
    pub label: &'static str,
    pub manager_name: &'static str,
}

pub const EMPLOYER: Employer = Employer {
    id: "rema-1000-city",
    label: "Rema 1000 Nygårdsgaten",
    manager_name: "Kari Johansen",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkEnv {
    pub physical: &'static str,
    pub psychosocial: &'static str,
    pub cognitive: &'static str,
}

/// Background facts about the employer, shown to the trainee in phase 3a.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub summary: &'static str,
    pub key_facts: &'static [&'static str],
    pub work_env: WorkEnv,
    pub current_need: &'static str,
}

/// The candidate being matched in phase 3a.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerProfile {
    pub name: &'static str,
    pub age: u8,
    pub background: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub preferences: &'static str,
}

/// The situational setup for one (phase, difficulty) pair. `description` is
/// model-facing; `short_description` is the teaser shown to the trainee.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDefinition {
    pub description: &'static str,
    pub short_description: &'static str,
    pub manager_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_profile: Option<EmployerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_seeker_profile: Option<JobSeekerProfile>,
}

/// One scenario per difficulty tier. A missing tier is unrepresentable.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSet {
    pub easy: ScenarioDefinition,
    pub moderate: ScenarioDefinition,
    pub difficult: ScenarioDefinition,
}

impl ScenarioSet {
    pub fn get(&self, difficulty: Difficulty) -> &ScenarioDefinition {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Moderate => &self.moderate,
            Difficulty::Difficult => &self.difficult,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioPhase {
    pub id: &'static str,
    pub label: &'static str,
    pub scenarios: ScenarioSet,
}

const REMA_PROFILE: EmployerProfile = EmployerProfile {
    summary: "Stor dagligvarebutikk i sentrum med høyt tempo og jevn kundestrøm.",
    key_facts: &[
        "Ca. 25 ansatte inkludert deltidsansatte",
        "Åpent 07–23 på hverdager, noe kortere i helg",
        "Bred kundegruppe – lokale beboere, studenter og pendlere",
    ],
    work_env: WorkEnv {
        physical: "Mye ståing og gåing, vareløfting, arbeid i kjøl/frys og perioder med høyt tempo ved kasse og varepåfylling.",
        psychosocial: "Tett samarbeid i team, direkte kundekontakt gjennom hele dagen, skiftarbeid og fokus på service og effektivitet.",
        cognitive: "Må håndtere kasse, pris- og tilbudsendringer, vareplassering, enkle rutiner for svinn og raske omstillinger mellom ulike oppgaver.",
    },
    current_need: "Behov for ekstrahjelp til kasse og varepåfylling, særlig ettermiddager, kvelder og helger.",
};

const JOB_SEEKER: JobSeekerProfile = JobSeekerProfile {
    name: "Jonas Berg",
    age: 24,
    background: "Fullført videregående med noe fravær. Har jobbet et halvt år på lager og hatt sommerjobb i kiosk. Har vært utenfor arbeidslivet i to år på grunn av angst, men er motivert for å komme i gang igjen.",
    strengths: &[
        "Pålitelig og punktlig når rammene er tydelige",
        "Liker praktisk og fysisk arbeid",
        "God med rutineoppgaver som varepåfylling",
    ],
    challenges: &[
        "Blir sliten av lange vakter med mye kundekontakt",
        "Trenger tydelig opplæring og en fast kontaktperson",
    ],
    preferences: "Deltid å starte med, helst ettermiddag/kveld. Ønsker mest varepåfylling og lager, mindre kasse i starten.",
};

pub const SCENARIO_PHASES: [ScenarioPhase; 4] = [
    ScenarioPhase {
        id: "phase-1",
        label: "Trinn 1: Første kontakt",
        scenarios: ScenarioSet {
            easy: ScenarioDefinition {
                description: "Jobbkonsulenten oppsøker Rema 1000 i en rolig periode på formiddagen og spør etter den som har personalansvar. Daglig leder, Kari Johansen, kommer ut, presenterer seg med fullt navn og er positiv til å høre kort hva dette gjelder. Hun er åpen for samarbeid og foreslår selv et kort oppfølgingsmøte på ca. 20 minutter, og er fleksibel på å finne et annet tidspunkt hvis forslaget ikke passer. Første kontakt går direkte via Kari (ingen mellomledd).",
                short_description: "Du oppsøker Rema 1000 i en rolig periode for å ta første direkte kontakt med daglig leder om mulig samarbeid.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
            moderate: ScenarioDefinition {
                description: "Jobbkonsulenten kommer inn på ettermiddagen når det er travlere. Første kontakt er kassamedarbeideren Ali Hussein, som henter daglig leder. Daglig leder presenterer seg som «daglig leder» uten å oppgi navnet sitt, og er tydelig på at hun får mange henvendelser og må vite raskt hva dette gjelder. Hvis jobbkonsulenten på en god måte spør om navnet hennes og kort, konkret forklarer hensikten (relasjonsbygging og jobbmuligheter på sikt), deler hun navnet sitt (Kari Johansen). Hun foreslår ikke selv et møte, men blir nøkternt positiv til et kort oppfølgingsmøte og hjelpsom med å finne tidspunkt dersom jobbkonsulenten kommer med et konkret og godt begrunnet forslag.",
                short_description: "Du besøker Rema 1000 på et travlere tidspunkt og forsøker å etablere første kontakt med daglig leder via kassamedarbeider.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
            difficult: ScenarioDefinition {
                description: "Jobbkonsulenten oppsøker butikken på et veldig hektisk tidspunkt. Første kontakt er en ung deltidsansatt, Marius Solberg, som motvillig henter daglig leder. Når Kari kommer, er hun travel og irritert, oppgir ikke navnet sitt og understreker at hun ikke har tid til flere «prosjekter». Hun avviser i utgangspunktet tanken om oppfølgingsmøte. Bare dersom jobbkonsulenten viser høy grad av forståelse for tidsklemma, er kort og presis, forklarer tydelig at målet er å gjøre det enklere for butikken på sikt, og foreslår et svært konkret og tidsavgrenset møte, vil hun både oppgi navnet sitt (Kari Johansen) og motvillig bli med på å finne et tidspunkt.",
                short_description: "Du kommer til Rema 1000 i en svært hektisk periode og prøver likevel å få til første kontakt med daglig leder.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
        },
    },
    ScenarioPhase {
        id: "phase-2",
        label: "Trinn 2: Lære om arbeidsgiver",
        scenarios: ScenarioSet {
            easy: ScenarioDefinition {
                description: "Jobbkonsulenten kommer til et avtalt møte på bakrommet med daglig leder Kari Johansen. Kari har allerede presentert navnet sitt i første fase, og er nå oppriktig interessert i å fortelle om butikken, bemanning, typer jobber og hvilke egenskaper som er viktige. Hun oppfordrer jobbkonsulenten til å stille åpne spørsmål og er selv aktivt med på å foreslå videre dialog, inkludert et nytt oppfølgingsmøte for å fortsette samtalen og holde kontakten om framtidige behov. Hun foreslår selv tidspunkt og er fleksibel hvis det ikke passer.",
                short_description: "Du møter daglig leder på bakrommet for et avtalt møte der målet er å lære mer om butikken og bemanningsbehov.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
            moderate: ScenarioDefinition {
                description: "Jobbkonsulenten møter daglig leder på bakrommet. Hun omtaler seg som «daglig leder» og er litt distrahert av driftsoppgaver. Dersom jobbkonsulenten på en naturlig måte ber om navnet hennes, oppgir hun navnet Kari Johansen. Hun svarer saklig på spørsmål, men engasjerer seg først mer når jobbkonsulenten stiller konkrete, åpne spørsmål om arbeidsoppgaver, krav til ansatte og butikkens mål. Hun foreslår ikke selv videre møte, men hvis jobbkonsulenten begrunner behovet for et nytt kort møte (for eksempel for å komme tilbake med konkrete forslag som er tilpasset butikkens behov), vil hun være villig til å finne et passende tidspunkt for videre oppfølging.",
                short_description: "Du har et møte på bakrommet med en travel daglig leder og forsøker å kartlegge butikkens behov mer systematisk.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
            difficult: ScenarioDefinition {
                description: "Jobbkonsulenten kommer til et møte med en daglig leder som er skeptisk på grunn av tidligere negative erfaringer med tiltak. Hun presenterer seg uten navn og uttrykker tidlig at tidligere samarbeid har kostet mer enn det har gitt. Navnet hennes (Kari Johansen) kommer først fram hvis jobbkonsulenten viser oppriktig interesse for hennes erfaringer, anerkjenner risiko og lytter nøye før han/hun foreslår noe. Kari er i utgangspunktet negativ til nye møter og videre oppfølging, men dersom jobbkonsulenten på en veldig tydelig og respektfull måte viser hvordan samarbeid kan tilpasses butikkens behov og redusere risiko, kan hun motvillig gå med på et nytt kort møte og være med på å finne et konkret tidspunkt.",
                short_description: "Du møter en skeptisk daglig leder med dårlige erfaringer fra tidligere samarbeid og prøver å utforske butikkens situasjon og behov.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
        },
    },
    ScenarioPhase {
        id: "phase-3a",
        label: "Trinn 3a: Jobbmatch",
        scenarios: ScenarioSet {
            easy: ScenarioDefinition {
                description: "Daglig leder Kari Johansen har tidligere gitt uttrykk for behov for ekstra hjelp, og jobbkonsulenten kommer tilbake for å presentere en konkret jobbsøker. Kari er positiv, bruker navnet sitt aktivt i relasjonen og er interessert i hvordan jobbsøkeren matcher det hun tidligere har beskrevet. Hun er åpen for forslag og foreslår selv videre dialog dersom kandidaten virker aktuell, for eksempel et nytt møte eller en prøveordning, og er fleksibel med å finne tidspunkt som passer begge.",
                short_description: "Du kommer tilbake til Rema 1000 med en konkret kandidat etter at daglig leder har uttrykt behov for ekstra hjelp.",
                manager_name: "Kari Johansen",
                employer_profile: Some(REMA_PROFILE),
                job_seeker_profile: Some(JOB_SEEKER),
            },
            moderate: ScenarioDefinition {
                description: "Daglig leder har vært nøktern til å ansette og er usikker på om det er økonomisk rom for en ny ansatt. Hun omtaler seg som daglig leder, og hvis jobbkonsulenten spør om navnet hennes på en respektfull måte, oppgir hun navnet Kari Johansen. Hun er avventende til nye møter, men dersom jobbkonsulenten forankrer forslagene i det hun tidligere har sagt om drift, bemanningsbehov og økonomi, vil hun være villig til å sette opp et kort oppfølgingsmøte for å diskutere konkret kandidat, og er hjelpsom med å finne passende tidspunkt.",
                short_description: "Du presenterer en mulig kandidat for en daglig leder som er usikker på økonomi og videre ansettelse.",
                manager_name: "Kari Johansen",
                employer_profile: Some(REMA_PROFILE),
                job_seeker_profile: Some(JOB_SEEKER),
            },
            difficult: ScenarioDefinition {
                description: "Rema 1000 har nylig hatt en negativ erfaring med et samarbeid, og daglig leder er tydelig preget av dette. Hun oppgir ikke navnet sitt spontant og gir uttrykk for lav tillit til ordninger via Nav/tiltak. Bare dersom jobbkonsulenten viser dyp forståelse for butikkens behov, anerkjenner tidligere erfaringer uten å gå i forsvar, og konkretiserer hvordan både kandidater og oppfølging skal tilpasses, vil hun både oppgi navnet sitt (Kari Johansen) og være villig til å drøfte en svært avgrenset videre jobbmatch. Hun er negativ til nye møter, men kan likevel gå med på ett kort og tydelig avgrenset møte dersom jobbkonsulenten bruker teknikkene svært godt og foreslår et konkret tidspunkt med klar hensikt.",
                short_description: "Du forsøker å drøfte videre jobbmatch etter at butikken nylig har hatt en negativ erfaring med et tiltak.",
                manager_name: "Kari Johansen",
                employer_profile: Some(REMA_PROFILE),
                job_seeker_profile: Some(JOB_SEEKER),
            },
        },
    },
    ScenarioPhase {
        id: "phase-3b",
        label: "Trinn 3b: Videre relasjon",
        scenarios: ScenarioSet {
            easy: ScenarioDefinition {
                description: "Daglig leder Kari Johansen har allerede hatt et godt samarbeid med jobbkonsulenten og ønsker å holde relasjonen varm, også når det ikke er umiddelbart behov for flere ansatte. Jobbkonsulenten kommer tilbake for å følge opp dialogen, oppsummere erfaringer og utforske hvordan samarbeidet kan gi verdi framover, for eksempel gjennom fleksibel ekstrahjelp, sesongarbeid eller tidlig varsling ved nye behov. Kari er positiv, bruker navnet sitt aktivt i relasjonen og foreslår selv videre dialog, som faste korte oppfølgingsmøter, og er fleksibel med å finne tidspunkt som passer begge.",
                short_description: "Du følger opp en eksisterende relasjon til Rema 1000 for å holde samarbeidet varmt og utforske videre muligheter.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
            moderate: ScenarioDefinition {
                description: "Daglig leder har vært nøktern til videre samarbeid fordi hun er usikker på framtidig bemanningsbehov og økonomi. Hun omtaler seg som daglig leder og oppgir navnet sitt (Kari Johansen) dersom jobbkonsulenten spør på en god måte. Hun er avventende til hyppige møter, men dersom jobbkonsulenten tydelig viser hvordan korte, målrettede oppfølgingsmøter kan gjøre det enklere å reagere raskt når behov oppstår, og hvordan det kan spare tid på sikt, vil hun være villig til å planlegge jevnlig, men slank oppfølging og være med på å finne passende tidspunkt.",
                short_description: "Du forsøker å etablere en videre samarbeidsrelasjon med daglig leder selv om hun er usikker på framtidig bemanningsbehov.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
            difficult: ScenarioDefinition {
                description: "Et tidligere samarbeid har vært krevende, og daglig leder opplever at relasjonen til tiltaksarrangør er anstrengt. Hun oppgir ikke navnet sitt spontant og uttrykker tvil om det er hensiktsmessig å fortsette samarbeidet. Jobbkonsulenten må bruke teknikkene svært godt – utforske hennes opplevelse av samarbeidet, anerkjenne kritikk, og komme med konkrete forslag til justeringer i kommunikasjon, oppfølging og forventningsavklaringer. Ved svært god tilnærming kan hun både oppgi navnet sitt (Kari Johansen) og gå med på et kort, målrettet møte for å «nullstille» samarbeidet og avtale nye rammer, og hun vil da være med på å finne et konkret tidspunkt.",
                short_description: "Du prøver å reparere og videreutvikle relasjonen til Rema 1000 etter et samarbeid som har vært krevende.",
                manager_name: "Kari Johansen",
                employer_profile: None,
                job_seeker_profile: None,
            },
        },
    },
];

/// Looks up the scenario for a (phase, difficulty) pair. `None` only for
/// unknown phase ids; every known phase covers all three difficulties.
pub fn scenario(phase_id: &str, difficulty: Difficulty) -> Option<&'static ScenarioDefinition> {
    SCENARIO_PHASES
        .iter()
        .find(|p| p.id == phase_id)
        .map(|p| p.scenarios.get(difficulty))
}
