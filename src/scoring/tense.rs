use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::LetrasError;

/// Tense hints attached to a lyric line by the conjugation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbTense {
    Present,
    Infinitive,
    Gerund,
    Imperative,
    Preterite,
    PresentPerfect,
    Future,
    Imperfect,
    Conditional,
    Pluperfect,
    PresentSubjunctive,
    ImperfectSubjunctive,
}

impl VerbTense {
    /// How approachable the tense is for a beginner, 1.0 being the easiest.
    pub fn simplicity(&self) -> f64 {
        match self {
            VerbTense::Present | VerbTense::Infinitive => 1.0,
            VerbTense::Gerund => 0.9,
            VerbTense::Imperative => 0.8,
            VerbTense::Preterite | VerbTense::PresentPerfect => 0.7,
            VerbTense::Future => 0.65,
            VerbTense::Imperfect => 0.6,
            VerbTense::Conditional => 0.5,
            VerbTense::Pluperfect => 0.4,
            VerbTense::PresentSubjunctive => 0.3,
            VerbTense::ImperfectSubjunctive => 0.2,
        }
    }

    /// Parse a list of identifiers, silently dropping the ones we don't know.
    pub fn parse_all<S: AsRef<str>>(ids: &[S]) -> Vec<VerbTense> {
        ids.iter().filter_map(|id| id.as_ref().parse().ok()).collect()
    }
}

impl FromStr for VerbTense {
    type Err = LetrasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase().replace(['-', ' '], "_");
        let tense = match id.as_str() {
            "present" | "presente" => VerbTense::Present,
            "infinitive" | "infinitivo" => VerbTense::Infinitive,
            "gerund" | "gerundio" => VerbTense::Gerund,
            "imperative" | "imperativo" => VerbTense::Imperative,
            "preterite" | "preterito" | "pretérito" => VerbTense::Preterite,
            "present_perfect" => VerbTense::PresentPerfect,
            "future" | "futuro" => VerbTense::Future,
            "imperfect" | "imperfecto" => VerbTense::Imperfect,
            "conditional" | "condicional" => VerbTense::Conditional,
            "pluperfect" => VerbTense::Pluperfect,
            "present_subjunctive" | "subjunctive" => VerbTense::PresentSubjunctive,
            "imperfect_subjunctive" => VerbTense::ImperfectSubjunctive,
            _ => return Err(LetrasError::Custom(format!("Unknown verb tense '{}'", s))),
        };
        Ok(tense)
    }
}
