use once_cell::sync::Lazy;
use regex::Regex;

use super::categories::PhraseCategory;

/**
 * Fixed Spanish pattern lists. Every list is evaluated top to bottom and the first match wins,
 * so the order of entries (and of the category rules) is part of the scoring behaviour.
 */

pub const COMMON_EXPRESSION_PATTERNS: &[&str] = &[
    // preferences
    r"(?i)\bme gustan?\b",
    r"(?i)\bte gustan?\b",
    r"(?i)\bme encantan?\b",
    r"(?i)\bprefiero\b",
    r"(?i)\bquiero que\b",
    r"(?i)\bte quiero\b",
    r"(?i)\bte amo\b",
    // politeness
    r"(?i)\bpor favor\b",
    r"(?i)\bgracias\b",
    r"(?i)\bde nada\b",
    r"(?i)\blo siento\b",
    r"(?i)\bperd[oó]n(?:ame)?\b",
    r"(?i)\bcon permiso\b",
    // agreement
    r"(?i)\bclaro(?: que sí)?\b",
    r"(?i)\bde acuerdo\b",
    r"(?i)\bvale\b",
    r"(?i)\bestá bien\b",
    r"(?i)\btienes razón\b",
    r"(?i)\bpor supuesto\b",
    // uncertainty
    r"(?i)\bno sé\b",
    r"(?i)\bquizás?\b",
    r"(?i)\btal vez\b",
    r"(?i)\ba lo mejor\b",
    r"(?i)\bcreo que\b",
    r"(?i)\bno importa\b",
    r"(?i)\bojalá\b",
    // time expressions
    r"(?i)\btodo el tiempo\b",
    r"(?i)\bcada día\b",
    r"(?i)\btodos los días\b",
    r"(?i)\bpor la (?:mañana|tarde|noche)\b",
    r"(?i)\bde vez en cuando\b",
    r"(?i)\bal final\b",
    r"(?i)\botra vez\b",
    r"(?i)\btodavía no\b",
    r"(?i)\bya no\b",
    // basic questions
    r"(?i)\b(?:qué|cómo|dónde|cuándo|por qué|quién)\b.*\?",
    r"(?i)\bcómo estás\b",
    r"(?i)\bqué pasa\b",
    r"(?i)\bqué hora es\b",
    r"(?i)\bcuánto cuesta\b",
    r"(?i)\bme llamo\b",
    // common verb forms
    r"(?i)\btengo que\b",
    r"(?i)\bhay que\b",
    r"(?i)\bvoy a\b",
    r"(?i)\bvamos a\b",
    r"(?i)\bacabo de\b",
    r"(?i)\bpuedo\b",
    r"(?i)\bnecesito\b",
    r"(?i)\bestoy\b",
    r"(?i)\btengo\b",
    r"(?i)\bsin embargo\b",
];

/// Lines that are filler rather than language: chanted syllables, bare interjections, English pet names.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    r"(?i)\b(?:la|na|da|ra|pa|ta)(?:[\s,\-]+(?:la|na|da|ra|pa|ta)){2,}\b",
    r"(?i)^[\s¡!¿?,.]*(?:oh|ah|eh|uh|ay|uy|ey|hey|wo+h?|uo+h?|yeah|yeh|mm+|hm+)(?:[\s¡!¿?,.\-]+(?:oh|ah|eh|uh|ay|uy|ey|hey|wo+h?|uo+h?|yeah|yeh|mm+|hm+))*[\s¡!¿?,.]*$",
    r"(?i)\b(?:oh|ah|eh|uh|ay|uoh|woh|yeah)(?:[\s,!¡]+(?:oh|ah|eh|uh|ay|uoh|woh|yeah)){2,}\b",
    r"(?i)\b(?:la){3,}\b",
    r"(?i)\b(?:na){3,}\b",
    r"(?i)\b(?:tra)+la+\b",
    r"(?i)\b(?:tururú|dubidú|shubidú|lerele|pa+ra+pa+)\b",
    r"(?i)\b(?:baby|babe|honey|sweetie|darling|sugar|boo)\b",
];

pub const GREETING_PATTERNS: &[&str] = &[
    r"(?i)^hola\b",
    r"(?i)^buen(?:os|as)\s+(?:días|tardes|noches)\b",
    r"(?i)^buen día\b",
    r"(?i)^¿?qué tal\b",
    r"(?i)^adiós\b",
    r"(?i)^hasta (?:luego|pronto|mañana|la vista)\b",
    r"(?i)^nos vemos\b",
    r"(?i)^bienvenid[oa]s?\b",
    r"(?i)^mucho gusto\b",
    r"(?i)^encantad[oa]\b",
    r"(?i)^chao\b",
];

pub const QUESTION_PATTERNS: &[&str] = &[
    r"¿",
    r"¡",
    r"(?i)^(?:qué|cómo|dónde|cuándo|cuál|cuáles|quién|quiénes|por qué|cuánto|cuánta|cuántos|cuántas)\b",
    r"\?\s*$",
];

pub const TIME_PATTERN: &str = r"(?i)\b(?:hoy|mañana|ayer|ahora|siempre|nunca|tarde|temprano|noche|noches|día|días|semana|mes|año|años|hora|horas|minuto|momento|luego|después|antes|todavía|pronto)\b";

pub const EMOTION_PATTERN: &str = r"(?i)\b(?:amor|amo|quiero|feliz|triste|miedo|dolor|corazón|llorar|lloro|alegría|tristeza|extraño|siento|sentir|odio|pasión|celos|soledad|besos?|enamorad[oa])\b";

pub const CONNECTOR_PATTERN: &str = r"(?i)^(?:pero|y|o|porque|aunque|entonces|además|sin embargo|mientras|pues|así que|cuando|si|ni)\b";

pub const ACTION_PATTERN: &str = r"(?i)\b(?:vamos|voy|vas|va|ven|mira|dime|dame|baila|bailar|canta|cantar|come|comer|bebe|beber|corre|correr|camina|caminar|habla|hablar|escucha|escuchar|toma|tomar|abre|cierra|sal|salir|entra|juega|jugar|busca|buscar)\b";

/// A compiled, ordered list of patterns.
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub fn new(sources: &[&str]) -> Result<Self, regex::Error> {
        let patterns = sources.iter().map(|source| Regex::new(source)).collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    /// Index of the first pattern that matches.
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.patterns.iter().position(|re| re.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

pub struct CategoryRule {
    pub category: PhraseCategory,
    pub patterns: PatternSet,
}

fn compile(sources: &[&str]) -> PatternSet {
    // Sources are compile-time constants; a bad one is caught by the tests below.
    PatternSet::new(sources).unwrap()
}

pub static COMMON_EXPRESSIONS: Lazy<PatternSet> = Lazy::new(|| compile(COMMON_EXPRESSION_PATTERNS));
pub static EXCLUSIONS: Lazy<PatternSet> = Lazy::new(|| compile(EXCLUDE_PATTERNS));
pub static GREETINGS: Lazy<PatternSet> = Lazy::new(|| compile(GREETING_PATTERNS));
pub static QUESTIONS: Lazy<PatternSet> = Lazy::new(|| compile(QUESTION_PATTERNS));

/// Category checks in priority order. `expressions` and `vocabulary` are decided after these.
pub static CATEGORY_RULES: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    vec![
        CategoryRule { category: PhraseCategory::Greetings, patterns: compile(GREETING_PATTERNS) },
        CategoryRule { category: PhraseCategory::Questions, patterns: compile(QUESTION_PATTERNS) },
        CategoryRule { category: PhraseCategory::Time, patterns: compile(&[TIME_PATTERN]) },
        CategoryRule { category: PhraseCategory::Emotions, patterns: compile(&[EMOTION_PATTERN]) },
        CategoryRule {
            category: PhraseCategory::Connectors,
            patterns: compile(&[CONNECTOR_PATTERN]),
        },
        CategoryRule { category: PhraseCategory::Actions, patterns: compile(&[ACTION_PATTERN]) },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(COMMON_EXPRESSIONS.len(), COMMON_EXPRESSION_PATTERNS.len());
        assert!(COMMON_EXPRESSIONS.len() >= 50);
        assert_eq!(EXCLUSIONS.len(), EXCLUDE_PATTERNS.len());
        assert_eq!(GREETINGS.len(), GREETING_PATTERNS.len());
        assert_eq!(QUESTIONS.len(), QUESTION_PATTERNS.len());
        assert_eq!(CATEGORY_RULES.len(), 6);
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        assert!(PatternSet::new(&[r"(?i)\bhola\b", r"(sin cerrar"]).is_err());
        assert!(PatternSet::new(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_category_rule_order() {
        let order: Vec<PhraseCategory> = CATEGORY_RULES.iter().map(|rule| rule.category).collect();
        assert_eq!(
            order,
            vec![
                PhraseCategory::Greetings,
                PhraseCategory::Questions,
                PhraseCategory::Time,
                PhraseCategory::Emotions,
                PhraseCategory::Connectors,
                PhraseCategory::Actions,
            ]
        );
    }

    #[test]
    fn test_common_expressions() {
        assert!(COMMON_EXPRESSIONS.is_match("Me gusta la playa"));
        assert!(COMMON_EXPRESSIONS.is_match("No sé qué hacer"));
        assert!(COMMON_EXPRESSIONS.is_match("¿Cómo estás?"));
        assert!(COMMON_EXPRESSIONS.is_match("Voy a bailar contigo"));
        assert!(!COMMON_EXPRESSIONS.is_match("La luna brilla sobre el mar"));
        assert_eq!(COMMON_EXPRESSIONS.first_match("me gusta"), Some(0));
    }

    #[test]
    fn test_exclusions() {
        assert!(EXCLUSIONS.is_match("la la la la"));
        assert!(EXCLUSIONS.is_match("Na, na, na"));
        assert!(EXCLUSIONS.is_match("oh oh oh"));
        assert!(EXCLUSIONS.is_match("¡Oh!"));
        assert!(EXCLUSIONS.is_match("lalala"));
        assert!(EXCLUSIONS.is_match("Baby, te quiero"));
        assert!(!EXCLUSIONS.is_match("La casa de la playa"));
        assert!(!EXCLUSIONS.is_match("Ahora entiendo todo"));
    }

    #[test]
    fn test_greetings_anchor_at_start() {
        assert!(GREETINGS.is_match("Hola, ¿cómo estás?"));
        assert!(GREETINGS.is_match("Buenas noches, mi amor"));
        assert!(!GREETINGS.is_match("Te digo hola"));
        assert!(!GREETINGS.is_match("Holanda es bonita"));
    }

    #[test]
    fn test_questions() {
        assert!(QUESTIONS.is_match("¿Dónde estás?"));
        assert!(QUESTIONS.is_match("¡Vámonos!"));
        assert!(QUESTIONS.is_match("Quién sabe"));
        assert!(QUESTIONS.is_match("me quieres?"));
        assert!(!QUESTIONS.is_match("Te quiero."));
    }
}
