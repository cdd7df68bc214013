use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Articles, pronouns, prepositions and connectors that are never taught as vocabulary.
pub const SPANISH_STOPWORDS: &[&str] = &[
    // articles and contractions
    "el", "la", "los", "las", "un", "una", "unos", "unas", "lo", "al", "del",
    // prepositions
    "a", "de", "en", "con", "por", "para", "sin", "sobre", "entre", "hasta", "desde", "hacia",
    "contra", "según", "tras",
    // connectors
    "y", "e", "o", "u", "ni", "que", "pero", "mas", "sino", "si", "como", "cuando", "donde",
    "porque", "pues", "aunque",
    // personal pronouns
    "yo", "tú", "tu", "él", "ella", "ello", "nosotros", "nosotras", "vosotros", "vosotras",
    "ellos", "ellas", "usted", "ustedes", "me", "te", "se", "nos", "os", "le", "les",
    // possessives
    "mi", "mis", "tus", "su", "sus", "nuestro", "nuestra", "nuestros", "nuestras", "vuestro",
    "vuestra",
    // demonstratives
    "este", "esta", "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella", "esto",
    "eso", "aquello",
    // particles and quantifiers
    "no", "sí", "ya", "muy", "más", "menos", "también", "tan", "todo", "toda", "todos", "todas",
    // interrogatives
    "qué", "cómo", "cuál", "quién", "dónde",
];

/// High-frequency infinitives every learner meets on day one.
pub const BASIC_VERB_INFINITIVES: &[&str] = &[
    "ser", "estar", "tener", "haber", "hacer", "ir", "poder", "decir", "dar", "ver", "saber",
    "querer", "llegar", "pasar", "deber", "poner", "parecer", "quedar", "creer", "hablar",
    "llevar", "dejar", "seguir", "encontrar", "llamar", "venir", "pensar", "salir", "volver",
    "tomar", "conocer", "vivir", "sentir",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SPANISH_STOPWORDS.iter().copied().collect());

static BASIC_VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| BASIC_VERB_INFINITIVES.iter().copied().collect());

/// Expects an already normalized word.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Expects an already normalized word.
pub fn is_basic_verb(word: &str) -> bool {
    BASIC_VERB_SET.contains(word)
}
