use serde::{
    Deserialize,
    Deserializer,
};

/// Lowercase + trim, the key form used by every lookup.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Unicode flavour of the regex `\w` class.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// ¡Hola! -> Hola, «amor», -> amor
pub fn strip_edge_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !is_word_char(c))
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Song ids arrive as strings from some exports and as numbers from others.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().to_string(),
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}
