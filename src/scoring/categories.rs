use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::LetrasError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Greetings,
    Questions,
    Expressions,
    Actions,
    Time,
    Emotions,
    Connectors,
    #[default]
    Vocabulary,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: PhraseCategory,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub order: u8,
}

/// Display metadata, in the order categories are listed to learners.
pub const PHRASE_CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: PhraseCategory::Greetings,
        display_name: "Greetings & Farewells",
        icon: "👋",
        order: 1,
    },
    CategoryInfo { id: PhraseCategory::Questions, display_name: "Questions", icon: "❓", order: 2 },
    CategoryInfo {
        id: PhraseCategory::Expressions,
        display_name: "Common Expressions",
        icon: "💬",
        order: 3,
    },
    CategoryInfo { id: PhraseCategory::Actions, display_name: "Actions", icon: "🏃", order: 4 },
    CategoryInfo { id: PhraseCategory::Time, display_name: "Time", icon: "⏰", order: 5 },
    CategoryInfo { id: PhraseCategory::Emotions, display_name: "Emotions", icon: "❤️", order: 6 },
    CategoryInfo { id: PhraseCategory::Connectors, display_name: "Connectors", icon: "🔗", order: 7 },
    CategoryInfo {
        id: PhraseCategory::Vocabulary,
        display_name: "Vocabulary",
        icon: "📚",
        order: 8,
    },
];

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 8] = [
        PhraseCategory::Greetings,
        PhraseCategory::Questions,
        PhraseCategory::Expressions,
        PhraseCategory::Actions,
        PhraseCategory::Time,
        PhraseCategory::Emotions,
        PhraseCategory::Connectors,
        PhraseCategory::Vocabulary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseCategory::Greetings => "greetings",
            PhraseCategory::Questions => "questions",
            PhraseCategory::Expressions => "expressions",
            PhraseCategory::Actions => "actions",
            PhraseCategory::Time => "time",
            PhraseCategory::Emotions => "emotions",
            PhraseCategory::Connectors => "connectors",
            PhraseCategory::Vocabulary => "vocabulary",
        }
    }

    pub fn info(&self) -> &'static CategoryInfo {
        PHRASE_CATEGORIES
            .iter()
            .find(|info| info.id == *self)
            .unwrap_or(&PHRASE_CATEGORIES[PHRASE_CATEGORIES.len() - 1])
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhraseCategory {
    type Err = LetrasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PhraseCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| LetrasError::Custom(format!("Unknown phrase category '{}'", s)))
    }
}
