use crate::models::{CatalogCategory, DreamMeaning};

const DREAM_MEANINGS: &[DreamMeaning] = &[
    DreamMeaning {
        id: 1,
        symbol: "Falling",
        category: CatalogCategory::Nightmare,
        meaning: "Dreams about falling often indicate a lack of control or fear of failure in some aspect of your life. You may feel overwhelmed or that a situation is slipping away from you.",
    },
    DreamMeaning {
        id: 2,
        symbol: "Flying",
        category: CatalogCategory::WishfulDream,
        meaning: "Flying in dreams typically represents freedom, breaking free from limitations, or gaining a new perspective on situations in your life.",
    },
    DreamMeaning {
        id: 3,
        symbol: "Being Chased",
        category: CatalogCategory::AnxietyDream,
        meaning: "Being chased in a dream often symbolizes avoidance. You may be running from an issue, person, or emotion in your waking life rather than confronting it.",
    },
    DreamMeaning {
        id: 4,
        symbol: "Teeth Falling Out",
        category: CatalogCategory::AnxietyDream,
        meaning: "Dreams about losing teeth commonly relate to concerns about appearance, communication issues, or fear of embarrassment in social situations.",
    },
    DreamMeaning {
        id: 5,
        symbol: "Taking a Test",
        category: CatalogCategory::AnxietyDream,
        meaning: "Test dreams usually occur when you feel you're being evaluated or are unprepared for a challenge in your waking life.",
    },
    DreamMeaning {
        id: 6,
        symbol: "Meeting a Celebrity",
        category: CatalogCategory::WishfulDream,
        meaning: "Celebrity dreams can represent qualities you admire or wish to embody, or they might reflect your desire for recognition and admiration.",
    },
];

pub fn dream_meanings() -> &'static [DreamMeaning] {
    DREAM_MEANINGS
}

/// Case-insensitive match on symbol or meaning, narrowed by category when one is given.
pub fn search_meanings(query: &str, category: Option<CatalogCategory>) -> Vec<&'static DreamMeaning> {
    let query = query.trim().to_lowercase();

    DREAM_MEANINGS
        .iter()
        .filter(|entry| category.is_none_or(|wanted| entry.category == wanted))
        .filter(|entry| {
            entry.symbol.to_lowercase().contains(&query)
                || entry.meaning.to_lowercase().contains(&query)
        })
        .collect()
}
