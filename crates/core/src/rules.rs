//! Keyword tables for the dream classifier. Order is significant everywhere: dream-type groups
//! are first-match-wins, symbol and emotion tables accumulate in table order.

use crate::models::{DreamType, Religion};

pub struct DreamTypeRule {
    pub dream_type: DreamType,
    pub keywords: &'static [&'static str],
}

pub const DREAM_TYPE_RULES: &[DreamTypeRule] = &[
    DreamTypeRule {
        dream_type: DreamType::Fear,
        keywords: &["afraid", "scared", "terror", "fear"],
    },
    DreamTypeRule {
        dream_type: DreamType::Wish,
        keywords: &["wish", "hope", "desire", "want"],
    },
    DreamTypeRule {
        dream_type: DreamType::Nightmare,
        keywords: &["chase", "fall", "attack", "die"],
    },
    DreamTypeRule {
        dream_type: DreamType::Lucid,
        keywords: &["control", "aware", "conscious", "realize"],
    },
    DreamTypeRule {
        dream_type: DreamType::Recurring,
        keywords: &["again", "repeat", "same", "always"],
    },
    DreamTypeRule {
        dream_type: DreamType::Prophetic,
        keywords: &["future", "predict", "foresee", "vision"],
    },
];

pub const INTERPRETATION_PREAMBLE: &str =
    "Your dream appears to reflect your current state of mind and recent experiences. ";

pub fn dream_type_paragraph(dream_type: DreamType) -> &'static str {
    match dream_type {
        DreamType::Fear => "This fear-based dream suggests you may be experiencing anxiety or worry in your waking life. Consider what specific fears were represented and how they might relate to current challenges you're facing.",
        DreamType::Wish => "This dream represents your deepest desires and hopes. The symbols and scenarios point to what you truly want to achieve or experience in your life.",
        DreamType::Nightmare => "This nightmare may be your mind processing difficult emotions or situations. Pay attention to what specifically frightened you as it could reveal underlying concerns.",
        DreamType::Lucid => "Being aware within your dream demonstrates a connection between your conscious and subconscious mind. This awareness can be developed further through practice.",
        DreamType::Recurring => "The repetitive nature of this dream suggests an unresolved issue or emotion that your mind keeps returning to. Consider what message your subconscious is trying to emphasize.",
        DreamType::Prophetic => "While this dream has elements that feel predictive, remember that dreams often reflect our intuition and pattern recognition rather than literal future events.",
        DreamType::Processing => "This processing dream is helping your mind sort through recent experiences and emotions. The various elements represent different aspects of your thoughts and feelings.",
    }
}

pub struct SupplementRule {
    pub keywords: &'static [&'static str],
    pub sentence: &'static str,
}

pub const INTERPRETATION_SUPPLEMENTS: &[SupplementRule] = &[
    SupplementRule {
        keywords: &["water"],
        sentence: " The presence of water often symbolizes emotions and the subconscious mind. How the water appeared and behaved can provide insight into your emotional state.",
    },
    SupplementRule {
        keywords: &["fly"],
        sentence: " Flying in dreams often represents freedom, transcending limitations, or gaining a new perspective on situations in your life.",
    },
    SupplementRule {
        keywords: &["lost", "find"],
        sentence: " Feelings of being lost or searching for something reflect your journey of self-discovery or a current life question you're trying to answer.",
    },
];

pub struct SymbolRule {
    pub keyword: &'static str,
    pub symbol: &'static str,
    pub meaning: &'static str,
}

pub const SYMBOL_TABLE: &[SymbolRule] = &[
    SymbolRule { keyword: "water", symbol: "Water", meaning: "Emotions, subconscious, purification" },
    SymbolRule { keyword: "fall", symbol: "Falling", meaning: "Insecurity, anxiety, loss of control" },
    SymbolRule { keyword: "fly", symbol: "Flying", meaning: "Freedom, transcendence, new perspective" },
    SymbolRule { keyword: "house", symbol: "House", meaning: "Self, identity, personal space" },
    SymbolRule { keyword: "door", symbol: "Door", meaning: "Opportunities, transitions, choices" },
    SymbolRule { keyword: "teeth", symbol: "Teeth", meaning: "Power, confidence, communication" },
    SymbolRule { keyword: "snake", symbol: "Snake", meaning: "Transformation, healing, hidden fears" },
    SymbolRule { keyword: "car", symbol: "Vehicle", meaning: "Direction in life, personal journey" },
    SymbolRule { keyword: "school", symbol: "School", meaning: "Learning, evaluation, social pressure" },
    SymbolRule { keyword: "naked", symbol: "Nakedness", meaning: "Vulnerability, authenticity, fear of exposure" },
    SymbolRule { keyword: "chase", symbol: "Being Chased", meaning: "Avoidance, anxiety, unresolved issues" },
    SymbolRule { keyword: "baby", symbol: "Baby", meaning: "New beginnings, vulnerability, potential" },
    SymbolRule { keyword: "death", symbol: "Death", meaning: "Endings, transformation, change" },
    SymbolRule { keyword: "money", symbol: "Money", meaning: "Self-worth, power, values" },
    SymbolRule { keyword: "mirror", symbol: "Mirror", meaning: "Self-reflection, identity, truth" },
    SymbolRule { keyword: "ocean", symbol: "Ocean", meaning: "Vast emotions, unconscious mind, mother figure" },
    SymbolRule { keyword: "bridge", symbol: "Bridge", meaning: "Transition, connection, overcoming obstacles" },
    SymbolRule { keyword: "forest", symbol: "Forest", meaning: "Unknown, unconscious, mystery" },
    SymbolRule { keyword: "mountain", symbol: "Mountain", meaning: "Challenge, achievement, perspective" },
    SymbolRule { keyword: "bird", symbol: "Bird", meaning: "Freedom, aspiration, spiritual nature" },
];

pub const FALLBACK_SYMBOL: &str = "Dream Setting";
pub const FALLBACK_SYMBOL_MEANING: &str =
    "Your dream environment represents your mental state and emotional context";

pub struct EmotionRule {
    pub keywords: &'static [&'static str],
    pub emotion: &'static str,
}

// Stems on purpose: "excite" catches excited/exciting, "confus" confused/confusion.
pub const EMOTION_TABLE: &[EmotionRule] = &[
    EmotionRule { keywords: &["happy"], emotion: "Joy" },
    EmotionRule { keywords: &["sad"], emotion: "Sadness" },
    EmotionRule { keywords: &["angry"], emotion: "Anger" },
    EmotionRule { keywords: &["afraid", "fear"], emotion: "Fear" },
    EmotionRule { keywords: &["worry"], emotion: "Anxiety" },
    EmotionRule { keywords: &["excite"], emotion: "Excitement" },
    EmotionRule { keywords: &["peaceful"], emotion: "Peace" },
    EmotionRule { keywords: &["love"], emotion: "Love" },
    EmotionRule { keywords: &["confus"], emotion: "Confusion" },
    EmotionRule { keywords: &["frustrat"], emotion: "Frustration" },
    EmotionRule { keywords: &["shame"], emotion: "Shame" },
    EmotionRule { keywords: &["embarrass"], emotion: "Embarrassment" },
    EmotionRule { keywords: &["hope"], emotion: "Hope" },
    EmotionRule { keywords: &["disappoint"], emotion: "Disappointment" },
    EmotionRule { keywords: &["content"], emotion: "Contentment" },
];

pub struct EmotionFallback {
    pub keywords: &'static [&'static str],
    pub emotions: &'static [&'static str],
}

/// Consulted only when the emotion table produced nothing. The last entry always applies.
pub const EMOTION_FALLBACKS: &[EmotionFallback] = &[
    EmotionFallback { keywords: &["chase", "fall"], emotions: &["Anxiety", "Tension"] },
    EmotionFallback { keywords: &["lost"], emotions: &["Confusion", "Uncertainty"] },
    EmotionFallback { keywords: &["find", "discover"], emotions: &["Curiosity", "Wonder"] },
];

pub const DEFAULT_EMOTIONS: &[&str] = &["Mixed emotions"];

pub struct ReligiousRule {
    pub keywords: &'static [&'static str],
    pub interpretation: &'static str,
    pub key_symbol: &'static str,
}

pub struct ReligiousTradition {
    pub religion: Religion,
    pub rules: &'static [ReligiousRule],
    pub fallback: &'static str,
    /// Index into the extracted symbols borrowed by the fallback; index 0 when out of range.
    pub borrowed_symbol_index: usize,
}

pub const RELIGIOUS_TRADITIONS: &[ReligiousTradition] = &[
    ReligiousTradition {
        religion: Religion::Islamic,
        rules: &[
            ReligiousRule {
                keywords: &["water", "river"],
                interpretation: "In Islamic dream interpretation, clear water is a sign of knowledge, purity and the mercy of Allah reaching the dreamer. Troubled water can point to trials that patience will overcome.",
                key_symbol: "Water",
            },
            ReligiousRule {
                keywords: &["snake", "serpent"],
                interpretation: "Islamic scholars read a snake as a sign of an enemy or a hidden rival. Overcoming the snake in the dream suggests protection and victory over harm.",
                key_symbol: "Snake",
            },
            ReligiousRule {
                keywords: &["fly", "bird"],
                interpretation: "Flying or birds in Islamic interpretation may signify travel, elevated status or a soul rising toward its Lord, provided the dreamer remains humble.",
                key_symbol: "Flight",
            },
        ],
        fallback: "Islamic tradition distinguishes true dreams (ru'ya) from ordinary ones. Reflect on this dream with prayer and share it only with those who wish you well.",
        borrowed_symbol_index: 0,
    },
    ReligiousTradition {
        religion: Religion::Hindu,
        rules: &[
            ReligiousRule {
                keywords: &["snake", "serpent"],
                interpretation: "In Hindu thought the serpent recalls the Nagas and the awakening of kundalini energy. Such a dream may announce spiritual growth or the blessing of fertility.",
                key_symbol: "Naga",
            },
            ReligiousRule {
                keywords: &["water", "ocean", "river"],
                interpretation: "Water in Hindu tradition is purifying, like the sacred Ganga. Dreaming of it may indicate cleansing of past karma and emotional renewal.",
                key_symbol: "Sacred Water",
            },
            ReligiousRule {
                keywords: &["death", "die"],
                interpretation: "Hindu philosophy sees death as a passage within samsara. Dreaming of it often marks the end of one phase of life and the rebirth of another.",
                key_symbol: "Rebirth",
            },
        ],
        fallback: "Hindu texts describe dreaming (svapna) as a state where the mind works through its impressions. This dream may reflect karma unfolding and invites calm self-inquiry.",
        borrowed_symbol_index: 1,
    },
    ReligiousTradition {
        religion: Religion::Christian,
        rules: &[
            ReligiousRule {
                keywords: &["heaven", "angel"],
                interpretation: "In Christian tradition heaven and angels speak of God's presence and guidance. The dream may be an encouragement to trust and follow that guidance.",
                key_symbol: "Divine Light",
            },
            ReligiousRule {
                keywords: &["fall"],
                interpretation: "Christian readers may see falling as a reminder of human weakness and of the grace that lifts us up again. It invites humility rather than despair.",
                key_symbol: "Falling",
            },
            ReligiousRule {
                keywords: &["door", "gate"],
                interpretation: "Christ calls himself the door (John 10:9). A door in a dream can point to a new opportunity or calling that requires faith to step through.",
                key_symbol: "Door",
            },
        ],
        fallback: "Christian tradition encourages testing dreams with prayer and Scripture. Consider what this dream reveals about your heart and where it may be calling you to grow.",
        borrowed_symbol_index: 2,
    },
];
