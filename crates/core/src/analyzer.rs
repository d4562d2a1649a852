use unicode_segmentation::UnicodeSegmentation;

use crate::error::ValidationError;
use crate::models::{DreamAnalysis, DreamSymbol, DreamType};
use crate::religion::extract_religious_interpretations;
use crate::rules::{
    dream_type_paragraph, DEFAULT_EMOTIONS, DREAM_TYPE_RULES, EMOTION_FALLBACKS, EMOTION_TABLE,
    FALLBACK_SYMBOL, FALLBACK_SYMBOL_MEANING, INTERPRETATION_PREAMBLE,
    INTERPRETATION_SUPPLEMENTS, SYMBOL_TABLE,
};

pub const MIN_DREAM_CHARS: usize = 20;

/// Rejects absent text and text shorter than [`MIN_DREAM_CHARS`] once trimmed.
pub fn validate_dream_text(text: Option<&str>) -> Result<&str, ValidationError> {
    let text = text.ok_or(ValidationError::Missing)?;
    let actual = text.trim().graphemes(true).count();

    if actual < MIN_DREAM_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_DREAM_CHARS,
            actual,
        });
    }

    Ok(text)
}

pub fn analyze_dream(text: &str) -> Result<DreamAnalysis, ValidationError> {
    let text = validate_dream_text(Some(text))?;
    Ok(classify_validated(text))
}

/// Runs every extraction step. Callers must have validated `text` first.
pub fn classify_validated(text: &str) -> DreamAnalysis {
    let lower = text.to_lowercase();

    let dream_type = classify_dream_type(&lower);
    let symbols = extract_symbols(&lower);
    let emotions = extract_emotions(&lower);
    let religious_interpretations = extract_religious_interpretations(&lower, &symbols);

    DreamAnalysis {
        interpretation: compose_interpretation(&lower, dream_type),
        dream_type,
        symbols,
        emotions,
        religious_interpretations,
    }
}

pub fn classify_dream_type(lower: &str) -> DreamType {
    DREAM_TYPE_RULES
        .iter()
        .find(|rule| contains_any(lower, rule.keywords))
        .map(|rule| rule.dream_type)
        .unwrap_or_default()
}

pub fn compose_interpretation(lower: &str, dream_type: DreamType) -> String {
    let mut text = String::from(INTERPRETATION_PREAMBLE);
    text.push_str(dream_type_paragraph(dream_type));

    for supplement in INTERPRETATION_SUPPLEMENTS {
        if contains_any(lower, supplement.keywords) {
            text.push_str(supplement.sentence);
        }
    }

    text
}

pub fn extract_symbols(lower: &str) -> Vec<DreamSymbol> {
    let symbols = SYMBOL_TABLE
        .iter()
        .filter(|rule| lower.contains(rule.keyword))
        .map(|rule| DreamSymbol::new(rule.symbol, rule.meaning))
        .collect::<Vec<_>>();

    if symbols.is_empty() {
        return vec![DreamSymbol::new(FALLBACK_SYMBOL, FALLBACK_SYMBOL_MEANING)];
    }

    symbols
}

pub fn extract_emotions(lower: &str) -> Vec<String> {
    let emotions = EMOTION_TABLE
        .iter()
        .filter(|rule| contains_any(lower, rule.keywords))
        .map(|rule| rule.emotion.to_string())
        .collect::<Vec<_>>();

    if !emotions.is_empty() {
        return emotions;
    }

    EMOTION_FALLBACKS
        .iter()
        .find(|fallback| contains_any(lower, fallback.keywords))
        .map(|fallback| fallback.emotions)
        .unwrap_or(DEFAULT_EMOTIONS)
        .iter()
        .map(|emotion| emotion.to_string())
        .collect()
}

/// True when the analysis carries the synthetic "Dream Setting" symbol.
pub fn used_symbol_fallback(analysis: &DreamAnalysis) -> bool {
    matches!(analysis.symbols.as_slice(), [only] if only.symbol == FALLBACK_SYMBOL)
}

pub(crate) fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
