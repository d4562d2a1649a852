use crate::analyzer::contains_any;
use crate::models::{DreamSymbol, ReligiousInterpretation};
use crate::rules::{ReligiousTradition, RELIGIOUS_TRADITIONS};

/// One entry per tradition, always Islamic, Hindu, Christian.
pub fn extract_religious_interpretations(
    lower: &str,
    symbols: &[DreamSymbol],
) -> Vec<ReligiousInterpretation> {
    RELIGIOUS_TRADITIONS
        .iter()
        .map(|tradition| interpret_for(tradition, lower, symbols))
        .collect()
}

fn interpret_for(
    tradition: &ReligiousTradition,
    lower: &str,
    symbols: &[DreamSymbol],
) -> ReligiousInterpretation {
    let (interpretation, key_symbols) = match tradition
        .rules
        .iter()
        .find(|rule| contains_any(lower, rule.keywords))
    {
        Some(rule) => (rule.interpretation, vec![rule.key_symbol.to_string()]),
        None => (
            tradition.fallback,
            borrowed_symbol(symbols, tradition.borrowed_symbol_index)
                .into_iter()
                .collect(),
        ),
    };

    ReligiousInterpretation {
        religion: tradition.religion,
        interpretation: interpretation.to_string(),
        key_symbols,
        icon: tradition.religion.icon().to_string(),
    }
}

fn borrowed_symbol(symbols: &[DreamSymbol], index: usize) -> Option<String> {
    symbols
        .get(index)
        .or_else(|| symbols.first())
        .map(|symbol| symbol.symbol.clone())
}
