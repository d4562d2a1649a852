use std::fmt::Write as _;

use somnia_core::{format_fee, ConsultationReceipt, DreamAnalysis, DreamMeaning};

pub fn analysis_report(analysis: &DreamAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Dream Analysis [{}]", analysis.dream_type);
    let _ = writeln!(out, "\nInterpretation\n  {}", analysis.interpretation);
    let _ = writeln!(out, "\nEmotions Detected\n  {}", analysis.emotions.join(", "));

    let _ = writeln!(out, "\nDream Symbols");
    for symbol in &analysis.symbols {
        let _ = writeln!(out, "  - {}: {}", symbol.symbol, symbol.meaning);
    }

    let _ = writeln!(out, "\nReligious Perspectives");
    for entry in &analysis.religious_interpretations {
        let key = if entry.key_symbols.is_empty() {
            String::new()
        } else {
            format!(" (key symbol: {})", entry.key_symbols.join(", "))
        };
        let _ = writeln!(
            out,
            "  [{}] {}{}\n    {}",
            entry.icon, entry.religion, key, entry.interpretation
        );
    }

    out
}

pub fn meanings_report(entries: &[&DreamMeaning]) -> String {
    if entries.is_empty() {
        return "No dreams found matching your criteria. Try adjusting your search.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{} [{}]\n  {}\n", entry.symbol, entry.category, entry.meaning);
    }
    out
}

pub fn receipt_report(receipt: &ConsultationReceipt) -> String {
    format!(
        "Consultation requested for {}.\n  Reference: {}\n  Preferred time: {}\n  Fee: {} {}\n  Expect a response {}.\n",
        receipt.client_name,
        receipt.reference,
        receipt.preferred_time,
        format_fee(receipt.fee_cents),
        receipt.currency,
        receipt.response_window,
    )
}
