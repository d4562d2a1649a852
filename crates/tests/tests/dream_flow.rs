use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use somnia_agents::{AgentConfig, DreamAgent};
use somnia_core::{
    CatalogCategory, ConsultationRequest, DreamRequest, DreamType, Religion, ValidationError,
};
use somnia_observability::AppMetrics;

fn agent() -> DreamAgent {
    DreamAgent::with_keyword_rules(AgentConfig::without_delays(), AppMetrics::shared())
}

fn symbol_names(value: &Value) -> Vec<String> {
    value["symbols"]
        .as_array()
        .map(|symbols| {
            symbols
                .iter()
                .filter_map(|symbol| symbol["symbol"].as_str().map(ToString::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn chase_dream_is_a_fear_dream() -> Result<()> {
    let analysis = agent()
        .interpret(DreamRequest::new(
            "I was being chased through a dark forest by something terrifying, full of fear",
        ))
        .await?;

    assert_eq!(analysis.dream_type, DreamType::Fear);
    assert!(analysis.symbols.iter().any(|symbol| symbol.symbol == "Forest"));
    assert!(analysis.emotions.iter().any(|emotion| emotion == "Fear"));
    Ok(())
}

#[tokio::test]
async fn nineteen_characters_are_rejected() {
    let result = agent()
        .interpret(DreamRequest::new("short dream text!!!"))
        .await;

    assert_eq!(
        result,
        Err(ValidationError::TooShort {
            min: 20,
            actual: 19
        })
    );
}

#[tokio::test]
async fn water_and_flying_add_both_supplements() -> Result<()> {
    let analysis = agent()
        .interpret(DreamRequest::new(
            "Deep blue water stretched below while I tried to fly",
        ))
        .await?;

    assert_eq!(analysis.dream_type, DreamType::Processing);
    assert!(analysis
        .interpretation
        .contains("The presence of water often symbolizes emotions"));
    assert!(analysis
        .interpretation
        .contains("Flying in dreams often represents freedom"));
    Ok(())
}

#[tokio::test]
async fn keyword_free_dream_uses_every_fallback() -> Result<()> {
    let analysis = agent()
        .interpret(DreamRequest::new(
            "Nothing in particular happened, just quiet stillness everywhere",
        ))
        .await?;

    assert_eq!(analysis.symbols.len(), 1);
    assert_eq!(analysis.symbols[0].symbol, "Dream Setting");
    assert_eq!(analysis.emotions, vec!["Mixed emotions".to_string()]);

    let fallbacks = [
        "Islamic tradition distinguishes true dreams",
        "Hindu texts describe dreaming",
        "Christian tradition encourages testing dreams",
    ];
    for (entry, fallback) in analysis.religious_interpretations.iter().zip(fallbacks) {
        assert!(entry.interpretation.starts_with(fallback));
    }
    Ok(())
}

#[tokio::test]
async fn analysis_serializes_with_display_labels() -> Result<()> {
    let analysis = agent()
        .interpret(DreamRequest::new(
            "A snake coiled around the mirror in my childhood house",
        ))
        .await?;
    let value = serde_json::to_value(&analysis)?;

    assert_eq!(value["dream_type"], "Processing Dream");
    assert_eq!(symbol_names(&value), vec!["House", "Snake", "Mirror"]);
    assert_eq!(value["religious_interpretations"][0]["religion"], "Islamic");
    assert_eq!(value["religious_interpretations"][1]["icon"], "lotus");
    assert_eq!(
        value["religious_interpretations"][2]["key_symbols"][0],
        "Mirror"
    );
    Ok(())
}

#[tokio::test]
async fn concurrent_calls_are_independent() -> Result<()> {
    let metrics = AppMetrics::shared();
    let agent = Arc::new(DreamAgent::with_keyword_rules(
        AgentConfig::without_delays(),
        metrics.clone(),
    ));

    let dreams = [
        "I was afraid of the ocean swallowing our house",
        "I hope to climb the mountain with my family",
        "We kept falling from the bridge again and again",
    ];
    let handles = dreams
        .iter()
        .map(|dream| {
            let agent = agent.clone();
            let request = DreamRequest::new(*dream);
            tokio::spawn(async move { agent.interpret(request).await })
        })
        .collect::<Vec<_>>();

    let mut types = Vec::new();
    for handle in handles {
        types.push(handle.await??.dream_type);
    }

    assert_eq!(
        types,
        vec![DreamType::Fear, DreamType::Wish, DreamType::Nightmare]
    );
    assert_eq!(metrics.snapshot().analyses_total, 3);
    Ok(())
}

#[tokio::test]
async fn override_survives_the_round_trip_to_the_caller() -> Result<()> {
    let metrics = AppMetrics::shared();
    let agent = DreamAgent::with_keyword_rules(AgentConfig::without_delays(), metrics.clone());

    let analysis = agent
        .interpret(
            DreamRequest::new("I was afraid of the ocean swallowing our house")
                .with_override(Some(DreamType::Recurring)),
        )
        .await?;

    assert_eq!(analysis.dream_type, DreamType::Recurring);
    assert!(analysis.interpretation.contains("fear-based dream"));
    assert_eq!(
        analysis
            .religious_interpretations
            .iter()
            .map(|entry| entry.religion)
            .collect::<Vec<_>>(),
        Religion::ORDER.to_vec()
    );
    assert_eq!(metrics.snapshot().overrides_applied_total, 1);
    Ok(())
}

#[tokio::test]
async fn meanings_and_consultation_flow() -> Result<()> {
    let agent = agent();

    let anxiety = agent.meanings("", Some(CatalogCategory::AnxietyDream));
    assert_eq!(anxiety.len(), 3);

    let receipt = agent
        .submit_consultation(ConsultationRequest {
            name: "Sam Rivera".to_string(),
            email: "sam@example.org".to_string(),
            phone: "555-0199".to_string(),
            dream_description: "The same staircase dream every week".to_string(),
            preferred_time: "Friday morning".to_string(),
        })
        .await?;

    assert_eq!(receipt.fee_cents, 4_999);
    assert_eq!(receipt.currency, "USD");
    assert_eq!(agent.metrics().snapshot().consultations_total, 1);
    Ok(())
}
