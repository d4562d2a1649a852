pub mod config;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use somnia_core::analyzer::used_symbol_fallback;
use somnia_core::{
    classify_validated, issue_receipt, search_meanings, validate_consultation,
    validate_dream_text, CatalogCategory, ConsultationError, ConsultationReceipt,
    ConsultationRequest, DreamAnalysis, DreamMeaning, DreamRequest, ValidationError,
};
use somnia_observability::AppMetrics;
use tracing::{info, instrument, warn};

pub use config::AgentConfig;

/// Turns validated dream text into an analysis. Implementations must be pure.
pub trait DreamClassifier: Send + Sync {
    fn classify(&self, text: &str) -> DreamAnalysis;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub struct KeywordDreamClassifier;

impl DreamClassifier for KeywordDreamClassifier {
    fn classify(&self, text: &str) -> DreamAnalysis {
        classify_validated(text)
    }

    fn name(&self) -> &'static str {
        "keyword-rules"
    }
}

#[derive(Clone)]
pub struct DreamAgent {
    classifier: Arc<dyn DreamClassifier>,
    config: AgentConfig,
    metrics: Arc<AppMetrics>,
}

impl DreamAgent {
    pub fn new(
        classifier: Arc<dyn DreamClassifier>,
        config: AgentConfig,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            classifier,
            config,
            metrics,
        }
    }

    pub fn with_keyword_rules(config: AgentConfig, metrics: Arc<AppMetrics>) -> Self {
        Self::new(Arc::new(KeywordDreamClassifier), config, metrics)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    /// Validation runs before the simulated latency, so rejected text returns immediately.
    /// A requested override replaces the classified dream type once classification is done.
    #[instrument(skip(self, request), fields(classifier = self.classifier.name()))]
    pub async fn interpret(&self, request: DreamRequest) -> Result<DreamAnalysis, ValidationError> {
        let started = Instant::now();

        let text = match validate_dream_text(request.text.as_deref()) {
            Ok(text) => text,
            Err(err) => {
                self.metrics.inc_validation_failure();
                warn!(error = %err, "dream text rejected");
                return Err(err);
            }
        };

        if !self.config.analysis_delay.is_zero() {
            tokio::time::sleep(self.config.analysis_delay).await;
        }

        let mut analysis = self.classifier.classify(text);
        if used_symbol_fallback(&analysis) {
            self.metrics.inc_symbol_fallback();
        }

        let classified_type = analysis.dream_type;
        if let Some(chosen) = request.dream_type_override {
            analysis = analysis.with_dream_type(chosen);
            self.metrics.inc_override();
        }

        self.metrics.inc_analysis();
        self.metrics.observe_latency(started.elapsed());
        info!(
            classified_type = %classified_type,
            dream_type = %analysis.dream_type,
            symbols = analysis.symbols.len(),
            emotions = analysis.emotions.len(),
            overridden = request.dream_type_override.is_some(),
            "dream analyzed"
        );

        Ok(analysis)
    }

    pub fn meanings(
        &self,
        query: &str,
        category: Option<CatalogCategory>,
    ) -> Vec<&'static DreamMeaning> {
        search_meanings(query, category)
    }

    #[instrument(skip(self, request))]
    pub async fn submit_consultation(
        &self,
        request: ConsultationRequest,
    ) -> Result<ConsultationReceipt, ConsultationError> {
        if let Err(err) = validate_consultation(&request) {
            warn!(error = %err, "consultation request rejected");
            return Err(err);
        }

        if !self.config.consultation_delay.is_zero() {
            tokio::time::sleep(self.config.consultation_delay).await;
        }

        let receipt = issue_receipt(&request, Utc::now());
        self.metrics.inc_consultation();
        info!(
            reference = %receipt.reference,
            preferred_time = %receipt.preferred_time,
            "consultation requested"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use somnia_core::{DreamSymbol, DreamType};

    use super::*;

    const WATER_DREAM: &str = "I stood by calm water and watched a bird glide above it";

    fn agent(config: AgentConfig) -> DreamAgent {
        DreamAgent::with_keyword_rules(config, AppMetrics::shared())
    }

    struct FixedClassifier;

    impl DreamClassifier for FixedClassifier {
        fn classify(&self, _text: &str) -> DreamAnalysis {
            DreamAnalysis {
                interpretation: "fixed".to_string(),
                dream_type: DreamType::Lucid,
                symbols: vec![DreamSymbol::new("Mirror", "Self-reflection")],
                emotions: vec!["Peace".to_string()],
                religious_interpretations: Vec::new(),
            }
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_the_configured_delay() {
        let agent = agent(AgentConfig::without_delays().with_analysis_delay(Duration::from_secs(2)));
        let started = tokio::time::Instant::now();

        let analysis = agent.interpret(DreamRequest::new(WATER_DREAM)).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(analysis.symbols[0].symbol, "Water");
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_before_waiting() {
        let agent = agent(AgentConfig::default());
        let started = tokio::time::Instant::now();

        let result = agent.interpret(DreamRequest::new("too short")).await;

        assert!(matches!(result, Err(ValidationError::TooShort { .. })));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(agent.metrics().snapshot().validation_failures_total, 1);
        assert_eq!(agent.metrics().snapshot().analyses_total, 0);
    }

    #[tokio::test]
    async fn missing_text_is_a_validation_error() {
        let agent = agent(AgentConfig::without_delays());
        let result = agent.interpret(DreamRequest::default()).await;
        assert_eq!(result, Err(ValidationError::Missing));
    }

    #[tokio::test]
    async fn override_is_applied_after_classification() {
        let agent = agent(AgentConfig::without_delays());

        let analysis = agent
            .interpret(DreamRequest::new(WATER_DREAM).with_override(Some(DreamType::Prophetic)))
            .await
            .unwrap();

        assert_eq!(analysis.dream_type, DreamType::Prophetic);
        assert!(analysis.interpretation.contains("processing dream"));
        assert_eq!(agent.metrics().snapshot().overrides_applied_total, 1);
    }

    #[tokio::test]
    async fn uses_the_injected_classifier() {
        let agent = DreamAgent::new(
            Arc::new(FixedClassifier),
            AgentConfig::without_delays(),
            AppMetrics::shared(),
        );

        let analysis = agent.interpret(DreamRequest::new(WATER_DREAM)).await.unwrap();
        assert_eq!(analysis.dream_type, DreamType::Lucid);
    }

    #[tokio::test]
    async fn counts_symbol_fallbacks() {
        let agent = agent(AgentConfig::without_delays());

        agent
            .interpret(DreamRequest::new(
                "Nothing in particular happened, just quiet stillness everywhere",
            ))
            .await
            .unwrap();

        let snapshot = agent.metrics().snapshot();
        assert_eq!(snapshot.symbol_fallback_total, 1);
        assert_eq!(snapshot.analyses_total, 1);
    }

    #[tokio::test]
    async fn consultation_rejects_blank_fields() {
        let agent = agent(AgentConfig::without_delays());
        let result = agent
            .submit_consultation(ConsultationRequest::default())
            .await;
        assert_eq!(result.unwrap_err(), ConsultationError::MissingField("name"));
        assert_eq!(agent.metrics().snapshot().consultations_total, 0);
    }
}
