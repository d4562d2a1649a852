use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Counters for dream analyses and consultation requests, shared by every `DreamAgent` call.
#[derive(Debug, Default)]
pub struct AppMetrics {
    analyses_total: AtomicU64,
    validation_failures_total: AtomicU64,
    symbol_fallback_total: AtomicU64,
    overrides_applied_total: AtomicU64,
    consultations_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub analyses_total: u64,
    pub validation_failures_total: u64,
    pub symbol_fallback_total: u64,
    pub overrides_applied_total: u64,
    pub consultations_total: u64,
    pub avg_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_analysis(&self) {
        self.analyses_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_symbol_fallback(&self) {
        self.symbol_fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_override(&self) {
        self.overrides_applied_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_consultation(&self) {
        self.consultations_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Average latency is taken over completed analyses only.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let analyses = self.analyses_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            analyses_total: analyses,
            validation_failures_total: self.validation_failures_total.load(Ordering::Relaxed),
            symbol_fallback_total: self.symbol_fallback_total.load(Ordering::Relaxed),
            overrides_applied_total: self.overrides_applied_total.load(Ordering::Relaxed),
            consultations_total: self.consultations_total.load(Ordering::Relaxed),
            avg_latency_millis: if analyses == 0 {
                0.0
            } else {
                latency as f64 / analyses as f64
            },
        }
    }
}

/// JSON logs on stderr; stdout belongs to command output.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,somnia_agents=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
