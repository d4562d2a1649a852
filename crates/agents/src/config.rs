use std::env;
use std::time::Duration;

pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2_000;
pub const DEFAULT_CONSULTATION_DELAY_MS: u64 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Stand-in latency for a future model backend.
    pub analysis_delay: Duration,
    pub consultation_delay: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            consultation_delay: Duration::from_millis(DEFAULT_CONSULTATION_DELAY_MS),
        }
    }
}

impl AgentConfig {
    pub fn from_env() -> Self {
        Self {
            analysis_delay: env_millis("SOMNIA_ANALYSIS_DELAY_MS", DEFAULT_ANALYSIS_DELAY_MS),
            consultation_delay: env_millis(
                "SOMNIA_CONSULTATION_DELAY_MS",
                DEFAULT_CONSULTATION_DELAY_MS,
            ),
        }
    }

    pub fn without_delays() -> Self {
        Self {
            analysis_delay: Duration::ZERO,
            consultation_delay: Duration::ZERO,
        }
    }

    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }
}

fn env_millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(
        env::var(key)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(default),
    )
}
