// AI Insights: on-demand market analysis for a career field.
// Client builds the prompt and parses the reply; view-models hold per-surface
// request state. All LLM calls go through llm_client.

use thiserror::Error;

pub mod client;
pub mod format;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod view_model;

pub use client::InsightClient;
pub use models::CareerInsights;
pub use view_model::{GenerateOutcome, InsightState, InsightSurfaces};

/// Market used when the caller does not name one.
pub const DEFAULT_LOCATION: &str = "India";

/// Career fields offered as one-click starting points.
pub const SUGGESTED_FIELDS: &[&str] = &[
    "Data Analyst",
    "Software Developer",
    "Digital Marketing",
    "UI/UX Designer",
    "Product Manager",
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InsightError {
    #[error("Gemini API not initialized. Please configure your API key in Settings.")]
    NotInitialized,

    /// Provider or network failure; the message is passed through verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("Failed to analyze career field. Please try again.")]
    MalformedResponse,

    #[error("Insight request timed out after {0}s")]
    Timeout(u64),
}

/// Blank or missing locations fall back to `DEFAULT_LOCATION`.
pub fn resolve_location(location: Option<&str>) -> &str {
    match location.map(str::trim) {
        Some(l) if !l.is_empty() => l,
        _ => DEFAULT_LOCATION,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::credentials::Credential;
    use crate::llm_client::{LlmError, ModelBackend, ModelOptions};

    pub const SAMPLE_INSIGHTS_JSON: &str = r#"{"growthOutlook":{"trend":"Growing","description":"x"},"salaryRanges":{"min":500000,"avg":800000,"max":1200000,"currency":"INR"},"jobRoles":[{"title":"Analyst","count":100}],"technicalSkills":[{"skill":"SQL","importance":"High"}],"softSkills":[{"skill":"Communication","importance":"Medium"}],"topLocations":["Bangalore"],"marketDemand":"steady"}"#;

    /// Backend that returns a canned reply and records every call.
    pub struct ScriptedBackend {
        calls: AtomicUsize,
        reply: Result<String, (u16, String)>,
        gate: Option<Arc<Notify>>,
        delay: Option<Duration>,
        last: Mutex<Option<(String, ModelOptions)>>,
    }

    impl ScriptedBackend {
        pub fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text.to_string()),
                gate: None,
                delay: None,
                last: Mutex::new(None),
            }
        }

        pub fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err((status, message.to_string())),
                ..Self::replying("")
            }
        }

        /// Holds every call until `gate` is notified.
        pub fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_call(&self) -> Option<(String, ModelOptions)> {
            self.last.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelBackend for ScriptedBackend {
        async fn generate(
            &self,
            _credential: &Credential,
            prompt: &str,
            _system: &str,
            options: ModelOptions,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((prompt.to_string(), options));

            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            self.reply
                .clone()
                .map_err(|(status, message)| LlmError::Api { status, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_location_defaults_to_india() {
        assert_eq!(resolve_location(None), "India");
        assert_eq!(resolve_location(Some("   ")), "India");
        assert_eq!(resolve_location(Some(" Pune ")), "Pune");
    }
}
