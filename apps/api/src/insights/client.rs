//! Insight Client: turns `(career field, location)` into `CareerInsights`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::credentials::Credential;
use crate::insights::models::CareerInsights;
use crate::insights::prompts::{build_insight_prompt, INSIGHT_SYSTEM};
use crate::insights::{resolve_location, InsightError};
use crate::llm_client::{strip_json_fences, LlmError, ModelBackend, ModelOptions};

/// Reads the active credential on every call, so saving or removing the key
/// takes effect immediately. Cheap to clone.
#[derive(Clone)]
pub struct InsightClient {
    backend: Arc<dyn ModelBackend>,
    credential: watch::Receiver<Option<Credential>>,
    live_search: bool,
}

impl InsightClient {
    pub fn new(
        backend: Arc<dyn ModelBackend>,
        credential: watch::Receiver<Option<Credential>>,
        live_search: bool,
    ) -> Self {
        Self {
            backend,
            credential,
            live_search,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.credential.borrow().is_some()
    }

    /// Queries the model afresh on every call; nothing is cached.
    pub async fn analyze_career_field(
        &self,
        career_field: &str,
        location: Option<&str>,
    ) -> Result<CareerInsights, InsightError> {
        let credential = self
            .credential
            .borrow()
            .clone()
            .ok_or(InsightError::NotInitialized)?;

        let location = resolve_location(location);
        let prompt = build_insight_prompt(career_field, location);
        let options = ModelOptions {
            json_output: true,
            live_search: self.live_search,
        };

        info!("Analyzing career field '{career_field}' in '{location}'");

        let raw = self
            .backend
            .generate(&credential, &prompt, INSIGHT_SYSTEM, options)
            .await
            .map_err(into_insight_error)?;

        parse_insights(&raw)
    }
}

fn into_insight_error(err: LlmError) -> InsightError {
    match err {
        LlmError::Api { message, .. } => InsightError::Remote(message),
        LlmError::Http(e) => InsightError::Remote(e.to_string()),
        LlmError::Parse(e) => InsightError::Remote(format!("Unexpected response from Gemini: {e}")),
        LlmError::EmptyContent => {
            warn!("Model returned no content");
            InsightError::MalformedResponse
        }
    }
}

/// Parses model output into `CareerInsights`. Any missing section fails the
/// whole response rather than rendering partial data.
pub fn parse_insights(raw: &str) -> Result<CareerInsights, InsightError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        warn!("Model response did not match the insight schema: {e}");
        InsightError::MalformedResponse
    })
}
