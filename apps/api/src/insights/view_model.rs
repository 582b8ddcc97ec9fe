//! Insight View-Model: request state for one UI surface.
//!
//! Each surface (a field detail page, the free-form explorer, ...) owns one
//! `InsightViewModel`. State is a single tagged enum, so data and error can
//! never be set at the same time.
//!
//! Invariants:
//! - at most one backend call in flight per surface; triggers while one is
//!   outstanding are no-ops, even if the displayed state has since changed
//! - results are applied only if their request token is still current
//! - no credential means `Uninitialized`, whatever happened before

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::insights::client::InsightClient;
use crate::insights::models::CareerInsights;
use crate::insights::{resolve_location, InsightError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightState {
    /// No API key configured.
    Uninitialized,
    Idle,
    Loading {
        request_id: Uuid,
        career_field: String,
        location: String,
        started_at: DateTime<Utc>,
    },
    Ready {
        request_id: Uuid,
        career_field: String,
        location: String,
        insights: CareerInsights,
        generated_at: DateTime<Utc>,
    },
    Failed {
        request_id: Uuid,
        career_field: String,
        location: String,
        message: String,
    },
}

impl InsightState {
    fn request_id(&self) -> Option<Uuid> {
        match self {
            InsightState::Loading { request_id, .. }
            | InsightState::Ready { request_id, .. }
            | InsightState::Failed { request_id, .. } => Some(*request_id),
            InsightState::Uninitialized | InsightState::Idle => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The request ran; the state is `Ready` or `Failed` (or `Idle` if the
    /// surface was reset meanwhile).
    Completed(InsightState),
    /// A request was already in flight; nothing new was issued. Carries
    /// the current state, which is `Loading` unless a reset or credential
    /// change has since replaced it.
    AlreadyLoading(InsightState),
}

impl GenerateOutcome {
    pub fn state(&self) -> &InsightState {
        match self {
            GenerateOutcome::Completed(s) | GenerateOutcome::AlreadyLoading(s) => s,
        }
    }
}

struct Slot {
    state: InsightState,
    /// Token of the outstanding backend call. Cleared only when that call
    /// resolves, so resets and credential changes cannot start a second one.
    in_flight: Option<Uuid>,
}

pub struct InsightViewModel {
    client: InsightClient,
    timeout: Duration,
    slot: Mutex<Slot>,
}

impl InsightViewModel {
    pub fn new(client: InsightClient, timeout: Duration) -> Self {
        let state = resting_state(&client);
        Self {
            client,
            timeout,
            slot: Mutex::new(Slot {
                state,
                in_flight: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Reconciles the state with the credential store.
    fn sync_credential(&self, state: &mut InsightState) {
        let configured = self.client.is_initialized();
        match state {
            InsightState::Uninitialized if configured => *state = InsightState::Idle,
            InsightState::Uninitialized => {}
            _ if !configured => *state = InsightState::Uninitialized,
            _ => {}
        }
    }

    pub fn snapshot(&self) -> InsightState {
        let mut slot = self.lock();
        self.sync_credential(&mut slot.state);
        slot.state.clone()
    }

    /// Starts (or refreshes) insights for `career_field`.
    ///
    /// The remote call runs on its own task, so an abandoned caller cannot
    /// leave the surface stuck in `Loading`.
    pub async fn generate(
        self: &Arc<Self>,
        career_field: &str,
        location: Option<&str>,
    ) -> Result<GenerateOutcome, InsightError> {
        let career_field = career_field.trim().to_string();
        let location = resolve_location(location).to_string();

        let request_id = {
            let mut slot = self.lock();
            self.sync_credential(&mut slot.state);
            if matches!(slot.state, InsightState::Uninitialized) {
                return Err(InsightError::NotInitialized);
            }
            if let Some(pending) = slot.in_flight {
                debug!("Insight request {pending} already in flight; ignoring trigger");
                return Ok(GenerateOutcome::AlreadyLoading(slot.state.clone()));
            }

            let request_id = Uuid::new_v4();
            slot.in_flight = Some(request_id);
            slot.state = InsightState::Loading {
                request_id,
                career_field: career_field.clone(),
                location: location.clone(),
                started_at: Utc::now(),
            };
            request_id
        };

        let vm = Arc::clone(self);
        let task = tokio::spawn(async move {
            let result = match tokio::time::timeout(
                vm.timeout,
                vm.client
                    .analyze_career_field(&career_field, Some(location.as_str())),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => Err(InsightError::Timeout(vm.timeout.as_secs())),
            };
            vm.complete(request_id, &career_field, &location, result)
        });

        match task.await {
            Ok(state) => Ok(GenerateOutcome::Completed(state)),
            Err(e) => {
                error!("Insight task {request_id} aborted: {e}");
                let state = self.fail_if_current(request_id, "Failed to generate insights");
                Ok(GenerateOutcome::Completed(state))
            }
        }
    }

    fn complete(
        &self,
        request_id: Uuid,
        career_field: &str,
        location: &str,
        result: Result<CareerInsights, InsightError>,
    ) -> InsightState {
        let mut slot = self.lock();
        if slot.in_flight == Some(request_id) {
            slot.in_flight = None;
        }

        let current = slot.state.request_id() == Some(request_id)
            && matches!(slot.state, InsightState::Loading { .. });
        if !current {
            debug!("Discarding stale insight result {request_id}");
        } else {
            slot.state = match result {
                Ok(insights) => {
                    info!("Insights ready for '{career_field}' ({request_id})");
                    InsightState::Ready {
                        request_id,
                        career_field: career_field.to_string(),
                        location: location.to_string(),
                        insights,
                        generated_at: Utc::now(),
                    }
                }
                Err(e) => {
                    warn!("Insight request {request_id} failed: {e}");
                    InsightState::Failed {
                        request_id,
                        career_field: career_field.to_string(),
                        location: location.to_string(),
                        message: e.to_string(),
                    }
                }
            };
        }

        self.sync_credential(&mut slot.state);
        slot.state.clone()
    }

    fn fail_if_current(&self, request_id: Uuid, message: &str) -> InsightState {
        let mut slot = self.lock();
        if slot.in_flight == Some(request_id) {
            slot.in_flight = None;
        }
        let failed = match &slot.state {
            InsightState::Loading {
                request_id: current,
                career_field,
                location,
                ..
            } if *current == request_id => Some(InsightState::Failed {
                request_id,
                career_field: career_field.clone(),
                location: location.clone(),
                message: message.to_string(),
            }),
            _ => None,
        };
        if let Some(failed) = failed {
            slot.state = failed;
        }
        self.sync_credential(&mut slot.state);
        slot.state.clone()
    }

    /// Drops any data and invalidates an in-flight request (navigation away).
    /// The outstanding call still counts toward the one-in-flight limit
    /// until it resolves.
    pub fn reset(&self) -> InsightState {
        let mut slot = self.lock();
        slot.state = InsightState::Idle;
        self.sync_credential(&mut slot.state);
        slot.state.clone()
    }

    fn is_resting(&self) -> bool {
        let slot = self.lock();
        slot.in_flight.is_none()
            && matches!(slot.state, InsightState::Idle | InsightState::Uninitialized)
    }
}

fn resting_state(client: &InsightClient) -> InsightState {
    if client.is_initialized() {
        InsightState::Idle
    } else {
        InsightState::Uninitialized
    }
}

/// View-models keyed by surface name. Entries are created through
/// `surface`, which only the generate path uses; reads and resets of
/// unknown surfaces report the resting
/// state without registering anything, and reset entries are dropped once
/// nothing is in flight.
pub struct InsightSurfaces {
    client: InsightClient,
    timeout: Duration,
    surfaces: Mutex<HashMap<String, Arc<InsightViewModel>>>,
}

impl InsightSurfaces {
    pub fn new(client: InsightClient, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            surfaces: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<InsightViewModel>>> {
        self.surfaces
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the surface's view-model, creating it if needed.
    pub fn surface(&self, name: &str) -> Arc<InsightViewModel> {
        self.lock()
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!("Creating insight surface '{name}'");
                Arc::new(InsightViewModel::new(self.client.clone(), self.timeout))
            })
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<InsightViewModel>> {
        self.lock().get(name).cloned()
    }

    pub fn snapshot(&self, name: &str) -> InsightState {
        match self.get(name) {
            Some(vm) => vm.snapshot(),
            None => resting_state(&self.client),
        }
    }

    /// Resets the surface and forgets it unless a call is still outstanding.
    pub fn reset(&self, name: &str) -> InsightState {
        let Some(vm) = self.get(name) else {
            return resting_state(&self.client);
        };
        let state = vm.reset();

        let mut surfaces = self.lock();
        let evict = surfaces
            .get(name)
            .is_some_and(|current| Arc::ptr_eq(current, &vm) && vm.is_resting());
        if evict {
            surfaces.remove(name);
            debug!("Dropped insight surface '{name}'");
        }
        state
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credential;
    use crate::insights::client::parse_insights;
    use crate::insights::testing::{ScriptedBackend, SAMPLE_INSIGHTS_JSON};
    use tokio::sync::{watch, Notify};

    const TIMEOUT: Duration = Duration::from_secs(30);

    fn view_model(
        backend: Arc<ScriptedBackend>,
        key: Option<&str>,
    ) -> (Arc<InsightViewModel>, watch::Sender<Option<Credential>>) {
        let (tx, rx) = watch::channel(key.map(Credential::new));
        let client = InsightClient::new(backend, rx, false);
        (Arc::new(InsightViewModel::new(client, TIMEOUT)), tx)
    }

    #[tokio::test]
    async fn test_absent_credential_reports_uninitialized_without_calling() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (vm, _tx) = view_model(backend.clone(), None);

        assert_eq!(vm.snapshot(), InsightState::Uninitialized);
        let err = vm.generate("Data Analyst", None).await.unwrap_err();
        assert_eq!(err, InsightError::NotInitialized);
        assert_eq!(vm.snapshot(), InsightState::Uninitialized);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_saving_credential_moves_to_idle() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (vm, tx) = view_model(backend, None);

        tx.send_replace(Some(Credential::new("key")));
        assert_eq!(vm.snapshot(), InsightState::Idle);
    }

    #[tokio::test]
    async fn test_successful_response_reaches_ready_with_exact_structure() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (vm, _tx) = view_model(backend.clone(), Some("key"));
        assert_eq!(vm.snapshot(), InsightState::Idle);

        let outcome = vm.generate("Data Analyst", None).await.unwrap();
        let expected = parse_insights(SAMPLE_INSIGHTS_JSON).unwrap();

        match outcome {
            GenerateOutcome::Completed(InsightState::Ready {
                insights,
                career_field,
                location,
                ..
            }) => {
                assert_eq!(insights, expected);
                assert_eq!(career_field, "Data Analyst");
                assert_eq!(location, "India");
            }
            other => panic!("expected Ready, got {other:?}"),
        }
        assert!(matches!(vm.snapshot(), InsightState::Ready { .. }));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_response_reaches_failed_never_ready() {
        let backend = Arc::new(ScriptedBackend::replying("{\"growthOutlook\": {"));
        let (vm, _tx) = view_model(backend, Some("key"));

        let outcome = vm.generate("Data Analyst", None).await.unwrap();
        match outcome.state() {
            InsightState::Failed { message, .. } => {
                assert_eq!(message, "Failed to analyze career field. Please try again.");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_failure_message_is_surfaced() {
        let backend = Arc::new(ScriptedBackend::failing(429, "Resource has been exhausted"));
        let (vm, _tx) = view_model(backend, Some("key"));

        let outcome = vm.generate("Data Analyst", None).await.unwrap();
        assert!(matches!(
            outcome.state(),
            InsightState::Failed { message, .. } if message == "Resource has been exhausted"
        ));
    }

    #[tokio::test]
    async fn test_trigger_while_loading_is_ignored() {
        let gate = Arc::new(Notify::new());
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON).gated(gate.clone()));
        let (vm, _tx) = view_model(backend.clone(), Some("key"));

        let first = {
            let vm = vm.clone();
            tokio::spawn(async move { vm.generate("Data Analyst", None).await })
        };

        while !matches!(vm.snapshot(), InsightState::Loading { .. }) {
            tokio::task::yield_now().await;
        }

        let second = vm.generate("Data Analyst", None).await.unwrap();
        assert!(matches!(second, GenerateOutcome::AlreadyLoading(InsightState::Loading { .. })));

        gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(matches!(first.state(), InsightState::Ready { .. }));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_after_ready_issues_new_request() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (vm, _tx) = view_model(backend.clone(), Some("key"));

        let first = vm.generate("Data Analyst", None).await.unwrap();
        let second = vm.generate("Data Analyst", None).await.unwrap();

        assert_ne!(first.state().request_id(), second.state().request_id());
        assert_eq!(backend.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_result() {
        let gate = Arc::new(Notify::new());
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON).gated(gate.clone()));
        let (vm, _tx) = view_model(backend, Some("key"));

        let pending = {
            let vm = vm.clone();
            tokio::spawn(async move { vm.generate("Data Analyst", None).await })
        };
        while !matches!(vm.snapshot(), InsightState::Loading { .. }) {
            tokio::task::yield_now().await;
        }

        assert_eq!(vm.reset(), InsightState::Idle);
        gate.notify_one();

        let outcome = pending.await.unwrap().unwrap();
        assert_eq!(outcome.state(), &InsightState::Idle);
        assert_eq!(vm.snapshot(), InsightState::Idle);
    }

    async fn wait_for_loading(vm: &InsightViewModel) {
        while !matches!(vm.snapshot(), InsightState::Loading { .. }) {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_credential_round_trip_while_loading_keeps_single_call() {
        let gate = Arc::new(Notify::new());
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON).gated(gate.clone()));
        let (vm, tx) = view_model(backend.clone(), Some("key"));

        let first = {
            let vm = vm.clone();
            tokio::spawn(async move { vm.generate("Data Analyst", None).await })
        };
        wait_for_loading(&vm).await;

        tx.send_replace(None);
        assert_eq!(vm.snapshot(), InsightState::Uninitialized);
        tx.send_replace(Some(Credential::new("key")));
        assert_eq!(vm.snapshot(), InsightState::Idle);

        let second = vm.generate("Data Analyst", None).await.unwrap();
        assert!(matches!(second, GenerateOutcome::AlreadyLoading(_)));
        assert_eq!(backend.call_count(), 1);

        gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert_eq!(first.state(), &InsightState::Idle);

        // Stores a permit, so the next call passes the gate immediately.
        gate.notify_one();
        let third = vm.generate("Data Analyst", None).await.unwrap();
        assert!(matches!(third.state(), InsightState::Ready { .. }));
        assert_eq!(backend.call_count(), 2);
    }

    #[tokio::test]
    async fn test_trigger_after_reset_waits_for_outstanding_call() {
        let gate = Arc::new(Notify::new());
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON).gated(gate.clone()));
        let (vm, _tx) = view_model(backend.clone(), Some("key"));

        let first = {
            let vm = vm.clone();
            tokio::spawn(async move { vm.generate("Data Analyst", None).await })
        };
        wait_for_loading(&vm).await;
        vm.reset();

        let second = vm.generate("Nursing", None).await.unwrap();
        assert_eq!(second, GenerateOutcome::AlreadyLoading(InsightState::Idle));
        assert_eq!(backend.call_count(), 1);

        gate.notify_one();
        first.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out_into_failed() {
        let backend = Arc::new(
            ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON).delayed(TIMEOUT * 2),
        );
        let (vm, _tx) = view_model(backend, Some("key"));

        let outcome = vm.generate("Data Analyst", None).await.unwrap();
        assert!(matches!(
            outcome.state(),
            InsightState::Failed { message, .. } if message == "Insight request timed out after 30s"
        ));
    }

    #[tokio::test]
    async fn test_removing_credential_returns_to_uninitialized() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (vm, tx) = view_model(backend, Some("key"));
        vm.generate("Data Analyst", None).await.unwrap();

        tx.send_replace(None);
        assert_eq!(vm.snapshot(), InsightState::Uninitialized);
        assert_eq!(vm.reset(), InsightState::Uninitialized);
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let json = serde_json::to_value(InsightState::Idle).unwrap();
        assert_eq!(json, serde_json::json!({"status": "idle"}));
    }

    #[tokio::test]
    async fn test_surfaces_are_independent_and_reused() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (_tx, rx) = watch::channel(Some(Credential::new("key")));
        let surfaces = InsightSurfaces::new(InsightClient::new(backend, rx, false), TIMEOUT);

        let a = surfaces.surface("field:healthcare");
        a.generate("Healthcare", None).await.unwrap();

        assert!(Arc::ptr_eq(&a, &surfaces.surface("field:healthcare")));
        assert_eq!(surfaces.surface("explorer").snapshot(), InsightState::Idle);
        assert!(matches!(
            surfaces.surface("field:healthcare").snapshot(),
            InsightState::Ready { .. }
        ));
    }

    #[tokio::test]
    async fn test_reads_and_resets_do_not_register_surfaces() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (_tx, rx) = watch::channel(Some(Credential::new("key")));
        let surfaces = InsightSurfaces::new(InsightClient::new(backend, rx, false), TIMEOUT);

        for i in 0..1_000 {
            let name = format!("s{i}");
            assert_eq!(surfaces.snapshot(&name), InsightState::Idle);
            assert_eq!(surfaces.reset(&name), InsightState::Idle);
        }
        assert_eq!(surfaces.len(), 0);

        surfaces
            .surface("explorer")
            .generate("Data Analyst", None)
            .await
            .unwrap();
        assert_eq!(surfaces.len(), 1);
        assert!(matches!(surfaces.snapshot("explorer"), InsightState::Ready { .. }));

        assert_eq!(surfaces.reset("explorer"), InsightState::Idle);
        assert_eq!(surfaces.len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_surface_without_credential_is_uninitialized() {
        let backend = Arc::new(ScriptedBackend::replying(SAMPLE_INSIGHTS_JSON));
        let (_tx, rx) = watch::channel(None);
        let surfaces = InsightSurfaces::new(InsightClient::new(backend, rx, false), TIMEOUT);

        assert_eq!(surfaces.snapshot("explorer"), InsightState::Uninitialized);
        assert_eq!(surfaces.len(), 0);
    }
}
