//! Analysis orchestration.
//!
//! [`Analyzer`] owns the history and the state a UI shell displays: the
//! current topic, the displayed response, the last error and the active
//! history entry. A request moves `Idle → Pending → Succeeded | Failed`;
//! only one request can be outstanding at a time.

use crate::completion::{CompletionClient, CompletionError};
use crate::error::{Error, Result};
use crate::history::{HistoryEntry, HistoryStore};
use tracing::{debug, error, info};

/// Shown when a blank topic is submitted.
pub const BLANK_TOPIC_MESSAGE: &str = "Please enter a topic to analyze.";

/// Shown for any completion failure. The detail is only logged.
pub const COMPLETION_FAILED_MESSAGE: &str =
    "An error occurred while analyzing the topic. Please check your API key and try again.";

/// Request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is outstanding.
    Pending,

    /// The last request produced a response.
    Succeeded,

    /// The last request failed.
    Failed,
}

/// Proof that a request was started. Consumed by [`Analyzer::finish`] or
/// [`Analyzer::abandon`].
#[derive(Debug)]
#[must_use = "a pending analysis must be finished or abandoned"]
pub struct PendingAnalysis {
    topic: String,
}

impl PendingAnalysis {
    /// The topic to send to the completion client.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// Resets `Pending` to `Idle` if dropped before [`PhaseGuard::disarm`].
struct PhaseGuard<'a> {
    phase: &'a mut Phase,
    armed: bool,
}

impl PhaseGuard<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        if self.armed && *self.phase == Phase::Pending {
            *self.phase = Phase::Idle;
            debug!("analysis dropped before completion");
        }
    }
}

/// Coordinates completion requests, history and display state.
#[derive(Debug)]
pub struct Analyzer<C> {
    client: C,
    history: HistoryStore,
    phase: Phase,
    topic: String,
    response: String,
    error: Option<String>,
    active_id: Option<String>,
}

impl<C: CompletionClient> Analyzer<C> {
    /// Create an analyzer over a loaded history.
    #[must_use]
    pub fn new(client: C, history: HistoryStore) -> Self {
        Self {
            client,
            history,
            phase: Phase::Idle,
            topic: String::new(),
            response: String::new(),
            error: None,
            active_id: None,
        }
    }

    /// Run one analysis end to end and return the new history entry id.
    ///
    /// Dropping the returned future before it completes puts the analyzer
    /// back in [`Phase::Idle`], so a timed-out request never blocks the
    /// next submit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank topic, [`Error::Busy`] if a
    /// request is already outstanding, and [`Error::Completion`] if the
    /// client fails. In every case the display state is already updated.
    pub async fn analyze(&mut self, topic: &str) -> Result<String> {
        let pending = self.begin(topic)?;
        let guard = PhaseGuard {
            phase: &mut self.phase,
            armed: true,
        };
        let outcome = self.client.complete(pending.topic()).await;
        guard.disarm();
        self.finish(pending, outcome)
    }

    /// Validate `topic` and move to `Pending`.
    ///
    /// Clears the previous error, response and active entry. A shell that
    /// wants to stay responsive can call this, await the client itself, and
    /// hand the outcome to [`Analyzer::finish`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] while another request is pending, or
    /// [`Error::Validation`] if `topic` is blank; no request should be issued.
    pub fn begin(&mut self, topic: &str) -> Result<PendingAnalysis> {
        if self.phase == Phase::Pending {
            return Err(Error::Busy);
        }
        if topic.trim().is_empty() {
            self.error = Some(BLANK_TOPIC_MESSAGE.to_string());
            return Err(Error::Validation(BLANK_TOPIC_MESSAGE.to_string()));
        }

        self.topic = topic.to_string();
        self.error = None;
        self.response.clear();
        self.active_id = None;
        self.phase = Phase::Pending;
        debug!(topic, "analysis started");

        Ok(PendingAnalysis {
            topic: topic.to_string(),
        })
    }

    /// Apply the outcome of a pending request.
    ///
    /// On success the response is displayed, recorded at the front of the
    /// history and marked active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Completion`] if `outcome` is a failure. The
    /// user-facing error is set to [`COMPLETION_FAILED_MESSAGE`].
    pub fn finish(
        &mut self,
        pending: PendingAnalysis,
        outcome: std::result::Result<String, CompletionError>,
    ) -> Result<String> {
        match outcome {
            Ok(text) => {
                let id = self.history.add(&pending.topic, &text);
                self.response = text;
                self.active_id = Some(id.clone());
                self.phase = Phase::Succeeded;
                info!(%id, "analysis recorded");
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, topic = %pending.topic, "analysis failed");
                // An entry selected while pending stays on display
                self.error = Some(COMPLETION_FAILED_MESSAGE.to_string());
                self.phase = Phase::Failed;
                Err(Error::Completion(e))
            }
        }
    }

    /// Give up on a pending request without an outcome.
    ///
    /// Returns to [`Phase::Idle`] so a new request can start. Nothing is
    /// recorded and the display is left as it is.
    pub fn abandon(&mut self, pending: PendingAnalysis) {
        if self.phase == Phase::Pending {
            self.phase = Phase::Idle;
        }
        debug!(topic = %pending.topic, "analysis abandoned");
    }

    /// Show a history entry and mark it active.
    ///
    /// Returns `false` (and changes nothing) if `id` is unknown.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(entry) = self.history.select(id) else {
            debug!(id, "selected entry not found");
            return false;
        };
        self.topic.clone_from(&entry.topic);
        self.response.clone_from(&entry.response);
        self.active_id = Some(entry.id.clone());
        self.error = None;
        true
    }

    /// Delete a history entry. Deleting the active entry clears the display.
    ///
    /// Returns whether the deleted entry was the active one.
    pub fn delete(&mut self, id: &str) -> bool {
        let was_active = self.history.delete(id, self.active_id.as_deref());
        if was_active {
            self.active_id = None;
            self.response.clear();
            self.topic.clear();
        }
        was_active
    }

    /// Delete all history and clear the display.
    pub fn clear(&mut self) {
        self.history.clear();
        self.active_id = None;
        self.response.clear();
        self.topic.clear();
    }

    /// History entries matching `term` (case-insensitive, topic only).
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&HistoryEntry> {
        self.history.search(term)
    }

    /// Full history, newest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Topic currently in the input.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Replace the topic in the input.
    pub fn set_topic(&mut self, topic: &str) {
        topic.clone_into(&mut self.topic);
    }

    /// Response currently displayed, empty if none.
    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    /// User-facing error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Id of the history entry mirrored in the display.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Whether a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Current request phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Answers every topic with a fixed response, or fails.
    struct FixedClient {
        answer: Option<String>,
        calls: AtomicUsize,
    }

    impl FixedClient {
        fn ok(answer: &str) -> Self {
            Self {
                answer: Some(answer.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                answer: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for FixedClient {
        async fn complete(&self, _topic: &str) -> std::result::Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .clone()
                .ok_or_else(|| CompletionError::Other("boom".to_string()))
        }
    }

    fn analyzer(client: FixedClient) -> Analyzer<FixedClient> {
        Analyzer::new(client, HistoryStore::load(Box::new(MemoryBackend::new())))
    }

    /// Never answers.
    struct StalledClient;

    #[async_trait]
    impl CompletionClient for StalledClient {
        async fn complete(&self, _topic: &str) -> std::result::Result<String, CompletionError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn blank_topic_never_calls_client() {
        let mut app = analyzer(FixedClient::ok("r"));

        let result = app.analyze("   \n\t").await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(app.error(), Some(BLANK_TOPIC_MESSAGE));
        assert_eq!(app.client.calls.load(Ordering::SeqCst), 0);
        assert_eq!(app.phase(), Phase::Idle);
        assert!(app.history().is_empty());
    }

    #[tokio::test]
    async fn success_records_entry_and_marks_active() {
        let mut app = analyzer(FixedClient::ok("## Summary\nShort.\n## Next\nMore"));

        let id = app.analyze("Supply chains").await.unwrap();

        assert_eq!(app.history().len(), 1);
        assert_eq!(app.history()[0].id, id);
        assert_eq!(app.history()[0].summary, "Short.");
        assert_eq!(app.active_id(), Some(id.as_str()));
        assert_eq!(app.response(), "## Summary\nShort.\n## Next\nMore");
        assert_eq!(app.phase(), Phase::Succeeded);
        assert!(app.error().is_none());
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn failure_sets_generic_error_and_keeps_history() {
        let mut app = analyzer(FixedClient::failing());

        let result = app.analyze("Topic").await;

        assert!(matches!(result, Err(Error::Completion(_))));
        assert_eq!(app.error(), Some(COMPLETION_FAILED_MESSAGE));
        assert!(app.response().is_empty());
        assert!(app.history().is_empty());
        assert!(app.active_id().is_none());
        assert_eq!(app.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn new_submit_clears_previous_error() {
        let mut app = analyzer(FixedClient::ok("r"));
        let _ = app.analyze("").await;
        assert!(app.error().is_some());

        app.analyze("real topic").await.unwrap();
        assert!(app.error().is_none());
    }

    #[test]
    fn begin_while_pending_is_busy() {
        let mut app = analyzer(FixedClient::ok("r"));
        let pending = app.begin("first").unwrap();

        assert!(app.is_loading());
        assert!(matches!(app.begin("second"), Err(Error::Busy)));

        app.finish(pending, Ok("done".to_string())).unwrap();
        assert!(!app.is_loading());
        assert!(app.begin("third").is_ok());
    }

    #[test]
    fn begin_clears_display_and_active() {
        let mut app = analyzer(FixedClient::ok("r"));
        let pending = app.begin("one").unwrap();
        app.finish(pending, Ok("first".to_string())).unwrap();

        let _pending = app.begin("two").unwrap();

        assert!(app.response().is_empty());
        assert!(app.active_id().is_none());
        assert_eq!(app.topic(), "two");
    }

    #[test]
    fn history_browsable_while_pending() {
        let mut app = analyzer(FixedClient::ok("r"));
        let first = app.begin("old").unwrap();
        let old_id = app.finish(first, Ok("old response".to_string())).unwrap();

        let pending = app.begin("new").unwrap();
        assert!(app.select(&old_id));
        assert_eq!(app.response(), "old response");

        let new_id = app.finish(pending, Ok("new response".to_string())).unwrap();
        assert_eq!(app.history()[0].id, new_id);
        assert_eq!(app.active_id(), Some(new_id.as_str()));
    }

    #[tokio::test]
    async fn select_loads_entry() {
        let mut app = analyzer(FixedClient::ok("answer"));
        let id = app.analyze("Topic A").await.unwrap();
        app.set_topic("something else");
        let _ = app.analyze("").await;

        assert!(app.select(&id));

        assert_eq!(app.topic(), "Topic A");
        assert_eq!(app.response(), "answer");
        assert_eq!(app.active_id(), Some(id.as_str()));
        assert!(app.error().is_none());
    }

    #[tokio::test]
    async fn select_unknown_is_noop() {
        let mut app = analyzer(FixedClient::ok("answer"));
        let id = app.analyze("Topic").await.unwrap();

        assert!(!app.select("missing"));
        assert_eq!(app.active_id(), Some(id.as_str()));
        assert_eq!(app.response(), "answer");
    }

    #[tokio::test]
    async fn deleting_active_entry_clears_display() {
        let mut app = analyzer(FixedClient::ok("answer"));
        let id = app.analyze("Topic").await.unwrap();

        assert!(app.delete(&id));

        assert!(app.history().is_empty());
        assert!(app.active_id().is_none());
        assert!(app.response().is_empty());
        assert!(app.topic().is_empty());
    }

    #[tokio::test]
    async fn deleting_other_entry_keeps_display() {
        let mut app = analyzer(FixedClient::ok("answer"));
        let first = app.analyze("First").await.unwrap();
        let second = app.analyze("Second").await.unwrap();

        assert!(!app.delete(&first));

        assert_eq!(app.history().len(), 1);
        assert_eq!(app.active_id(), Some(second.as_str()));
        assert_eq!(app.response(), "answer");
    }

    #[tokio::test]
    async fn clear_resets_everything() {
        let mut app = analyzer(FixedClient::ok("answer"));
        app.analyze("One").await.unwrap();
        app.analyze("Two").await.unwrap();

        app.clear();

        assert!(app.history().is_empty());
        assert!(app.active_id().is_none());
        assert!(app.response().is_empty());
        assert!(app.topic().is_empty());
    }

    #[tokio::test]
    async fn search_delegates_to_history() {
        let mut app = analyzer(FixedClient::ok("answer"));
        app.analyze("Climate policy").await.unwrap();
        app.analyze("Quantum computing").await.unwrap();

        let hits = app.search("CLIMATE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].topic, "Climate policy");
        assert_eq!(app.search("").len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_out_analysis_returns_to_idle() {
        let store = HistoryStore::load(Box::new(MemoryBackend::new()));
        let mut app = Analyzer::new(StalledClient, store);

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), app.analyze("topic")).await;

        assert!(timed_out.is_err());
        assert!(!app.is_loading());
        assert_eq!(app.phase(), Phase::Idle);
        assert!(app.history().is_empty());
        assert!(app.begin("next").is_ok());
    }

    #[test]
    fn abandon_allows_new_submit() {
        let mut app = analyzer(FixedClient::ok("r"));
        let pending = app.begin("first").unwrap();

        app.abandon(pending);

        assert!(!app.is_loading());
        assert!(app.history().is_empty());
        let next = app.begin("second").unwrap();
        app.finish(next, Ok("done".to_string())).unwrap();
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn failure_keeps_entry_selected_while_pending() {
        let mut app = analyzer(FixedClient::ok("r"));
        let first = app.begin("old").unwrap();
        let old_id = app.finish(first, Ok("old response".to_string())).unwrap();

        let pending = app.begin("new").unwrap();
        assert!(app.select(&old_id));
        let result = app.finish(pending, Err(CompletionError::EmptyResponse));

        assert!(matches!(result, Err(Error::Completion(_))));
        assert_eq!(app.error(), Some(COMPLETION_FAILED_MESSAGE));
        assert_eq!(app.response(), "old response");
        assert_eq!(app.active_id(), Some(old_id.as_str()));
        assert_eq!(app.phase(), Phase::Failed);
    }
}
