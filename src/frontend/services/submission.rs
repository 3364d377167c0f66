//! Submission lifecycle of the generate form.
//!
//! One submission moves `Idle → Loading → {Success, Error}`; both terminal
//! phases accept a new submission. The mapping from a settled request to the
//! next phase lives here, out of the component, so the contract is plain
//! unit-testable data flow. `drive_submission` carries the sequencing around
//! it: ticker while pending, bar completion on settlement, linger, hide.

use std::future::Future;

use tokio::time::sleep;

use crate::backend::generator::{GenerateError, GenerateOutcome};
use crate::frontend::services::progress::{LINGER, TICK_INTERVAL};

/// Where the current submission stands. Rendering is a pure function of
/// this value: Loading shows the progress indicator, Success reveals the
/// download section, Error shows the message inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Success(GenerateOutcome),
    Error(String),
}

impl SubmissionPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Per-form behavior knobs. The original page shipped two near-identical
/// submit handlers differing only in validation strictness and fallback
/// wording; those are two values of this struct, not two code paths.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Reject empty input before issuing a request.
    pub require_url: bool,
    /// Shown when `require_url` rejects the input.
    pub missing_url_message: String,
    /// Shown on a server-reported failure without an `error` payload field.
    pub server_error_fallback: String,
    /// Shown when the request never produced a usable response.
    pub transport_error_message: String,
}

impl FormConfig {
    /// The strict variant: empty input fails fast, no request issued.
    pub fn strict() -> Self {
        Self {
            require_url: true,
            missing_url_message: "Please enter a valid URL".to_string(),
            server_error_fallback: "The server reported an error.".to_string(),
            transport_error_message: "Could not connect to the server.".to_string(),
        }
    }

    /// The lax variant: submits whatever is in the input, validation left to
    /// the service.
    pub fn lax() -> Self {
        Self {
            require_url: false,
            missing_url_message: String::new(),
            server_error_fallback: "Could not generate the book.".to_string(),
            transport_error_message: "Could not connect to the server.".to_string(),
        }
    }

    /// Pre-flight check. `Some(error)` means the submission stops here and
    /// no request is made.
    pub fn validate(&self, url: &str) -> Option<GenerateError> {
        if self.require_url && url.trim().is_empty() {
            Some(GenerateError::Validation(self.missing_url_message.clone()))
        } else {
            None
        }
    }

    /// User-visible text for a failed submission.
    pub fn message_for(&self, error: &GenerateError) -> String {
        match error {
            GenerateError::Validation(message) => message.clone(),
            GenerateError::Server { message: Some(m) } => m.clone(),
            GenerateError::Server { message: None } => self.server_error_fallback.clone(),
            GenerateError::Transport(_) => self.transport_error_message.clone(),
        }
    }
}

/// Phase the form enters once the generate call settles.
pub fn phase_after_response(
    result: Result<GenerateOutcome, GenerateError>,
    config: &FormConfig,
) -> SubmissionPhase {
    match result {
        Ok(outcome) => SubmissionPhase::Success(outcome),
        Err(error) => SubmissionPhase::Error(config.message_for(&error)),
    }
}

/// View-side effects of one submission. The form implements this over its
/// signals; tests implement it with a recorder. Keeping the sequencing
/// behind this seam makes `drive_submission` the single place that decides
/// what happens when.
pub trait SubmissionView {
    fn set_phase(&mut self, phase: SubmissionPhase);
    /// Reset the bar to zero and show its container.
    fn show_progress(&mut self);
    fn tick_progress(&mut self);
    fn finish_progress(&mut self);
    fn hide_progress(&mut self);
    /// A newer submission has taken over the same view; late writes from
    /// this one must be suppressed.
    fn is_stale(&self) -> bool {
        false
    }
}

/// Runs one submission end to end: enter Loading, tick the simulated bar
/// while the request is pending, complete the bar on settlement whatever
/// the outcome, publish the terminal phase, and hide the bar only after the
/// linger. A submission superseded during the linger leaves the bar alone.
pub async fn drive_submission<V, Fut>(view: &mut V, config: &FormConfig, request: Fut)
where
    V: SubmissionView,
    Fut: Future<Output = Result<GenerateOutcome, GenerateError>>,
{
    view.set_phase(SubmissionPhase::Loading);
    view.show_progress();

    tokio::pin!(request);
    let result = loop {
        tokio::select! {
            biased;
            result = &mut request => break result,
            // Ticks past the ceiling are no-ops; the bar parks at 90.
            () = sleep(TICK_INTERVAL) => view.tick_progress(),
        }
    };

    view.finish_progress();
    view.set_phase(phase_after_response(result, config));

    sleep(LINGER).await;
    if !view.is_stale() {
        view.hide_progress();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::progress::{SimulatedProgress, TICK_CEILING};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    fn outcome() -> GenerateOutcome {
        GenerateOutcome {
            download_url: "/files/x.pdf".to_string(),
            filename: Some("x.pdf".to_string()),
        }
    }

    #[test]
    fn strict_config_rejects_empty_input() {
        let config = FormConfig::strict();
        let err = config.validate("   ").unwrap();
        assert_eq!(
            config.message_for(&err),
            "Please enter a valid URL"
        );
    }

    #[test]
    fn strict_config_accepts_non_empty_input() {
        assert_eq!(FormConfig::strict().validate("https://blog.example"), None);
    }

    #[test]
    fn lax_config_never_rejects() {
        assert_eq!(FormConfig::lax().validate(""), None);
    }

    #[test]
    fn success_becomes_success_phase() {
        let phase = phase_after_response(Ok(outcome()), &FormConfig::strict());
        assert_eq!(phase, SubmissionPhase::Success(outcome()));
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let phase = phase_after_response(
            Err(GenerateError::Server {
                message: Some("bad url".to_string()),
            }),
            &FormConfig::strict(),
        );
        assert_eq!(phase, SubmissionPhase::Error("bad url".to_string()));
    }

    #[test]
    fn missing_server_message_uses_config_fallback() {
        for config in [FormConfig::strict(), FormConfig::lax()] {
            let phase =
                phase_after_response(Err(GenerateError::Server { message: None }), &config);
            assert_eq!(phase, SubmissionPhase::Error(config.server_error_fallback));
        }
    }

    #[test]
    fn transport_failure_uses_connectivity_message() {
        let config = FormConfig::strict();
        let phase = phase_after_response(
            Err(GenerateError::Transport("connection refused".to_string())),
            &config,
        );
        assert_eq!(
            phase,
            SubmissionPhase::Error(config.transport_error_message)
        );
    }

    #[test]
    fn terminal_phases_are_not_loading() {
        assert!(SubmissionPhase::Loading.is_loading());
        assert!(!SubmissionPhase::Idle.is_loading());
        assert!(!SubmissionPhase::Success(outcome()).is_loading());
        assert!(!SubmissionPhase::Error(String::new()).is_loading());
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Phase(SubmissionPhase),
        Show,
        Tick(f32),
        Finish,
        Hide,
    }

    /// Records every view effect with the (paused-clock) time it happened.
    struct RecordingView {
        started: Instant,
        events: Vec<(ViewEvent, Duration)>,
        progress: SimulatedProgress,
        superseded: Arc<AtomicBool>,
    }

    impl RecordingView {
        fn new(superseded: Arc<AtomicBool>) -> Self {
            Self {
                started: Instant::now(),
                events: Vec::new(),
                progress: SimulatedProgress::new(),
                superseded,
            }
        }

        fn record(&mut self, event: ViewEvent) {
            let at = self.started.elapsed();
            self.events.push((event, at));
        }

        fn position_of(&self, wanted: &ViewEvent) -> Option<usize> {
            self.events.iter().position(|(event, _)| event == wanted)
        }
    }

    impl SubmissionView for RecordingView {
        fn set_phase(&mut self, phase: SubmissionPhase) {
            self.record(ViewEvent::Phase(phase));
        }

        fn show_progress(&mut self) {
            self.progress = SimulatedProgress::new();
            self.record(ViewEvent::Show);
        }

        fn tick_progress(&mut self) {
            let value = self.progress.tick();
            self.record(ViewEvent::Tick(value));
        }

        fn finish_progress(&mut self) {
            self.progress.finish();
            self.record(ViewEvent::Finish);
        }

        fn hide_progress(&mut self) {
            self.record(ViewEvent::Hide);
        }

        fn is_stale(&self) -> bool {
            self.superseded.load(Ordering::SeqCst)
        }
    }

    fn fresh_view() -> RecordingView {
        RecordingView::new(Arc::new(AtomicBool::new(false)))
    }

    #[tokio::test(start_paused = true)]
    async fn loading_shows_before_the_request_settles() {
        let mut view = fresh_view();
        let request = async {
            sleep(Duration::from_millis(1200)).await;
            Ok(outcome())
        };

        drive_submission(&mut view, &FormConfig::strict(), request).await;

        assert_eq!(
            view.events,
            vec![
                (ViewEvent::Phase(SubmissionPhase::Loading), Duration::ZERO),
                (ViewEvent::Show, Duration::ZERO),
                (ViewEvent::Tick(10.0), TICK_INTERVAL),
                (ViewEvent::Tick(20.0), TICK_INTERVAL * 2),
                (ViewEvent::Finish, Duration::from_millis(1200)),
                (
                    ViewEvent::Phase(SubmissionPhase::Success(outcome())),
                    Duration::from_millis(1200)
                ),
                (ViewEvent::Hide, Duration::from_millis(1200) + LINGER),
            ]
        );
        assert_eq!(view.progress.percent(), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn bar_completes_before_the_error_is_published() {
        let mut view = fresh_view();
        let request = async {
            sleep(Duration::from_millis(300)).await;
            Err(GenerateError::Transport("connection refused".to_string()))
        };

        drive_submission(&mut view, &FormConfig::strict(), request).await;

        let error_phase = ViewEvent::Phase(SubmissionPhase::Error(
            FormConfig::strict().transport_error_message,
        ));
        let finish = view.position_of(&ViewEvent::Finish).unwrap();
        let published = view.position_of(&error_phase).unwrap();
        assert!(finish < published);
        assert_eq!(view.progress.percent(), 100.0);

        // Hidden no sooner than the linger after settlement.
        let (_, hidden_at) = view.events.last().unwrap().clone();
        assert_eq!(view.events.last().unwrap().0, ViewEvent::Hide);
        assert_eq!(hidden_at, Duration::from_millis(300) + LINGER);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_park_at_the_ceiling_until_settlement() {
        let mut view = fresh_view();
        let request = async {
            sleep(Duration::from_millis(6100)).await;
            Ok(outcome())
        };

        drive_submission(&mut view, &FormConfig::strict(), request).await;

        let ticks: Vec<f32> = view
            .events
            .iter()
            .filter_map(|(event, _)| match event {
                ViewEvent::Tick(value) => Some(*value),
                _ => None,
            })
            .collect();

        assert_eq!(ticks.len(), 12);
        assert!(ticks.iter().all(|value| *value <= TICK_CEILING));
        assert_eq!(*ticks.last().unwrap(), TICK_CEILING);
        assert_eq!(view.progress.percent(), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_submission_does_not_hide_the_bar() {
        let superseded = Arc::new(AtomicBool::new(false));
        let mut view = RecordingView::new(superseded.clone());
        // The flag flips while this submission settles, as if the user had
        // submitted again during the linger window.
        let request = {
            let superseded = superseded.clone();
            async move {
                superseded.store(true, Ordering::SeqCst);
                Ok(outcome())
            }
        };

        drive_submission(&mut view, &FormConfig::strict(), request).await;

        assert!(view.position_of(&ViewEvent::Hide).is_none());
        // The terminal phase is still published; only the late hide is
        // suppressed.
        assert!(view.events.iter().any(|(event, _)| matches!(
            event,
            ViewEvent::Phase(SubmissionPhase::Success(_))
        )));
    }
}
