//! Chat session use case.
//!
//! Owns one conversation: the transcript, the awaiting-response guard and
//! the ports it renders to. One exchange runs as three steps so an event
//! loop can keep reading input while a request is in flight:
//!
//! ```text
//! begin_exchange(raw)  ──► PendingExchange      (guard set, User message shown)
//!        │
//! ExchangeDispatcher::dispatch(&pending) ──► ExchangeOutcome   (no session borrow)
//!        │
//! complete_exchange(pending, outcome) ──► Message   (reply shown, guard cleared)
//! ```
//!
//! [`ChatSession::submit`] runs the three steps back to back.

use crate::config::SessionConfig;
use crate::ports::chat_view::ChatView;
use crate::ports::clock::Clock;
use crate::ports::confirm_prompt::ConfirmPrompt;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::responder::{Responder, ResponderError};
use chatline_domain::texts::{BUSY_NOTICE_TEXT, CONNECTION_LOST_TEXT, RESET_CONFIRM_PROMPT};
use chatline_domain::{DomainError, ExchangeOutcome, Message, SessionState, Transcript, preview};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// An accepted submission whose reply has not been rendered yet.
///
/// Only [`ChatSession::begin_exchange`] creates one.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    text: String,
    started: Instant,
}

impl PendingExchange {
    /// The trimmed text sent to the responder.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Sends one pending exchange to the responder.
///
/// Cheap to clone and holds no borrow of the session, so it can be moved
/// into a spawned task.
#[derive(Clone)]
pub struct ExchangeDispatcher {
    responder: Arc<dyn Responder>,
    timeout: Option<Duration>,
}

impl ExchangeDispatcher {
    pub fn new(responder: Arc<dyn Responder>, timeout: Option<Duration>) -> Self {
        Self { responder, timeout }
    }

    /// Issue exactly one request and classify the result.
    ///
    /// Never fails: transport problems and timeouts become
    /// [`ExchangeOutcome::TransportFailure`]. No retries.
    pub async fn dispatch(&self, pending: &PendingExchange) -> ExchangeOutcome {
        let request = self.responder.respond(pending.text());
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, request).await {
                Ok(result) => result,
                Err(_) => Err(ResponderError::Timeout),
            },
            None => request.await,
        };

        match result {
            Ok(reply) => {
                if let Some(error) = &reply.error {
                    debug!("Responder reported error: {}", error);
                }
                reply.into_outcome()
            }
            Err(e) => {
                warn!("Error sending message: {}", e);
                ExchangeOutcome::transport(e.to_string())
            }
        }
    }
}

/// One conversation view and its single outbound request channel.
pub struct ChatSession {
    transcript: Transcript,
    state: SessionState,
    dispatcher: ExchangeDispatcher,
    view: Arc<dyn ChatView>,
    clock: Arc<dyn Clock>,
    conversation_logger: Arc<dyn ConversationLogger>,
    config: SessionConfig,
}

impl ChatSession {
    pub fn new(
        responder: Arc<dyn Responder>,
        view: Arc<dyn ChatView>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let config = SessionConfig::default();
        Self {
            transcript: Transcript::new(),
            state: SessionState::new(),
            dispatcher: ExchangeDispatcher::new(responder, config.timeout),
            view,
            clock,
            conversation_logger: Arc::new(NoConversationLogger),
            config,
        }
    }

    /// Apply session configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.dispatcher.timeout = config.timeout;
        self.config = config;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    // ==================== Accessors ====================

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state.is_awaiting_response()
    }

    pub fn message_count(&self) -> usize {
        self.transcript.message_count()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A dispatcher bound to this session's responder and timeout.
    pub fn dispatcher(&self) -> ExchangeDispatcher {
        self.dispatcher.clone()
    }

    // ==================== Lifecycle ====================

    /// Render the welcome greeting and hand focus to the input.
    pub fn start(&mut self) {
        let greeting = Message::bot(self.config.welcome.clone(), self.clock.now_label());
        self.transcript = Transcript::with_greeting(greeting);
        self.view.render_transcript(self.transcript.messages());
        self.view.set_controls_enabled(true);
        self.view.focus_input();
        info!("Chat initialized");
    }

    /// Submit whatever is in the view's input control.
    pub async fn submit_input(&mut self) -> Result<Message, DomainError> {
        let raw = self.view.input_text();
        self.submit(&raw).await
    }

    /// Run one full exchange: accept, dispatch, render.
    ///
    /// Returns the Bot message appended for the reply (normal or error).
    pub async fn submit(&mut self, raw: &str) -> Result<Message, DomainError> {
        let pending = self.begin_exchange(raw)?;
        let outcome = self.dispatcher.dispatch(&pending).await;
        Ok(self.complete_exchange(pending, outcome))
    }

    /// Accept a submission and put the session into awaiting state.
    ///
    /// Rejections leave the transcript and the guard untouched.
    pub fn begin_exchange(&mut self, raw: &str) -> Result<PendingExchange, DomainError> {
        let text = raw.trim();
        if text.is_empty() {
            self.view.focus_input();
            return Err(DomainError::EmptyInput);
        }

        if let Err(e) = self.state.try_begin() {
            info!("{}", BUSY_NOTICE_TEXT);
            if self.config.busy_policy.notifies() {
                self.view.show_notice(BUSY_NOTICE_TEXT);
            }
            return Err(e);
        }

        self.view.set_controls_enabled(false);

        let message = Message::user(text, self.clock.now_label());
        let seq = self.transcript.append(message.clone());
        self.view.append_message(&message);
        self.view.set_input_text("");
        self.view.set_typing_visible(true);

        info!("Exchange {} started: {}", seq, preview(text, 80));
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "seq": seq,
                "text": text,
            }),
        ));

        Ok(PendingExchange {
            text: text.to_string(),
            started: Instant::now(),
        })
    }

    /// Render the outcome of a pending exchange and return to idle.
    ///
    /// Finalization (guard cleared, controls enabled, focus restored) runs
    /// for every outcome.
    pub fn complete_exchange(
        &mut self,
        pending: PendingExchange,
        outcome: ExchangeOutcome,
    ) -> Message {
        self.view.set_typing_visible(false);

        let message = outcome.to_message(self.clock.now_label());
        self.transcript.append(message.clone());
        self.view.append_message(&message);

        let elapsed_ms = pending.elapsed().as_millis() as u64;
        match &outcome {
            ExchangeOutcome::Reply(text) => {
                info!("Exchange completed in {}ms: {}", elapsed_ms, preview(text, 80));
                self.conversation_logger.log(ConversationEvent::new(
                    "bot_reply",
                    serde_json::json!({
                        "request": pending.text(),
                        "text": text,
                        "elapsed_ms": elapsed_ms,
                    }),
                ));
            }
            ExchangeOutcome::LogicalFailure { reason, .. } => {
                warn!(
                    "Responder could not answer: {}",
                    reason.as_deref().unwrap_or("no reason given")
                );
                self.log_failure(&pending, &outcome, reason.as_deref(), &message, elapsed_ms);
            }
            ExchangeOutcome::TransportFailure { reason } => {
                warn!("Exchange failed after {}ms: {}", elapsed_ms, reason);
                self.log_failure(&pending, &outcome, Some(reason.as_str()), &message, elapsed_ms);
            }
        }

        self.finalize();
        message
    }

    /// Complete an exchange whose task vanished without an outcome.
    ///
    /// The connection-lost notice is the exchange's single error reply, and
    /// the session returns to idle as with any other outcome.
    pub fn report_connection_lost(&mut self, pending: PendingExchange) -> Message {
        self.view.set_typing_visible(false);

        let message = Message::system_error(CONNECTION_LOST_TEXT, self.clock.now_label());
        self.transcript.append(message.clone());
        self.view.append_message(&message);

        let elapsed_ms = pending.elapsed().as_millis() as u64;
        warn!("{} (after {}ms)", CONNECTION_LOST_TEXT, elapsed_ms);
        self.conversation_logger.log(ConversationEvent::new(
            "exchange_failed",
            serde_json::json!({
                "request": pending.text(),
                "kind": "connection_lost",
                "reason": null,
                "text": message.text(),
                "elapsed_ms": elapsed_ms,
            }),
        ));

        self.finalize();
        message
    }

    /// Clear the transcript after asking for confirmation.
    ///
    /// Returns `true` if the history was cleared. The awaiting-response
    /// guard is not touched, so an in-flight reply still lands afterwards.
    pub async fn reset(&mut self, confirm: &dyn ConfirmPrompt) -> bool {
        match confirm.confirm(RESET_CONFIRM_PROMPT).await {
            Ok(true) => {}
            Ok(false) => {
                debug!("Chat history reset declined");
                return false;
            }
            Err(e) => {
                warn!("Chat history reset not confirmed: {}", e);
                return false;
            }
        }

        self.transcript.reset(self.clock.now_label());
        self.view.render_transcript(self.transcript.messages());
        self.conversation_logger.log(ConversationEvent::new(
            "transcript_reset",
            serde_json::json!({}),
        ));
        info!("Chat history cleared");
        true
    }

    fn finalize(&mut self) {
        self.state.finish();
        self.view.set_controls_enabled(true);
        self.view.focus_input();
    }

    fn log_failure(
        &self,
        pending: &PendingExchange,
        outcome: &ExchangeOutcome,
        reason: Option<&str>,
        rendered: &Message,
        elapsed_ms: u64,
    ) {
        self.conversation_logger.log(ConversationEvent::new(
            "exchange_failed",
            serde_json::json!({
                "request": pending.text(),
                "kind": outcome.kind(),
                "reason": reason,
                "text": rendered.text(),
                "elapsed_ms": elapsed_ms,
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use crate::ports::confirm_prompt::{AutoConfirm, AutoDecline};
    use async_trait::async_trait;
    use chatline_domain::texts::{
        CONNECTIVITY_ERROR_TEXT, DEFAULT_WELCOME_TEXT, FALLBACK_ERROR_TEXT, RESET_GREETING_TEXT,
    };
    use chatline_domain::{BusyPolicy, ResponderReply, Sender};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct ScriptedResponder {
        replies: Mutex<VecDeque<Result<ResponderReply, ResponderError>>>,
        received: Mutex<Vec<String>>,
    }

    impl ScriptedResponder {
        fn new(replies: Vec<Result<ResponderReply, ResponderError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                received: Mutex::new(Vec::new()),
            }
        }

        fn received(&self) -> Vec<String> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Responder for ScriptedResponder {
        async fn respond(&self, text: &str) -> Result<ResponderReply, ResponderError> {
            self.received.lock().unwrap().push(text.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ResponderError::Network("No more replies".to_string())))
        }
    }

    /// Never answers within any reasonable test timeout.
    struct HangingResponder;

    #[async_trait]
    impl Responder for HangingResponder {
        async fn respond(&self, _text: &str) -> Result<ResponderReply, ResponderError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ResponderReply::success("too late"))
        }
    }

    #[derive(Default)]
    struct ViewState {
        input: String,
        enabled: bool,
        typing: bool,
        focus_count: usize,
        appended: Vec<Message>,
        rendered: Vec<Vec<Message>>,
        notices: Vec<String>,
    }

    #[derive(Default)]
    struct RecordingView {
        state: Mutex<ViewState>,
    }

    impl RecordingView {
        fn with_input(text: &str) -> Self {
            let view = Self::default();
            view.state.lock().unwrap().input = text.to_string();
            view
        }
    }

    impl ChatView for RecordingView {
        fn input_text(&self) -> String {
            self.state.lock().unwrap().input.clone()
        }
        fn set_input_text(&self, text: &str) {
            self.state.lock().unwrap().input = text.to_string();
        }
        fn focus_input(&self) {
            self.state.lock().unwrap().focus_count += 1;
        }
        fn set_controls_enabled(&self, enabled: bool) {
            self.state.lock().unwrap().enabled = enabled;
        }
        fn set_typing_visible(&self, visible: bool) {
            self.state.lock().unwrap().typing = visible;
        }
        fn append_message(&self, message: &Message) {
            self.state.lock().unwrap().appended.push(message.clone());
        }
        fn render_transcript(&self, messages: &[Message]) {
            self.state.lock().unwrap().rendered.push(messages.to_vec());
        }
        fn show_notice(&self, text: &str) {
            self.state.lock().unwrap().notices.push(text.to_string());
        }
    }

    fn session_with(
        responder: Arc<dyn Responder>,
        view: Arc<RecordingView>,
    ) -> ChatSession {
        ChatSession::new(responder, view, Arc::new(FixedClock::new("10:30")))
    }

    fn ok(text: &str) -> Result<ResponderReply, ResponderError> {
        Ok(ResponderReply::success(text))
    }

    // ==================== Submit ====================

    #[tokio::test]
    async fn test_successful_exchange_appends_user_then_bot() {
        let responder = Arc::new(ScriptedResponder::new(vec![ok("Hi there!")]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder.clone(), view.clone());

        let reply = session.submit("Hello").await.unwrap();

        assert_eq!(reply.text(), "Hi there!");
        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), Sender::User);
        assert_eq!(messages[0].text(), "Hello");
        assert_eq!(messages[1].sender(), Sender::Bot);
        assert_eq!(messages[1].text(), "Hi there!");
        assert!(!messages[1].is_error());
        assert_eq!(messages[1].timestamp(), "10:30");
        assert_eq!(responder.received(), vec!["Hello".to_string()]);
        assert_eq!(session.message_count(), 2);
    }

    #[tokio::test]
    async fn test_submitted_text_is_trimmed() {
        let responder = Arc::new(ScriptedResponder::new(vec![ok("pong")]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder.clone(), view);

        session.submit("   ping \n").await.unwrap();

        assert_eq!(responder.received(), vec!["ping".to_string()]);
        assert_eq!(session.transcript().messages()[0].text(), "ping");
    }

    #[tokio::test]
    async fn test_logical_failure_renders_fallback_error() {
        let responder = Arc::new(ScriptedResponder::new(vec![Ok(ResponderReply::default())]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view);

        let reply = session.submit("Hello").await.unwrap();

        assert!(reply.is_error());
        assert_eq!(reply.sender(), Sender::Bot);
        assert_eq!(reply.text(), FALLBACK_ERROR_TEXT);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_transport_failure_renders_connectivity_error() {
        let responder = Arc::new(ScriptedResponder::new(vec![Err(ResponderError::Network(
            "connection refused".to_string(),
        ))]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view.clone());

        let reply = session.submit("Hello").await.unwrap();

        assert!(reply.is_error());
        assert_eq!(reply.text(), CONNECTIVITY_ERROR_TEXT);
        assert!(!session.is_awaiting_response());
        let state = view.state.lock().unwrap();
        assert!(state.enabled);
        assert!(!state.typing);
    }

    #[tokio::test]
    async fn test_http_status_is_transport_failure() {
        let responder = Arc::new(ScriptedResponder::new(vec![Err(ResponderError::Status(500))]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view);

        let reply = session.submit("Hello").await.unwrap();
        assert_eq!(reply.text(), CONNECTIVITY_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_timeout_is_transport_failure() {
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(Arc::new(HangingResponder), view).with_config(
            SessionConfig::default().with_timeout(Some(Duration::from_millis(20))),
        );

        let reply = session.submit("Hello").await.unwrap();

        assert!(reply.is_error());
        assert_eq!(reply.text(), CONNECTIVITY_ERROR_TEXT);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_empty_input_is_noop() {
        let responder = Arc::new(ScriptedResponder::new(vec![]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder.clone(), view.clone());

        for raw in ["", "   ", "\n\t"] {
            let result = session.submit(raw).await;
            assert!(matches!(result, Err(DomainError::EmptyInput)));
        }

        assert!(session.transcript().is_empty());
        assert!(!session.is_awaiting_response());
        assert!(responder.received().is_empty());
        let state = view.state.lock().unwrap();
        assert!(state.appended.is_empty());
        assert_eq!(state.focus_count, 3);
    }

    // ==================== Busy guard ====================

    #[tokio::test]
    async fn test_begin_sets_awaiting_state_and_view() {
        let responder = Arc::new(ScriptedResponder::new(vec![]));
        let view = Arc::new(RecordingView::with_input("Hello"));
        let mut session = session_with(responder, view.clone());

        let pending = session.begin_exchange("Hello").unwrap();

        assert_eq!(pending.text(), "Hello");
        assert!(session.is_awaiting_response());
        let state = view.state.lock().unwrap();
        assert!(!state.enabled);
        assert!(state.typing);
        assert_eq!(state.input, "");
        assert_eq!(state.appended.len(), 1);
    }

    #[tokio::test]
    async fn test_submission_while_awaiting_is_rejected() {
        let responder = Arc::new(ScriptedResponder::new(vec![]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view.clone());

        let first = session.begin_exchange("first").unwrap();
        let before = session.transcript().len();

        let second = session.begin_exchange("second");

        assert!(matches!(second, Err(DomainError::Busy)));
        assert_eq!(session.transcript().len(), before);
        assert!(session.is_awaiting_response());
        assert_eq!(
            view.state.lock().unwrap().notices,
            vec![BUSY_NOTICE_TEXT.to_string()]
        );

        // The first exchange still completes normally
        let reply = session.complete_exchange(first, ExchangeOutcome::Reply("one".into()));
        assert_eq!(reply.text(), "one");
        let texts: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|m| m.text().to_string())
            .collect();
        assert_eq!(texts, vec!["first", "one"]);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_silent_busy_policy_shows_no_notice() {
        let responder = Arc::new(ScriptedResponder::new(vec![]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view.clone())
            .with_config(SessionConfig::default().with_busy_policy(BusyPolicy::Silent));

        session.begin_exchange("first").unwrap();
        assert!(session.begin_exchange("second").is_err());

        assert!(view.state.lock().unwrap().notices.is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_on_spawned_task() {
        let responder = Arc::new(ScriptedResponder::new(vec![ok("async reply")]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view);

        let pending = session.begin_exchange("Hello").unwrap();
        let dispatcher = session.dispatcher();
        let task_pending = pending.clone();
        let handle = tokio::spawn(async move { dispatcher.dispatch(&task_pending).await });

        // Input arriving meanwhile is rejected
        assert!(session.begin_exchange("again").unwrap_err().is_busy());

        let outcome = handle.await.unwrap();
        session.complete_exchange(pending, outcome);

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().last().unwrap().text(), "async reply");
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_finalization_runs_for_every_outcome() {
        let outcomes = vec![
            ExchangeOutcome::Reply("fine".into()),
            ExchangeOutcome::LogicalFailure {
                text: None,
                reason: None,
            },
            ExchangeOutcome::transport("down"),
        ];

        for outcome in outcomes {
            let view = Arc::new(RecordingView::default());
            let mut session = session_with(Arc::new(ScriptedResponder::new(vec![])), view.clone());

            let pending = session.begin_exchange("Hello").unwrap();
            session.complete_exchange(pending, outcome);

            assert!(!session.is_awaiting_response());
            let state = view.state.lock().unwrap();
            assert!(state.enabled);
            assert!(!state.typing);
            assert_eq!(state.appended.len(), 2);
            drop(state);
            assert!(session.begin_exchange("next").is_ok());
        }
    }

    #[tokio::test]
    async fn test_submit_input_reads_view() {
        let responder = Arc::new(ScriptedResponder::new(vec![ok("Hi")]));
        let view = Arc::new(RecordingView::with_input("  Hello  "));
        let mut session = session_with(responder.clone(), view.clone());

        session.submit_input().await.unwrap();

        assert_eq!(responder.received(), vec!["Hello".to_string()]);
        assert_eq!(view.state.lock().unwrap().input, "");
    }

    // ==================== Lifecycle ====================

    #[tokio::test]
    async fn test_start_renders_welcome() {
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(Arc::new(ScriptedResponder::new(vec![])), view.clone());

        session.start();

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.message_count(), 0);
        assert_eq!(
            session.transcript().last().unwrap().text(),
            DEFAULT_WELCOME_TEXT
        );
        let state = view.state.lock().unwrap();
        assert_eq!(state.rendered.len(), 1);
        assert!(state.enabled);
    }

    #[tokio::test]
    async fn test_reset_confirmed_leaves_single_greeting() {
        let responder = Arc::new(ScriptedResponder::new(vec![ok("a"), ok("b")]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view.clone());
        session.start();
        session.submit("one").await.unwrap();
        session.submit("two").await.unwrap();
        assert_eq!(session.message_count(), 4);

        assert!(session.reset(&AutoConfirm).await);

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.message_count(), 0);
        let greeting = session.transcript().last().unwrap();
        assert_eq!(greeting.text(), RESET_GREETING_TEXT);
        assert_eq!(greeting.sender(), Sender::Bot);
        let rendered = view.state.lock().unwrap().rendered.last().unwrap().clone();
        assert_eq!(rendered.len(), 1);
    }

    #[tokio::test]
    async fn test_reset_declined_keeps_history() {
        let responder = Arc::new(ScriptedResponder::new(vec![ok("a")]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view);
        session.submit("one").await.unwrap();

        assert!(!session.reset(&AutoDecline).await);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.message_count(), 2);
    }

    #[tokio::test]
    async fn test_reset_does_not_touch_awaiting_state() {
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(Arc::new(ScriptedResponder::new(vec![])), view);

        let pending = session.begin_exchange("Hello").unwrap();
        assert!(session.reset(&AutoConfirm).await);
        assert!(session.is_awaiting_response());

        session.complete_exchange(pending, ExchangeOutcome::Reply("late".into()));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.message_count(), 1);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test]
    async fn test_report_connection_lost_completes_exchange() {
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(Arc::new(ScriptedResponder::new(vec![])), view.clone());

        let pending = session.begin_exchange("Hello").unwrap();
        let message = session.report_connection_lost(pending);

        assert_eq!(message.sender(), Sender::System);
        assert!(message.is_error());
        assert_eq!(message.text(), CONNECTION_LOST_TEXT);

        // One user message plus exactly one error reply
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.message_count(), 2);
        assert!(!session.is_awaiting_response());

        let state = view.state.lock().unwrap();
        assert!(state.enabled);
        assert!(!state.typing);
    }

    // ==================== Conversation log ====================

    struct CapturingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ConversationLogger for CapturingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    #[tokio::test]
    async fn test_conversation_events_are_logged() {
        let logger = Arc::new(CapturingLogger {
            events: Mutex::new(Vec::new()),
        });
        let responder = Arc::new(ScriptedResponder::new(vec![
            ok("Hi"),
            Err(ResponderError::Timeout),
        ]));
        let view = Arc::new(RecordingView::default());
        let mut session = session_with(responder, view).with_conversation_logger(logger.clone());

        session.submit("Hello").await.unwrap();
        session.submit("Again").await.unwrap();
        session.reset(&AutoConfirm).await;

        let events = logger.events.lock().unwrap();
        let types: Vec<_> = events.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            types,
            vec![
                "user_message",
                "bot_reply",
                "user_message",
                "exchange_failed",
                "transcript_reset"
            ]
        );
        assert_eq!(events[1].1["text"], "Hi");
        assert_eq!(events[3].1["kind"], "transport_failure");
        assert_eq!(events[3].1["reason"], "Timeout");
    }
}
