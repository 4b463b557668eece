// src/state/mod.rs
use crate::api::{ApiClient, AskResponse, PendingRequest, ProcessResponse};
use crate::config::Settings;
use crate::utils::flatten_answer;

// Core application state
#[derive(Debug)]
pub struct AppState {
    client: ApiClient,

    // Form inputs
    pub video_url: String,
    pub question: String,

    // Results, each held until replaced by a later success
    pub processed: Option<ProcessResponse>,
    pub answer: Option<String>,

    // Minimal UI state
    pub error_message: Option<String>,

    // Request tracking, one slot per form
    pending_process: Option<PendingRequest<ProcessResponse>>,
    pending_ask: Option<PendingRequest<AskResponse>>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: ApiClient::new(&settings.api_url),
            video_url: String::new(),
            question: String::new(),
            processed: None,
            answer: None,
            error_message: None,
            pending_process: None,
            pending_ask: None,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.pending_process.is_some()
    }

    pub fn is_answering(&self) -> bool {
        self.pending_ask.is_some()
    }

    pub fn has_pending_request(&self) -> bool {
        self.is_processing() || self.is_answering()
    }

    // Trigger predicates for the two submit buttons.
    pub fn can_submit_video(&self) -> bool {
        !self.is_processing() && !self.video_url.is_empty()
    }

    pub fn can_submit_question(&self) -> bool {
        !self.is_answering() && !self.question.is_empty()
    }

    /// Kick off the processing request for the current URL.
    pub fn submit_video(&mut self) {
        if self.is_processing() {
            return;
        }
        if self.video_url.trim().is_empty() {
            self.error_message = Some("Please enter a YouTube URL".to_string());
            return;
        }

        self.error_message = None;
        self.pending_process = Some(self.client.spawn_process(self.video_url.clone()));
    }

    /// Kick off the ask request for the current question. Inert until a
    /// processing response has been received.
    pub fn submit_question(&mut self) {
        if self.is_answering() {
            return;
        }
        let doc_id = match &self.processed {
            Some(processed) => processed.doc_id.clone(),
            None => return,
        };
        if self.question.trim().is_empty() {
            self.error_message = Some("Please enter a question".to_string());
            return;
        }

        self.error_message = None;
        self.pending_ask = Some(self.client.spawn_ask(self.question.clone(), doc_id));
    }

    /// Drain finished requests. Called once per frame; a failure leaves
    /// the previously held result untouched.
    pub fn poll_requests(&mut self) {
        if let Some(result) = self.pending_process.as_ref().and_then(PendingRequest::poll) {
            self.pending_process = None;
            match result {
                Ok(response) => self.processed = Some(response),
                Err(e) => {
                    self.error_message = Some(format!("Failed to process video: {}", e));
                }
            }
        }

        if let Some(result) = self.pending_ask.as_ref().and_then(PendingRequest::poll) {
            self.pending_ask = None;
            match result {
                Ok(response) => self.answer = Some(flatten_answer(&response.answer)),
                Err(e) => {
                    self.error_message = Some(format!("Failed to get answer: {}", e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::api::{ApiError, AskResponse, PendingRequest, ProcessResponse};
    use crate::config::Settings;
    use reqwest::StatusCode;

    // Requests are injected through the pending slots, so the client
    // never dials this address.
    fn test_state() -> AppState {
        AppState::new(&Settings {
            api_url: "http://127.0.0.1:9".to_string(),
        })
    }

    fn processed_video() -> ProcessResponse {
        ProcessResponse {
            doc_id: "d1".to_string(),
            title: "t1".to_string(),
        }
    }

    #[test]
    fn empty_url_is_rejected_without_a_request() {
        let mut state = test_state();
        state.video_url = "   ".to_string();

        state.submit_video();

        assert!(!state.is_processing());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please enter a YouTube URL")
        );
    }

    #[test]
    fn empty_question_is_rejected_without_a_request() {
        let mut state = test_state();
        state.processed = Some(processed_video());
        state.question = " ".to_string();

        state.submit_question();

        assert!(!state.is_answering());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please enter a question")
        );
    }

    #[test]
    fn question_is_inert_without_a_processed_video() {
        let mut state = test_state();
        state.question = "what is it about?".to_string();

        state.submit_question();

        assert!(!state.is_answering());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn successful_process_response_unlocks_the_question_form() {
        let mut state = test_state();
        state.video_url = "https://youtu.be/abc".to_string();

        let (tx, pending) = PendingRequest::test_pair();
        state.pending_process = Some(pending);
        assert!(state.is_processing());
        assert!(!state.can_submit_video());

        tx.send(Ok(processed_video())).unwrap();
        state.poll_requests();

        assert!(!state.is_processing());
        assert!(state.can_submit_video());
        let processed = state.processed.expect("video should be processed");
        assert_eq!(processed.title, "t1");
        assert_eq!(processed.doc_id, "d1");
    }

    #[test]
    fn process_failure_keeps_prior_state() {
        let mut state = test_state();
        state.video_url = "https://youtu.be/abc".to_string();

        let (tx, pending) = PendingRequest::test_pair();
        state.pending_process = Some(pending);
        tx.send(Err(ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        }))
        .unwrap();
        state.poll_requests();

        assert!(!state.is_processing());
        assert!(state.processed.is_none());
        let message = state.error_message.expect("failure should be surfaced");
        assert!(message.starts_with("Failed to process video:"));
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn answer_newlines_are_flattened() {
        let mut state = test_state();
        state.processed = Some(processed_video());

        let (tx, pending) = PendingRequest::test_pair();
        state.pending_ask = Some(pending);
        tx.send(Ok(AskResponse {
            answer: "line1\nline2".to_string(),
        }))
        .unwrap();
        state.poll_requests();

        assert_eq!(state.answer.as_deref(), Some("line1 line2"));
        assert!(!state.is_answering());
    }

    #[test]
    fn ask_failure_keeps_previous_answer() {
        let mut state = test_state();
        state.processed = Some(processed_video());
        state.answer = Some("previous answer".to_string());

        let (tx, pending) = PendingRequest::test_pair();
        state.pending_ask = Some(pending);
        tx.send(Err(ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        }))
        .unwrap();
        state.poll_requests();

        assert_eq!(state.answer.as_deref(), Some("previous answer"));
        let message = state.error_message.expect("failure should be surfaced");
        assert!(message.starts_with("Failed to get answer:"));
    }

    #[test]
    fn question_trigger_tracks_text_and_in_flight_request() {
        let mut state = test_state();
        state.processed = Some(processed_video());
        assert!(!state.can_submit_question());

        state.question = "why?".to_string();
        assert!(state.can_submit_question());

        let (_tx, pending) = PendingRequest::test_pair();
        state.pending_ask = Some(pending);
        assert!(!state.can_submit_question());
    }

    #[test]
    fn new_submission_replaces_the_error_banner() {
        let mut state = test_state();
        state.video_url = "  ".to_string();
        state.submit_video();
        assert!(state.error_message.is_some());

        // A later valid submission clears the banner when it starts.
        state.processed = Some(processed_video());
        state.question = "why?".to_string();
        state.submit_question();
        assert!(state.error_message.is_none());
        assert!(state.is_answering());
    }
}
