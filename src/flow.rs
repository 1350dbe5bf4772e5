//! Client side of a translation: validate, send once, keep the latest answer.

use std::sync::Arc;
use log::{debug, warn};
use crate::models::TranslationResult;
use crate::services::translator::{TranslateError, Translator};
use crate::utils::is_blank;

pub const EMPTY_INPUT_TITLE: &str = "Please enter some text";
pub const EMPTY_INPUT_DESCRIPTION: &str = "The input text cannot be empty";
pub const ERROR_TITLE: &str = "Error";

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn empty_input() -> Self {
        Notice {
            title: EMPTY_INPUT_TITLE.to_string(),
            description: EMPTY_INPUT_DESCRIPTION.to_string(),
        }
    }

    fn from_error(err: &TranslateError) -> Self {
        Notice {
            title: ERROR_TITLE.to_string(),
            description: err.to_string(),
        }
    }
}

/// Identifies one submission; only the most recent one may land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Pending,
    Ready(TranslationResult),
    Failed(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input failed validation; nothing was sent
    Rejected(Notice),
    Translated(TranslationResult),
    Failed(Notice),
    /// A newer submission replaced this one before it finished
    Superseded,
}

pub struct TranslationFlow {
    gateway: Arc<dyn Translator>,
    state: FlowState,
    issued: u64,
}

impl TranslationFlow {
    pub fn new(gateway: Arc<dyn Translator>) -> Self {
        TranslationFlow {
            gateway,
            state: FlowState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Validate input and open a new submission, superseding any in flight
    pub fn begin(&mut self, text: &str) -> Result<Ticket, Notice> {
        if is_blank(text) {
            return Err(Notice::empty_input());
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = FlowState::Pending;
        Ok(ticket)
    }

    /// Land the gateway's answer for `ticket`
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<TranslationResult, TranslateError>,
    ) -> Outcome {
        if ticket.0 != self.issued {
            debug!("Discarding result of superseded request {:?}", ticket);
            return Outcome::Superseded;
        }
        match result {
            Ok(translation) => {
                self.state = FlowState::Ready(translation.clone());
                Outcome::Translated(translation)
            }
            Err(err) => {
                warn!("Translation failed: {}", err);
                let notice = Notice::from_error(&err);
                self.state = FlowState::Failed(notice.clone());
                Outcome::Failed(notice)
            }
        }
    }

    /// Validate, send exactly one request, and record the outcome
    pub async fn submit(&mut self, text: &str) -> Outcome {
        let ticket = match self.begin(text) {
            Ok(ticket) => ticket,
            Err(notice) => return Outcome::Rejected(notice),
        };
        let result = self.gateway.translate(text).await;
        self.complete(ticket, result)
    }

    /// Drop the current result; anything still in flight lands as superseded
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = FlowState::Idle;
    }
}
