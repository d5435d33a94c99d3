use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use nora_core::{CriteriaError, ItineraryId, ItineraryRecord};

use crate::llm::{Completion, CompletionRequest, LlmClient};
use crate::message::ToolCallId;
use crate::render::RecommendationBoard;

/// Replays canned completions in order and records the message count of
/// every request it receives.
#[derive(Default)]
pub(crate) struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<Completion>>>,
    pub(crate) seen: Mutex<Vec<usize>>,
    pub(crate) prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub(crate) fn new(replies: Vec<Result<Completion>>) -> Self {
        Self { replies: Mutex::new(replies.into()), ..Self::default() }
    }

    pub(crate) fn requests(&self) -> usize {
        self.seen.lock().expect("lock").len()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<Completion> {
        self.seen.lock().expect("lock").push(request.messages.len());
        let last = request.messages.last().map(|message| message.content().to_string());
        self.prompts.lock().expect("lock").push(last.unwrap_or_default());
        self.replies
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("script exhausted")))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BoardEvent {
    Itineraries(String, Vec<ItineraryId>),
    NoMatches(String),
    Error(String),
}

#[derive(Default)]
pub(crate) struct RecordingBoard {
    pub(crate) events: Vec<BoardEvent>,
}

impl RecommendationBoard for RecordingBoard {
    fn show_itineraries(&mut self, call_id: &ToolCallId, records: &[&ItineraryRecord]) {
        let ids = records.iter().map(|record| record.id).collect();
        self.events.push(BoardEvent::Itineraries(call_id.to_string(), ids));
    }

    fn show_no_matches(&mut self, call_id: &ToolCallId) {
        self.events.push(BoardEvent::NoMatches(call_id.to_string()));
    }

    fn show_error(&mut self, call_id: &ToolCallId, _error: &CriteriaError) {
        self.events.push(BoardEvent::Error(call_id.to_string()));
    }
}

pub(crate) fn ids(raw: &[u32]) -> Vec<ItineraryId> {
    raw.iter().copied().map(ItineraryId).collect()
}
