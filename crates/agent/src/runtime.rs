use std::sync::Arc;

use nora_core::ItineraryCatalog;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::adapter::{AdapterError, ConversationAgent};
use crate::message::Message;
use crate::render::{RecommendationBoard, RenderLoop, RenderedCallSet, ScanReport};
use crate::session::{ConversationSession, SessionError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("message is empty")]
    EmptyMessage,
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("agent reply rejected: {0}")]
    InvalidReply(#[from] SessionError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: Option<String>,
    pub scan: ScanReport,
}

/// Owns one conversation: the session log, its render ledger and the agent
/// that answers it.
pub struct AgentRuntime<A> {
    agent: A,
    catalog: Arc<ItineraryCatalog>,
    session: ConversationSession,
    ledger: RenderedCallSet,
}

impl<A> AgentRuntime<A>
where
    A: ConversationAgent,
{
    pub fn new(agent: A, catalog: Arc<ItineraryCatalog>) -> Self {
        Self {
            agent,
            catalog,
            session: ConversationSession::new(),
            ledger: RenderedCallSet::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session.id()
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn ledger(&self) -> &RenderedCallSet {
        &self.ledger
    }

    /// Runs one user turn. On failure the human message stays in the session
    /// so the user can retry; nothing the agent returned is kept.
    pub async fn handle_user_message(
        &mut self,
        text: &str,
        board: &mut dyn RecommendationBoard,
    ) -> Result<TurnOutcome, TurnError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TurnError::EmptyMessage);
        }

        self.session.push_human(text);
        info!(
            event_name = "agent.turn.started",
            session_id = %self.session.id(),
            messages = self.session.len(),
            "user turn started"
        );

        let reply = match self.agent.invoke(self.session.messages()).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(
                    event_name = "agent.turn.failed",
                    session_id = %self.session.id(),
                    error = %error,
                    "agent invocation failed"
                );
                return Err(error.into());
            }
        };

        if let Err(error) = self.session.apply(reply) {
            warn!(
                event_name = "agent.turn.rejected",
                session_id = %self.session.id(),
                error = %error,
                "agent reply broke tool call pairing"
            );
            return Err(error.into());
        }

        let scan = self.rescan(board);
        info!(
            event_name = "agent.turn.completed",
            session_id = %self.session.id(),
            messages = self.session.len(),
            rendered = scan.rendered.len(),
            pending = scan.pending.len(),
            "user turn completed"
        );

        Ok(TurnOutcome { reply: self.session.last_assistant_reply().map(str::to_string), scan })
    }

    /// Walks the whole session again; already settled calls are not redrawn.
    pub fn rescan(&mut self, board: &mut dyn RecommendationBoard) -> ScanReport {
        RenderLoop::new(&self.catalog).scan(self.session.messages(), &mut self.ledger, board)
    }

    pub fn reset(&mut self) {
        let previous = self.session.id();
        self.session.reset();
        self.ledger.clear();
        info!(
            event_name = "agent.session.reset",
            previous_session_id = %previous,
            session_id = %self.session.id(),
            "conversation reset"
        );
    }
}
