use std::collections::BTreeSet;

use thiserror::Error;
use uuid::Uuid;

use crate::message::{Message, ToolCallId};

/// What an agent adapter hands back after a turn. Some adapters return the
/// whole updated log, others only the messages they produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentReply {
    FullLog(Vec<Message>),
    Delta(Vec<Message>),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("tool result `{0}` does not answer any earlier tool call")]
    OrphanToolResult(ToolCallId),
    #[error("tool call `{0}` has more than one tool result")]
    DuplicateToolResult(ToolCallId),
}

#[derive(Clone, Debug)]
pub struct ConversationSession {
    id: Uuid,
    messages: Vec<Message>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), messages: Vec::new() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_human(&mut self, content: impl Into<String>) {
        self.messages.push(Message::human(content));
    }

    /// Normalizes an adapter reply into the authoritative log. A reply that
    /// breaks call/result pairing is rejected and the log is left untouched.
    pub fn apply(&mut self, reply: AgentReply) -> Result<(), SessionError> {
        let next = match reply {
            AgentReply::FullLog(messages) => messages,
            AgentReply::Delta(delta) => {
                let mut combined = self.messages.clone();
                combined.extend(delta);
                combined
            }
        };

        check_pairing(&next)?;
        self.messages = next;
        Ok(())
    }

    /// Latest assistant text after the most recent human message.
    pub fn last_assistant_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .take_while(|message| !matches!(message, Message::Human { .. }))
            .find(|message| matches!(message, Message::Assistant { .. }) && message.is_visible())
            .map(Message::content)
    }

    pub fn visible_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|message| message.is_visible())
    }

    /// Starts over with a fresh id and an empty log.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Every tool result must answer a call issued earlier in the log, at most once.
pub fn check_pairing(messages: &[Message]) -> Result<(), SessionError> {
    let mut issued = BTreeSet::new();
    let mut answered = BTreeSet::new();

    for message in messages {
        match message {
            Message::Assistant { tool_calls, .. } => {
                issued.extend(tool_calls.iter().map(|call| call.id.clone()));
            }
            Message::ToolResult { call_id, .. } => {
                if !issued.contains(call_id) {
                    return Err(SessionError::OrphanToolResult(call_id.clone()));
                }
                if !answered.insert(call_id.clone()) {
                    return Err(SessionError::DuplicateToolResult(call_id.clone()));
                }
            }
            Message::Human { .. } => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AgentReply, ConversationSession, SessionError};
    use crate::message::{Message, ToolCall, ToolCallId};

    fn call(id: &str) -> ToolCall {
        ToolCall::new(id, "filter_itineraries", "{}")
    }

    #[test]
    fn full_log_replaces_and_delta_extends() {
        let mut session = ConversationSession::new();
        session.push_human("show me beaches");

        session
            .apply(AgentReply::Delta(vec![Message::assistant("Here are some beaches!")]))
            .expect("delta is valid");
        assert_eq!(session.len(), 2);

        let replacement = vec![
            Message::human("show me beaches"),
            Message::assistant_with_calls("", vec![call("call_1")]),
            Message::tool_result(ToolCallId::new("call_1"), "[]"),
            Message::assistant("Nothing matched."),
        ];
        session.apply(AgentReply::FullLog(replacement.clone())).expect("full log is valid");
        assert_eq!(session.messages(), replacement.as_slice());
        assert_eq!(session.last_assistant_reply(), Some("Nothing matched."));
    }

    #[test]
    fn orphan_and_duplicate_results_are_rejected_without_mutation() {
        let mut session = ConversationSession::new();
        session.push_human("hello");

        let orphan = session.apply(AgentReply::Delta(vec![Message::tool_result(
            ToolCallId::new("call_9"),
            "[]",
        )]));
        assert_eq!(orphan, Err(SessionError::OrphanToolResult(ToolCallId::new("call_9"))));

        let duplicate = session.apply(AgentReply::Delta(vec![
            Message::assistant_with_calls("", vec![call("call_1")]),
            Message::tool_result(ToolCallId::new("call_1"), "[]"),
            Message::tool_result(ToolCallId::new("call_1"), "[]"),
        ]));
        assert_eq!(duplicate, Err(SessionError::DuplicateToolResult(ToolCallId::new("call_1"))));

        assert_eq!(session.messages(), &[Message::human("hello")]);
    }

    #[test]
    fn last_reply_ignores_previous_turns() {
        let mut session = ConversationSession::new();
        session
            .apply(AgentReply::FullLog(vec![
                Message::human("first"),
                Message::assistant("first answer"),
                Message::human("second"),
            ]))
            .expect("valid log");

        assert_eq!(session.last_assistant_reply(), None);
        assert_eq!(session.visible_messages().count(), 3);
    }

    #[test]
    fn reset_issues_a_new_session_id() {
        let mut session = ConversationSession::new();
        let before = session.id();
        session.push_human("hello");
        session.reset();

        assert!(session.is_empty());
        assert_ne!(session.id(), before);
    }
}
