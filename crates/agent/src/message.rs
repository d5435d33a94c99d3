use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToolCallId(pub String);

impl ToolCallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolCallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A function call emitted by the assistant. `arguments` is the raw JSON
/// payload exactly as the model produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: ToolCallId,
    pub name: String,
    pub arguments: String,
}

impl ToolCall {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self { id: ToolCallId::new(id), name: name.into(), arguments: arguments.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    Human {
        content: String,
    },
    Assistant {
        content: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tool_calls: Vec<ToolCall>,
    },
    ToolResult {
        call_id: ToolCallId,
        content: String,
    },
}

impl Message {
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human { content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant { content: content.into(), tool_calls: Vec::new() }
    }

    pub fn assistant_with_calls(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self::Assistant { content: content.into(), tool_calls }
    }

    pub fn tool_result(call_id: ToolCallId, content: impl Into<String>) -> Self {
        Self::ToolResult { call_id, content: content.into() }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Human { content }
            | Self::Assistant { content, .. }
            | Self::ToolResult { content, .. } => content,
        }
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Self::Assistant { tool_calls, .. } => tool_calls,
            Self::Human { .. } | Self::ToolResult { .. } => &[],
        }
    }

    pub fn result_call_id(&self) -> Option<&ToolCallId> {
        match self {
            Self::ToolResult { call_id, .. } => Some(call_id),
            Self::Human { .. } | Self::Assistant { .. } => None,
        }
    }

    /// Human and assistant messages with text are shown in the transcript;
    /// tool traffic and tool-call-only assistant turns are not.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Human { content } | Self::Assistant { content, .. } => !content.trim().is_empty(),
            Self::ToolResult { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, ToolCall, ToolCallId};

    #[test]
    fn serializes_with_role_tag() {
        let message = Message::assistant_with_calls(
            "",
            vec![ToolCall::new("call_1", "filter_itineraries", r#"{"weather":"polar"}"#)],
        );
        let encoded = serde_json::to_value(&message).expect("serialize message");

        assert_eq!(encoded["role"], "assistant");
        assert_eq!(encoded["tool_calls"][0]["id"], "call_1");

        let decoded: Message = serde_json::from_value(encoded).expect("deserialize message");
        assert_eq!(decoded, message);
    }

    #[test]
    fn visibility_hides_tool_traffic_and_empty_turns() {
        assert!(Message::human("hola").is_visible());
        assert!(!Message::assistant("  ").is_visible());
        assert!(!Message::tool_result(ToolCallId::new("call_1"), "[]").is_visible());
        assert_eq!(
            Message::tool_result(ToolCallId::new("call_2"), "[]").result_call_id(),
            Some(&ToolCallId::new("call_2"))
        );
    }
}
