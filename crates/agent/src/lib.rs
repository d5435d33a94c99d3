//! Agent runtime - tool-calling conversation loop and recommendation rendering
//!
//! This crate drives a Nora conversation:
//! - Keeps the authoritative message log for a session (`session`)
//! - Calls a chat-completions model that may request tool calls (`llm`, `openai`)
//! - Executes requested tools and feeds results back to the model (`adapter`, `tools`)
//! - Renders each paired itinerary filter call exactly once (`render`)
//!
//! # Turn flow
//!
//! 1. **Append** the user message to the session
//! 2. **Invoke** the agent adapter; it loops model -> tools -> model
//! 3. **Normalize** the returned log into the session, rejecting replies that
//!    break call/result pairing
//! 4. **Scan** the session and render newly paired `filter_itineraries` calls
//!
//! # Key Types
//!
//! - `AgentRuntime` - one conversation: session, ledger and agent (see `runtime`)
//! - `ToolCallingAgent` - the model/tool loop behind `ConversationAgent`
//! - `RenderedCallSet` - per-session record of rendered filter calls
//! - `LlmClient` - pluggable model client; `OpenAiCompatibleClient` covers OpenAI and Groq
//!
//! # Rendering Principle
//!
//! The model only proposes filter arguments. Which itineraries match is always
//! decided by the catalog's filter engine, and the board never shows the same
//! call twice however often the session is re-scanned.

pub mod adapter;
pub mod evaluators;
pub mod llm;
pub mod message;
pub mod openai;
pub mod prompts;
pub mod render;
pub mod runtime;
pub mod session;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{AdapterError, ConversationAgent, ToolCallingAgent};
pub use message::{Message, ToolCall, ToolCallId};
pub use render::{RecommendationBoard, RenderedCallSet, ScanReport, NO_MATCHES_MESSAGE};
pub use runtime::{AgentRuntime, TurnError, TurnOutcome};
pub use session::{AgentReply, ConversationSession, SessionError};
