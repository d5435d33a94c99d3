use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm::{CompletionRequest, LlmClient};
use crate::message::Message;
use crate::session::AgentReply;
use crate::tools::{ToolDescriptor, ToolRegistry};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    #[error("upstream model request failed: {0}")]
    Upstream(String),
    #[error("model kept calling tools after {0} rounds")]
    ToolRoundsExceeded(u32),
}

/// Boundary between the runtime and whatever produces assistant turns.
#[async_trait]
pub trait ConversationAgent: Send + Sync {
    async fn invoke(&self, messages: &[Message]) -> Result<AgentReply, AdapterError>;
}

/// Agent -> tools -> agent loop over an [`LlmClient`]; stops as soon as the
/// model answers without tool calls.
pub struct ToolCallingAgent<L> {
    llm: L,
    tools: ToolRegistry,
    descriptors: Vec<ToolDescriptor>,
    system_prompt: String,
    max_tool_rounds: u32,
}

impl<L> ToolCallingAgent<L>
where
    L: LlmClient,
{
    pub fn new(
        llm: L,
        tools: ToolRegistry,
        system_prompt: impl Into<String>,
        max_tool_rounds: u32,
    ) -> Self {
        let descriptors = tools.descriptors();
        Self { llm, tools, descriptors, system_prompt: system_prompt.into(), max_tool_rounds }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn tool_descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }
}

#[async_trait]
impl<L> ConversationAgent for ToolCallingAgent<L>
where
    L: LlmClient,
{
    async fn invoke(&self, messages: &[Message]) -> Result<AgentReply, AdapterError> {
        let mut log = messages.to_vec();
        let mut rounds = 0;

        loop {
            let request = CompletionRequest {
                system_prompt: &self.system_prompt,
                messages: &log,
                tools: &self.descriptors,
            };
            let completion = self
                .llm
                .complete(request)
                .await
                .map_err(|error| AdapterError::Upstream(format!("{error:#}")))?;

            let calls = completion.tool_calls.clone();
            log.push(completion.into_message());
            if calls.is_empty() {
                debug!(event_name = "agent.adapter.completed", rounds, "agent turn completed");
                return Ok(AgentReply::FullLog(log));
            }

            if rounds == self.max_tool_rounds {
                return Err(AdapterError::ToolRoundsExceeded(self.max_tool_rounds));
            }
            rounds += 1;

            info!(
                event_name = "agent.adapter.tool_round",
                round = rounds,
                calls = calls.len(),
                "executing tool calls"
            );
            for call in &calls {
                log.push(self.tools.execute(call).await);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::{anyhow, Result};
    use nora_core::ItineraryCatalog;

    use super::{AdapterError, ConversationAgent, ToolCallingAgent};
    use crate::llm::Completion;
    use crate::message::{Message, ToolCall, ToolCallId};
    use crate::session::AgentReply;
    use crate::testing::ScriptedLlm;
    use crate::tools::{FilterItinerariesTool, ToolRegistry};

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::default();
        registry.register(FilterItinerariesTool::new(Arc::new(ItineraryCatalog::sample())));
        registry
    }

    #[tokio::test]
    async fn runs_tools_until_the_model_answers() {
        let llm = Arc::new(ScriptedLlm::new(vec![
            Ok(Completion::calls(vec![ToolCall::new(
                "call_1",
                "filter_itineraries",
                r#"{"weather":["polar"],"activities":["romantic"]}"#,
            )])),
            Ok(Completion::text("Iceland it is!")),
        ]));
        let agent = ToolCallingAgent::new(llm.clone(), registry(), "You are Nora", 3);

        let reply = agent.invoke(&[Message::human("cold and romantic")]).await.expect("turn");
        let AgentReply::FullLog(log) = reply else {
            panic!("tool calling agent returns the full log");
        };

        assert_eq!(log.len(), 4);
        assert_eq!(log[2].result_call_id(), Some(&ToolCallId::new("call_1")));
        assert!(log[2].content().contains("Northern Lights in Iceland"));
        assert_eq!(log[3], Message::assistant("Iceland it is!"));
        assert_eq!(*llm.seen.lock().expect("lock"), vec![1, 3]);
        assert_eq!(agent.tool_descriptors().len(), 1);
    }

    #[tokio::test]
    async fn upstream_failures_surface_as_adapter_errors() {
        let llm = Arc::new(ScriptedLlm::new(vec![Err(anyhow!("connection refused"))]));
        let agent = ToolCallingAgent::new(llm, registry(), "You are Nora", 3);

        let error = agent.invoke(&[Message::human("hola")]).await.expect_err("upstream down");
        assert_eq!(error, AdapterError::Upstream("connection refused".to_string()));
    }

    #[tokio::test]
    async fn tool_rounds_are_bounded() {
        let call = || -> Result<Completion> {
            Ok(Completion::calls(vec![ToolCall::new(
                format!("call_{}", uuid::Uuid::new_v4()),
                "filter_itineraries",
                "{}",
            )]))
        };
        let llm = Arc::new(ScriptedLlm::new(vec![call(), call(), call()]));
        let agent = ToolCallingAgent::new(llm, registry(), "You are Nora", 2);

        let error = agent.invoke(&[Message::human("anything")]).await.expect_err("loops");
        assert_eq!(error, AdapterError::ToolRoundsExceeded(2));
    }
}
