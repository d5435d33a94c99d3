pub mod client;
pub mod documents;
pub mod itinerary;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::message::{Message, ToolCall};

pub use client::GetClientInfoTool;
pub use documents::{
    CompanyDocument, DocumentRetriever, KeywordRetriever, RetrieveCompanyDocsTool,
};
pub use itinerary::FilterItinerariesTool;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// JSON schema of the argument object.
    fn parameters(&self) -> Value;
    async fn execute(&self, input: Value) -> Result<Value>;

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// What the model is told about a tool.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The closed set of tools this application knows how to host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    FilterItineraries,
    GetClientInfo,
    RetrieveCompanyDocs,
}

impl ToolKind {
    pub const ALL: [Self; 3] =
        [Self::FilterItineraries, Self::GetClientInfo, Self::RetrieveCompanyDocs];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FilterItineraries => "filter_itineraries",
            Self::GetClientInfo => "get_client_info",
            Self::RetrieveCompanyDocs => "retrieve_company_docs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registers a tool, replacing any earlier tool with the same name.
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.retain(|existing| existing.name() != tool.name());
        self.tools.push(Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|tool| tool.name() == name).map(|tool| tool.as_ref())
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Runs one call and wraps the outcome as its tool-result message.
    /// Failures are reported back to the model as `Error: ...` content.
    pub async fn execute(&self, call: &ToolCall) -> Message {
        let content = match self.run(call).await {
            Ok(Value::String(text)) => text,
            Ok(value) => value.to_string(),
            Err(error) => {
                warn!(
                    event_name = "agent.tool.failed",
                    call_id = %call.id,
                    tool = %call.name,
                    error = %error,
                    "tool call failed"
                );
                format!("Error: {error:#}")
            }
        };

        Message::tool_result(call.id.clone(), content)
    }

    async fn run(&self, call: &ToolCall) -> Result<Value> {
        let Some(tool) = self.get(&call.name) else {
            anyhow::bail!(
                "{} is not a valid tool, try one of [{}]",
                call.name,
                self.names().join(", ")
            );
        };

        let input = serde_json::from_str::<Value>(&call.arguments)
            .map_err(|error| anyhow::anyhow!("invalid arguments for {}: {error}", call.name))?;

        debug!(
            event_name = "agent.tool.execute",
            call_id = %call.id,
            tool = %call.name,
            "executing tool"
        );
        tool.execute(input).await
    }

    fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
