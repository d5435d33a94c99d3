use anyhow::{Context, Result};
use async_trait::async_trait;
use nora_core::ClientDirectory;
use serde_json::{json, Value};

use super::{Tool, ToolKind};

/// Mock customer lookup over a [`ClientDirectory`].
pub struct GetClientInfoTool {
    directory: ClientDirectory,
}

impl GetClientInfoTool {
    pub fn new(directory: ClientDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl Tool for GetClientInfoTool {
    fn name(&self) -> &'static str {
        ToolKind::GetClientInfo.name()
    }

    fn description(&self) -> &'static str {
        "Retrieves client information for TechnoVerde S.A. customers \
         based on the provided client ID"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "client_id": {
                    "type": "string",
                    "description": "The unique identifier of the client",
                },
            },
            "required": ["client_id"],
            "additionalProperties": false,
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let client_id = input
            .get("client_id")
            .and_then(Value::as_str)
            .context("client_id is required and must be a string")?;

        let profile = self.directory.lookup(client_id)?;
        Ok(serde_json::to_value(profile)?)
    }
}

#[cfg(test)]
mod tests {
    use nora_core::ClientDirectory;
    use serde_json::json;

    use super::GetClientInfoTool;
    use crate::tools::Tool;

    #[tokio::test]
    async fn looks_up_seeded_clients() {
        let tool = GetClientInfoTool::new(ClientDirectory::sample());
        let output = tool.execute(json!({ "client_id": "TV003" })).await.expect("TV003 exists");

        assert_eq!(output["name"], "Ana Martínez");
        assert_eq!(output["sustainability_score"], 7.8);
    }

    #[tokio::test]
    async fn unknown_or_missing_ids_fail() {
        let tool = GetClientInfoTool::new(ClientDirectory::sample());

        let unknown = tool.execute(json!({ "client_id": "TV404" })).await.expect_err("unknown");
        assert_eq!(unknown.to_string(), "client with ID TV404 not found");

        let missing = tool.execute(json!({})).await.expect_err("missing id");
        assert!(missing.to_string().contains("client_id is required"));
    }
}
