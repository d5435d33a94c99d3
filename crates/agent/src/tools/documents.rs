use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::{Tool, ToolKind};

const NO_DOCUMENTS: &str = "No relevant company documents found.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompanyDocument {
    pub title: String,
    pub body: String,
}

#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<CompanyDocument>>;
}

/// Term-overlap ranking over an in-memory document set.
#[derive(Clone, Debug, Default)]
pub struct KeywordRetriever {
    documents: Vec<CompanyDocument>,
}

impl KeywordRetriever {
    pub fn new(documents: Vec<CompanyDocument>) -> Self {
        Self { documents }
    }

    /// Loads every `.md` and `.txt` file in `dir`; the file stem becomes the title.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("could not read documents directory `{}`", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let supported = path
                .extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| matches!(extension, "md" | "txt"));
            if path.is_file() && supported {
                paths.push(path);
            }
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let body = fs::read_to_string(&path)
                .with_context(|| format!("could not read document `{}`", path.display()))?;
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
                .unwrap_or_default();
            documents.push(CompanyDocument { title, body });
        }

        info!(
            event_name = "agent.retrieval.loaded",
            documents = documents.len(),
            dir = %dir.display(),
            "company documents loaded"
        );
        Ok(Self::new(documents))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn score(document: &CompanyDocument, terms: &[String]) -> usize {
        let haystack = format!("{} {}", document.title, document.body).to_lowercase();
        let words = tokenize(&haystack);
        terms.iter().map(|term| words.iter().filter(|word| *word == term).count()).sum()
    }
}

#[async_trait]
impl DocumentRetriever for KeywordRetriever {
    async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<CompanyDocument>> {
        let terms = tokenize(&query.to_lowercase())
            .into_iter()
            .filter(|term| term.chars().count() > 2)
            .collect::<Vec<_>>();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut ranked = self
            .documents
            .iter()
            .map(|document| (Self::score(document, &terms), document))
            .filter(|(score, _)| *score > 0)
            .collect::<Vec<_>>();
        // stable: ties keep load order
        ranked.sort_by(|left, right| right.0.cmp(&left.0));

        Ok(ranked.into_iter().take(limit).map(|(_, document)| document.clone()).collect())
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|character: char| !character.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct RetrieveCompanyDocsTool {
    retriever: Arc<dyn DocumentRetriever>,
    limit: usize,
}

impl RetrieveCompanyDocsTool {
    pub fn new(retriever: Arc<dyn DocumentRetriever>) -> Self {
        Self { retriever, limit: 4 }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }
}

#[async_trait]
impl Tool for RetrieveCompanyDocsTool {
    fn name(&self) -> &'static str {
        ToolKind::RetrieveCompanyDocs.name()
    }

    fn description(&self) -> &'static str {
        "Search and return information about the company documents"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "query to look up in the documents" },
            },
            "required": ["query"],
            "additionalProperties": false,
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let query = input
            .get("query")
            .and_then(Value::as_str)
            .context("query is required and must be a string")?;

        let documents = self.retriever.retrieve(query, self.limit).await?;
        if documents.is_empty() {
            return Ok(Value::String(NO_DOCUMENTS.to_string()));
        }

        let joined = documents
            .iter()
            .map(|document| format!("{}\n{}", document.title, document.body.trim()))
            .collect::<Vec<_>>()
            .join("\n\n");
        Ok(Value::String(joined))
    }
}
