//! LLM-judged checks over a completed turn.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm::{CompletionRequest, LlmClient};
use crate::message::Message;

const PII_SYSTEM_PROMPT: &str = "You are an expert at identifying Personally Identifiable \
Information (PII) in text. Carefully analyze the provided messages and determine if they \
contain any PII. Reply only with a JSON object of the form \
{\"contains_pii\": <bool>, \"reasoning\": \"<explanation>\"}.";

const TOPIC_SYSTEM_PROMPT: &str = "You are an expert at analyzing conversations and \
identifying unanswered questions or unaddressed topics. Compare the user's input with the \
AI's response and determine if any part of the user's query was not adequately addressed. \
Reply only with a JSON object of the form \
{\"new_topic_detected\": <bool>, \"explanation\": \"<explanation>\"}.";

/// Messages that went into a turn and the messages it produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunRecord {
    pub inputs: Vec<Message>,
    pub outputs: Vec<Message>,
}

impl RunRecord {
    /// Splits a log at its last human message: everything up to it is input,
    /// the visible messages after it are output.
    pub fn from_turn(messages: &[Message]) -> Self {
        let split = messages
            .iter()
            .rposition(|message| matches!(message, Message::Human { .. }))
            .map_or(0, |index| index + 1);

        let outputs =
            messages[split..].iter().filter(|message| message.is_visible()).cloned().collect();
        Self { inputs: messages[..split].to_vec(), outputs }
    }

    fn is_incomplete(&self) -> bool {
        self.inputs.is_empty() || self.outputs.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub key: &'static str,
    pub score: Option<f64>,
    pub comment: Option<String>,
}

impl EvaluationResult {
    fn skipped(key: &'static str) -> Self {
        Self { key, score: None, comment: None }
    }
}

#[async_trait]
pub trait RunEvaluator: Send + Sync {
    fn key(&self) -> &'static str;
    async fn evaluate(&self, run: &RunRecord) -> Result<EvaluationResult>;
}

#[derive(Debug, Deserialize)]
struct PiiVerdict {
    contains_pii: bool,
    reasoning: String,
}

pub struct PiiEvaluator<L> {
    llm: L,
}

impl<L> PiiEvaluator<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl<L> RunEvaluator for PiiEvaluator<L>
where
    L: LlmClient,
{
    fn key(&self) -> &'static str {
        "pii"
    }

    async fn evaluate(&self, run: &RunRecord) -> Result<EvaluationResult> {
        if run.is_incomplete() {
            return Ok(EvaluationResult::skipped(self.key()));
        }

        let question = format!(
            "Please analyze the following messages for any PII:\n{}",
            transcript(&run.inputs)
        );
        let verdict: PiiVerdict = ask(&self.llm, PII_SYSTEM_PROMPT, question).await?;

        Ok(EvaluationResult {
            key: self.key(),
            score: Some(if verdict.contains_pii { 1.0 } else { 0.0 }),
            comment: Some(verdict.reasoning),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TopicVerdict {
    new_topic_detected: bool,
    explanation: String,
}

pub struct TopicEvaluator<L> {
    llm: L,
}

impl<L> TopicEvaluator<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl<L> RunEvaluator for TopicEvaluator<L>
where
    L: LlmClient,
{
    fn key(&self) -> &'static str {
        "new_topic"
    }

    async fn evaluate(&self, run: &RunRecord) -> Result<EvaluationResult> {
        if run.is_incomplete() {
            return Ok(EvaluationResult::skipped(self.key()));
        }

        let question = format!(
            "Analyze the following conversation:\n\n\
             User Input: {}\n\n\
             AI Response: {}\n\n\
             Determine if there's any part of the user's input that wasn't adequately addressed \
             in the AI response. Focus on:\n\
             1. Specific questions left unanswered\n\
             2. Topics or subjects mentioned by the user but not discussed in the response\n\
             3. Requests for information that were not fulfilled",
            transcript(&run.inputs),
            transcript(&run.outputs),
        );
        let verdict: TopicVerdict = ask(&self.llm, TOPIC_SYSTEM_PROMPT, question).await?;

        Ok(EvaluationResult {
            key: self.key(),
            score: Some(if verdict.new_topic_detected { 1.0 } else { 0.0 }),
            comment: Some(verdict.explanation),
        })
    }
}

/// Runs every evaluator and logs its outcome. One failing evaluator does not
/// stop the others.
pub async fn evaluate_all(
    evaluators: &[Box<dyn RunEvaluator>],
    run: &RunRecord,
) -> Vec<EvaluationResult> {
    let mut results = Vec::with_capacity(evaluators.len());
    for evaluator in evaluators {
        match evaluator.evaluate(run).await {
            Ok(result) => {
                info!(
                    event_name = "agent.evaluation.completed",
                    key = result.key,
                    score = ?result.score,
                    comment = result.comment.as_deref().unwrap_or(""),
                    "run evaluated"
                );
                results.push(result);
            }
            Err(error) => {
                warn!(
                    event_name = "agent.evaluation.failed",
                    key = evaluator.key(),
                    error = %format!("{error:#}"),
                    "run evaluation failed"
                );
            }
        }
    }
    results
}

async fn ask<L, T>(llm: &L, system_prompt: &str, question: String) -> Result<T>
where
    L: LlmClient,
    T: DeserializeOwned,
{
    let messages = [Message::human(question)];
    let completion = llm
        .complete(CompletionRequest { system_prompt, messages: &messages, tools: &[] })
        .await?;
    parse_verdict(&completion.content)
}

/// Accepts a bare JSON object or one wrapped in prose or a code fence.
fn parse_verdict<T: DeserializeOwned>(content: &str) -> Result<T> {
    let start = content.find('{');
    let end = content.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    };
    serde_json::from_str(json)
        .with_context(|| format!("evaluator reply is not the expected JSON: {content}"))
}

fn transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|message| {
            let role = match message {
                Message::Human { .. } => "human",
                Message::Assistant { .. } => "ai",
                Message::ToolResult { .. } => "tool",
            };
            format!("{role}: {}", message.content())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
