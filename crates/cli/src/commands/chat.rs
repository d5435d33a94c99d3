use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use nora_agent::evaluators::{
    evaluate_all, PiiEvaluator, RunEvaluator, RunRecord, TopicEvaluator,
};
use nora_agent::openai::OpenAiCompatibleClient;
use nora_agent::prompts::{self, ToolDependencies};
use nora_agent::tools::{DocumentRetriever, KeywordRetriever};
use nora_agent::{AgentRuntime, ConversationAgent, ToolCallingAgent, TurnError};
use nora_core::config::{AppConfig, ConfigOverrides, LoadOptions, Persona};
use nora_core::{ApplicationError, ClientDirectory, DomainError, ItineraryCatalog};
use tracing::info;

use crate::board::{BoardTemplates, TerminalBoard};
use crate::commands::CommandResult;
use crate::logging::init_logging;

const PROMPT: &str = "you> ";

pub fn run(persona: Option<Persona>) -> CommandResult {
    let options = LoadOptions {
        overrides: ConfigOverrides { persona, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("chat", "config_validation", error.to_string(), 2);
        }
    };

    if let Err(error) = init_logging(&config.logging) {
        eprintln!("{error:#}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure("chat", "runtime_init", error.to_string(), 1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match runtime.block_on(start(config, stdin.lock(), stdout.lock())) {
        Ok(turns) => CommandResult::success("chat", format!("session ended after {turns} turns")),
        Err(error) => CommandResult::failure("chat", "chat_failed", format!("{error:#}"), 1),
    }
}

async fn start(config: AppConfig, input: impl BufRead, mut output: impl Write) -> Result<usize> {
    let persona = config.agent.persona;
    let llm = Arc::new(OpenAiCompatibleClient::from_config(&config.llm)?);
    let catalog = Arc::new(ItineraryCatalog::sample());

    let retriever: Arc<dyn DocumentRetriever> = match &config.retrieval.documents_dir {
        Some(dir) => Arc::new(KeywordRetriever::from_dir(dir)?),
        None => Arc::new(KeywordRetriever::default()),
    };
    let dependencies = ToolDependencies {
        catalog: catalog.clone(),
        clients: ClientDirectory::sample(),
        retriever,
    };

    let agent = ToolCallingAgent::new(
        llm.clone(),
        prompts::registry_for(persona, &dependencies),
        prompts::system_prompt(persona),
        config.agent.max_tool_rounds,
    );

    let evaluators: Vec<Box<dyn RunEvaluator>> = if config.evaluation.enabled {
        vec![Box::new(PiiEvaluator::new(llm.clone())), Box::new(TopicEvaluator::new(llm))]
    } else {
        Vec::new()
    };

    info!(
        event_name = "cli.chat.started",
        persona = persona.as_str(),
        provider = config.llm.provider.as_str(),
        model = config.llm.effective_model(),
        evaluators = evaluators.len(),
        "chat session started"
    );

    writeln!(
        output,
        "Chatting with Nora ({}). /reset starts over, /quit exits.",
        persona.as_str()
    )?;
    let mut runtime = AgentRuntime::new(agent, catalog);
    run_repl(&mut runtime, &evaluators, input, &mut output).await
}

/// Reads one message per line until `/quit` or end of input and returns the
/// number of completed turns.
pub async fn run_repl<A, R, W>(
    runtime: &mut AgentRuntime<A>,
    evaluators: &[Box<dyn RunEvaluator>],
    input: R,
    output: &mut W,
) -> Result<usize>
where
    A: ConversationAgent,
    R: BufRead,
    W: Write,
{
    let templates = BoardTemplates::new()?;
    let mut turns = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                runtime.reset();
                writeln!(output, "Starting over.")?;
                continue;
            }
            _ => {}
        }

        let mut board = TerminalBoard::new(&templates, &mut *output);
        let outcome = runtime.handle_user_message(&line, &mut board).await;
        match outcome {
            Err(TurnError::EmptyMessage) => continue,
            Ok(outcome) => {
                turns += 1;
                if let Some(reply) = outcome.reply {
                    writeln!(output, "nora> {reply}")?;
                }
                if !evaluators.is_empty() {
                    evaluate_all(evaluators, &RunRecord::from_turn(runtime.messages())).await;
                }
            }
            Err(error) => {
                let interface =
                    turn_failure(error).into_interface(runtime.session_id().to_string());
                writeln!(
                    output,
                    "nora> {} (ref {})",
                    interface.user_message(),
                    interface.correlation_id()
                )?;
            }
        }
    }

    Ok(turns)
}

fn turn_failure(error: TurnError) -> ApplicationError {
    match error {
        TurnError::Adapter(error) => ApplicationError::Integration(error.to_string()),
        other => DomainError::InvariantViolation(other.to_string()).into(),
    }
}
