use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use nora_core::config::{AppConfig, LoadOptions};
use secrecy::ExposeSecret;
use toml::Value;

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "config",
                "config_validation",
                format!("config validation failed: {error}"),
                2,
            );
        }
    };

    CommandResult::output(render(&config))
}

pub fn render(config: &AppConfig) -> String {
    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let api_key = config
        .llm
        .api_key
        .as_ref()
        .map(|key| redact_token(key.expose_secret()))
        .unwrap_or_else(|| "<unset>".to_string());
    let documents_dir = config
        .retrieval
        .documents_dir
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<unset>".to_string());

    let fields: [(&str, &[&str], String); 13] = [
        ("llm.provider", &["NORA_LLM_PROVIDER"], config.llm.provider.as_str().to_string()),
        ("llm.api_key", &["NORA_LLM_API_KEY"], api_key),
        ("llm.base_url", &["NORA_LLM_BASE_URL"], config.llm.effective_base_url().to_string()),
        ("llm.model", &["NORA_LLM_MODEL"], config.llm.effective_model().to_string()),
        ("llm.temperature", &["NORA_LLM_TEMPERATURE"], config.llm.temperature.to_string()),
        ("llm.timeout_secs", &["NORA_LLM_TIMEOUT_SECS"], config.llm.timeout_secs.to_string()),
        ("llm.max_retries", &["NORA_LLM_MAX_RETRIES"], config.llm.max_retries.to_string()),
        ("agent.persona", &["NORA_AGENT_PERSONA"], config.agent.persona.as_str().to_string()),
        (
            "agent.max_tool_rounds",
            &["NORA_AGENT_MAX_TOOL_ROUNDS"],
            config.agent.max_tool_rounds.to_string(),
        ),
        ("retrieval.documents_dir", &["NORA_RETRIEVAL_DOCUMENTS_DIR"], documents_dir),
        (
            "evaluation.enabled",
            &["NORA_EVALUATION_ENABLED"],
            config.evaluation.enabled.to_string(),
        ),
        (
            "logging.level",
            &["NORA_LOGGING_LEVEL", "NORA_LOG_LEVEL"],
            config.logging.level.clone(),
        ),
        (
            "logging.format",
            &["NORA_LOGGING_FORMAT", "NORA_LOG_FORMAT"],
            format!("{:?}", config.logging.format).to_lowercase(),
        ),
    ];

    let mut lines =
        vec!["effective config (source precedence: env > file > default):".to_string()];
    for (key, env_keys, value) in fields {
        let source =
            field_source(key, env_keys, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(render_line(key, &value, source));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("nora.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/nora.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

fn redact_token(token: &str) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }

    if let Some((prefix, _)) = trimmed.split_once('-') {
        return format!("{prefix}-***");
    }

    "<redacted>".to_string()
}

#[cfg(test)]
mod tests {
    use super::{contains_path, redact_token};

    #[test]
    fn redaction_keeps_only_the_key_prefix() {
        assert_eq!(redact_token("sk-proj-abcdef"), "sk-***");
        assert_eq!(redact_token("gsk_abcdef"), "<redacted>");
        assert_eq!(redact_token("  "), "<empty>");
    }

    #[test]
    fn dotted_paths_resolve_through_tables() {
        let doc: toml::Value = "[llm]\nmodel = \"gpt-4o\"\n".parse().expect("valid toml");
        assert!(contains_path(&doc, "llm.model"));
        assert!(!contains_path(&doc, "llm.api_key"));
        assert!(!contains_path(&doc, "agent.persona"));
    }
}
