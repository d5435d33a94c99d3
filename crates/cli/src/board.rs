//! Terminal rendering of itinerary filter results.

use std::collections::HashMap;
use std::io::Write;

use anyhow::{Context as _, Result};
use nora_agent::{RecommendationBoard, ToolCallId, NO_MATCHES_MESSAGE};
use nora_core::{CriteriaError, ItineraryRecord};
use tera::{Context, Tera};
use tracing::warn;

const ITINERARIES_TEMPLATE: &str = "\
Nora's Board
{% for record in records %}
  {{ record.name }}
    image: {{ record.image }}
    {{ record.description }}
    {{ record.weather | label }} | {{ record.destination | label }} | {{ record.budget | label }} | \
{% for activity in record.activities %}{{ activity | label }}{% if not loop.last %}, {% endif %}{% endfor %}
{% endfor %}";

const NOTICE_TEMPLATE: &str = "Nora's Board\n  {{ message }}\n";

pub struct BoardTemplates {
    tera: Tera,
}

impl BoardTemplates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("label", label_filter);
        tera.add_raw_template("itineraries.txt", ITINERARIES_TEMPLATE)
            .context("itinerary board template is invalid")?;
        tera.add_raw_template("notice.txt", NOTICE_TEMPLATE)
            .context("notice board template is invalid")?;
        Ok(Self { tera })
    }

    pub fn itineraries(&self, records: &[&ItineraryRecord]) -> Result<String> {
        let mut context = Context::new();
        context.insert("records", records);
        Ok(self.tera.render("itineraries.txt", &context)?)
    }

    pub fn notice(&self, message: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("message", message);
        Ok(self.tera.render("notice.txt", &context)?)
    }
}

/// `ultra_luxury` -> `Ultra Luxury`
fn label_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let raw = value.as_str().ok_or_else(|| tera::Error::msg("label filter expects a string"))?;
    let words = raw
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>();
    Ok(tera::Value::String(words.join(" ")))
}

pub struct TerminalBoard<'a, W> {
    templates: &'a BoardTemplates,
    out: W,
}

impl<'a, W: Write> TerminalBoard<'a, W> {
    pub fn new(templates: &'a BoardTemplates, out: W) -> Self {
        Self { templates, out }
    }

    fn emit(&mut self, call_id: &ToolCallId, rendered: Result<String>) {
        let written = rendered.and_then(|text| Ok(writeln!(self.out, "{text}")?));
        if let Err(error) = written {
            warn!(
                event_name = "cli.board.write_failed",
                call_id = %call_id,
                error = %format!("{error:#}"),
                "board output failed"
            );
        }
    }
}

impl<W: Write> RecommendationBoard for TerminalBoard<'_, W> {
    fn show_itineraries(&mut self, call_id: &ToolCallId, records: &[&ItineraryRecord]) {
        let rendered = self.templates.itineraries(records);
        self.emit(call_id, rendered);
    }

    fn show_no_matches(&mut self, call_id: &ToolCallId) {
        let rendered = self.templates.notice(NO_MATCHES_MESSAGE);
        self.emit(call_id, rendered);
    }

    fn show_error(&mut self, call_id: &ToolCallId, error: &CriteriaError) {
        let rendered = self.templates.notice(&format!("Could not apply those filters: {error}"));
        self.emit(call_id, rendered);
    }
}
