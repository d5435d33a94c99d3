use std::sync::Arc;

use nora_core::config::Persona;
use nora_core::{
    Activity, Attribute, Budget, ClientDirectory, Destination, ItineraryCatalog, Weather,
};

use crate::tools::{
    DocumentRetriever, FilterItinerariesTool, GetClientInfoTool, RetrieveCompanyDocsTool,
    ToolKind, ToolRegistry,
};

const ASSISTANT_PROMPT: &str = "Be a helpful assistant";

const NORA_PROMPT: &str = "\
You are Nora, a proactive and enthusiastic sales agent. Your primary goal is to help guests \
find their ideal itinerary.

Core responsibilities:
- Take the initiative. Do not wait for the guest to ask for recommendations; start showing \
options right away with the filter_itineraries tool, using a single filter at first.
- Use a friendly, engaging tone that builds excitement about the itineraries.
- Keep answers short.
- Your main task is to get the guest to pick one itinerary.

Conversation tips:
- When the guest shows interest, guide them towards the missing details (weather, \
destination, activities, budget).
- When they are unsure, offer to explore other combinations of filters.
- Do not use markdown; answer in natural language.
- Do not list the itineraries returned by the tool. Mention a few of them in a sales tone, \
explain the filters you applied and try to convince the guest to pick one.

Using the filter_itineraries tool:
Call the tool once per interaction with one or more filters. Each category accepts several \
values. Available options:
{options}

If the guest asks for different itineraries, call the tool again from scratch with updated \
arguments. Always try to showcase filtered itineraries; they are your main selling tool. \
Adapt your pitch to the filtered results and the guest's preferences.";

/// Shared state the persona tools are built from.
#[derive(Clone)]
pub struct ToolDependencies {
    pub catalog: Arc<ItineraryCatalog>,
    pub clients: ClientDirectory,
    pub retriever: Arc<dyn DocumentRetriever>,
}

pub fn system_prompt(persona: Persona) -> String {
    match persona {
        Persona::Recommendations => NORA_PROMPT.replace("{options}", &option_lines()),
        Persona::Assistant => ASSISTANT_PROMPT.to_string(),
    }
}

pub fn tool_kinds(persona: Persona) -> &'static [ToolKind] {
    match persona {
        Persona::Recommendations => &[ToolKind::FilterItineraries],
        Persona::Assistant => &[ToolKind::RetrieveCompanyDocs, ToolKind::GetClientInfo],
    }
}

pub fn registry_for(persona: Persona, dependencies: &ToolDependencies) -> ToolRegistry {
    let mut registry = ToolRegistry::default();
    for kind in tool_kinds(persona) {
        match kind {
            ToolKind::FilterItineraries => {
                registry.register(FilterItinerariesTool::new(dependencies.catalog.clone()));
            }
            ToolKind::GetClientInfo => {
                registry.register(GetClientInfoTool::new(dependencies.clients.clone()));
            }
            ToolKind::RetrieveCompanyDocs => {
                registry.register(RetrieveCompanyDocsTool::new(dependencies.retriever.clone()));
            }
        }
    }
    registry
}

fn option_lines() -> String {
    [
        option_line::<Weather>("Weather"),
        option_line::<Destination>("Destination"),
        option_line::<Activity>("Activities"),
        option_line::<Budget>("Budget"),
    ]
    .join("\n")
}

fn option_line<T: Attribute>(label: &str) -> String {
    format!("- {label}: {}", T::wire_names().join(", "))
}
