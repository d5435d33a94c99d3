use nora_agent::NO_MATCHES_MESSAGE;
use nora_core::{FilterCriteria, ItineraryCatalog, ItineraryRecord};
use serde::Serialize;

use crate::board::BoardTemplates;
use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct FilterReport<'a> {
    criteria: &'a FilterCriteria,
    count: usize,
    matches: Vec<&'a ItineraryRecord>,
}

/// Offline run of the filter engine over the sample catalog.
pub fn run(criteria: FilterCriteria, json: bool) -> CommandResult {
    let catalog = ItineraryCatalog::sample();
    let matches = catalog.filter(&criteria);

    if json {
        let report = FilterReport { criteria: &criteria, count: matches.len(), matches };
        return match serde_json::to_string_pretty(&report) {
            Ok(output) => CommandResult::output(output),
            Err(error) => CommandResult::failure("filter", "serialization", error.to_string(), 1),
        };
    }

    let templates = match BoardTemplates::new() {
        Ok(templates) => templates,
        Err(error) => {
            return CommandResult::failure("filter", "template", format!("{error:#}"), 1);
        }
    };
    let rendered = if matches.is_empty() {
        templates.notice(NO_MATCHES_MESSAGE)
    } else {
        templates.itineraries(&matches)
    };

    match rendered {
        Ok(board) => CommandResult::output(format!(
            "filters: {criteria} ({} of {} itineraries)\n\n{board}",
            matches.len(),
            catalog.len()
        )),
        Err(error) => CommandResult::failure("filter", "template", format!("{error:#}"), 1),
    }
}
