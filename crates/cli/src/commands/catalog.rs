use nora_core::ItineraryCatalog;

use crate::commands::CommandResult;

pub fn run(json: bool) -> CommandResult {
    let catalog = ItineraryCatalog::sample();

    if json {
        return match serde_json::to_string_pretty(catalog.records()) {
            Ok(output) => CommandResult::output(output),
            Err(error) => CommandResult::failure("catalog", "serialization", error.to_string(), 1),
        };
    }

    let mut lines = vec![format!("{} itineraries:", catalog.len())];
    lines.extend(catalog.records().iter().map(|record| {
        let activities =
            record.activities.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        format!(
            "{:>3}. {} [{} / {} / {}] {}",
            record.id.0, record.name, record.weather, record.destination, record.budget, activities
        )
    }));
    CommandResult::output(lines.join("\n"))
}
