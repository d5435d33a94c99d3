pub mod board;
pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};
use nora_core::config::Persona;
use nora_core::{Activity, Budget, Destination, FilterCriteria, Weather};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "nora",
    about = "Nora travel recommendation assistant",
    long_about = "Chat with the Nora travel agent, or run the itinerary filter and inspect \
                  configuration offline.",
    after_help = "Examples:\n  nora chat\n  nora chat --persona assistant\n  \
                  nora filter --weather tropical --activities adventure,wildlife\n  \
                  nora catalog --json\n  nora config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Start an interactive chat session with the travel agent")]
    Chat {
        #[arg(long, help = "Override the configured persona (recommendations or assistant)")]
        persona: Option<Persona>,
    },
    #[command(about = "Filter the itinerary catalog without calling the language model")]
    Filter {
        #[arg(long, value_delimiter = ',', help = "Accepted weather values")]
        weather: Vec<Weather>,
        #[arg(long, value_delimiter = ',', help = "Accepted destination values")]
        destination: Vec<Destination>,
        #[arg(long, value_delimiter = ',', help = "Activities of which at least one must match")]
        activities: Vec<Activity>,
        #[arg(long, value_delimiter = ',', help = "Accepted budget values")]
        budget: Vec<Budget>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List every itinerary in the sample catalog")]
    Catalog {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Chat { persona } => commands::chat::run(persona),
        Command::Filter { weather, destination, activities, budget, json } => {
            let criteria = FilterCriteria::default()
                .with_weather(weather)
                .with_destination(destination)
                .with_activities(activities)
                .with_budget(budget);
            commands::filter::run(criteria, json)
        }
        Command::Catalog { json } => commands::catalog::run(json),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use nora_core::{Activity, Weather};

    #[test]
    fn filter_flags_accept_comma_separated_values() {
        let cli = Cli::try_parse_from([
            "nora",
            "filter",
            "--weather",
            "tropical",
            "--activities",
            "adventure,wildlife",
        ])
        .expect("filter arguments should parse");

        let Command::Filter { weather, activities, destination, json, .. } = cli.command else {
            panic!("expected the filter command");
        };
        assert_eq!(weather, vec![Weather::Tropical]);
        assert_eq!(activities, vec![Activity::Adventure, Activity::Wildlife]);
        assert!(destination.is_empty());
        assert!(!json);
    }

    #[test]
    fn unknown_attribute_values_are_rejected() {
        let result = Cli::try_parse_from(["nora", "filter", "--weather", "humid"]);
        assert!(result.is_err());
    }

    #[test]
    fn persona_flag_parses_known_personas() {
        let cli = Cli::try_parse_from(["nora", "chat", "--persona", "assistant"])
            .expect("persona should parse");
        assert!(matches!(
            cli.command,
            Command::Chat { persona: Some(nora_core::config::Persona::Assistant) }
        ));
    }
}
