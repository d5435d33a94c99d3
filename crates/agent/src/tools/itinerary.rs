use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use nora_core::{
    Activity, Attribute, Budget, Destination, FilterCriteria, ItineraryCatalog, Weather,
};
use serde_json::{json, Value};

use super::{Tool, ToolKind};

pub struct FilterItinerariesTool {
    catalog: Arc<ItineraryCatalog>,
}

impl FilterItinerariesTool {
    pub fn new(catalog: Arc<ItineraryCatalog>) -> Self {
        Self { catalog }
    }
}

fn enum_array<T: Attribute>(description: &str) -> Value {
    json!({
        "type": "array",
        "description": description,
        "items": { "type": "string", "enum": T::wire_names() },
    })
}

#[async_trait]
impl Tool for FilterItinerariesTool {
    fn name(&self) -> &'static str {
        ToolKind::FilterItineraries.name()
    }

    fn description(&self) -> &'static str {
        "Filter travel itineraries by weather, destination type, activities and budget. \
         Every argument is optional and accepts several values; an itinerary matches when \
         it satisfies all given categories and offers at least one of the given activities."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "weather": enum_array::<Weather>("Desired weather condition(s)"),
                "destination": enum_array::<Destination>("Desired destination type(s)"),
                "activities": enum_array::<Activity>("Desired activities; any one is enough"),
                "budget": enum_array::<Budget>("Desired budget level(s)"),
            },
            "additionalProperties": false,
        })
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let criteria = FilterCriteria::from_value(&input)?;
        let matched = self.catalog.filter(&criteria);
        Ok(serde_json::to_value(matched)?)
    }
}
