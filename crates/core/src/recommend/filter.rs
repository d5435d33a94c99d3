use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::itinerary::{
    Activity, Attribute, AttributeParseError, Budget, Destination, ItineraryRecord, Weather,
};

/// Attribute constraints for one `filter_itineraries` invocation.
///
/// `None` and an empty set both mean "no constraint on this attribute".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<BTreeSet<Weather>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<BTreeSet<Destination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<BTreeSet<Activity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BTreeSet<Budget>>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("filter arguments are not valid JSON: {0}")]
    InvalidJson(String),
    #[error("filter arguments must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("unknown filter field `{0}` (expected weather|destination|activities|budget)")]
    UnknownField(String),
    #[error("filter field `{field}` must be a string or a list of strings, found {found}")]
    InvalidFieldType { field: &'static str, found: &'static str },
    #[error(transparent)]
    InvalidValue(#[from] AttributeParseError),
}

impl FilterCriteria {
    pub const FIELDS: [&'static str; 4] = ["weather", "destination", "activities", "budget"];

    /// Validates a raw tool-call argument payload.
    pub fn from_arguments(payload: &str) -> Result<Self, CriteriaError> {
        let value = serde_json::from_str::<Value>(payload)
            .map_err(|error| CriteriaError::InvalidJson(error.to_string()))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, CriteriaError> {
        let Some(fields) = value.as_object() else {
            return Err(CriteriaError::NotAnObject(json_kind(value)));
        };

        let mut criteria = Self::default();
        for (key, field_value) in fields {
            match key.as_str() {
                "weather" => criteria.weather = parse_field("weather", field_value)?,
                "destination" => criteria.destination = parse_field("destination", field_value)?,
                "activities" => criteria.activities = parse_field("activities", field_value)?,
                "budget" => criteria.budget = parse_field("budget", field_value)?,
                other => return Err(CriteriaError::UnknownField(other.to_string())),
            }
        }

        Ok(criteria)
    }

    pub fn with_weather(mut self, values: impl IntoIterator<Item = Weather>) -> Self {
        self.weather = non_empty(values);
        self
    }

    pub fn with_destination(mut self, values: impl IntoIterator<Item = Destination>) -> Self {
        self.destination = non_empty(values);
        self
    }

    pub fn with_activities(mut self, values: impl IntoIterator<Item = Activity>) -> Self {
        self.activities = non_empty(values);
        self
    }

    pub fn with_budget(mut self, values: impl IntoIterator<Item = Budget>) -> Self {
        self.budget = non_empty(values);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.weather.is_none()
            && self.destination.is_none()
            && self.activities.is_none()
            && self.budget.is_none()
    }

    /// Categories combine with AND; activities match when any requested one is offered.
    pub fn matches(&self, record: &ItineraryRecord) -> bool {
        admits(&self.weather, &record.weather)
            && admits(&self.destination, &record.destination)
            && admits(&self.budget, &record.budget)
            && match &self.activities {
                Some(wanted) if !wanted.is_empty() => record.offers_any(wanted.iter().copied()),
                _ => true,
            }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            describe("weather", &self.weather),
            describe("destination", &self.destination),
            describe("activities", &self.activities),
            describe("budget", &self.budget),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        if parts.is_empty() {
            return f.write_str("no filters");
        }
        f.write_str(&parts.join("; "))
    }
}

fn admits<T: Ord>(constraint: &Option<BTreeSet<T>>, value: &T) -> bool {
    match constraint {
        Some(allowed) if !allowed.is_empty() => allowed.contains(value),
        _ => true,
    }
}

fn non_empty<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<BTreeSet<T>> {
    let set = values.into_iter().collect::<BTreeSet<_>>();
    (!set.is_empty()).then_some(set)
}

fn parse_field<T: Attribute>(
    field: &'static str,
    value: &Value,
) -> Result<Option<BTreeSet<T>>, CriteriaError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => Ok(Some(BTreeSet::from([T::parse_attribute(raw)?]))),
        Value::Array(items) => {
            let mut parsed = BTreeSet::new();
            for item in items {
                let Some(raw) = item.as_str() else {
                    return Err(CriteriaError::InvalidFieldType { field, found: json_kind(item) });
                };
                parsed.insert(T::parse_attribute(raw)?);
            }
            Ok((!parsed.is_empty()).then_some(parsed))
        }
        other => Err(CriteriaError::InvalidFieldType { field, found: json_kind(other) }),
    }
}

fn describe<T: Attribute>(label: &str, values: &Option<BTreeSet<T>>) -> Option<String> {
    let values = values.as_ref().filter(|values| !values.is_empty())?;
    let names = values.iter().map(Attribute::as_str).collect::<Vec<_>>();
    Some(format!("{label}={}", names.join("|")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
