use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItineraryId(pub u32);

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported {attribute} value `{value}` (expected {expected})")]
pub struct AttributeParseError {
    pub attribute: &'static str,
    pub value: String,
    pub expected: String,
}

/// Closed vocabulary for one itinerary attribute.
///
/// The wire name of every variant is its snake_case spelling; that is the
/// form the model sees in tool schemas and the form accepted back in
/// tool-call arguments.
pub trait Attribute: Copy + Ord + Sized + 'static {
    const NAME: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse_attribute(value: &str) -> Result<Self, AttributeParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|candidate| candidate.as_str() == normalized).ok_or_else(
            || AttributeParseError {
                attribute: Self::NAME,
                value: value.to_string(),
                expected: Self::ALL.iter().map(Attribute::as_str).collect::<Vec<_>>().join("|"),
            },
        )
    }

    fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Attribute::as_str).collect()
    }
}

macro_rules! attribute_enum {
    ($name:ident, $label:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl Attribute for $name {
            const NAME: &'static str = $label;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AttributeParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse_attribute(value)
            }
        }
    };
}

attribute_enum!(Weather, "weather", {
    Tropical => "tropical",
    Temperate => "temperate",
    Polar => "polar",
});

attribute_enum!(Destination, "destination", {
    Beach => "beach",
    Mountain => "mountain",
    City => "city",
    Countryside => "countryside",
    Island => "island",
});

attribute_enum!(Activity, "activity", {
    Adventure => "adventure",
    Relaxation => "relaxation",
    Cultural => "cultural",
    Family => "family",
    Romantic => "romantic",
    Wildlife => "wildlife",
    Entertainment => "entertainment",
    Sports => "sports",
    Wellness => "wellness",
});

attribute_enum!(Budget, "budget", {
    Economy => "economy",
    Standard => "standard",
    Premium => "premium",
    Luxury => "luxury",
    UltraLuxury => "ultra_luxury",
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryRecord {
    pub id: ItineraryId,
    pub name: String,
    pub weather: Weather,
    pub destination: Destination,
    pub activities: Vec<Activity>,
    pub budget: Budget,
    pub description: String,
    pub image: String,
}

impl ItineraryRecord {
    pub fn offers_any(&self, wanted: impl IntoIterator<Item = Activity>) -> bool {
        wanted.into_iter().any(|activity| self.activities.contains(&activity))
    }
}

#[cfg(test)]
mod tests {
    use super::{Activity, Attribute, Budget, Destination, Weather};

    #[test]
    fn wire_names_round_through_from_str() {
        assert_eq!("ultra_luxury".parse::<Budget>(), Ok(Budget::UltraLuxury));
        assert_eq!(" Tropical ".parse::<Weather>(), Ok(Weather::Tropical));
        assert_eq!(Destination::Countryside.to_string(), "countryside");
    }

    #[test]
    fn unknown_value_names_the_attribute_and_vocabulary() {
        let error = "arctic".parse::<Weather>().expect_err("arctic is not a weather");
        assert_eq!(error.attribute, "weather");
        assert_eq!(error.expected, "tropical|temperate|polar");
        assert!(error.to_string().contains("`arctic`"));
    }

    #[test]
    fn vocabularies_match_serde_spelling() {
        for activity in Activity::ALL {
            let encoded = serde_json::to_value(activity).expect("serialize activity");
            assert_eq!(encoded, activity.as_str());
        }
        assert_eq!(Budget::wire_names().len(), 5);
    }
}
