pub mod config;
pub mod domain;
pub mod errors;
pub mod recommend;

pub use domain::client::{ClientDirectory, ClientId, ClientProfile};
pub use domain::itinerary::{
    Activity, Attribute, AttributeParseError, Budget, Destination, ItineraryId, ItineraryRecord,
    Weather,
};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use recommend::{CriteriaError, FilterCriteria, ItineraryCatalog};
