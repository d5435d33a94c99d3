pub mod catalog;
pub mod filter;
mod fixtures;

pub use catalog::ItineraryCatalog;
pub use filter::{CriteriaError, FilterCriteria};
