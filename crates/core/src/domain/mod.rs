pub mod client;
pub mod itinerary;
