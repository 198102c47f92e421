//! API endpoint implementations

pub mod catalog;
pub mod offers;
pub mod orders;

pub use catalog::CatalogEndpoints;
pub use offers::OffersEndpoints;
pub use orders::OrdersEndpoints;
