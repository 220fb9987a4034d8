//! Query interfaces for the yugiohprices.com endpoints.
//!
//! Each query struct borrows the [`YugiohPrices`](crate::YugiohPrices) client
//! and exposes async lookups keyed by card name.

pub mod cards;
pub mod prices;

pub use cards::CardQuery;
pub use prices::PriceQuery;
