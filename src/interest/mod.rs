pub mod flat;
pub mod tiers;

pub use flat::FlatInterestEngine;
pub use tiers::{RateTable, RateTier};
