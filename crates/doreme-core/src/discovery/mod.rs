//! Discovery ("Find") feed: filtering and sequential navigation over the
//! candidate pool.
//!
//! The visible list is always derived from the pool, the decision map and the
//! active filters; nothing caches it between calls.

mod filter;
mod paginator;

pub use filter::{DiscoveryFilters, visible_candidates};
pub use paginator::{DecisionOutcome, Discovery, DiscoveryView};
