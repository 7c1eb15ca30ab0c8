//! Musician (discovery candidate) domain models.

mod catalog;
mod model;

pub use catalog::default_musicians;
pub use model::{Ability, Musician, PortfolioItem};
