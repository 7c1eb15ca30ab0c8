//! Like/pass decisions on discovery candidates.

mod model;

pub use model::{Decision, DecisionMap};
