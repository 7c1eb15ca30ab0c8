//! Project domain models.
//!
//! Projects are the personal works-in-progress shown on the profile page.

mod model;

pub use model::{Project, ProjectPatch, Stage, VideoRef, sample_projects};
