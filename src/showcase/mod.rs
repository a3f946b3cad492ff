// Showcase pipeline module.
// Turns a GitHub user's public repositories into display-ready portfolio
// projects: fetch the list, pull README extracts under rate-limit pacing,
// derive project records, and select the pinned set.

pub mod fetch;
pub mod pinned;
pub mod readme;
pub mod transform;

pub use fetch::cached_repositories;
pub use pinned::pinned_repositories;
pub use transform::{PacingConfig, Project, convert_to_projects};
