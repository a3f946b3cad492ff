// Session cache module.
// Keeps fetched repository lists and README extracts for the life of the
// process so a tab revisit does not refetch.

pub mod store;

pub use store::{DEFAULT_TTL, MemoryCache, ShowcaseCache};
