// Data layer exports
pub mod error;
pub mod filters;
pub mod projection;
pub mod relationships;
pub mod search;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use filters::{equals_ignore_case, matches_age_range, matches_criteria};
pub use projection::{AccountView, ProfileView};
pub use relationships::RelationshipTracker;
pub use search::ProfileQueryEngine;
pub use store::RecordStore;
