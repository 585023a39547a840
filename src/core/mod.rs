// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod overlap;
pub mod scoring;

pub use distance::{haversine_distance, location_distance, resolve_city, Coordinates};
pub use matcher::{Matcher, RankOutcome};
pub use overlap::{common_interests, preference_overlap};
pub use scoring::{calculate_match_score, score};
