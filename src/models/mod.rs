// Model exports
pub mod domain;
pub mod normalize;
pub mod requests;
pub mod responses;

pub use domain::{PersonalProfile, MatchPreferences, PartnerPreference, MatchResult, ScoreBreakdown, ScoredCandidate, ScoringWeights};
pub use normalize::{normalize_profile, ProfileError};
pub use requests::{MatchRequest, ProfileBundle, PersonalInfoBundle, LocationBundle, PreferenceBundle, RankRequest};
pub use responses::{MatchResponse, RankResponse, HealthResponse, ErrorResponse};
