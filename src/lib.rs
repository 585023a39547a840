//! LoveFi Match - compatibility scoring for the LoveFi dating app
//!
//! This library provides the pairwise compatibility scorer, the candidate
//! ranker built on it, and the HTTP surface that exposes both.

pub mod config;
pub mod core;
pub mod fixtures;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, RankOutcome, calculate_match_score, score, distance::{haversine_distance, location_distance}};
pub use models::{PersonalProfile, MatchPreferences, PartnerPreference, MatchResult, ScoringWeights, MatchRequest, MatchResponse, ProfileError};
