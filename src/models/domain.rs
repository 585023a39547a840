use serde::{Deserialize, Serialize};
use crate::core::distance::DEFAULT_SEARCH_RADIUS_KM;

/// One side of a pairwise match evaluation, already normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfile {
    #[serde(default, alias = "user_id")]
    pub user_id: Option<String>,
    pub name: String,
    pub age: u32,
    pub interests: Vec<String>,
    pub location: String,
    pub preferences: MatchPreferences,
    #[serde(default, alias = "partner_preferences")]
    pub partner_preferences: Vec<PartnerPreference>,
}

impl PersonalProfile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        interests: &[&str],
        location: impl Into<String>,
        max_age_diff: f64,
    ) -> Self {
        Self {
            user_id: None,
            name: name.into(),
            age,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            location: location.into(),
            preferences: MatchPreferences {
                max_age_diff,
                search_radius: None,
            },
            partner_preferences: Vec::new(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_search_radius(mut self, radius_km: f64) -> Self {
        self.preferences.search_radius = Some(radius_km);
        self
    }

    pub fn with_partner_preferences(mut self, preferences: Vec<PartnerPreference>) -> Self {
        self.partner_preferences = preferences;
        self
    }

    /// First whitespace-separated word of the display name, "Unknown" if blank
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("Unknown")
    }

    /// Last word of the display name, empty for single-word names
    pub fn last_name(&self) -> &str {
        let mut words = self.name.split_whitespace();
        let first = words.next();
        match (first, words.last()) {
            (Some(_), Some(last)) => last,
            _ => "",
        }
    }
}

/// Tolerances a profile declares for its partner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPreferences {
    #[serde(alias = "max_age_diff")]
    pub max_age_diff: f64,
    #[serde(default, alias = "search_radius")]
    pub search_radius: Option<f64>,
}

impl MatchPreferences {
    /// Search radius in km, falling back to the default of 10
    #[inline]
    pub fn radius_km(&self) -> f64 {
        self.search_radius.unwrap_or(DEFAULT_SEARCH_RADIUS_KM)
    }
}

/// A single answered partner-preference question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPreference {
    pub category: String,
    #[serde(alias = "selected_option")]
    pub selected_option: String,
}

impl PartnerPreference {
    pub fn new(category: impl Into<String>, selected_option: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            selected_option: selected_option.into(),
        }
    }
}

/// Per-component points and the facts that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub interest: f64,
    pub age: f64,
    pub location: f64,
    pub preference: f64,
    pub common_interests: Vec<String>,
    pub age_diff: u32,
    pub distance_km: f64,
    pub matching_preferences: usize,
    pub total_preferences: usize,
}

/// Result of scoring one pair of profiles
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Always within [0, 100]
    pub score: f64,
    pub details: String,
    pub breakdown: ScoreBreakdown,
}

/// Candidate ranked against a seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub name: String,
    pub age: u32,
    pub location: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "commonInterests")]
    pub common_interests: Vec<String>,
    pub details: String,
}

/// Maximum points per scoring component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub interest: f64,
    pub age: f64,
    pub location: f64,
    pub preference: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 40.0,
            age: 20.0,
            location: 20.0,
            preference: 20.0,
        }
    }
}
