use crate::models::{PersonalProfile, MatchResult, ScoreBreakdown, ScoringWeights};
use crate::core::{
    distance::location_distance,
    overlap::{common_interests, preference_overlap},
};

/// Score two profiles with the default 40/20/20/20 weights
pub fn score(a: &PersonalProfile, b: &PersonalProfile) -> MatchResult {
    calculate_match_score(a, b, &ScoringWeights::default())
}

/// Calculate a compatibility score (0-100) for a pair of profiles
///
/// Scoring formula:
/// score = (
///     common / max(len_a, len_b, 1)      * interest    # shared interests
///     max(0, 1 - age_diff / max_age_diff) * age        # within tolerance
///     (1 - distance / max_radius)        * location    # 0 beyond radius
///     matching / total                   * preference  # 0 if either has none
/// )
///
/// Deterministic, never mutates its inputs, and never divides by zero.
pub fn calculate_match_score(
    a: &PersonalProfile,
    b: &PersonalProfile,
    weights: &ScoringWeights,
) -> MatchResult {
    let common = common_interests(&a.interests, &b.interests);
    let interest = interest_score(common.len(), a.interests.len(), b.interests.len(), weights.interest);

    let age_diff = a.age.abs_diff(b.age);
    let max_age_diff = a.preferences.max_age_diff.max(b.preferences.max_age_diff);
    let age = age_score(age_diff, max_age_diff, weights.age);

    let distance_km = location_distance(&a.location, &b.location);
    let max_radius_km = a.preferences.radius_km().max(b.preferences.radius_km());
    let location = location_score(distance_km, max_radius_km, weights.location);

    let (matching_preferences, total_preferences) =
        preference_overlap(&a.partner_preferences, &b.partner_preferences);
    let preference = preference_score(matching_preferences, total_preferences, weights.preference);

    let breakdown = ScoreBreakdown {
        interest,
        age,
        location,
        preference,
        common_interests: common,
        age_diff,
        distance_km,
        matching_preferences,
        total_preferences,
    };

    let total = interest + age + location + preference;

    MatchResult {
        score: total.min(100.0).max(0.0),
        details: format_details(&breakdown, weights),
        breakdown,
    }
}

#[inline]
fn interest_score(common: usize, len_a: usize, len_b: usize, weight: f64) -> f64 {
    let max_interests = len_a.max(len_b).max(1) as f64;
    common as f64 / max_interests * weight
}

/// A non-positive tolerance only accepts an exact age match
#[inline]
fn age_score(age_diff: u32, max_age_diff: f64, weight: f64) -> f64 {
    if max_age_diff.is_nan() || max_age_diff <= 0.0 {
        return if age_diff == 0 { weight } else { 0.0 };
    }

    (1.0 - age_diff as f64 / max_age_diff).max(0.0) * weight
}

/// A non-positive radius only accepts the same place
#[inline]
fn location_score(distance_km: f64, max_radius_km: f64, weight: f64) -> f64 {
    if max_radius_km.is_nan() || max_radius_km <= 0.0 {
        return if distance_km == 0.0 { weight } else { 0.0 };
    }

    if distance_km <= max_radius_km {
        weight * (1.0 - distance_km / max_radius_km)
    } else {
        0.0
    }
}

#[inline]
fn preference_score(matching: usize, total: usize, weight: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    weight * (matching as f64 / total as f64)
}

fn format_details(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> String {
    let common = if breakdown.common_interests.is_empty() {
        "None".to_string()
    } else {
        breakdown.common_interests.join(", ")
    };

    [
        format!(
            "Interest compatibility: {:.1}/{} (Common interests: {})",
            breakdown.interest, weights.interest, common
        ),
        format!(
            "Age compatibility: {:.1}/{} (Age difference: {} years)",
            breakdown.age, weights.age, breakdown.age_diff
        ),
        format!(
            "Location compatibility: {:.1}/{} (Distance: {:.1} km)",
            breakdown.location, weights.location, breakdown.distance_km
        ),
        format!(
            "Preference compatibility: {:.1}/{} (Matching preferences: {}/{})",
            breakdown.preference,
            weights.preference,
            breakdown.matching_preferences,
            breakdown.total_preferences
        ),
    ]
    .join("; ")
}
