use crate::models::{PersonalProfile, MatchResult, ScoredCandidate, ScoringWeights};
use crate::core::scoring::calculate_match_score;

/// Result of ranking candidates for one seeker
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Ranks candidate profiles against a seeker
///
/// # Pipeline Stages
/// 1. Self exclusion (same `user_id` as the seeker)
/// 2. Pairwise compatibility scoring
/// 3. Minimum score cut-off
/// 4. Ranking by score, then distance
///
/// Each candidate is scored independently of the others.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            min_score: 0.0,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Drop candidates scoring below `min_score`
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single pair with this matcher's weights
    pub fn score_pair(&self, a: &PersonalProfile, b: &PersonalProfile) -> MatchResult {
        calculate_match_score(a, b, &self.weights)
    }

    /// Rank candidates for a seeker
    ///
    /// Ties on score are broken by distance (closer first), then by input
    /// order.
    ///
    /// # Arguments
    /// * `seeker` - The profile matches are computed for
    /// * `candidates` - Profiles to rank
    /// * `limit` - Maximum number of matches to return
    pub fn rank(
        &self,
        seeker: &PersonalProfile,
        candidates: Vec<PersonalProfile>,
        limit: usize,
    ) -> RankOutcome {
        let total_candidates = candidates.len();

        let mut scored_matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| !is_same_user(seeker, candidate))
            .filter_map(|candidate| {
                let result = self.score_pair(seeker, &candidate);

                if result.score < self.min_score {
                    return None;
                }

                Some(ScoredCandidate {
                    user_id: candidate.user_id,
                    name: candidate.name,
                    age: candidate.age,
                    location: candidate.location,
                    distance_km: result.breakdown.distance_km,
                    match_score: result.score,
                    common_interests: result.breakdown.common_interests,
                    details: result.details,
                })
            })
            .collect();

        // Sort by score (descending) and then by distance (ascending)
        scored_matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        scored_matches.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for {}",
            scored_matches.len(),
            total_candidates,
            seeker.name
        );

        RankOutcome {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn is_same_user(seeker: &PersonalProfile, candidate: &PersonalProfile) -> bool {
    matches!(
        (&seeker.user_id, &candidate.user_id),
        (Some(a), Some(b)) if a == b
    )
}
