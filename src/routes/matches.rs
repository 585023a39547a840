use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;
use crate::models::{
    normalize_profile, ErrorResponse, HealthResponse, MatchRequest, MatchResponse, PersonalProfile,
    ProfileError, RankRequest, RankResponse,
};
use crate::core::Matcher;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/score", web::post().to(score_match))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

fn profile_rejected(request_id: Uuid, err: ProfileError) -> HttpResponse {
    tracing::warn!(request_id = %request_id, "Rejected profile input: {}", err);
    validation_failed(err.to_string())
}

/// Score two profiles
///
/// POST /api/v1/match/score
///
/// Request body:
/// ```json
/// {
///   "profile1": { "personalInfo": { "firstName": "Alice" }, "age": 25, ... },
///   "profile2": { ... }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();

    let (first, second) = match req.to_profiles(Utc::now().date_naive()) {
        Ok(profiles) => profiles,
        Err(e) => return profile_rejected(request_id, e),
    };

    let result = state.matcher.score_pair(&first, &second);

    tracing::info!(
        request_id = %request_id,
        "Calculated match score for {} and {}: {:.1}/100",
        first.name,
        second.name,
        result.score
    );

    HttpResponse::Ok().json(MatchResponse::from(result))
}

/// Rank candidates for a seeker
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "seeker": { ... },
///   "candidates": [{ ... }],
///   "limit": 20
/// }
/// ```
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();

    if let Err(errors) = req.validate() {
        tracing::info!(request_id = %request_id, "Validation failed for rank request: {:?}", errors);
        return validation_failed(errors.to_string());
    }

    let today = Utc::now().date_naive();

    let seeker = match normalize_profile(&req.seeker, "seeker", today) {
        Ok(profile) => profile,
        Err(e) => return profile_rejected(request_id, e),
    };

    let candidates: Result<Vec<PersonalProfile>, ProfileError> = req
        .candidates
        .iter()
        .enumerate()
        .map(|(i, bundle)| normalize_profile(bundle, &format!("candidates[{}]", i), today))
        .collect();
    let candidates = match candidates {
        Ok(candidates) => candidates,
        Err(e) => return profile_rejected(request_id, e),
    };

    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;

    tracing::info!(
        request_id = %request_id,
        "Ranking {} candidates for {}, limit: {}",
        candidates.len(),
        seeker.name,
        limit
    );

    let outcome = state.matcher.rank(&seeker, candidates, limit);

    HttpResponse::Ok().json(RankResponse {
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
    })
}
