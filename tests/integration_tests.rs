// Integration tests for LoveFi Match

use actix_web::{test, web, App};
use lovefi_match::core::Matcher;
use lovefi_match::models::{ErrorResponse, MatchResponse, RankResponse};
use lovefi_match::routes::{configure_extractors, configure_routes, AppState};
use serde_json::{json, Value};

fn app_state() -> AppState {
    AppState::new(Matcher::with_default_weights())
}

fn bundle(id: &str, first_name: &str, age: u32, interests: &[&str], address: &str, max_age_diff: f64) -> Value {
    json!({
        "userId": id,
        "personalInfo": { "firstName": first_name, "lastName": "", "birthday": "" },
        "gender": "not_specified",
        "age": age,
        "location": { "address": address, "searchRadius": 10 },
        "personalInterests": interests,
        "partnerPreferences": [],
        "maxAgeDiff": max_age_diff
    })
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_extractors)
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_score_endpoint() {
    let app = init_app!();

    let payload = json!({
        "profile1": bundle("a", "Charlie", 30, &["movies", "travel", "photography"], "San Francisco", 8.0),
        "profile2": bundle("b", "Diana", 28, &["travel", "photography", "art"], "San Francisco", 6.0),
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(&payload)
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;

    assert!((resp.score - 61.67).abs() < 0.01, "got {}", resp.score);
    assert_eq!(resp.details.split("; ").count(), 4);
    assert!(resp.details.starts_with("Interest compatibility: 26.7/40 (Common interests: travel, photography)"));
}

#[actix_web::test]
async fn test_score_endpoint_accepts_snake_case() {
    let app = init_app!();

    let person = json!({
        "personal_info": { "first_name": "Alice" },
        "age": 25,
        "location": { "address": "New York" },
        "personal_interests": ["reading"],
        "max_age_diff": 5
    });
    let payload = json!({ "profile1": person, "profile2": person });

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(&payload)
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.score, 80.0);
}

#[actix_web::test]
async fn test_score_endpoint_missing_field() {
    let app = init_app!();

    let mut second = bundle("b", "Bob", 26, &["reading"], "New York", 5.0);
    second.as_object_mut().unwrap().remove("maxAgeDiff");
    let payload = json!({
        "profile1": bundle("a", "Alice", 25, &["reading"], "New York", 5.0),
        "profile2": second,
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);
    assert!(body.message.contains("profile2.maxAgeDiff"), "got {}", body.message);
}

#[actix_web::test]
async fn test_score_endpoint_missing_interests() {
    let app = init_app!();

    let mut first = bundle("a", "Alice", 25, &["reading"], "New York", 5.0);
    first.as_object_mut().unwrap().remove("personalInterests");
    let payload = json!({
        "profile1": first,
        "profile2": bundle("b", "Bob", 26, &["reading"], "New York", 5.0),
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(body.message.contains("profile1.personalInterests"), "got {}", body.message);
}

#[actix_web::test]
async fn test_score_endpoint_empty_interests() {
    let app = init_app!();

    let payload = json!({
        "profile1": bundle("a", "Alice", 25, &[], "New York", 5.0),
        "profile2": bundle("b", "Bob", 25, &["reading"], "New York", 5.0),
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(&payload)
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.score, 40.0);
}

#[actix_web::test]
async fn test_score_endpoint_incomplete_preference() {
    let app = init_app!();

    let mut second = bundle("b", "Bob", 26, &["reading"], "New York", 5.0);
    second["partnerPreferences"] = json!([{ "category": "kids", "question": "Do you want kids?" }]);
    let payload = json!({
        "profile1": bundle("a", "Alice", 25, &["reading"], "New York", 5.0),
        "profile2": second,
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(
        body.message.contains("profile2.partnerPreferences[0].selectedOption"),
        "got {}",
        body.message
    );
}

#[actix_web::test]
async fn test_score_endpoint_invalid_json() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/match/score")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_rank_endpoint() {
    let app = init_app!();

    let payload = json!({
        "seeker": bundle("me", "Grace", 25, &["music", "dancing"], "Chicago", 10.0),
        "candidates": [
            bundle("me", "Grace", 25, &["music", "dancing"], "Chicago", 10.0),
            bundle("h", "Henry", 40, &["music", "dancing"], "Chicago", 15.0),
            bundle("i", "Ivan", 27, &["music", "dancing"], "Chicago", 5.0),
            bundle("j", "Jon", 26, &["golf"], "Miami", 5.0),
        ],
        "limit": 2
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(&payload)
        .to_request();
    let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.total_candidates, 4);
    assert_eq!(resp.matches.len(), 2);
    assert_eq!(resp.matches[0].user_id.as_deref(), Some("i"));
    assert_eq!(resp.matches[1].user_id.as_deref(), Some("h"));
}

#[actix_web::test]
async fn test_rank_endpoint_rejects_bad_limit() {
    let app = init_app!();

    let payload = json!({
        "seeker": bundle("me", "Grace", 25, &["music"], "Chicago", 10.0),
        "candidates": [],
        "limit": 0
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_rank_endpoint_names_bad_candidate() {
    let app = init_app!();

    let mut broken = bundle("x", "Xena", 30, &["music"], "Chicago", 5.0);
    broken.as_object_mut().unwrap().remove("location");
    let payload = json!({
        "seeker": bundle("me", "Grace", 25, &["music"], "Chicago", 10.0),
        "candidates": [bundle("h", "Henry", 40, &["music"], "Chicago", 15.0), broken],
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(body.message.contains("candidates[1].location"), "got {}", body.message);
}
