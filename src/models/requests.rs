use serde::{Deserialize, Serialize};
use validator::Validate;

/// Agent-style request to score two profiles against each other
///
/// ```json
/// { "profile1": { ... }, "profile2": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub profile1: ProfileBundle,
    pub profile2: ProfileBundle,
}

/// Wire form of a profile, before normalization
///
/// Every field is optional here so that a missing one is reported with its
/// full path instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBundle {
    #[serde(default, alias = "user_id")]
    pub user_id: Option<String>,
    #[serde(default, alias = "personal_info")]
    pub personal_info: Option<PersonalInfoBundle>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub location: Option<LocationBundle>,
    /// Required; an empty list is accepted
    #[serde(default, alias = "personal_interests")]
    pub personal_interests: Option<Vec<String>>,
    #[serde(default, alias = "partner_preferences")]
    pub partner_preferences: Vec<PreferenceBundle>,
    #[serde(default, alias = "max_age_diff")]
    pub max_age_diff: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoBundle {
    #[serde(default, alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(default, alias = "last_name")]
    pub last_name: Option<String>,
    /// ISO date (`1999-05-01`) or RFC 3339 timestamp; empty means unknown
    #[serde(default)]
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBundle {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "search_radius")]
    pub search_radius: Option<f64>,
}

/// An answered partner-preference question as the onboarding flow sends it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceBundle {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, alias = "selected_index")]
    pub selected_index: Option<i64>,
    #[serde(default, alias = "selected_option")]
    pub selected_option: Option<String>,
}

/// Request to rank candidates for a seeker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    pub seeker: ProfileBundle,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub candidates: Vec<ProfileBundle>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_camel_and_snake_case() {
        let camel = r#"{
            "personalInfo": { "firstName": "Alice", "lastName": "", "birthday": "" },
            "gender": "female",
            "location": { "address": "New York", "searchRadius": 10 },
            "personalInterests": ["reading"],
            "partnerPreferences": [],
            "maxAgeDiff": 5
        }"#;
        let snake = r#"{
            "personal_info": { "first_name": "Alice" },
            "location": { "address": "New York", "search_radius": 10 },
            "personal_interests": ["reading"],
            "max_age_diff": 5
        }"#;

        let a: ProfileBundle = serde_json::from_str(camel).unwrap();
        let b: ProfileBundle = serde_json::from_str(snake).unwrap();

        for bundle in [a, b] {
            assert_eq!(bundle.personal_info.unwrap().first_name.as_deref(), Some("Alice"));
            assert_eq!(bundle.location.unwrap().search_radius, Some(10.0));
            assert_eq!(bundle.personal_interests.unwrap(), vec!["reading"]);
            assert_eq!(bundle.max_age_diff, Some(5.0));
        }
    }

    #[test]
    fn test_absent_interests_distinct_from_empty() {
        let absent: ProfileBundle = serde_json::from_str(r#"{ "maxAgeDiff": 5 }"#).unwrap();
        let empty: ProfileBundle = serde_json::from_str(r#"{ "personalInterests": [] }"#).unwrap();

        assert!(absent.personal_interests.is_none());
        assert_eq!(empty.personal_interests, Some(vec![]));
    }

    #[test]
    fn test_preference_without_answer_still_parses() {
        let pref: PreferenceBundle = serde_json::from_str(r#"{ "category": "kids" }"#).unwrap();
        assert_eq!(pref.category.as_deref(), Some("kids"));
        assert!(pref.selected_option.is_none());
    }

    #[test]
    fn test_rank_request_limits() {
        let mut req = RankRequest {
            seeker: ProfileBundle::default(),
            candidates: vec![],
            limit: Some(20),
        };
        assert!(req.validate().is_ok());

        req.limit = Some(0);
        assert!(req.validate().is_err());

        req.limit = Some(101);
        assert!(req.validate().is_err());

        req.limit = None;
        assert!(req.validate().is_ok());
    }
}
