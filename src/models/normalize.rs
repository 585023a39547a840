use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;
use crate::models::domain::{MatchPreferences, PartnerPreference, PersonalProfile};
use crate::models::requests::{MatchRequest, ProfileBundle};

/// Errors raised while turning a wire bundle into a scoring profile
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ProfileError {
    /// Dotted path of the offending field, e.g. `profile2.maxAgeDiff`
    pub fn field(&self) -> &str {
        match self {
            ProfileError::MissingField(field) => field,
            ProfileError::InvalidField { field, .. } => field,
        }
    }

    fn invalid(field: String, reason: impl Into<String>) -> Self {
        ProfileError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl MatchRequest {
    /// Normalize both bundles, computing birthday-derived ages against `today`
    pub fn to_profiles(
        &self,
        today: NaiveDate,
    ) -> Result<(PersonalProfile, PersonalProfile), ProfileError> {
        let first = normalize_profile(&self.profile1, "profile1", today)?;
        let second = normalize_profile(&self.profile2, "profile2", today)?;
        Ok((first, second))
    }
}

/// Validate a bundle and build the profile the scorer consumes
///
/// `path` prefixes every reported field so callers can point at the exact
/// input that failed.
pub fn normalize_profile(
    bundle: &ProfileBundle,
    path: &str,
    today: NaiveDate,
) -> Result<PersonalProfile, ProfileError> {
    let field = |name: &str| format!("{}.{}", path, name);

    let info = bundle
        .personal_info
        .as_ref()
        .ok_or_else(|| ProfileError::MissingField(field("personalInfo")))?;

    let first_name = non_blank(info.first_name.as_deref())
        .ok_or_else(|| ProfileError::MissingField(field("personalInfo.firstName")))?;
    let name = match non_blank(info.last_name.as_deref()) {
        Some(last) => format!("{} {}", first_name, last),
        None => first_name.to_string(),
    };

    let age = match (bundle.age, non_blank(info.birthday.as_deref())) {
        (Some(age), _) => age,
        (None, Some(birthday)) => {
            let born = parse_birthday(birthday).ok_or_else(|| {
                ProfileError::invalid(field("personalInfo.birthday"), "expected YYYY-MM-DD or RFC 3339")
            })?;
            age_on(born, today).ok_or_else(|| {
                ProfileError::invalid(field("personalInfo.birthday"), "birthday is in the future")
            })?
        }
        (None, None) => return Err(ProfileError::MissingField(field("age"))),
    };

    let location = bundle
        .location
        .as_ref()
        .ok_or_else(|| ProfileError::MissingField(field("location")))?;
    let address = non_blank(location.address.as_deref())
        .ok_or_else(|| ProfileError::MissingField(field("location.address")))?;
    if let Some(radius) = location.search_radius {
        if !radius.is_finite() {
            return Err(ProfileError::invalid(field("location.searchRadius"), "must be a finite number"));
        }
    }

    let interests = bundle
        .personal_interests
        .clone()
        .ok_or_else(|| ProfileError::MissingField(field("personalInterests")))?;

    let partner_preferences = bundle
        .partner_preferences
        .iter()
        .enumerate()
        .map(|(i, p)| -> Result<PartnerPreference, ProfileError> {
            let entry = |name: &str| field(&format!("partnerPreferences[{}].{}", i, name));
            let category = p
                .category
                .clone()
                .ok_or_else(|| ProfileError::MissingField(entry("category")))?;
            let selected_option = p
                .selected_option
                .clone()
                .ok_or_else(|| ProfileError::MissingField(entry("selectedOption")))?;
            Ok(PartnerPreference::new(category, selected_option))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let max_age_diff = bundle
        .max_age_diff
        .ok_or_else(|| ProfileError::MissingField(field("maxAgeDiff")))?;
    if !max_age_diff.is_finite() {
        return Err(ProfileError::invalid(field("maxAgeDiff"), "must be a finite number"));
    }

    Ok(PersonalProfile {
        user_id: bundle.user_id.clone(),
        name,
        age,
        interests,
        location: address.to_string(),
        preferences: MatchPreferences {
            max_age_diff,
            search_radius: location.search_radius,
        },
        partner_preferences,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Whole years between `born` and `today`; `None` if `born` is after `today`
fn age_on(born: NaiveDate, today: NaiveDate) -> Option<u32> {
    if born > today {
        return None;
    }
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
