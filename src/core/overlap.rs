use crate::models::PartnerPreference;

/// Interests of `a` that also appear in `b`, in `a`'s order
///
/// Each element of `a` is checked on its own, so a token repeated in `a` is
/// reported once per repetition. This makes the overlap asymmetric when only
/// one side carries duplicates.
#[inline]
pub fn common_interests(a: &[String], b: &[String]) -> Vec<String> {
    a.iter()
        .filter(|interest| b.contains(interest))
        .cloned()
        .collect()
}

/// Count positionally paired preferences with equal category and answer
///
/// Returns `(matching, total)` where `total` is the length of the shorter list.
#[inline]
pub fn preference_overlap(a: &[PartnerPreference], b: &[PartnerPreference]) -> (usize, usize) {
    let total = a.len().min(b.len());
    let matching = a
        .iter()
        .zip(b)
        .filter(|(left, right)| {
            left.category == right.category && left.selected_option == right.selected_option
        })
        .count();

    (matching, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_common_interests_case_sensitive() {
        let a = tokens(&["Travel", "art", "music"]);
        let b = tokens(&["travel", "music"]);
        assert_eq!(common_interests(&a, &b), vec!["music"]);
    }

    #[test]
    fn test_duplicates_counted_per_occurrence() {
        let a = tokens(&["hiking", "hiking", "chess"]);
        let b = tokens(&["hiking", "golf"]);
        assert_eq!(common_interests(&a, &b), vec!["hiking", "hiking"]);
        assert_eq!(common_interests(&b, &a), vec!["hiking"]);
    }

    #[test]
    fn test_preference_overlap() {
        let a = vec![
            PartnerPreference::new("kids", "yes"),
            PartnerPreference::new("smoking", "no"),
            PartnerPreference::new("pets", "dogs"),
        ];
        let b = vec![
            PartnerPreference::new("kids", "yes"),
            PartnerPreference::new("smoking", "sometimes"),
        ];
        assert_eq!(preference_overlap(&a, &b), (1, 2));
    }

    #[test]
    fn test_preference_overlap_requires_same_category() {
        let a = vec![PartnerPreference::new("kids", "no")];
        let b = vec![PartnerPreference::new("smoking", "no")];
        assert_eq!(preference_overlap(&a, &b), (0, 1));
        assert_eq!(preference_overlap(&a, &[]), (0, 0));
    }
}
