//! Tag compatibility predicates
//!
//! Pure comparisons between the categorical tags of two heritage records.
//! Every function is total: missing tags never match, they never fail.

use heriquiz_core::UnescoTag;
use std::collections::BTreeSet;

/// Ordered pairs of distinct UNESCO tags that still count as compatible.
///
/// A mixed site shares criteria with both cultural and natural sites.
const COMPATIBLE_UNESCO_PAIRS: [(UnescoTag, UnescoTag); 4] = [
    (UnescoTag::Mixed, UnescoTag::Cultural),
    (UnescoTag::Cultural, UnescoTag::Mixed),
    (UnescoTag::Mixed, UnescoTag::Natural),
    (UnescoTag::Natural, UnescoTag::Mixed),
];

/// Check whether two UNESCO classifications are compatible
///
/// # Returns
/// `true` if the tags are equal, or one is `Mixed` and the other is
/// `Cultural` or `Natural`. `false` whenever either side is missing.
pub fn unesco_compatible(a: Option<UnescoTag>, b: Option<UnescoTag>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b || COMPATIBLE_UNESCO_PAIRS.contains(&(a, b)),
        _ => false,
    }
}

/// Check whether two region lists share the same primary region
///
/// Only the first entry of each list is compared.
pub fn region_compatible<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    match (a.first(), b.first()) {
        (Some(a), Some(b)) => a.as_ref() == b.as_ref(),
        _ => false,
    }
}

/// Count the feature tags two records have in common
pub fn feature_overlap_count(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    a.intersection(b).count()
}

/// Minimum overlap a candidate needs for a strong match against `target`
///
/// Half the target's features rounded down, but never less than one.
pub fn feature_overlap_threshold(target: &BTreeSet<String>) -> usize {
    (target.len() / 2).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heriquiz_core::UnescoTag::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unesco_equal_tags() {
        assert!(unesco_compatible(Some(Cultural), Some(Cultural)));
        assert!(unesco_compatible(Some(Natural), Some(Natural)));
        assert!(unesco_compatible(Some(Mixed), Some(Mixed)));
    }

    #[test]
    fn test_unesco_mixed_bridges_both() {
        assert!(unesco_compatible(Some(Mixed), Some(Cultural)));
        assert!(unesco_compatible(Some(Cultural), Some(Mixed)));
        assert!(unesco_compatible(Some(Mixed), Some(Natural)));
        assert!(unesco_compatible(Some(Natural), Some(Mixed)));
    }

    #[test]
    fn test_unesco_incompatible() {
        assert!(!unesco_compatible(Some(Cultural), Some(Natural)));
        assert!(!unesco_compatible(Some(Natural), Some(Cultural)));
    }

    #[test]
    fn test_unesco_missing_never_matches() {
        assert!(!unesco_compatible(None, Some(Cultural)));
        assert!(!unesco_compatible(Some(Mixed), None));
        assert!(!unesco_compatible(None, None));
    }

    #[test]
    fn test_region_primary_only() {
        assert!(region_compatible(&["Asia", "Europe"], &["Asia"]));
        assert!(!region_compatible(&["Europe", "Asia"], &["Asia"]));
        assert!(!region_compatible::<&str, &str>(&[], &["Asia"]));
        assert!(!region_compatible::<&str, &str>(&["Asia"], &[]));
    }

    #[test]
    fn test_region_accepts_owned_strings() {
        let a = vec!["Africa".to_string()];
        let b = vec!["Africa".to_string(), "Asia".to_string()];
        assert!(region_compatible(&a, &b));
    }

    #[test]
    fn test_feature_overlap() {
        assert_eq!(feature_overlap_count(&set(&["temple", "stone"]), &set(&["stone", "forest"])), 1);
        assert_eq!(feature_overlap_count(&set(&["temple", "stone"]), &set(&["temple", "stone"])), 2);
        assert_eq!(feature_overlap_count(&set(&[]), &set(&["temple"])), 0);
        assert_eq!(feature_overlap_count(&set(&["temple"]), &set(&["forest"])), 0);
    }

    #[test]
    fn test_overlap_threshold_rounds_down() {
        assert_eq!(feature_overlap_threshold(&set(&["a"])), 1);
        assert_eq!(feature_overlap_threshold(&set(&["a", "b"])), 1);
        assert_eq!(feature_overlap_threshold(&set(&["a", "b", "c"])), 1);
        assert_eq!(feature_overlap_threshold(&set(&["a", "b", "c", "d"])), 2);
        assert_eq!(feature_overlap_threshold(&set(&["a", "b", "c", "d", "e"])), 2);
    }
}
