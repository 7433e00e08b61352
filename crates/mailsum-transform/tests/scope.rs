//! Property tests for the scope predicate.

use proptest::prelude::*;

use mailsum_transform::{classify_scope, is_cainiao};

proptest! {
    /// The predicate equals its definition for arbitrary digit strings.
    #[test]
    fn scope_matches_definition(tracking in "[0-9]{0,14}") {
        let trimmed = tracking.trim();
        let expected = trimmed.len() >= 2
            && trimmed.starts_with("13")
            && ["16", "31", "32", "34"]
                .iter()
                .any(|suffix| trimmed.ends_with(suffix));
        prop_assert_eq!(is_cainiao(&tracking), expected);
    }

    /// Surrounding whitespace never changes the decision.
    #[test]
    fn whitespace_is_ignored(tracking in "[0-9]{2,14}") {
        let padded = format!("  {tracking}\t");
        prop_assert_eq!(is_cainiao(&padded), is_cainiao(&tracking));
    }

    /// Exclusion is only ever true for in-scope rows.
    #[test]
    fn exclusion_implies_in_scope(
        tracking in "[0-9]{0,14}",
        institution in "\\PC{0,12}",
    ) {
        let decision = classify_scope(&tracking, &institution);
        if decision.excluded {
            prop_assert!(decision.in_scope);
        }
    }
}

#[test]
fn known_tracking_numbers() {
    assert!(is_cainiao("1300000016"));
    assert!(!is_cainiao("1400000016"));
    assert!(!is_cainiao("13"));
    assert!(is_cainiao("1316"));
}
