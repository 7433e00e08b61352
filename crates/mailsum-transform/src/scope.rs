//! Row scope filter: the Cainiao tracking pattern and the origin
//! institution blocklist.

/// Tracking numbers in scope start with this prefix.
const TRACKING_PREFIX: &str = "13";

/// Tracking numbers in scope end with one of these suffixes.
const TRACKING_SUFFIXES: [&str; 4] = ["16", "31", "32", "34"];

/// Origin institutions whose rows are dropped.
///
/// Substring containment, not exact match: any institution name that merely
/// contains one of these is excluded, which keeps the blocklist short.
/// 蒙欣 also catches 康巴什蒙欣 and 蒙欣揽投部.
pub const EXCLUDED_INSTITUTIONS: [&str; 4] = ["蒙欣", "康巴什蒙欣", "正意", "盈馨"];

/// Scope decision for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeDecision {
    /// Tracking number matches the Cainiao pattern.
    pub in_scope: bool,
    /// Row is in scope but its origin institution is blocklisted.
    pub excluded: bool,
}

/// True when the trimmed tracking number matches the Cainiao pattern.
#[must_use]
pub fn is_cainiao(tracking_number: &str) -> bool {
    let trimmed = tracking_number.trim();
    trimmed.chars().count() >= 2
        && trimmed.starts_with(TRACKING_PREFIX)
        && TRACKING_SUFFIXES
            .iter()
            .any(|suffix| trimmed.ends_with(suffix))
}

/// Decides whether a row is in scope and whether it is excluded.
///
/// Exclusion is only evaluated for in-scope rows; an empty institution
/// never excludes.
#[must_use]
pub fn classify_scope(tracking_number: &str, origin_institution: &str) -> ScopeDecision {
    let in_scope = is_cainiao(tracking_number);
    if !in_scope {
        return ScopeDecision {
            in_scope: false,
            excluded: false,
        };
    }
    let institution = origin_institution.trim();
    let excluded = !institution.is_empty()
        && EXCLUDED_INSTITUTIONS
            .iter()
            .any(|keyword| institution.contains(keyword));
    ScopeDecision { in_scope, excluded }
}
