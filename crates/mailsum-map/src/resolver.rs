//! Header resolution.
//!
//! Each table is resolved exactly once; per-row access goes through the
//! resulting [`ResolvedColumns`] and never re-probes headers.

use mailsum_model::MailField;

use crate::keywords::field_keywords;
use crate::types::ResolvedColumns;

/// Finds the best-matching header for one keyword group.
///
/// Exact matches (trimmed header equals a keyword) are preferred over
/// substring containment; within each tier the earliest header in header
/// order wins, so resolution is deterministic.
#[must_use]
pub fn find_best_header(headers: &[String], keywords: &[&str]) -> Option<usize> {
    if let Some(index) = headers
        .iter()
        .position(|header| keywords.contains(&header.trim()))
    {
        return Some(index);
    }
    headers
        .iter()
        .position(|header| keywords.iter().any(|keyword| header.contains(keyword)))
}

/// Resolves every semantic field against one table's headers.
///
/// Headers may differ table to table, so this runs once per table; a fixed
/// schema is never assumed. A field that matches nothing stays unbound.
#[must_use]
pub fn resolve_columns(headers: &[String]) -> ResolvedColumns {
    let mut resolved = ResolvedColumns::default();
    for field in MailField::ALL {
        if let Some(index) = find_best_header(headers, field_keywords(field)) {
            resolved.bind(field, index, &headers[index]);
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn exact_match_beats_partial() {
        // "邮件号码" contains the keyword "号码" but "邮件号" is an exact hit.
        let headers = headers(&["邮件号码备注", "邮件号"]);
        let resolved = resolve_columns(&headers);
        assert_eq!(resolved.header_of(MailField::Tracking), Some("邮件号"));
        assert_eq!(resolved.index_of(MailField::Tracking), Some(1));
    }

    #[test]
    fn partial_match_takes_earliest_header() {
        let headers = headers(&["国内邮件号清单", "备用单号"]);
        let resolved = resolve_columns(&headers);
        assert_eq!(resolved.index_of(MailField::Tracking), Some(0));
    }

    #[test]
    fn exact_match_trims_whitespace() {
        let headers = headers(&[" 邮件号 "]);
        let resolved = resolve_columns(&headers);
        assert_eq!(resolved.index_of(MailField::Tracking), Some(0));
    }

    #[test]
    fn unmatched_field_stays_unbound() {
        let headers = headers(&["邮件号", "投递员"]);
        let resolved = resolve_columns(&headers);
        assert!(resolved.has_tracking());
        assert_eq!(resolved.index_of(MailField::Feedback), None);
        assert_eq!(resolved.missing_required(), vec![MailField::Institution]);
    }
}
