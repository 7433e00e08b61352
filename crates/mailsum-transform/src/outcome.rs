//! Delivery-outcome classification.
//!
//! Sign method and feedback are free-form operator entries without a
//! controlled vocabulary, so classification is an ordered keyword cascade.
//! Explicit negative outcomes (returned, exception) are checked before any
//! positive delivery outcome is inferred, and empty feedback counts as
//! "still pending redelivery". The rule order is load-bearing: reordering
//! changes classification results.

use mailsum_model::Outcome;

/// Keywords marking a returned item, in sign method or feedback.
pub const RETURNED_KEYWORDS: [&str; 2] = ["退回", "退收"];

/// Keyword marking a delivery exception.
pub const EXCEPTION_KEYWORDS: [&str; 1] = ["异常"];

/// Feedback keywords that mark a pending redelivery.
pub const REDELIVERY_KEYWORDS: [&str; 4] = ["留存", "未妥投", "再投", "未反馈"];

/// Sign-method keywords for station/locker/mailroom delivery.
pub const STATION_KEYWORDS: [&str; 7] =
    ["物业", "自提", "收发室", "包裹柜", "柜", "驿站", "丰巢"];

/// Sign-method keywords for personal/door delivery.
pub const ADDRESS_KEYWORDS: [&str; 5] = ["本人", "他人", "家门口", "门口", "按址"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classifies one accepted row into exactly one outcome category.
///
/// First matching rule wins:
/// 1. Returned: sign method + feedback mention 退回 or 退收.
/// 2. Exception: the combined text mentions 异常.
/// 3. Redelivery: feedback mentions a redelivery keyword, or is empty.
/// 4. Station: sign method mentions a station/locker keyword.
/// 5. Address: personal-delivery keyword, a bare 妥投 in feedback, or the
///    catch-all for anything left — every accepted row gets a category.
#[must_use]
pub fn classify_outcome(sign_method: &str, feedback: &str) -> Outcome {
    let combined = format!("{sign_method}{feedback}");

    if contains_any(&combined, &RETURNED_KEYWORDS) {
        return Outcome::Returned;
    }
    if contains_any(&combined, &EXCEPTION_KEYWORDS) {
        return Outcome::Exception;
    }
    // Empty feedback must win over the sign-method rules below.
    if feedback.trim().is_empty() || contains_any(feedback, &REDELIVERY_KEYWORDS) {
        return Outcome::Redelivery;
    }
    if contains_any(sign_method, &STATION_KEYWORDS) {
        return Outcome::Station;
    }
    // Personal-delivery sign methods, a generic 妥投 in feedback, and any
    // unrecognized remainder all count as standard address delivery.
    Outcome::Address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returned_wins_over_everything() {
        assert_eq!(classify_outcome("退回", "妥投"), Outcome::Returned);
        assert_eq!(classify_outcome("丰巢", "已退收"), Outcome::Returned);
    }

    #[test]
    fn exception_checked_after_returned() {
        assert_eq!(classify_outcome("异常", ""), Outcome::Exception);
        assert_eq!(classify_outcome("异常退回", ""), Outcome::Returned);
    }

    #[test]
    fn redelivery_keywords_in_feedback() {
        assert_eq!(classify_outcome("", "留存"), Outcome::Redelivery);
        assert_eq!(classify_outcome("本人签收", "未妥投"), Outcome::Redelivery);
        assert_eq!(classify_outcome("", "明日再投"), Outcome::Redelivery);
        assert_eq!(classify_outcome("", "未反馈"), Outcome::Redelivery);
    }

    #[test]
    fn empty_feedback_is_redelivery_even_with_sign_method() {
        assert_eq!(classify_outcome("", ""), Outcome::Redelivery);
        assert_eq!(classify_outcome("本人签收", ""), Outcome::Redelivery);
        assert_eq!(classify_outcome("丰巢", "  "), Outcome::Redelivery);
    }

    #[test]
    fn station_delivery() {
        assert_eq!(classify_outcome("丰巢", "妥投"), Outcome::Station);
        assert_eq!(classify_outcome("小区驿站代收", "妥投"), Outcome::Station);
        assert_eq!(classify_outcome("智能柜", "妥投"), Outcome::Station);
        assert_eq!(classify_outcome("物业代收", "妥投"), Outcome::Station);
    }

    #[test]
    fn address_delivery() {
        assert_eq!(classify_outcome("本人签收", "妥投"), Outcome::Address);
        assert_eq!(classify_outcome("他人代收", "妥投"), Outcome::Address);
        assert_eq!(classify_outcome("放家门口", "妥投"), Outcome::Address);
    }

    #[test]
    fn bare_delivered_feedback_defaults_to_address() {
        assert_eq!(classify_outcome("", "妥投"), Outcome::Address);
    }

    #[test]
    fn unknown_text_falls_through_to_address() {
        assert_eq!(classify_outcome("其他", "已完成"), Outcome::Address);
    }
}
