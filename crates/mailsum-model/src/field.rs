//! Semantic fields of a mail report row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The semantic roles a report column can play.
///
/// Source files name these columns inconsistently; the resolver in
/// `mailsum-map` binds each field to an actual header per table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MailField {
    /// Mail-item identifier; its prefix/suffix pattern determines scope.
    Tracking,
    /// Origin branch/office; used only for exclusion.
    Institution,
    /// Recipient address.
    Address,
    /// Reception time.
    Time,
    /// Delivery staff member name; groups aggregated counts.
    Courier,
    /// Free-text description of how the item was signed for.
    SignMethod,
    /// Free-text delivery-outcome note, possibly empty.
    Feedback,
}

impl MailField {
    /// All fields, in resolution order.
    pub const ALL: [MailField; 7] = [
        MailField::Tracking,
        MailField::Institution,
        MailField::Address,
        MailField::Time,
        MailField::Courier,
        MailField::SignMethod,
        MailField::Feedback,
    ];

    /// True for fields whose absence is reported to the operator.
    ///
    /// Only the tracking and institution columns are required for
    /// diagnostics; any other unresolved field degrades to empty values.
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, MailField::Tracking | MailField::Institution)
    }

    /// Canonical Chinese label used in diagnostics and exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MailField::Tracking => "邮件号",
            MailField::Institution => "收寄机构",
            MailField::Address => "收件人地址",
            MailField::Time => "邮件接收时间",
            MailField::Courier => "投递员",
            MailField::SignMethod => "签收方式",
            MailField::Feedback => "反馈情况",
        }
    }
}

impl fmt::Display for MailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
