//! Fixed header keyword groups per semantic field.
//!
//! Source reports come from several branch systems that name the same
//! column differently; these groups cover the spellings seen in practice.
//! The lists are policy, not configuration.

use mailsum_model::MailField;

/// Keywords for a field, most specific first.
#[must_use]
pub fn field_keywords(field: MailField) -> &'static [&'static str] {
    match field {
        MailField::Tracking => &["邮件号", "单号", "运单", "凭证号", "号码"],
        MailField::Address => &["收件人地址", "收件地址", "地址", "收件人"],
        MailField::Time => &["邮件接收时间", "收寄时间", "接收时间", "日期", "时间"],
        MailField::Courier => &["投递员", "揽投员", "人员", "员工"],
        MailField::SignMethod => &["签收方式", "签收", "投递方式"],
        MailField::Feedback => &["反馈情况", "妥投情况", "投递情况", "反馈", "备注"],
        MailField::Institution => &["收寄机构", "收寄局", "机构", "揽投部"],
    }
}
