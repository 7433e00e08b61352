//! Cleaned CSV export of accepted mail records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use mailsum_model::MailItem;

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "菜鸟邮件汇总.csv";

/// Export columns, in order. The origin institution is included for
/// verification by the operator.
pub const EXPORT_HEADERS: [&str; 7] = [
    "邮件号",
    "收件人地址",
    "邮件接收时间",
    "投递员",
    "签收方式",
    "反馈情况",
    "原收寄机构",
];

/// Writes the cleaned export and returns the number of records written.
///
/// The file starts with a UTF-8 BOM so spreadsheet applications render the
/// Chinese headers correctly.
pub fn write_summary_csv(path: &Path, items: &[MailItem]) -> Result<usize> {
    let mut file =
        File::create(path).with_context(|| format!("create export: {}", path.display()))?;
    file.write_all(b"\xEF\xBB\xBF")
        .with_context(|| format!("write export: {}", path.display()))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(EXPORT_HEADERS)
        .context("write export headers")?;
    for item in items {
        writer
            .write_record([
                item.tracking_number.as_str(),
                item.recipient_address.as_str(),
                item.reception_time.as_str(),
                item.courier.as_str(),
                item.sign_method.as_str(),
                item.feedback.as_str(),
                item.origin_institution.as_str(),
            ])
            .with_context(|| format!("write export row: {}", item.tracking_number))?;
    }
    writer.flush().context("flush export")?;
    info!(path = %path.display(), records = items.len(), "wrote export");
    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use mailsum_model::ItemId;

    use super::*;

    fn sample_item() -> MailItem {
        MailItem {
            id: ItemId::from_position(0, 0),
            tracking_number: "1300000031".to_string(),
            recipient_address: "某小区 3 号楼".to_string(),
            reception_time: "2024-05-01 09:30".to_string(),
            courier: "张三".to_string(),
            sign_method: "本人签收".to_string(),
            feedback: "妥投".to_string(),
            origin_institution: "长安揽投部".to_string(),
        }
    }

    #[test]
    fn export_writes_bom_headers_and_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let written = write_summary_csv(&path, &[sample_item()]).expect("write export");
        assert_eq!(written, 1);

        let bytes = std::fs::read(&path).expect("read export");
        assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
        let text = String::from_utf8(bytes[3..].to_vec()).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "邮件号,收件人地址,邮件接收时间,投递员,签收方式,反馈情况,原收寄机构"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("1300000031,"));
        assert!(row.ends_with("长安揽投部"));
    }

    #[test]
    fn empty_export_still_has_headers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let written = write_summary_csv(&path, &[]).expect("write export");
        assert_eq!(written, 0);
        let text = std::fs::read_to_string(&path).expect("read export");
        assert!(text.contains("邮件号"));
    }
}
