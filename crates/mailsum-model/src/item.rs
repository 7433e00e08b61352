use serde::Serialize;

use crate::ItemId;

/// An accepted mail record, extracted from a source row that passed the
/// scope filter and survived institution exclusion.
///
/// Immutable once built; the pipeline owns the collection until it is
/// handed to the exporter.
#[derive(Debug, Clone, Serialize)]
pub struct MailItem {
    pub id: ItemId,
    pub tracking_number: String,
    pub recipient_address: String,
    pub reception_time: String,
    pub courier: String,
    pub sign_method: String,
    pub feedback: String,
    pub origin_institution: String,
}
