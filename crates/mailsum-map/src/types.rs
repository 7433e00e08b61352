//! Resolved column bindings for one table.

use std::collections::BTreeMap;

use serde::Serialize;

use mailsum_model::MailField;

/// One resolved binding: the column index and the header it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnBinding {
    pub index: usize,
    pub header: String,
}

/// Per-table mapping from semantic field to an actual column.
///
/// Built once per table by [`crate::resolve_columns`]; immutable afterward.
/// A field is present only if some header satisfied its keyword match.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedColumns {
    bindings: BTreeMap<MailField, ColumnBinding>,
}

impl ResolvedColumns {
    pub(crate) fn bind(&mut self, field: MailField, index: usize, header: &str) {
        self.bindings.insert(
            field,
            ColumnBinding {
                index,
                header: header.to_string(),
            },
        );
    }

    /// Column index bound to `field`, if any.
    #[must_use]
    pub fn index_of(&self, field: MailField) -> Option<usize> {
        self.bindings.get(&field).map(|binding| binding.index)
    }

    /// Header name bound to `field`, if any.
    #[must_use]
    pub fn header_of(&self, field: MailField) -> Option<&str> {
        self.bindings.get(&field).map(|binding| binding.header.as_str())
    }

    /// True when the table can be processed at all.
    ///
    /// Without a tracking column the table contributes zero rows.
    #[must_use]
    pub fn has_tracking(&self) -> bool {
        self.bindings.contains_key(&MailField::Tracking)
    }

    /// Required fields that did not resolve, in field order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<MailField> {
        MailField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !self.bindings.contains_key(field))
            .collect()
    }

    /// Cell value for `field` in `row`, or `""` when the field is
    /// unresolved or the row is short.
    #[must_use]
    pub fn value<'a>(&self, row: &'a [String], field: MailField) -> &'a str {
        self.index_of(field)
            .and_then(|index| row.get(index))
            .map_or("", |cell| cell.trim())
    }
}
