#![deny(unsafe_code)]

use std::fmt;

use sha2::{Digest, Sha256};

use crate::ModelError;

/// A deterministic accepted-item identifier.
///
/// Short, fixed-size binary ID rendered as lowercase hex. Derived from the
/// item's table and row position so repeated runs over the same input
/// produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId([u8; 16]);

impl ItemId {
    /// Builds the ID for the row at `row_index` of the table at `table_index`.
    #[must_use]
    pub fn from_position(table_index: usize, row_index: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(table_index.to_be_bytes());
        hasher.update(b":");
        hasher.update(row_index.to_be_bytes());
        let digest = hasher.finalize();
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses an ID previously rendered with [`Self::to_hex`].
    pub fn from_hex(value: &str) -> Result<Self, ModelError> {
        let bytes =
            hex::decode(value).map_err(|_| ModelError::InvalidItemId(value.to_string()))?;
        let raw: [u8; 16] = bytes
            .try_into()
            .map_err(|_| ModelError::InvalidItemId(value.to_string()))?;
        Ok(Self(raw))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for ItemId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
