use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::records::value::{AssetReference, FieldValue};

/// Server-assigned record identity.
///
/// A record created locally has no identity until its first save; once the
/// store hands one back it never changes and is the sole key used for
/// update and delete.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Untyped wire representation of a stored row: a record-type tag, an
/// optional server identity and an open mapping from field name to value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    record_type: String,
    id: Option<RecordId>,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates a local record that has never been saved.
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            id: None,
            fields: BTreeMap::new(),
        }
    }

    /// Creates a record already carrying a store identity, as returned by a
    /// fetch or save.
    pub fn with_id(record_type: impl Into<String>, id: RecordId) -> Self {
        Self {
            record_type: record_type.into(),
            id: Some(id),
            fields: BTreeMap::new(),
        }
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    /// Identity is assigned once, by the store, on first save.
    pub(crate) fn assign_id(&mut self, id: RecordId) {
        if self.id.is_some() {
            log::warn!("record identity is immutable once assigned; keeping the existing id");
            return;
        }
        self.id = Some(id);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_integer)
    }

    pub fn asset(&self, field: &str) -> Option<&AssetReference> {
        self.get(field).and_then(FieldValue::as_asset)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }
}
