use crate::records::record::Record;
use crate::records::value::FieldValue;

/// Capability letting a domain model construct itself from a [`Record`] and
/// expose itself back as one.
///
/// Construction is fallible but never panics: required fields that are
/// missing or of the wrong kind yield `None`, and absent optional fields take
/// the model's documented defaults. Serialization is total; a value that has
/// never been saved serializes to a record without an identity. The
/// record-type tag is always passed explicitly by callers, never derived
/// from the model type.
pub trait RecordMappable: Sized + Clone + Send + 'static {
    /// Decodes a record into the model, or `None` when the record is not
    /// well-formed for it.
    fn from_record(record: &Record) -> Option<Self>;

    /// Encodes the model into its backing record.
    fn record(&self) -> Record;

    /// Returns a copy of the model with one field rewritten, sharing the
    /// original's record identity. `None` iff the mutated record is no
    /// longer constructible into the model.
    fn with_updated_field(&self, field: &str, value: impl Into<FieldValue>) -> Option<Self> {
        let mut record = self.record();
        record.set(field, value);
        Self::from_record(&record)
    }
}

/// Passthrough model: lets every generic path also serve untyped records.
impl RecordMappable for Record {
    fn from_record(record: &Record) -> Option<Self> {
        Some(record.clone())
    }

    fn record(&self) -> Record {
        self.clone()
    }
}
