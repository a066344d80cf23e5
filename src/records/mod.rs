#![doc = include_str!("README.md")]
mod api;
pub mod error;
mod mappable;
mod query;
mod record;
mod scan;
mod value;

pub use api::Database;
pub use error::{RecordError, RecordErrorCode, RecordResult};
pub use mappable::RecordMappable;
pub use query::{Predicate, QueryDefinition, SortDescriptor, SortDirection};
pub use record::{Record, RecordId};
pub use value::{AssetReference, FieldValue};
