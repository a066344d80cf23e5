use std::sync::Arc;

use crate::records::error::{delete_failed, not_found, save_failed, RecordError};
use crate::records::mappable::RecordMappable;
use crate::records::query::{Predicate, QueryDefinition, SortDescriptor};
use crate::records::record::Record;
use crate::records::scan;
use crate::remote::{remote_call, RecordServiceArc, RemoteError, RemoteFuture};

/// CRUD facade over the remote store for any [`RecordMappable`] model.
///
/// Every method issues exactly one remote round trip. The facade never
/// retries, gives no ordering guarantee across concurrent calls, and
/// surfaces each failure as a resolved error on the returned future.
#[derive(Clone)]
pub struct Database {
    service: RecordServiceArc,
}

impl Database {
    pub(crate) fn new(service: RecordServiceArc) -> Self {
        Self { service }
    }

    /// Fetches every record of `record_type` matching `predicate`, decoded
    /// into `T`. Records that do not decode are skipped, not errors.
    pub fn fetch<T: RecordMappable>(
        &self,
        predicate: Predicate,
        record_type: impl Into<String>,
        sort: Vec<SortDescriptor>,
        limit: Option<usize>,
    ) -> RemoteFuture<Vec<T>, RecordError> {
        let mut definition = QueryDefinition::new(record_type)
            .with_predicate(predicate)
            .with_sort(sort);
        if let Some(limit) = limit {
            definition = definition.with_limit(limit);
        }
        scan::run_query(&self.service, definition)
    }

    /// Untyped variant of [`Database::fetch`] driven by a prebuilt
    /// definition.
    pub fn fetch_records(&self, definition: QueryDefinition) -> RemoteFuture<Vec<Record>, RecordError> {
        scan::run_query(&self.service, definition)
    }

    /// Saves a raw record and resolves with the stored row, which carries an
    /// identity after its first save.
    pub fn save_record(&self, record: Record) -> RemoteFuture<Record, RecordError> {
        let service = Arc::clone(&self.service);
        remote_call(move |promise| {
            service.save_record(
                record,
                Box::new(move |result| {
                    promise.resolve(result.map_err(|err| save_failed(err.to_string())));
                }),
            );
        })
    }

    /// Persists `item`. Success means the store accepted the record, which
    /// now bears an identity server-side.
    pub fn add<T: RecordMappable>(&self, item: &T) -> RemoteFuture<bool, RecordError> {
        let record = item.record();
        let service = Arc::clone(&self.service);
        remote_call(move |promise| {
            service.save_record(
                record,
                Box::new(move |result| {
                    promise.resolve(result.map(|_| true).map_err(|err| save_failed(err.to_string())));
                }),
            );
        })
    }

    /// Store saves are upsert-by-identity, so updates ride the same save
    /// path as inserts; only the record's identity distinguishes them.
    pub fn update<T: RecordMappable>(&self, item: &T) -> RemoteFuture<bool, RecordError> {
        self.add(item)
    }

    /// Deletes by the item's record identity. Resolves `not-found` when the
    /// item has never been saved or the identity is already gone remotely.
    pub fn delete<T: RecordMappable>(&self, item: &T) -> RemoteFuture<bool, RecordError> {
        let record = item.record();
        let service = Arc::clone(&self.service);
        remote_call(move |promise| match record.id() {
            Some(id) => {
                let id = id.clone();
                service.delete_record(
                    id,
                    Box::new(move |result| {
                        promise.resolve(match result {
                            Ok(_) => Ok(true),
                            Err(RemoteError::NotFound(message)) => Err(not_found(message)),
                            Err(err) => Err(delete_failed(err.to_string())),
                        });
                    }),
                );
            }
            None => promise.resolve(Err(not_found(
                "record has never been saved and carries no identity",
            ))),
        })
    }
}
