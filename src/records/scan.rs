use std::sync::Arc;

use crate::records::error::{query_failed, RecordError};
use crate::records::mappable::RecordMappable;
use crate::records::query::QueryDefinition;
use crate::records::record::Record;
use crate::remote::{remote_call, RecordServiceArc, RemoteFuture};

/// Issues one scan and resolves with the matched models in arrival order.
///
/// Records stream through an unbounded buffer until the store signals the
/// scan is exhausted; only then does the future resolve, so callers never
/// observe a partial collection. Records that do not decode into `T` are
/// skipped — a best-effort projection, not a query failure. A hard store
/// failure discards whatever accumulated and resolves `query-failed`.
pub(crate) fn run_query<T>(
    service: &RecordServiceArc,
    definition: QueryDefinition,
) -> RemoteFuture<Vec<T>, RecordError>
where
    T: RecordMappable,
{
    let service = Arc::clone(service);
    remote_call(move |promise| {
        let (sender, receiver) = async_channel::unbounded();
        let on_record = Box::new(move |record: Record| {
            if let Err(err) = sender.try_send(record) {
                log::debug!("query buffer rejected a matched record: {err}");
            }
        });
        service.run_query(
            definition,
            on_record,
            Box::new(move |result| match result {
                Ok(()) => {
                    let mut items = Vec::new();
                    while let Ok(record) = receiver.try_recv() {
                        match T::from_record(&record) {
                            Some(item) => items.push(item),
                            None => log::debug!(
                                "skipping record {:?}: not constructible as the requested model",
                                record.id()
                            ),
                        }
                    }
                    promise.resolve(Ok(items));
                }
                Err(err) => promise.resolve(Err(query_failed(err.to_string()))),
            }),
        );
    })
}
