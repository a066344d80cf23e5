use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::notifications::{NotificationInfo, Subscription, SubscriptionTrigger};
use crate::records::{
    FieldValue, Predicate, QueryDefinition, Record, RecordId, SortDescriptor, SortDirection,
};

use super::{
    AccountStatus, Completion, RecordCallback, RecordService, RemoteError, StatusCallback,
    UserIdentity,
};

struct State {
    records: BTreeMap<String, Record>,
    next_record_id: u64,
    subscriptions: BTreeMap<String, Subscription>,
    account_status: AccountStatus,
    discoverability_response: bool,
    notification_permission_response: bool,
    permission_granted: bool,
    registered_for_remote: bool,
    user_record_id: Option<RecordId>,
    user_identity: Option<UserIdentity>,
    delivered_notifications: Vec<NotificationInfo>,
    fail_next_save: Option<String>,
    fail_next_query: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_record_id: 0,
            subscriptions: BTreeMap::new(),
            account_status: AccountStatus::Available,
            discoverability_response: true,
            notification_permission_response: true,
            permission_granted: false,
            registered_for_remote: false,
            user_record_id: None,
            user_identity: None,
            delivered_notifications: Vec::new(),
            fail_next_save: None,
            fail_next_query: None,
        }
    }
}

/// Reference record service holding everything in process memory.
///
/// Clones share one store. Fixture setters configure account state, the
/// simulated user and permission prompts; `fail_next_*` hooks inject a
/// one-shot hard failure for the next matching operation.
#[derive(Clone, Default)]
pub struct InMemoryRecordService {
    state: Arc<Mutex<State>>,
}

impl InMemoryRecordService {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poison| poison.into_inner())
    }

    pub fn set_account_status(&self, status: AccountStatus) {
        self.state().account_status = status;
    }

    pub fn set_user(&self, record_id: RecordId, identity: UserIdentity) {
        let mut state = self.state();
        state.user_record_id = Some(record_id);
        state.user_identity = Some(identity);
    }

    /// Answer the next discoverability permission prompt with `granted`.
    pub fn set_discoverability_response(&self, granted: bool) {
        self.state().discoverability_response = granted;
    }

    /// Answer the next notification permission prompt with `granted`.
    pub fn set_notification_permission_response(&self, granted: bool) {
        self.state().notification_permission_response = granted;
    }

    pub fn fail_next_save(&self, message: impl Into<String>) {
        self.state().fail_next_save = Some(message.into());
    }

    pub fn fail_next_query(&self, message: impl Into<String>) {
        self.state().fail_next_query = Some(message.into());
    }

    /// Notifications delivered so far, oldest first. Delivery requires the
    /// permission handshake to have completed.
    pub fn delivered_notifications(&self) -> Vec<NotificationInfo> {
        self.state().delivered_notifications.clone()
    }

    pub fn subscription(&self, subscription_id: &str) -> Option<Subscription> {
        self.state().subscriptions.get(subscription_id).cloned()
    }

    pub fn stored_record(&self, record_id: &RecordId) -> Option<Record> {
        self.state().records.get(record_id.as_str()).cloned()
    }
}

impl RecordService for InMemoryRecordService {
    fn save_record(&self, record: Record, completion: Completion<Record>) {
        let result = {
            let mut state = self.state();
            if let Some(message) = state.fail_next_save.take() {
                Err(RemoteError::Failed(message))
            } else {
                let mut record = record;
                let created = record.id().is_none();
                let id = match record.id() {
                    Some(id) => id.clone(),
                    None => {
                        state.next_record_id += 1;
                        let id = RecordId::new(format!("rec-{}", state.next_record_id));
                        record.assign_id(id.clone());
                        id
                    }
                };
                state.records.insert(id.as_str().to_string(), record.clone());
                let event = if created {
                    SubscriptionTrigger::RecordCreation
                } else {
                    SubscriptionTrigger::RecordUpdate
                };
                fire_subscriptions(&mut state, &record, event);
                Ok(record)
            }
        };
        completion(result);
    }

    fn delete_record(&self, record_id: RecordId, completion: Completion<RecordId>) {
        let result = {
            let mut state = self.state();
            match state.records.remove(record_id.as_str()) {
                Some(record) => {
                    fire_subscriptions(&mut state, &record, SubscriptionTrigger::RecordDeletion);
                    Ok(record_id)
                }
                None => Err(RemoteError::NotFound(format!(
                    "record {record_id} does not exist"
                ))),
            }
        };
        completion(result);
    }

    fn run_query(
        &self,
        query: QueryDefinition,
        mut on_record: RecordCallback,
        completion: Completion<()>,
    ) {
        let outcome = {
            let mut state = self.state();
            if let Some(message) = state.fail_next_query.take() {
                Err(RemoteError::Failed(message))
            } else {
                let mut matches: Vec<Record> = state
                    .records
                    .values()
                    .filter(|record| {
                        record.record_type() == query.record_type()
                            && record_matches(record, query.predicate())
                    })
                    .cloned()
                    .collect();
                matches.sort_by(|left, right| compare_records(left, right, query.sort()));
                if let Some(limit) = query.limit() {
                    matches.truncate(limit);
                }
                Ok(matches)
            }
        };
        match outcome {
            Ok(matches) => {
                for record in matches {
                    on_record(record);
                }
                completion(Ok(()));
            }
            Err(err) => completion(Err(err)),
        }
    }

    fn account_status(&self, completion: StatusCallback) {
        let status = self.state().account_status;
        completion(status);
    }

    fn request_discoverability_permission(&self, completion: Completion<bool>) {
        let granted = self.state().discoverability_response;
        completion(Ok(granted));
    }

    fn fetch_user_record_id(&self, completion: Completion<RecordId>) {
        let result = match self.state().user_record_id.clone() {
            Some(record_id) => Ok(record_id),
            None => Err(RemoteError::Failed(
                "no user record id is available".to_string(),
            )),
        };
        completion(result);
    }

    fn discover_user(&self, record_id: RecordId, completion: Completion<UserIdentity>) {
        let result = {
            let state = self.state();
            match (&state.user_record_id, &state.user_identity) {
                (Some(stored_id), Some(identity)) if *stored_id == record_id => {
                    Ok(identity.clone())
                }
                _ => Err(RemoteError::NotFound(format!(
                    "no discoverable user for record id {record_id}"
                ))),
            }
        };
        completion(result);
    }

    fn request_notification_permission(&self, completion: Completion<bool>) {
        let granted = {
            let mut state = self.state();
            let granted = state.notification_permission_response;
            state.permission_granted = granted;
            granted
        };
        completion(Ok(granted));
    }

    fn register_for_remote_notifications(&self, completion: Completion<()>) {
        self.state().registered_for_remote = true;
        completion(Ok(()));
    }

    fn save_subscription(&self, subscription: Subscription, completion: Completion<String>) {
        let id = subscription.id.clone();
        self.state()
            .subscriptions
            .insert(id.clone(), subscription);
        completion(Ok(id));
    }

    fn delete_subscription(&self, subscription_id: String, completion: Completion<String>) {
        let result = {
            let mut state = self.state();
            match state.subscriptions.remove(&subscription_id) {
                Some(_) => Ok(subscription_id),
                None => Err(RemoteError::NotFound(format!(
                    "subscription {subscription_id} does not exist"
                ))),
            }
        };
        completion(result);
    }
}

fn fire_subscriptions(state: &mut State, record: &Record, event: SubscriptionTrigger) {
    if !(state.permission_granted && state.registered_for_remote) {
        return;
    }
    let fired: Vec<NotificationInfo> = state
        .subscriptions
        .values()
        .filter(|subscription| {
            subscription.trigger == event
                && subscription.record_type == record.record_type()
                && record_matches(record, &subscription.predicate)
        })
        .map(|subscription| subscription.notification.clone())
        .collect();
    state.delivered_notifications.extend(fired);
}

fn record_matches(record: &Record, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::Equals { field, value } => record.get(field) == Some(value),
        Predicate::And(parts) => parts.iter().all(|part| record_matches(record, part)),
    }
}

fn compare_records(left: &Record, right: &Record, sort: &[SortDescriptor]) -> Ordering {
    for descriptor in sort {
        let mut ordering = match (left.get(descriptor.field()), right.get(descriptor.field())) {
            (Some(a), Some(b)) => compare_values(a, b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if descriptor.direction() == SortDirection::Descending {
            ordering = ordering.reverse();
        }
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_values(left: &FieldValue, right: &FieldValue) -> Option<Ordering> {
    match (left, right) {
        (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
        (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
        (FieldValue::Asset(a), FieldValue::Asset(b)) => Some(a.location().cmp(b.location())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::remote_call;

    async fn save(service: &InMemoryRecordService, record: Record) -> Record {
        remote_call(|promise| {
            service.save_record(record, Box::new(move |result| promise.resolve(result)));
        })
        .await
        .expect("save succeeded")
    }

    #[tokio::test]
    async fn save_assigns_an_identity_once() {
        let service = InMemoryRecordService::new();
        let mut record = Record::new("Fruit");
        record.set("name", "Apple");

        let saved = save(&service, record).await;
        let id = saved.id().cloned().expect("identity assigned");

        let mut renamed = saved.clone();
        renamed.set("name", "Green Apple");
        let resaved = save(&service, renamed).await;
        assert_eq!(resaved.id(), Some(&id));
        assert_eq!(
            service.stored_record(&id).and_then(|r| r.text("name").map(String::from)),
            Some("Green Apple".to_string())
        );
    }

    #[tokio::test]
    async fn query_filters_sorts_and_limits() {
        let service = InMemoryRecordService::new();
        for (name, count) in [("Banana", 2_i64), ("Apple", 5), ("Cherry", 5)] {
            let mut record = Record::new("Fruit");
            record.set("name", name);
            record.set("count", count);
            save(&service, record).await;
        }

        let definition = QueryDefinition::new("Fruit")
            .with_predicate(Predicate::equals("count", 5_i64))
            .with_sort(vec![SortDescriptor::ascending("name")])
            .with_limit(1);
        let future = remote_call(|promise| {
            let (sender, receiver) = async_channel::unbounded();
            service.run_query(
                definition,
                Box::new(move |record| {
                    let _ = sender.try_send(record);
                }),
                Box::new(move |result| {
                    let mut names = Vec::new();
                    while let Ok(record) = receiver.try_recv() {
                        names.push(record.text("name").unwrap_or_default().to_string());
                    }
                    promise.resolve(result.map(|()| names));
                }),
            );
        });

        assert_eq!(future.await, Ok(vec!["Apple".to_string()]));
    }

    #[tokio::test]
    async fn delete_missing_record_reports_not_found() {
        let service = InMemoryRecordService::new();
        let future = remote_call(|promise| {
            service.delete_record(
                RecordId::new("rec-404"),
                Box::new(move |result| promise.resolve(result)),
            );
        });
        match future.await {
            Err(RemoteError::NotFound(_)) => {}
            other => panic!("expected not-found, got {other:?}"),
        }
    }
}
