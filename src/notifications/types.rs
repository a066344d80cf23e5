use serde::{Deserialize, Serialize};

use crate::records::Predicate;

/// Record event a subscription fires on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionTrigger {
    RecordCreation,
    RecordUpdate,
    RecordDeletion,
}

/// Payload displayed to the user when a subscription fires.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationInfo {
    pub title: Option<String>,
    pub body: Option<String>,
    pub sound: Option<String>,
}

/// Server-side trigger registration.
///
/// The stable `id` is the invariant tying registration to later removal:
/// `subscribe` stores under it, `unsubscribe` removes by it, and
/// re-registering the same id replaces the stored subscription in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub record_type: String,
    pub predicate: Predicate,
    pub trigger: SubscriptionTrigger,
    pub notification: NotificationInfo,
}

impl Subscription {
    /// A creation-trigger subscription matching every record of the type.
    pub fn on_creation(id: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            record_type: record_type.into(),
            predicate: Predicate::True,
            trigger: SubscriptionTrigger::RecordCreation,
            notification: NotificationInfo::default(),
        }
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_notification(mut self, notification: NotificationInfo) -> Self {
        self.notification = notification;
        self
    }
}
