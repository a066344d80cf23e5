//! Boundary to the remote record service.
//!
//! The service API is callback based: every operation is a single-shot call
//! carrying one completion callback. [`bridge`] turns those completions into
//! futures; [`in_memory`] is the reference backend used by tests and local
//! development.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::notifications::Subscription;
use crate::records::{QueryDefinition, Record, RecordId};

pub mod bridge;
pub mod in_memory;

/// Raw transport-level failure reported by the remote service. The facades
/// normalize these into their module error taxonomies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteError {
    NotFound(String),
    PermissionDenied(String),
    Unavailable(String),
    Failed(String),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::NotFound(message) => write!(f, "not found: {message}"),
            RemoteError::PermissionDenied(message) => write!(f, "permission denied: {message}"),
            RemoteError::Unavailable(message) => write!(f, "service unavailable: {message}"),
            RemoteError::Failed(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for RemoteError {}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Completion callback of a single-shot remote operation.
pub type Completion<T> = Box<dyn FnOnce(RemoteResult<T>) + Send + 'static>;

/// Per-record callback of a streaming query, fired in arrival order.
pub type RecordCallback = Box<dyn FnMut(Record) + Send + 'static>;

/// Completion callback of the account-status probe.
pub type StatusCallback = Box<dyn FnOnce(AccountStatus) + Send + 'static>;

/// Account state reported by the remote service.
///
/// `Unknown` covers statuses the client does not recognize; the service may
/// grow new ones ahead of the SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Available,
    NoAccount,
    Restricted,
    CouldNotDetermine,
    Unknown,
}

/// Name components of a discoverable user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl UserIdentity {
    /// Preferred display name: the given name, falling back to the family
    /// name.
    pub fn display_name(&self) -> Option<&str> {
        self.given_name
            .as_deref()
            .or(self.family_name.as_deref())
    }
}

/// Client-side contract of the remote record database.
///
/// Every method issues exactly one remote round trip and reports through its
/// callback. No ordering is guaranteed across calls, and none of them can be
/// cancelled once issued.
pub trait RecordService: Send + Sync + 'static {
    /// Upsert-by-identity: a record without an id is created and assigned
    /// one, a record with an id replaces the stored row.
    fn save_record(&self, record: Record, completion: Completion<Record>);

    fn delete_record(&self, record_id: RecordId, completion: Completion<RecordId>);

    /// Streams matched records through `on_record`, then fires `completion`
    /// exactly once when the scan is exhausted or fails.
    fn run_query(&self, query: QueryDefinition, on_record: RecordCallback, completion: Completion<()>);

    fn account_status(&self, completion: StatusCallback);

    fn request_discoverability_permission(&self, completion: Completion<bool>);

    fn fetch_user_record_id(&self, completion: Completion<RecordId>);

    fn discover_user(&self, record_id: RecordId, completion: Completion<UserIdentity>);

    fn request_notification_permission(&self, completion: Completion<bool>);

    fn register_for_remote_notifications(&self, completion: Completion<()>);

    /// Registration under an already-used identifier replaces the stored
    /// subscription in place.
    fn save_subscription(&self, subscription: Subscription, completion: Completion<String>);

    fn delete_subscription(&self, subscription_id: String, completion: Completion<String>);
}

pub type RecordServiceArc = Arc<dyn RecordService>;

pub use bridge::{remote_call, RemoteFuture, RemotePromise};
pub use in_memory::InMemoryRecordService;
