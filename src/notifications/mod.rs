#![doc = include_str!("README.md")]
mod api;
pub mod error;
mod types;

pub use api::Notifications;
pub use error::{NotificationsError, NotificationsErrorCode, NotificationsResult};
pub use types::{NotificationInfo, Subscription, SubscriptionTrigger};
