use std::sync::Arc;

use crate::notifications::error::{
    failed_registration, permission_blocked, subscribe_failed, unsubscribe_failed,
    NotificationsError,
};
use crate::notifications::types::Subscription;
use crate::remote::{remote_call, RecordServiceArc, RemoteError, RemoteFuture};

/// Push-subscription lifecycle for one container.
///
/// The handle keeps no local registration state: re-subscribing under an
/// identifier is a remote replace-in-place, and unsubscribing an identifier
/// that is already gone is a success because the desired end state is
/// reached either way.
#[derive(Clone)]
pub struct Notifications {
    service: RecordServiceArc,
}

impl Notifications {
    pub(crate) fn new(service: RecordServiceArc) -> Self {
        Self { service }
    }

    /// One-shot permission handshake: asks the user for notification
    /// permission and, once granted, registers the process for remote
    /// delivery. Until both steps complete, no subscription fires on this
    /// client. Independent of `subscribe`/`unsubscribe`.
    pub fn request_permission(&self) -> RemoteFuture<bool, NotificationsError> {
        let service = Arc::clone(&self.service);
        remote_call(move |promise| {
            let register_service = Arc::clone(&service);
            service.request_notification_permission(Box::new(move |result| match result {
                Ok(true) => {
                    register_service.register_for_remote_notifications(Box::new(move |result| {
                        promise.resolve(match result {
                            Ok(()) => Ok(true),
                            Err(err) => Err(failed_registration(err.to_string())),
                        });
                    }));
                }
                Ok(false) => {
                    promise.resolve(Err(permission_blocked(
                        "notification permission was denied",
                    )));
                }
                Err(err) => promise.resolve(Err(permission_blocked(err.to_string()))),
            }));
        })
    }

    /// Registers a server-side trigger under the subscription's stable
    /// identifier.
    pub fn subscribe(&self, subscription: Subscription) -> RemoteFuture<bool, NotificationsError> {
        let service = Arc::clone(&self.service);
        remote_call(move |promise| {
            service.save_subscription(
                subscription,
                Box::new(move |result| {
                    promise.resolve(
                        result
                            .map(|_| true)
                            .map_err(|err| subscribe_failed(err.to_string())),
                    );
                }),
            );
        })
    }

    /// Removes the registration under `subscription_id`. Idempotent: a
    /// remote not-found also resolves as success.
    pub fn unsubscribe(
        &self,
        subscription_id: impl Into<String>,
    ) -> RemoteFuture<bool, NotificationsError> {
        let subscription_id = subscription_id.into();
        let service = Arc::clone(&self.service);
        remote_call(move |promise| {
            service.delete_subscription(
                subscription_id,
                Box::new(move |result| {
                    promise.resolve(match result {
                        Ok(_) => Ok(true),
                        Err(RemoteError::NotFound(_)) => Ok(true),
                        Err(err) => Err(unsubscribe_failed(err.to_string())),
                    });
                }),
            );
        })
    }
}
