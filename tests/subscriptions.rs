mod common;

use common::{fixture, Fruit, FRUIT_RECORD_TYPE};
use recordbase_rs_sdk::notifications::{
    NotificationInfo, NotificationsErrorCode, Subscription,
};
use recordbase_rs_sdk::records::Predicate;

fn fruit_added_subscription() -> Subscription {
    Subscription::on_creation("fruit-added", FRUIT_RECORD_TYPE).with_notification(
        NotificationInfo {
            title: Some("Fruit added".to_string()),
            body: Some("A new fruit was added to the database".to_string()),
            sound: Some("default".to_string()),
        },
    )
}

#[tokio::test]
async fn unsubscribe_is_idempotent() {
    let (_service, container) = fixture("subs-idempotent");
    let notifications = container.notifications();

    assert!(notifications
        .subscribe(fruit_added_subscription())
        .await
        .unwrap());
    assert!(notifications.unsubscribe("fruit-added").await.unwrap());
    assert!(notifications.unsubscribe("fruit-added").await.unwrap());
}

#[tokio::test]
async fn unsubscribing_without_a_registration_succeeds() {
    let (_service, container) = fixture("subs-never-registered");
    let notifications = container.notifications();
    assert!(notifications.unsubscribe("fruit-added").await.unwrap());
}

#[tokio::test]
async fn resubscribing_replaces_the_registration_in_place() {
    let (service, container) = fixture("subs-replace");
    let notifications = container.notifications();

    assert!(notifications
        .subscribe(fruit_added_subscription())
        .await
        .unwrap());
    let updated = fruit_added_subscription().with_notification(NotificationInfo {
        title: Some("Fresh fruit!".to_string()),
        ..NotificationInfo::default()
    });
    assert!(notifications.subscribe(updated).await.unwrap());

    let stored = service.subscription("fruit-added").expect("still registered");
    assert_eq!(stored.notification.title.as_deref(), Some("Fresh fruit!"));
}

#[tokio::test]
async fn delivery_requires_the_permission_handshake() {
    let (service, container) = fixture("subs-permission-gate");
    let notifications = container.notifications();
    let database = container.database();

    assert!(notifications
        .subscribe(fruit_added_subscription())
        .await
        .unwrap());

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());
    assert!(service.delivered_notifications().is_empty());

    assert!(notifications.request_permission().await.unwrap());

    assert!(database.add(&Fruit::named("Banana")).await.unwrap());
    let delivered = service.delivered_notifications();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title.as_deref(), Some("Fruit added"));
}

#[tokio::test]
async fn denied_permission_resolves_permission_blocked() {
    let (service, container) = fixture("subs-permission-denied");
    let notifications = container.notifications();

    service.set_notification_permission_response(false);
    let err = notifications.request_permission().await.unwrap_err();
    assert_eq!(err.code, NotificationsErrorCode::PermissionBlocked);
}

#[tokio::test]
async fn creation_trigger_honors_its_predicate() {
    let (service, container) = fixture("subs-predicate");
    let notifications = container.notifications();
    let database = container.database();

    let subscription =
        fruit_added_subscription().with_predicate(Predicate::equals("name", "Apple"));
    assert!(notifications.subscribe(subscription).await.unwrap());
    assert!(notifications.request_permission().await.unwrap());

    assert!(database.add(&Fruit::named("Banana")).await.unwrap());
    assert!(service.delivered_notifications().is_empty());

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());
    assert_eq!(service.delivered_notifications().len(), 1);
}
