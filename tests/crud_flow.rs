mod common;

use common::{fixture, Fruit, FRUIT_RECORD_TYPE};
use recordbase_rs_sdk::records::{
    AssetReference, Predicate, Record, RecordErrorCode, RecordId, RecordMappable, SortDescriptor,
};

#[tokio::test]
async fn add_assigns_an_identity_and_delete_uses_it() {
    let (_service, container) = fixture("crud-add-delete");
    let database = container.database();

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());

    let fruits: Vec<Fruit> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    assert_eq!(fruits.len(), 1);
    let apple = &fruits[0];
    assert!(apple.id.is_some());

    assert!(database.delete(apple).await.unwrap());
    let fruits: Vec<Fruit> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    assert!(fruits.is_empty());
}

#[tokio::test]
async fn fetch_reproduces_every_observable_field() {
    let (_service, container) = fixture("crud-round-trip");
    let database = container.database();

    let mut peach = Fruit::named("Peach");
    peach.image = Some(AssetReference::new("assets/peach.png"));
    peach.count = 7;
    assert!(database.add(&peach).await.unwrap());

    let fruits: Vec<Fruit> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    assert_eq!(fruits.len(), 1);
    assert_eq!(fruits[0].name, "Peach");
    assert_eq!(fruits[0].image, peach.image);
    assert_eq!(fruits[0].count, 7);
}

#[tokio::test]
async fn fetch_skips_records_that_do_not_decode() {
    let (_service, container) = fixture("crud-skip-policy");
    let database = container.database();

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());
    assert!(database.add(&Fruit::named("Banana")).await.unwrap());

    // well-formed for the store, malformed for Fruit: no name field
    let mut nameless = Record::new(FRUIT_RECORD_TYPE);
    nameless.set("count", 12_i64);
    database.save_record(nameless).await.unwrap();

    let fruits: Vec<Fruit> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    assert_eq!(fruits.len(), 2);

    let records: Vec<Record> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn ascending_sort_returns_apple_before_banana() {
    let (_service, container) = fixture("crud-sort");
    let database = container.database();

    assert!(database.add(&Fruit::named("Banana")).await.unwrap());
    assert!(database.add(&Fruit::named("Apple")).await.unwrap());

    let fruits: Vec<Fruit> = database
        .fetch(
            Predicate::True,
            FRUIT_RECORD_TYPE,
            vec![SortDescriptor::ascending("name")],
            None,
        )
        .await
        .unwrap();
    let names: Vec<&str> = fruits.iter().map(|fruit| fruit.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Banana"]);
}

#[tokio::test]
async fn limit_caps_the_result_count() {
    let (_service, container) = fixture("crud-limit");
    let database = container.database();

    for name in ["Apple", "Banana", "Cherry"] {
        assert!(database.add(&Fruit::named(name)).await.unwrap());
    }

    let fruits: Vec<Fruit> = database
        .fetch(
            Predicate::True,
            FRUIT_RECORD_TYPE,
            vec![SortDescriptor::ascending("name")],
            Some(2),
        )
        .await
        .unwrap();
    assert_eq!(fruits.len(), 2);
}

#[tokio::test]
async fn delete_missing_identity_resolves_not_found() {
    let (_service, container) = fixture("crud-delete-missing");
    let database = container.database();

    let mut phantom = Fruit::named("Phantom");
    phantom.id = Some(RecordId::new("rec-404"));
    let err = database.delete(&phantom).await.unwrap_err();
    assert_eq!(err.code, RecordErrorCode::NotFound);

    let unsaved = Fruit::named("Ghost");
    let err = database.delete(&unsaved).await.unwrap_err();
    assert_eq!(err.code, RecordErrorCode::NotFound);
}

#[tokio::test]
async fn update_rides_the_upsert_save_path() {
    let (_service, container) = fixture("crud-update");
    let database = container.database();

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());
    let fruits: Vec<Fruit> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    let renamed = fruits[0]
        .with_updated_field("name", "Green Apple")
        .expect("renamed fruit still decodes");

    assert!(database.update(&renamed).await.unwrap());

    let fruits: Vec<Fruit> = database
        .fetch(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap();
    assert_eq!(fruits.len(), 1);
    assert_eq!(fruits[0].name, "Green Apple");
    assert_eq!(fruits[0].id, renamed.id);
}

#[tokio::test]
async fn hard_query_failure_resolves_query_failed() {
    let (service, container) = fixture("crud-query-failure");
    let database = container.database();

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());
    service.fail_next_query("cursor lost");

    let err = database
        .fetch::<Fruit>(Predicate::True, FRUIT_RECORD_TYPE, vec![], None)
        .await
        .unwrap_err();
    assert_eq!(err.code, RecordErrorCode::QueryFailed);
}

#[tokio::test]
async fn save_failure_is_tagged_by_operation() {
    let (service, container) = fixture("crud-save-failure");
    let database = container.database();

    service.fail_next_save("quota exceeded");
    let err = database.add(&Fruit::named("Apple")).await.unwrap_err();
    assert_eq!(err.code, RecordErrorCode::SaveFailed);
}

#[tokio::test]
async fn equals_predicate_filters_server_side() {
    let (_service, container) = fixture("crud-predicate");
    let database = container.database();

    assert!(database.add(&Fruit::named("Apple")).await.unwrap());
    assert!(database.add(&Fruit::named("Banana")).await.unwrap());

    let fruits: Vec<Fruit> = database
        .fetch(
            Predicate::equals("name", "Apple"),
            FRUIT_RECORD_TYPE,
            vec![],
            None,
        )
        .await
        .unwrap();
    assert_eq!(fruits.len(), 1);
    assert_eq!(fruits[0].name, "Apple");
}
