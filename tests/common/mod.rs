#![allow(dead_code)]

use std::sync::Arc;

use recordbase_rs_sdk::container::{initialize_container, Container};
use recordbase_rs_sdk::records::{AssetReference, Record, RecordId, RecordMappable};
use recordbase_rs_sdk::remote::InMemoryRecordService;

pub const FRUIT_RECORD_TYPE: &str = "Fruit";

/// The sample domain model used across the suites: a named item with an
/// optional image reference and an optional count.
#[derive(Clone, Debug, PartialEq)]
pub struct Fruit {
    pub name: String,
    pub image: Option<AssetReference>,
    pub count: i64,
    pub id: Option<RecordId>,
}

impl Fruit {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            image: None,
            count: 0,
            id: None,
        }
    }
}

impl RecordMappable for Fruit {
    fn from_record(record: &Record) -> Option<Self> {
        let name = record.text("name")?.to_string();
        Some(Fruit {
            name,
            image: record.asset("image").cloned(),
            count: record.integer("count").unwrap_or(0),
            id: record.id().cloned(),
        })
    }

    fn record(&self) -> Record {
        let mut record = match &self.id {
            Some(id) => Record::with_id(FRUIT_RECORD_TYPE, id.clone()),
            None => Record::new(FRUIT_RECORD_TYPE),
        };
        record.set("name", self.name.as_str());
        if let Some(image) = &self.image {
            record.set("image", image.clone());
        }
        record.set("count", self.count);
        record
    }
}

/// Fresh in-memory service registered under a test-unique container name.
/// The returned service handle shares the container's store.
pub fn fixture(name: &str) -> (InMemoryRecordService, Container) {
    let service = InMemoryRecordService::new();
    let container = initialize_container(Some(name), Arc::new(service.clone()))
        .expect("container name is unique per test");
    (service, container)
}
