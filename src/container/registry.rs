use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

use crate::container::api::Container;

static CONTAINERS: Lazy<Mutex<HashMap<String, Container>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

pub(crate) fn containers_guard() -> MutexGuard<'static, HashMap<String, Container>> {
    CONTAINERS.lock().unwrap_or_else(|poison| poison.into_inner())
}
