#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use todolist::entities::{entry, list};
use todolist::service::TodoService;
use todolist::storage::LocalStorage;

/// Fresh service over an empty in-memory store.
pub async fn setup() -> TodoService {
    let storage = LocalStorage::in_memory().await.expect("in-memory store should open");
    TodoService::new(storage)
}

/// 2026-10-`day` at `hour`:`minute`.
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub async fn seed_list(service: &TodoService, title: &str, hide: bool) -> list::Model {
    service
        .insert_list(Some(list::Model::new(title, hide)))
        .await
        .expect("list insert should succeed")
}

pub async fn seed_entry(service: &TodoService, list_id: i32, title: &str) -> entry::Model {
    seed_entry_with(service, entry::Model::new(list_id, title, at(1, 8, 0))).await
}

pub async fn seed_entry_with(service: &TodoService, entry: entry::Model) -> entry::Model {
    service.insert_entry(Some(entry)).await.expect("entry insert should succeed")
}
