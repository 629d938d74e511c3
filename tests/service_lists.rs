mod common;

use common::{at, seed_entry, seed_entry_with, seed_list, setup};
use sea_orm::ConnectionTrait;
use todolist::entities::entry::{self, Label, Status};
use todolist::entities::list;
use todolist::service::ListVisibility;
use todolist::TodoError;

#[tokio::test]
async fn test_get_list_by_id() {
    let service = setup().await;
    let list = seed_list(&service, "My Shopping List", false).await;

    let found = service.get_list_by_id(list.id).await.unwrap().expect("list should exist");
    assert_eq!(found.id, list.id);
    assert_eq!(found.title, "My Shopping List");

    assert!(service.get_list_by_id(list.id + 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_visibility_filters_partition_lists() {
    let service = setup().await;
    let visible_a = seed_list(&service, "Visible A", false).await;
    let hidden = seed_list(&service, "Hidden", true).await;
    let visible_b = seed_list(&service, "Visible B", false).await;

    let hidden_only = service.get_todo_lists(ListVisibility::HiddenOnly).await.unwrap();
    assert_eq!(hidden_only.len(), 1);
    assert!(hidden_only.iter().all(|l| l.hide));

    let visible_only = service.get_todo_lists(ListVisibility::VisibleOnly).await.unwrap();
    assert_eq!(visible_only.len(), 2);
    assert!(visible_only.iter().all(|l| !l.hide));

    let all = service.get_todo_lists(ListVisibility::All).await.unwrap();
    assert_eq!(all.len(), hidden_only.len() + visible_only.len());
    for list in [&visible_a, &hidden, &visible_b] {
        assert!(all.contains(list), "list {} missing from All", list.id);
    }

    // The tri-state flag maps onto the same filters
    let from_flag = service.get_todo_lists(Some(true).into()).await.unwrap();
    assert_eq!(from_flag, hidden_only);
}

#[tokio::test]
async fn test_insert_list_rejects_invalid_titles() {
    let service = setup().await;

    let empty = service.insert_list(Some(list::Model::new("", false))).await;
    assert!(matches!(empty, Err(TodoError::Store(_))), "got {:?}", empty);

    let too_long = service.insert_list(Some(list::Model::new("x".repeat(101), false))).await;
    assert!(matches!(too_long, Err(TodoError::Store(_))), "got {:?}", too_long);

    let longest = service.insert_list(Some(list::Model::new("x".repeat(100), false))).await;
    assert!(longest.is_ok());

    assert_eq!(service.get_todo_lists(ListVisibility::All).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_copy_list_duplicates_list_and_entries() {
    let service = setup().await;
    let source = seed_list(&service, "Packing", true).await;

    let originals = vec![
        seed_entry_with(
            &service,
            entry::Model {
                description: Some("Warm one".to_string()),
                additional_notes: Some("Check the zipper".to_string()),
                label: Label::Personal,
                due_date: Some(at(20, 9, 0)),
                reminder: Some(at(19, 20, 0)),
                is_reminded: true,
                status: Status::InProgress,
                ..entry::Model::new(source.id, "Jacket", at(3, 12, 0))
            },
        )
        .await,
        seed_entry_with(
            &service,
            entry::Model {
                label: Label::Work,
                status: Status::Completed,
                ..entry::Model::new(source.id, "Laptop", at(4, 8, 30))
            },
        )
        .await,
        seed_entry(&service, source.id, "Charger").await,
    ];

    let copy = service.copy_list(Some(source.clone())).await.unwrap();

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.title, source.title);
    assert_eq!(copy.hide, source.hide);

    let copied = service.get_entries_by_list_id(copy.id, false).await.unwrap();
    assert_eq!(copied.len(), originals.len());

    for (original, copied) in originals.iter().zip(&copied) {
        assert_ne!(copied.id, original.id);
        assert_eq!(copied.todo_list_id, copy.id);
        assert_eq!(copied.title, original.title);
        assert_eq!(copied.description, original.description);
        assert_eq!(copied.additional_notes, original.additional_notes);
        assert_eq!(copied.label, original.label);
        assert_eq!(copied.due_date, original.due_date);
        assert_eq!(copied.reminder, original.reminder);
        assert_eq!(copied.is_reminded, original.is_reminded);
        assert_eq!(copied.creation_date, original.creation_date);
        assert_eq!(copied.status, original.status);
    }

    // The source is untouched
    let source_entries = service.get_entries_by_list_id(source.id, false).await.unwrap();
    assert_eq!(source_entries.len(), originals.len());
}

#[tokio::test]
async fn test_copy_list_is_decoupled_from_source() {
    let service = setup().await;
    let source = seed_list(&service, "Original", false).await;
    seed_entry(&service, source.id, "Only entry").await;

    let copy = service.copy_list(Some(source.clone())).await.unwrap();
    service.remove_list(Some(source)).await.unwrap();

    let (list, entries) = service.get_list_with_entries(copy.id).await.unwrap().unwrap();
    assert_eq!(list.title, "Original");
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_copy_empty_list() {
    let service = setup().await;
    let source = seed_list(&service, "Empty", false).await;

    let copy = service.copy_list(Some(source)).await.unwrap();

    assert!(service.get_entries_by_list_id(copy.id, false).await.unwrap().is_empty());
    assert_eq!(service.get_todo_lists(ListVisibility::All).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_failed_copy_leaves_no_orphan_list() {
    let service = setup().await;
    let source = seed_list(&service, "Fragile", false).await;
    seed_entry(&service, source.id, "First").await;

    // Make every further entry insert fail, so the copy breaks after its list was written
    service
        .storage()
        .conn()
        .execute_unprepared(
            "CREATE TRIGGER reject_entries BEFORE INSERT ON todo_entries
             BEGIN
                 SELECT RAISE(ABORT, 'entry inserts disabled');
             END",
        )
        .await
        .unwrap();

    let result = service.copy_list(Some(source.clone())).await;
    assert!(matches!(result, Err(TodoError::Store(_))), "got {:?}", result);

    let lists = service.get_todo_lists(ListVisibility::All).await.unwrap();
    assert_eq!(lists, vec![source], "the half-made copy must be rolled back");
}

#[tokio::test]
async fn test_update_list() {
    let service = setup().await;
    let mut list = seed_list(&service, "Draft", false).await;

    list.title = "Final".to_string();
    list.hide = true;
    service.update_list(Some(list.clone())).await.unwrap();

    let reloaded = service.get_list_by_id(list.id).await.unwrap().unwrap();
    assert_eq!(reloaded.title, "Final");
    assert!(reloaded.hide);
    assert_eq!(service.get_todo_lists(ListVisibility::VisibleOnly).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_remove_list_removes_its_entries() {
    let service = setup().await;
    let list = seed_list(&service, "Old", false).await;
    let entry = seed_entry(&service, list.id, "Stale").await;

    service.remove_list(Some(list.clone())).await.unwrap();

    assert!(service.get_list_by_id(list.id).await.unwrap().is_none());
    assert!(service.get_entry_by_id(entry.id).await.unwrap().is_none());
}
