use log::{debug, info};
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, TransactionTrait};

use super::{require, ListVisibility, TodoService};
use crate::entities::{entry, list};
use crate::error::TodoResult;
use crate::repositories::{EntryRepository, ListRepository};

impl TodoService {
    /// Retrieves lists filtered by their `hide` flag.
    pub async fn get_todo_lists(&self, visibility: ListVisibility) -> TodoResult<Vec<list::Model>> {
        let mut query = ListRepository::table();
        if let Some(hide) = visibility.hide_filter() {
            query = query.filter(list::Column::Hide.eq(hide));
        }
        Ok(query.order_by_asc(list::Column::Id).all(self.storage.conn()).await?)
    }

    /// Get a single list by id. A missing list is `Ok(None)`.
    pub async fn get_list_by_id(&self, id: i32) -> TodoResult<Option<list::Model>> {
        Ok(ListRepository::get_by_id(self.storage.conn(), id).await?)
    }

    /// Get a list together with its entries.
    pub async fn get_list_with_entries(&self, id: i32) -> TodoResult<Option<(list::Model, Vec<entry::Model>)>> {
        Ok(ListRepository::get_with_entries(self.storage.conn(), id).await?)
    }

    /// Stores a new list and returns it with its assigned id.
    ///
    /// # Errors
    /// [`crate::TodoError::InvalidArgument`] when `list` is `None`; store
    /// errors (empty or over-long title) otherwise.
    pub async fn insert_list(&self, list: Option<list::Model>) -> TodoResult<list::Model> {
        let list = require(list, "list")?;
        let inserted = ListRepository::insert(self.storage.conn(), list).await?;
        info!("Created list {} '{}'", inserted.id, inserted.title);
        Ok(inserted)
    }

    /// Duplicates a list and all of its entries.
    ///
    /// The new list gets the source's title and hide flag, and each entry of
    /// the source is copied into it with a fresh id. Everything is written in
    /// a single transaction, so a failure part-way leaves no partial copy.
    ///
    /// # Returns
    /// The newly created list
    pub async fn copy_list(&self, list: Option<list::Model>) -> TodoResult<list::Model> {
        let source = require(list, "list")?;

        let txn = self.storage.conn().begin().await?;

        let copy = ListRepository::insert(&txn, list::Model::new(source.title.clone(), source.hide)).await?;
        let entries = EntryRepository::get_by_list_id(&txn, source.id).await?;
        let copied = entries.len();
        for entry in &entries {
            EntryRepository::insert(&txn, entry.duplicate_into(copy.id)).await?;
        }

        txn.commit().await?;

        info!("Copied list {} into {} with {} entries", source.id, copy.id, copied);
        Ok(copy)
    }

    pub async fn update_list(&self, list: Option<list::Model>) -> TodoResult<list::Model> {
        let list = require(list, "list")?;
        let updated = ListRepository::update(self.storage.conn(), list).await?;
        debug!("Updated list {}", updated.id);
        Ok(updated)
    }

    /// Deletes a list. The store removes its entries as well.
    pub async fn remove_list(&self, list: Option<list::Model>) -> TodoResult<()> {
        let list = require(list, "list")?;
        let id = list.id;
        ListRepository::remove(self.storage.conn(), list).await?;
        info!("Removed list {}", id);
        Ok(())
    }
}
