//! Entry repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Select, TransactionTrait,
};

use crate::entities::entry;

/// Repository for entry-related database operations.
pub struct EntryRepository;

impl EntryRepository {
    /// Unmaterialized query over all entries, for callers that add their own filters.
    pub fn table() -> Select<entry::Entity> {
        entry::Entity::find()
    }

    /// Get all entries ordered by id.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::table().order_by_asc(entry::Column::Id).all(conn).await
    }

    /// Get a single entry by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        entry::Entity::find_by_id(id).one(conn).await
    }

    /// Get all entries belonging to a list.
    pub async fn get_by_list_id<C>(conn: &C, list_id: i32) -> Result<Vec<entry::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::table()
            .filter(entry::Column::TodoListId.eq(list_id))
            .order_by_asc(entry::Column::Id)
            .all(conn)
            .await
    }

    /// Insert an entry under a fresh store-assigned id.
    pub async fn insert<C>(conn: &C, entry: entry::Model) -> Result<entry::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = entry.into_active_model().reset_all();
        active_model.id = ActiveValue::NotSet;
        active_model.insert(conn).await
    }

    /// Overwrite the stored entry with the same id. The creation date is kept.
    pub async fn update<C>(conn: &C, entry: entry::Model) -> Result<entry::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        entry.into_active_model().reset_all().update(conn).await
    }

    /// Overwrite several entries, committing them together.
    pub async fn update_many<C>(conn: &C, entries: Vec<entry::Model>) -> Result<Vec<entry::Model>, DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;
        let mut updated = Vec::with_capacity(entries.len());
        for entry in entries {
            updated.push(Self::update(&txn, entry).await?);
        }
        txn.commit().await?;
        Ok(updated)
    }

    /// Delete an entry.
    pub async fn remove<C>(conn: &C, entry: entry::Model) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        entry.delete(conn).await?;
        Ok(())
    }
}
