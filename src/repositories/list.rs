//! List repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
    Select, TransactionTrait,
};

use crate::entities::{entry, list};

/// Repository for list-related database operations.
pub struct ListRepository;

impl ListRepository {
    /// Unmaterialized query over all lists, for callers that add their own filters.
    pub fn table() -> Select<list::Entity> {
        list::Entity::find()
    }

    /// Get all lists ordered by id.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<list::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::table().order_by_asc(list::Column::Id).all(conn).await
    }

    /// Get a single list by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<list::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        list::Entity::find_by_id(id).one(conn).await
    }

    /// Get a list together with its entries ordered by id.
    pub async fn get_with_entries<C>(conn: &C, id: i32) -> Result<Option<(list::Model, Vec<entry::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(list) = Self::get_by_id(conn, id).await? else {
            return Ok(None);
        };
        let entries = list
            .find_related(entry::Entity)
            .order_by_asc(entry::Column::Id)
            .all(conn)
            .await?;
        Ok(Some((list, entries)))
    }

    /// Insert a list under a fresh store-assigned id.
    pub async fn insert<C>(conn: &C, list: list::Model) -> Result<list::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = list.into_active_model().reset_all();
        active_model.id = ActiveValue::NotSet;
        active_model.insert(conn).await
    }

    /// Overwrite the stored list with the same id.
    pub async fn update<C>(conn: &C, list: list::Model) -> Result<list::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        list.into_active_model().reset_all().update(conn).await
    }

    /// Overwrite several lists, committing them together.
    pub async fn update_many<C>(conn: &C, lists: Vec<list::Model>) -> Result<Vec<list::Model>, DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;
        let mut updated = Vec::with_capacity(lists.len());
        for list in lists {
            updated.push(Self::update(&txn, list).await?);
        }
        txn.commit().await?;
        Ok(updated)
    }

    /// Delete a list; its entries go with it.
    pub async fn remove<C>(conn: &C, list: list::Model) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        list.delete(conn).await?;
        Ok(())
    }
}
