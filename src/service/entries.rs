use log::{debug, info};
use sea_orm::prelude::DateTime;
use sea_orm::{ColumnTrait, QueryFilter, QueryOrder};

use super::{require, TodoService};
use crate::entities::entry::{self, Label};
use crate::error::TodoResult;
use crate::repositories::EntryRepository;
use crate::utils::datetime;

impl TodoService {
    /// Fires every reminder that is due as of `now`.
    ///
    /// Entries whose reminder is at or before `now` and has not fired yet are
    /// flagged `is_reminded` and written back as one batch. Calling this again
    /// returns only reminders that became due in between.
    ///
    /// # Returns
    /// Exactly the entries marked by this call
    pub async fn get_current_reminder_entries(&self, now: DateTime) -> TodoResult<Vec<entry::Model>> {
        let pending = EntryRepository::table()
            .filter(entry::Column::Reminder.is_not_null())
            .filter(entry::Column::Reminder.lte(now))
            .filter(entry::Column::IsReminded.eq(false))
            .order_by_asc(entry::Column::Reminder)
            .all(self.storage.conn())
            .await?;

        let fired: Vec<entry::Model> = pending
            .into_iter()
            .filter(|entry| entry.reminder_due(now))
            .map(|mut entry| {
                entry.is_reminded = true;
                entry
            })
            .collect();

        if fired.is_empty() {
            return Ok(fired);
        }

        let fired = EntryRepository::update_many(self.storage.conn(), fired).await?;
        info!("Fired {} reminder(s)", fired.len());
        Ok(fired)
    }

    /// Retrieves the entries of a list, optionally leaving out completed ones.
    pub async fn get_entries_by_list_id(&self, list_id: i32, hide_completed: bool) -> TodoResult<Vec<entry::Model>> {
        let mut entries = EntryRepository::get_by_list_id(self.storage.conn(), list_id).await?;
        if hide_completed {
            entries.retain(|entry| !entry.is_completed());
        }
        Ok(entries)
    }

    /// Retrieves entries due on the calendar day of `now`, whatever the time of day.
    /// Entries without a due date are never due.
    pub async fn get_entries_due_today(&self, now: DateTime) -> TodoResult<Vec<entry::Model>> {
        let (start, end) = datetime::day_bounds(now);
        let entries = EntryRepository::table()
            .filter(entry::Column::DueDate.is_not_null())
            .filter(entry::Column::DueDate.gte(start))
            .filter(entry::Column::DueDate.lt(end))
            .order_by_asc(entry::Column::DueDate)
            .all(self.storage.conn())
            .await?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.due_date.is_some_and(|due| datetime::is_same_day(due, now)))
            .collect())
    }

    /// Retrieves entries with a reminder set, fired or not.
    pub async fn get_reminder_entries(&self) -> TodoResult<Vec<entry::Model>> {
        Ok(EntryRepository::table()
            .filter(entry::Column::Reminder.is_not_null())
            .order_by_asc(entry::Column::Reminder)
            .all(self.storage.conn())
            .await?)
    }

    /// Retrieves entries labelled [`Label::Personal`].
    pub async fn get_personal_entries(&self) -> TodoResult<Vec<entry::Model>> {
        Ok(EntryRepository::table()
            .filter(entry::Column::Label.eq(Label::Personal))
            .order_by_asc(entry::Column::Id)
            .all(self.storage.conn())
            .await?)
    }

    /// Get a single entry by id. A missing entry is `Ok(None)`.
    pub async fn get_entry_by_id(&self, id: i32) -> TodoResult<Option<entry::Model>> {
        Ok(EntryRepository::get_by_id(self.storage.conn(), id).await?)
    }

    /// Stores a new entry in the list named by its `todo_list_id`.
    ///
    /// # Errors
    /// [`crate::TodoError::InvalidArgument`] when `entry` is `None`; a store
    /// error when the list does not exist or a field breaks its constraints.
    pub async fn insert_entry(&self, entry: Option<entry::Model>) -> TodoResult<entry::Model> {
        let entry = require(entry, "entry")?;
        let inserted = EntryRepository::insert(self.storage.conn(), entry).await?;
        debug!("Created entry {} in list {}", inserted.id, inserted.todo_list_id);
        Ok(inserted)
    }

    /// Overwrites an entry. Its creation date never changes.
    pub async fn update_entry(&self, entry: Option<entry::Model>) -> TodoResult<entry::Model> {
        let entry = require(entry, "entry")?;
        let updated = EntryRepository::update(self.storage.conn(), entry).await?;
        debug!("Updated entry {}", updated.id);
        Ok(updated)
    }

    pub async fn remove_entry(&self, entry: Option<entry::Model>) -> TodoResult<()> {
        let entry = require(entry, "entry")?;
        let id = entry.id;
        EntryRepository::remove(self.storage.conn(), entry).await?;
        debug!("Removed entry {}", id);
        Ok(())
    }
}
