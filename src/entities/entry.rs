use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

/// Category an entry is filed under.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Label {
    #[default]
    #[sea_orm(num_value = 0)]
    General,
    #[sea_orm(num_value = 1)]
    Personal,
    #[sea_orm(num_value = 2)]
    Work,
}

/// Progress of an entry. Any value may be written by an update; the usual
/// NotStarted -> InProgress -> Completed order is a UI convention only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Status {
    #[default]
    #[sea_orm(num_value = 0)]
    NotStarted,
    #[sea_orm(num_value = 1)]
    InProgress,
    #[sea_orm(num_value = 2)]
    Completed,
}

#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub additional_notes: Option<String>,
    pub label: Label,
    pub due_date: Option<DateTime>,
    pub reminder: Option<DateTime>,
    pub is_reminded: bool,
    pub creation_date: DateTime,
    pub status: Status,
    pub todo_list_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::list::Entity",
        from = "Column::TodoListId",
        to = "super::list::Column::Id",
        on_delete = "Cascade"
    )]
    List,
}

impl Related<super::list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::List.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // creation_date and the owning list are written once, on insert
        if !insert {
            self.creation_date = ActiveValue::NotSet;
            self.todo_list_id = ActiveValue::NotSet;
        }
        Ok(self)
    }
}

impl Model {
    /// Build a transient entry in `todo_list_id` with default label, status and
    /// no dates other than the creation timestamp.
    pub fn new(todo_list_id: i32, title: impl Into<String>, creation_date: DateTime) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            additional_notes: None,
            label: Label::default(),
            due_date: None,
            reminder: None,
            is_reminded: false,
            creation_date,
            status: Status::default(),
            todo_list_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Transient copy of this entry's content filed under another list.
    pub fn duplicate_into(&self, todo_list_id: i32) -> Self {
        Self {
            id: 0,
            todo_list_id,
            ..self.clone()
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Whether the reminder is set and has not yet fired as of `now`.
    pub fn reminder_due(&self, now: DateTime) -> bool {
        !self.is_reminded && self.reminder.is_some_and(|reminder| reminder <= now)
    }
}

// Transient entries are only equal to themselves.
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.is_persisted() && self.id == other.id)
    }
}
