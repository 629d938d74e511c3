use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub hide: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entry::Entity")]
    Entries,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build a transient list; the store assigns the id on insert.
    pub fn new(title: impl Into<String>, hide: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            hide,
        }
    }

    /// True once the store has assigned an identity.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

// Transient lists are only equal to themselves.
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.is_persisted() && self.id == other.id)
    }
}
