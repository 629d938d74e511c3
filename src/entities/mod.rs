pub mod entry;
pub mod list;

pub use entry::Entity as TodoEntry;
pub use list::Entity as TodoList;
