//! Error type for todo service operations.

/// Errors returned by [`crate::service::TodoService`].
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// A required entity argument was missing. Raised before the store is touched.
    #[error("Invalid argument: {0} must be provided")]
    InvalidArgument(&'static str),

    /// Failure reported by the store: constraint violations, unknown ids on
    /// update, connection errors.
    #[error(transparent)]
    Store(#[from] sea_orm::DbErr),
}

impl TodoError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type TodoResult<T> = Result<T, TodoError>;
