/// Errors from the quote store.
///
/// A missing row is not an error; lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to serialize raw payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
