#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
    #[error("Invalid {field} classification in row {id}: {value}")]
    InvalidClassification {
        field: &'static str,
        id: i32,
        value: String,
    },
}
