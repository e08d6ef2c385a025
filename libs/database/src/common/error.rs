/// Database error type for health operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The pool could not hand out a working connection
    #[error("PostgreSQL health check failed: {0}")]
    HealthCheckFailed(#[from] sea_orm::DbErr),
}
