use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Check PostgreSQL database health
///
/// Pings the pool to verify a connection can be acquired and used. Backs the
/// `/ready` endpoint.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    db.ping().await?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
