use mongodb::{Client, bson::doc};
use std::time::Duration;

use crate::common::{DatabaseError, DatabaseResult};

const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Pings the deployment through the `admin` database.
///
/// ```ignore
/// use database::mongodb::check_health;
///
/// if let Err(e) = check_health(&client).await {
///     tracing::warn!("MongoDB unreachable: {e}");
/// }
/// ```
pub async fn check_health(client: &Client) -> DatabaseResult<()> {
    let admin = client.database("admin");
    let ping = admin.run_command(doc! { "ping": 1 });

    match tokio::time::timeout(PING_TIMEOUT, ping).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(DatabaseError::HealthCheckFailed(e.to_string())),
        Err(_) => Err(DatabaseError::Timeout(PING_TIMEOUT)),
    }
}
