//! Database health command

use tessera_common::storage::HealthStatus;

use crate::context::AppContext;
use crate::utils::execute_command;

/// Report connection pool health for the configured database.
pub async fn get_app_health(ctx: &AppContext) -> Result<HealthStatus, String> {
    execute_command("health::get_app_health", || ctx.health_check()).await
}
