//! Command execution helpers
//!
//! Every command goes through [`execute_command`], so timing and outcome
//! logging look the same across the command surface.

use std::future::Future;
use std::time::Instant;

use tessera_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Run a command, log its outcome and convert the error for the caller.
///
/// The domain error is logged by kind only; its message is returned to the
/// caller as the user-facing string.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn list_users(ctx: &AppContext) -> Result<Vec<User>, String> {
///     execute_command("users::list_users", || ctx.users.list_users()).await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let elapsed = start.elapsed();
    log_command_execution(command_name, elapsed, result.as_ref().err().map(error_label));

    result.map_err(|e| e.to_string())
}
