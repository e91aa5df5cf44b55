//! User directory commands

use tessera_domain::{NewUser, User};
use tracing::info;

use crate::context::AppContext;
use crate::utils::execute_command;

/// List every user with plaintext emails, in insertion order.
pub async fn list_users(ctx: &AppContext) -> Result<Vec<User>, String> {
    execute_command("users::list_users", || ctx.users.list_users()).await
}

/// Add a user. Returns the assigned id.
///
/// The email is encrypted before it reaches the database; nothing is written
/// when encryption fails.
pub async fn add_user(ctx: &AppContext, name: &str, email: &str) -> Result<i64, String> {
    let user = NewUser::new(name, email);
    let id = execute_command("users::add_user", || ctx.users.add_user(user)).await?;
    info!(command = "users::add_user", user_id = id, "user added");
    Ok(id)
}

/// Remove a user by id. Removing an id that does not exist succeeds.
pub async fn remove_user(ctx: &AppContext, id: i64) -> Result<(), String> {
    execute_command("users::remove_user", || ctx.users.remove_user(id)).await
}
