//! Command surface
//!
//! Each command takes the [`AppContext`](crate::AppContext), logs its outcome
//! and returns a user-facing error string.

pub mod crypto;
pub mod health;
pub mod users;

pub use crypto::{decrypt_string, encrypt_string};
pub use health::get_app_health;
pub use users::{add_user, list_users, remove_user};
