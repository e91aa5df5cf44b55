//! SQLite backend
//!
//! r2d2-based connection pool over bundled SQLite. Every pooled connection
//! gets the same pragmas (WAL, foreign keys, busy timeout) on open.

pub mod config;
pub mod connection;
pub mod pool;
pub mod pragmas;

pub use config::SqlitePoolConfig;
pub use connection::SqliteConnection;
pub use pool::SqlitePool;
pub use pragmas::apply_connection_pragmas;
