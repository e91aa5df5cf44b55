#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tempfile::TempDir;
use tessera_common::security::{generate_field_key, KeySource, SecureString};
use tessera_core::FieldCipher;
use tessera_infra::crypto::FieldCodec;
use tessera_infra::database::{DbManager, SqliteUserRepository};

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("tessera-test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), temp_dir }
    }

    /// Execute a batch of SQL statements against the database.
    pub fn execute_batch(&self, sql: &str) {
        let conn = self
            .manager
            .get_connection()
            .expect("connection should be available for execute_batch");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }

    /// Raw `email` column values in row order.
    pub fn stored_emails(&self) -> Vec<Option<String>> {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_map("SELECT email FROM users ORDER BY id", [], |row| row.get(0))
            .expect("email column should be readable")
    }

    pub fn row_count(&self) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("row count should be readable")
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Every file SQLite keeps for this database (main, WAL, shared memory).
    pub fn database_files(&self) -> Vec<PathBuf> {
        let main = self.manager.path().to_path_buf();
        let mut files = vec![main.clone()];
        for suffix in ["-wal", "-shm"] {
            let mut name = main.clone().into_os_string();
            name.push(suffix);
            let path = PathBuf::from(name);
            if path.exists() {
                files.push(path);
            }
        }
        files
    }

    /// Whether `needle` appears verbatim in any of the database files.
    pub fn files_contain(&self, needle: &[u8]) -> bool {
        self.database_files().iter().any(|path| {
            let bytes = std::fs::read(path).expect("database file should be readable");
            bytes.windows(needle.len()).any(|window| window == needle)
        })
    }

    /// Repository over this database with the given cipher.
    pub fn repository(&self, cipher: Arc<dyn FieldCipher>) -> SqliteUserRepository {
        SqliteUserRepository::new(Arc::clone(&self.manager), cipher)
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh random field key.
pub fn test_key() -> SecureString {
    generate_field_key()
}

/// Codec over a fixed hex key.
pub fn codec_with_key(key: &SecureString) -> Arc<FieldCodec> {
    Arc::new(FieldCodec::new(KeySource::direct(key.expose())))
}

/// Handle for inspecting captured tracing output during tests.
pub struct LogHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogHandle {
    /// All captured output so far, across every test in this binary.
    pub fn contents(&self) -> String {
        let guard = self.buffer.lock().expect("log mutex poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log mutex poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static LOG_BUFFER: OnceLock<Arc<Mutex<Vec<u8>>>> = OnceLock::new();

/// Install a global subscriber that records every event at TRACE level
/// (idempotent) and obtain a handle for reading the output.
pub fn init_test_logger() -> LogHandle {
    let buffer = LOG_BUFFER.get_or_init(|| {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&buffer);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || BufferWriter(Arc::clone(&writer)))
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);

        buffer
    });

    LogHandle { buffer: Arc::clone(buffer) }
}
