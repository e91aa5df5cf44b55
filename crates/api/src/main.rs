//! Tessera - encrypted user directory
//!
//! Command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tessera_domain::{KeyStorage, User};
use tessera_infra::{config, KeyManager};
use tessera_lib::utils::{init_tracing, LogFormat};
use tessera_lib::{commands, load_config, AppContext};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Local user directory with encrypted email storage", long_about = None)]
struct Cli {
    /// Database file (overrides configuration)
    #[arg(long, global = true, env = "TESSERA_DB_PATH")]
    db: Option<PathBuf>,

    /// Where the field key is kept: keychain, environment or ephemeral
    #[arg(long, global = true, env = "TESSERA_KEY_STORAGE")]
    key_storage: Option<KeyStorage>,

    /// Configuration file (JSON or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum, env = "TESSERA_LOG_FORMAT", default_value_t)]
    log_format: LogFormat,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,

    /// Add a user and print the refreshed list
    Add {
        name: String,
        email: String,
    },

    /// Remove a user by id and print the refreshed list
    Remove {
        id: i64,
    },

    /// Encrypt a value with the field key
    Encrypt {
        value: String,
    },

    /// Decrypt an `enc:v1:` value with the field key
    Decrypt {
        value: String,
    },

    /// Check that the database is reachable
    Health,

    /// Print a new random field key (64 hex characters)
    Keygen,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Load .env before parsing so env-backed flags see it
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    if let Commands::Keygen = cli.command {
        println!("{}", KeyManager::generate_key().expose());
        return Ok(());
    }

    let mut app_config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))?,
        None => load_config()?,
    };
    if let Some(db) = &cli.db {
        app_config.database.path = db.display().to_string();
    }
    if let Some(key_storage) = cli.key_storage {
        app_config.encryption.key_storage = key_storage;
    }

    let ctx = AppContext::new_with_config(app_config)?;

    match cli.command {
        Commands::List => print_users(&ctx, cli.json).await,
        Commands::Add { name, email } => {
            let id = commands::add_user(&ctx, &name, &email).await.map_err(|e| anyhow!(e))?;
            if !cli.json {
                println!("added user {id}");
            }
            print_users(&ctx, cli.json).await
        }
        Commands::Remove { id } => {
            commands::remove_user(&ctx, id).await.map_err(|e| anyhow!(e))?;
            if !cli.json {
                println!("removed user {id}");
            }
            print_users(&ctx, cli.json).await
        }
        Commands::Encrypt { value } => {
            println!("{}", commands::encrypt_string(&ctx, &value).await.map_err(|e| anyhow!(e))?);
            Ok(())
        }
        Commands::Decrypt { value } => {
            println!("{}", commands::decrypt_string(&ctx, &value).await.map_err(|e| anyhow!(e))?);
            Ok(())
        }
        Commands::Health => {
            let status = commands::get_app_health(&ctx).await.map_err(|e| anyhow!(e))?;
            if cli.json {
                let report = serde_json::json!({
                    "healthy": status.healthy,
                    "active_connections": status.active_connections,
                    "idle_connections": status.idle_connections,
                    "max_connections": status.max_connections,
                    "message": status.message,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "healthy: {} ({} active, {} idle, {} max)",
                    status.healthy,
                    status.active_connections,
                    status.idle_connections,
                    status.max_connections
                );
            }
            Ok(())
        }
        Commands::Keygen => Ok(()),
    }
}

async fn print_users(ctx: &AppContext, json: bool) -> Result<()> {
    let users = commands::list_users(ctx).await.map_err(|e| anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("no users");
    }
    for User { id, name, email } in &users {
        println!("{id}\t{name}\t{email}");
    }
    Ok(())
}
