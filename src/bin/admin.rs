//! CLI administration tool for the user directory.
//!
//! Provides commands for seeding sample data, listing users, and checking
//! the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Insert the sample user set
//! cargo run --bin admin -- user seed
//!
//! # List all users
//! cargo run --bin admin -- user list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite URL, defaults to `sqlite:users.db`

use linkdir::domain::entities::NewUser;
use linkdir::domain::repositories::UserRepository;
use linkdir::error::AppError;
use linkdir::infrastructure::persistence::SqliteUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// Sample accounts, useful for local development and demos.
const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("John Doe", "john@example.com", "password123"),
    ("Jane Smith", "jane@example.com", "secret456"),
    ("Bob Johnson", "bob@example.com", "qwerty789"),
];

/// CLI tool for managing the user directory.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Insert the sample user set
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let pool = connect().await?;
    let repository = SqliteUserRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Seed { yes } => seed_users(&repository, yes).await?,
            UserAction::List => list_users(&repository).await?,
        },
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&pool).await?,
        },
    }

    Ok(())
}

async fn connect() -> Result<SqlitePool> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:users.db".to_string());

    let options = SqliteConnectOptions::from_str(&database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}

async fn seed_users(repository: &SqliteUserRepository, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Insert {} sample users into the database?",
                SAMPLE_USERS.len()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    for (name, email, password) in SAMPLE_USERS {
        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).context("Failed to hash password")?;

        let new_user = NewUser {
            name: (*name).to_string(),
            email: (*email).to_string(),
            password_hash,
        };

        match repository.create(new_user).await {
            Ok(user) => println!(
                "{} {} <{}> (id {})",
                "created".green(),
                user.name,
                user.email,
                user.id
            ),
            Err(AppError::Conflict(_)) => {
                println!("{} {} <{}>", "exists ".yellow(), name, email);
            }
            Err(e) => anyhow::bail!("Failed to create {email}: {e}"),
        }
    }

    Ok(())
}

async fn list_users(repository: &SqliteUserRepository) -> Result<()> {
    let users = repository.list().await.context("Failed to list users")?;

    if users.is_empty() {
        println!("{}", "No users found.".yellow());
        return Ok(());
    }

    println!("{:<6} {:<24} {}", "ID".bold(), "NAME".bold(), "EMAIL".bold());
    for user in users {
        println!("{:<6} {:<24} {}", user.id, user.name, user.email);
    }

    Ok(())
}

async fn db_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("Database check query failed")?;

    println!("{}", "Database connection OK".green());

    Ok(())
}
