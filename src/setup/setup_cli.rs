use clap::{Parser, Subcommand};
use medgan_backend::config::Config;
use medgan_backend::helper::public_helpers::seed_all_content;
use medgan_backend::helper::validation_helpers::normalize_email;
use medgan_backend::models::db_operations::newsletter_db_operations;
use medgan_backend::setup::db_setup;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "setup_cli", author, version, about = "A CLI for setting up and maintaining the MedGAN site store.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the .env configuration file.
    #[arg(long, required = true, value_name = "FILE")]
    env_file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    Newsletter {
        #[command(subcommand)]
        action: NewsletterAction,
    },
}

#[derive(Subcommand, Debug)]
enum DbAction {
    /// Creates the store file and every table.
    Setup,
    /// Inserts the default jobs, posts, case studies and testimonials into empty tables.
    Seed,
}

#[derive(Subcommand, Debug)]
enum NewsletterAction {
    List,
    Unsubscribe {
        #[arg(long)]
        email: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env(&cli.env_file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    let Some(db_path) = config.db_path() else {
        eprintln!("❌ Error: DATABASE_PATH is not set in '{}'.", cli.env_file.display());
        std::process::exit(1);
    };

    match &cli.command {
        Commands::Db { action } => match action {
            DbAction::Setup => setup_database(&db_path),
            DbAction::Seed => seed_database(&db_path),
        },
        Commands::Newsletter { action } => match action {
            NewsletterAction::List => list_subscriptions(&db_path),
            NewsletterAction::Unsubscribe { email } => unsubscribe(&db_path, email),
        },
    }
}

fn open_existing(db_path: &PathBuf) -> Option<Connection> {
    if !db_path.exists() {
        eprintln!("❌ Error: Site database not found at '{}'. Please run `setup_cli db setup` first.", db_path.display());
        return None;
    }
    match Connection::open(db_path) {
        Ok(conn) => Some(conn),
        Err(e) => {
            eprintln!("❌ Error opening site database: {}", e);
            None
        }
    }
}

fn setup_database(db_path: &PathBuf) {
    println!("\nSetting up site database at '{}'...", db_path.display());

    if let Some(parent_dir) = db_path.parent() {
        if let Err(e) = fs::create_dir_all(parent_dir) {
            eprintln!("❌ Error: Could not create database directory: {}", e);
            return;
        }
    }

    let mut conn = match Connection::open(db_path) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Error creating site database file: {}", e);
            return;
        }
    };
    match db_setup::setup_site_db(&mut conn) {
        Ok(_) => println!("✅ Site database setup completed successfully."),
        Err(e) => eprintln!("❌ Error setting up site database: {}", e),
    }
}

fn seed_database(db_path: &PathBuf) {
    let Some(mut conn) = open_existing(db_path) else { return };

    match seed_all_content(&mut conn) {
        Ok(results) => {
            for (table, seeded) in results {
                if seeded {
                    println!("✅ Seeded default rows into '{}'.", table);
                } else {
                    println!("ℹ️ '{}' already has rows. Skipping.", table);
                }
            }
        }
        Err(e) => eprintln!("❌ Error seeding site database: {}", e),
    }
}

fn list_subscriptions(db_path: &PathBuf) {
    let Some(conn) = open_existing(db_path) else { return };

    match newsletter_db_operations::read_all_subscriptions(&conn) {
        Ok(subscriptions) => {
            println!("Listing Newsletter Subscriptions:");
            for sub in subscriptions {
                let state = if sub.is_active { "active" } else { "inactive" };
                println!("- {} ({}, via {}, since {})", sub.email, state, sub.source, sub.created_at.format("%Y-%m-%d"));
            }
        }
        Err(e) => eprintln!("❌ Error fetching subscriptions: {}", e),
    }
}

fn unsubscribe(db_path: &PathBuf, email: &str) {
    let Some(conn) = open_existing(db_path) else { return };
    let email = normalize_email(email.trim());

    match newsletter_db_operations::unsubscribe(&conn, &email) {
        Ok(true) => println!("✅ '{}' has been unsubscribed.", email),
        Ok(false) => eprintln!("❌ Error: No active subscription for '{}' found.", email),
        Err(e) => eprintln!("❌ Error updating subscription: {}", e),
    }
}
