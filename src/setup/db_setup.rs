use crate::DbPool;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Could not create database directory: {0}")]
    Io(#[from] std::io::Error),
}

const TABLES: &[(&str, &str)] = &[
    (
        "contact_submissions",
        "CREATE TABLE IF NOT EXISTS contact_submissions (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            company TEXT,
            phone TEXT,
            message TEXT NOT NULL,
            service TEXT,
            budget TEXT,
            timeline TEXT,
            status TEXT NOT NULL DEFAULT 'NEW' CHECK(status IN ('NEW', 'REVIEWED', 'IN_PROGRESS', 'COMPLETED')),
            created_at TEXT NOT NULL
        )",
    ),
    (
        "newsletter_subscriptions",
        "CREATE TABLE IF NOT EXISTS newsletter_subscriptions (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            source TEXT NOT NULL DEFAULT 'website',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    ),
    (
        "job_postings",
        "CREATE TABLE IF NOT EXISTS job_postings (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            department TEXT NOT NULL,
            location TEXT NOT NULL,
            job_type TEXT NOT NULL,
            salary TEXT,
            description TEXT NOT NULL,
            requirements TEXT NOT NULL DEFAULT '[]',
            responsibilities TEXT NOT NULL DEFAULT '[]',
            benefits TEXT NOT NULL DEFAULT '[]',
            is_active INTEGER NOT NULL DEFAULT 1,
            application_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    ),
    (
        // job_id is a weak reference: applications may name postings that no longer exist.
        "job_applications",
        "CREATE TABLE IF NOT EXISTS job_applications (
            id TEXT PRIMARY KEY,
            job_id TEXT NOT NULL,
            job_title TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            resume_url TEXT,
            cover_letter TEXT,
            linkedin TEXT,
            portfolio TEXT,
            experience TEXT NOT NULL,
            education TEXT,
            skills TEXT NOT NULL DEFAULT '[]',
            salary TEXT,
            availability TEXT,
            status TEXT NOT NULL DEFAULT 'SUBMITTED' CHECK(status IN ('SUBMITTED', 'REVIEWED', 'IN_PROGRESS', 'COMPLETED')),
            created_at TEXT NOT NULL
        )",
    ),
    (
        "blog_posts",
        "CREATE TABLE IF NOT EXISTS blog_posts (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            excerpt TEXT NOT NULL,
            content TEXT NOT NULL,
            image_url TEXT,
            author_name TEXT NOT NULL,
            author_image TEXT,
            tags TEXT NOT NULL DEFAULT '[]',
            is_published INTEGER NOT NULL DEFAULT 0,
            published_at TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    ),
    (
        "case_studies",
        "CREATE TABLE IF NOT EXISTS case_studies (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            subtitle TEXT,
            client TEXT NOT NULL,
            industry TEXT NOT NULL,
            challenge TEXT NOT NULL,
            solution TEXT NOT NULL,
            results TEXT NOT NULL DEFAULT '[]',
            image_url TEXT,
            is_published INTEGER NOT NULL DEFAULT 0,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )",
    ),
    (
        "testimonials",
        "CREATE TABLE IF NOT EXISTS testimonials (
            id TEXT PRIMARY KEY,
            quote TEXT NOT NULL,
            author_name TEXT NOT NULL,
            author_position TEXT NOT NULL,
            company TEXT NOT NULL,
            author_image TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )",
    ),
    (
        "website_stats",
        "CREATE TABLE IF NOT EXISTS website_stats (
            id TEXT PRIMARY KEY,
            projects_delivered INTEGER NOT NULL,
            enterprise_clients INTEGER NOT NULL,
            client_satisfaction TEXT NOT NULL,
            countries_served INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        )",
    ),
];

/// Creates every site table that does not exist yet. Safe to run repeatedly.
pub fn setup_site_db(conn: &mut Connection) -> Result<(), SetupError> {
    let tx = conn.transaction()?;
    for (name, ddl) in TABLES {
        log::debug!("- Ensuring '{}' table exists...", name);
        tx.execute(ddl, [])?;
    }
    tx.commit()?;
    Ok(())
}

/// Opens (creating if needed) the SQLite file behind a connection pool and ensures the schema.
pub fn open_pool(db_path: &Path) -> Result<DbPool, SetupError> {
    if let Some(parent_dir) = db_path.parent() {
        fs::create_dir_all(parent_dir)?;
    }

    let manager = SqliteConnectionManager::file(db_path)
        .with_init(|conn| conn.busy_timeout(Duration::from_secs(5)));
    let pool = Pool::builder().build(manager)?;

    let mut conn = pool.get()?;
    setup_site_db(&mut conn)?;
    Ok(pool)
}
