use super::StoreError;
use crate::models::{NewsletterSubscription, SubscribeOutcome};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

fn row_to_subscription(row: &Row) -> rusqlite::Result<NewsletterSubscription> {
    Ok(NewsletterSubscription {
        id: row.get(0)?,
        email: row.get(1)?,
        source: row.get(2)?,
        is_active: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

pub fn read_subscription(conn: &Connection, email: &str) -> Result<Option<NewsletterSubscription>, StoreError> {
    Ok(conn
        .query_row(
            "SELECT id, email, source, is_active, created_at, updated_at FROM newsletter_subscriptions WHERE email = ?1",
            [email],
            row_to_subscription,
        )
        .optional()?)
}

pub fn read_all_subscriptions(conn: &Connection) -> Result<Vec<NewsletterSubscription>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, email, source, is_active, created_at, updated_at FROM newsletter_subscriptions ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], row_to_subscription)?;

    let mut subscriptions = Vec::new();
    for subscription in rows {
        subscriptions.push(subscription?);
    }
    Ok(subscriptions)
}

/// Creates a subscription, or reactivates an inactive one in place.
/// An already-active email is left untouched.
pub fn subscribe(conn: &Connection, email: &str, source: &str) -> Result<SubscribeOutcome, StoreError> {
    let now = Utc::now();

    match read_subscription(conn, email)? {
        Some(existing) if existing.is_active => Ok(SubscribeOutcome::AlreadyActive),
        Some(_) => {
            conn.execute(
                "UPDATE newsletter_subscriptions SET is_active = 1, updated_at = ?1 WHERE email = ?2",
                params![now, email],
            )?;
            Ok(SubscribeOutcome::Reactivated)
        }
        None if insert_subscription(conn, email, source)? => Ok(SubscribeOutcome::Created),
        // A concurrent signup inserted the same email between the read and the insert.
        None => Ok(SubscribeOutcome::AlreadyActive),
    }
}

/// Inserts an active subscription. Returns `false` when the email already has a row.
pub fn insert_subscription(conn: &Connection, email: &str, source: &str) -> Result<bool, StoreError> {
    let now = Utc::now();
    let inserted = conn.execute(
        "INSERT INTO newsletter_subscriptions (id, email, source, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, 1, ?4, ?4)
         ON CONFLICT(email) DO NOTHING",
        params![Uuid::new_v4().to_string(), email, source, now],
    )?;
    Ok(inserted > 0)
}

/// Marks a subscription inactive. Returns `false` if the email was not subscribed.
pub fn unsubscribe(conn: &Connection, email: &str) -> Result<bool, StoreError> {
    let changed = conn.execute(
        "UPDATE newsletter_subscriptions SET is_active = 0, updated_at = ?1 WHERE email = ?2 AND is_active = 1",
        params![Utc::now(), email],
    )?;
    Ok(changed > 0)
}

pub fn count_active_subscriptions(conn: &Connection) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM newsletter_subscriptions WHERE is_active = 1",
        [],
        |row| row.get(0),
    )?)
}
