use super::StoreError;
use crate::models::{StatsCounters, WebsiteStats};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Primary key of the single counters row.
pub const MAIN_STATS_ID: &str = "main";

pub fn read_latest_stats(conn: &Connection) -> Result<Option<WebsiteStats>, StoreError> {
    Ok(conn
        .query_row(
            "SELECT projects_delivered, enterprise_clients, client_satisfaction, countries_served, updated_at
             FROM website_stats ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| {
                Ok(WebsiteStats {
                    counters: StatsCounters {
                        projects_delivered: row.get(0)?,
                        enterprise_clients: row.get(1)?,
                        client_satisfaction: row.get(2)?,
                        countries_served: row.get(3)?,
                    },
                    updated_at: row.get(4)?,
                })
            },
        )
        .optional()?)
}

pub fn upsert_stats(conn: &Connection, counters: &StatsCounters) -> Result<WebsiteStats, StoreError> {
    let updated_at = Utc::now();
    conn.execute(
        "INSERT INTO website_stats (id, projects_delivered, enterprise_clients, client_satisfaction, countries_served, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            projects_delivered = excluded.projects_delivered,
            enterprise_clients = excluded.enterprise_clients,
            client_satisfaction = excluded.client_satisfaction,
            countries_served = excluded.countries_served,
            updated_at = excluded.updated_at",
        params![
            MAIN_STATS_ID,
            counters.projects_delivered,
            counters.enterprise_clients,
            counters.client_satisfaction,
            counters.countries_served,
            updated_at,
        ],
    )?;
    Ok(WebsiteStats { counters: counters.clone(), updated_at })
}

/// Reads the counters row, creating it with default values when it does not exist yet.
pub fn read_or_create_stats(conn: &Connection) -> Result<WebsiteStats, StoreError> {
    match read_latest_stats(conn)? {
        Some(stats) => Ok(stats),
        None => upsert_stats(conn, &StatsCounters::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::db_setup::setup_site_db;

    #[test]
    fn defaults_are_created_once_then_updated_in_place() {
        let mut conn = Connection::open_in_memory().unwrap();
        setup_site_db(&mut conn).unwrap();

        assert!(read_latest_stats(&conn).unwrap().is_none());
        let created = read_or_create_stats(&conn).unwrap();
        assert_eq!(created.counters, StatsCounters::default());

        let updated = StatsCounters {
            projects_delivered: 75,
            enterprise_clients: 30,
            client_satisfaction: "98%".to_string(),
            countries_served: 18,
        };
        upsert_stats(&conn, &updated).unwrap();

        let rows: i64 = conn.query_row("SELECT COUNT(*) FROM website_stats", [], |r| r.get(0)).unwrap();
        assert_eq!(rows, 1);
        assert_eq!(read_or_create_stats(&conn).unwrap().counters, updated);
    }
}
