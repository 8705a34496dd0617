use crate::helper::public_helpers::with_conn;
use crate::models::db_operations::{
    careers_db_operations, contact_db_operations, content_db_operations, newsletter_db_operations,
    stats_db_operations, StoreError,
};
use crate::models::{AdminDashboard, ApplicationOverview};
use crate::DbPool;
use futures_util::future::try_join5;

pub const RECENT_LIMIT: u32 = 10;

/// Gathers the dashboard with independent concurrent reads, each on its own connection.
pub async fn fetch_dashboard(pool: DbPool) -> Result<AdminDashboard, StoreError> {
    let (recent_contacts, recent_applications, subscriber_count, testimonial_count, stats) = try_join5(
        with_conn(pool.clone(), |conn| {
            contact_db_operations::read_recent_contact_submissions(conn, RECENT_LIMIT)
        }),
        with_conn(pool.clone(), |conn| {
            careers_db_operations::read_recent_job_applications(conn, RECENT_LIMIT)
        }),
        with_conn(pool.clone(), |conn| newsletter_db_operations::count_active_subscriptions(conn)),
        with_conn(pool.clone(), |conn| content_db_operations::count_active_testimonials(conn)),
        with_conn(pool, |conn| stats_db_operations::read_latest_stats(conn)),
    )
    .await?;

    Ok(AdminDashboard {
        recent_contacts,
        recent_applications: recent_applications.into_iter().map(ApplicationOverview::from).collect(),
        subscriber_count,
        testimonial_count,
        current_stats: stats.map(|s| s.counters).unwrap_or_default(),
    })
}
