use crate::helper::api_error::ApiError;
use crate::models::db_operations::{careers_db_operations, content_db_operations, StoreError};
use crate::models::{BlogPostSummary, CaseStudy, JobPosting, Testimonial};
use crate::{AppState, DbPool};
use actix_web::http::StatusCode;
use actix_web::web;
use rusqlite::Connection;

/// Returns the pool, or the "not configured" error carrying `status` when the
/// server was started without a `DATABASE_PATH`.
pub fn require_pool(state: &AppState, status: StatusCode) -> Result<DbPool, ApiError> {
    match &state.pool {
        Some(pool) => Ok(pool.clone()),
        None => {
            log::error!("DATABASE_PATH not configured");
            Err(ApiError::NotConfigured(status))
        }
    }
}

/// Runs `f` against a pooled connection on the blocking thread pool.
pub async fn with_conn<F, T>(pool: DbPool, f: F) -> Result<T, StoreError>
where
    F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    web::block(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await
    .map_err(|_| StoreError::Cancelled)?
}

/// Reads visible rows; if there are none, seeds the table and reads again from storage.
fn read_or_seed<T>(
    conn: &mut Connection,
    read: fn(&Connection) -> Result<Vec<T>, StoreError>,
    seed: fn(&mut Connection) -> Result<bool, StoreError>,
) -> Result<Vec<T>, StoreError> {
    let rows = read(conn)?;
    if !rows.is_empty() {
        return Ok(rows);
    }

    if seed(conn)? {
        log::info!("Seeded default content into an empty table");
    }
    read(conn)
}

pub async fn fetch_job_postings(pool: DbPool) -> Result<Vec<JobPosting>, StoreError> {
    with_conn(pool, |conn| {
        read_or_seed(
            conn,
            careers_db_operations::read_active_job_postings,
            careers_db_operations::seed_job_postings_if_empty,
        )
    })
    .await
}

pub async fn fetch_blog_summaries(pool: DbPool) -> Result<Vec<BlogPostSummary>, StoreError> {
    with_conn(pool, |conn| {
        read_or_seed(
            conn,
            content_db_operations::read_published_blog_summaries,
            content_db_operations::seed_blog_posts_if_empty,
        )
    })
    .await
}

pub async fn fetch_case_studies(pool: DbPool) -> Result<Vec<CaseStudy>, StoreError> {
    with_conn(pool, |conn| {
        read_or_seed(
            conn,
            content_db_operations::read_published_case_studies,
            content_db_operations::seed_case_studies_if_empty,
        )
    })
    .await
}

pub async fn fetch_testimonials(pool: DbPool) -> Result<Vec<Testimonial>, StoreError> {
    with_conn(pool, |conn| {
        read_or_seed(
            conn,
            content_db_operations::read_active_testimonials,
            content_db_operations::seed_testimonials_if_empty,
        )
    })
    .await
}

/// Seeds every content table that is still empty. Used by `setup_cli db seed`.
pub fn seed_all_content(conn: &mut Connection) -> Result<Vec<(&'static str, bool)>, StoreError> {
    Ok(vec![
        ("job_postings", careers_db_operations::seed_job_postings_if_empty(conn)?),
        ("blog_posts", content_db_operations::seed_blog_posts_if_empty(conn)?),
        ("case_studies", content_db_operations::seed_case_studies_if_empty(conn)?),
        ("testimonials", content_db_operations::seed_testimonials_if_empty(conn)?),
    ])
}
