use crate::helper::api_error::ApiError;
use crate::helper::public_helpers::{self, require_pool, with_conn};
use crate::helper::sanitization_helpers::render_markdown;
use crate::models::db_operations::{careers_db_operations, content_db_operations, stats_db_operations};
use crate::models::{seed_data, BlogPostDetail, HealthReport};
use crate::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

pub fn config_public(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/jobs", web::get().to(get_job_postings))
        .route("/jobs/{id}", web::get().to(get_job_posting_by_id))
        .route("/blog", web::get().to(get_blog_posts))
        .route("/blog/{slug}", web::get().to(get_blog_post_by_slug))
        .route("/case-studies", web::get().to(get_case_studies))
        .route("/testimonials", web::get().to(get_testimonials))
        .route("/stats", web::get().to(get_stats));
}

async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let pool = match &state.pool {
        Some(pool) => pool.clone(),
        None => {
            return HttpResponse::InternalServerError().json(HealthReport {
                success: false,
                message: "DATABASE_PATH environment variable is missing".to_string(),
                database_configured: false,
            });
        }
    };

    let ping = with_conn(pool, |conn| {
        let one: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;
        Ok(one)
    })
    .await;

    match ping {
        Ok(_) => HttpResponse::Ok().json(HealthReport {
            success: true,
            message: "Database connection working!".to_string(),
            database_configured: true,
        }),
        Err(e) => {
            log::error!("Connection test failed: {}", e);
            HttpResponse::InternalServerError().json(HealthReport {
                success: false,
                message: e.to_string(),
                database_configured: true,
            })
        }
    }
}

async fn get_job_postings(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    match public_helpers::fetch_job_postings(pool).await {
        Ok(postings) => Ok(HttpResponse::Ok().json(postings)),
        Err(e) => {
            log::error!("Jobs API error: {}", e);
            Ok(HttpResponse::Ok().json(seed_data::fallback_job_postings()))
        }
    }
}

async fn get_job_posting_by_id(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let job_id = id.into_inner();

    let posting = with_conn(pool, move |conn| careers_db_operations::read_active_job_posting(conn, &job_id))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch job details"))?;

    match posting {
        Some(posting) => Ok(HttpResponse::Ok().json(posting)),
        None => Err(ApiError::NotFound("Job not found".to_string())),
    }
}

async fn get_blog_posts(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    match public_helpers::fetch_blog_summaries(pool).await {
        Ok(posts) => Ok(HttpResponse::Ok().json(posts)),
        Err(e) => {
            log::error!("Blog API error: {}", e);
            Ok(HttpResponse::Ok().json(seed_data::fallback_blog_posts()))
        }
    }
}

async fn get_blog_post_by_slug(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let slug = slug.into_inner().to_lowercase();

    let post = with_conn(pool, move |conn| content_db_operations::read_published_blog_post(conn, &slug))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch blog post"))?;

    match post {
        Some(post) => {
            let content_html = render_markdown(&post.content);
            Ok(HttpResponse::Ok().json(BlogPostDetail { post, content_html }))
        }
        None => Err(ApiError::NotFound("Post not found".to_string())),
    }
}

async fn get_case_studies(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    match public_helpers::fetch_case_studies(pool).await {
        Ok(studies) => Ok(HttpResponse::Ok().json(studies)),
        Err(e) => {
            log::error!("Case Studies API error: {}", e);
            Ok(HttpResponse::Ok().json(seed_data::fallback_case_studies()))
        }
    }
}

async fn get_testimonials(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    match public_helpers::fetch_testimonials(pool).await {
        Ok(testimonials) => Ok(HttpResponse::Ok().json(testimonials)),
        Err(e) => {
            log::error!("Testimonials API error: {}", e);
            Ok(HttpResponse::Ok().json(seed_data::fallback_testimonials()))
        }
    }
}

async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    match with_conn(pool, |conn| stats_db_operations::read_or_create_stats(conn)).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(stats)),
        Err(e) => {
            log::error!("Stats API error: {}", e);
            Ok(HttpResponse::Ok().json(seed_data::fallback_stats()))
        }
    }
}
