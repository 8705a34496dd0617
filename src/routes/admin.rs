use crate::helper::admin_helpers;
use crate::helper::api_error::ApiError;
use crate::helper::public_helpers::{require_pool, with_conn};
use crate::helper::sanitization_helpers::sanitize_markdown_content;
use crate::helper::validation_helpers::{optional_text, required_text, text_list};
use crate::middleware::AdminAccess;
use crate::models::db_operations::{careers_db_operations, content_db_operations, stats_db_operations};
use crate::models::{
    ActionResponse, DashboardResponse, NewBlogPost, NewCaseStudy, NewJobPosting, NewTestimonial, StatsCounters,
};
use crate::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

fn slug_regex() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern compiles"))
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPostingForm {
    title: Option<String>,
    department: Option<String>,
    location: Option<String>,
    #[serde(rename = "type")]
    job_type: Option<String>,
    salary: Option<String>,
    description: Option<String>,
    requirements: Option<Vec<String>>,
    responsibilities: Option<Vec<String>>,
    benefits: Option<Vec<String>>,
    is_active: Option<bool>,
}

impl JobPostingForm {
    fn validate(&self) -> Result<NewJobPosting, ApiError> {
        let (Some(title), Some(department), Some(location), Some(job_type), Some(description)) = (
            required_text(&self.title),
            required_text(&self.department),
            required_text(&self.location),
            required_text(&self.job_type),
            required_text(&self.description),
        ) else {
            return Err(ApiError::missing_fields());
        };

        Ok(NewJobPosting {
            title,
            department,
            location,
            job_type,
            salary: optional_text(&self.salary),
            description,
            requirements: text_list(&self.requirements),
            responsibilities: text_list(&self.responsibilities),
            benefits: text_list(&self.benefits),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPostForm {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    author_name: Option<String>,
    author_image: Option<String>,
    tags: Option<Vec<String>>,
    is_published: Option<bool>,
}

impl BlogPostForm {
    fn validate(&self) -> Result<NewBlogPost, ApiError> {
        let content = self
            .content
            .as_deref()
            .map(sanitize_markdown_content)
            .filter(|c| !c.trim().is_empty());
        let slug = self.slug.as_deref().map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());

        let (Some(title), Some(slug), Some(excerpt), Some(content), Some(author_name)) = (
            required_text(&self.title),
            slug,
            required_text(&self.excerpt),
            content,
            required_text(&self.author_name),
        ) else {
            return Err(ApiError::missing_fields());
        };
        if !slug_regex().is_match(&slug) {
            return Err(ApiError::BadRequest(
                "Slug may only contain lowercase letters, numbers and single hyphens".to_string(),
            ));
        }

        let is_published = self.is_published.unwrap_or(false);
        Ok(NewBlogPost {
            title,
            slug,
            excerpt,
            content,
            image_url: optional_text(&self.image_url),
            author_name,
            author_image: optional_text(&self.author_image),
            tags: text_list(&self.tags),
            is_published,
            published_at: is_published.then(Utc::now),
        })
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseStudyForm {
    title: Option<String>,
    subtitle: Option<String>,
    client: Option<String>,
    industry: Option<String>,
    challenge: Option<String>,
    solution: Option<String>,
    results: Option<Vec<String>>,
    image_url: Option<String>,
    is_published: Option<bool>,
    order: Option<i64>,
}

impl CaseStudyForm {
    fn validate(&self) -> Result<NewCaseStudy, ApiError> {
        let (Some(title), Some(client), Some(industry), Some(challenge), Some(solution), Some(_)) = (
            required_text(&self.title),
            required_text(&self.client),
            required_text(&self.industry),
            required_text(&self.challenge),
            required_text(&self.solution),
            self.results.as_ref(),
        ) else {
            return Err(ApiError::missing_fields());
        };

        Ok(NewCaseStudy {
            title,
            subtitle: optional_text(&self.subtitle),
            client,
            industry,
            challenge,
            solution,
            results: text_list(&self.results),
            image_url: optional_text(&self.image_url),
            is_published: self.is_published.unwrap_or(false),
            order: self.order.unwrap_or(0),
        })
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialForm {
    quote: Option<String>,
    author_name: Option<String>,
    author_position: Option<String>,
    company: Option<String>,
    author_image: Option<String>,
    is_active: Option<bool>,
    order: Option<i64>,
}

impl TestimonialForm {
    fn validate(&self) -> Result<NewTestimonial, ApiError> {
        let (Some(quote), Some(author_name), Some(author_position), Some(company)) = (
            required_text(&self.quote),
            required_text(&self.author_name),
            required_text(&self.author_position),
            required_text(&self.company),
        ) else {
            return Err(ApiError::missing_fields());
        };

        Ok(NewTestimonial {
            quote,
            author_name,
            author_position,
            company,
            author_image: optional_text(&self.author_image),
            is_active: self.is_active.unwrap_or(true),
            order: self.order.unwrap_or(0),
        })
    }
}

/// Counter fields stay untyped so a wrong type reports "Invalid data types" rather than a body error.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsForm {
    projects_delivered: Option<Value>,
    enterprise_clients: Option<Value>,
    client_satisfaction: Option<String>,
    countries_served: Option<Value>,
}

/// A counter must be an integral JSON number; `72.0` counts, `72.5` does not.
fn as_count(value: &Option<Value>) -> Option<i64> {
    let value = value.as_ref()?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

pub fn config_admin(cfg: &mut web::ServiceConfig) {
    cfg.route("/jobs", web::post().to(create_job_posting))
        .route("/blog", web::post().to(create_blog_post))
        .route("/case-studies", web::post().to(create_case_study))
        .route("/testimonials", web::post().to(create_testimonial))
        .route("/stats", web::put().to(update_stats))
        .route("/admin/dashboard", web::get().to(get_dashboard));
}

async fn create_job_posting(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    form: web::Json<JobPostingForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let posting = form.validate()?;

    let record = with_conn(pool, move |conn| careers_db_operations::insert_job_posting(conn, &posting))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create job posting"))?;

    log::info!("New job posting created: {} '{}' ({}, {})", record.id, record.title, record.department, record.location);
    Ok(HttpResponse::Created().json(record))
}

async fn create_blog_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    form: web::Json<BlogPostForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let post = form.validate()?;

    let record = with_conn(pool, move |conn| content_db_operations::insert_blog_post(conn, &post))
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                ApiError::Conflict("A blog post with this slug already exists".to_string())
            } else {
                ApiError::from_store(e, "Failed to create blog post")
            }
        })?;

    log::info!("New blog post created: {} '{}' by {} (published: {})", record.id, record.title, record.author_name, record.is_published);
    Ok(HttpResponse::Created().json(record))
}

async fn create_case_study(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    form: web::Json<CaseStudyForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let study = form.validate()?;

    let record = with_conn(pool, move |conn| content_db_operations::insert_case_study(conn, &study))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create case study"))?;

    log::info!("New case study created: {} '{}' for {} ({})", record.id, record.title, record.client, record.industry);
    Ok(HttpResponse::Created().json(record))
}

async fn create_testimonial(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    form: web::Json<TestimonialForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let testimonial = form.validate()?;

    let record = with_conn(pool, move |conn| content_db_operations::insert_testimonial(conn, &testimonial))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create testimonial"))?;

    log::info!("New testimonial added: {} from {} ({})", record.id, record.author_name, record.company);
    Ok(HttpResponse::Created().json(record))
}

async fn update_stats(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    form: web::Json<StatsForm>,
) -> Result<HttpResponse, ApiError> {
    let (Some(projects_delivered), Some(enterprise_clients), Some(countries_served)) = (
        as_count(&form.projects_delivered),
        as_count(&form.enterprise_clients),
        as_count(&form.countries_served),
    ) else {
        return Err(ApiError::BadRequest("Invalid data types".to_string()));
    };
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let client_satisfaction = optional_text(&form.client_satisfaction);

    let stats = with_conn(pool, move |conn| {
        let client_satisfaction = match client_satisfaction {
            Some(value) => value,
            None => stats_db_operations::read_latest_stats(conn)?
                .map(|s| s.counters.client_satisfaction)
                .unwrap_or_else(|| StatsCounters::default().client_satisfaction),
        };
        stats_db_operations::upsert_stats(
            conn,
            &StatsCounters { projects_delivered, enterprise_clients, client_satisfaction, countries_served },
        )
    })
    .await
    .map_err(|e| ApiError::from_store(e, "Failed to update stats"))?;

    log::info!("Stats updated: {:?}", stats.counters);
    Ok(HttpResponse::Ok().json(ActionResponse {
        message: "Stats updated successfully".to_string(),
        success: true,
    }))
}

async fn get_dashboard(_admin: AdminAccess, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;

    let dashboard = admin_helpers::fetch_dashboard(pool)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch dashboard data"))?;

    Ok(HttpResponse::Ok().json(DashboardResponse { dashboard }))
}
