use crate::helper::api_error::ApiError;
use crate::helper::public_helpers::{require_pool, with_conn};
use crate::helper::validation_helpers::{
    is_valid_email, long_text, normalize_email, optional_text, required_text, text_list,
};
use crate::models::db_operations::{careers_db_operations, contact_db_operations, newsletter_db_operations};
use crate::models::{
    ActionResponse, ApplicationReceipt, ContactReceipt, NewContactSubmission, NewJobApplication, SubscribeOutcome,
};
use crate::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

pub const CONTACT_THANK_YOU: &str = "Thank you for your message. We will get back to you within 24 hours.";
pub const NEWSLETTER_THANK_YOU: &str = "Thank you for subscribing! You will receive our latest updates.";
pub const APPLICATION_THANK_YOU: &str =
    "Thank you for your application! We will review your submission and get back to you soon.";

const GENERIC_FAILURE: &str = "Internal server error. Please try again later.";

/// Blank counts as missing; anything else goes to the format check untrimmed.
fn required_email(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|e| !e.trim().is_empty()).map(normalize_email)
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    phone: Option<String>,
    message: Option<String>,
    service: Option<String>,
    budget: Option<String>,
    timeline: Option<String>,
}

impl ContactForm {
    fn validate(&self) -> Result<NewContactSubmission, ApiError> {
        let (Some(name), Some(email), Some(message)) =
            (required_text(&self.name), required_email(&self.email), long_text(&self.message))
        else {
            return Err(ApiError::missing_fields());
        };
        if !is_valid_email(&email) {
            return Err(ApiError::invalid_email());
        }

        Ok(NewContactSubmission {
            name,
            email,
            company: optional_text(&self.company),
            phone: optional_text(&self.phone),
            message,
            service: optional_text(&self.service),
            budget: optional_text(&self.budget),
            timeline: optional_text(&self.timeline),
        })
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct NewsletterForm {
    email: Option<String>,
    source: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationForm {
    job_id: Option<String>,
    job_title: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    resume_url: Option<String>,
    cover_letter: Option<String>,
    linkedin: Option<String>,
    portfolio: Option<String>,
    experience: Option<String>,
    education: Option<String>,
    skills: Option<Vec<String>>,
    salary: Option<String>,
    availability: Option<String>,
}

impl ApplicationForm {
    fn validate(&self) -> Result<NewJobApplication, ApiError> {
        let (Some(job_id), Some(job_title), Some(first_name), Some(last_name), Some(email), Some(phone), Some(experience)) = (
            required_text(&self.job_id),
            required_text(&self.job_title),
            required_text(&self.first_name),
            required_text(&self.last_name),
            required_email(&self.email),
            required_text(&self.phone),
            required_text(&self.experience),
        ) else {
            return Err(ApiError::missing_fields());
        };
        if !is_valid_email(&email) {
            return Err(ApiError::invalid_email());
        }

        Ok(NewJobApplication {
            job_id,
            job_title,
            first_name,
            last_name,
            email,
            phone,
            resume_url: optional_text(&self.resume_url),
            cover_letter: long_text(&self.cover_letter),
            linkedin: optional_text(&self.linkedin),
            portfolio: optional_text(&self.portfolio),
            experience,
            education: optional_text(&self.education),
            skills: text_list(&self.skills),
            salary: optional_text(&self.salary),
            availability: optional_text(&self.availability),
        })
    }
}

pub fn config_forms(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact))
        .route("/newsletter", web::post().to(subscribe_newsletter))
        .route("/applications", web::post().to(submit_application));
}

async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let submission = form.validate()?;

    let record = with_conn(pool, move |conn| contact_db_operations::insert_contact_submission(conn, &submission))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to submit form. Please try again."))?;

    log::info!("Contact submission saved: {} ({})", record.id, record.email);
    Ok(HttpResponse::Ok().json(ContactReceipt {
        message: CONTACT_THANK_YOU.to_string(),
        success: true,
        submission_id: record.id,
    }))
}

async fn subscribe_newsletter(
    state: web::Data<AppState>,
    form: web::Json<NewsletterForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::SERVICE_UNAVAILABLE)?;

    let email = match required_email(&form.email) {
        Some(email) => email,
        None => return Err(ApiError::BadRequest("Email is required".to_string())),
    };
    if !is_valid_email(&email) {
        return Err(ApiError::invalid_email());
    }
    let source = optional_text(&form.source).unwrap_or_else(|| "website".to_string());

    let subscribed_email = email.clone();
    let outcome = with_conn(pool, move |conn| newsletter_db_operations::subscribe(conn, &subscribed_email, &source))
        .await
        .map_err(|e| ApiError::from_store(e, GENERIC_FAILURE))?;

    match outcome {
        SubscribeOutcome::AlreadyActive => {
            return Err(ApiError::BadRequest("Email is already subscribed".to_string()));
        }
        SubscribeOutcome::Reactivated => log::info!("Newsletter subscription reactivated: {}", email),
        SubscribeOutcome::Created => log::info!("Newsletter subscription saved: {}", email),
    }

    Ok(HttpResponse::Ok().json(ActionResponse {
        message: NEWSLETTER_THANK_YOU.to_string(),
        success: true,
    }))
}

async fn submit_application(
    state: web::Data<AppState>,
    form: web::Json<ApplicationForm>,
) -> Result<HttpResponse, ApiError> {
    let pool = require_pool(&state, StatusCode::INTERNAL_SERVER_ERROR)?;
    let application = form.validate()?;

    let record = with_conn(pool, move |conn| {
        let record = careers_db_operations::insert_job_application(conn, &application)?;

        // Best-effort: the application stands even if the posting is gone.
        match careers_db_operations::increment_application_count(conn, &record.job_id) {
            Ok(0) => log::info!(
                "Could not update application count; job posting '{}' may not exist",
                record.job_id
            ),
            Ok(_) => {}
            Err(e) => log::warn!("Failed to update application count for '{}': {}", record.job_id, e),
        }
        Ok(record)
    })
    .await
    .map_err(|e| ApiError::from_store(e, GENERIC_FAILURE))?;

    log::info!("Job application saved: {} for job {}", record.id, record.job_id);
    Ok(HttpResponse::Ok().json(ApplicationReceipt {
        message: APPLICATION_THANK_YOU.to_string(),
        success: true,
        application_id: record.id,
    }))
}
