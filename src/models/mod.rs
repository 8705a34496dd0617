use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown status label '{0}'")]
pub struct UnknownStatus(String);

/// Workflow label stored on contact submissions. Only `New` is ever written here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    New,
    Reviewed,
    InProgress,
    Completed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "NEW",
            ContactStatus::Reviewed => "REVIEWED",
            ContactStatus::InProgress => "IN_PROGRESS",
            ContactStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(ContactStatus::New),
            "REVIEWED" => Ok(ContactStatus::Reviewed),
            "IN_PROGRESS" => Ok(ContactStatus::InProgress),
            "COMPLETED" => Ok(ContactStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Workflow label stored on job applications. Only `Submitted` is ever written here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Submitted,
    Reviewed,
    InProgress,
    Completed,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "SUBMITTED",
            ApplicationStatus::Reviewed => "REVIEWED",
            ApplicationStatus::InProgress => "IN_PROGRESS",
            ApplicationStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(ApplicationStatus::Submitted),
            "REVIEWED" => Ok(ApplicationStatus::Reviewed),
            "IN_PROGRESS" => Ok(ApplicationStatus::InProgress),
            "COMPLETED" => Ok(ApplicationStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

macro_rules! status_sql {
    ($status:ty) => {
        impl ToSql for $status {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $status {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e: UnknownStatus| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

status_sql!(ContactStatus);
status_sql!(ApplicationStatus);

// --- Contact ---

#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

// --- Newsletter ---

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: String,
    pub email: String,
    pub source: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What happened to a newsletter signup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Created,
    Reactivated,
    AlreadyActive,
}

// --- Careers ---

#[derive(Debug, Clone)]
pub struct NewJobPosting {
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub benefits: Vec<String>,
    pub is_active: bool,
    pub application_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub job_id: String,
    pub job_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub experience: String,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub availability: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub experience: String,
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub availability: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

// --- Marketing content ---

#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_name: String,
    pub author_image: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author_name: String,
    pub author_image: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List view of a blog post; the body is only served by the detail endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub author_name: String,
    pub author_image: Option<String>,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub post: BlogPost,
    pub content_html: String,
}

#[derive(Debug, Clone)]
pub struct NewCaseStudy {
    pub title: String,
    pub subtitle: Option<String>,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub order: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub quote: String,
    pub author_name: String,
    pub author_position: String,
    pub company: String,
    pub author_image: Option<String>,
    pub is_active: bool,
    pub order: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author_name: String,
    pub author_position: String,
    pub company: String,
    pub author_image: Option<String>,
    pub is_active: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

// --- Stats ---

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsCounters {
    pub projects_delivered: i64,
    pub enterprise_clients: i64,
    pub client_satisfaction: String,
    pub countries_served: i64,
}

impl Default for StatsCounters {
    fn default() -> Self {
        StatsCounters {
            projects_delivered: 50,
            enterprise_clients: 25,
            client_satisfaction: "99%".to_string(),
            countries_served: 15,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteStats {
    #[serde(flatten)]
    pub counters: StatsCounters,
    #[serde(rename = "lastUpdated")]
    pub updated_at: DateTime<Utc>,
}

// --- Admin dashboard ---

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationOverview {
    pub id: String,
    pub job_title: String,
    pub applicant: String,
    pub email: String,
    pub experience: String,
    pub created_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

impl From<JobApplication> for ApplicationOverview {
    fn from(app: JobApplication) -> Self {
        ApplicationOverview {
            applicant: format!("{} {}", app.first_name, app.last_name),
            id: app.id,
            job_title: app.job_title,
            email: app.email,
            experience: app.experience,
            created_at: app.created_at,
            status: app.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub recent_contacts: Vec<ContactSubmission>,
    pub recent_applications: Vec<ApplicationOverview>,
    pub subscriber_count: i64,
    pub testimonial_count: i64,
    pub current_stats: StatsCounters,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub dashboard: AdminDashboard,
}

// --- Response bodies ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub message: String,
    pub success: bool,
    pub submission_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    pub message: String,
    pub success: bool,
    pub application_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub success: bool,
    pub message: String,
    pub database_configured: bool,
}

pub mod db_operations;
pub mod seed_data;
