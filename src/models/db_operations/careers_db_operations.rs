use super::{list_column, seed_if_empty, to_json_list, StoreError};
use crate::models::seed_data;
use crate::models::{ApplicationStatus, JobApplication, JobPosting, NewJobApplication, NewJobPosting};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

// ====================================================================
// ========================== JOB POSTINGS ============================
// ====================================================================

const POSTING_COLUMNS: &str = "id, title, department, location, job_type, salary, description, requirements, responsibilities, benefits, is_active, application_count, created_at, updated_at";

fn row_to_posting(row: &Row) -> rusqlite::Result<JobPosting> {
    Ok(JobPosting {
        id: row.get(0)?,
        title: row.get(1)?,
        department: row.get(2)?,
        location: row.get(3)?,
        job_type: row.get(4)?,
        salary: row.get(5)?,
        description: row.get(6)?,
        requirements: list_column(row, 7)?,
        responsibilities: list_column(row, 8)?,
        benefits: list_column(row, 9)?,
        is_active: row.get(10)?,
        application_count: row.get(11)?,
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}

pub fn insert_job_posting(conn: &Connection, posting: &NewJobPosting) -> Result<JobPosting, StoreError> {
    let now = Utc::now();
    let record = JobPosting {
        id: Uuid::new_v4().to_string(),
        title: posting.title.clone(),
        department: posting.department.clone(),
        location: posting.location.clone(),
        job_type: posting.job_type.clone(),
        salary: posting.salary.clone(),
        description: posting.description.clone(),
        requirements: posting.requirements.clone(),
        responsibilities: posting.responsibilities.clone(),
        benefits: posting.benefits.clone(),
        is_active: posting.is_active,
        application_count: 0,
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        &format!(
            "INSERT INTO job_postings ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            POSTING_COLUMNS
        ),
        params![
            record.id,
            record.title,
            record.department,
            record.location,
            record.job_type,
            record.salary,
            record.description,
            to_json_list(&record.requirements)?,
            to_json_list(&record.responsibilities)?,
            to_json_list(&record.benefits)?,
            record.is_active,
            record.application_count,
            record.created_at,
            record.updated_at,
        ],
    )?;
    Ok(record)
}

pub fn read_active_job_postings(conn: &Connection) -> Result<Vec<JobPosting>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM job_postings WHERE is_active = 1 ORDER BY created_at DESC, rowid DESC",
        POSTING_COLUMNS
    ))?;
    let rows = stmt.query_map([], row_to_posting)?;

    let mut postings = Vec::new();
    for posting in rows {
        postings.push(posting?);
    }
    Ok(postings)
}

pub fn read_active_job_posting(conn: &Connection, id: &str) -> Result<Option<JobPosting>, StoreError> {
    Ok(conn
        .query_row(
            &format!("SELECT {} FROM job_postings WHERE id = ?1 AND is_active = 1", POSTING_COLUMNS),
            [id],
            row_to_posting,
        )
        .optional()?)
}

pub fn seed_job_postings_if_empty(conn: &mut Connection) -> Result<bool, StoreError> {
    seed_if_empty(
        conn,
        "SELECT COUNT(*) FROM job_postings WHERE is_active = 1",
        &seed_data::default_job_postings(),
        insert_job_posting,
    )
}

/// Best-effort counter bump. Returns how many postings matched `job_id` (0 or 1).
pub fn increment_application_count(conn: &Connection, job_id: &str) -> Result<usize, StoreError> {
    Ok(conn.execute(
        "UPDATE job_postings SET application_count = application_count + 1, updated_at = ?1 WHERE id = ?2",
        params![Utc::now(), job_id],
    )?)
}

// ====================================================================
// ========================== APPLICATIONS ============================
// ====================================================================

const APPLICATION_COLUMNS: &str = "id, job_id, job_title, first_name, last_name, email, phone, resume_url, cover_letter, linkedin, portfolio, experience, education, skills, salary, availability, status, created_at";

fn row_to_application(row: &Row) -> rusqlite::Result<JobApplication> {
    Ok(JobApplication {
        id: row.get(0)?,
        job_id: row.get(1)?,
        job_title: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        resume_url: row.get(7)?,
        cover_letter: row.get(8)?,
        linkedin: row.get(9)?,
        portfolio: row.get(10)?,
        experience: row.get(11)?,
        education: row.get(12)?,
        skills: list_column(row, 13)?,
        salary: row.get(14)?,
        availability: row.get(15)?,
        status: row.get(16)?,
        created_at: row.get(17)?,
    })
}

pub fn insert_job_application(conn: &Connection, application: &NewJobApplication) -> Result<JobApplication, StoreError> {
    let record = JobApplication {
        id: Uuid::new_v4().to_string(),
        job_id: application.job_id.clone(),
        job_title: application.job_title.clone(),
        first_name: application.first_name.clone(),
        last_name: application.last_name.clone(),
        email: application.email.clone(),
        phone: application.phone.clone(),
        resume_url: application.resume_url.clone(),
        cover_letter: application.cover_letter.clone(),
        linkedin: application.linkedin.clone(),
        portfolio: application.portfolio.clone(),
        experience: application.experience.clone(),
        education: application.education.clone(),
        skills: application.skills.clone(),
        salary: application.salary.clone(),
        availability: application.availability.clone(),
        status: ApplicationStatus::Submitted,
        created_at: Utc::now(),
    };

    conn.execute(
        &format!(
            "INSERT INTO job_applications ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
            APPLICATION_COLUMNS
        ),
        params![
            record.id,
            record.job_id,
            record.job_title,
            record.first_name,
            record.last_name,
            record.email,
            record.phone,
            record.resume_url,
            record.cover_letter,
            record.linkedin,
            record.portfolio,
            record.experience,
            record.education,
            to_json_list(&record.skills)?,
            record.salary,
            record.availability,
            record.status,
            record.created_at,
        ],
    )?;
    Ok(record)
}

pub fn read_recent_job_applications(conn: &Connection, limit: u32) -> Result<Vec<JobApplication>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM job_applications ORDER BY created_at DESC, rowid DESC LIMIT ?1",
        APPLICATION_COLUMNS
    ))?;
    let rows = stmt.query_map([limit], row_to_application)?;

    let mut applications = Vec::new();
    for application in rows {
        applications.push(application?);
    }
    Ok(applications)
}
