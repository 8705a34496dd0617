use super::StoreError;
use crate::models::{ContactStatus, ContactSubmission, NewContactSubmission};
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const CONTACT_COLUMNS: &str =
    "id, name, email, company, phone, message, service, budget, timeline, status, created_at";

fn row_to_contact(row: &Row) -> rusqlite::Result<ContactSubmission> {
    Ok(ContactSubmission {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        company: row.get(3)?,
        phone: row.get(4)?,
        message: row.get(5)?,
        service: row.get(6)?,
        budget: row.get(7)?,
        timeline: row.get(8)?,
        status: row.get(9)?,
        created_at: row.get(10)?,
    })
}

pub fn insert_contact_submission(
    conn: &Connection,
    submission: &NewContactSubmission,
) -> Result<ContactSubmission, StoreError> {
    let record = ContactSubmission {
        id: Uuid::new_v4().to_string(),
        name: submission.name.clone(),
        email: submission.email.clone(),
        company: submission.company.clone(),
        phone: submission.phone.clone(),
        message: submission.message.clone(),
        service: submission.service.clone(),
        budget: submission.budget.clone(),
        timeline: submission.timeline.clone(),
        status: ContactStatus::New,
        created_at: Utc::now(),
    };

    conn.execute(
        &format!("INSERT INTO contact_submissions ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)", CONTACT_COLUMNS),
        params![
            record.id,
            record.name,
            record.email,
            record.company,
            record.phone,
            record.message,
            record.service,
            record.budget,
            record.timeline,
            record.status,
            record.created_at,
        ],
    )?;
    Ok(record)
}

pub fn read_recent_contact_submissions(conn: &Connection, limit: u32) -> Result<Vec<ContactSubmission>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM contact_submissions ORDER BY created_at DESC, rowid DESC LIMIT ?1",
        CONTACT_COLUMNS
    ))?;
    let rows = stmt.query_map([limit], row_to_contact)?;

    let mut submissions = Vec::new();
    for submission in rows {
        submissions.push(submission?);
    }
    Ok(submissions)
}
