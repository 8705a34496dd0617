use super::{list_column, seed_if_empty, to_json_list, StoreError};
use crate::models::seed_data;
use crate::models::{
    BlogPost, BlogPostSummary, CaseStudy, NewBlogPost, NewCaseStudy, NewTestimonial, Testimonial,
};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

// ====================================================================
// ============================ BLOG POSTS ============================
// ====================================================================

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, content, image_url, author_name, author_image, tags, is_published, published_at, created_at, updated_at";
const BLOG_SUMMARY_COLUMNS: &str = "id, title, slug, excerpt, image_url, author_name, author_image, tags, published_at, created_at, updated_at";

fn row_to_blog_post(row: &Row) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        excerpt: row.get(3)?,
        content: row.get(4)?,
        image_url: row.get(5)?,
        author_name: row.get(6)?,
        author_image: row.get(7)?,
        tags: list_column(row, 8)?,
        is_published: row.get(9)?,
        published_at: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

fn row_to_blog_summary(row: &Row) -> rusqlite::Result<BlogPostSummary> {
    Ok(BlogPostSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        excerpt: row.get(3)?,
        image_url: row.get(4)?,
        author_name: row.get(5)?,
        author_image: row.get(6)?,
        tags: list_column(row, 7)?,
        published_at: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

pub fn insert_blog_post(conn: &Connection, post: &NewBlogPost) -> Result<BlogPost, StoreError> {
    let now = Utc::now();
    let record = BlogPost {
        id: Uuid::new_v4().to_string(),
        title: post.title.clone(),
        slug: post.slug.clone(),
        excerpt: post.excerpt.clone(),
        content: post.content.clone(),
        image_url: post.image_url.clone(),
        author_name: post.author_name.clone(),
        author_image: post.author_image.clone(),
        tags: post.tags.clone(),
        is_published: post.is_published,
        published_at: post.published_at,
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        &format!(
            "INSERT INTO blog_posts ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            BLOG_COLUMNS
        ),
        params![
            record.id,
            record.title,
            record.slug,
            record.excerpt,
            record.content,
            record.image_url,
            record.author_name,
            record.author_image,
            to_json_list(&record.tags)?,
            record.is_published,
            record.published_at,
            record.created_at,
            record.updated_at,
        ],
    )?;
    Ok(record)
}

pub fn read_published_blog_summaries(conn: &Connection) -> Result<Vec<BlogPostSummary>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM blog_posts WHERE is_published = 1 ORDER BY published_at DESC, rowid DESC",
        BLOG_SUMMARY_COLUMNS
    ))?;
    let rows = stmt.query_map([], row_to_blog_summary)?;

    let mut posts = Vec::new();
    for post in rows {
        posts.push(post?);
    }
    Ok(posts)
}

pub fn read_published_blog_post(conn: &Connection, slug: &str) -> Result<Option<BlogPost>, StoreError> {
    Ok(conn
        .query_row(
            &format!("SELECT {} FROM blog_posts WHERE slug = ?1 AND is_published = 1", BLOG_COLUMNS),
            [slug],
            row_to_blog_post,
        )
        .optional()?)
}

pub fn seed_blog_posts_if_empty(conn: &mut Connection) -> Result<bool, StoreError> {
    seed_if_empty(
        conn,
        "SELECT COUNT(*) FROM blog_posts WHERE is_published = 1",
        &seed_data::default_blog_posts(),
        insert_blog_post,
    )
}

// ====================================================================
// =========================== CASE STUDIES ===========================
// ====================================================================

const CASE_STUDY_COLUMNS: &str = "id, title, subtitle, client, industry, challenge, solution, results, image_url, is_published, sort_order, created_at";

fn row_to_case_study(row: &Row) -> rusqlite::Result<CaseStudy> {
    Ok(CaseStudy {
        id: row.get(0)?,
        title: row.get(1)?,
        subtitle: row.get(2)?,
        client: row.get(3)?,
        industry: row.get(4)?,
        challenge: row.get(5)?,
        solution: row.get(6)?,
        results: list_column(row, 7)?,
        image_url: row.get(8)?,
        is_published: row.get(9)?,
        order: row.get(10)?,
        created_at: row.get(11)?,
    })
}

pub fn insert_case_study(conn: &Connection, study: &NewCaseStudy) -> Result<CaseStudy, StoreError> {
    let record = CaseStudy {
        id: Uuid::new_v4().to_string(),
        title: study.title.clone(),
        subtitle: study.subtitle.clone(),
        client: study.client.clone(),
        industry: study.industry.clone(),
        challenge: study.challenge.clone(),
        solution: study.solution.clone(),
        results: study.results.clone(),
        image_url: study.image_url.clone(),
        is_published: study.is_published,
        order: study.order,
        created_at: Utc::now(),
    };

    conn.execute(
        &format!(
            "INSERT INTO case_studies ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            CASE_STUDY_COLUMNS
        ),
        params![
            record.id,
            record.title,
            record.subtitle,
            record.client,
            record.industry,
            record.challenge,
            record.solution,
            to_json_list(&record.results)?,
            record.image_url,
            record.is_published,
            record.order,
            record.created_at,
        ],
    )?;
    Ok(record)
}

pub fn read_published_case_studies(conn: &Connection) -> Result<Vec<CaseStudy>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM case_studies WHERE is_published = 1 ORDER BY sort_order ASC, rowid ASC",
        CASE_STUDY_COLUMNS
    ))?;
    let rows = stmt.query_map([], row_to_case_study)?;

    let mut studies = Vec::new();
    for study in rows {
        studies.push(study?);
    }
    Ok(studies)
}

pub fn seed_case_studies_if_empty(conn: &mut Connection) -> Result<bool, StoreError> {
    seed_if_empty(
        conn,
        "SELECT COUNT(*) FROM case_studies WHERE is_published = 1",
        &seed_data::default_case_studies(),
        insert_case_study,
    )
}

// ====================================================================
// =========================== TESTIMONIALS ===========================
// ====================================================================

const TESTIMONIAL_COLUMNS: &str =
    "id, quote, author_name, author_position, company, author_image, is_active, sort_order, created_at";

fn row_to_testimonial(row: &Row) -> rusqlite::Result<Testimonial> {
    Ok(Testimonial {
        id: row.get(0)?,
        quote: row.get(1)?,
        author_name: row.get(2)?,
        author_position: row.get(3)?,
        company: row.get(4)?,
        author_image: row.get(5)?,
        is_active: row.get(6)?,
        order: row.get(7)?,
        created_at: row.get(8)?,
    })
}

pub fn insert_testimonial(conn: &Connection, testimonial: &NewTestimonial) -> Result<Testimonial, StoreError> {
    let record = Testimonial {
        id: Uuid::new_v4().to_string(),
        quote: testimonial.quote.clone(),
        author_name: testimonial.author_name.clone(),
        author_position: testimonial.author_position.clone(),
        company: testimonial.company.clone(),
        author_image: testimonial.author_image.clone(),
        is_active: testimonial.is_active,
        order: testimonial.order,
        created_at: Utc::now(),
    };

    conn.execute(
        &format!(
            "INSERT INTO testimonials ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            TESTIMONIAL_COLUMNS
        ),
        params![
            record.id,
            record.quote,
            record.author_name,
            record.author_position,
            record.company,
            record.author_image,
            record.is_active,
            record.order,
            record.created_at,
        ],
    )?;
    Ok(record)
}

pub fn read_active_testimonials(conn: &Connection) -> Result<Vec<Testimonial>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM testimonials WHERE is_active = 1 ORDER BY sort_order ASC, rowid ASC",
        TESTIMONIAL_COLUMNS
    ))?;
    let rows = stmt.query_map([], row_to_testimonial)?;

    let mut testimonials = Vec::new();
    for testimonial in rows {
        testimonials.push(testimonial?);
    }
    Ok(testimonials)
}

pub fn count_active_testimonials(conn: &Connection) -> Result<i64, StoreError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM testimonials WHERE is_active = 1", [], |row| row.get(0))?)
}

pub fn seed_testimonials_if_empty(conn: &mut Connection) -> Result<bool, StoreError> {
    seed_if_empty(
        conn,
        "SELECT COUNT(*) FROM testimonials WHERE is_active = 1",
        &seed_data::default_testimonials(),
        insert_testimonial,
    )
}
