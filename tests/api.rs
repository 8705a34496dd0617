use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use medgan_backend::config::{Config, WebConfig};
use medgan_backend::models::seed_data;
use medgan_backend::routes;
use medgan_backend::setup::db_setup;
use medgan_backend::AppState;
use serde_json::{json, Value};
use tempfile::TempDir;

fn test_config(admin_accept_ip: Option<&str>) -> Config {
    Config {
        web: WebConfig { host: "127.0.0.1".to_string(), port: 0 },
        database_path: None,
        allowed_origins: String::new(),
        log_level: "info".to_string(),
        admin_accept_ip: admin_accept_ip.map(str::to_string),
        trusted_proxy_ips: None,
    }
}

fn configured_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let pool = db_setup::open_pool(&dir.path().join("site.db")).unwrap();
    (dir, AppState { pool: Some(pool) })
}

macro_rules! test_app {
    ($state:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($config))
                .app_data(web::Data::new($state))
                .configure(routes::config_api),
        )
        .await
    };
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn row_count(state: &AppState, table: &str) -> i64 {
    let conn = state.pool.as_ref().unwrap().get().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0)).unwrap()
}

fn contact_count(state: &AppState) -> i64 {
    row_count(state, "contact_submissions")
}

fn drop_table(state: &AppState, table: &str) {
    let conn = state.pool.as_ref().unwrap().get().unwrap();
    conn.execute_batch(&format!("DROP TABLE {}", table)).unwrap();
}

#[actix_web::test]
async fn contact_submission_returns_a_receipt() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/contact").set_json(json!({
            "name": "Jane Doe",
            "email": "Jane@Example.com",
            "message": "We would like a demo.",
            "company": "Acme"
        }))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Thank you for your message. We will get back to you within 24 hours.");
    assert!(body["submissionId"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(contact_count(&state), 1);
}

#[actix_web::test]
async fn contact_with_missing_fields_writes_nothing() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane Doe", "email": "jane@example.com", "message": "   " }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Required fields are missing");
    assert_eq!(contact_count(&state), 0);
}

#[actix_web::test]
async fn contact_with_bad_email_is_rejected() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "not-an-email", "message": "Hello" }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(contact_count(&state), 0);
}

#[actix_web::test]
async fn malformed_body_is_a_bad_request() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[actix_web::test]
async fn unconfigured_store_is_reported() {
    let app = test_app!(AppState { pool: None }, test_config(Some("*")));

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "jane@example.com", "message": "Hi" }))
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "email": "jane@example.com" }))
    );
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["databaseConfigured"], false);
}

#[actix_web::test]
async fn health_check_pings_the_store() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["databaseConfigured"], true);
}

#[actix_web::test]
async fn newsletter_distinguishes_new_active_and_inactive_emails() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "email": "Reader@Example.com" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Thank you for subscribing! You will receive our latest updates.");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "email": "reader@example.com" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is already subscribed");

    {
        let conn = state.pool.as_ref().unwrap().get().unwrap();
        conn.execute("UPDATE newsletter_subscriptions SET is_active = 0", []).unwrap();
    }

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "email": "reader@example.com" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let conn = state.pool.as_ref().unwrap().get().unwrap();
    let (rows, source): (i64, String) = conn
        .query_row(
            "SELECT COUNT(*), MAX(source) FROM newsletter_subscriptions WHERE is_active = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(source, "website");
}

#[actix_web::test]
async fn newsletter_requires_an_email() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "source": "footer" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email is required");
}

#[actix_web::test]
async fn empty_content_tables_are_seeded_once() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, first) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    assert_eq!(status, StatusCode::OK);
    let first = first.as_array().unwrap().clone();
    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|job| job["isActive"] == true));
    assert!(first.iter().any(|job| job["title"] == "Senior AI Engineer"));

    let (_, second) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    let ids = |jobs: &[Value]| jobs.iter().map(|j| j["id"].clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(second.as_array().unwrap()));

    let (_, testimonials) = call_json!(app, test::TestRequest::get().uri("/api/testimonials"));
    assert_eq!(testimonials.as_array().unwrap().len(), 3);

    let (_, studies) = call_json!(app, test::TestRequest::get().uri("/api/case-studies"));
    let orders: Vec<i64> = studies.as_array().unwrap().iter().map(|s| s["order"].as_i64().unwrap()).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
}

#[actix_web::test]
async fn blog_list_omits_content_and_detail_renders_it() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, posts) = call_json!(app, test::TestRequest::get().uri("/api/blog"));
    assert_eq!(status, StatusCode::OK);
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|p| p.get("content").is_none()));
    assert_eq!(posts[0]["slug"], "future-of-agentic-ai");

    let (status, post) = call_json!(app, test::TestRequest::get().uri("/api/blog/future-of-agentic-ai"));
    assert_eq!(status, StatusCode::OK);
    assert!(post["content"].as_str().is_some());
    assert!(post["contentHtml"].as_str().is_some_and(|html| html.contains('<')));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/blog/no-such-post"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");
}

#[actix_web::test]
async fn job_detail_is_found_by_id() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (_, jobs) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    let id = jobs[0]["id"].as_str().unwrap().to_string();

    let (status, job) = call_json!(app, test::TestRequest::get().uri(&format!("/api/jobs/{}", id)));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["id"], id.as_str());
    assert!(job["type"].as_str().is_some());

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/jobs/does-not-exist"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job not found");
}

fn application_body(job_id: &str) -> Value {
    json!({
        "jobId": job_id,
        "jobTitle": "Senior AI Engineer",
        "firstName": "Omar",
        "lastName": "Said",
        "email": "omar@example.com",
        "phone": "+971500000000",
        "experience": "6 years",
        "skills": ["Rust", "  ", "PyTorch"]
    })
}

#[actix_web::test]
async fn application_increments_the_posting_count() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (_, jobs) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    let id = jobs[0]["id"].as_str().unwrap().to_string();
    let before = jobs[0]["applicationCount"].as_i64().unwrap();

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/applications").set_json(application_body(&id))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["applicationId"].as_str().is_some());

    let (_, job) = call_json!(app, test::TestRequest::get().uri(&format!("/api/jobs/{}", id)));
    assert_eq!(job["applicationCount"].as_i64().unwrap(), before + 1);
}

#[actix_web::test]
async fn application_for_unknown_job_still_succeeds() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/applications").set_json(application_body("retired-posting"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Thank you for your application! We will review your submission and get back to you soon."
    );
}

#[actix_web::test]
async fn admin_routes_reject_unlisted_addresses() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("10.0.0.1")));

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .peer_addr("203.0.113.9:5000".parse().unwrap())
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Forbidden");

    let (status, _) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .peer_addr("10.0.0.1:5000".parse().unwrap())
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn spoofed_forwarded_for_does_not_open_admin_routes() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(Some("10.0.0.1")));

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri("/api/stats")
            .peer_addr("203.0.113.9:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "10.0.0.1"))
            .set_json(json!({ "projectsDelivered": 1, "enterpriseClients": 1, "countriesServed": 1 }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(row_count(&state, "website_stats"), 0);
}

#[actix_web::test]
async fn forwarded_for_is_used_behind_a_trusted_proxy() {
    let (_dir, state) = configured_state();
    let mut config = test_config(Some("10.0.0.1"));
    config.trusted_proxy_ips = Some("127.0.0.1".to_string());
    let app = test_app!(state, config);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .peer_addr("127.0.0.1:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "10.0.0.1"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/admin/dashboard")
            .peer_addr("127.0.0.1:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_routes_are_closed_without_an_allow_list() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(None));

    let (status, _) = call_json!(
        app,
        test::TestRequest::put().uri("/api/stats").set_json(json!({
            "projectsDelivered": 1, "enterpriseClients": 1, "countriesServed": 1
        }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn stats_update_is_visible_to_readers() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("*")));

    let (status, stats) = call_json!(app, test::TestRequest::get().uri("/api/stats"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["projectsDelivered"], 50);
    assert_eq!(stats["clientSatisfaction"], "99%");
    assert!(stats["lastUpdated"].as_str().is_some());

    let (status, body) = call_json!(
        app,
        test::TestRequest::put().uri("/api/stats").set_json(json!({
            "projectsDelivered": 72, "enterpriseClients": 31, "countriesServed": 18
        }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Stats updated successfully");

    let (_, stats) = call_json!(app, test::TestRequest::get().uri("/api/stats"));
    assert_eq!(stats["projectsDelivered"], 72);
    assert_eq!(stats["enterpriseClients"], 31);
    assert_eq!(stats["countriesServed"], 18);
    assert_eq!(stats["clientSatisfaction"], "99%");
}

#[actix_web::test]
async fn stats_update_rejects_non_integer_counters() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("*")));

    let (status, body) = call_json!(
        app,
        test::TestRequest::put().uri("/api/stats").set_json(json!({
            "projectsDelivered": "72", "enterpriseClients": 31, "countriesServed": 18
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid data types");
}

#[actix_web::test]
async fn admin_created_content_is_published() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("*")));

    let (status, job) = call_json!(
        app,
        test::TestRequest::post().uri("/api/jobs").set_json(json!({
            "title": "Data Engineer",
            "department": "Engineering",
            "location": "Dubai, UAE",
            "type": "Full-time",
            "description": "Build pipelines.",
            "requirements": ["SQL"]
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(job["isActive"], true);
    assert_eq!(job["applicationCount"], 0);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/jobs").set_json(json!({ "title": "Incomplete" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The table is no longer empty, so no defaults are seeded.
    let (_, jobs) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], "Data Engineer");

    let (status, testimonial) = call_json!(
        app,
        test::TestRequest::post().uri("/api/testimonials").set_json(json!({
            "quote": "Great partner.",
            "authorName": "Nadia",
            "authorPosition": "CTO",
            "company": "Example Co"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(testimonial["isActive"], true);
    assert_eq!(testimonial["order"], 0);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/case-studies").set_json(json!({
            "title": "Retail forecasting",
            "client": "Example Retail",
            "industry": "Retail",
            "challenge": "Stock-outs",
            "solution": "Demand models"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn duplicate_blog_slug_conflicts() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("*")));

    let post = json!({
        "title": "Shipping models",
        "slug": "Shipping-Models",
        "excerpt": "How we deploy.",
        "content": "## Deploy\n\nCarefully.",
        "authorName": "Team",
        "isPublished": true
    });

    let (status, created) = call_json!(app, test::TestRequest::post().uri("/api/blog").set_json(post.clone()));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "shipping-models");
    assert!(created["publishedAt"].as_str().is_some());

    let (status, body) = call_json!(app, test::TestRequest::post().uri("/api/blog").set_json(post));
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "A blog post with this slug already exists");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/blog").set_json(json!({
            "title": "Bad", "slug": "bad slug!", "excerpt": "x", "content": "y", "authorName": "z"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn dashboard_summarises_recent_activity() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("*")));

    for i in 0..12 {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post().uri("/api/contact").set_json(json!({
                "name": format!("Visitor {}", i),
                "email": format!("visitor{}@example.com", i),
                "message": "Hello"
            }))
        );
        assert_eq!(status, StatusCode::OK);
    }
    call_json!(app, test::TestRequest::post().uri("/api/applications").set_json(application_body("job-1")));
    call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "email": "fan@example.com" }))
    );

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/admin/dashboard"));
    assert_eq!(status, StatusCode::OK);

    let dashboard = &body["dashboard"];
    let contacts = dashboard["recentContacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 10);
    assert_eq!(contacts[0]["name"], "Visitor 11");
    assert_eq!(contacts[0]["status"], "NEW");

    let applications = dashboard["recentApplications"].as_array().unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["applicant"], "Omar Said");
    assert_eq!(applications[0]["status"], "SUBMITTED");

    assert_eq!(dashboard["subscriberCount"], 1);
    assert_eq!(dashboard["testimonialCount"], 0);
    assert_eq!(dashboard["currentStats"]["projectsDelivered"], 50);
}

#[actix_web::test]
async fn unknown_api_paths_are_json_404s() {
    let app = test_app!(AppState { pool: None }, test_config(None));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/nothing-here"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[actix_web::test]
async fn contact_message_keeps_every_character() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/contact").set_json(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Need help when a<b and c>d in our pipeline"
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let conn = state.pool.as_ref().unwrap().get().unwrap();
    let stored: String = conn.query_row("SELECT message FROM contact_submissions", [], |row| row.get(0)).unwrap();
    assert_eq!(stored, "Need help when a&lt;b and c&gt;d in our pipeline");
    assert_eq!(
        html_escape::decode_html_entities(&stored),
        "Need help when a<b and c>d in our pipeline"
    );
}

#[actix_web::test]
async fn cover_letter_keeps_every_character() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let mut body = application_body("job-1");
    body["coverLetter"] = json!("I cut latency from <200ms> to 40ms & shipped it.");
    let (status, _) = call_json!(app, test::TestRequest::post().uri("/api/applications").set_json(body));
    assert_eq!(status, StatusCode::OK);

    let conn = state.pool.as_ref().unwrap().get().unwrap();
    let stored: String = conn.query_row("SELECT cover_letter FROM job_applications", [], |row| row.get(0)).unwrap();
    assert_eq!(
        html_escape::decode_html_entities(&stored),
        "I cut latency from <200ms> to 40ms & shipped it."
    );
}

#[actix_web::test]
async fn padded_emails_are_rejected() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/newsletter").set_json(json!({ "email": " reader@example.com " }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");
    assert_eq!(row_count(&state, "newsletter_subscriptions"), 0);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "Jane", "email": "jane@example.com ", "message": "Hi" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(contact_count(&state), 0);
}

#[actix_web::test]
async fn application_validation_writes_nothing() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(None));

    let mut missing_phone = application_body("job-1");
    missing_phone.as_object_mut().unwrap().remove("phone");
    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/applications").set_json(missing_phone)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Required fields are missing");

    let mut bad_email = application_body("job-1");
    bad_email["email"] = json!("omar.example.com");
    let (status, body) = call_json!(app, test::TestRequest::post().uri("/api/applications").set_json(bad_email));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email format");

    assert_eq!(row_count(&state, "job_applications"), 0);
}

#[actix_web::test]
async fn admin_posts_with_missing_fields_write_nothing() {
    let (_dir, state) = configured_state();
    let app = test_app!(state.clone(), test_config(Some("*")));

    let cases = [
        ("/api/jobs", "job_postings", json!({ "title": "Data Engineer", "department": "Engineering" })),
        ("/api/blog", "blog_posts", json!({ "title": "Draft", "slug": "draft", "content": "Body" })),
        (
            "/api/case-studies",
            "case_studies",
            json!({ "title": "Retail", "client": "Shop", "industry": "Retail", "results": [] }),
        ),
        ("/api/testimonials", "testimonials", json!({ "quote": "Great", "authorName": "Nadia" })),
    ];

    for (uri, table, payload) in cases {
        let (status, body) = call_json!(app, test::TestRequest::post().uri(uri).set_json(payload));
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], "Required fields are missing", "{}", uri);
        assert_eq!(row_count(&state, table), 0, "{}", table);
    }
}

#[actix_web::test]
async fn stats_update_accepts_integral_floats() {
    let (_dir, state) = configured_state();
    let app = test_app!(state, test_config(Some("*")));

    let (status, _) = call_json!(
        app,
        test::TestRequest::put().uri("/api/stats").set_json(json!({
            "projectsDelivered": 72.0, "enterpriseClients": 31, "countriesServed": 18
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = call_json!(app, test::TestRequest::get().uri("/api/stats"));
    assert_eq!(stats["projectsDelivered"], 72);

    let (status, body) = call_json!(
        app,
        test::TestRequest::put().uri("/api/stats").set_json(json!({
            "projectsDelivered": 72.5, "enterpriseClients": 31, "countriesServed": 18
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid data types");
}

#[actix_web::test]
async fn unreadable_store_serves_fallback_content() {
    let (_dir, state) = configured_state();
    for table in ["job_postings", "blog_posts", "case_studies", "testimonials", "website_stats"] {
        drop_table(&state, table);
    }
    let app = test_app!(state, test_config(None));

    let (status, jobs) = call_json!(app, test::TestRequest::get().uri("/api/jobs"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(jobs, seed_data::fallback_job_postings());

    let (status, posts) = call_json!(app, test::TestRequest::get().uri("/api/blog"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts, seed_data::fallback_blog_posts());

    let (status, studies) = call_json!(app, test::TestRequest::get().uri("/api/case-studies"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(studies, seed_data::fallback_case_studies());

    let (status, testimonials) = call_json!(app, test::TestRequest::get().uri("/api/testimonials"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(testimonials, seed_data::fallback_testimonials());

    let (status, stats) = call_json!(app, test::TestRequest::get().uri("/api/stats"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["projectsDelivered"], 50);
    assert_eq!(stats["enterpriseClients"], 25);
    assert_eq!(stats["clientSatisfaction"], "99%");
    assert_eq!(stats["countriesServed"], 15);
    assert!(stats["lastUpdated"].is_string());
}
