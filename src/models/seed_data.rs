//! Hardcoded marketing content. The seed sets are written to empty tables on first
//! read; the fallback payloads are served when the store cannot be read at all.

use super::{NewBlogPost, NewCaseStudy, NewJobPosting, NewTestimonial, StatsCounters};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn midnight_utc(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| Utc.from_utc_datetime(&n))
}

pub fn default_job_postings() -> Vec<NewJobPosting> {
    vec![
        NewJobPosting {
            title: "Senior AI Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Dubai, UAE".to_string(),
            job_type: "Full-time".to_string(),
            salary: Some("AED 25,000 - 35,000".to_string()),
            description: "Join our team to build cutting-edge agentic AI systems that transform businesses across the MENA region.".to_string(),
            requirements: strings(&[
                "5+ years experience in AI/ML development",
                "Strong background in Python, TensorFlow/PyTorch",
                "Experience with autonomous systems and agent frameworks",
                "Master's degree in Computer Science or related field",
            ]),
            responsibilities: strings(&[
                "Design and implement agentic AI solutions",
                "Lead AI research and development initiatives",
                "Collaborate with cross-functional teams",
                "Mentor junior engineers",
            ]),
            benefits: strings(&[
                "Competitive salary and equity",
                "Health and dental insurance",
                "Professional development budget",
                "Flexible working arrangements",
            ]),
            is_active: true,
        },
        NewJobPosting {
            title: "AI Solutions Architect".to_string(),
            department: "Engineering".to_string(),
            location: "Riyadh, Saudi Arabia".to_string(),
            job_type: "Full-time".to_string(),
            salary: Some("SAR 20,000 - 30,000".to_string()),
            description: "Lead the design and architecture of enterprise AI solutions for our major clients in the region.".to_string(),
            requirements: strings(&[
                "7+ years experience in solution architecture",
                "Deep understanding of AI/ML systems",
                "Experience with cloud platforms (AWS, Azure, GCP)",
                "Strong communication and client-facing skills",
            ]),
            responsibilities: strings(&[
                "Design scalable AI architectures",
                "Work directly with enterprise clients",
                "Provide technical leadership",
                "Define technical standards and best practices",
            ]),
            benefits: strings(&[
                "Competitive salary package",
                "Annual performance bonus",
                "Health insurance for family",
                "Relocation assistance",
            ]),
            is_active: true,
        },
        NewJobPosting {
            title: "Product Manager - AI Products".to_string(),
            department: "Product".to_string(),
            location: "Amman, Jordan".to_string(),
            job_type: "Full-time".to_string(),
            salary: Some("JOD 3,000 - 4,500".to_string()),
            description: "Drive product strategy and roadmap for our AI product portfolio across healthcare, logistics, and fintech.".to_string(),
            requirements: strings(&[
                "5+ years product management experience",
                "Background in AI/tech products",
                "Strong analytical and strategic thinking",
                "Experience in MENA markets preferred",
            ]),
            responsibilities: strings(&[
                "Define product vision and strategy",
                "Manage product roadmap and prioritization",
                "Work with engineering and design teams",
                "Conduct market research and competitor analysis",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Stock options",
                "Professional development opportunities",
                "Flexible work environment",
            ]),
            is_active: true,
        },
    ]
}

pub fn default_blog_posts() -> Vec<NewBlogPost> {
    vec![
        NewBlogPost {
            title: "The Future of Agentic AI: Autonomous Systems That Think and Act".to_string(),
            slug: "future-of-agentic-ai".to_string(),
            excerpt: "Explore how agentic AI is revolutionizing business operations by creating autonomous systems that can think, learn, and make decisions independently.".to_string(),
            content: "Agentic AI represents the next frontier in artificial intelligence...".to_string(),
            image_url: Some("/api/placeholder/600/400".to_string()),
            author_name: "Dr. Ahmed Al-Rashid".to_string(),
            author_image: Some("/team/ahmed-placeholder.jpg".to_string()),
            tags: strings(&["AI Technology", "Innovation", "Future Tech"]),
            is_published: true,
            published_at: midnight_utc(2024, 6, 15),
        },
        NewBlogPost {
            title: "Implementing AI Transformation in MENA: A Strategic Guide".to_string(),
            slug: "ai-transformation-mena-guide".to_string(),
            excerpt: "A comprehensive guide to successfully implementing AI transformation initiatives in Middle Eastern and North African markets.".to_string(),
            content: "The Middle East and North Africa region is experiencing unprecedented digital transformation...".to_string(),
            image_url: Some("/api/placeholder/600/400".to_string()),
            author_name: "Sarah Al-Mansouri".to_string(),
            author_image: Some("/team/sarah-placeholder.jpg".to_string()),
            tags: strings(&["Strategy", "MENA", "Digital Transformation"]),
            is_published: true,
            published_at: midnight_utc(2024, 6, 10),
        },
        NewBlogPost {
            title: "Custom AI Development: Building Solutions That Scale".to_string(),
            slug: "custom-ai-development-guide".to_string(),
            excerpt: "Learn the best practices for developing custom AI solutions that can grow with your business and adapt to changing requirements.".to_string(),
            content: "Building scalable AI solutions requires careful planning and architecture...".to_string(),
            image_url: Some("/api/placeholder/600/400".to_string()),
            author_name: "Mohammad Hassan".to_string(),
            author_image: Some("/team/mohammad-placeholder.jpg".to_string()),
            tags: strings(&["Development", "Scalability", "Best Practices"]),
            is_published: true,
            published_at: midnight_utc(2024, 6, 5),
        },
    ]
}

pub fn default_case_studies() -> Vec<NewCaseStudy> {
    vec![
        NewCaseStudy {
            title: "Healthcare AI Transformation".to_string(),
            subtitle: Some("Revolutionizing Patient Care with Agentic AI".to_string()),
            client: "Jordan Medical Center".to_string(),
            industry: "Healthcare".to_string(),
            challenge: "Manual patient data processing causing 40% efficiency loss and delayed diagnoses".to_string(),
            solution: "Implemented agentic AI system for automated patient data analysis, diagnosis assistance, and workflow optimization".to_string(),
            results: strings(&[
                "40% improvement in patient care efficiency",
                "60% reduction in diagnostic errors",
                "90% automation of routine tasks",
                "$2.3M annual cost savings",
            ]),
            image_url: Some("/case-studies/healthcare-ai.jpg".to_string()),
            is_published: true,
            order: 1,
        },
        NewCaseStudy {
            title: "Supply Chain Intelligence Revolution".to_string(),
            subtitle: Some("Autonomous AI Agents for Logistics Optimization".to_string()),
            client: "MENA Logistics Corporation".to_string(),
            industry: "Logistics".to_string(),
            challenge: "Inefficient route planning and inventory management leading to 30% cost overruns".to_string(),
            solution: "Deployed autonomous AI agents for route optimization, demand forecasting, and real-time supply chain management".to_string(),
            results: strings(&[
                "30% reduction in operational costs",
                "25% faster delivery times",
                "99.5% inventory accuracy",
                "Real-time supply chain visibility",
            ]),
            image_url: Some("/case-studies/logistics-ai.jpg".to_string()),
            is_published: true,
            order: 2,
        },
        NewCaseStudy {
            title: "Fintech AI Strategy Implementation".to_string(),
            subtitle: Some("Digital Banking Transformation".to_string()),
            client: "Digital Finance Solutions".to_string(),
            industry: "Financial Services".to_string(),
            challenge: "Legacy systems limiting growth and customer experience in competitive fintech market".to_string(),
            solution: "Comprehensive AI transformation strategy with intelligent automation, fraud detection, and personalized banking services".to_string(),
            results: strings(&[
                "300% increase in customer acquisition",
                "50% reduction in fraud incidents",
                "80% faster loan processing",
                "Market leadership in MENA region",
            ]),
            image_url: Some("/case-studies/fintech-ai.jpg".to_string()),
            is_published: true,
            order: 3,
        },
    ]
}

pub fn default_testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            quote: "MedGAN transformed our healthcare operations with their agentic AI system. We've seen 40% improvement in patient care efficiency.".to_string(),
            author_name: "Dr. Sarah Al-Mansouri".to_string(),
            author_position: "Chief Medical Officer".to_string(),
            company: "Jordan Medical Center".to_string(),
            author_image: Some("/team/sarah-placeholder.jpg".to_string()),
            is_active: true,
            order: 1,
        },
        NewTestimonial {
            quote: "Their custom AI solution revolutionized our supply chain. We reduced costs by 30% and improved delivery times significantly.".to_string(),
            author_name: "Ahmed Hassan".to_string(),
            author_position: "Operations Director".to_string(),
            company: "MENA Logistics Corp".to_string(),
            author_image: Some("/team/ahmed-placeholder.jpg".to_string()),
            is_active: true,
            order: 2,
        },
        NewTestimonial {
            quote: "The AI transformation strategy MedGAN provided helped us become the leading fintech in the region.".to_string(),
            author_name: "Layla Khoury".to_string(),
            author_position: "CEO".to_string(),
            company: "Digital Finance Solutions".to_string(),
            author_image: Some("/team/layla-placeholder.jpg".to_string()),
            is_active: true,
            order: 3,
        },
    ]
}

// --- Fallback payloads ---

pub fn fallback_job_postings() -> Value {
    json!([{
        "id": "1",
        "title": "Senior AI Engineer",
        "department": "Engineering",
        "location": "Dubai, UAE",
        "type": "Full-time",
        "description": "Join our team to build cutting-edge agentic AI systems.",
        "isActive": true
    }])
}

pub fn fallback_blog_posts() -> Value {
    json!([{
        "id": "1",
        "title": "The Future of Agentic AI: Autonomous Systems That Think and Act",
        "slug": "future-of-agentic-ai",
        "excerpt": "Explore how agentic AI is revolutionizing business operations by creating autonomous systems that can think, learn, and make decisions independently.",
        "authorName": "Dr. Ahmed Al-Rashid",
        "publishedAt": "2024-06-15T00:00:00Z",
        "tags": ["AI Technology"]
    }])
}

pub fn fallback_case_studies() -> Value {
    json!([{
        "id": "1",
        "title": "Healthcare AI Transformation",
        "client": "Jordan Medical Center",
        "industry": "Healthcare",
        "challenge": "Manual patient data processing causing 40% efficiency loss and delayed diagnoses",
        "solution": "Implemented agentic AI system for automated patient data analysis, diagnosis assistance, and workflow optimization",
        "results": [
            "40% improvement in patient care efficiency",
            "60% reduction in diagnostic errors"
        ]
    }])
}

pub fn fallback_testimonials() -> Value {
    json!([{
        "id": "1",
        "quote": "MedGAN transformed our healthcare operations with their agentic AI system. We've seen 40% improvement in patient care efficiency.",
        "authorName": "Dr. Sarah Al-Mansouri",
        "authorPosition": "Chief Medical Officer",
        "company": "Jordan Medical Center",
        "authorImage": "/team/sarah-placeholder.jpg",
        "isActive": true,
        "order": 1
    }])
}

pub fn fallback_stats() -> Value {
    let counters = StatsCounters::default();
    json!({
        "projectsDelivered": counters.projects_delivered,
        "enterpriseClients": counters.enterprise_clients,
        "clientSatisfaction": counters.client_satisfaction,
        "countriesServed": counters.countries_served,
        "lastUpdated": Utc::now().to_rfc3339(),
    })
}
