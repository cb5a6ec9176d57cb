use academy_landing::domain::landing_page::NewLandingPageContent;
use academy_landing::domain::types::LandingPageSection;
use academy_landing::repository::{DieselRepository, LandingPageWriter};
use academy_landing::routes;
use actix_web::{App, test, web};
use chrono::Utc;
use serde_json::{Value, json};

mod common;

macro_rules! test_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

/// Call a mutation and return the status code with the decoded body.
macro_rules! rpc_post {
    ($app:expr, $procedure:expr, $body:expr $(,)?) => {{
        let req = test::TestRequest::post()
            .uri(&format!("/trpc/{}", $procedure))
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn empty_landing_page_data() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/trpc/getLandingPageData")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "result": {
                "data": {
                    "hero": null,
                    "demo": null,
                    "cta": null,
                    "featuredCourses": [],
                    "categories": [],
                    "demoCodeExamples": [],
                    "achievements": []
                }
            }
        })
    );
}

#[actix_web::test]
async fn healthcheck_reports_ok() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/trpc/healthcheck")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["result"]["data"]["status"], "ok");
    let timestamp = body["result"]["data"]["timestamp"]
        .as_str()
        .expect("timestamp should be a string");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[actix_web::test]
async fn create_then_list_category() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);

    let (status, body) = rpc_post!(
        app,
        "createCategory",
        json!({
            "name": "Backend",
            "slug": "backend",
            "description": null,
            "icon": "server",
            "color": null
        }),
    );
    assert_eq!(status, 200);
    assert_eq!(body["result"]["data"]["id"], 1);
    assert_eq!(body["result"]["data"]["slug"], "backend");

    let req = test::TestRequest::get()
        .uri("/trpc/getCategories")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["result"]["data"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn duplicate_slug_is_a_conflict() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);
    let category = json!({"name": "Backend", "slug": "backend"});

    let (status, _) = rpc_post!(app, "createCategory", category.clone());
    assert_eq!(status, 200);
    let (status, body) = rpc_post!(app, "createCategory", category);

    assert_eq!(status, 409);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "category with slug 'backend' already exists"
    );
}

#[actix_web::test]
async fn invalid_input_is_a_bad_request() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);

    let (status, body) = rpc_post!(app, "createCategory", json!({"name": "", "slug": "x"}));
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = rpc_post!(
        app,
        "createAchievement",
        json!({"name": "A", "description": "B", "points_required": 10, "category": "legendary"}),
    );
    assert_eq!(status, 400);
    assert!(
        body["error"]["message"]
            .as_str()
            .is_some_and(|m| m.contains("legendary"))
    );

    let (status, body) = rpc_post!(app, "createCategory", json!({"slug": "missing-name"}));
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[actix_web::test]
async fn course_for_missing_category_is_unprocessable() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);

    let (status, body) = rpc_post!(
        app,
        "createCourse",
        json!({
            "category_id": 5,
            "title": "Python Basics",
            "slug": "python-basics",
            "description": "Start here",
            "language": "python",
            "difficulty_level": "beginner",
            "estimated_duration": 60
        }),
    );

    assert_eq!(status, 422);
    assert_eq!(body["error"]["code"], "UNPROCESSABLE_CONTENT");
    assert_eq!(body["error"]["message"], "category with id 5 does not exist");
}

#[actix_web::test]
async fn featured_course_appears_in_listing() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);

    let (status, _) = rpc_post!(
        app,
        "createCategory",
        json!({"name": "Backend", "slug": "backend"})
    );
    assert_eq!(status, 200);
    let (status, created) = rpc_post!(
        app,
        "createCourse",
        json!({
            "category_id": 1,
            "title": "C# Web APIs",
            "slug": "csharp-web-apis",
            "description": "ASP.NET from scratch",
            "language": "csharp",
            "difficulty_level": "advanced",
            "estimated_duration": 300,
            "is_featured": true,
            "is_published": true
        }),
    );
    assert_eq!(status, 200);

    let req = test::TestRequest::get()
        .uri("/trpc/getFeaturedCourses")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["result"]["data"], json!([created["result"]["data"]]));
    assert_eq!(body["result"]["data"][0]["language"], "csharp");
}

#[actix_web::test]
async fn update_landing_page_content() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let now = Utc::now().naive_utc();
    repo.create_landing_page_content(&NewLandingPageContent {
        section: LandingPageSection::Hero,
        title: Some("Learn to code".to_string()),
        subtitle: Some("Interactive courses".to_string()),
        content: None,
        cta_text: Some("Start".to_string()),
        cta_link: Some("/courses".to_string()),
        display_order: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    })
    .expect("should seed hero");
    let app = test_app!(test_db);

    let (status, body) = rpc_post!(
        app,
        "updateLandingPageContent",
        json!({"id": 1, "title": "X"})
    );
    assert_eq!(status, 200);
    assert_eq!(body["result"]["data"]["title"], "X");
    assert_eq!(body["result"]["data"]["subtitle"], "Interactive courses");

    let req = test::TestRequest::get()
        .uri("/trpc/getLandingPageData")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["result"]["data"]["hero"]["title"], "X");

    let (status, body) = rpc_post!(
        app,
        "updateLandingPageContent",
        json!({"id": 99, "title": "X"})
    );
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(
        body["error"]["message"],
        "landing page content with id 99 not found"
    );
}

#[actix_web::test]
async fn code_content_round_trips_over_rpc() {
    let test_db = common::TestDb::new();
    let app = test_app!(test_db);
    let code = "    def f():\n        return 1\n";

    let (status, created) = rpc_post!(
        app,
        "createCodeExample",
        json!({
            "title": "  Indented  ",
            "language": "python",
            "code_content": code,
            "is_demo": true,
            "difficulty_level": "beginner"
        })
    );
    assert_eq!(status, 200);
    assert_eq!(created["result"]["data"]["code_content"], code);
    assert_eq!(created["result"]["data"]["title"], "  Indented  ");

    let req = test::TestRequest::get()
        .uri("/trpc/getDemoCodeExamples")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["result"]["data"], json!([created["result"]["data"]]));
}
