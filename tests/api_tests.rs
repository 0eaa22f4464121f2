use academy_cms::{AppConfig, AppState, MemoryRepository, RepositoryState, create_router};
use reqwest::{StatusCode, multipart};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Registers an admin through the API and returns a bearer token.
    async fn admin_token(&self) -> String {
        let register = self
            .client
            .post(self.url("/auth/register"))
            .json(&json!({
                "name": "Site Admin",
                "email": "admin@academy.edu",
                "password": "correct-horse"
            }))
            .send()
            .await
            .expect("register request failed");
        assert_eq!(register.status(), StatusCode::CREATED);

        let login: Value = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": "admin@academy.edu", "password": "correct-horse" }))
            .send()
            .await
            .expect("login request failed")
            .json()
            .await
            .unwrap();
        login["access_token"]
            .as_str()
            .expect("login returns an access token")
            .to_string()
    }
}

async fn spawn_app() -> TestApp {
    let repo = Arc::new(MemoryRepository::new()) as RepositoryState;
    let state = AppState {
        repo,
        config: AppConfig::default(),
    };
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_course_publishing_flow() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let category: Value = app
        .client
        .post(app.url("/courses/course-categories"))
        .bearer_auth(&token)
        .json(&json!({ "name": "Languages", "arabicName": "اللغات" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let category_id = category["_id"].as_str().unwrap().to_string();

    let created = app
        .client
        .post(app.url("/courses"))
        .bearer_auth(&token)
        .json(&json!({
            "title": "English",
            "arabicTitle": "الإنجليزية",
            "category": category_id,
            "description": "General English",
            "arabicDescription": "إنجليزية عامة",
            "level": "Beginner",
            "arabicLevel": "مبتدئ",
            "duration": "8 weeks",
            "arabicDuration": "٨ أسابيع",
            "schedule": "Sun-Tue",
            "arabicSchedule": "الأحد-الثلاثاء",
            "features": ["Certificate"],
            "arabicFeatures": ["شهادة"],
            "image": "english.png"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let course: Value = created.json().await.unwrap();
    assert_eq!(course["isActive"], true);
    assert!(course["createdAt"].is_string());

    // Anonymous visitors see it on the website payloads.
    let listed: Vec<Value> = app
        .client
        .get(app.url("/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    let home: Value = app
        .client
        .get(app.url("/public/home/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(home["status"], "success");
    assert_eq!(home["data"][0]["category"]["name"], "Languages");
    assert!(home["data"][0]["icon"].is_string());
}

#[tokio::test]
async fn test_validation_errors_list_every_field() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let response = app
        .client
        .post(app.url("/events"))
        .bearer_auth(&token)
        .json(&json!({
            "title": "",
            "arabicTitle": "فعالية",
            "description": "Details",
            "arabicDescription": "تفاصيل",
            "date": "tomorrow",
            "time": "10:00",
            "location": "Main hall",
            "arabicLocation": "القاعة",
            "thumbnail": "thumb.png"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let app = spawn_app().await;
    let response = app
        .client
        .get(app.url("/courses/not-a-uuid"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("rejections are JSON");
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].as_str().unwrap().contains("not-a-uuid"));
}

#[tokio::test]
async fn test_bad_query_and_form_rejections_are_json() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let response = app
        .client
        .get(app.url("/dashboard/activity?limit=lots"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("rejections are JSON");
    assert_eq!(body["statusCode"], 400);

    let response = app
        .client
        .post(app.url("/gallery"))
        .bearer_auth(&token)
        .json(&json!({ "title": "Not a form" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("rejections are JSON");
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn test_social_links_need_a_token() {
    let app = spawn_app().await;

    let anonymous = app
        .client
        .get(app.url("/footer/social-links"))
        .send()
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let token = app.admin_token().await;
    let missing = app
        .client
        .get(app.url("/footer/social-links"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let footer = app
        .client
        .get(app.url("/footer"))
        .send()
        .await
        .unwrap();
    assert_ne!(footer.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gallery_upload() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let category: Value = app
        .client
        .post(app.url("/gallery/category"))
        .bearer_auth(&token)
        .json(&json!({ "name": "Campus", "arabicName": "الحرم" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let category_id = category["_id"].as_str().unwrap().to_string();

    let form = |file_name: &'static str| {
        multipart::Form::new()
            .text("title", "Library")
            .text("arabicTitle", "المكتبة")
            .text("category", category_id.clone())
            .text("arabicCategory", category_id.clone())
            .part(
                "image",
                multipart::Part::bytes(vec![0x47, 0x49, 0x46, 0x38])
                    .file_name(file_name)
                    .mime_str("image/gif")
                    .unwrap(),
            )
    };

    let rejected = app
        .client
        .post(app.url("/gallery"))
        .bearer_auth(&token)
        .multipart(form("notes.pdf"))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let created = app
        .client
        .post(app.url("/gallery"))
        .bearer_auth(&token)
        .multipart(form("library.GIF"))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let item: Value = created.json().await.unwrap();
    assert_eq!(item["image"], "data:image/gif;base64,R0lGOA==");
    assert_eq!(item["category"]["name"], "Campus");

    let public: Vec<Value> = app
        .client
        .get(app.url("/public/gallery"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(public.len(), 1);

    let renamed = app
        .client
        .patch(app.url(&format!("/gallery/{}", item["_id"].as_str().unwrap())))
        .bearer_auth(&token)
        .multipart(multipart::Form::new().text("title", "Main library"))
        .send()
        .await
        .unwrap();
    assert_eq!(renamed.status(), StatusCode::OK);
    let renamed: Value = renamed.json().await.unwrap();
    assert_eq!(renamed["title"], "Main library");
    assert_eq!(renamed["image"], "data:image/gif;base64,R0lGOA==");
}

#[tokio::test]
async fn test_contact_form_is_public_but_inbox_is_not() {
    let app = spawn_app().await;

    let submitted = app
        .client
        .post(app.url("/contact/submit"))
        .json(&json!({
            "name": "Sara",
            "email": "sara@example.com",
            "subject": "Enrollment",
            "message": "When does the next term start?"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(submitted.status(), StatusCode::CREATED);
    let submission: Value = submitted.json().await.unwrap();
    assert_eq!(submission["status"], "pending");

    let anonymous = app
        .client
        .get(app.url("/contact/submissions"))
        .send()
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let token = app.admin_token().await;
    let inbox: Vec<Value> = app
        .client
        .get(app.url("/contact/submissions"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["_id"], submission["_id"]);
}

#[tokio::test]
async fn test_session_endpoints() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let me: Value = app
        .client
        .get(app.url("/auth/me"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me["email"], "admin@academy.edu");
    assert!(me.get("password").is_none(), "hashes never leave the server");

    let verified = app
        .client
        .post(app.url("/auth/verify-token"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(verified.status(), StatusCode::OK);

    let bogus = app
        .client
        .post(app.url("/auth/verify-token"))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(bogus.status(), StatusCode::UNAUTHORIZED);
}
