//! End-to-end checks that need a real MySQL instance with the `users`
//! and `hospitals` tables in place. Point `DATABASE_URL` at it and run
//! `cargo test -- --ignored`.

use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use hms_backend::db;
use hms_backend::models::hospital::NewHospital;
use hms_backend::repositories::hospital_repository::HospitalRepository;
use hms_backend::repositories::user_repository::UserRepository;
use hms_backend::routes::routes::user_configure;
use hms_backend::services::user_service::UserService;

fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "mysql://root:@localhost/hms_db".to_string())
}

fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}+{nanos}@example.com")
}

#[actix_web::test]
#[ignore = "requires a running MySQL with the hms_db schema"]
async fn add_then_list_round_trip() {
    let pool = db::build_pool(&database_url()).unwrap();
    let service = web::Data::new(UserService::new(UserRepository::new(pool)));
    let app = test::init_service(
        App::new()
            .app_data(service.clone())
            .configure(user_configure),
    )
    .await;

    let email = unique_email("roundtrip");
    let req = test::TestRequest::post()
        .uri("/api/users/add")
        .set_json(json!({"name": "Ada", "email": email, "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["message"], "User created successfully");
    assert!(created["userId"].as_u64().unwrap() > 0);

    let req = test::TestRequest::get().uri("/api/users/get").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    let row = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["email"] == email.as_str())
        .expect("inserted user should appear in the listing");
    // Stored at rest as a bcrypt hash, never the plaintext.
    assert_ne!(row["password"], "hunter2");
    assert!(bcrypt::verify("hunter2", row["password"].as_str().unwrap()).unwrap());
}

#[actix_web::test]
#[ignore = "requires a running MySQL with the hms_db schema; empties the users table"]
async fn list_on_empty_table_returns_ok_with_empty_data() {
    let pool = db::build_pool(&database_url()).unwrap();
    sqlx::query("DELETE FROM users")
        .execute(&pool)
        .await
        .unwrap();

    let service = web::Data::new(UserService::new(UserRepository::new(pool)));
    let app = test::init_service(App::new().app_data(service).configure(user_configure)).await;

    let req = test::TestRequest::get().uri("/api/users/get").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    assert_eq!(listed["data"], json!([]));
}

#[actix_web::test]
#[ignore = "requires a running MySQL with the hms_db schema"]
async fn duplicate_email_is_a_client_error() {
    let pool = db::build_pool(&database_url()).unwrap();
    let repo = UserRepository::new(pool);
    let service = web::Data::new(UserService::new(repo.clone()));
    let app = test::init_service(
        App::new()
            .app_data(service.clone())
            .configure(user_configure),
    )
    .await;

    let email = unique_email("duplicate");
    let body = json!({"name": "Ada", "email": email, "password": "hunter2"});

    let req = test::TestRequest::post()
        .uri("/api/users/add")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let rows_after_first = repo.list().await.unwrap().len();

    let req = test::TestRequest::post()
        .uri("/api/users/add")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let parsed: Value = test::read_body_json(resp).await;
    assert_eq!(parsed["message"], "Email already exists");

    // The losing insert wrote nothing.
    assert_eq!(repo.list().await.unwrap().len(), rows_after_first);
}

#[actix_web::test]
#[ignore = "requires a running MySQL with the hms_db schema"]
async fn hospital_insert_returns_an_id() {
    let pool = db::build_pool(&database_url()).unwrap();
    let repo = HospitalRepository::new(pool);
    let hospital = NewHospital {
        name: "General Hospital".to_string(),
        address: "1 Main St".to_string(),
        phone_number: "555-0100".to_string(),
    };
    let id = repo.create(&hospital).await.unwrap();
    assert!(id > 0);
}
