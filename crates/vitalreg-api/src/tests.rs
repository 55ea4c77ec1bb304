//! Router tests against an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  Extension, Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use vitalreg_core::i18n::Catalog;
use vitalreg_store_sqlite::SqliteStore;

use crate::{ApiState, CurrentUser, api_router};

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  let catalog = Catalog::builtin().unwrap();
  api_router(ApiState::new(Arc::new(store), Arc::new(catalog)))
    .layer(Extension(CurrentUser("registrar".into())))
}

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: Response) -> String {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

fn birth_body(child: &str) -> Value {
  json!({
    "child_name": child,
    "mother_name": "Almaz Tadesse",
    "father_name": "Kebede Worku",
    "date_of_birth": "2025-01-15",
    "sex": "Male",
    "city": "Jimma",
    "kebele": "Hermata Merkato",
    "house_number": "123",
    "nationality": "Ethiopian",
    "registration_date": "2025-01-20",
  })
}

fn marriage_body() -> Value {
  json!({
    "husband_name": "Samuel Desta",
    "husband_age": 28,
    "husband_nationality": "Ethiopian",
    "wife_name": "Meron Yohannes",
    "wife_age": 25,
    "wife_nationality": "Ethiopian",
    "date_of_marriage": "2024-12-25",
    "city": "Jimma",
    "kebele": "Hermata Merkato",
    "house_number": "321",
    "registration_date": "2024-12-26",
  })
}

async fn register(app: &Router, collection: &str, body: Value) -> Value {
  let resp = send(app, "POST", &format!("/{collection}"), Some(body)).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  body_json(resp).await
}

// ── Records ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_and_fetch_birth() {
  let app = app().await;
  let created = register(&app, "births", birth_body("Abebe Kebede")).await;

  assert_eq!(created["category"], "birth");
  assert_eq!(created["status"], "Pending");
  assert_eq!(created["created_by"], "registrar");
  let regno = created["birth_regno"].as_str().unwrap().to_owned();
  assert!(regno.starts_with("BRT-"));

  let resp = send(&app, "GET", &format!("/births/{regno}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["child_name"], "Abebe Kebede");
}

#[tokio::test]
async fn unknown_collection_is_404() {
  let app = app().await;
  let resp = send(&app, "GET", "/adoptions", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn malformed_record_is_400() {
  let app = app().await;
  let resp = send(&app, "POST", "/births", Some(json!({"child_name": "X"}))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_requests_are_json_400s() {
  let app = app().await;
  let created = register(&app, "births", birth_body("Abebe Kebede")).await;
  let regno = created["birth_regno"].as_str().unwrap().to_owned();

  let cases = [
    ("GET", "/births?status=Archived".to_owned(), None),
    ("GET", "/persons/not-a-uuid".to_owned(), None),
    ("GET", "/search?record_type=adoption".to_owned(), None),
    ("GET", "/dashboard/recent?limit=many".to_owned(), None),
    ("POST", "/persons".to_owned(), Some(json!({"first_name": "A"}))),
    (
      "POST",
      format!("/births/{regno}/status"),
      Some(json!({"status": "Archived"})),
    ),
  ];
  for (method, uri, body) in cases {
    let resp = send(&app, method, &uri, body).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("application/json"), "{method} {uri}");
    assert!(body_json(resp).await["error"].is_string(), "{method} {uri}");
  }

  // The record is untouched by the rejected status change.
  let resp = send(&app, "GET", &format!("/births/{regno}"), None).await;
  assert_eq!(body_json(resp).await["status"], "Pending");
}

#[tokio::test]
async fn list_filters_and_paginates() {
  let app = app().await;
  for name in ["Abebe Kebede", "Hanna Tesfaye", "Abel Girma"] {
    register(&app, "births", birth_body(name)).await;
  }

  let resp = send(&app, "GET", "/births?search=abe&limit=1", None).await;
  let page = body_json(resp).await;
  assert_eq!(page["pagination"]["total"], 2);
  assert_eq!(page["pagination"]["pages"], 2);
  assert_eq!(page["items"][0]["child_name"], "Abebe Kebede");

  let resp = send(&app, "GET", "/births?status=approved", None).await;
  assert_eq!(body_json(resp).await["pagination"]["total"], 0);
}

#[tokio::test]
async fn status_update_is_visible_to_filters() {
  let app = app().await;
  let created = register(&app, "marriages", marriage_body()).await;
  let regno = created["marriage_regno"].as_str().unwrap().to_owned();

  let resp = send(
    &app,
    "POST",
    &format!("/marriages/{regno}/status"),
    Some(json!({"status": "Approved"})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["status"], "Approved");

  let resp = send(&app, "GET", "/search?status=Approved", None).await;
  let found = body_json(resp).await;
  assert_eq!(found["marriages"].as_array().unwrap().len(), 1);
  assert!(found["births"].as_array().unwrap().is_empty());

  let resp = send(
    &app,
    "POST",
    "/marriages/MAR-0/status",
    Some(json!({"status": "Rejected"})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_respects_record_type_and_term() {
  let app = app().await;
  register(&app, "births", birth_body("Samuel Tesfaye")).await;
  register(&app, "marriages", marriage_body()).await;

  let resp = send(&app, "GET", "/search?search_term=samuel", None).await;
  let all = body_json(resp).await;
  assert_eq!(all["births"].as_array().unwrap().len(), 1);
  assert_eq!(all["marriages"].as_array().unwrap().len(), 1);

  let resp = send(
    &app,
    "GET",
    "/search?search_term=samuel&record_type=marriage",
    None,
  )
  .await;
  let only = body_json(resp).await;
  assert!(only["births"].as_array().unwrap().is_empty());
  assert_eq!(only["marriages"].as_array().unwrap().len(), 1);
}

// ── Persons ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn person_lifecycle() {
  let app = app().await;
  let body = json!({"first_name": "Liya", "last_name": "Girma", "gender": "Female"});
  let resp = send(&app, "POST", "/persons", Some(body)).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let person = body_json(resp).await;
  let id = person["person_id"].as_str().unwrap().to_owned();
  assert_eq!(person["nationality"], "Ethiopian");

  let update = json!({
    "first_name": "Liya",
    "middle_name": "Abebe",
    "last_name": "Girma",
    "gender": "Female",
    "phone": "+251911000000",
  });
  let resp = send(&app, "PUT", &format!("/persons/{id}"), Some(update)).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let resp = send(&app, "GET", "/persons?search=abebe", None).await;
  let page = body_json(resp).await;
  assert_eq!(page["pagination"]["total"], 1);
  assert_eq!(page["items"][0]["phone"], "+251911000000");
}

#[tokio::test]
async fn person_requires_names() {
  let app = app().await;
  let body = json!({"first_name": " ", "last_name": "Girma", "gender": "Male"});
  let resp = send(&app, "POST", "/persons", Some(body)).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_counts_fresh_registrations() {
  let app = app().await;
  register(&app, "births", birth_body("Abebe Kebede")).await;
  register(&app, "marriages", marriage_body()).await;
  let body = json!({"first_name": "Liya", "last_name": "Girma", "gender": "Female"});
  send(&app, "POST", "/persons", Some(body)).await;

  let stats = body_json(send(&app, "GET", "/dashboard/stats", None).await).await;
  assert_eq!(stats["total_persons"], 1);
  assert_eq!(stats["total_births"], 1);
  assert_eq!(stats["recent_births"], 1);
  assert_eq!(stats["total_deaths"], 0);

  let feed = body_json(send(&app, "GET", "/dashboard/recent?limit=1", None).await).await;
  assert_eq!(feed.as_array().unwrap().len(), 1);
}

// ── Certificates and translations ────────────────────────────────────────────

#[tokio::test]
async fn certificate_is_localized() {
  let app = app().await;
  let created = register(&app, "births", birth_body("Abebe Kebede")).await;
  let regno = created["birth_regno"].as_str().unwrap().to_owned();

  let resp = send(&app, "GET", &format!("/certificates/births/{regno}?lang=am"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let cert = body_json(resp).await;
  assert_eq!(cert["print_label"], "ሰርተፍኬት አትም");
  assert_eq!(cert["language"], "am");

  let resp = send(
    &app,
    "GET",
    &format!("/certificates/births/{regno}?format=text"),
    None,
  )
  .await;
  let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
  assert!(content_type.starts_with("text/plain"));
  let text = body_text(resp).await;
  assert!(text.contains("BIRTH CERTIFICATE"));
  assert!(text.contains(&regno));

  let resp = send(&app, "GET", &format!("/certificates/births/{regno}?lang=fr"), None).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn i18n_table_falls_back_to_english() {
  let app = app().await;
  let table = body_json(send(&app, "GET", "/i18n/om", None).await).await;
  assert_eq!(table["layout.language"], "Language");
  assert_eq!(table["divorce.form.requester.both"], "Lamaan isaanii");

  let resp = send(&app, "GET", "/i18n/xx", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn me_reports_current_user() {
  let app = app().await;
  let me = body_json(send(&app, "GET", "/auth/me", None).await).await;
  assert_eq!(me["username"], "registrar");
}
