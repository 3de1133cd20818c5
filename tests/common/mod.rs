#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{DateTime, Duration, Utc};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use prep_portal::database::store::PortalStore;
use prep_portal::error::{Error, Result};
use prep_portal::models::mock_result::{MockResult, NewResult};
use prep_portal::models::question::{Category, Question};
use prep_portal::models::user::{NewUser, User};
use prep_portal::{routes, AppState};

pub const PLAIN_EMAIL: &str = "ravi@example.com";
pub const PLAIN_PASSWORD: &str = "secret123";
pub const HASHED_EMAIL: &str = "lena@example.com";
pub const HASHED_PASSWORD: &str = "correct horse";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    questions: Vec<Question>,
    results: Vec<MockResult>,
}

/// `PortalStore` over plain vectors, counting every call.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        let store = InMemoryStore::default();
        store.add_user(PLAIN_EMAIL, PLAIN_PASSWORD, "ravi");
        let hashed = prep_portal::utils::crypto::hash_password(HASHED_PASSWORD).unwrap();
        store.add_user(HASHED_EMAIL, &hashed, "lena");

        for n in 1..=40 {
            store.add_question(Category::Quantitative, "Percentages", &format!("Percentages question {}", n), "B");
        }
        for n in 1..=5 {
            store.add_question(Category::Quantitative, "Time and Work", &format!("Time and Work question {}", n), "C");
        }
        for n in 1..=3 {
            store.add_question(Category::Logical, "Blood Relations", &format!("Blood Relations question {}", n), "A");
        }
        store.add_question(Category::Logical, "Coding-Decoding", "Coding-Decoding question 1", "D");
        store
    }

    pub fn add_user(&self, email: &str, password: &str, username: &str) -> User {
        let mut tables = self.tables.lock().unwrap();
        let user = User {
            id: tables.users.len() as i32 + 1,
            email: email.into(),
            password: password.into(),
            username: username.into(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        user
    }

    pub fn add_question(&self, category: Category, topic: &str, text: &str, correct: &str) -> i32 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.questions.len() as i32 + 1;
        tables.questions.push(Question {
            id,
            category: category.as_str().into(),
            topic: topic.into(),
            question_text: text.into(),
            option_a: "alpha".into(),
            option_b: "beta".into(),
            option_c: "gamma".into(),
            option_d: "delta".into(),
            correct_option: correct.into(),
            explanation: Some(format!("Because {}", correct)),
        });
        id
    }

    pub fn add_result(&self, user_id: i32, topic: &str, score: i32, total: i32, test_date: DateTime<Utc>) -> MockResult {
        let mut tables = self.tables.lock().unwrap();
        let row = MockResult {
            id: tables.results.len() as i32 + 1,
            user_id,
            score,
            total_questions: total,
            topic_name: topic.into(),
            test_date,
        };
        tables.results.push(row.clone());
        row
    }

    pub fn user_id(&self, email: &str) -> i32 {
        let tables = self.tables.lock().unwrap();
        tables.users.iter().find(|u| u.email == email).unwrap().id
    }

    pub fn question_ids(&self, topic: &str) -> Vec<i32> {
        let tables = self.tables.lock().unwrap();
        tables.questions.iter().filter(|q| q.topic == topic).map(|q| q.id).collect()
    }

    pub fn correct_option(&self, id: i32) -> String {
        let tables = self.tables.lock().unwrap();
        tables.questions.iter().find(|q| q.id == id).unwrap().correct_option.clone()
    }

    pub fn results(&self) -> Vec<MockResult> {
        self.tables.lock().unwrap().results.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PortalStore for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.touch();
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        self.touch();
        let exists = {
            let tables = self.tables.lock().unwrap();
            tables.users.iter().any(|u| u.email == new_user.email)
        };
        if exists {
            return Err(Error::Conflict(format!("Email {} is already registered", new_user.email)));
        }
        Ok(self.add_user(&new_user.email, &new_user.password, &new_user.username))
    }

    async fn list_topics(&self, category: Category) -> Result<Vec<String>> {
        self.touch();
        let tables = self.tables.lock().unwrap();
        let mut topics: Vec<String> = tables
            .questions
            .iter()
            .filter(|q| q.category == category.as_str())
            .map(|q| q.topic.clone())
            .collect();
        topics.sort();
        topics.dedup();
        Ok(topics)
    }

    async fn question_ids_for_topic(&self, topic: &str) -> Result<Vec<i32>> {
        self.touch();
        Ok(self.question_ids(topic))
    }

    async fn questions_by_ids(&self, ids: &[i32]) -> Result<Vec<Question>> {
        self.touch();
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().filter(|q| ids.contains(&q.id)).cloned().collect())
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        self.touch();
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_result(&self, result: &NewResult) -> Result<MockResult> {
        self.touch();
        Ok(self.add_result(result.user_id, &result.topic_name, result.score, result.total_questions, Utc::now()))
    }

    async fn results_for_user(&self, user_id: i32) -> Result<Vec<MockResult>> {
        self.touch();
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<MockResult> = tables.results.iter().filter(|r| r.user_id == user_id).cloned().collect();
        rows.sort_by(|a, b| b.test_date.cmp(&a.test_date).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

pub fn setup_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::seeded());
    let state = AppState::new(store.clone(), 30);
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
    (routes::build_router(state, session_layer), store)
}

pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(hours)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `name=value` part of the Set-Cookie header, if any.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn location(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let body = format!("email={}&password={}", email.replace('@', "%40"), password.replace(' ', "+"));
    let resp = app
        .clone()
        .oneshot(post_form("/login", &body, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    session_cookie(&resp).expect("login sets a session cookie")
}
