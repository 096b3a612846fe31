//! Shared helpers for router tests: an in-process store and request plumbing
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use bookmarks_server::models::{Bookmark, BookmarkPatch, NewBookmark};
use bookmarks_server::{build_router, AppState, BookmarkStore, DbError, Environment, ServerConfig};

pub const TOKEN: &str = "test-api-token";

/// Vec-backed store standing in for PostgreSQL
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Bookmark>>,
}

impl MemoryStore {
    pub fn with(rows: Vec<Bookmark>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bookmark>, DbError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Bookmark>, DbError> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let bookmark = Bookmark {
            id,
            title: new.title,
            url: new.url,
            rating: new.rating.get(),
            description: new.description,
        };
        rows.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn update(&self, id: i64, patch: BookmarkPatch) -> Result<u64, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|b| b.id == id) else {
            return Ok(0);
        };
        if let Some(title) = patch.title {
            row.title = title;
        }
        if let Some(url) = patch.url {
            row.url = url;
        }
        if let Some(rating) = patch.rating {
            row.rating = rating.get();
        }
        if let Some(description) = patch.description {
            row.description = description;
        }
        Ok(1)
    }
}

/// Store whose rows vanish between a read and an update: `get` finds the
/// row, `update` touches nothing
pub struct VanishingStore(pub MemoryStore);

#[async_trait]
impl BookmarkStore for VanishingStore {
    async fn list(&self) -> Result<Vec<Bookmark>, DbError> {
        self.0.list().await
    }

    async fn get(&self, id: i64) -> Result<Option<Bookmark>, DbError> {
        self.0.get(id).await
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, DbError> {
        self.0.insert(new).await
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        self.0.delete(id).await
    }

    async fn update(&self, _id: i64, _patch: BookmarkPatch) -> Result<u64, DbError> {
        Ok(0)
    }
}

/// Store whose every call fails like a lost database connection
pub struct FailingStore;

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn list(&self) -> Result<Vec<Bookmark>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _id: i64) -> Result<Option<Bookmark>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _new: NewBookmark) -> Result<Bookmark, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i64) -> Result<u64, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: i64, _patch: BookmarkPatch) -> Result<u64, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub fn fixtures() -> Vec<Bookmark> {
    vec![
        Bookmark {
            id: 1,
            title: "Goggle".into(),
            url: "https://www.google.com".into(),
            rating: 3,
            description: "This is a greate website".into(),
        },
        Bookmark {
            id: 2,
            title: "Yahoo".into(),
            url: "https://www.yahoo.com".into(),
            rating: 2,
            description: "This is not a greate website".into(),
        },
        Bookmark {
            id: 3,
            title: "Thinkful".into(),
            url: "https://www.thinkful.com".into(),
            rating: 5,
            description: "This is helping me towards a new career".into(),
        },
    ]
}

pub fn app(store: impl BookmarkStore + 'static) -> Router {
    app_in(store, Environment::Test)
}

pub fn app_in(store: impl BookmarkStore + 'static, environment: Environment) -> Router {
    let mut config = ServerConfig::new(TOKEN);
    config.environment = environment;
    app_with(store, config)
}

pub fn app_with(store: impl BookmarkStore + 'static, config: ServerConfig) -> Router {
    build_router(AppState::new(store, config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` for an empty body
    pub body: Value,
}

/// Send an authorized request with an optional JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", TOKEN));
    send_request(app, builder, body).await
}

pub async fn send_request(
    app: &Router,
    builder: axum::http::request::Builder,
    body: Option<Value>,
) -> TestResponse {
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
