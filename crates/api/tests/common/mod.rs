#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use tienda_api::request_log::RequestLog;
use tienda_api::router::build_app_router;
use tienda_api::state::AppState;
use tienda_core::types::DbId;
use tienda_db::models::product::{NewProduct, Product, UpdateProduct};
use tienda_db::repositories::ProductRepository;

// ---------------------------------------------------------------------------
// Repository doubles
// ---------------------------------------------------------------------------

/// In-memory product store with SERIAL-like ids starting at 1.
///
/// Counts every repository call so tests can assert that rejected requests
/// never reached the store.
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    last_id: Mutex<DbId>,
    calls: AtomicUsize,
}

impl InMemoryProducts {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn row(&self, id: DbId) -> Option<Product> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        self.record_call();
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        self.record_call();
        Ok(self.row(id))
    }

    async fn create(&self, input: &NewProduct) -> Result<DbId, sqlx::Error> {
        self.record_call();
        let id = {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            *last_id
        };
        self.rows.lock().unwrap().push(Product {
            id,
            nombre: Some(input.nombre.clone()),
            precio: Some(input.precio),
            descripcion: input.descripcion.clone(),
        });
        Ok(id)
    }

    async fn update(&self, id: DbId, input: &UpdateProduct) -> Result<bool, sqlx::Error> {
        self.record_call();
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == id) {
            Some(row) => {
                row.nombre = input.nombre.clone();
                row.precio = input.precio;
                row.descripcion = input.descripcion.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        self.record_call();
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }
}

/// A store whose every operation fails with the same driver error.
pub struct FailingProducts {
    pub message: String,
}

impl FailingProducts {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn error(&self) -> sqlx::Error {
        sqlx::Error::Protocol(self.message.clone())
    }
}

#[async_trait]
impl ProductRepository for FailingProducts {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        Err(self.error())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Err(self.error())
    }

    async fn create(&self, _input: &NewProduct) -> Result<DbId, sqlx::Error> {
        Err(self.error())
    }

    async fn update(&self, _id: DbId, _input: &UpdateProduct) -> Result<bool, sqlx::Error> {
        Err(self.error())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(self.error())
    }
}

/// A store that panics on listing, to exercise panic recovery.
pub struct PanickingProducts;

#[async_trait]
impl ProductRepository for PanickingProducts {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        panic!("listing exploded");
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Product>, sqlx::Error> {
        Ok(None)
    }

    async fn create(&self, _input: &NewProduct) -> Result<DbId, sqlx::Error> {
        Ok(1)
    }

    async fn update(&self, _id: DbId, _input: &UpdateProduct) -> Result<bool, sqlx::Error> {
        Ok(false)
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// Test application
// ---------------------------------------------------------------------------

/// The production router wired to a repository double and a temporary
/// request log.
pub struct TestApp {
    pub router: Router,
    pub log_path: PathBuf,
    _log_dir: TempDir,
}

impl TestApp {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        let log_dir = tempfile::tempdir().unwrap();
        let log_path = log_dir.path().join("server.log");
        Self::with_log_path(products, log_path, log_dir)
    }

    /// Use an explicit log path, e.g. one that cannot be written.
    pub fn with_log_path(
        products: Arc<dyn ProductRepository>,
        log_path: PathBuf,
        log_dir: TempDir,
    ) -> Self {
        let state = AppState::new(products, Arc::new(RequestLog::new(log_path.clone())));
        Self {
            router: build_app_router(state),
            log_path,
            _log_dir: log_dir,
        }
    }

    /// Lines written to the request log so far.
    pub fn log_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log_path)
            .unwrap_or_default()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

/// An in-memory store and an app built on it.
pub fn in_memory_app() -> (TestApp, Arc<InMemoryProducts>) {
    let products = Arc::new(InMemoryProducts::default());
    let app = TestApp::new(products.clone());
    (app, products)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: &TestApp, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: &TestApp, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
