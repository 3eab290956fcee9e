//! In-process stand-in for the ledger backend, for client and workflow tests.
use std::sync::{Arc, Mutex};

use api_types::{
    Id,
    category::{Category, CategoryNew},
    ledger::TransactionPayload,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredTransaction {
    pub id: i64,
    pub payload: TransactionPayload,
}

#[derive(Debug, Default)]
pub struct Store {
    pub transactions: Vec<StoredTransaction>,
    pub categories: Vec<Category>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn insert_category(&mut self, title: &str) -> i64 {
        let id = self.next_id();
        self.categories.push(Category {
            id: Id::Int(id),
            title: title.to_string(),
        });
        id
    }

    pub fn insert_transaction(&mut self, payload: TransactionPayload) -> i64 {
        let id = self.next_id();
        self.transactions.push(StoredTransaction { id, payload });
        id
    }

    fn view(&self, tx: &StoredTransaction) -> Value {
        let categories: Vec<Value> = tx
            .payload
            .category_ids
            .iter()
            .filter_map(|id| self.categories.iter().find(|c| &c.id == id))
            .map(|c| json!({ "id": c.id, "name": c.title }))
            .collect();
        json!({
            "id": tx.id,
            "name": tx.payload.name,
            "money": tx.payload.money,
            "debit": tx.payload.debit,
            "categories": categories,
        })
    }
}

pub type SharedStore = Arc<Mutex<Store>>;

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "no such transaction" }))).into_response()
}

async fn list(State(store): State<SharedStore>) -> Json<Value> {
    let store = store.lock().unwrap();
    let rows: Vec<Value> = store.transactions.iter().map(|tx| store.view(tx)).collect();
    Json(Value::Array(rows))
}

async fn detail(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.transactions.iter().find(|tx| tx.id == id) {
        Some(tx) => Json(store.view(tx)).into_response(),
        None => not_found(),
    }
}

async fn create(
    State(store): State<SharedStore>,
    Json(payload): Json<TransactionPayload>,
) -> Json<Value> {
    let id = store.lock().unwrap().insert_transaction(payload);
    Json(json!({ "id": id }))
}

async fn update(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(payload): Json<TransactionPayload>,
) -> Response {
    let mut store = store.lock().unwrap();
    match store.transactions.iter_mut().find(|tx| tx.id == id) {
        Some(tx) => {
            tx.payload = payload;
            StatusCode::OK.into_response()
        }
        None => not_found(),
    }
}

async fn remove(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    let before = store.transactions.len();
    store.transactions.retain(|tx| tx.id != id);
    if store.transactions.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn categories(State(store): State<SharedStore>) -> Json<Vec<Category>> {
    Json(store.lock().unwrap().categories.clone())
}

async fn create_category(
    State(store): State<SharedStore>,
    Json(body): Json<CategoryNew>,
) -> Response {
    if body.title.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "title is required" })),
        )
            .into_response();
    }
    let id = store.lock().unwrap().insert_category(&body.title);
    Json(json!({ "id": id, "title": body.title })).into_response()
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/ledger", get(list).post(create))
        .route("/ledger/total", get(list))
        .route("/ledger/{id}", get(detail).put(update).delete(remove))
        .route("/category", get(categories).post(create_category))
        .with_state(store)
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts a backend over a fresh store.
pub async fn start() -> (String, SharedStore) {
    let store = SharedStore::default();
    let url = serve(router(store.clone())).await;
    (url, store)
}
