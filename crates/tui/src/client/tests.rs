use api_types::{Amount, Id, ledger::TransactionPayload};
use axum::{Json, Router, extract::Path, http::header, routing::get};
use serde_json::{Value, json};

use super::{Client, ClientError};
use crate::fake_backend;

fn payload(name: &str, money: f64, debit: bool, category_ids: Vec<Id>) -> TransactionPayload {
    TransactionPayload {
        name: name.to_string(),
        money,
        debit,
        category_ids,
    }
}

#[tokio::test]
async fn create_then_list_and_detail() {
    let (url, store) = fake_backend::start().await;
    let food = store.lock().unwrap().insert_category("Food");
    let client = Client::new(&url).unwrap();

    let created = client
        .ledger_create(&payload("Lunch", 8.5, true, vec![Id::Int(food)]))
        .await
        .unwrap();

    let list = client.ledger_list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, Some(created.id.clone()));
    assert_eq!(list[0].money, Some(Amount::Number(8.5)));
    assert_eq!(list[0].categories[0].title, "Food");

    let detail = client.ledger_get(&created.id).await.unwrap();
    assert_eq!(detail.name, "Lunch");
    assert!(detail.debit);

    let jar = client.ledger_total().await.unwrap();
    assert_eq!(jar, list);
}

#[tokio::test]
async fn delete_twice_reports_not_found_second_time() {
    let (url, store) = fake_backend::start().await;
    let id = store
        .lock()
        .unwrap()
        .insert_transaction(payload("Gift", 25.0, false, Vec::new()));
    let client = Client::new(&url).unwrap();

    client.ledger_delete(&Id::Int(id)).await.unwrap();
    assert!(client.ledger_list().await.unwrap().is_empty());

    let second = client.ledger_delete(&Id::Int(id)).await;
    assert!(matches!(second, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn update_replaces_stored_fields() {
    let (url, store) = fake_backend::start().await;
    let id = store
        .lock()
        .unwrap()
        .insert_transaction(payload("Bus", 2.0, true, Vec::new()));
    let client = Client::new(&url).unwrap();

    client
        .ledger_update(&Id::Int(id), &payload("Train", 12.0, true, Vec::new()))
        .await
        .unwrap();
    assert_eq!(store.lock().unwrap().transactions[0].payload.name, "Train");

    let missing = client
        .ledger_update(&Id::Int(999), &payload("Nope", 1.0, true, Vec::new()))
        .await;
    assert!(matches!(missing, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn category_create_returns_new_id() {
    let (url, store) = fake_backend::start().await;
    let client = Client::new(&url).unwrap();

    let created = client.category_create("Holidays").await.unwrap();
    let categories = client.category_list().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, created.id);
    assert_eq!(store.lock().unwrap().categories[0].title, "Holidays");

    let rejected = client.category_create("  ").await;
    assert!(matches!(rejected, Err(ClientError::Validation(msg)) if msg == "title is required"));
}

#[tokio::test]
async fn non_json_content_type_is_an_error() {
    let router = Router::new()
        .route("/ledger", get(|| async { "[]" }))
        .route(
            "/category",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], "not json") }),
        );
    let url = fake_backend::serve(router).await;
    let client = Client::new(&url).unwrap();

    let err = client.ledger_list().await.unwrap_err();
    assert!(matches!(err, ClientError::ContentType(Some(ref ct)) if ct.starts_with("text/plain")));

    let err = client.category_list().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(&format!("http://{addr}")).unwrap();
    let err = client.ledger_list().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[test]
fn base_url_keeps_its_path_prefix() {
    let client = Client::new("http://example.test/api").unwrap();
    assert_eq!(
        client.endpoint("ledger/3").unwrap().as_str(),
        "http://example.test/api/ledger/3"
    );
    assert!(Client::new("not a url").is_err());
}

#[test]
fn text_ids_are_escaped_as_one_segment() {
    let client = Client::new("http://example.test/api/").unwrap();
    assert_eq!(
        client.ledger_item(&Id::Text("a/b".to_string())).unwrap().as_str(),
        "http://example.test/api/ledger/a%2Fb"
    );
    assert_eq!(
        client.ledger_item(&Id::Int(7)).unwrap().as_str(),
        "http://example.test/api/ledger/7"
    );
}

#[tokio::test]
async fn text_ids_reach_the_item_route() {
    async fn echo(Path(id): Path<String>) -> Json<Value> {
        Json(json!({ "id": id, "name": id, "money": 1, "debit": false }))
    }
    let router = Router::new()
        .route("/ledger/{id}", get(echo))
        .route("/category", get(|| async { Json(json!([])) }));
    let url = fake_backend::serve(router).await;
    let client = Client::new(&url).unwrap();

    let detail = client
        .ledger_get(&Id::Text("../category".to_string()))
        .await
        .unwrap();
    assert_eq!(detail.name, "../category");
}
