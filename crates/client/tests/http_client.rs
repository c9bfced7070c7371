use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use stockdesk_client::{ClientError, HttpResource, ResourceApi};
use stockdesk_core::{ListFilter, Resource};
use stockdesk_inventory::{
    Item, ItemCategory, ItemFilter, ItemId, ItemLifecycle, Transaction, TransactionId,
};

/// json-server lookalike: collections of JSON objects keyed by path.
#[derive(Clone, Default)]
struct Db {
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    next_id: Arc<Mutex<u64>>,
}

async fn list(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    db.queries.lock().unwrap().push(params.clone());
    let collections = db.collections.lock().unwrap();
    let rows = collections
        .get(&collection)
        .into_iter()
        .flatten()
        .filter(|row| {
            params.iter().all(|(k, v)| match &row[k.as_str()] {
                Value::String(s) => s == v,
                Value::Number(n) => n.to_string() == *v,
                _ => false,
            })
        })
        .cloned()
        .collect();
    Json(rows)
}

async fn create(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = {
        let mut next = db.next_id.lock().unwrap();
        *next += 1;
        *next
    };
    body["id"] = json!(id);
    db.collections
        .lock()
        .unwrap()
        .entry(collection)
        .or_default()
        .push(body.clone());
    (StatusCode::CREATED, Json(body))
}

fn find<'a>(rows: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
    rows.iter_mut().find(|row| match &row["id"] {
        Value::Number(n) => n.to_string() == id,
        Value::String(s) => s == id,
        _ => false,
    })
}

async fn replace(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut collections = db.collections.lock().unwrap();
    let rows = collections.entry(collection).or_default();
    let row = find(rows, &id).ok_or(StatusCode::NOT_FOUND)?;
    *row = body.clone();
    Ok(Json(body))
}

async fn patch(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut collections = db.collections.lock().unwrap();
    let rows = collections.entry(collection).or_default();
    let row = find(rows, &id).ok_or(StatusCode::NOT_FOUND)?;
    if let (Some(fields), Some(changes)) = (row.as_object_mut(), body.as_object()) {
        for (k, v) in changes {
            fields.insert(k.clone(), v.clone());
        }
    }
    Ok(Json(row.clone()))
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn json_server(db: Db) -> Self {
        let app = Router::new()
            .route("/:collection", get(list).post(create))
            .route("/:collection/:id", put(replace).patch(patch))
            .with_state(db);
        Self::spawn(app).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn items(srv: &TestServer) -> HttpResource<Item> {
    HttpResource::new(reqwest::Client::new(), srv.base_url.clone())
}

#[tokio::test]
async fn create_then_list_with_filter_parameters() {
    let db = Db::default();
    let srv = TestServer::json_server(db.clone()).await;
    let api = items(&srv);

    let mut drill = Item::named("Drill");
    drill.id = Some(ItemId::from(999));
    let created = api.create(&drill).await.unwrap();
    assert_eq!(created.id, Some(ItemId::from(1)));

    let mut glue = Item::named("Glue");
    glue.category = ItemCategory::Consumables;
    api.create(&glue).await.unwrap();

    let filter = ItemFilter {
        category: Some(ItemCategory::Consumables),
        ..Default::default()
    };
    let rows = api.list(&filter.to_query()).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Glue");

    let queries = db.queries.lock().unwrap();
    let last = queries.last().unwrap();
    assert_eq!(last.get("category").map(String::as_str), Some("CONSUMABLES"));
    assert_eq!(last.len(), 1, "unset filter fields must not be sent");
}

#[tokio::test]
async fn soft_delete_patches_lifecycle_only() {
    let db = Db::default();
    let srv = TestServer::json_server(db.clone()).await;
    let api = items(&srv);

    let created = api.create(&Item::named("Drill")).await.unwrap();
    let id = created.id.clone().unwrap();
    api.soft_delete(&id).await.unwrap();

    let all = api.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].item_status, ItemLifecycle::Inactive);
    assert_eq!(all[0].name, "Drill");
    assert!(all.iter().all(|i| !i.is_active()));

    let stored = db.collections.lock().unwrap()["items"][0].clone();
    assert_eq!(stored["item_status"], "Inactive");
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let srv = TestServer::json_server(Db::default()).await;
    let api = items(&srv);

    let mut ghost = Item::named("Ghost");
    ghost.id = Some(ItemId::from(41));
    let err = api.update(&ghost).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::NotFound {
            resource: "item",
            id: "41".to_string()
        }
    );

    let err = api.update(&Item::named("Draft")).await.unwrap_err();
    assert_eq!(err, ClientError::MissingId("item"));
}

#[tokio::test]
async fn update_replaces_the_record() {
    let srv = TestServer::json_server(Db::default()).await;
    let api = items(&srv);

    let mut created = api.create(&Item::named("Drill")).await.unwrap();
    created.location = Some("Shelf B".to_string());
    let updated = api.update(&created).await.unwrap();
    assert_eq!(updated, created);

    let rows = api.list_all().await.unwrap();
    assert_eq!(rows[0].location.as_deref(), Some("Shelf B"));
}

#[tokio::test]
async fn server_errors_are_surfaced_unmodified() {
    let app = Router::new().route(
        "/items",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db offline") }),
    );
    let srv = TestServer::spawn(app).await;

    let err = items(&srv).list_all().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Api {
            resource: "item",
            status: 500,
            body: "db offline".to_string()
        }
    );
}

#[tokio::test]
async fn undecodable_bodies_are_parse_errors() {
    let app = Router::new().route("/items", get(|| async { "not json" }));
    let srv = TestServer::spawn(app).await;

    let err = items(&srv).list_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn one_malformed_row_does_not_hide_the_rest() {
    let db = Db::default();
    db.collections.lock().unwrap().insert(
        "transactions".to_string(),
        vec![
            json!({"id": 1, "transaction_id": 1, "inventory_id": 2, "quantity": 3, "price": 50}),
            json!({"id": 2, "quantity": "three"}),
            json!({"id": 3, "inventory_id": 2, "quantity": 1, "transaction_date": "2024-10-05"}),
        ],
    );
    let srv = TestServer::json_server(db).await;
    let api: HttpResource<Transaction> = HttpResource::new(reqwest::Client::new(), srv.base_url.clone());

    let rows = api.list_all().await.unwrap();

    let ids: Vec<_> = rows.iter().filter_map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec![TransactionId::from(1), TransactionId::from(3)]);
    assert_eq!(rows[1].transaction_date.as_deref(), Some("2024-10-05"));
    assert!(rows[1].date().is_some());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api: HttpResource<Item> = HttpResource::new(reqwest::Client::new(), format!("http://{addr}"));
    let err = api.list_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}
