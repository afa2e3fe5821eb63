//! End-to-end store behavior over real HTTP against an in-process axum server
//! that answers the way the hospital API does (`{ data, pagenation }`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde_json::{Value, json};

use hospital_board::config::ApiTimeouts;
use hospital_board::resources::{NewsFields, news_store};
use hospital_board::{ApiConfig, HttpTransport, ListQuery, ResourceData, StoreError, Transport};

#[derive(Clone, Default)]
struct Backend {
    rows: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<u64>>,
}

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "rt": "NOT_FOUND", "rtmsg": "no such news" })))
}

async fn list(State(backend): State<Backend>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: u64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let rows: u64 = params.get("rows").and_then(|r| r.parse().ok()).unwrap_or(12);
    let query = params.get("query").cloned().unwrap_or_default();

    let all = backend.rows.lock().unwrap().clone();
    let matched: Vec<Value> = all
        .into_iter()
        .filter(|row| row["newsTitle"].as_str().unwrap_or_default().contains(&query))
        .collect();
    let offset = (page - 1) * rows;
    let window: Vec<Value> = matched
        .iter()
        .skip(usize::try_from(offset).unwrap())
        .take(usize::try_from(rows).unwrap())
        .cloned()
        .collect();

    Json(json!({
        "rt": "OK",
        "pagenation": { "totalCount": matched.len(), "offset": offset, "rows": rows },
        "data": window,
    }))
}

async fn read(State(backend): State<Backend>, Path(id): Path<u64>) -> Reply {
    let rows = backend.rows.lock().unwrap();
    let row = rows.iter().find(|row| row["id"] == json!(id)).cloned().ok_or_else(not_found)?;
    Ok(Json(json!({ "data": row })))
}

async fn create(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    let id = {
        let mut next = backend.next_id.lock().unwrap();
        *next += 1;
        *next
    };
    let row = json!({ "id": id, "newsTitle": body["newsTitle"], "newsLink": body["newsLink"] });
    backend.rows.lock().unwrap().push(row.clone());
    Json(json!({ "data": row }))
}

async fn update(State(backend): State<Backend>, Path(id): Path<u64>, Json(body): Json<Value>) -> Reply {
    let mut rows = backend.rows.lock().unwrap();
    let row = rows.iter_mut().find(|row| row["id"] == json!(id)).ok_or_else(not_found)?;
    *row = json!({ "id": id, "newsTitle": body["newsTitle"], "newsLink": body["newsLink"], "editDate": "2023-01-06" });
    Ok(Json(json!({ "data": row.clone() })))
}

async fn remove(State(backend): State<Backend>, Path(id): Path<u64>) -> Reply {
    let mut rows = backend.rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|row| row["id"] != json!(id));
    if rows.len() == before {
        return Err(not_found());
    }
    Ok(Json(json!({ "rt": "OK" })))
}

async fn spawn_backend(seed: &[(&str, &str)]) -> String {
    let backend = Backend::default();
    for (title, link) in seed {
        create(State(backend.clone()), Json(json!({ "newsTitle": title, "newsLink": link }))).await;
    }

    let app = Router::new()
        .route("/news", get(list).post(create))
        .route("/news/{id}", get(read).put(update).delete(remove))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn transport_for(base_url: &str) -> Arc<dyn Transport> {
    Arc::new(HttpTransport::new(base_url, ApiTimeouts { request_secs: 5, connect_secs: 2 }).unwrap())
}

fn fields(title: &str) -> NewsFields {
    NewsFields { news_title: title.to_owned(), news_link: format!("https://news.example/{title}") }
}

#[tokio::test]
async fn listing_reads_data_and_paging() {
    let base = spawn_backend(&[("flu shots", "a"), ("new wing", "b"), ("flu clinic", "c")]).await;
    let store = news_store(&ApiConfig::default(), transport_for(&base));

    let state = store
        .fetch_list(&ListQuery::new(Some("flu".into()), 1, 12))
        .await;

    assert!(state.error.is_none());
    let titles: Vec<&str> = state
        .data
        .records()
        .iter()
        .map(|n| n.news_title.as_str())
        .collect();
    assert_eq!(titles, vec!["flu shots", "flu clinic"]);
    let paging = state.paging.unwrap();
    assert_eq!(paging.total_count, 2);
    assert_eq!(paging.offset, 0);
    assert_eq!(paging.rows, 12);
}

#[tokio::test]
async fn second_page_window() {
    let base = spawn_backend(&[("a", "1"), ("b", "2"), ("c", "3")]).await;
    let store = news_store(&ApiConfig::default(), transport_for(&base));

    let state = store.fetch_list(&ListQuery::new(None, 2, 2)).await;

    assert_eq!(state.data.len(), 1);
    let paging = state.paging.unwrap();
    assert_eq!(paging.page(), 2);
    assert!(!paging.has_next());
}

#[tokio::test]
async fn crud_cycle_keeps_local_copy_in_sync() {
    let base = spawn_backend(&[("first", "1"), ("second", "2")]).await;
    let store = news_store(&ApiConfig::default(), transport_for(&base));
    store.fetch_list(&ListQuery::default()).await;

    let created = store.create_item(&fields("third")).await;
    assert_eq!(created.data.len(), 3);
    assert_eq!(created.data.records()[2].news_title, "third");

    let updated = store.update_item(&2, &fields("second, revised")).await;
    let titles: Vec<&str> = updated
        .data
        .records()
        .iter()
        .map(|n| n.news_title.as_str())
        .collect();
    assert_eq!(titles, vec!["first", "second, revised", "third"]);
    assert_eq!(updated.data.records()[1].edit_date.as_deref(), Some("2023-01-06"));

    let deleted = store.delete_item(&1).await;
    let ids: Vec<u64> = deleted.data.records().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert!(deleted.error.is_none());
    assert!(!deleted.loading);
}

#[tokio::test]
async fn fetch_one_then_missing_record() {
    let base = spawn_backend(&[("only", "1")]).await;
    let store = news_store(&ApiConfig::default(), transport_for(&base));

    let found = store.fetch_one(&1).await;
    assert!(matches!(&found.data, ResourceData::Single(n) if n.news_title == "only"));

    let missing = store.fetch_one(&42).await;
    assert_eq!(
        missing.error,
        Some(StoreError::Status { status: 404, body: json!({ "rt": "NOT_FOUND", "rtmsg": "no such news" }) })
    );
    assert!(matches!(&missing.data, ResourceData::Single(n) if n.id == 1));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = news_store(&ApiConfig::default(), transport_for(&format!("http://{addr}")));
    let state = store.fetch_list(&ListQuery::default()).await;

    assert!(matches!(state.error, Some(StoreError::Transport(_))));
    assert_eq!(state.data, ResourceData::Empty);
    assert!(!state.loading);
}
