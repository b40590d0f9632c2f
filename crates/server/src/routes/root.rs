use axum::{extract::{Path, Query}, Json};
use serde::{Deserialize, Serialize};

use common::types::Greeting;

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemEcho {
    pub item_id: i64,
    pub q: Option<String>,
}

/// `GET /`
pub async fn read_root() -> Json<Greeting> {
    Json(Greeting::default())
}

/// `GET /items/:item_id?q=` echoes its inputs back.
pub async fn read_item(Path(item_id): Path<i64>, Query(query): Query<ItemQuery>) -> Json<ItemEcho> {
    Json(ItemEcho { item_id, q: query.q })
}
