use axum::{routing::get, Json, Router};
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use common::types::Health;

use crate::state::AppState;

pub mod business;
pub mod root;
pub mod users;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Credentialed CORS for the configured origins. Methods and headers are
/// mirrored from the preflight request since wildcards are not allowed
/// together with credentials.
pub fn build_cors(cfg: &configs::CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // `/business` and `/business/` both list
    let business_routes = Router::new()
        .route("/business", get(business::list_businesses))
        .route("/business/", get(business::list_businesses))
        .route("/business/:business_id", get(business::get_business));

    let public = Router::new()
        .route("/", get(root::read_root))
        .route("/health", get(health))
        .route("/items/:item_id", get(root::read_item))
        .route("/users", get(users::list_users));

    public
        .merge(business_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use models::{address, business, user};
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(db: DatabaseConnection) -> Router {
        build_router(AppState::new(db), build_cors(&configs::CorsConfig::default()))
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn stamp() -> sea_orm::prelude::DateTimeWithTimeZone {
        chrono::Utc::now().into()
    }

    fn business_row(name: &str, address_id: Option<Uuid>) -> business::Model {
        business::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: None,
            email: None,
            website: None,
            social_media: Some(json!({"instagram": "@vanityclub"})),
            address_id,
            description: None,
            logo: None,
            images: None,
            created_at: stamp(),
            updated_at: stamp(),
        }
    }

    #[tokio::test]
    async fn root_says_hello() {
        let (status, body) = get_json(app(empty_db()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"Hello": "World"}));
    }

    #[tokio::test]
    async fn health_ok() {
        let (status, body) = get_json(app(empty_db()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn items_echo_id_and_query() {
        let (status, body) = get_json(app(empty_db()), "/items/5?q=somequery").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"item_id": 5, "q": "somequery"}));

        let (_, body) = get_json(app(empty_db()), "/items/7").await;
        assert_eq!(body, json!({"item_id": 7, "q": null}));
    }

    #[tokio::test]
    async fn items_reject_non_integer_id() {
        let (status, _) = get_json(app(empty_db()), "/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn business_list_has_one_entry_per_row() {
        let rows = vec![business_row("Vanity Club", None), business_row("Brow Bar", None)];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();

        let (status, body) = get_json(app(db), "/business/").await;
        assert_eq!(status, StatusCode::OK);
        let listed = body.as_array().expect("array");
        assert_eq!(listed.len(), rows.len());
        assert_eq!(listed[0]["id"], json!(rows[0].id));
        assert_eq!(listed[0]["social_media"]["instagram"], "@vanityclub");
    }

    #[tokio::test]
    async fn business_list_without_trailing_slash() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<business::Model>::new()])
            .into_connection();
        let (status, body) = get_json(app(db), "/business").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn business_detail_embeds_address() {
        let addr = address::Model {
            id: Uuid::new_v4(),
            street_line_1: "123 Beauty Lane".into(),
            street_line_2: None,
            suburb: Some("Surry Hills".into()),
            city: Some("Sydney".into()),
            state: Some("NSW".into()),
            postcode: Some("2010".into()),
            country: Some("Australia".into()),
            latitude: None,
            longitude: None,
            created_at: stamp(),
            updated_at: stamp(),
        };
        let biz = business_row("Vanity Club", Some(addr.id));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[(biz.clone(), addr.clone())]])
            .into_connection();

        let (status, body) = get_json(app(db), &format!("/business/{}", biz.id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(biz.id));
        assert_eq!(body["address"]["suburb"], "Surry Hills");
    }

    #[tokio::test]
    async fn business_detail_absent_is_null() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<business::Model>::new()])
            .into_connection();

        let (status, body) = get_json(app(db), &format!("/business/{}", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn business_detail_malformed_id_rejected() {
        let (status, _) = get_json(app(empty_db()), "/business/not-a-uuid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn users_listed() {
        let u = user::Model {
            id: Uuid::new_v4(),
            first_name: "Nicole".into(),
            last_name: "Low".into(),
            date_of_birth: None,
            email: "nicole@example.com".into(),
            phone: None,
            avatar: Some("users/nicole_avatar.jpg".into()),
            address_id: None,
            created_at: stamp(),
            updated_at: stamp(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![u.clone()]])
            .into_connection();

        let (status, body) = get_json(app(db), "/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["email"], "nicole@example.com");
    }

    #[tokio::test]
    async fn database_failure_is_server_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let (status, body) = get_json(app(db), "/users").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap_or_default().contains("connection refused"));
    }

    #[tokio::test]
    async fn cors_preflight_allows_dev_origin_with_credentials() {
        let res = app(empty_db())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/business/")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let headers = res.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:5173");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn cors_ignores_unknown_origin() {
        let res = app(empty_db())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
