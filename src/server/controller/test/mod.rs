use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{
    config::Config,
    middleware::auth::MEMBER_ID_HEADER,
    router,
    startup::{setup_oauth_client, setup_reqwest_client},
    state::AppState,
    storage::ImageStorage,
};


/// Router wired like production, on an in-memory database and a temporary
/// upload directory.
struct TestApp {
    router: Router,
    db: sea_orm::DatabaseConnection,
    uploads: TempDir,
}

impl TestApp {
    /// Builds the app with the identity provider endpoints under `provider_url`.
    async fn new(provider_url: &str) -> Self {
        let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let store = test.session_store().await.unwrap();
        let db = test.db.take().unwrap();

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            google_client_id: "client-id".to_string(),
            google_client_secret: "client-secret".to_string(),
            google_redirect_url: "http://localhost:8080/auth/google/callback".to_string(),
            google_auth_url: format!("{}/auth", provider_url),
            google_token_url: format!("{}/token", provider_url),
            google_userinfo_url: format!("{}/userinfo", provider_url),
            upload_dir: String::new(),
            upload_url_prefix: "/uploads".to_string(),
        };

        let uploads = tempfile::tempdir().unwrap();
        let image_storage = ImageStorage::new(uploads.path(), &config.upload_url_prefix);

        let state = AppState::new(
            db.clone(),
            setup_reqwest_client().unwrap(),
            setup_oauth_client(&config).unwrap(),
            image_storage,
            config.google_userinfo_url.clone(),
        );

        let (api_routes, _) = router::router();
        let router = api_routes
            .with_state(state)
            .layer(SessionManagerLayer::new(store).with_secure(false));

        Self {
            router,
            db,
            uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Sends a request and decodes the JSON envelope.
    async fn call(
        &self,
        method: Method,
        uri: &str,
        member_id: Option<i32>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(member_id) = member_id {
            builder = builder.header(MEMBER_ID_HEADER, member_id.to_string());
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        read_json(self.send(request).await).await
    }
}

async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Asserts the body is a success envelope and returns its result.
fn success(body: &Value) -> &Value {
    assert_eq!(body["isSuccess"], json!(true), "{}", body);
    assert_eq!(body["code"], json!("COMMON200"));

    &body["result"]
}

/// Asserts the body is an error envelope with `code`.
fn failure(body: &Value, code: &str) {
    assert_eq!(body["isSuccess"], json!(false), "{}", body);
    assert_eq!(body["code"], json!(code));
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body.get("result").is_none());
}
