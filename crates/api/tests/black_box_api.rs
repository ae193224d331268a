use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

use milldesk_api::app::{build_app, AppState};
use milldesk_store::{schema, Db};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Fresh database per server; same router as prod, ephemeral port.
        let data_dir = std::env::temp_dir().join(format!("milldesk-test-{}", Uuid::now_v7()));
        let db = Db::open(&data_dir).await.expect("failed to open test db");
        schema::init(db.pool()).await.expect("failed to init schema");

        let state = Arc::new(AppState::new(&db));
        let app = build_app(state);

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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client with a cookie jar and redirects disabled, so Set-Cookie and
/// Location can be asserted directly.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

async fn login(client: &reqwest::Client, srv: &TestServer, username: &str, password: &str) {
    let res = client
        .post(srv.url("/login"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard");
}

fn location(res: &reqwest::Response) -> &str {
    res.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn unauthenticated_requests_are_redirected_to_login() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    for path in ["/dashboard", "/reports", "/api/save_production"] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(location(&res), "/login?notice=login_required", "path {path}");
    }
}

#[tokio::test]
async fn default_admin_logs_in_and_reaches_the_dashboard() {
    let srv = TestServer::spawn().await;
    let client = client();

    login(&client, &srv, "Admin", "Admin").await;

    let res = client.get(srv.url("/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["view"], "dashboard");
    assert_eq!(body["username"], "Admin");
    assert_eq!(body["production_totals"]["total_items"], 0);

    // Root now points at the dashboard.
    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(location(&res), "/dashboard");
}

#[tokio::test]
async fn bad_credentials_bounce_back_to_login() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .post(srv.url("/login"))
        .form(&[("username", "Admin"), ("password", "wrong")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login?notice=invalid_credentials");

    let res = client.get(srv.url("/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let srv = TestServer::spawn().await;
    let client = client();

    login(&client, &srv, "Admin", "Admin").await;

    let res = client.get(srv.url("/logout")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login?notice=logged_out");

    let res = client.get(srv.url("/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login?notice=login_required");
}

#[tokio::test]
async fn anonymous_logout_still_clears_and_redirects() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client.get(srv.url("/logout")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login?notice=logged_out");
}

#[tokio::test]
async fn malformed_save_bodies_are_structured_failures() {
    let srv = TestServer::spawn().await;
    let client = client();
    login(&client, &srv, "Admin", "Admin").await;

    // Required field missing.
    let res = client
        .post(srv.url("/api/save_production"))
        .json(&json!({"date": "2024-01-05", "shift": "Day", "operator_id": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Error:"));

    // Field of the wrong type.
    let res = client
        .post(srv.url("/api/save_sale"))
        .json(&json!({"order_no": "JOB001", "date": "2024-02-01", "party_id": "one"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);

    // Not JSON at all.
    let res = client
        .post(srv.url("/api/save_sale"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);

    // Nothing was stored by any of the failed saves.
    let reports: serde_json::Value = client
        .get(srv.url("/reports"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(reports["productions"].as_array().unwrap().is_empty());
    assert!(reports["sales"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn master_lifecycle_add_duplicate_delete() {
    let srv = TestServer::spawn().await;
    let client = client();
    login(&client, &srv, "Admin", "Admin").await;

    let add = json!({"table": "operators", "data": {"name": "Ravi", "mobile": "12345"}});
    let res: serde_json::Value = client
        .post(srv.url("/api/add_master"))
        .json(&add)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);
    assert_eq!(res["message"], "Operator added successfully");

    // Second add of the same name fails without changing the catalog.
    let res: serde_json::Value = client
        .post(srv.url("/api/add_master"))
        .json(&add)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], false);
    assert_eq!(res["message"], "Operator name must be unique");

    let body: serde_json::Value = client
        .get(srv.url("/masters"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["operators"].as_array().unwrap().len(), 1);
    let id = body["operators"][0]["id"].as_i64().unwrap();

    let res: serde_json::Value = client
        .post(srv.url("/api/delete_master"))
        .json(&json!({"table": "operators", "id": id}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);

    // Unknown catalogs are a structured failure, not a server error.
    let res: serde_json::Value = client
        .post(srv.url("/api/add_master"))
        .json(&json!({"table": "vendors", "data": {"name": "X"}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], false);
}

#[tokio::test]
async fn standard_user_is_limited_to_the_allow_list() {
    let srv = TestServer::spawn().await;

    let admin = client();
    login(&admin, &srv, "Admin", "Admin").await;

    let res: serde_json::Value = admin
        .post(srv.url("/api/add_user"))
        .json(&json!({"username": "clerk", "password": "pw", "role": "user"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);

    let clerk = client();
    login(&clerk, &srv, "clerk", "pw").await;

    // Allowed: dashboard, entries, production save.
    let res = clerk.get(srv.url("/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let entries: serde_json::Value = clerk
        .get(srv.url("/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries["user_role"], "user");
    assert_eq!(entries["next_prod"], "DP001");

    let res: serde_json::Value = clerk
        .post(srv.url("/api/save_production"))
        .json(&json!({
            "number": "DP001",
            "date": "2024-01-05",
            "shift": "Day",
            "operator_id": 1,
            "items": [{"length": 10, "weight": 2}],
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);

    // Denied: reports view and user administration redirect to the dashboard.
    let res = clerk.get(srv.url("/reports")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard?notice=access_denied");

    let res = clerk
        .post(srv.url("/api/delete_user"))
        .json(&json!({"id": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard?notice=access_denied");

    // The same operation succeeds for the admin session.
    let res: serde_json::Value = admin
        .post(srv.url("/api/delete_user"))
        .json(&json!({"id": 2}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);
}

#[tokio::test]
async fn duplicate_username_is_a_structured_failure() {
    let srv = TestServer::spawn().await;
    let client = client();
    login(&client, &srv, "Admin", "Admin").await;

    let add = json!({"username": "clerk", "password": "pw"});
    let res: serde_json::Value = client
        .post(srv.url("/api/add_user"))
        .json(&add)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);

    let res: serde_json::Value = client
        .post(srv.url("/api/add_user"))
        .json(&add)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], false);
    assert_eq!(res["message"], "Username already exists");
}

#[tokio::test]
async fn sale_end_to_end_through_reports() {
    let srv = TestServer::spawn().await;
    let client = client();
    login(&client, &srv, "Admin", "Admin").await;

    let res: serde_json::Value = client
        .post(srv.url("/api/add_master"))
        .json(&json!({"table": "parties", "data": {"name": "Acme Jobbers"}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);

    let entries: serde_json::Value = client
        .get(srv.url("/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries["next_sale"], "JOB001");
    let party_id = entries["parties"][0]["id"].as_i64().unwrap();

    let res: serde_json::Value = client
        .post(srv.url("/api/save_sale"))
        .json(&json!({
            "order_no": "JOB001",
            "date": "2024-02-01",
            "party_id": party_id,
            "items": [{"amount": "150.50"}],
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(res["success"], true);
    assert_eq!(res["id"], 1);

    let reports: serde_json::Value = client
        .get(srv.url("/reports"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let sales = reports["sales"].as_array().unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0]["order_no"], "JOB001");
    assert_eq!(sales[0]["party_name"], "Acme Jobbers");
    assert_eq!(reports["sales_totals"]["total_amount"], 150.5);
    assert_eq!(reports["sales_totals"]["total_items"], 1);
    assert_eq!(reports["sales_totals"]["total_orders"], 1);

    // The advisory sequence moved on.
    let entries: serde_json::Value = client
        .get(srv.url("/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(entries["next_sale"], "JOB002");
}
