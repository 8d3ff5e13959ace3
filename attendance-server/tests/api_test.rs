//! API 集成测试
//!
//! 通过 `build_app` + `oneshot` 驱动完整路由 (含中间件)，数据库为内存 SQLite。

use attendance_server::auth::JwtConfig;
use attendance_server::{Config, ServerState, build_app};
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const PASSWORD: &str = "club-secret";

async fn test_app() -> (Router, ServerState) {
    let mut config = Config::with_overrides("/tmp/attendance-test", 0);
    config.admin_password = PASSWORD.to_string();
    config.utc_offset_hours = 9;
    config.jwt = JwtConfig {
        secret: "integration-test-secret-key-0123456789".to_string(),
        issuer: "attendance-server".to_string(),
        audience: "attendance-clients".to_string(),
    };
    let state = ServerState::in_memory(config).await.unwrap();
    (build_app(state.clone()), state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

async fn register(app: &Router, name: &str, check_in_today: bool) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/members",
        None,
        Some(json!({ "name": name, "check_in_today": check_in_today })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register {name}: {body}");
    // created_at 精度为毫秒，保证注册顺序
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_reports_business_date() {
    let (app, state) = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["today"], state.today());
}

#[tokio::test]
async fn register_checks_in_today_and_check_out_removes() {
    let (app, state) = test_app().await;
    let kim = register(&app, "  Kim ", true).await;
    let lee = register(&app, "Lee", false).await;

    let (status, body) = send(&app, "GET", "/api/attendance/today", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], state.today());
    assert_eq!(body["count"], 1);
    assert_eq!(body["attendees"][0]["name"], "Kim");

    let (status, _) = send(&app, "POST", &format!("/api/attendance/today/{lee}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&app, "DELETE", &format!("/api/attendance/today/{kim}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attended"], false);

    let (_, body) = send(&app, "GET", "/api/attendance/today", None, None).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["attendees"][0]["id"], lee);
}

#[tokio::test]
async fn register_rejects_empty_and_duplicate_names() {
    let (app, _) = test_app().await;
    register(&app, "Park", false).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        None,
        Some(json!({ "name": "Park" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);

    let (status, body) = send(&app, "POST", "/api/members", None, Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3003);
}

#[tokio::test]
async fn check_in_unknown_member_is_not_found() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, "POST", "/api/attendance/today/42", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn member_search_and_paging() {
    let (app, _) = test_app().await;
    for i in 1..=12 {
        register(&app, &format!("member{i:02}"), false).await;
    }
    register(&app, "Kim", false).await;

    let (_, body) = send(&app, "GET", "/api/members?page=2", None, None).await;
    assert_eq!(body["total"], 13);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["members"].as_array().unwrap().len(), 3);
    assert_eq!(body["members"][2]["name"], "Kim");

    let (_, body) = send(&app, "GET", "/api/members?q=KIM&page=2", None, None).await;
    assert_eq!(body["members"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/members", None, None).await;
    assert_eq!(body["members"].as_array().unwrap().len(), 13);
}

#[tokio::test]
async fn admin_gate() {
    let (app, _) = test_app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);

    // 无令牌
    let (status, _) = send(&app, "GET", "/api/payments/unpaid", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 无效令牌
    let (status, _) = send(&app, "GET", "/api/payments/unpaid", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = send(&app, "GET", "/api/admin/session", Some("garbage"), None).await;
    assert_eq!(body["is_admin"], false);

    let token = login(&app).await;
    let (_, body) = send(&app, "GET", "/api/admin/session", Some(&token), None).await;
    assert_eq!(body["is_admin"], true);

    let (status, body) = send(&app, "GET", "/api/payments/unpaid", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn non_admin_role_is_forbidden() {
    use attendance_server::auth::Claims;
    use jsonwebtoken::{EncodingKey, Header, encode};

    let (app, state) = test_app().await;
    let claims = Claims {
        sub: "guest".to_string(),
        role: "guest".to_string(),
        iat: 0,
        iss: state.config.jwt.issuer.clone(),
        aud: state.config.jwt.audience.clone(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt.secret.as_bytes()),
    )
    .unwrap();

    let (status, body) = send(&app, "GET", "/api/reports/inactive", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2003);
}

#[tokio::test]
async fn toggle_paid_twice_restores_state() {
    let (app, _) = test_app().await;
    let token = login(&app).await;
    let kim = register(&app, "Kim", false).await;

    let uri = format!("/api/attendance/2024-01-01/members/{kim}");
    let (status, _) = send(&app, "PUT", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let toggle = format!("/api/payments/2024-01-01/members/{kim}/toggle");
    let (_, body) = send(&app, "POST", &toggle, Some(&token), None).await;
    assert_eq!(body["paid"], true);

    let (_, body) = send(&app, "GET", "/api/payments/2024-01-01", Some(&token), None).await;
    assert_eq!(body["paid_count"], 1);
    assert_eq!(body["total"], 1);

    let (_, body) = send(&app, "POST", &toggle, Some(&token), None).await;
    assert_eq!(body["paid"], false);

    let (_, body) = send(&app, "GET", "/api/payments/unpaid", Some(&token), None).await;
    assert_eq!(body[0]["member_id"], kim);
    assert_eq!(body[0]["unpaid_dates"], json!(["2024-01-01"]));
}

#[tokio::test]
async fn set_paid_on_missing_record_is_noop() {
    let (app, state) = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/payments/2024-02-02/members/1",
        Some(&token),
        Some(json!({ "paid": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paid"], false);
    assert!(state.ledger.record("2024-02-02").await.unwrap().is_none());

    let (_, body) = send(&app, "GET", "/api/payments/2024-02-02", Some(&token), None).await;
    assert_eq!(body["entries"], json!([]));
}

#[tokio::test]
async fn delete_member_strips_attendance() {
    let (app, state) = test_app().await;
    let token = login(&app).await;
    let kim = register(&app, "Kim", false).await;
    let lee = register(&app, "Lee", false).await;

    for date in ["2024-01-01", "2024-01-02"] {
        for id in [kim, lee] {
            let uri = format!("/api/attendance/{date}/members/{id}");
            send(&app, "PUT", &uri, Some(&token), None).await;
        }
        let uri = format!("/api/payments/{date}/members/{kim}");
        send(&app, "PUT", &uri, Some(&token), Some(json!({ "paid": true }))).await;
    }

    let (status, _) = send(&app, "DELETE", &format!("/api/members/{kim}"), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "DELETE", &format!("/api/members/{kim}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/members/{kim}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for record in state.ledger.all_records().await.unwrap() {
        assert!(!record.attended(kim));
        assert!(!record.is_paid(kim));
        assert!(record.attended(lee));
    }

    let (status, _) = send(&app, "DELETE", &format!("/api/members/{kim}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ranking_windows() {
    use attendance_server::utils::time::{business_today, format_date};
    use chrono::Days;

    let (app, state) = test_app().await;
    let token = login(&app).await;
    let kim = register(&app, "Kim", false).await;
    let lee = register(&app, "Lee", false).await;

    let today = business_today(state.utc_offset());
    let day = |n: u64| format_date(today.checked_sub_days(Days::new(n)).unwrap());

    // Kim: 40 天前 + 3 天前; Lee: 今天
    for (id, date) in [(kim, day(40)), (kim, day(3)), (lee, day(0))] {
        let uri = format!("/api/attendance/{date}/members/{id}");
        let (status, _) = send(&app, "PUT", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, "GET", "/api/ranking?window=all", None, None).await;
    assert_eq!(body["entries"][0]["name"], "Kim");
    assert_eq!(body["entries"][0]["count"], 2);
    assert_eq!(body["entries"][0]["rank"], 1);

    let (_, body) = send(&app, "GET", "/api/ranking?window=7days", None, None).await;
    assert_eq!(body["since"], day(7));
    let kim_entry = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["member_id"] == kim)
        .unwrap()
        .clone();
    assert_eq!(kim_entry["count"], 1);

    let (status, body) = send(&app, "GET", "/api/ranking?window=year", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let (_, body) = send(&app, "GET", "/api/ranking/top", None, None).await;
    assert_eq!(body[0]["member_id"], kim);
    assert_eq!(body[0]["slot"], 0);

    let (_, body) = send(&app, "GET", "/api/board", None, None).await;
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[0]["highlight"], 0);
    assert_eq!(entries[1]["attended"], true);
}

#[tokio::test]
async fn attendees_of_date_follow_check_in_order() {
    let (app, _) = test_app().await;
    let token = login(&app).await;
    let kim = register(&app, "Kim", false).await;
    let lee = register(&app, "Lee", false).await;
    let park = register(&app, "Park", false).await;

    for id in [park, kim] {
        let uri = format!("/api/attendance/2024-01-01/members/{id}");
        let (status, _) = send(&app, "PUT", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", "/api/attendance/2024-01-01", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let ids: Vec<i64> = body["attendees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![park, kim]);
    assert!(!ids.contains(&lee));
}

#[tokio::test]
async fn long_member_name_is_registered() {
    let (app, _) = test_app().await;
    let name = "가".repeat(150);
    let id = register(&app, &name, false).await;

    let (status, body) = send(&app, "GET", &format!("/api/members/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], name.as_str());
}

#[tokio::test]
async fn invalid_date_is_rejected() {
    let (app, _) = test_app().await;
    let (status, body) = send(&app, "GET", "/api/attendance/2024-13-01", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn inactive_report_filters() {
    let (app, _) = test_app().await;
    let token = login(&app).await;
    let kim = register(&app, "Kim", false).await;
    register(&app, "Lee", false).await;

    for date in ["2024-01-01", "2024-03-01"] {
        let uri = format!("/api/attendance/{date}/members/{kim}");
        send(&app, "PUT", &uri, Some(&token), None).await;
    }

    let (_, body) = send(&app, "GET", "/api/reports/inactive", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["last_attendance_date"], "2024-03-01");

    let (_, body) = send(
        &app,
        "GET",
        "/api/reports/inactive?cutoff=2024-02-01",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Lee");

    let (_, body) = send(
        &app,
        "GET",
        "/api/reports/inactive?max_attendance=2",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}
