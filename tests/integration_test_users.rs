mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_register_login_and_default_categories() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/usuarios", json!({ "nombre_usuario": "ana", "contrasena": "pw1" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nombre_usuario"], "ana");
    assert!(body["fecha_registro"].is_string());
    assert!(body.get("contrasena").is_none());
    assert!(body.get("password_hash").is_none());
    let user_id = body["id"].as_i64().unwrap();

    let (status, body) = app.post("/login", json!({ "nombre_usuario": "ana", "contrasena": "pw1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": user_id, "nombre_usuario": "ana" }));

    let (status, body) = app.get(&format!("/categorias/usuario/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|c| c["nombre"].as_str().unwrap()).collect();
    assert_eq!(names.len(), 11);
    for expected in ["Comida", "Transporte", "Ahorro", "Educación"] {
        assert!(names.contains(&expected), "missing default category {}", expected);
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register_user("ana", "pw1").await;

    let (status, wrong_pw) = app.post("/login", json!({ "nombre_usuario": "ana", "contrasena": "nope" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown) = app.post("/login", json!({ "nombre_usuario": "nobody", "contrasena": "pw1" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(wrong_pw, unknown);
    assert!(wrong_pw["error"].is_string());
}

#[tokio::test]
async fn test_registration_validation_and_duplicates() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/usuarios", json!({ "nombre_usuario": "ana" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("contrasena"));

    let (status, _) = app.post("/usuarios", json!({ "nombre_usuario": "   ", "contrasena": "pw" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post("/login", json!({ "nombre_usuario": "ana" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    app.register_user("ana", "pw1").await;
    let (status, body) = app.post("/usuarios", json!({ "nombre_usuario": "ana", "contrasena": "other" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_list_users_hides_passwords() {
    let app = TestApp::new().await;
    let ana = app.register_user("ana", "pw1").await;
    let luis = app.register_user("luis", "pw2").await;

    let (status, body) = app.get("/usuarios").await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], ana);
    assert_eq!(users[1]["id"], luis);
    for user in users {
        assert!(user.get("contrasena").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_malformed_json_gets_error_body() {
    let app = TestApp::new().await;

    let (status, body) = app.send(
        axum::http::Method::POST,
        "/usuarios",
        Some(serde_json::Value::String("not an object".into())),
    ).await;
    assert!(status.is_client_error());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let (status, _) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_registration_keeps_first_account() {
    let app = TestApp::new().await;

    let (status, _) = app.post("/usuarios", json!({ "nombre_usuario": "ana", "contrasena": "pw1" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.post("/usuarios", json!({ "nombre_usuario": "ana", "contrasena": "pw2" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.post("/login", json!({ "nombre_usuario": "ana", "contrasena": "pw1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_usuario"], "ana");

    let (status, _) = app.post("/login", json!({ "nombre_usuario": "ana", "contrasena": "pw2" })).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, users) = app.get("/usuarios").await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_user_removes_owned_records() {
    let app = TestApp::new().await;
    let ana = app.register_user("ana", "pw1").await;
    let luis = app.register_user("luis", "pw2").await;

    let (status, _) = app.post("/categorias", json!({ "nombre": "Mascotas", "usuario_id": ana })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.post("/gastos", json!({ "descripcion": "Café", "monto": 3.5, "usuario_id": ana })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.post("/ingresos", json!({ "usuario_id": ana, "descripcion": "Salario", "monto": 1200 })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.post("/objetivos", json!({ "usuario_id": ana, "nombre": "Viaje", "monto_meta": 1000 })).await;
    assert_eq!(status, StatusCode::CREATED);

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(ana)
        .execute(&app.pool)
        .await
        .unwrap();

    for table in ["categories", "expenses", "incomes", "goals"] {
        let remaining: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {} WHERE user_id = ?", table))
            .bind(ana)
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0, "{} rows left for deleted user", table);
    }

    // Other users keep their defaults.
    let (_, list) = app.get(&format!("/categorias/usuario/{}", luis)).await;
    assert_eq!(list.as_array().unwrap().len(), 11);
}
