//! HTTP tests for the employee routes
//!
//! Requests go straight into the router with `oneshot`; each test owns a
//! temporary SQLite database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use interface_api::create_router;
use interface_api::dto::employee::{
    AggregateResponse, AggregateResult, EmployeeResponse, IncrementResponse, UpdatedCounts,
};
use serde_json::{json, Value};
use test_utils::{EmployeeFixtures, TestDatabase};
use tower::ServiceExt;

fn app(db: &TestDatabase) -> Router {
    create_router(db.pool().clone())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>, Option<String>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec(), location)
}

mod crud_routes {
    use super::*;

    #[tokio::test]
    async fn test_list_empty() {
        let db = TestDatabase::new().await.unwrap();

        let (status, body, _) = send(app(&db), Method::GET, "/api/employees", None).await;

        assert_eq!(status, StatusCode::OK);
        let employees: Vec<EmployeeResponse> = serde_json::from_slice(&body).unwrap();
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = TestDatabase::new().await.unwrap();

        let (status, body, location) = send(
            app(&db),
            Method::POST,
            "/api/employees",
            Some(json!({"name": "Alice", "value": 5000})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: EmployeeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.name, "Alice");
        assert_eq!(created.value, 5000);
        assert_eq!(location, Some(format!("/api/employees/{}", created.id)));

        let uri = format!("/api/employees/{}", created.id);
        let (status, body, _) = send(app(&db), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: EmployeeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let db = TestDatabase::new().await.unwrap();

        let (status, body, _) = send(
            app(&db),
            Method::POST,
            "/api/employees",
            Some(json!({"id": 999, "name": "Bob", "value": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: EmployeeResponse = serde_json::from_slice(&body).unwrap();
        assert_ne!(created.id, 999);
    }

    #[tokio::test]
    async fn test_create_blank_name_is_bad_request() {
        let db = TestDatabase::new().await.unwrap();

        for payload in [json!({"name": "   ", "value": 1}), json!({"value": 1})] {
            let (status, body, _) = send(app(&db), Method::POST, "/api/employees", Some(payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            let error: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(error["error"], "bad_request");
            assert_eq!(error["message"], "Employee name cannot be empty");
        }
        assert!(db.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_null_fields_is_validation_error() {
        let db = TestDatabase::new().await.unwrap();

        for payload in [json!({"name": null, "value": 1}), json!({"name": null, "value": null})] {
            let (status, body, _) = send(app(&db), Method::POST, "/api/employees", Some(payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            let error: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(error["message"], "Employee name cannot be empty");
        }
        assert!(db.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_null_value_defaults_to_zero() {
        let db = TestDatabase::new().await.unwrap();

        let (status, body, _) = send(
            app(&db),
            Method::POST,
            "/api/employees",
            Some(json!({"name": "Al", "value": null})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let created: EmployeeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.value, 0);
    }

    #[tokio::test]
    async fn test_malformed_body_keeps_error_shape() {
        let db = TestDatabase::new().await.unwrap();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/employees")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": 5"))
            .unwrap();
        let response = app(&db).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "bad_request");
        assert!(error["message"].is_string());
    }

    #[tokio::test]
    async fn test_update_null_name_is_validation_error() {
        let db = TestDatabase::new().await.unwrap();
        let ids = db.seed(&[("Alice", 1)]).await.unwrap();
        let uri = format!("/api/employees/{}", ids[0]);

        let (status, _, _) = send(app(&db), Method::PUT, &uri, Some(json!({"name": null, "value": 2}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(db.snapshot().await.unwrap()[&ids[0]], ("Alice".to_string(), 1));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let db = TestDatabase::new().await.unwrap();

        let (status, body, _) = send(app(&db), Method::GET, "/api/employees/41", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["message"], "Employee with ID 41 not found");
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let db = TestDatabase::new().await.unwrap();
        let ids = db.seed(&[("Alice", 1)]).await.unwrap();
        let uri = format!("/api/employees/{}", ids[0]);

        let (status, body, _) = send(
            app(&db),
            Method::PUT,
            &uri,
            Some(json!({"id": 12345, "name": "Alicia", "value": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let updated: EmployeeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            updated,
            EmployeeResponse { id: ids[0], name: "Alicia".to_string(), value: 2 }
        );
    }

    #[tokio::test]
    async fn test_update_missing_and_blank() {
        let db = TestDatabase::new().await.unwrap();

        let (status, _, _) = send(
            app(&db),
            Method::PUT,
            "/api/employees/5",
            Some(json!({"name": "Ghost", "value": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = send(
            app(&db),
            Method::PUT,
            "/api/employees/5",
            Some(json!({"name": "", "value": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let db = TestDatabase::new().await.unwrap();
        let ids = db.seed(&[("Alice", 1)]).await.unwrap();
        let uri = format!("/api/employees/{}", ids[0]);

        let (status, body, _) = send(app(&db), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, _, _) = send(app(&db), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let db = TestDatabase::new().await.unwrap();
        let router = app(&db);
        db.pool().close().await;

        let (status, body, _) = send(router, Method::GET, "/api/employees", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"], "database_error");
    }
}

mod batch_routes {
    use super::*;

    #[tokio::test]
    async fn test_increment_values_reports_counts() {
        let db = TestDatabase::new().await.unwrap();
        db.seed(&EmployeeFixtures::mixed_roster()).await.unwrap();

        let (status, body, _) =
            send(app(&db), Method::POST, "/api/employees/increment-values", None).await;

        assert_eq!(status, StatusCode::OK);
        let response: IncrementResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.message, "Values incremented successfully");
        assert_eq!(
            response.updated_counts,
            UpdatedCounts {
                names_starting_with_e: 2,
                names_starting_with_g: 2,
                others: 5,
                total: 9,
            }
        );
    }

    #[tokio::test]
    async fn test_aggregate_abc_values() {
        let db = TestDatabase::new().await.unwrap();
        db.seed(&EmployeeFixtures::aggregate_example()).await.unwrap();

        let (status, body, _) =
            send(app(&db), Method::GET, "/api/employees/aggregate-abc-values", None).await;

        assert_eq!(status, StatusCode::OK);
        let raw: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            raw["results"],
            json!([{"firstLetter": "A", "totalValue": 12000, "employeeCount": 2}])
        );

        let response: AggregateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            response.results,
            vec![AggregateResult {
                first_letter: "A".to_string(),
                total_value: 12000,
                employee_count: 2,
            }]
        );
        assert!(response.criteria.contains("11171"));
    }

    #[tokio::test]
    async fn test_aggregate_empty_results() {
        let db = TestDatabase::new().await.unwrap();
        db.seed(&EmployeeFixtures::below_threshold_roster()).await.unwrap();

        let (status, body, _) =
            send(app(&db), Method::GET, "/api/employees/aggregate-abc-values", None).await;

        assert_eq!(status, StatusCode::OK);
        let response: AggregateResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.results.is_empty());
    }
}

mod health_routes {
    use super::*;

    #[tokio::test]
    async fn test_health_and_readiness() {
        let db = TestDatabase::new().await.unwrap();

        let (status, _, _) = send(app(&db), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body, _) = send(app(&db), Method::GET, "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        let health: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ready");
    }

    #[tokio::test]
    async fn test_readiness_fails_when_store_closed() {
        let db = TestDatabase::new().await.unwrap();
        let router = app(&db);
        db.pool().close().await;

        let (status, _, _) = send(router, Method::GET, "/health/ready", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
