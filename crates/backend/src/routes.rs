use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::shared::data::store::AppState;
use crate::{handlers, system};

/// All application routes with their state attached
pub fn configure_routes(state: AppState) -> Router {
    // Routes that only make sense with a session
    let protected = Router::new()
        .route(
            "/api/system/auth/session",
            get(system::handlers::auth::current_session),
        )
        .route(
            "/api/order",
            get(handlers::a003_order::list_all).post(handlers::a003_order::create),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::require_session,
        ));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Location lists for the cascading selectors
        .route(
            "/api/locations/countries",
            get(handlers::locations::countries),
        )
        .route("/api/locations/states", get(handlers::locations::states))
        .route("/api/locations/cities", get(handlers::locations::cities))
        // Customer registry
        .route(
            "/api/customer",
            get(handlers::a001_customer::list_all).post(handlers::a001_customer::upsert),
        )
        .route(
            "/api/customer/testdata",
            post(handlers::a001_customer::insert_test_data),
        )
        .route(
            "/api/customer/:id",
            get(handlers::a001_customer::get_by_id),
        )
        // Vendor registry
        .route(
            "/api/vendor",
            get(handlers::a002_vendor::list_all).post(handlers::a002_vendor::upsert),
        )
        .route(
            "/api/vendor/testdata",
            post(handlers::a002_vendor::insert_test_data),
        )
        .route("/api/vendor/:id", get(handlers::a002_vendor::get_by_id))
        .merge(protected)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use crate::system::auth::jwt::issue_token;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::Duration;
    use contracts::domain::a003_order::OrderRecord;
    use contracts::system::auth::{ApiError, Role};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const SECRET: &str = "test-secret";

    fn test_state(allow_anonymous_reads: bool) -> AppState {
        let mut config = Config::embedded().unwrap();
        config.auth.jwt_secret = SECRET.into();
        config.auth.allow_anonymous_reads = allow_anonymous_reads;
        AppState::new(config)
    }

    fn token(role: Role, lifetime: Duration) -> String {
        issue_token("tester", role, lifetime, SECRET).unwrap()
    }

    fn get_req(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", t));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", t));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Creates one customer and one vendor, returns their ids
    async fn seed(app: &Router, token: &str) -> (String, String) {
        let resp = app
            .clone()
            .oneshot(post_req(
                "/api/customer",
                Some(token),
                json!({
                    "name": "Northwind Labs",
                    "address": {"country": "Canada", "state": "Ontario", "city": "Toronto"}
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let customer: Value = body_json(resp).await;

        let resp = app
            .clone()
            .oneshot(post_req(
                "/api/vendor",
                Some(token),
                json!({
                    "name": "Rhine Patent Partners",
                    "address": {"country": "Germany", "state": "Bavaria", "city": "Munich"},
                    "services": ["PatentFiling"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let vendor: Value = body_json(resp).await;

        (
            customer["id"].as_str().unwrap().to_string(),
            vendor["id"].as_str().unwrap().to_string(),
        )
    }

    fn order_body(customer_id: &str, vendor_id: &str) -> Value {
        json!({
            "customerId": customer_id,
            "orderOnboardingDate": "2024-03-01",
            "orderFriendlyImage": {"fileName": "mark.png", "contentType": "image/png", "sizeBytes": 10},
            "typeOfWork": "PatentFiling",
            "workCompletionDate": "2024-06-30",
            "documents": [{"fileName": "invoice.pdf", "contentType": "application/pdf", "sizeBytes": 20}],
            "totalInvoiceValue": "1200",
            "vendorId": vendor_id,
            "vendorOnboardingDate": "2024-03-02",
            "currentStatus": "YetToStart",
            "title": "Widget patent"
        })
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = configure_routes(test_state(true));
        let resp = app.oneshot(get_req("/health", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn location_lists_follow_the_table() {
        let app = configure_routes(test_state(true));

        let resp = app
            .clone()
            .oneshot(get_req("/api/locations/cities?country=Canada&state=Ontario", None))
            .await
            .unwrap();
        let cities: Vec<String> = body_json(resp).await;
        assert_eq!(cities, vec!["Toronto", "Ottawa", "Hamilton", "London", "Kitchener"]);

        let resp = app
            .clone()
            .oneshot(get_req("/api/locations/states?country=Atlantis", None))
            .await
            .unwrap();
        let states: Vec<String> = body_json(resp).await;
        assert!(states.is_empty());

        let resp = app
            .oneshot(get_req("/api/locations/states", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn order_without_token_is_session_missing() {
        let app = configure_routes(test_state(true));
        let resp = app
            .oneshot(post_req("/api/order", None, order_body("a", "b")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ApiError = body_json(resp).await;
        assert_eq!(body.error, "session_missing");
    }

    #[tokio::test]
    async fn order_with_expired_token_is_session_expired() {
        let app = configure_routes(test_state(true));
        let expired = token(Role::Manager, Duration::minutes(-5));
        let resp = app
            .oneshot(post_req("/api/order", Some(&expired), order_body("a", "b")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ApiError = body_json(resp).await;
        assert_eq!(body.error, "session_expired");
    }

    #[tokio::test]
    async fn incomplete_order_returns_section_errors() {
        let app = configure_routes(test_state(true));
        let t = token(Role::Manager, Duration::hours(1));
        let (customer_id, vendor_id) = seed(&app, &t).await;

        let mut body = order_body(&customer_id, &vendor_id);
        body.as_object_mut().unwrap().remove("typeOfWork");
        let resp = app
            .oneshot(post_req("/api/order", Some(&t), body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: ApiError = body_json(resp).await;
        let fields = err.fields.unwrap();
        assert!(fields["Customer"]["typeOfWork"].is_string());
        assert!(fields.get("Vendor").is_none());
    }

    #[tokio::test]
    async fn unknown_references_are_rejected() {
        let app = configure_routes(test_state(true));
        let t = token(Role::Manager, Duration::hours(1));
        let resp = app
            .oneshot(post_req(
                "/api/order",
                Some(&t),
                order_body("0b7b4c1e-6f51-4d1e-9a53-0d3c2a0f8e11", "not-a-uuid"),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: ApiError = body_json(resp).await;
        let fields = err.fields.unwrap();
        assert_eq!(fields["Customer"]["customerId"], "Unknown customer");
        assert_eq!(fields["Vendor"]["vendorId"], "Unknown vendor");
    }

    #[tokio::test]
    async fn complete_order_is_accepted_and_listed() {
        let app = configure_routes(test_state(true));
        let t = token(Role::Operator, Duration::hours(1));
        let manager = token(Role::Manager, Duration::hours(1));
        let (customer_id, vendor_id) = seed(&app, &manager).await;

        let resp = app
            .clone()
            .oneshot(post_req("/api/order", Some(&t), order_body(&customer_id, &vendor_id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let created: Value = body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();

        let resp = app
            .oneshot(get_req("/api/order", Some(&t)))
            .await
            .unwrap();
        let orders: Vec<OrderRecord> = body_json(resp).await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);
        assert_eq!(orders[0].created_by, "tester");
        assert_eq!(orders[0].payload.order.title, "Widget patent");
    }

    #[tokio::test]
    async fn demo_role_cannot_submit_orders() {
        let app = configure_routes(test_state(true));
        let t = token(Role::Demo, Duration::hours(1));
        let resp = app
            .oneshot(post_req("/api/order", Some(&t), order_body("a", "b")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn customer_form_errors_are_field_keyed() {
        let app = configure_routes(test_state(true));
        let t = token(Role::Manager, Duration::hours(1));
        let resp = app
            .oneshot(post_req(
                "/api/customer",
                Some(&t),
                json!({"name": "Acme", "address": {"country": "Australia", "state": "Ontario"}}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: ApiError = body_json(resp).await;
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("address.state"));
    }

    #[tokio::test]
    async fn registry_reads_can_require_a_session() {
        let open = configure_routes(test_state(true));
        let resp = open.oneshot(get_req("/api/vendor", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let closed = configure_routes(test_state(false));
        let resp = closed
            .clone()
            .oneshot(get_req("/api/vendor", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let t = token(Role::Demo, Duration::hours(1));
        let resp = closed.oneshot(get_req("/api/vendor", Some(&t))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn session_endpoint_returns_claims() {
        let app = configure_routes(test_state(true));
        let t = token(Role::Operator, Duration::hours(1));
        let resp = app
            .oneshot(get_req("/api/system/auth/session", Some(&t)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let session: Value = body_json(resp).await;
        assert_eq!(session["user"]["username"], "tester");
        assert_eq!(session["role"], "operator");
    }
}
