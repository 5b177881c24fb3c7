pub mod health;
pub mod index;

use axum::{
    routing::{get, post},
    Router,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::recommendation::handlers as recommendation;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

const SESSION_COOKIE_NAME: &str = "mentor_session";

pub fn build_router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(state.config.session_secure_cookie);

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/get_suggestions",
            post(suggestions::handle_get_suggestions),
        )
        .route(
            "/get_recommendations",
            post(recommendation::handle_get_recommendations),
        )
        .route("/get_history", get(recommendation::handle_get_history))
        .with_state(state)
        .layer(session_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_support::{test_state, InMemoryStore, ScriptedGenerator};

    const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

    fn app(store: Arc<InMemoryStore>, generator: ScriptedGenerator) -> Router {
        build_router(test_state(store, Arc::new(generator)))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn session_cookie(response: &Response) -> Option<String> {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }

    fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn recommendation_form(branch: &str) -> String {
        format!(
            "branch={}&year=2nd+Year&interests-value=AI&goals=Researcher",
            branch.replace(' ', "+")
        )
    }

    #[tokio::test]
    async fn test_health_reports_degraded_dependencies() {
        let app = app(Arc::new(InMemoryStore::unavailable()), ScriptedGenerator::unconfigured());
        let response = app.oneshot(get("/health", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["gemini_api"], "unavailable");
        assert_eq!(body["database"], "unavailable");
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_health_reports_available_dependencies() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::replying("x"));
        let body = body_json(app.oneshot(get("/health", None)).await.unwrap()).await;
        assert_eq!(body["gemini_api"], "available");
        assert_eq!(body["database"], "available");
    }

    #[tokio::test]
    async fn test_index_serves_page_and_issues_session() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::unconfigured());
        let response = app.oneshot(get("/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response).expect("session cookie issued");
        assert!(cookie.starts_with(SESSION_COOKIE_NAME));
    }

    #[tokio::test]
    async fn test_recommendation_scenario_without_generator() {
        let store = Arc::new(InMemoryStore::new());
        let app = app(store.clone(), ScriptedGenerator::unconfigured());

        let response = app
            .oneshot(post_form(
                "/get_recommendations",
                &recommendation_form("Computer Science"),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let text = body["recommendation"].as_str().unwrap();
        for needle in ["Electives", "Club", "Internship", "Computer Science", "AI", "Researcher"] {
            assert!(text.contains(needle), "missing {needle}");
        }
        assert_eq!(store.saved().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_are_client_errors_without_persistence() {
        let store = Arc::new(InMemoryStore::new());
        let app = app(store.clone(), ScriptedGenerator::unconfigured());

        for body in [
            "branch=&interests-value=AI&goals=Researcher",
            "branch=CS&interests-value=&goals=Researcher",
            "branch=CS&interests-value=AI&goals=+++",
            "year=3rd+Year",
        ] {
            let response = app
                .clone()
                .oneshot(post_form("/get_recommendations", body, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
            let json = body_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("required fields"));
        }
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn test_history_returns_submissions_newest_first() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::unconfigured());

        let first = app.clone().oneshot(get("/", None)).await.unwrap();
        let cookie = session_cookie(&first).unwrap();

        for branch in ["Civil", "Mechanical", "Electrical"] {
            let response = app
                .clone()
                .oneshot(post_form(
                    "/get_recommendations",
                    &recommendation_form(branch),
                    Some(&cookie),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.clone().oneshot(get("/get_history", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let branches: Vec<&str> = body["history"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["branch"].as_str().unwrap())
            .collect();
        assert_eq!(branches, ["Electrical", "Mechanical", "Civil"]);
        assert_eq!(body["history"][0]["goals"], "Researcher");
        assert!(body["history"][0]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_history_keeps_five_most_recent() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::unconfigured());
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap()).unwrap();

        for i in 0..7 {
            app.clone()
                .oneshot(post_form(
                    "/get_recommendations",
                    &recommendation_form(&format!("Branch{i}")),
                    Some(&cookie),
                ))
                .await
                .unwrap();
        }

        let body = body_json(app.oneshot(get("/get_history", Some(&cookie))).await.unwrap()).await;
        let history = body["history"].as_array().unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0]["branch"], "Branch6");
        assert_eq!(history[4]["branch"], "Branch2");
    }

    #[tokio::test]
    async fn test_history_without_session_is_empty() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::unconfigured());
        let response = app.oneshot(get("/get_history", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["history"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_history_with_store_down_is_empty() {
        let app = app(Arc::new(InMemoryStore::unavailable()), ScriptedGenerator::unconfigured());
        let cookie = session_cookie(&app.clone().oneshot(get("/", None)).await.unwrap()).unwrap();

        let response = app.oneshot(get("/get_history", Some(&cookie))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["history"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_suggestions_short_query_is_empty() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::unconfigured());
        let response = app
            .oneshot(post_form("/get_suggestions", "field=goals&query=a", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["suggestions"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_suggestions_degrade_to_static_list() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::failing());
        let response = app
            .oneshot(post_form("/get_suggestions", "field=goals&query=robotics", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let suggestions = body["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 5);
        assert!(suggestions[0].as_str().unwrap().contains("robotics"));
    }

    #[tokio::test]
    async fn test_unreadable_suggestion_request_still_succeeds() {
        let app = app(Arc::new(InMemoryStore::new()), ScriptedGenerator::unconfigured());
        let request = Request::builder()
            .method("POST")
            .uri("/get_suggestions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(!body["suggestions"].as_array().unwrap().is_empty());
    }
}
