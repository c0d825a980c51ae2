//! Unit and integration tests for folio-api

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use folio_api::{app, ErrorResponse};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

#[cfg(test)]
mod unit_tests {
    use super::*;
    use axum::response::IntoResponse;
    use folio_api::AppError;

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            error: "Test error message".to_string(),
        };

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["error"], "Test error message");
    }

    #[test]
    fn test_app_error_core_conversion() {
        let core_error = folio_core::FolioError::FontError("missing metrics".to_string());
        let app_error: AppError = core_error.into();

        let response = app_error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_io_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();

        let response = app_error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_debug_trait() {
        let io_error = std::io::Error::other("test error");
        let app_error = AppError::Io(io_error);
        let debug_str = format!("{:?}", app_error);
        assert!(debug_str.contains("Io"));
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    async fn get_json(path: &str) -> serde_json::Value {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let json = get_json("/api/health").await;

        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "folio API");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn test_projects_endpoint_returns_non_empty_array() {
        let json = get_json("/api/projects").await;

        let projects = json.as_array().unwrap();
        assert!(!projects.is_empty());
        assert_eq!(projects[0]["id"], "iot-compliance-scanner");
        assert!(projects[0]["githubUrl"].is_string());
        assert!(projects[0]["tech"].is_array());
    }

    #[tokio::test]
    async fn test_skills_endpoint_returns_non_empty_array() {
        let json = get_json("/api/skills").await;

        let skills = json.as_array().unwrap();
        assert!(!skills.is_empty());
        assert_eq!(skills[0]["id"], "cloud-security");
        assert!(skills[0]["tools"][0]["wikipediaUrl"].is_string());
    }

    #[tokio::test]
    async fn test_certifications_endpoint_returns_non_empty_array() {
        let json = get_json("/api/certifications").await;

        let certifications = json.as_array().unwrap();
        assert!(!certifications.is_empty());
        assert!(certifications[0]["statusColor"].is_string());
    }

    #[tokio::test]
    async fn test_experience_endpoint_returns_non_empty_array() {
        let json = get_json("/api/experience").await;

        let experience = json.as_array().unwrap();
        assert!(!experience.is_empty());
        assert_eq!(experience[0]["id"], "imperative");
        assert!(experience[0]["achievements"].is_array());
    }

    #[tokio::test]
    async fn test_gallery_endpoint_returns_non_empty_array() {
        let json = get_json("/api/gallery").await;

        let gallery = json.as_array().unwrap();
        assert!(!gallery.is_empty());
        assert!(gallery[0]["imagePath"].is_string());
    }

    #[tokio::test]
    async fn test_catalog_order_stable_across_calls() {
        let first = get_json("/api/projects").await;
        let second = get_json("/api/projects").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resume_download_headers_and_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/resume/download")
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"Prathamesh_Pendkar_ATS_Resume.pdf\""
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(!body.is_empty());
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_resume_download_is_deterministic() {
        async fn fetch_pdf() -> Vec<u8> {
            let response = app()
                .oneshot(
                    Request::builder()
                        .uri("/api/resume/download")
                        .method("GET")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec()
        }

        assert_eq!(fetch_pdf().await, fetch_pdf().await);
    }

    #[tokio::test]
    async fn test_404_for_unknown_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .method("POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_headers_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .method("OPTIONS")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}

#[cfg(test)]
mod handler_tests {
    use super::*;
    use axum::extract::State;
    use axum::response::IntoResponse;
    use folio_api::{download_resume, health_check, list_projects};
    use folio_core::Catalog;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_check_handler_directly() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_projects_handler_directly() {
        let catalog = Arc::new(Catalog::builtin());
        let response = list_projects(State(catalog)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_download_resume_handler_directly() {
        let catalog = Arc::new(Catalog::builtin());
        let result = download_resume(State(catalog)).await;
        assert!(result.is_ok());

        let response = result.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_handlers_work_with_empty_experience() {
        let mut catalog = Catalog::builtin();
        catalog.experience.clear();

        let result = download_resume(State(Arc::new(catalog))).await;
        assert!(result.is_ok());
    }
}
