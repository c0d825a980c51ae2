use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use folio_core::catalog::{Catalog, Certification, Experience, GalleryItem, Project, SkillCategory};
use folio_core::{ats_resume, FolioError, RESUME_FILENAME};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the API
#[derive(Debug)]
pub enum AppError {
    /// Core library errors (resume generation)
    Core(FolioError),
    /// I/O errors
    Io(std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_msg = match self {
            AppError::Core(e) => e.to_string(),
            AppError::Io(e) => e.to_string(),
        };

        let error_response = ErrorResponse { error: error_msg };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

impl From<FolioError> for AppError {
    fn from(err: FolioError) -> Self {
        AppError::Core(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Build the application router over the built-in catalog.
pub fn app() -> Router {
    app_with_catalog(Arc::new(Catalog::builtin()))
}

/// Build the application router over a specific catalog instance.
///
/// The catalog is immutable and shared across all requests; handlers
/// only ever read from it.
pub fn app_with_catalog(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/skills", get(list_skills))
        .route("/api/certifications", get(list_certifications))
        .route("/api/experience", get(list_experience))
        .route("/api/gallery", get(list_gallery))
        .route("/api/resume/download", get(download_resume))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(catalog)
}

/// All portfolio projects, in fixed presentation order.
pub async fn list_projects(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Project>> {
    Json(catalog.projects.clone())
}

/// All skill categories with their tools.
pub async fn list_skills(State(catalog): State<Arc<Catalog>>) -> Json<Vec<SkillCategory>> {
    Json(catalog.skills.clone())
}

/// All certifications and competition results.
pub async fn list_certifications(
    State(catalog): State<Arc<Catalog>>,
) -> Json<Vec<Certification>> {
    Json(catalog.certifications.clone())
}

/// All work experience entries.
pub async fn list_experience(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Experience>> {
    Json(catalog.experience.clone())
}

/// All gallery items.
pub async fn list_gallery(State(catalog): State<Arc<Catalog>>) -> Json<Vec<GalleryItem>> {
    Json(catalog.gallery.clone())
}

/// Generate the ATS resume from the catalog and serve it as a download.
pub async fn download_resume(
    State(catalog): State<Arc<Catalog>>,
) -> Result<Response, AppError> {
    let pdf_bytes = ats_resume(&catalog)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_FILENAME}\""),
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "folio API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
