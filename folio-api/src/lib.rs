//! # folio-api
//!
//! REST API server for the cyberfolio portfolio site
//!

mod api;
pub use api::{
    app, app_with_catalog, download_resume, health_check, list_certifications, list_experience,
    list_gallery, list_projects, list_skills, AppError, ErrorResponse,
};
