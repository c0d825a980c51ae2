//! # folio-core
//!
//! Content catalog and resume generation for the cyberfolio portfolio site.
//!
//! Two things live here:
//!
//! - [`catalog`] — the read-only content catalog (projects, skills,
//!   certifications, experience, gallery) served by the HTTP API. The
//!   data is fixed; load it once and share it behind an `Arc`.
//! - [`resume`] — the ATS resume generator: a cursor-based single-page
//!   layout over a small deterministic PDF serializer with standard
//!   Helvetica metrics.
//!
//! ## Quick start
//!
//! ```rust
//! use folio_core::{ats_resume, Catalog};
//!
//! # fn main() -> folio_core::Result<()> {
//! let catalog = Catalog::builtin();
//! let pdf = ats_resume(&catalog)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod color;
mod document;
mod error;
mod font;
mod metrics;
mod objects;
mod page;
pub mod resume;
mod writer;

pub use catalog::Catalog;
pub use color::Color;
pub use document::{Document, DocumentMetadata};
pub use error::{FolioError, Result};
pub use font::Font;
pub use metrics::{measure_char, measure_text, split_into_words, wrap_text};
pub use objects::{Dictionary, Object, ObjectId};
pub use page::{Page, MM_TO_PT};
pub use resume::{ats_resume, ResumeBuilder, RESUME_FILENAME};
pub use writer::PdfWriter;
