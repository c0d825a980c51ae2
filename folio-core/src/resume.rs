//! ATS-friendly resume generation.
//!
//! [`ResumeBuilder`] owns a single page and a vertical cursor measured in
//! millimetres from the top edge. Every emit operation draws at the
//! current cursor and advances it; one builder produces exactly one
//! document and shares no state with other invocations.
//!
//! Known limitation: there is no page-break logic. If the catalog grows
//! until the laid-out content exceeds the page height, the extra content
//! overflows the bottom of the single page rather than starting a new one.

use crate::catalog::Catalog;
use crate::color::Color;
use crate::document::Document;
use crate::error::Result;
use crate::font::Font;
use crate::metrics::wrap_text;
use crate::page::{Page, MM_TO_PT};
use tracing::debug;

/// Fixed name of the downloadable artifact.
pub const RESUME_FILENAME: &str = "Prathamesh_Pendkar_ATS_Resume.pdf";

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;

const BODY_SIZE: f64 = 10.0;
const HEADING_SIZE: f64 = 12.0;

// Bullet geometry: glyph sits 3 mm inside the margin, wrapped text 8 mm,
// with wrapped lines spaced 4 mm apart.
const BULLET_GLYPH_INDENT_MM: f64 = 3.0;
const BULLET_TEXT_INDENT_MM: f64 = 8.0;
const BULLET_LINE_MM: f64 = 4.0;

/// Builder for the single-page resume layout.
pub struct ResumeBuilder {
    page: Page,
    cursor: f64,
}

impl ResumeBuilder {
    pub fn new() -> Self {
        Self {
            page: Page::a4(),
            cursor: MARGIN_MM,
        }
    }

    /// Current vertical offset in millimetres from the top edge.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Usable horizontal span between the margins, in millimetres.
    pub fn content_width(&self) -> f64 {
        PAGE_WIDTH_MM - 2.0 * MARGIN_MM
    }

    /// Emits an uppercased section heading with a rule beneath it.
    ///
    /// The cursor advance is fixed and independent of the title length.
    pub fn heading(&mut self, title: &str) -> &mut Self {
        self.cursor += 3.0;
        let title = title.to_uppercase();
        self.put(&title, MARGIN_MM, Font::HelveticaBold, HEADING_SIZE, Color::black());

        let rule_y = (PAGE_HEIGHT_MM - (self.cursor + 1.0)) * MM_TO_PT;
        self.page.draw_line(
            MARGIN_MM * MM_TO_PT,
            rule_y,
            (PAGE_WIDTH_MM - MARGIN_MM) * MM_TO_PT,
            rule_y,
            0.5 * MM_TO_PT,
        );

        self.cursor += 8.0;
        self
    }

    /// Emits a single line of text at the left margin.
    ///
    /// The caller guarantees the text fits on one line; nothing is
    /// wrapped here and an overlong line runs past the right margin.
    pub fn text(&mut self, text: &str, size: f64, bold: bool, color: Color) -> &mut Self {
        let font = if bold { Font::HelveticaBold } else { Font::Helvetica };
        self.put(text, MARGIN_MM, font, size, color);
        self.cursor += size * 0.35 + 2.0;
        self
    }

    /// Emits a bullet glyph with word-wrapped text.
    ///
    /// Wrapped lines align under the first line of text, not under the
    /// glyph.
    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.put(
            "•",
            MARGIN_MM + BULLET_GLYPH_INDENT_MM,
            Font::Helvetica,
            BODY_SIZE,
            Color::black(),
        );

        let wrap_width_pt = (self.content_width() - BULLET_TEXT_INDENT_MM) * MM_TO_PT;
        let lines = wrap_text(text, Font::Helvetica, BODY_SIZE, wrap_width_pt);

        for (i, line) in lines.iter().enumerate() {
            let y_mm = self.cursor + i as f64 * BULLET_LINE_MM;
            self.page.draw_text(
                line,
                (MARGIN_MM + BULLET_TEXT_INDENT_MM) * MM_TO_PT,
                (PAGE_HEIGHT_MM - y_mm) * MM_TO_PT,
                Font::Helvetica,
                BODY_SIZE,
                Color::black(),
            );
        }

        self.cursor += lines.len() as f64 * BULLET_LINE_MM + 1.0;
        self
    }

    /// Advances the cursor without drawing anything.
    pub fn space(&mut self, dy: f64) -> &mut Self {
        self.cursor += dy;
        self
    }

    /// Consumes the builder and returns the assembled document.
    pub fn finish(self) -> Document {
        let mut doc = Document::new();
        doc.add_page(self.page);
        doc
    }

    fn put(&mut self, text: &str, x_mm: f64, font: Font, size: f64, color: Color) {
        self.page.draw_text(
            text,
            x_mm * MM_TO_PT,
            (PAGE_HEIGHT_MM - self.cursor) * MM_TO_PT,
            font,
            size,
            color,
        );
    }
}

impl Default for ResumeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the full resume from the catalog and serializes it to PDF bytes.
///
/// The section sequence is fixed: header, professional summary, education,
/// professional experience, technical skills, certifications, key projects.
/// Output is byte-identical across calls for the same catalog.
pub fn ats_resume(catalog: &Catalog) -> Result<Vec<u8>> {
    let profile = &catalog.profile;
    let black = Color::black();
    let date_gray = Color::gray(0.4);
    let mut b = ResumeBuilder::new();

    // Header
    b.text(&profile.name.to_uppercase(), 16.0, true, black);
    b.text(
        &format!(
            "Email: {} | Phone: {} | Location: {}",
            profile.email, profile.phone, profile.location
        ),
        9.0,
        false,
        black,
    );
    b.text(
        &format!("LinkedIn: {} | GitHub: {}", profile.linkedin, profile.github),
        9.0,
        false,
        black,
    );
    b.space(5.0);

    b.heading("Professional Summary");
    b.text(&profile.summary, BODY_SIZE, false, black);

    b.heading("Education");
    b.text(&profile.education.degree, BODY_SIZE, true, black);
    b.text(
        &format!("{} | {}", profile.education.school, profile.education.detail),
        BODY_SIZE,
        false,
        black,
    );

    b.heading("Professional Experience");
    for entry in &catalog.experience {
        b.text(
            &format!("{} | {}", entry.title, entry.company),
            BODY_SIZE,
            true,
            black,
        );
        b.text(&entry.duration, 9.0, false, date_gray);
        for achievement in &entry.achievements {
            b.bullet(achievement);
        }
    }

    b.heading("Technical Skills");
    for category in &catalog.skills {
        let tools: Vec<&str> = category.tools.iter().map(|t| t.name.as_str()).collect();
        b.text(
            &format!("{}: {}", category.title, tools.join(", ")),
            BODY_SIZE,
            false,
            black,
        );
    }

    b.heading("Certifications");
    for cert in &catalog.certifications {
        b.bullet(&format!("{} - {} ({})", cert.title, cert.provider, cert.year));
    }

    b.heading("Key Projects");
    for project in catalog.projects.iter().filter(|p| p.featured) {
        b.text(&project.title, BODY_SIZE, true, black);
        b.text(
            &format!(
                "{} Technologies: {}",
                project.description,
                project.tech.join(", ")
            ),
            BODY_SIZE,
            false,
            black,
        );
        b.space(2.0);
    }

    let final_cursor = b.cursor();
    let mut doc = b.finish();
    doc.set_title(format!("{} - Resume", profile.name));
    doc.set_author(profile.name.clone());

    let bytes = doc.to_bytes()?;
    debug!(
        bytes = bytes.len(),
        cursor_mm = final_cursor,
        "generated resume document"
    );
    Ok(bytes)
}
