//! Integration tests for resume generation over the content catalog.

use folio_core::{ats_resume, Catalog, ResumeBuilder, RESUME_FILENAME};
use pretty_assertions::assert_eq;

#[test]
fn generation_is_byte_identical_across_calls() {
    let catalog = Catalog::builtin();

    let first = ats_resume(&catalog).unwrap();
    let second = ats_resume(&catalog).unwrap();

    assert_eq!(first, second);
}

#[test]
fn resume_filename_is_fixed() {
    assert_eq!(RESUME_FILENAME, "Prathamesh_Pendkar_ATS_Resume.pdf");
}

#[test]
fn empty_experience_still_renders_header_and_summary() {
    let mut catalog = Catalog::builtin();
    catalog.experience.clear();

    let bytes = ats_resume(&catalog).unwrap();
    let text = String::from_utf8_lossy(&bytes).to_string();

    assert!(bytes.starts_with(b"%PDF"));
    assert!(text.contains("PRATHAMESH SANTOSH PENDKAR"));
    assert!(text.contains("PROFESSIONAL SUMMARY"));
    assert!(text.contains("PROFESSIONAL EXPERIENCE"));
}

#[test]
fn long_bullet_wraps_and_aligns_under_text_column() {
    let mut catalog = Catalog::builtin();
    catalog.experience.truncate(1);
    // Certifications also render as bullets; drop them so the single
    // achievement below owns the only glyph on the page.
    catalog.certifications.clear();
    let achievement = "Performed deep vulnerability assessment across production services \
                       and staging infrastructure, covering authentication, session handling, \
                       access control, input validation, error handling, logging coverage, \
                       dependency hygiene, network segmentation and configuration drift across \
                       thirty distinct subsystems";
    assert!(achievement.len() > 300);
    catalog.experience[0].achievements = vec![achievement.to_string()];

    let bytes = ats_resume(&catalog).unwrap();
    let text = String::from_utf8_lossy(&bytes).to_string();

    // Glyph column: (20 + 3) mm -> 65.20 pt. Text column: (20 + 8) mm -> 79.37 pt.
    // Td operators start a line, so anchoring on the newline counts x
    // coordinates only.
    let glyph_positions = text.matches("\n65.20 ").count();
    let text_positions = text.matches("\n79.37 ").count();

    assert_eq!(glyph_positions, 1, "one bullet glyph expected");
    assert!(
        text_positions > 1,
        "a 300-character bullet must wrap to multiple lines, got {text_positions}"
    );
}

#[test]
fn bullet_advance_matches_wrapped_line_count() {
    let mut builder = ResumeBuilder::new();
    let before = builder.cursor();
    builder.bullet("Recon Automation: 40% speed improvement");
    let short_advance = builder.cursor() - before;

    let mut builder = ResumeBuilder::new();
    let before = builder.cursor();
    builder.bullet(
        "Delivered twenty proof-of-concept reports with vulnerability rating taxonomy \
         mapping, remediation guidance, retest evidence and executive summaries for \
         stakeholders across four engagements",
    );
    let long_advance = builder.cursor() - before;

    // Single line: 1 * 4 + 1. Wrapped: n * 4 + 1 for n > 1.
    assert_eq!(short_advance, 5.0);
    assert!(long_advance > 5.0);
    assert_eq!((long_advance - 1.0) % 4.0, 0.0);
}

#[test]
fn resume_contains_all_fixed_sections() {
    let bytes = ats_resume(&Catalog::builtin()).unwrap();
    let text = String::from_utf8_lossy(&bytes).to_string();

    for section in [
        "PROFESSIONAL SUMMARY",
        "EDUCATION",
        "PROFESSIONAL EXPERIENCE",
        "TECHNICAL SKILLS",
        "CERTIFICATIONS",
        "KEY PROJECTS",
    ] {
        assert!(text.contains(section), "missing section {section}");
    }
}

#[test]
fn featured_projects_appear_in_key_projects() {
    let bytes = ats_resume(&Catalog::builtin()).unwrap();
    let text = String::from_utf8_lossy(&bytes).to_string();

    assert!(text.contains("Secure Web Hosting on AWS EC2"));
    assert!(text.contains("Recon Automation Bash Script"));
    assert!(text.contains("TSCM Product Design"));
    assert!(text.contains("Web Vulnerability Testing Lab"));
    // Non-featured projects stay out of the resume.
    assert!(!text.contains("IoT Device Compliance Scanner"));
}
