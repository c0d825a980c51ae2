/// Standard Type 1 fonts used by the resume generator.
///
/// These are guaranteed to be available in all PDF readers and never
/// need to be embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Helvetica Oblique (italic)
    HelveticaOblique,
}

impl Font {
    /// The PostScript base font name written into the PDF.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// All fonts registered in every page's resource dictionary.
    pub fn all() -> [Font; 3] {
        [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_names() {
        assert_eq!(Font::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(Font::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(Font::HelveticaOblique.pdf_name(), "Helvetica-Oblique");
    }

    #[test]
    fn test_all_fonts_have_unique_names() {
        let names: Vec<&str> = Font::all().iter().map(|f| f.pdf_name()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }
}
