use crate::color::Color;
use crate::font::Font;
use std::fmt::Write;

/// Conversion factor from millimetres to PDF points (1/72 inch).
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// A single page with its accumulated content stream.
///
/// Coordinates are in points with the PDF convention of the origin at the
/// bottom-left corner. Higher-level layout (the resume builder) works in
/// millimetres from the top edge and converts before drawing.
#[derive(Debug, Clone)]
pub struct Page {
    width: f64,
    height: f64,
    operations: String,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            operations: String::new(),
        }
    }

    /// Creates a new A4 page (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(210.0 * MM_TO_PT, 297.0 * MM_TO_PT)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Draws a single line of text with its baseline at `(x, y)`.
    ///
    /// Characters outside WinAnsi are replaced with `?` rather than
    /// failing the whole document.
    pub fn draw_text(&mut self, text: &str, x: f64, y: f64, font: Font, size: f64, color: Color) {
        self.operations.push_str("BT\n");
        self.push_fill_color(color);
        writeln!(&mut self.operations, "/{} {:.2} Tf", font.pdf_name(), size).unwrap();
        writeln!(&mut self.operations, "{x:.2} {y:.2} Td").unwrap();

        self.operations.push('(');
        for ch in text.chars() {
            match encode_winansi(ch) {
                b'(' => self.operations.push_str("\\("),
                b')' => self.operations.push_str("\\)"),
                b'\\' => self.operations.push_str("\\\\"),
                byte @ 0x20..=0x7E => self.operations.push(byte as char),
                byte => write!(&mut self.operations, "\\{byte:03o}").unwrap(),
            }
        }
        self.operations.push_str(") Tj\n");

        self.operations.push_str("ET\n");
    }

    /// Strokes a straight line from `(x1, y1)` to `(x2, y2)`.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, line_width: f64) {
        writeln!(&mut self.operations, "{line_width:.2} w").unwrap();
        writeln!(&mut self.operations, "{x1:.2} {y1:.2} m").unwrap();
        writeln!(&mut self.operations, "{x2:.2} {y2:.2} l").unwrap();
        self.operations.push_str("S\n");
    }

    fn push_fill_color(&mut self, color: Color) {
        match color {
            Color::Rgb(r, g, b) => {
                writeln!(&mut self.operations, "{r:.3} {g:.3} {b:.3} rg").unwrap()
            }
            Color::Gray(g) => writeln!(&mut self.operations, "{g:.3} g").unwrap(),
        }
    }

    pub(crate) fn content(&self) -> Vec<u8> {
        self.operations.as_bytes().to_vec()
    }
}

/// Map a character to its WinAnsi (CP1252) byte.
///
/// Covers ASCII plus the punctuation and symbols that occur in the
/// catalog data; everything else degrades to `?`.
fn encode_winansi(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '©' => 0xA9,
        '®' => 0xAE,
        '°' => 0xB0,
        'é' => 0xE9,
        _ => b'?',
    }
}
