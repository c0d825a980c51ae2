//! Property tests for the greedy word-wrap used by bullet layout.

use folio_core::{measure_text, wrap_text, Font};
use proptest::prelude::*;

proptest! {
    /// Every wrapped line must measure at or under the wrap width.
    ///
    /// The width floor stays above the widest possible single word (12 'W's
    /// at 10 pt) because greedy wrapping never splits inside a word.
    #[test]
    fn wrapped_lines_fit_within_width(
        words in prop::collection::vec("[a-zA-Z]{1,12}", 1..60),
        width in 120.0f64..400.0,
    ) {
        let text = words.join(" ");
        for line in wrap_text(&text, Font::Helvetica, 10.0, width) {
            prop_assert!(measure_text(&line, Font::Helvetica, 10.0) <= width);
        }
    }

    /// Wrapping never loses or reorders words.
    #[test]
    fn wrapping_preserves_word_sequence(
        words in prop::collection::vec("[a-zA-Z]{1,12}", 1..60),
        width in 40.0f64..400.0,
    ) {
        let text = words.join(" ");
        let lines = wrap_text(&text, Font::Helvetica, 10.0, width);
        prop_assert_eq!(lines.join(" "), text);
    }

    /// Line count only grows as the width shrinks.
    #[test]
    fn narrower_width_never_yields_fewer_lines(
        words in prop::collection::vec("[a-zA-Z]{1,12}", 1..40),
    ) {
        let text = words.join(" ");
        let wide = wrap_text(&text, Font::Helvetica, 10.0, 300.0).len();
        let narrow = wrap_text(&text, Font::Helvetica, 10.0, 100.0).len();
        prop_assert!(narrow >= wide);
    }
}
