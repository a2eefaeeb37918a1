//! Tests for the embedded bitmap font and text drawing

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use periodic_writer::WriterError;
    use periodic_writer::catalog::loader::load_catalog;
    use periodic_writer::render::Rect;
    use periodic_writer::render::font::{
        GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, draw_text, glyphs, text_height,
        text_width,
    };
    use std::path::Path;

    const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn ink_count(image: &RgbaImage) -> usize {
        image.pixels().filter(|pixel| **pixel == INK).count()
    }

    // Tests glyph art decodes to the expected pixels
    // Verified by reversing the bit order of each row
    #[test]
    fn test_glyph_decoding() {
        let l = Glyph::for_char('L').unwrap();

        for row in 0..GLYPH_HEIGHT {
            assert!(l.is_set(0, row), "left column of L should be set");
        }
        assert!(l.is_set(4, 6));
        assert!(!l.is_set(4, 0));
        assert!(!l.is_set(GLYPH_WIDTH, 0));
        assert_eq!(l.coverage(), 11);
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(Glyph::for_char(' ').unwrap().coverage(), 0);
    }

    // Tests every label in the bundled catalog can be drawn
    // Verified by removing the parenthesis glyphs
    #[test]
    fn test_catalog_labels_have_glyphs() {
        let catalog = load_catalog(Path::new("periodic_table.csv")).unwrap();

        for element in &catalog {
            for text in [
                element.atomic_number(),
                element.symbol(),
                element.name(),
                element.atomic_mass(),
            ] {
                assert!(glyphs(text).is_ok(), "missing glyph in '{text}'");
            }
        }
    }

    // Tests unsupported characters are reported
    #[test]
    fn test_missing_glyph() {
        match glyphs("Fe*") {
            Err(WriterError::MissingGlyph { character, text }) => {
                assert_eq!(character, '*');
                assert_eq!(text, "Fe*");
            }
            other => unreachable!("Expected MissingGlyph, got {other:?}"),
        }
    }

    // Tests text metrics
    // Verified by counting the trailing advance gap
    #[test]
    fn test_text_metrics() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("A", 1), GLYPH_WIDTH);
        assert_eq!(text_width("Ge", 2), (2 * GLYPH_ADVANCE - 1) * 2);
        assert_eq!(text_height(4), GLYPH_HEIGHT * 4);
    }

    // Tests scaled drawing paints scale^2 pixels per font pixel
    #[test]
    fn test_draw_text_scaled() {
        let mut image = RgbaImage::from_pixel(40, 40, PAPER);
        let clip = Rect::new(0, 0, 40, 40);

        draw_text(&mut image, "I", (0, 0), 3, INK, clip).unwrap();

        let coverage = Glyph::for_char('I').unwrap().coverage() as usize;
        assert_eq!(ink_count(&image), coverage * 9);
    }

    // Tests pixels outside the clip rectangle are untouched
    // Verified by drawing without the clip check
    #[test]
    fn test_draw_text_clipped() {
        let mut image = RgbaImage::from_pixel(40, 20, PAPER);
        let clip = Rect::new(0, 0, 3, 20);

        draw_text(&mut image, "HHH", (-2, 0), 1, INK, clip).unwrap();

        for (x, _, pixel) in image.enumerate_pixels() {
            if x >= 3 {
                assert_eq!(*pixel, PAPER);
            }
        }
        assert!(ink_count(&image) > 0);
    }

    // Tests a missing glyph leaves the image untouched
    #[test]
    fn test_draw_text_missing_glyph_draws_nothing() {
        let mut image = RgbaImage::from_pixel(40, 20, PAPER);
        let clip = Rect::new(0, 0, 40, 20);

        assert!(draw_text(&mut image, "H~", (0, 0), 1, INK, clip).is_err());
        assert_eq!(ink_count(&image), 0);
    }
}
