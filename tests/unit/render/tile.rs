//! Tests for single tile drawing

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use periodic_writer::catalog::ElementRecord;
    use periodic_writer::io::configuration::{
        BORDER_COLOR, TEXT_COLOR, TILE_BORDER, TILE_FILL_COLOR, TILE_HEIGHT, TILE_PADDING,
        TILE_WIDTH,
    };
    use periodic_writer::render::Rect;
    use periodic_writer::render::tile::{content_area, draw_tile, fill_rect, label_positions};

    fn tile_rect() -> Rect {
        Rect::new(10, 10, TILE_WIDTH, TILE_HEIGHT)
    }

    fn canvas() -> RgbaImage {
        RgbaImage::from_pixel(TILE_WIDTH + 20, TILE_HEIGHT + 20, Rgba([255, 255, 255, 255]))
    }

    // Tests the frame, fill and text colors land where expected
    // Verified by skipping the border fill
    #[test]
    fn test_draw_tile_frame() {
        let mut image = canvas();
        let rect = tile_rect();
        let element = ElementRecord::new("26", "Iron", "Fe", "55.845");

        draw_tile(&mut image, rect, &element).unwrap();

        assert_eq!(*image.get_pixel(rect.x, rect.y), Rgba(BORDER_COLOR));
        assert_eq!(
            *image.get_pixel(rect.right() - 1, rect.bottom() - 1),
            Rgba(BORDER_COLOR)
        );
        assert_eq!(
            *image.get_pixel(rect.x + TILE_BORDER, rect.y + TILE_BORDER),
            Rgba(TILE_FILL_COLOR)
        );
        assert_eq!(*image.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
        assert!(image.pixels().any(|pixel| *pixel == Rgba(TEXT_COLOR)));
    }

    // Tests no text is drawn into the padding
    // Verified by clipping to the whole tile instead of the content area
    #[test]
    fn test_text_stays_in_content_area() {
        let mut image = canvas();
        let rect = tile_rect();
        let element = ElementRecord::new("104", "Rutherfordium", "Rf", "(267)");
        let content = content_area(rect);

        draw_tile(&mut image, rect, &element).unwrap();

        for (x, y, pixel) in image.enumerate_pixels() {
            if *pixel == Rgba(TEXT_COLOR) {
                assert!(
                    content.contains(i64::from(x), i64::from(y)),
                    "text pixel outside content area at ({x}, {y})"
                );
            }
        }
    }

    // Tests label placement: number top-left, others centered, mass at bottom
    #[test]
    fn test_label_positions() {
        let rect = tile_rect();
        let element = ElementRecord::new("8", "Oxygen", "O", "15.999");
        let content = content_area(rect);
        let positions = label_positions(rect, &element);

        assert_eq!(
            positions.number,
            (i64::from(content.x), i64::from(content.y))
        );
        assert!(positions.number.1 < positions.symbol.1);
        assert!(positions.symbol.1 < positions.name.1);
        assert!(positions.name.1 < positions.mass.1);
        assert_eq!(content.x, rect.x + TILE_BORDER + TILE_PADDING);
    }

    #[test]
    fn test_unknown_character_fails() {
        let mut image = canvas();
        let element = ElementRecord::new("0", "Unobtainium?", "Uo", "0");

        assert!(draw_tile(&mut image, tile_rect(), &element).is_err());
    }

    // Tests filling is limited to the image bounds
    #[test]
    fn test_fill_rect_clamps() {
        let mut image = RgbaImage::new(4, 4);
        let color = Rgba([1, 2, 3, 4]);

        fill_rect(&mut image, Rect::new(2, 2, 10, 10), color);

        assert_eq!(*image.get_pixel(3, 3), color);
        assert_eq!(*image.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }
}
