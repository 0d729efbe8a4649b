//! Leaf labels: one line per word, clipped to the leaf rectangle.

use salesmap_core::{Bounds, Point};
use salesmap_yaml::LabelConfig;

/// Words of a leaf name, one per label line. Runs of whitespace separate
/// words; leading and trailing whitespace yield no empty lines.
#[must_use]
pub fn words(name: &str) -> Vec<&str> {
    name.split_whitespace().collect()
}

/// Id of the clip path for leaf `index`.
#[must_use]
pub fn clip_id(index: usize) -> String {
    format!("text-clip-{index}")
}

/// `clip-path` attribute value referencing leaf `index`'s clip path.
#[must_use]
pub fn clip_url(index: usize) -> String {
    format!("url(#{})", clip_id(index))
}

/// Baseline origin of each word line inside `bounds`.
///
/// Lines are not wrapped or fitted; anything past the rectangle is clipped.
#[must_use]
pub fn line_positions(bounds: &Bounds, lines: usize, config: &LabelConfig) -> Vec<Point> {
    (0..lines)
        .map(|line| {
            Point::new(
                bounds.x0 + config.text_offset_x,
                bounds.y0 + config.text_offset_y + config.text_line_height * line as f64,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(words("Super Mario Bros."), ["Super", "Mario", "Bros."]);
        assert_eq!(words("Pokemon  Red/Pokemon\tBlue"), ["Pokemon", "Red/Pokemon", "Blue"]);
        assert_eq!(words("  Tetris "), ["Tetris"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_clip_references() {
        assert_eq!(clip_id(7), "text-clip-7");
        assert_eq!(clip_url(7), "url(#text-clip-7)");
    }

    #[test]
    fn test_line_positions() {
        let bounds = Bounds::new(100.0, 40.0, 180.0, 90.0);
        let points = line_positions(&bounds, 3, &LabelConfig::default());
        assert_eq!(
            points,
            [
                Point::new(105.0, 55.0),
                Point::new(105.0, 70.0),
                Point::new(105.0, 85.0)
            ]
        );
    }

    #[test]
    fn test_line_positions_ignore_rectangle_height() {
        // A tiny tile still gets every line; clipping hides the overflow.
        let bounds = Bounds::new(0.0, 0.0, 4.0, 4.0);
        let points = line_positions(&bounds, 2, &LabelConfig::default());
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].y, 30.0);
    }
}
