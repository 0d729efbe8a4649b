//! Category to color assignment.

use salesmap_core::{Color, Ramp};

/// Position sampled on the ramp for category `index` of `count`.
///
/// Spreads categories over the upper three quarters of each ramp, starting
/// at `0.25` so the lightest tint is never used.
#[must_use]
pub fn ramp_position(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.25;
    }
    (1.0 + 3.0 * index as f64 / count as f64) / 4.0
}

/// Colors for every category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    entries: Vec<(String, Color)>,
}

impl ColorMap {
    /// Assign colors to `categories`, which must already be distinct and in
    /// first-seen order. Category `i` samples ramp `i mod 3`.
    #[must_use]
    pub fn assign<S: AsRef<str>>(categories: &[S]) -> Self {
        let count = categories.len();
        let entries = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let color = Ramp::for_index(i).sample(ramp_position(i, count));
                (category.as_ref().to_string(), color)
            })
            .collect();
        Self { entries }
    }

    /// Color for a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, color)| *color)
    }

    /// `(category, color)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Category names in assignment order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no category was assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category pairs that ended up with the same 8-bit color.
    #[must_use]
    pub fn collisions(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (i, (a, ca)) in self.entries.iter().enumerate() {
            for (b, cb) in &self.entries[i + 1..] {
                if ca.to_rgb8() == cb.to_rgb8() {
                    pairs.push((a.clone(), b.clone()));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_position() {
        assert_eq!(ramp_position(0, 1), 0.25);
        assert_eq!(ramp_position(0, 4), 0.25);
        assert_eq!(ramp_position(2, 4), 0.625);
        assert_eq!(ramp_position(0, 0), 0.25);
    }

    #[test]
    fn test_single_category_is_quarter_red() {
        let map = ColorMap::assign(&["Wii"]);
        assert_eq!(map.get("Wii").unwrap().to_css(), "rgb(252, 186, 161)");
    }

    #[test]
    fn test_ramps_cycle_by_index() {
        let cats = ["A", "B", "C", "D"];
        let map = ColorMap::assign(&cats);
        let expected = [
            Ramp::Reds.sample(0.25),
            Ramp::Blues.sample(0.4375),
            Ramp::Greens.sample(0.625),
            Ramp::Reds.sample(0.8125),
        ];
        for (cat, color) in cats.iter().zip(expected) {
            assert_eq!(map.get(cat), Some(color));
        }
    }

    #[test]
    fn test_order_and_lookup() {
        let map = ColorMap::assign(&["Sports".to_string(), "Platform".to_string()]);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(map.categories().collect::<Vec<_>>(), ["Sports", "Platform"]);
        assert_eq!(map.get("Racing"), None);
        assert_ne!(map.get("Sports"), map.get("Platform"));
    }

    #[test]
    fn test_empty() {
        let map = ColorMap::assign::<&str>(&[]);
        assert!(map.is_empty());
        assert!(map.collisions().is_empty());
    }

    #[test]
    fn test_collisions_reported() {
        // A thousand positions per ramp cannot all round to distinct 8-bit colors.
        let names: Vec<String> = (0..3000).map(|i| format!("c{i}")).collect();
        let map = ColorMap::assign(&names);
        assert!(!map.collisions().is_empty());
    }

    #[test]
    fn test_dataset_sized_palette_is_distinct() {
        let names: Vec<String> = (0..18).map(|i| format!("console-{i}")).collect();
        let map = ColorMap::assign(&names);
        assert!(map.collisions().is_empty());
    }

    proptest! {
        #[test]
        fn prop_assignment_is_deterministic(n in 1usize..40) {
            let names: Vec<String> = (0..n).map(|i| format!("cat-{i}")).collect();
            prop_assert_eq!(ColorMap::assign(&names), ColorMap::assign(&names));
        }

        #[test]
        fn prop_up_to_three_categories_never_collide(n in 1usize..=3) {
            let names: Vec<String> = (0..n).map(|i| format!("cat-{i}")).collect();
            prop_assert!(ColorMap::assign(&names).collisions().is_empty());
        }
    }
}
