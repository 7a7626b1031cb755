//! Visual properties derived from a row key.
//!
//! Height and color are pure functions of the key: the key is hashed, the
//! hash seeds a generator, and the first draws pick a size tier and an HSL
//! triple. Rendering a row twice, or after pages were prepended above it,
//! always yields the same block.

use serde::{Deserialize, Serialize};

use super::{
    color::Hsl,
    seed::{hash_key, Mulberry32},
};

/// Mixed into the hash so color draws are independent of height draws.
const COLOR_SALT: u32 = 0x9E37_79B9;

/// Fallback height used before a row has been measured.
pub const ESTIMATE_HEIGHT_PX: u32 = 60;

/// Weighted size buckets a row can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    /// 60% of rows, single-line-ish: 60..75 px
    Compact,
    /// 25% of rows: 200..400 px
    Medium,
    /// 10% of rows: 600..1200 px
    Large,
    /// 5% of rows, more than a page: 1200..1800 px
    ExtraLarge,
}

impl SizeTier {
    fn from_draw(u: f64) -> Self {
        if u < 0.6 {
            SizeTier::Compact
        } else if u < 0.85 {
            SizeTier::Medium
        } else if u < 0.95 {
            SizeTier::Large
        } else {
            SizeTier::ExtraLarge
        }
    }

    /// `(base, spread)` in pixels; a row's height is `base + floor(r * spread)`.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            SizeTier::Compact => (60, 15),
            SizeTier::Medium => (200, 200),
            SizeTier::Large => (600, 600),
            SizeTier::ExtraLarge => (1200, 600),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowVisual {
    pub tier: SizeTier,
    pub height_px: u32,
    pub color: Hsl,
}

impl RowVisual {
    pub fn for_key(key: &str) -> Self {
        let (tier, height_px) = sized_for_key(key);
        Self {
            tier,
            height_px,
            color: color_for_key(key),
        }
    }
}

fn sized_for_key(key: &str) -> (SizeTier, u32) {
    let mut rng = Mulberry32::new(hash_key(key));
    let tier = SizeTier::from_draw(rng.next_f64());
    let (base, spread) = tier.bounds();
    (tier, base + rng.next_below(spread))
}

pub fn height_for_key(key: &str) -> u32 {
    sized_for_key(key).1
}

pub fn color_for_key(key: &str) -> Hsl {
    let mut rng = Mulberry32::new(hash_key(key) ^ COLOR_SALT);
    let hue = rng.next_below(360) as u16;
    let saturation = 45 + rng.next_below(10) as u8;
    let lightness = 75 + rng.next_below(8) as u8;
    Hsl::new(hue, saturation, lightness)
}

/// Convert a pixel height to terminal lines, rounding up, never below one.
pub fn lines_for_height(height_px: u32, px_per_line: u32) -> u16 {
    let lines = height_px.div_ceil(px_per_line.max(1)).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 298)]
    #[case("a", 261)]
    #[case("foobar", 798)]
    #[case("Async loaded row 0", 67)]
    #[case("Async loaded row 1", 72)]
    #[case("Async loaded row 20", 288)]
    fn test_height_for_key(#[case] key: &str, #[case] expected: u32) {
        assert_eq!(height_for_key(key), expected);
    }

    #[rstest]
    #[case("", Hsl::new(132, 53, 76))]
    #[case("a", Hsl::new(17, 50, 76))]
    #[case("Async loaded row 0", Hsl::new(210, 49, 76))]
    #[case("Async loaded row 19", Hsl::new(263, 53, 79))]
    fn test_color_for_key(#[case] key: &str, #[case] expected: Hsl) {
        assert_eq!(color_for_key(key), expected);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        for i in 0..100 {
            let key = format!("Async loaded row {i}");
            assert_eq!(RowVisual::for_key(&key), RowVisual::for_key(&key));
        }
    }

    #[test]
    fn test_heights_fall_inside_their_tier() {
        for i in 0..500 {
            let visual = RowVisual::for_key(&format!("Async loaded row {i}"));
            let (base, spread) = visual.tier.bounds();
            assert!(
                (base..base + spread).contains(&visual.height_px),
                "{visual:?} out of range"
            );
        }
    }

    #[test]
    fn test_colors_stay_in_pastel_range() {
        for i in 0..500 {
            let color = color_for_key(&format!("row {i}"));
            assert!(color.hue < 360);
            assert!((45..55).contains(&color.saturation));
            assert!((75..83).contains(&color.lightness));
        }
    }

    #[rstest]
    #[case(60, 20, 3)]
    #[case(67, 20, 4)]
    #[case(1799, 20, 90)]
    #[case(0, 20, 1)]
    #[case(60, 0, 60)]
    fn test_lines_for_height(#[case] px: u32, #[case] per_line: u32, #[case] expected: u16) {
        assert_eq!(lines_for_height(px, per_line), expected);
    }
}
