use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An HSL color with integral components: hue in degrees, saturation and
/// lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;
        let h = f64::from(self.hue) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        (channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Hsl::new(0, 100, 50), (255, 0, 0))]
    #[case(Hsl::new(120, 100, 25), (0, 128, 0))]
    #[case(Hsl::new(240, 50, 75), (159, 159, 223))]
    #[case(Hsl::new(200, 50, 80), (179, 213, 230))]
    #[case(Hsl::new(0, 0, 100), (255, 255, 255))]
    #[case(Hsl::new(0, 0, 0), (0, 0, 0))]
    fn test_to_rgb(#[case] hsl: Hsl, #[case] expected: (u8, u8, u8)) {
        assert_eq!(hsl.to_rgb(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hsl::new(210, 49, 76).to_string(), "hsl(210 49% 76%)");
    }

    #[test]
    fn test_new_normalizes_components() {
        assert_eq!(Hsl::new(360, 120, 101), Hsl::new(0, 100, 100));
    }

    #[test]
    fn test_into_ratatui_color() {
        assert_eq!(Color::from(Hsl::new(0, 100, 50)), Color::Rgb(255, 0, 0));
    }
}
