//! Color conversion utilities
//!
//! Every color token in the schema is stored as an HSL triplet string of the
//! form `"H S% L%"` (no `hsl()` wrapper). This module converts between that
//! representation and `#rrggbb` hex, and provides WCAG luminance/contrast
//! scoring plus the lightness inversion used for mismatched preview modes.
//!
//! # Example
//!
//! ```rust
//! use theme_core::color::{hex_to_hsl, hsl_to_hex};
//!
//! assert_eq!(hex_to_hsl("#FF0000").unwrap(), "0 100% 50%");
//! assert_eq!(hsl_to_hex("211 100% 50%").unwrap(), "#007bff");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An HSL triplet string such as `"211 100% 50%"`
pub type HslColor = String;

/// Color parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input is not a 6-digit hex color
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Input is not an `H S% L%` triplet within range
    #[error("Invalid HSL color: {0}")]
    InvalidHsl(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

// =============================================================================
// Typed Color Values
// =============================================================================

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RRGGBB` string (the `#` is optional, case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };

        Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL with integer-rounded components
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0, s: 0, l: (l * 100.0).round() as u8 };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let hue = (h * 60.0).round() as u16 % 360;

        Hsl { h: hue, s: (s * 100.0).round() as u8, l: (l * 100.0).round() as u8 }
    }
}

/// An HSL color with integer components (H in degrees, S and L in percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue, 0-360
    pub h: u16,
    /// Saturation, 0-100
    pub s: u8,
    /// Lightness, 0-100
    pub l: u8,
}

impl Hsl {
    /// Create a new HSL value, wrapping hue and clamping saturation/lightness
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s: s.min(100), l: l.min(100) }
    }

    /// Rotate the hue by `degrees`, wrapping at 360
    pub fn rotate(&self, degrees: u16) -> Self {
        Self { h: ((self.h as u32 + degrees as u32) % 360) as u16, ..*self }
    }

    /// Channel values in 0.0..=1.0 using the six hue sectors
    fn to_unit_rgb(self) -> (f64, f64, f64) {
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;
        let h = (self.h % 360) as f64;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        (r + m, g + m, b + m)
    }

    /// Convert to 8-bit RGB
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = self.to_unit_rgb();
        let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb { r: channel(r), g: channel(g), b: channel(b) }
    }

    /// WCAG relative luminance in 0.0..=1.0
    pub fn relative_luminance(&self) -> f64 {
        let (r, g, b) = self.to_unit_rgb();
        0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
    }

    /// Flip lightness around 50%, keeping hue and saturation
    pub fn inverted(&self) -> Self {
        Self { l: 100 - self.l.min(100), ..*self }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidHsl(s.to_string());
        let mut parts = s.split_whitespace();

        let (Some(h), Some(sat), Some(light), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let h: u16 = h.parse().map_err(|_| invalid())?;
        let sat: u8 = sat.strip_suffix('%').ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let light: u8 = light.strip_suffix('%').ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

        if h > 360 || sat > 100 || light > 100 {
            return Err(invalid());
        }

        Ok(Self { h: h % 360, s: sat, l: light })
    }
}

/// sRGB piecewise gamma expansion
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

// =============================================================================
// String Conversions
// =============================================================================

/// Convert `#RRGGBB` to an `"H S% L%"` triplet
pub fn hex_to_hsl(hex: &str) -> Result<HslColor> {
    Ok(Rgb::from_hex(hex)?.to_hsl().to_string())
}

/// Convert an `"H S% L%"` triplet to lowercase `#rrggbb`
pub fn hsl_to_hex(hsl: &str) -> Result<String> {
    Ok(hsl.parse::<Hsl>()?.to_rgb().to_hex())
}

/// Check whether a string is a well-formed HSL triplet
pub fn is_valid_hsl(value: &str) -> bool {
    value.parse::<Hsl>().is_ok()
}

/// Wrap a stored triplet for use in CSS, e.g. `hsl(211 100% 50%)`
pub fn css_hsl(hsl: &str) -> String {
    format!("hsl({})", hsl)
}

// =============================================================================
// Contrast
// =============================================================================

/// WCAG relative luminance of an HSL triplet
pub fn relative_luminance(hsl: &str) -> Result<f64> {
    Ok(hsl.parse::<Hsl>()?.relative_luminance())
}

/// WCAG contrast ratio between two luminances (always >= 1.0)
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two HSL triplets
pub fn contrast_between(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(relative_luminance(a)?, relative_luminance(b)?))
}

/// WCAG conformance level for a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContrastRating {
    /// 7:1 or better
    Aaa,
    /// 4.5:1 or better
    Aa,
    /// 3:1 or better, large text only
    AaLarge,
    /// Below 3:1
    Fail,
}

impl ContrastRating {
    /// Classify a contrast ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            ContrastRating::Aaa
        } else if ratio >= 4.5 {
            ContrastRating::Aa
        } else if ratio >= 3.0 {
            ContrastRating::AaLarge
        } else {
            ContrastRating::Fail
        }
    }

    /// Short label as shown in contrast badges
    pub fn label(&self) -> &'static str {
        match self {
            ContrastRating::Aaa => "AAA",
            ContrastRating::Aa => "AA",
            ContrastRating::AaLarge => "AA Large",
            ContrastRating::Fail => "Fail",
        }
    }

    /// Whether body text passes at this level
    pub fn passes_body_text(&self) -> bool {
        matches!(self, ContrastRating::Aaa | ContrastRating::Aa)
    }
}

// =============================================================================
// Inversion
// =============================================================================

/// Invert lightness (`L' = 100 - L`) while preserving hue and saturation
///
/// Used to crudely preview a light style in a dark context and vice versa.
/// Applying it twice returns the original triplet.
pub fn smart_invert(hsl: &str) -> Result<HslColor> {
    Ok(hsl.parse::<Hsl>()?.inverted().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn channel_drift(a: &Rgb, b: &Rgb) -> u8 {
        [a.r.abs_diff(b.r), a.g.abs_diff(b.g), a.b.abs_diff(b.b)].into_iter().max().unwrap_or(0)
    }

    fn assert_hex_close(actual: &str, expected: &str) {
        let a = Rgb::from_hex(actual).unwrap();
        let e = Rgb::from_hex(expected).unwrap();
        for (x, y) in [(a.r, e.r), (a.g, e.g), (a.b, e.b)] {
            assert!((x as i16 - y as i16).abs() <= 1, "{} vs {}", actual, expected);
        }
    }

    #[test]
    fn test_hex_to_hsl_primaries() {
        assert_eq!(hex_to_hsl("#FF0000").unwrap(), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00FF00").unwrap(), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000ff").unwrap(), "240 100% 50%");
        assert_eq!(hex_to_hsl("3B82F6").unwrap(), "217 91% 60%");
    }

    #[test]
    fn test_hex_to_hsl_grays() {
        assert_eq!(hex_to_hsl("#FFFFFF").unwrap(), "0 0% 100%");
        assert_eq!(hex_to_hsl("#000000").unwrap(), "0 0% 0%");
        assert_eq!(hex_to_hsl("#808080").unwrap(), "0 0% 50%");
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex("0 100% 50%").unwrap(), "#ff0000");
        assert_eq!(hsl_to_hex("211 100% 50%").unwrap(), "#007bff");
        assert_eq!(hsl_to_hex("0 0% 100%").unwrap(), "#ffffff");
        assert_eq!(hsl_to_hex("0 0% 0%").unwrap(), "#000000");
    }

    #[test]
    fn test_round_trip_hex() {
        for hex in ["#3b82f6", "#ff0000", "#007bff", "#ffffff", "#000000"] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert_hex_close(&hsl_to_hex(&hsl).unwrap(), hex);
        }
    }

    #[test]
    fn test_round_trip_worst_case_drift() {
        // integer S and L percentages cannot address every 8-bit color
        let back = hsl_to_hex(&hex_to_hsl("#02e6e4").unwrap()).unwrap();
        assert_eq!(back, "#02e3df");
        assert_eq!(channel_drift(&Rgb::from_hex("#02e6e4").unwrap(), &Rgb::from_hex(&back).unwrap()), 5);
    }

    #[test]
    fn test_round_trip_hsl() {
        assert_eq!(hex_to_hsl(&hsl_to_hex("211 100% 50%").unwrap()).unwrap(), "211 100% 50%");
        assert_eq!(hex_to_hsl(&hsl_to_hex("217 91% 60%").unwrap()).unwrap(), "217 91% 60%");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(hex_to_hsl("#FFF"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(hex_to_hsl("#GGGGGG"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(hsl_to_hex("200 50 50%"), Err(ColorError::InvalidHsl(_))));
        assert!(matches!(hsl_to_hex("400 50% 50%"), Err(ColorError::InvalidHsl(_))));
        assert!(matches!(hsl_to_hex("200 50% 150%"), Err(ColorError::InvalidHsl(_))));
        assert!(matches!(hsl_to_hex("200 50% 50% 1"), Err(ColorError::InvalidHsl(_))));
        assert!(!is_valid_hsl("hsl(200 50% 50%)"));
        assert!(is_valid_hsl("360 0% 0%"));
    }

    #[test]
    fn test_luminance_extremes() {
        assert!((relative_luminance("0 0% 100%").unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(relative_luminance("0 0% 0%").unwrap(), 0.0);
        // pure green dominates the weighting
        let green = relative_luminance("120 100% 50%").unwrap();
        assert!((green - 0.7152).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_between("0 0% 100%", "0 0% 0%").unwrap();
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(ContrastRating::from_ratio(ratio), ContrastRating::Aaa);
    }

    #[test]
    fn test_contrast_rating_thresholds() {
        assert_eq!(ContrastRating::from_ratio(7.0), ContrastRating::Aaa);
        assert_eq!(ContrastRating::from_ratio(4.5), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(3.2), ContrastRating::AaLarge);
        assert_eq!(ContrastRating::from_ratio(1.4), ContrastRating::Fail);
        assert!(ContrastRating::Aa.passes_body_text());
        assert!(!ContrastRating::AaLarge.passes_body_text());
        assert_eq!(ContrastRating::AaLarge.label(), "AA Large");
    }

    #[test]
    fn test_smart_invert() {
        assert_eq!(smart_invert("220 14% 96%").unwrap(), "220 14% 4%");
        assert_eq!(smart_invert("0 0% 50%").unwrap(), "0 0% 50%");
    }

    #[test]
    fn test_hsl_rotate_wraps() {
        let hsl = Hsl::new(300, 80, 50);
        assert_eq!(hsl.rotate(120).h, 60);
        assert_eq!(hsl.rotate(60).h, 0);
    }

    proptest! {
        #[test]
        fn prop_smart_invert_is_involution(h in 0u16..360, s in 0u8..=100, l in 0u8..=100) {
            let original = Hsl::new(h, s, l).to_string();
            let twice = smart_invert(&smart_invert(&original).unwrap()).unwrap();
            prop_assert_eq!(twice, original);
        }

        #[test]
        fn prop_identical_colors_have_unit_contrast(h in 0u16..360, s in 0u8..=100, l in 0u8..=100) {
            let color = Hsl::new(h, s, l).to_string();
            let lum = relative_luminance(&color).unwrap();
            prop_assert_eq!(contrast_ratio(lum, lum), 1.0);
        }

        #[test]
        fn prop_saturated_hue_survives_round_trip(h in 0u16..360) {
            let color = Hsl::new(h, 100, 50).to_string();
            let back = hex_to_hsl(&hsl_to_hex(&color).unwrap()).unwrap();
            prop_assert_eq!(back, color);
        }

        #[test]
        fn prop_hex_round_trip_drifts_at_most_five(r: u8, g: u8, b: u8) {
            let original = Rgb { r, g, b };
            let hsl = hex_to_hsl(&original.to_hex()).unwrap();
            let back = Rgb::from_hex(&hsl_to_hex(&hsl).unwrap()).unwrap();
            prop_assert!(channel_drift(&original, &back) <= 5, "{} -> {} -> {}", original.to_hex(), hsl, back.to_hex());
        }

        #[test]
        fn prop_hex_to_hsl_is_well_formed(r: u8, g: u8, b: u8) {
            let hsl = hex_to_hsl(&Rgb { r, g, b }.to_hex()).unwrap();
            prop_assert!(is_valid_hsl(&hsl));
        }
    }
}
