//! Design style schema, user overrides and the effective-style merge
//!
//! A [`DesignStyle`] is an immutable catalog value that defines every token.
//! [`ThemeOverrides`] is a sparse, user-owned patch layered on top of it.
//! [`resolve`] is the single place where the two are merged into a
//! [`ResolvedTheme`], the value every renderer and exporter consumes.
//!
//! # Merge rules
//!
//! - `colors`, `fonts` and `gradients` merge key-by-key: a present override
//!   key wins, an absent key inherits the base value.
//! - `radius`, `shadowStrength`, `borderWidth` and `density` replace
//!   wholesale when present.
//!
//! ```rust
//! use theme_core::catalog::find_style;
//! use theme_core::style::{resolve, ColorKey, ThemeOverrides};
//!
//! let base = find_style("cupertino").unwrap();
//! let mut overrides = ThemeOverrides::default();
//! overrides.set_color(ColorKey::Primary, "0 100% 50%");
//!
//! let effective = resolve(base, &overrides);
//! assert_eq!(effective.colors.primary, "0 100% 50%");
//! assert_eq!(effective.colors.accent, base.colors.accent);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::{self, ContrastRating, HslColor};

// =============================================================================
// Polarity
// =============================================================================

/// Native light/dark polarity of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePolarity {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl ThemePolarity {
    /// The opposite polarity
    pub fn flipped(&self) -> Self {
        match self {
            ThemePolarity::Light => ThemePolarity::Dark,
            ThemePolarity::Dark => ThemePolarity::Light,
        }
    }

    /// Lowercase name used in JSON and CSS `color-scheme`
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePolarity::Light => "light",
            ThemePolarity::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Color Slots
// =============================================================================

/// The 14 color slots every style defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSlot {
    /// Brand color
    Primary,
    /// Text on primary
    PrimaryForeground,
    /// Secondary brand color
    Accent,
    /// Text on accent
    AccentForeground,
    /// Page background
    Background,
    /// Body text
    Foreground,
    /// Card/panel background
    Surface,
    /// Text on surface
    SurfaceForeground,
    /// Subtle fill
    Muted,
    /// De-emphasized text
    MutedForeground,
    /// Dividers and outlines
    Border,
    /// Positive status
    Success,
    /// Cautionary status
    Warning,
    /// Destructive status
    Error,
}

impl ColorSlot {
    /// All slots in schema order
    pub const ALL: [ColorSlot; 14] = [
        ColorSlot::Primary,
        ColorSlot::PrimaryForeground,
        ColorSlot::Accent,
        ColorSlot::AccentForeground,
        ColorSlot::Background,
        ColorSlot::Foreground,
        ColorSlot::Surface,
        ColorSlot::SurfaceForeground,
        ColorSlot::Muted,
        ColorSlot::MutedForeground,
        ColorSlot::Border,
        ColorSlot::Success,
        ColorSlot::Warning,
        ColorSlot::Error,
    ];

    /// camelCase key used in JSON
    pub fn key(&self) -> &'static str {
        match self {
            ColorSlot::Primary => "primary",
            ColorSlot::PrimaryForeground => "primaryForeground",
            ColorSlot::Accent => "accent",
            ColorSlot::AccentForeground => "accentForeground",
            ColorSlot::Background => "background",
            ColorSlot::Foreground => "foreground",
            ColorSlot::Surface => "surface",
            ColorSlot::SurfaceForeground => "surfaceForeground",
            ColorSlot::Muted => "muted",
            ColorSlot::MutedForeground => "mutedForeground",
            ColorSlot::Border => "border",
            ColorSlot::Success => "success",
            ColorSlot::Warning => "warning",
            ColorSlot::Error => "error",
        }
    }

    /// kebab-case name used for CSS custom properties and SCSS variables
    pub fn css_name(&self) -> &'static str {
        match self {
            ColorSlot::Primary => "primary",
            ColorSlot::PrimaryForeground => "primary-foreground",
            ColorSlot::Accent => "accent",
            ColorSlot::AccentForeground => "accent-foreground",
            ColorSlot::Background => "background",
            ColorSlot::Foreground => "foreground",
            ColorSlot::Surface => "surface",
            ColorSlot::SurfaceForeground => "surface-foreground",
            ColorSlot::Muted => "muted",
            ColorSlot::MutedForeground => "muted-foreground",
            ColorSlot::Border => "border",
            ColorSlot::Success => "success",
            ColorSlot::Warning => "warning",
            ColorSlot::Error => "error",
        }
    }

    /// Neutral slots follow the page polarity; brand and status slots do not
    pub fn is_neutral(&self) -> bool {
        matches!(
            self,
            ColorSlot::Background
                | ColorSlot::Foreground
                | ColorSlot::Surface
                | ColorSlot::SurfaceForeground
                | ColorSlot::Muted
                | ColorSlot::MutedForeground
                | ColorSlot::Border
        )
    }
}

/// The 6 color slots a user can override (and lock during randomization)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorKey {
    /// Brand color
    Primary,
    /// Secondary brand color
    Accent,
    /// Subtle fill
    Muted,
    /// Page background
    Background,
    /// Body text
    Foreground,
    /// Card/panel background
    Surface,
}

impl ColorKey {
    /// All editable keys in editor order
    pub const ALL: [ColorKey; 6] = [
        ColorKey::Primary,
        ColorKey::Accent,
        ColorKey::Muted,
        ColorKey::Background,
        ColorKey::Foreground,
        ColorKey::Surface,
    ];

    /// The schema slot this key edits
    pub fn slot(&self) -> ColorSlot {
        match self {
            ColorKey::Primary => ColorSlot::Primary,
            ColorKey::Accent => ColorSlot::Accent,
            ColorKey::Muted => ColorSlot::Muted,
            ColorKey::Background => ColorSlot::Background,
            ColorKey::Foreground => ColorSlot::Foreground,
            ColorKey::Surface => ColorSlot::Surface,
        }
    }

    /// camelCase key used in JSON
    pub fn as_str(&self) -> &'static str {
        self.slot().key()
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown color key: {}", s))
    }
}

// =============================================================================
// Base Style
// =============================================================================

/// Font families and weights of a style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fonts {
    /// Heading font stack
    pub heading: String,
    /// Body font stack
    pub body: String,
    /// Monospace font stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
    /// Heading weight, e.g. "700"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_weight: Option<String>,
    /// Body weight, e.g. "400"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<String>,
}

/// The full 14-slot color set of a style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    /// Brand color
    pub primary: HslColor,
    /// Text on primary
    pub primary_foreground: HslColor,
    /// Secondary brand color
    pub accent: HslColor,
    /// Text on accent
    pub accent_foreground: HslColor,
    /// Page background
    pub background: HslColor,
    /// Body text
    pub foreground: HslColor,
    /// Card/panel background
    pub surface: HslColor,
    /// Text on surface
    pub surface_foreground: HslColor,
    /// Subtle fill
    pub muted: HslColor,
    /// De-emphasized text
    pub muted_foreground: HslColor,
    /// Dividers and outlines
    pub border: HslColor,
    /// Positive status
    pub success: HslColor,
    /// Cautionary status
    pub warning: HslColor,
    /// Destructive status
    pub error: HslColor,
}

impl Colors {
    /// Get a color by slot
    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::PrimaryForeground => &self.primary_foreground,
            ColorSlot::Accent => &self.accent,
            ColorSlot::AccentForeground => &self.accent_foreground,
            ColorSlot::Background => &self.background,
            ColorSlot::Foreground => &self.foreground,
            ColorSlot::Surface => &self.surface,
            ColorSlot::SurfaceForeground => &self.surface_foreground,
            ColorSlot::Muted => &self.muted,
            ColorSlot::MutedForeground => &self.muted_foreground,
            ColorSlot::Border => &self.border,
            ColorSlot::Success => &self.success,
            ColorSlot::Warning => &self.warning,
            ColorSlot::Error => &self.error,
        }
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut HslColor {
        match slot {
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::PrimaryForeground => &mut self.primary_foreground,
            ColorSlot::Accent => &mut self.accent,
            ColorSlot::AccentForeground => &mut self.accent_foreground,
            ColorSlot::Background => &mut self.background,
            ColorSlot::Foreground => &mut self.foreground,
            ColorSlot::Surface => &mut self.surface,
            ColorSlot::SurfaceForeground => &mut self.surface_foreground,
            ColorSlot::Muted => &mut self.muted,
            ColorSlot::MutedForeground => &mut self.muted_foreground,
            ColorSlot::Border => &mut self.border,
            ColorSlot::Success => &mut self.success,
            ColorSlot::Warning => &mut self.warning,
            ColorSlot::Error => &mut self.error,
        }
    }

    /// Iterate `(slot, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, &str)> + '_ {
        ColorSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Optional gradient tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Gradients {
    /// CSS gradient painted behind the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Gradients {
    /// Whether no gradient is set
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
    }
}

/// An immutable catalog style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignStyle {
    /// Stable identifier, e.g. "cupertino"
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Icon key for the gallery
    pub icon: String,
    /// Native polarity
    #[serde(rename = "theme")]
    pub polarity: ThemePolarity,
    /// Category tags
    pub category: Vec<String>,
    /// Fonts
    pub fonts: Fonts,
    /// Colors
    pub colors: Colors,
    /// Corner radius, e.g. "0.75rem"
    pub radius: String,
    /// Shadow strength in 0.0..=1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_strength: Option<f32>,
    /// Border width, e.g. "1px"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    /// Spacing density multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    /// Gradient tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<Gradients>,
    /// Free-text characteristics shown in the gallery
    #[serde(default)]
    pub characteristics: Vec<String>,
}

impl DesignStyle {
    /// Whether the style is natively dark
    pub fn is_dark(&self) -> bool {
        self.polarity == ThemePolarity::Dark
    }

    /// Whether the style carries a category tag
    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }

    /// The style with no overrides applied
    pub fn resolved(&self) -> ResolvedTheme {
        resolve(self, &ThemeOverrides::default())
    }
}

// =============================================================================
// Overrides
// =============================================================================

/// Sparse color overrides for the editable slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColorOverrides {
    /// Brand color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<HslColor>,
    /// Secondary brand color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<HslColor>,
    /// Subtle fill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<HslColor>,
    /// Page background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<HslColor>,
    /// Body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<HslColor>,
    /// Card/panel background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<HslColor>,
}

impl ColorOverrides {
    /// Get an overridden color
    pub fn get(&self, key: ColorKey) -> Option<&str> {
        self.field(key).as_deref()
    }

    /// Set or clear an overridden color
    pub fn set(&mut self, key: ColorKey, value: Option<HslColor>) {
        *self.field_mut(key) = value;
    }

    /// Whether no color is overridden
    pub fn is_empty(&self) -> bool {
        ColorKey::ALL.iter().all(|key| self.field(*key).is_none())
    }

    fn field(&self, key: ColorKey) -> &Option<HslColor> {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Accent => &self.accent,
            ColorKey::Muted => &self.muted,
            ColorKey::Background => &self.background,
            ColorKey::Foreground => &self.foreground,
            ColorKey::Surface => &self.surface,
        }
    }

    fn field_mut(&mut self, key: ColorKey) -> &mut Option<HslColor> {
        match key {
            ColorKey::Primary => &mut self.primary,
            ColorKey::Accent => &mut self.accent,
            ColorKey::Muted => &mut self.muted,
            ColorKey::Background => &mut self.background,
            ColorKey::Foreground => &mut self.foreground,
            ColorKey::Surface => &mut self.surface,
        }
    }
}

/// Sparse typography overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontOverrides {
    /// Heading font stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Body font stack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Heading weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_weight: Option<String>,
    /// Body weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<String>,
    /// Type scale multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl FontOverrides {
    /// Whether no font token is overridden
    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
            && self.body.is_none()
            && self.heading_weight.is_none()
            && self.body_weight.is_none()
            && self.scale.is_none()
    }
}

/// A user-owned sparse patch over the selected style
///
/// Any present key overrides the base style; any absent key inherits it.
/// The empty value serializes to `{}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    /// Color overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
    /// Typography overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontOverrides>,
    /// Corner radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    /// Shadow strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_strength: Option<f32>,
    /// Border width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    /// Spacing density
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    /// Gradient overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<Gradients>,
}

impl ThemeOverrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is overridden (`{}`)
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overridden color for a key, if any
    pub fn color(&self, key: ColorKey) -> Option<&str> {
        self.colors.as_ref().and_then(|c| c.get(key))
    }

    /// Set a color override
    pub fn set_color(&mut self, key: ColorKey, value: impl Into<HslColor>) {
        self.colors.get_or_insert_with(ColorOverrides::default).set(key, Some(value.into()));
    }

    /// Remove a color override so the base value is inherited
    ///
    /// An emptied color group is dropped so the value stays minimal.
    pub fn remove_color(&mut self, key: ColorKey) {
        if let Some(colors) = self.colors.as_mut() {
            colors.set(key, None);
            if colors.is_empty() {
                self.colors = None;
            }
        }
    }

    /// Builder: override a color
    pub fn with_color(mut self, key: ColorKey, value: impl Into<HslColor>) -> Self {
        self.set_color(key, value);
        self
    }

    /// Builder: override the radius
    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    /// Builder: override the shadow strength
    pub fn with_shadow_strength(mut self, strength: f32) -> Self {
        self.shadow_strength = Some(strength);
        self
    }
}

// =============================================================================
// Resolved Theme
// =============================================================================

/// The effective style: base style with overrides applied
///
/// Every token is present; this is what previews and exporters read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    /// Base style id
    pub id: String,
    /// Base style name
    pub name: String,
    /// Base style description
    pub description: String,
    /// Native polarity of the base style
    #[serde(rename = "theme")]
    pub polarity: ThemePolarity,
    /// Effective fonts
    pub fonts: Fonts,
    /// Effective type scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_scale: Option<f32>,
    /// Effective colors
    pub colors: Colors,
    /// Effective radius
    pub radius: String,
    /// Effective shadow strength
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_strength: Option<f32>,
    /// Effective border width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    /// Effective density
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    /// Effective gradients
    #[serde(default)]
    pub gradients: Gradients,
    /// Base style characteristics
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// A scored foreground/background pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    /// Text slot
    pub foreground: String,
    /// Fill slot
    pub background: String,
    /// WCAG contrast ratio
    pub ratio: f64,
    /// Conformance level
    pub rating: ContrastRating,
}

const CONTRAST_PAIRS: [(ColorSlot, ColorSlot); 5] = [
    (ColorSlot::Foreground, ColorSlot::Background),
    (ColorSlot::SurfaceForeground, ColorSlot::Surface),
    (ColorSlot::MutedForeground, ColorSlot::Muted),
    (ColorSlot::PrimaryForeground, ColorSlot::Primary),
    (ColorSlot::AccentForeground, ColorSlot::Accent),
];

impl ResolvedTheme {
    /// Whether the base style is natively dark
    pub fn is_dark(&self) -> bool {
        self.polarity == ThemePolarity::Dark
    }

    /// Shadow strength with the schema default applied
    pub fn shadow_strength_or_default(&self) -> f32 {
        self.shadow_strength.unwrap_or(DEFAULT_SHADOW_STRENGTH)
    }

    /// Border width with the schema default applied
    pub fn border_width_or_default(&self) -> &str {
        self.border_width.as_deref().unwrap_or(DEFAULT_BORDER_WIDTH)
    }

    /// Density with the schema default applied
    pub fn density_or_default(&self) -> f32 {
        self.density.unwrap_or(1.0)
    }

    /// Adapt the theme for previewing under a different polarity
    ///
    /// When `preview` differs from the native polarity every neutral slot is
    /// lightness-inverted; brand and status colors are left alone. Slots that
    /// fail to parse keep their value.
    pub fn adapted_to(&self, preview: ThemePolarity) -> ResolvedTheme {
        let mut adapted = self.clone();
        if preview == self.polarity {
            return adapted;
        }

        for slot in ColorSlot::ALL.into_iter().filter(ColorSlot::is_neutral) {
            let current = adapted.colors.get(slot);
            if let Ok(inverted) = color::smart_invert(current) {
                *adapted.colors.slot_mut(slot) = inverted;
            }
        }
        adapted
    }

    /// Score the standard text-on-fill pairs
    pub fn contrast_report(&self) -> Vec<ContrastCheck> {
        CONTRAST_PAIRS
            .iter()
            .filter_map(|(fg, bg)| {
                let ratio = color::contrast_between(self.colors.get(*fg), self.colors.get(*bg)).ok()?;
                Some(ContrastCheck {
                    foreground: fg.key().to_string(),
                    background: bg.key().to_string(),
                    ratio,
                    rating: ContrastRating::from_ratio(ratio),
                })
            })
            .collect()
    }
}

/// Shadow strength used when neither style nor overrides set one
pub const DEFAULT_SHADOW_STRENGTH: f32 = 0.2;

/// Border width used when neither style nor overrides set one
pub const DEFAULT_BORDER_WIDTH: &str = "1px";

/// Merge overrides onto a base style
///
/// Pure; callers recompute it whenever they need the effective style.
pub fn resolve(base: &DesignStyle, overrides: &ThemeOverrides) -> ResolvedTheme {
    let mut colors = base.colors.clone();
    if let Some(color_overrides) = &overrides.colors {
        for key in ColorKey::ALL {
            if let Some(value) = color_overrides.get(key) {
                *colors.slot_mut(key.slot()) = value.to_string();
            }
        }
    }

    let font_overrides = overrides.fonts.clone().unwrap_or_default();
    let fonts = Fonts {
        heading: font_overrides.heading.unwrap_or_else(|| base.fonts.heading.clone()),
        body: font_overrides.body.unwrap_or_else(|| base.fonts.body.clone()),
        mono: base.fonts.mono.clone(),
        heading_weight: font_overrides.heading_weight.or_else(|| base.fonts.heading_weight.clone()),
        body_weight: font_overrides.body_weight.or_else(|| base.fonts.body_weight.clone()),
    };

    let base_gradients = base.gradients.clone().unwrap_or_default();
    let gradients = Gradients {
        background: overrides
            .gradients
            .as_ref()
            .and_then(|g| g.background.clone())
            .or(base_gradients.background),
    };

    ResolvedTheme {
        id: base.id.clone(),
        name: base.name.clone(),
        description: base.description.clone(),
        polarity: base.polarity,
        fonts,
        type_scale: font_overrides.scale,
        colors,
        radius: overrides.radius.clone().unwrap_or_else(|| base.radius.clone()),
        shadow_strength: overrides.shadow_strength.or(base.shadow_strength),
        border_width: overrides.border_width.clone().or_else(|| base.border_width.clone()),
        density: overrides.density.or(base.density),
        gradients,
        characteristics: base.characteristics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{design_styles, find_style};

    #[test]
    fn test_empty_overrides_serialize_to_empty_object() {
        let json = serde_json::to_string(&ThemeOverrides::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_overrides_serialization_is_camel_case() {
        let overrides = ThemeOverrides::new()
            .with_color(ColorKey::Primary, "10 50% 50%")
            .with_shadow_strength(0.3);
        let json = serde_json::to_value(&overrides).unwrap();

        assert_eq!(json["colors"]["primary"], "10 50% 50%");
        assert!(json["colors"].get("accent").is_none());
        assert!(json.get("shadowStrength").is_some());

        let back: ThemeOverrides = serde_json::from_value(json).unwrap();
        assert_eq!(back, overrides);
    }

    #[test]
    fn test_resolve_without_overrides_matches_base() {
        for style in design_styles() {
            let resolved = style.resolved();
            assert_eq!(resolved.colors, style.colors);
            assert_eq!(resolved.radius, style.radius);
            assert_eq!(resolved.fonts, style.fonts);
            assert_eq!(resolved.shadow_strength, style.shadow_strength);
        }
    }

    #[test]
    fn test_resolve_untouched_slot_inherits() {
        let base = find_style("cupertino").unwrap();
        let overrides = ThemeOverrides::new().with_color(ColorKey::Primary, "0 100% 50%");

        let resolved = resolve(base, &overrides);
        assert_eq!(resolved.colors.primary, "0 100% 50%");
        assert_eq!(resolved.colors.accent, "142 71% 45%");
        assert_eq!(resolved.colors.primary_foreground, base.colors.primary_foreground);
    }

    #[test]
    fn test_resolve_scalars_replace() {
        let base = find_style("cupertino").unwrap();
        let overrides = ThemeOverrides {
            radius: Some("0rem".to_string()),
            shadow_strength: Some(0.4),
            border_width: Some("2px".to_string()),
            density: Some(0.8),
            ..Default::default()
        };

        let resolved = resolve(base, &overrides);
        assert_eq!(resolved.radius, "0rem");
        assert_eq!(resolved.shadow_strength, Some(0.4));
        assert_eq!(resolved.border_width.as_deref(), Some("2px"));
        assert_eq!(resolved.density, Some(0.8));
    }

    #[test]
    fn test_resolve_fonts_merge_per_key() {
        let base = find_style("cupertino").unwrap();
        let overrides = ThemeOverrides {
            fonts: Some(FontOverrides {
                heading: Some("Playfair Display, Georgia, serif".to_string()),
                scale: Some(1.125),
                ..Default::default()
            }),
            ..Default::default()
        };

        let resolved = resolve(base, &overrides);
        assert_eq!(resolved.fonts.heading, "Playfair Display, Georgia, serif");
        assert_eq!(resolved.fonts.body, base.fonts.body);
        assert_eq!(resolved.type_scale, Some(1.125));
    }

    #[test]
    fn test_resolve_gradient_override() {
        let base = find_style("cupertino").unwrap();
        let gradient = "linear-gradient(135deg, #000, #fff)".to_string();
        let overrides = ThemeOverrides {
            gradients: Some(Gradients { background: Some(gradient.clone()) }),
            ..Default::default()
        };
        assert_eq!(resolve(base, &overrides).gradients.background, Some(gradient));
    }

    #[test]
    fn test_remove_color_inherits_again() {
        let mut overrides = ThemeOverrides::new().with_color(ColorKey::Accent, "1 2% 3%");
        overrides.remove_color(ColorKey::Accent);
        assert_eq!(overrides.color(ColorKey::Accent), None);
        assert!(overrides.is_empty());

        let mut overrides = ThemeOverrides::new()
            .with_color(ColorKey::Accent, "1 2% 3%")
            .with_color(ColorKey::Muted, "4 5% 6%");
        overrides.remove_color(ColorKey::Accent);
        assert_eq!(overrides.color(ColorKey::Muted), Some("4 5% 6%"));
    }

    #[test]
    fn test_adapted_to_inverts_neutrals_only() {
        let base = find_style("cupertino").unwrap();
        let resolved = base.resolved();

        let same = resolved.adapted_to(ThemePolarity::Light);
        assert_eq!(same, resolved);

        let dark = resolved.adapted_to(ThemePolarity::Dark);
        assert_eq!(dark.colors.primary, resolved.colors.primary);
        assert_eq!(
            dark.colors.background,
            color::smart_invert(&resolved.colors.background).unwrap()
        );
        assert_eq!(dark.adapted_to(ThemePolarity::Light).colors, dark.colors);
    }

    #[test]
    fn test_contrast_report_covers_pairs() {
        let report = find_style("cupertino").unwrap().resolved().contrast_report();
        assert_eq!(report.len(), 5);

        let body = &report[0];
        assert_eq!(body.foreground, "foreground");
        assert_eq!(body.background, "background");
        assert!(body.rating.passes_body_text());
    }

    #[test]
    fn test_color_key_parsing() {
        assert_eq!("primary".parse::<ColorKey>().unwrap(), ColorKey::Primary);
        assert_eq!("surface".parse::<ColorKey>().unwrap(), ColorKey::Surface);
        assert!("primaryForeground".parse::<ColorKey>().is_err());
        assert_eq!(serde_json::to_string(&ColorKey::Muted).unwrap(), "\"muted\"");
    }

    #[test]
    fn test_design_style_json_uses_theme_key() {
        let style = find_style("cupertino").unwrap();
        let json = serde_json::to_value(style).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["colors"]["primaryForeground"], style.colors.primary_foreground);

        let back: DesignStyle = serde_json::from_value(json).unwrap();
        assert_eq!(&back, style);
    }
}
