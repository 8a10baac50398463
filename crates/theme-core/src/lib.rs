//! Design token core for Token Studio
//!
//! This crate provides the color-space utilities, the design style schema
//! and built-in catalog, override resolution, export formatters and the
//! theme generator. Everything here is pure and synchronous.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod color;
pub mod export;
pub mod generator;
pub mod style;

pub use catalog::{default_style, design_styles, find_style, styles_in_category, STYLE_CATEGORIES};
pub use color::{ColorError, ContrastRating, Hsl, HslColor, Rgb};
pub use export::ExportFormat;
pub use generator::{
    generate_from_prompt, generate_random_theme, generate_theme_with, HarmonyStrategy, ThemeRecipe,
};
pub use style::{
    resolve, ColorKey, ColorOverrides, ColorSlot, Colors, DesignStyle, FontOverrides, Fonts,
    Gradients, ResolvedTheme, ThemeOverrides, ThemePolarity,
};
