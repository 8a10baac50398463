//! Export formatters
//!
//! Every formatter is a pure function of a [`ResolvedTheme`]. Export a bare
//! catalog style through [`DesignStyle::resolved`](crate::style::DesignStyle::resolved).

use serde_json::{json, Map, Value};
use std::fmt::Write;

use crate::catalog::{is_google_font, primary_family};
use crate::color::{css_hsl, hsl_to_hex};
use crate::style::ResolvedTheme;

// =============================================================================
// Export Format
// =============================================================================

/// Supported export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// CSS custom properties and utility classes
    Css,
    /// Tailwind `theme.extend` config
    Tailwind,
    /// SCSS variables
    Scss,
    /// CSS-in-JS object
    CssInJs,
    /// W3C-style design tokens JSON
    DesignTokens,
    /// Raw resolved theme JSON
    Json,
    /// Header, font links, CSS and Tailwind in one file
    Full,
}

impl ExportFormat {
    /// All formats in menu order
    pub const ALL: [ExportFormat; 7] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Scss,
        ExportFormat::CssInJs,
        ExportFormat::DesignTokens,
        ExportFormat::Json,
        ExportFormat::Full,
    ];

    /// Render a theme in this format
    pub fn render(&self, theme: &ResolvedTheme) -> String {
        match self {
            ExportFormat::Css => generate_style_css(theme),
            ExportFormat::Tailwind => generate_tailwind_config(theme),
            ExportFormat::Scss => generate_scss_variables(theme),
            ExportFormat::CssInJs => generate_css_in_js(theme),
            ExportFormat::DesignTokens => generate_design_tokens_json(theme),
            ExportFormat::Json => generate_theme_json(theme),
            ExportFormat::Full => full_export_code(theme),
        }
    }

    /// Suggested download file name
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Css => "theme.css",
            ExportFormat::Tailwind => "tailwind.config.js",
            ExportFormat::Scss => "_theme.scss",
            ExportFormat::CssInJs => "theme.js",
            ExportFormat::DesignTokens => "tokens.json",
            ExportFormat::Json => "theme.json",
            ExportFormat::Full => "theme-export.txt",
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn shadow_value(strength: f32) -> String {
    if strength <= 0.0 {
        return "none".to_string();
    }
    format!(
        "0 1px 3px rgb(0 0 0 / {:.2}), 0 8px 24px rgb(0 0 0 / {:.2})",
        strength,
        strength * 0.6
    )
}

fn spacing_unit(theme: &ResolvedTheme) -> String {
    format!("{}rem", 0.25 * theme.density_or_default())
}

fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// CSS
// =============================================================================

/// `:root` custom properties plus utility classes
pub fn generate_style_css(theme: &ResolvedTheme) -> String {
    let mut css = String::new();
    let _ = writeln!(css, ":root {{");
    let _ = writeln!(css, "  color-scheme: {};", theme.polarity);
    for (slot, value) in theme.colors.iter() {
        let _ = writeln!(css, "  --{}: {};", slot.css_name(), value);
    }
    let _ = writeln!(css, "  --radius: {};", theme.radius);
    let _ = writeln!(css, "  --font-heading: {};", theme.fonts.heading);
    let _ = writeln!(css, "  --font-body: {};", theme.fonts.body);
    if let Some(mono) = &theme.fonts.mono {
        let _ = writeln!(css, "  --font-mono: {};", mono);
    }
    if let Some(weight) = &theme.fonts.heading_weight {
        let _ = writeln!(css, "  --font-heading-weight: {};", weight);
    }
    if let Some(weight) = &theme.fonts.body_weight {
        let _ = writeln!(css, "  --font-body-weight: {};", weight);
    }
    if let Some(scale) = theme.type_scale {
        let _ = writeln!(css, "  --font-scale: {};", scale);
    }
    let _ = writeln!(css, "  --shadow: {};", shadow_value(theme.shadow_strength_or_default()));
    let _ = writeln!(css, "  --border-width: {};", theme.border_width_or_default());
    let _ = writeln!(css, "  --density: {};", theme.density_or_default());
    let _ = writeln!(css, "  --spacing: {};", spacing_unit(theme));
    if let Some(gradient) = &theme.gradients.background {
        let _ = writeln!(css, "  --gradient-background: {};", gradient);
    }
    let _ = writeln!(css, "}}");
    css.push('\n');

    css.push_str(
        "body {\n  background: hsl(var(--background));\n  color: hsl(var(--foreground));\n  font-family: var(--font-body);\n}\n\n",
    );
    css.push_str(
        ".btn-primary {\n  background: hsl(var(--primary));\n  color: hsl(var(--primary-foreground));\n  border-radius: var(--radius);\n  box-shadow: var(--shadow);\n}\n\n",
    );
    css.push_str(
        ".btn-accent {\n  background: hsl(var(--accent));\n  color: hsl(var(--accent-foreground));\n  border-radius: var(--radius);\n}\n\n",
    );
    css.push_str(
        ".card {\n  background: hsl(var(--surface));\n  color: hsl(var(--surface-foreground));\n  border: var(--border-width) solid hsl(var(--border));\n  border-radius: var(--radius);\n  box-shadow: var(--shadow);\n}\n\n",
    );
    css.push_str(
        ".input {\n  background: hsl(var(--background));\n  color: hsl(var(--foreground));\n  border: var(--border-width) solid hsl(var(--border));\n  border-radius: var(--radius);\n}\n\n",
    );
    css.push_str(
        ".badge {\n  background: hsl(var(--muted));\n  color: hsl(var(--muted-foreground));\n  border-radius: 9999px;\n}\n\n",
    );
    css.push_str(".surface {\n  background: hsl(var(--surface));\n  color: hsl(var(--surface-foreground));\n}\n\n");
    css.push_str(".text-muted {\n  color: hsl(var(--muted-foreground));\n}\n");
    css
}

// =============================================================================
// Tailwind
// =============================================================================

/// `tailwind.config.js` extending the default theme
pub fn generate_tailwind_config(theme: &ResolvedTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/** @type {{import('tailwindcss').Config}} */");
    let _ = writeln!(out, "module.exports = {{");
    let _ = writeln!(out, "  theme: {{");
    let _ = writeln!(out, "    extend: {{");
    let _ = writeln!(out, "      colors: {{");
    for (slot, value) in theme.colors.iter() {
        let _ = writeln!(out, "        '{}': {},", slot.css_name(), js_string(&css_hsl(value)));
    }
    let _ = writeln!(out, "      }},");
    let _ = writeln!(out, "      borderRadius: {{");
    let _ = writeln!(out, "        DEFAULT: {},", js_string(&theme.radius));
    let _ = writeln!(out, "      }},");
    let _ = writeln!(out, "      fontFamily: {{");
    let _ = writeln!(out, "        heading: [{}],", quoted_stack(&theme.fonts.heading));
    let _ = writeln!(out, "        body: [{}],", quoted_stack(&theme.fonts.body));
    if let Some(mono) = &theme.fonts.mono {
        let _ = writeln!(out, "        mono: [{}],", quoted_stack(mono));
    }
    let _ = writeln!(out, "      }},");
    let _ = writeln!(out, "      boxShadow: {{");
    let _ = writeln!(out, "        DEFAULT: {},", js_string(&shadow_value(theme.shadow_strength_or_default())));
    let _ = writeln!(out, "      }},");
    let _ = writeln!(out, "      borderWidth: {{");
    let _ = writeln!(out, "        DEFAULT: {},", js_string(theme.border_width_or_default()));
    let _ = writeln!(out, "      }},");
    if let Some(gradient) = &theme.gradients.background {
        let _ = writeln!(out, "      backgroundImage: {{");
        let _ = writeln!(out, "        'theme-gradient': {},", js_string(gradient));
        let _ = writeln!(out, "      }},");
    }
    let _ = writeln!(out, "    }},");
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "}};");
    out
}

/// A JS string literal; JSON string syntax is valid JavaScript
fn js_string(value: &str) -> Value {
    Value::from(value)
}

fn quoted_stack(stack: &str) -> String {
    stack
        .split(',')
        .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|family| !family.is_empty())
        .map(|family| js_string(family).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// SCSS
// =============================================================================

/// `$token: value;` variables
pub fn generate_scss_variables(theme: &ResolvedTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// {} theme tokens", theme.name);
    for (slot, value) in theme.colors.iter() {
        let _ = writeln!(out, "${}: {};", slot.css_name(), css_hsl(value));
    }
    let _ = writeln!(out, "$radius: {};", theme.radius);
    let _ = writeln!(out, "$font-heading: {};", theme.fonts.heading);
    let _ = writeln!(out, "$font-body: {};", theme.fonts.body);
    if let Some(mono) = &theme.fonts.mono {
        let _ = writeln!(out, "$font-mono: {};", mono);
    }
    let _ = writeln!(out, "$shadow: {};", shadow_value(theme.shadow_strength_or_default()));
    let _ = writeln!(out, "$border-width: {};", theme.border_width_or_default());
    let _ = writeln!(out, "$spacing: {};", spacing_unit(theme));
    if let Some(gradient) = &theme.gradients.background {
        let _ = writeln!(out, "$gradient-background: {};", gradient);
    }
    out
}

// =============================================================================
// CSS-in-JS
// =============================================================================

/// `export const theme = { ... };`
pub fn generate_css_in_js(theme: &ResolvedTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "export const theme = {{");
    let _ = writeln!(out, "  name: {},", js_string(&theme.name));
    let _ = writeln!(out, "  mode: '{}',", theme.polarity);
    let _ = writeln!(out, "  colors: {{");
    for (slot, value) in theme.colors.iter() {
        let _ = writeln!(out, "    {}: {},", slot.key(), js_string(&css_hsl(value)));
    }
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "  fonts: {{");
    let _ = writeln!(out, "    heading: {},", js_string(&theme.fonts.heading));
    let _ = writeln!(out, "    body: {},", js_string(&theme.fonts.body));
    if let Some(mono) = &theme.fonts.mono {
        let _ = writeln!(out, "    mono: {},", js_string(mono));
    }
    let _ = writeln!(out, "  }},");
    let _ = writeln!(out, "  radius: {},", js_string(&theme.radius));
    let _ = writeln!(out, "  shadow: {},", js_string(&shadow_value(theme.shadow_strength_or_default())));
    let _ = writeln!(out, "  borderWidth: {},", js_string(theme.border_width_or_default()));
    let _ = writeln!(out, "  spacing: {},", js_string(&spacing_unit(theme)));
    let _ = writeln!(out, "}};");
    out
}

// =============================================================================
// JSON
// =============================================================================

/// Nested `{group: {token: {value, type}}}` design tokens
pub fn generate_design_tokens_json(theme: &ResolvedTheme) -> String {
    let mut colors = Map::new();
    for (slot, value) in theme.colors.iter() {
        let hex = hsl_to_hex(value).unwrap_or_else(|_| css_hsl(value));
        colors.insert(camel_to_kebab(slot.key()), json!({ "value": hex, "type": "color" }));
    }

    let mut typography = Map::new();
    typography.insert(
        "heading".to_string(),
        json!({ "value": theme.fonts.heading, "type": "fontFamily" }),
    );
    typography.insert(
        "body".to_string(),
        json!({ "value": theme.fonts.body, "type": "fontFamily" }),
    );
    if let Some(mono) = &theme.fonts.mono {
        typography.insert("mono".to_string(), json!({ "value": mono, "type": "fontFamily" }));
    }
    if let Some(weight) = &theme.fonts.heading_weight {
        typography.insert(
            "heading-weight".to_string(),
            json!({ "value": weight, "type": "fontWeight" }),
        );
    }
    if let Some(weight) = &theme.fonts.body_weight {
        typography.insert(
            "body-weight".to_string(),
            json!({ "value": weight, "type": "fontWeight" }),
        );
    }

    let tokens = json!({
        "color": colors,
        "typography": typography,
        "radius": { "default": { "value": theme.radius, "type": "dimension" } },
        "shadow": {
            "default": {
                "value": shadow_value(theme.shadow_strength_or_default()),
                "type": "shadow"
            }
        },
        "border": {
            "width": { "value": theme.border_width_or_default(), "type": "dimension" }
        },
        "spacing": { "unit": { "value": spacing_unit(theme), "type": "dimension" } },
    });

    serde_json::to_string_pretty(&tokens).unwrap_or_default()
}

/// Pretty JSON dump of the resolved theme
pub fn generate_theme_json(theme: &ResolvedTheme) -> String {
    serde_json::to_string_pretty(theme).unwrap_or_default()
}

// =============================================================================
// Full Export
// =============================================================================

/// `<link>` tags for the heading/body fonts that are Google web fonts
pub fn google_font_links(theme: &ResolvedTheme) -> Vec<String> {
    let mut families: Vec<&str> = Vec::new();
    for stack in [&theme.fonts.heading, &theme.fonts.body] {
        if is_google_font(stack) {
            let family = primary_family(stack);
            if !families.contains(&family) {
                families.push(family);
            }
        }
    }

    families
        .into_iter()
        .map(|family| {
            format!(
                "<link href=\"https://fonts.googleapis.com/css2?family={}:wght@400;600;700&display=swap\" rel=\"stylesheet\">",
                family.replace(' ', "+")
            )
        })
        .collect()
}

/// Header comment, font links, CSS and Tailwind config in one text block
pub fn full_export_code(theme: &ResolvedTheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/*");
    let _ = writeln!(out, " * {} ({})", theme.name, theme.polarity);
    let _ = writeln!(out, " * {}", theme.description);
    if !theme.characteristics.is_empty() {
        let _ = writeln!(out, " *");
        for characteristic in &theme.characteristics {
            let _ = writeln!(out, " * - {}", characteristic);
        }
    }
    let _ = writeln!(out, " */");
    out.push('\n');

    let links = google_font_links(theme);
    if !links.is_empty() {
        let _ = writeln!(out, "<!-- Fonts -->");
        for link in links {
            let _ = writeln!(out, "{}", link);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "/* CSS */");
    out.push_str(&generate_style_css(theme));
    out.push('\n');
    let _ = writeln!(out, "/* Tailwind */");
    out.push_str(&generate_tailwind_config(theme));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_style;
    use crate::style::{resolve, ColorKey, Gradients, ThemeOverrides};

    fn cupertino() -> ResolvedTheme {
        find_style("cupertino").unwrap().resolved()
    }

    #[test]
    fn test_css_contains_all_vars_and_classes() {
        let css = generate_style_css(&cupertino());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: 211 100% 50%;"));
        assert!(css.contains("--primary-foreground:"));
        assert!(css.contains("--muted-foreground:"));
        assert!(css.contains("--radius: 0.75rem;"));
        for class in [".btn-primary", ".btn-accent", ".card", ".input", ".badge", ".surface", ".text-muted"] {
            assert!(css.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn test_css_reflects_overrides() {
        let base = find_style("cupertino").unwrap();
        let overrides = ThemeOverrides::new()
            .with_color(ColorKey::Primary, "0 100% 50%")
            .with_radius("0rem");
        let css = generate_style_css(&resolve(base, &overrides));
        assert!(css.contains("--primary: 0 100% 50%;"));
        assert!(css.contains("--radius: 0rem;"));
    }

    #[test]
    fn test_css_gradient_only_when_present() {
        assert!(!generate_style_css(&cupertino()).contains("--gradient-background"));
        let cyber = find_style("cyberpunk").unwrap().resolved();
        assert!(generate_style_css(&cyber).contains("--gradient-background: linear-gradient"));
    }

    #[test]
    fn test_tailwind_config_shape() {
        let config = generate_tailwind_config(&cupertino());
        assert!(config.contains("module.exports = {"));
        assert!(config.contains("extend: {"));
        assert!(config.contains("'primary': \"hsl(211 100% 50%)\""));
        assert!(config.trim_end().ends_with("};"));
    }

    fn js_value(output: &str, key: &str) -> String {
        let line = output
            .lines()
            .find(|line| line.trim_start().starts_with(key))
            .unwrap();
        let literal = line.split_once(": ").unwrap().1.trim_end_matches(',');
        serde_json::from_str(literal).unwrap()
    }

    #[test]
    fn test_js_outputs_escape_quotes() {
        let gradient = "url('noise.png'), linear-gradient(#000, #fff)";
        let overrides = ThemeOverrides {
            gradients: Some(Gradients { background: Some(gradient.to_string()) }),
            ..ThemeOverrides::new().with_radius("var(--r, \"4px\")")
        };
        let theme = resolve(find_style("cupertino").unwrap(), &overrides);

        let config = generate_tailwind_config(&theme);
        assert_eq!(js_value(&config, "'theme-gradient'"), gradient);
        assert!(config.contains("'theme-gradient': \"url('noise.png'), linear-gradient(#000, #fff)\","));

        let js = generate_css_in_js(&theme);
        assert_eq!(js_value(&js, "radius"), "var(--r, \"4px\")");
    }

    #[test]
    fn test_scss_variables() {
        let scss = generate_scss_variables(&cupertino());
        assert!(scss.contains("$primary: hsl(211 100% 50%);"));
        assert!(scss.contains("$radius: 0.75rem;"));
    }

    #[test]
    fn test_css_in_js_object() {
        let js = generate_css_in_js(&cupertino());
        assert!(js.starts_with("export const theme = {"));
        assert!(js.contains("primaryForeground: \"hsl("));
        assert!(js.contains("name: \"Cupertino\","));
    }

    #[test]
    fn test_design_tokens_json_parses() {
        let tokens: Value = serde_json::from_str(&generate_design_tokens_json(&cupertino())).unwrap();
        assert_eq!(tokens["color"]["primary"]["value"], "#007bff");
        assert_eq!(tokens["color"]["primary"]["type"], "color");
        assert!(tokens["color"]["primary-foreground"].is_object());
        assert_eq!(tokens["radius"]["default"]["value"], "0.75rem");
    }

    #[test]
    fn test_theme_json_round_trips() {
        let theme = cupertino();
        let parsed: ResolvedTheme = serde_json::from_str(&generate_theme_json(&theme)).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn test_full_export_font_links() {
        let full = full_export_code(&cupertino());
        assert!(full.contains("Cupertino"));
        assert!(!full.contains("fonts.googleapis.com"));

        let editorial = find_style("editorial-serif").unwrap().resolved();
        let full = full_export_code(&editorial);
        assert!(full.contains("family=Playfair+Display"));
        assert!(full.contains("/* Tailwind */"));
    }

    #[test]
    fn test_formatters_are_deterministic() {
        let theme = cupertino();
        for format in ExportFormat::ALL {
            assert_eq!(format.render(&theme), format.render(&theme));
            assert!(!format.file_name().is_empty());
        }
    }

    #[test]
    fn test_zero_shadow_renders_none() {
        assert_eq!(shadow_value(0.0), "none");
        assert!(shadow_value(0.2).contains("0.20"));
    }
}
