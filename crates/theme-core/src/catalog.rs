//! Built-in design style catalog
//!
//! The catalog is a fixed, ordered list of [`DesignStyle`] values. It is
//! defined as a static table and materialized once on first access; callers
//! only ever see shared references.

use std::sync::OnceLock;

use crate::style::{Colors, DesignStyle, Fonts, Gradients, ThemePolarity};

// =============================================================================
// Categories
// =============================================================================

/// Gallery categories as `(id, label)` pairs
pub const STYLE_CATEGORIES: [(&str, &str); 6] = [
    ("minimalist", "Minimalist"),
    ("tech", "Tech"),
    ("editorial", "Editorial"),
    ("playful", "Playful"),
    ("luxury", "Luxury"),
    ("retro", "Retro"),
];

/// Display label of a category id
pub fn category_label(id: &str) -> Option<&'static str> {
    STYLE_CATEGORIES
        .iter()
        .find(|(category, _)| *category == id)
        .map(|(_, label)| *label)
}

/// Web fonts served by Google Fonts, used to suggest `<link>` tags on export
pub const GOOGLE_FONTS: &[&str] = &[
    "Inter",
    "Roboto",
    "Roboto Mono",
    "Playfair Display",
    "Merriweather",
    "Lora",
    "Libre Baskerville",
    "Space Grotesk",
    "Space Mono",
    "JetBrains Mono",
    "IBM Plex Sans",
    "IBM Plex Mono",
    "Fira Code",
    "Nunito",
    "Quicksand",
    "Poppins",
    "Cormorant Garamond",
    "DM Sans",
    "Montserrat",
    "Outfit",
    "Orbitron",
    "Rajdhani",
    "Source Serif 4",
];

/// First family of a CSS font stack, without quotes
pub fn primary_family(stack: &str) -> &str {
    stack
        .split(',')
        .next()
        .unwrap_or(stack)
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
}

/// Whether the first family of a stack is a known Google web font
pub fn is_google_font(stack: &str) -> bool {
    let family = primary_family(stack);
    GOOGLE_FONTS.iter().any(|font| font.eq_ignore_ascii_case(family))
}

// =============================================================================
// Style Table
// =============================================================================

struct StyleDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    polarity: ThemePolarity,
    category: &'static [&'static str],
    heading: &'static str,
    body: &'static str,
    mono: Option<&'static str>,
    weights: (&'static str, &'static str),
    // primary, primaryFg, accent, accentFg, background, foreground, surface,
    // surfaceFg, muted, mutedFg, border, success, warning, error
    colors: [&'static str; 14],
    radius: &'static str,
    shadow_strength: f32,
    border_width: &'static str,
    density: f32,
    gradient: Option<&'static str>,
    characteristics: &'static [&'static str],
}

const SYSTEM_SANS: &str = "-apple-system, BlinkMacSystemFont, 'SF Pro Text', 'Helvetica Neue', sans-serif";

const STYLE_DEFS: &[StyleDef] = &[
    StyleDef {
        id: "cupertino",
        name: "Cupertino",
        description: "Clean, airy interface with system fonts and vibrant blue accents",
        icon: "apple",
        polarity: ThemePolarity::Light,
        category: &["minimalist", "tech"],
        heading: SYSTEM_SANS,
        body: SYSTEM_SANS,
        mono: Some("'SF Mono', Menlo, monospace"),
        weights: ("600", "400"),
        colors: [
            "211 100% 50%", "0 0% 100%", "142 71% 45%", "0 0% 100%",
            "0 0% 100%", "240 10% 4%", "240 5% 96%", "240 10% 4%",
            "240 5% 92%", "240 4% 40%", "240 6% 90%",
            "142 71% 45%", "38 92% 50%", "0 84% 60%",
        ],
        radius: "0.75rem",
        shadow_strength: 0.15,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Frosted surfaces", "Generous whitespace", "System typography"],
    },
    StyleDef {
        id: "material",
        name: "Material",
        description: "Bold primary colors, elevation shadows and geometric type",
        icon: "layers",
        polarity: ThemePolarity::Light,
        category: &["tech"],
        heading: "Roboto, sans-serif",
        body: "Roboto, sans-serif",
        mono: Some("'Roboto Mono', monospace"),
        weights: ("500", "400"),
        colors: [
            "262 52% 47%", "0 0% 100%", "174 100% 29%", "0 0% 100%",
            "0 0% 98%", "0 0% 13%", "0 0% 100%", "0 0% 13%",
            "0 0% 93%", "0 0% 38%", "0 0% 88%",
            "122 39% 49%", "36 100% 50%", "4 90% 58%",
        ],
        radius: "0.25rem",
        shadow_strength: 0.3,
        border_width: "0px",
        density: 1.0,
        gradient: None,
        characteristics: &["Elevation layers", "Ink ripples", "Bold color"],
    },
    StyleDef {
        id: "minimal-mono",
        name: "Minimal Mono",
        description: "Black and white with nothing extra",
        icon: "square",
        polarity: ThemePolarity::Light,
        category: &["minimalist"],
        heading: "Inter, sans-serif",
        body: "Inter, sans-serif",
        mono: Some("'JetBrains Mono', monospace"),
        weights: ("600", "400"),
        colors: [
            "0 0% 9%", "0 0% 98%", "0 0% 32%", "0 0% 98%",
            "0 0% 100%", "0 0% 9%", "0 0% 98%", "0 0% 9%",
            "0 0% 96%", "0 0% 45%", "0 0% 90%",
            "142 60% 35%", "38 80% 45%", "0 72% 45%",
        ],
        radius: "0.375rem",
        shadow_strength: 0.05,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Monochrome", "Hairline borders", "Quiet"],
    },
    StyleDef {
        id: "editorial-serif",
        name: "Editorial Serif",
        description: "Magazine-style layouts with elegant serif headlines",
        icon: "book-open",
        polarity: ThemePolarity::Light,
        category: &["editorial"],
        heading: "'Playfair Display', Georgia, serif",
        body: "'Source Serif 4', Georgia, serif",
        mono: None,
        weights: ("700", "400"),
        colors: [
            "356 70% 38%", "0 0% 100%", "30 45% 40%", "0 0% 100%",
            "40 33% 97%", "20 14% 12%", "40 30% 99%", "20 14% 12%",
            "40 20% 91%", "20 8% 38%", "35 15% 84%",
            "145 45% 32%", "35 85% 42%", "0 70% 45%",
        ],
        radius: "0.125rem",
        shadow_strength: 0.1,
        border_width: "1px",
        density: 1.1,
        gradient: None,
        characteristics: &["Serif headlines", "Warm paper tones", "Long-form reading"],
    },
    StyleDef {
        id: "newspaper",
        name: "Newspaper",
        description: "Dense columns, ink-on-newsprint contrast",
        icon: "newspaper",
        polarity: ThemePolarity::Light,
        category: &["editorial", "retro"],
        heading: "'Libre Baskerville', 'Times New Roman', serif",
        body: "Merriweather, Georgia, serif",
        mono: None,
        weights: ("700", "400"),
        colors: [
            "0 0% 10%", "45 30% 95%", "0 65% 35%", "0 0% 100%",
            "45 30% 94%", "0 0% 10%", "45 25% 97%", "0 0% 10%",
            "45 18% 86%", "0 0% 30%", "0 0% 20%",
            "140 40% 30%", "35 80% 38%", "0 65% 38%",
        ],
        radius: "0rem",
        shadow_strength: 0.0,
        border_width: "1px",
        density: 0.9,
        gradient: None,
        characteristics: &["Column rules", "Newsprint", "High density"],
    },
    StyleDef {
        id: "brutalist",
        name: "Brutalist",
        description: "Raw, loud and unapologetically structural",
        icon: "box",
        polarity: ThemePolarity::Light,
        category: &["retro", "playful"],
        heading: "'Space Grotesk', sans-serif",
        body: "'Space Mono', monospace",
        mono: Some("'Space Mono', monospace"),
        weights: ("700", "400"),
        colors: [
            "52 100% 50%", "0 0% 0%", "220 100% 50%", "0 0% 100%",
            "0 0% 100%", "0 0% 0%", "0 0% 100%", "0 0% 0%",
            "0 0% 92%", "0 0% 20%", "0 0% 0%",
            "120 100% 30%", "30 100% 45%", "0 100% 45%",
        ],
        radius: "0rem",
        shadow_strength: 0.4,
        border_width: "3px",
        density: 1.0,
        gradient: None,
        characteristics: &["Hard shadows", "Thick borders", "Clashing color"],
    },
    StyleDef {
        id: "terminal",
        name: "Terminal",
        description: "Phosphor green on black, straight from the console",
        icon: "terminal",
        polarity: ThemePolarity::Dark,
        category: &["tech", "retro"],
        heading: "'JetBrains Mono', monospace",
        body: "'JetBrains Mono', monospace",
        mono: Some("'JetBrains Mono', monospace"),
        weights: ("700", "400"),
        colors: [
            "120 100% 45%", "0 0% 0%", "180 100% 40%", "0 0% 0%",
            "0 0% 4%", "120 100% 75%", "0 0% 8%", "120 100% 75%",
            "120 20% 12%", "120 30% 55%", "120 40% 20%",
            "120 100% 45%", "50 100% 50%", "0 100% 60%",
        ],
        radius: "0rem",
        shadow_strength: 0.0,
        border_width: "1px",
        density: 0.9,
        gradient: None,
        characteristics: &["Monospace everything", "Phosphor glow", "Keyboard first"],
    },
    StyleDef {
        id: "midnight",
        name: "Midnight",
        description: "Deep navy surfaces with soft indigo highlights",
        icon: "moon",
        polarity: ThemePolarity::Dark,
        category: &["minimalist", "tech"],
        heading: "Inter, sans-serif",
        body: "Inter, sans-serif",
        mono: Some("'Fira Code', monospace"),
        weights: ("600", "400"),
        colors: [
            "239 84% 67%", "0 0% 100%", "199 89% 48%", "0 0% 100%",
            "222 47% 7%", "210 40% 96%", "222 40% 11%", "210 40% 96%",
            "217 33% 17%", "215 20% 65%", "217 33% 20%",
            "142 70% 45%", "38 92% 50%", "0 84% 60%",
        ],
        radius: "0.5rem",
        shadow_strength: 0.3,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Low glare", "Indigo accents", "Layered navy"],
    },
    StyleDef {
        id: "dracula",
        name: "Dracula",
        description: "The beloved dark palette with purple and pink",
        icon: "ghost",
        polarity: ThemePolarity::Dark,
        category: &["tech", "playful"],
        heading: "'Fira Code', monospace",
        body: "Inter, sans-serif",
        mono: Some("'Fira Code', monospace"),
        weights: ("600", "400"),
        colors: [
            "265 89% 78%", "231 15% 18%", "326 100% 74%", "231 15% 18%",
            "231 15% 18%", "60 30% 96%", "232 14% 23%", "60 30% 96%",
            "232 14% 28%", "225 27% 70%", "232 14% 31%",
            "135 94% 65%", "65 92% 76%", "0 100% 67%",
        ],
        radius: "0.5rem",
        shadow_strength: 0.2,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Vampire purple", "Neon pink", "Code friendly"],
    },
    StyleDef {
        id: "nord",
        name: "Nord",
        description: "Arctic, north-bluish calm",
        icon: "snowflake",
        polarity: ThemePolarity::Dark,
        category: &["minimalist", "tech"],
        heading: "Inter, sans-serif",
        body: "Inter, sans-serif",
        mono: Some("'JetBrains Mono', monospace"),
        weights: ("600", "400"),
        colors: [
            "193 43% 67%", "220 16% 22%", "210 34% 63%", "220 16% 22%",
            "220 16% 22%", "218 27% 94%", "222 16% 28%", "218 27% 94%",
            "220 17% 32%", "219 28% 78%", "220 16% 36%",
            "92 28% 65%", "40 71% 73%", "354 42% 56%",
        ],
        radius: "0.375rem",
        shadow_strength: 0.15,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Frost blues", "Muted contrast", "Calm"],
    },
    StyleDef {
        id: "solarized-light",
        name: "Solarized Light",
        description: "Precision colors tuned for readability",
        icon: "sun",
        polarity: ThemePolarity::Light,
        category: &["tech", "retro"],
        heading: "'IBM Plex Sans', sans-serif",
        body: "'IBM Plex Sans', sans-serif",
        mono: Some("'IBM Plex Mono', monospace"),
        weights: ("600", "400"),
        colors: [
            "205 69% 36%", "44 87% 94%", "175 59% 30%", "44 87% 94%",
            "44 87% 94%", "192 81% 14%", "46 42% 88%", "192 81% 14%",
            "46 42% 85%", "194 14% 35%", "46 30% 78%",
            "68 100% 24%", "45 100% 30%", "1 71% 45%",
        ],
        radius: "0.25rem",
        shadow_strength: 0.1,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Warm base", "Selective contrast", "Reading comfort"],
    },
    StyleDef {
        id: "pastel-dream",
        name: "Pastel Dream",
        description: "Soft pastels and rounded, friendly shapes",
        icon: "cloud",
        polarity: ThemePolarity::Light,
        category: &["playful"],
        heading: "Quicksand, sans-serif",
        body: "Nunito, sans-serif",
        mono: None,
        weights: ("700", "400"),
        colors: [
            "270 60% 55%", "0 0% 100%", "330 70% 58%", "0 0% 100%",
            "270 60% 98%", "270 30% 16%", "0 0% 100%", "270 30% 16%",
            "270 50% 94%", "270 15% 42%", "270 40% 88%",
            "150 50% 40%", "40 90% 48%", "350 70% 55%",
        ],
        radius: "1.25rem",
        shadow_strength: 0.15,
        border_width: "1px",
        density: 1.1,
        gradient: None,
        characteristics: &["Rounded corners", "Lavender tints", "Gentle"],
    },
    StyleDef {
        id: "candy-pop",
        name: "Candy Pop",
        description: "Saturated sweets and bubbly type",
        icon: "candy",
        polarity: ThemePolarity::Light,
        category: &["playful"],
        heading: "Poppins, sans-serif",
        body: "Poppins, sans-serif",
        mono: None,
        weights: ("800", "400"),
        colors: [
            "330 90% 50%", "0 0% 100%", "190 95% 40%", "0 0% 100%",
            "50 100% 97%", "330 40% 15%", "0 0% 100%", "330 40% 15%",
            "330 80% 94%", "330 20% 40%", "330 60% 85%",
            "150 70% 38%", "40 100% 48%", "0 85% 55%",
        ],
        radius: "1rem",
        shadow_strength: 0.35,
        border_width: "2px",
        density: 1.0,
        gradient: None,
        characteristics: &["Hot pink", "Chunky buttons", "Bouncy"],
    },
    StyleDef {
        id: "luxury-noir",
        name: "Luxury Noir",
        description: "Black lacquer with gold leaf details",
        icon: "gem",
        polarity: ThemePolarity::Dark,
        category: &["luxury"],
        heading: "'Cormorant Garamond', serif",
        body: "Montserrat, sans-serif",
        mono: None,
        weights: ("600", "300"),
        colors: [
            "43 74% 52%", "0 0% 5%", "40 30% 70%", "0 0% 5%",
            "0 0% 5%", "40 20% 92%", "0 0% 9%", "40 20% 92%",
            "0 0% 14%", "40 10% 62%", "43 30% 22%",
            "150 40% 45%", "43 74% 52%", "0 60% 55%",
        ],
        radius: "0.125rem",
        shadow_strength: 0.25,
        border_width: "1px",
        density: 1.2,
        gradient: None,
        characteristics: &["Gold accents", "Thin serif display", "Spacious"],
    },
    StyleDef {
        id: "champagne",
        name: "Champagne",
        description: "Ivory and blush with refined serif type",
        icon: "wine",
        polarity: ThemePolarity::Light,
        category: &["luxury", "editorial"],
        heading: "'Cormorant Garamond', serif",
        body: "Lora, serif",
        mono: None,
        weights: ("600", "400"),
        colors: [
            "30 40% 40%", "0 0% 100%", "350 35% 55%", "0 0% 100%",
            "40 50% 97%", "30 20% 15%", "40 40% 99%", "30 20% 15%",
            "35 35% 92%", "30 10% 42%", "35 25% 85%",
            "140 30% 38%", "38 70% 45%", "355 55% 48%",
        ],
        radius: "0.5rem",
        shadow_strength: 0.1,
        border_width: "1px",
        density: 1.15,
        gradient: None,
        characteristics: &["Ivory", "Blush accents", "Understated"],
    },
    StyleDef {
        id: "forest",
        name: "Forest",
        description: "Moss, bark and earthy calm",
        icon: "tree",
        polarity: ThemePolarity::Light,
        category: &["minimalist", "editorial"],
        heading: "Merriweather, serif",
        body: "'DM Sans', sans-serif",
        mono: None,
        weights: ("700", "400"),
        colors: [
            "150 45% 28%", "0 0% 100%", "35 55% 42%", "0 0% 100%",
            "90 20% 97%", "150 30% 12%", "90 15% 99%", "150 30% 12%",
            "100 15% 90%", "150 10% 38%", "100 12% 82%",
            "140 50% 32%", "38 80% 42%", "5 65% 45%",
        ],
        radius: "0.5rem",
        shadow_strength: 0.15,
        border_width: "1px",
        density: 1.0,
        gradient: None,
        characteristics: &["Earth tones", "Organic", "Grounded"],
    },
    StyleDef {
        id: "ocean",
        name: "Ocean",
        description: "Teal depths and sea-foam highlights",
        icon: "waves",
        polarity: ThemePolarity::Light,
        category: &["minimalist", "playful"],
        heading: "Outfit, sans-serif",
        body: "'DM Sans', sans-serif",
        mono: None,
        weights: ("600", "400"),
        colors: [
            "195 85% 35%", "0 0% 100%", "170 60% 38%", "0 0% 100%",
            "190 50% 97%", "200 50% 12%", "0 0% 100%", "200 50% 12%",
            "190 40% 91%", "200 20% 38%", "190 30% 84%",
            "160 60% 35%", "40 90% 45%", "0 75% 50%",
        ],
        radius: "0.75rem",
        shadow_strength: 0.2,
        border_width: "1px",
        density: 1.0,
        gradient: Some("linear-gradient(180deg, hsl(190 50% 97%), hsl(195 60% 90%))"),
        characteristics: &["Cool blues", "Airy", "Fluid"],
    },
    StyleDef {
        id: "sunset",
        name: "Sunset",
        description: "Warm oranges fading into dusky purple",
        icon: "sunset",
        polarity: ThemePolarity::Dark,
        category: &["playful", "retro"],
        heading: "Montserrat, sans-serif",
        body: "'DM Sans', sans-serif",
        mono: None,
        weights: ("700", "400"),
        colors: [
            "24 95% 58%", "260 40% 10%", "330 80% 62%", "260 40% 10%",
            "260 40% 10%", "30 60% 94%", "260 35% 15%", "30 60% 94%",
            "260 25% 22%", "30 20% 70%", "260 25% 26%",
            "140 55% 50%", "45 95% 55%", "0 85% 62%",
        ],
        radius: "0.75rem",
        shadow_strength: 0.3,
        border_width: "1px",
        density: 1.0,
        gradient: Some("linear-gradient(160deg, hsl(260 40% 10%), hsl(330 45% 18%), hsl(24 60% 20%))"),
        characteristics: &["Warm glow", "Dusky gradient", "Nostalgic"],
    },
    StyleDef {
        id: "cyberpunk",
        name: "Cyberpunk",
        description: "Neon magenta and cyan over a night city",
        icon: "zap",
        polarity: ThemePolarity::Dark,
        category: &["tech", "retro"],
        heading: "Orbitron, sans-serif",
        body: "Rajdhani, sans-serif",
        mono: Some("'Space Mono', monospace"),
        weights: ("700", "500"),
        colors: [
            "320 100% 60%", "0 0% 0%", "180 100% 50%", "0 0% 0%",
            "250 40% 6%", "180 100% 92%", "250 35% 10%", "180 100% 92%",
            "250 30% 16%", "250 20% 68%", "320 80% 35%",
            "150 100% 50%", "55 100% 55%", "350 100% 60%",
        ],
        radius: "0.125rem",
        shadow_strength: 0.4,
        border_width: "1px",
        density: 0.95,
        gradient: Some("linear-gradient(135deg, hsl(250 40% 6%), hsl(280 60% 14%))"),
        characteristics: &["Neon glow", "Angular type", "Scanlines"],
    },
];

impl StyleDef {
    fn to_style(&self) -> DesignStyle {
        let [
            primary,
            primary_foreground,
            accent,
            accent_foreground,
            background,
            foreground,
            surface,
            surface_foreground,
            muted,
            muted_foreground,
            border,
            success,
            warning,
            error,
        ] = self.colors.map(String::from);

        DesignStyle {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            polarity: self.polarity,
            category: self.category.iter().map(|c| c.to_string()).collect(),
            fonts: Fonts {
                heading: self.heading.to_string(),
                body: self.body.to_string(),
                mono: self.mono.map(String::from),
                heading_weight: Some(self.weights.0.to_string()),
                body_weight: Some(self.weights.1.to_string()),
            },
            colors: Colors {
                primary,
                primary_foreground,
                accent,
                accent_foreground,
                background,
                foreground,
                surface,
                surface_foreground,
                muted,
                muted_foreground,
                border,
                success,
                warning,
                error,
            },
            radius: self.radius.to_string(),
            shadow_strength: Some(self.shadow_strength),
            border_width: Some(self.border_width.to_string()),
            density: Some(self.density),
            gradients: self.gradient.map(|g| Gradients { background: Some(g.to_string()) }),
            characteristics: self.characteristics.iter().map(|c| c.to_string()).collect(),
        }
    }
}

// =============================================================================
// Lookup
// =============================================================================

static DESIGN_STYLES: OnceLock<Vec<DesignStyle>> = OnceLock::new();

/// All built-in styles, in gallery order
pub fn design_styles() -> &'static [DesignStyle] {
    DESIGN_STYLES.get_or_init(|| STYLE_DEFS.iter().map(StyleDef::to_style).collect())
}

/// Look up a style by id
pub fn find_style(id: &str) -> Option<&'static DesignStyle> {
    design_styles().iter().find(|style| style.id == id)
}

/// The style selected on first launch and after unrecoverable load failures
pub fn default_style() -> &'static DesignStyle {
    &design_styles()[0]
}

/// Styles tagged with a category, in gallery order
pub fn styles_in_category(category: &str) -> Vec<&'static DesignStyle> {
    design_styles()
        .iter()
        .filter(|style| style.has_category(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hsl;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_order() {
        let styles = design_styles();
        assert_eq!(styles.len(), 19);
        assert_eq!(default_style().id, "cupertino");
        assert_eq!(styles[0].id, "cupertino");
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = design_styles().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), design_styles().len());
    }

    #[test]
    fn test_cupertino_colors() {
        let cupertino = find_style("cupertino").unwrap();
        assert_eq!(cupertino.colors.primary, "211 100% 50%");
        assert_eq!(cupertino.colors.accent, "142 71% 45%");
        assert_eq!(cupertino.polarity, ThemePolarity::Light);
    }

    #[test]
    fn test_find_style_unknown() {
        assert!(find_style("does-not-exist").is_none());
    }

    #[test]
    fn test_every_color_is_valid_hsl() {
        for style in design_styles() {
            for (slot, value) in style.colors.iter() {
                assert!(is_valid_hsl(value), "{}.{} = {:?}", style.id, slot.key(), value);
            }
        }
    }

    #[test]
    fn test_categories_are_known_and_populated() {
        let known: HashSet<_> = STYLE_CATEGORIES.iter().map(|(id, _)| *id).collect();
        for style in design_styles() {
            assert!(!style.category.is_empty());
            for category in &style.category {
                assert!(known.contains(category.as_str()), "{} has {}", style.id, category);
            }
        }
        for (id, _) in STYLE_CATEGORIES {
            assert!(!styles_in_category(id).is_empty(), "empty category {}", id);
        }
        assert_eq!(category_label("luxury"), Some("Luxury"));
    }

    #[test]
    fn test_both_polarities_present() {
        assert!(design_styles().iter().any(|s| s.is_dark()));
        assert!(design_styles().iter().any(|s| !s.is_dark()));
    }

    #[test]
    fn test_shadow_strength_in_range() {
        for style in design_styles() {
            let strength = style.shadow_strength.unwrap_or_default();
            assert!((0.0..=1.0).contains(&strength));
        }
    }

    #[test]
    fn test_primary_family() {
        assert_eq!(primary_family("'Playfair Display', Georgia, serif"), "Playfair Display");
        assert_eq!(primary_family("Inter"), "Inter");
        assert!(is_google_font("'Playfair Display', Georgia, serif"));
        assert!(!is_google_font(SYSTEM_SANS));
    }
}
