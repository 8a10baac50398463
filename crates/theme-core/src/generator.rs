//! Randomized and prompt-derived theme generation
//!
//! Both paths produce a fully populated [`ThemeOverrides`]: all six editable
//! colors, heading and body fonts, radius and shadow strength. Generation
//! never merges with existing overrides; color locking is the caller's job.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::color::Hsl;
use crate::style::{ColorKey, FontOverrides, ThemeOverrides, ThemePolarity};

// =============================================================================
// Tables
// =============================================================================

/// Curated `(heading, body)` font pairings
pub const FONT_PAIRINGS: &[(&str, &str)] = &[
    ("Inter, sans-serif", "Inter, sans-serif"),
    ("'Playfair Display', Georgia, serif", "'Source Serif 4', Georgia, serif"),
    ("'Space Grotesk', sans-serif", "'IBM Plex Sans', sans-serif"),
    ("Montserrat, sans-serif", "'DM Sans', sans-serif"),
    ("'Cormorant Garamond', serif", "Lora, serif"),
    ("Poppins, sans-serif", "Nunito, sans-serif"),
    ("Merriweather, serif", "Roboto, sans-serif"),
    ("'JetBrains Mono', monospace", "'IBM Plex Sans', sans-serif"),
    ("Outfit, sans-serif", "Inter, sans-serif"),
    ("Quicksand, sans-serif", "Nunito, sans-serif"),
];

/// Radius choices from square to pill-like
pub const RADIUS_LADDER: [&str; 6] = ["0rem", "0.25rem", "0.5rem", "0.75rem", "1rem", "1.5rem"];

/// Shadow strength choices
pub const SHADOW_STEPS: [f32; 4] = [0.1, 0.2, 0.3, 0.4];

const SATURATION_RANGE: std::ops::RangeInclusive<u8> = 60..=95;
const LIGHTNESS_RANGE: std::ops::RangeInclusive<u8> = 40..=60;
const HINT_JITTER: i32 = 10;

// =============================================================================
// Harmony
// =============================================================================

/// How the accent hue relates to the primary hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyStrategy {
    /// Neighbouring hue (+30)
    Analogous,
    /// Opposite hue (+180)
    Complementary,
    /// One third around the wheel (+120)
    Triadic,
    /// Any offset in 30..=330
    Random,
}

impl HarmonyStrategy {
    /// Strategies picked when none is requested
    pub const DEFAULT_CHOICES: [HarmonyStrategy; 3] = [
        HarmonyStrategy::Analogous,
        HarmonyStrategy::Complementary,
        HarmonyStrategy::Triadic,
    ];

    /// Hue offset for the accent color
    pub fn offset<R: Rng + ?Sized>(&self, rng: &mut R) -> u16 {
        match self {
            HarmonyStrategy::Analogous => 30,
            HarmonyStrategy::Complementary => 180,
            HarmonyStrategy::Triadic => 120,
            HarmonyStrategy::Random => rng.gen_range(30..=330),
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyStrategy::Analogous => "analogous",
            HarmonyStrategy::Complementary => "complementary",
            HarmonyStrategy::Triadic => "triadic",
            HarmonyStrategy::Random => "random",
        }
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// Hints that constrain generation
///
/// Every field is optional; absent hints are drawn at random.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRecipe {
    /// Target base hue
    pub hue: Option<u16>,
    /// Forced polarity
    pub polarity: Option<ThemePolarity>,
    /// Forced radius
    pub radius: Option<&'static str>,
    /// Forced harmony
    pub strategy: Option<HarmonyStrategy>,
}

const HUE_KEYWORDS: &[(&str, u16)] = &[
    ("red", 0),
    ("fire", 8),
    ("sunset", 20),
    ("orange", 28),
    ("autumn", 32),
    ("gold", 45),
    ("sunny", 48),
    ("yellow", 55),
    ("lime", 85),
    ("forest", 135),
    ("nature", 125),
    ("green", 140),
    ("mint", 160),
    ("teal", 178),
    ("ocean", 195),
    ("sea", 195),
    ("sky", 205),
    ("blue", 220),
    ("corporate", 215),
    ("indigo", 240),
    ("purple", 270),
    ("lavender", 265),
    ("magenta", 300),
    ("pink", 330),
    ("rose", 345),
];

impl ThemeRecipe {
    /// Derive hints from a free-text prompt
    ///
    /// The first recognized word of each kind wins.
    pub fn from_prompt(prompt: &str) -> Self {
        let mut recipe = ThemeRecipe::default();
        let normalized = prompt.to_lowercase();

        for word in normalized.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            if recipe.hue.is_none() {
                recipe.hue = HUE_KEYWORDS
                    .iter()
                    .find(|(keyword, _)| *keyword == word)
                    .map(|(_, hue)| *hue);
            }

            if recipe.polarity.is_none() {
                recipe.polarity = match word {
                    "dark" | "night" | "midnight" | "moody" | "noir" => Some(ThemePolarity::Dark),
                    "light" | "bright" | "airy" | "clean" | "day" => Some(ThemePolarity::Light),
                    _ => None,
                };
            }

            if recipe.radius.is_none() {
                recipe.radius = match word {
                    "sharp" | "square" | "brutal" | "brutalist" => Some("0rem"),
                    "rounded" | "soft" | "friendly" => Some("1rem"),
                    "pill" | "bubbly" => Some("1.5rem"),
                    _ => None,
                };
            }

            if recipe.strategy.is_none() {
                recipe.strategy = match word {
                    "calm" | "harmonious" | "analogous" | "subtle" => Some(HarmonyStrategy::Analogous),
                    "bold" | "contrast" | "vibrant" | "complementary" => {
                        Some(HarmonyStrategy::Complementary)
                    }
                    "playful" | "triadic" | "colorful" => Some(HarmonyStrategy::Triadic),
                    "wild" | "chaotic" | "random" => Some(HarmonyStrategy::Random),
                    _ => None,
                };
            }
        }

        recipe
    }

    /// Whether the prompt produced no hints at all
    pub fn is_empty(&self) -> bool {
        *self == ThemeRecipe::default()
    }
}

// =============================================================================
// Generation
// =============================================================================

fn neutrals(hue: u16, polarity: ThemePolarity) -> [(ColorKey, Hsl); 4] {
    match polarity {
        ThemePolarity::Light => [
            (ColorKey::Background, Hsl::new(hue, 30, 98)),
            (ColorKey::Foreground, Hsl::new(hue, 20, 10)),
            (ColorKey::Surface, Hsl::new(hue, 25, 100)),
            (ColorKey::Muted, Hsl::new(hue, 20, 92)),
        ],
        ThemePolarity::Dark => [
            (ColorKey::Background, Hsl::new(hue, 25, 8)),
            (ColorKey::Foreground, Hsl::new(hue, 15, 95)),
            (ColorKey::Surface, Hsl::new(hue, 20, 12)),
            (ColorKey::Muted, Hsl::new(hue, 15, 18)),
        ],
    }
}

fn jittered_hue<R: Rng + ?Sized>(rng: &mut R, hint: u16) -> u16 {
    let jitter = rng.gen_range(-HINT_JITTER..=HINT_JITTER);
    (hint as i32 + jitter).rem_euclid(360) as u16
}

/// Generate overrides following a recipe
pub fn generate_with_recipe<R: Rng + ?Sized>(rng: &mut R, recipe: &ThemeRecipe) -> ThemeOverrides {
    let hue = match recipe.hue {
        Some(hint) => jittered_hue(rng, hint),
        None => rng.gen_range(0..360),
    };
    let strategy = recipe.strategy.unwrap_or_else(|| {
        *HarmonyStrategy::DEFAULT_CHOICES
            .choose(rng)
            .unwrap_or(&HarmonyStrategy::Analogous)
    });
    let offset = strategy.offset(rng);
    let saturation = rng.gen_range(SATURATION_RANGE);
    let lightness = rng.gen_range(LIGHTNESS_RANGE);
    let polarity = recipe.polarity.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            ThemePolarity::Dark
        } else {
            ThemePolarity::Light
        }
    });
    let (heading, body) = *FONT_PAIRINGS.choose(rng).unwrap_or(&FONT_PAIRINGS[0]);
    let radius = recipe
        .radius
        .unwrap_or_else(|| RADIUS_LADDER.choose(rng).copied().unwrap_or(RADIUS_LADDER[2]));
    let shadow_strength = *SHADOW_STEPS.choose(rng).unwrap_or(&SHADOW_STEPS[1]);

    let primary = Hsl::new(hue, saturation, lightness);
    let accent = primary.rotate(offset);

    debug!(
        hue,
        strategy = strategy.as_str(),
        polarity = polarity.as_str(),
        "Generated theme"
    );

    let mut overrides = ThemeOverrides::new()
        .with_color(ColorKey::Primary, primary.to_string())
        .with_color(ColorKey::Accent, accent.to_string())
        .with_radius(radius)
        .with_shadow_strength(shadow_strength);
    for (key, value) in neutrals(hue, polarity) {
        overrides.set_color(key, value.to_string());
    }
    overrides.fonts = Some(FontOverrides {
        heading: Some(heading.to_string()),
        body: Some(body.to_string()),
        ..Default::default()
    });
    overrides
}

/// Generate overrides with an injected RNG
pub fn generate_theme_with<R: Rng + ?Sized>(
    rng: &mut R,
    strategy: Option<HarmonyStrategy>,
) -> ThemeOverrides {
    let recipe = ThemeRecipe { strategy, ..Default::default() };
    generate_with_recipe(rng, &recipe)
}

/// Generate overrides with the thread RNG
pub fn generate_random_theme(strategy: Option<HarmonyStrategy>) -> ThemeOverrides {
    generate_theme_with(&mut rand::thread_rng(), strategy)
}

/// Lowercase, trim and collapse whitespace
fn normalize_prompt(prompt: &str) -> String {
    prompt.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// djb2 over the bytes of a string
fn djb2(input: &str) -> u64 {
    let mut hash: u64 = 5381;
    for byte in input.bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    hash
}

/// Deterministically generate overrides from a free-text prompt
///
/// The same prompt (ignoring case and extra whitespace) always yields the
/// same overrides.
pub fn generate_from_prompt(prompt: &str) -> ThemeOverrides {
    let normalized = normalize_prompt(prompt);
    let recipe = ThemeRecipe::from_prompt(&normalized);
    let mut rng = StdRng::seed_from_u64(djb2(&normalized));
    generate_with_recipe(&mut rng, &recipe)
}
