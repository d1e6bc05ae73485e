use crate::error::ThemeError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tokio::fs;

/// Location of the canonical palette, relative to the repository root
pub const PALETTE_PATH: &str = "palettes/everforest.json";

/// Background/foreground roles, one set per variant
pub const BASE_ROLES: &[&str] = &["bg", "bg1", "bg2", "fg"];

/// Accent roles, shared by every variant
pub const ACCENT_ROLES: &[&str] = &["red", "orange", "yellow", "green", "aqua", "blue", "purple"];

/// Gray roles, one set per mode
pub const GRAY_ROLES: &[&str] = &["gray1", "gray2", "gray3"];

/// ANSI roles, exposed to templates as `ansi_<role>`
pub const ANSI_ROLES: &[&str] = &[
    "black",
    "red",
    "orange",
    "yellow",
    "green",
    "aqua",
    "blue",
    "purple",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_purple",
    "bright_aqua",
    "bright_white",
];

/// Flattened placeholder name -> color value for one variant
pub type ColorMap = BTreeMap<String, String>;

/// Base brightness family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Dark, Mode::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intensity level within a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Contrast {
    Hard,
    Medium,
    Soft,
}

impl Contrast {
    pub const ALL: [Contrast; 3] = [Contrast::Hard, Contrast::Medium, Contrast::Soft];

    pub fn as_str(self) -> &'static str {
        match self {
            Contrast::Hard => "hard",
            Contrast::Medium => "medium",
            Contrast::Soft => "soft",
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical color palette.
///
/// Sections are kept as plain maps so a partial palette still loads. Roles
/// missing from a section are left out of the resolved [`ColorMap`] and show
/// up later as unresolved placeholders in validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    /// mode -> contrast -> base role -> color
    pub variants: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
    pub accents: BTreeMap<String, String>,
    /// mode -> gray role -> color
    pub grays: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub ansi: Option<BTreeMap<String, String>>,
}

impl Palette {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load the palette from `<root>/palettes/everforest.json`
    pub async fn load(root: &Path) -> Result<Self, ThemeError> {
        let path = root.join(PALETTE_PATH);

        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| ThemeError::PaletteRead { path: path.clone(), source })?;

        let palette = Self::from_json(&content)
            .map_err(|source| ThemeError::PaletteParse { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), variants = palette.variants.len(), "palette loaded");
        Ok(palette)
    }
}

/// Build the color mapping consumed by substitution for one variant.
///
/// Fails when the palette has no `variants[mode][contrast]` entry; the lookup
/// is never defaulted.
pub fn resolve_colors(palette: &Palette, mode: &str, contrast: &str) -> Result<ColorMap, ThemeError> {
    let base = palette
        .variants
        .get(mode)
        .and_then(|contrasts| contrasts.get(contrast))
        .ok_or_else(|| ThemeError::unknown_variant(mode, contrast))?;

    let mut colors = ColorMap::new();
    copy_roles(&mut colors, base, BASE_ROLES, "");
    copy_roles(&mut colors, &palette.accents, ACCENT_ROLES, "");

    if let Some(grays) = palette.grays.get(mode) {
        copy_roles(&mut colors, grays, GRAY_ROLES, "");
    }

    if let Some(ref ansi) = palette.ansi {
        copy_roles(&mut colors, ansi, ANSI_ROLES, "ansi_");
    }

    Ok(colors)
}

fn copy_roles(
    colors: &mut ColorMap,
    source: &BTreeMap<String, String>,
    roles: &[&str],
    prefix: &str,
) {
    for role in roles {
        if let Some(value) = source.get(*role) {
            colors.insert(format!("{}{}", prefix, role), value.clone());
        }
    }
}
