//! Site configuration module.
//!
//! Handles loading, merging, and validating `site.toml`. The resolved
//! [`SiteConfig`] is constructed once at startup and passed read-only to
//! every renderer — views never reach for ambient global state.
//!
//! ## Config File Location
//!
//! Place `site.toml` in the site source directory:
//!
//! ```text
//! site/
//! ├── site.toml            # Site identity, colors, showcase entries
//! └── img/                 # Logo, favicon, feature images → copied to output
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Bucket Snake"
//! tagline = "An AWS lambda function that grantsss S3 permissionsss at ssscale."
//! base_url = "/bucketsnake/"
//!
//! [colors]
//! primary = "#81d34c"
//! secondary = "#18421a"
//!
//! [[users]]
//! caption = "Bucket Snake"
//! image = "/bucketsnake/img/logo.png"
//! info_link = "https://github.com/Netflix-Skunkworks/bucketsnake"
//! pinned = true
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults (the Bucket Snake site values), so user config
/// files need only specify the values they want to override. Unknown keys
/// are rejected.
///
/// Constructed once at process start, read-only thereafter. The copyright
/// year is never stored here — it is derived from the injected clock at
/// render time (see [`crate::clock`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the splash header and used as logo alt text.
    pub title: String,
    /// One-line tagline shown under the title.
    pub tagline: String,
    /// Project homepage URL.
    pub url: String,
    /// Path prefix prepended to every internally-generated link.
    /// Must start and end with `/`.
    pub base_url: String,
    /// GitHub organization name.
    pub organization: String,
    /// Project identifier.
    pub project: String,
    /// Logo path (relative to `base_url`) for the splash header.
    pub header_icon: String,
    /// Logo path (relative to `base_url`) for the footer home link.
    pub footer_icon: String,
    /// Favicon path (relative to `base_url`).
    pub favicon: String,
    /// Warning banner shown under the splash tagline. Empty = hidden.
    pub warning: String,
    /// Name shown in the footer copyright line.
    pub copyright_holder: String,
    /// Theme colors.
    pub colors: ColorConfig,
    /// Showcased users/projects. Only entries with `pinned = true` appear
    /// on the home page, in their configured order.
    pub users: Vec<ShowcaseEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Bucket Snake".to_string(),
            tagline: "An AWS lambda function that grantsss S3 permissionsss at ssscale."
                .to_string(),
            url: "https://github.com/Netflix-Skunkworks/bucketsnake".to_string(),
            base_url: "/bucketsnake/".to_string(),
            organization: "Netflix-Skunkworks".to_string(),
            project: "bucketsnake".to_string(),
            header_icon: "img/logo.png".to_string(),
            footer_icon: "img/logo.png".to_string(),
            favicon: "img/favicon.png".to_string(),
            warning: "**Bucket Snake is under heavy development and not yet ready \
                      for production usage."
                .to_string(),
            copyright_holder: "Netflix, Inc.".to_string(),
            colors: ColorConfig::default(),
            users: vec![ShowcaseEntry {
                caption: "Bucket Snake".to_string(),
                image: "/bucketsnake/img/logo.png".to_string(),
                info_link: "https://github.com/Netflix-Skunkworks/bucketsnake".to_string(),
                pinned: true,
            }],
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with '/'".into(),
            ));
        }
        if !is_hex_color(&self.colors.primary) {
            return Err(ConfigError::Validation(
                "colors.primary must be a #rgb or #rrggbb hex color".into(),
            ));
        }
        if !is_hex_color(&self.colors.secondary) {
            return Err(ConfigError::Validation(
                "colors.secondary must be a #rgb or #rrggbb hex color".into(),
            ));
        }
        Ok(())
    }

    /// URL for a documentation page: `base_url` + `docs/` + page.
    pub fn doc_url(&self, page: &str) -> String {
        format!("{}docs/{}", self.base_url, page)
    }

    /// Showcase entries flagged for home-page display, in configured order.
    pub fn pinned_users(&self) -> Vec<&ShowcaseEntry> {
        self.users.iter().filter(|u| u.pinned).collect()
    }
}

/// A showcased user/project from the `[[users]]` config list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseEntry {
    /// Display name, used as the image tooltip.
    pub caption: String,
    /// Image path or URL, used verbatim.
    pub image: String,
    /// External link target for the entry.
    pub info_link: String,
    /// Whether the entry appears on the home page.
    #[serde(default)]
    pub pinned: bool,
}

/// Theme colors for the generated site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Primary accent color (header, buttons).
    pub primary: String,
    /// Secondary accent color (hover states, footer).
    pub secondary: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#81d34c".to_string(),
            secondary: "#18421a".to_string(),
        }
    }
}

/// `#rgb` or `#rrggbb` hex color check.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely. In particular
///   a `[[users]]` list in the overlay replaces the default list, it does
///   not append to it.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `site.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("site.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A malformed file is an immediate error —
/// there is no fallback config.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# snakedocs Site Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Site identity
title = "Bucket Snake"
tagline = "An AWS lambda function that grantsss S3 permissionsss at ssscale."
url = "https://github.com/Netflix-Skunkworks/bucketsnake"

# Path prefix prepended to every internally-generated link.
# Must start and end with "/".
base_url = "/bucketsnake/"

organization = "Netflix-Skunkworks"
project = "bucketsnake"

# Image paths, relative to base_url
header_icon = "img/logo.png"
footer_icon = "img/logo.png"
favicon = "img/favicon.png"

# Warning banner shown under the splash tagline. Set to "" to hide.
warning = "**Bucket Snake is under heavy development and not yet ready for production usage."

# Name shown in the footer copyright line (the year is filled in at build time)
copyright_holder = "Netflix, Inc."

# ---------------------------------------------------------------------------
# Theme colors
# ---------------------------------------------------------------------------
[colors]
primary = "#81d34c"
secondary = "#18421a"

# ---------------------------------------------------------------------------
# Showcased users/projects
# ---------------------------------------------------------------------------
# Only entries with pinned = true appear on the home page, in this order.
# Specifying any [[users]] entry replaces the default list.
[[users]]
caption = "Bucket Snake"
image = "/bucketsnake/img/logo.png"
info_link = "https://github.com/Netflix-Skunkworks/bucketsnake"
pinned = true
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
}}"#,
        primary = colors.primary,
        secondary = colors.secondary,
    )
}
