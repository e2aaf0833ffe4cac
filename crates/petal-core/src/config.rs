//! Theme configuration file model
//!
//! The configuration mirrors a utility-CSS theme extension:
//!
//! ```json
//! {
//!   "colors": { "gold": "#C9A85B", "blush": { "DEFAULT": "#E8C4C4", "deep": "#D4A5A5" } },
//!   "fontFamily": { "heading": ["Playfair Display", "Georgia", "serif"] },
//!   "spacing": { "section": "6rem" },
//!   "animation": { "fade-in": "fadeIn 0.8s ease-out forwards" },
//!   "keyframes": { "fadeIn": { "0%": { "opacity": "0" }, "100%": { "opacity": "1" } } },
//!   "aliases": { "accent": "blush" },
//!   "plugins": []
//! }
//! ```
//!
//! Unknown top-level groups are rejected rather than silently ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::KeyframeRules;
use crate::error::ThemeResult;

/// Bundled wedding theme
const WEDDING_THEME: &str = include_str!("../themes/wedding.json");

/// Key of the unsuffixed shade inside a color group
const DEFAULT_SHADE: &str = "DEFAULT";

/// A color entry: a single value or a group of named shades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Value(String),
    Shades(BTreeMap<String, String>),
}

/// A font entry: a comma separated string or an explicit stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontEntry {
    List(String),
    Stack(Vec<String>),
}

impl FontEntry {
    /// The fallback stack with surrounding whitespace removed
    pub fn stack(&self) -> Vec<String> {
        match self {
            FontEntry::List(list) => list
                .split(',')
                .map(|family| family.trim().to_string())
                .filter(|family| !family.is_empty())
                .collect(),
            FontEntry::Stack(stack) => stack.iter().map(|family| family.trim().to_string()).collect(),
        }
    }
}

/// Parsed theme configuration, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub colors: BTreeMap<String, ColorEntry>,
    #[serde(default)]
    pub font_family: BTreeMap<String, FontEntry>,
    #[serde(default)]
    pub spacing: BTreeMap<String, String>,
    /// Animation name → CSS animation shorthand
    #[serde(default)]
    pub animation: BTreeMap<String, String>,
    /// Keyframes name → keyframe rules
    #[serde(default)]
    pub keyframes: BTreeMap<String, KeyframeRules>,
    /// Accepted for compatibility; entries are not interpreted
    #[serde(default)]
    pub plugins: Vec<serde_json::Value>,
    /// Alias name → canonical token name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file
    pub fn from_path(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The bundled wedding theme configuration
    pub fn wedding() -> ThemeResult<Self> {
        Self::from_json_str(WEDDING_THEME)
    }

    /// Colors with shade groups flattened to `group-shade` names.
    ///
    /// The `DEFAULT` shade takes the bare group name.
    pub fn color_tokens(&self) -> Vec<(String, String)> {
        let mut tokens = Vec::new();
        for (name, entry) in &self.colors {
            match entry {
                ColorEntry::Value(value) => tokens.push((name.clone(), value.clone())),
                ColorEntry::Shades(shades) => {
                    for (shade, value) in shades {
                        let token = if shade == DEFAULT_SHADE {
                            name.clone()
                        } else {
                            format!("{}-{}", name, shade)
                        };
                        tokens.push((token, value.clone()));
                    }
                }
            }
        }
        tokens
    }

    /// Serialize back to pretty JSON
    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
