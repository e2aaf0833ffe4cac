//! Keyframes and keyframe sequence validation

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};

/// A CSS property value as written in configuration (`"0"` or `0`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Text(text) => f.write_str(text),
            CssValue::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Keyframe rules of one `@keyframes` block: selector → property → value.
///
/// Selectors are `from`, `to`, `N%`, or comma separated lists of those.
pub type KeyframeRules = BTreeMap<String, BTreeMap<String, CssValue>>;

/// Style snapshot at one point of an animation timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Position in the timeline, 0 to 100
    pub offset_percent: f64,
    /// CSS property → value, property names in kebab-case
    pub properties: BTreeMap<String, String>,
}

impl Keyframe {
    pub fn new(offset_percent: f64) -> Self {
        Self {
            offset_percent,
            properties: BTreeMap::new(),
        }
    }

    /// Add a property; camelCase names are converted to kebab-case
    pub fn with_property(mut self, property: &str, value: impl Into<String>) -> Self {
        self.properties.insert(kebab_case(property), value.into());
        self
    }

    /// Render as a line inside an `@keyframes` block
    pub fn to_css(&self) -> String {
        let body = self
            .properties
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}% {{ {} }}", self.offset_percent, body)
    }
}

/// Expand configuration rules into a keyframe sequence sorted by offset.
///
/// A selector list such as `0%, 100%` yields one keyframe per offset, each
/// carrying the same properties.
pub fn keyframes_from_rules(animation: &str, rules: &KeyframeRules) -> ThemeResult<Vec<Keyframe>> {
    let mut keyframes = Vec::new();

    for (selector, properties) in rules {
        for offset in parse_selector(selector)
            .map_err(|reason| ThemeError::invalid_keyframes(animation, reason))?
        {
            let keyframe = properties
                .iter()
                .fold(Keyframe::new(offset), |frame, (property, value)| {
                    frame.with_property(property, value.to_string())
                });
            keyframes.push(keyframe);
        }
    }

    // Map order is lexical ("100%" before "50%"); timeline order is numeric
    keyframes.sort_by(|a, b| a.offset_percent.total_cmp(&b.offset_percent));
    Ok(keyframes)
}

/// Check that a sequence starts at 0%, ends at 100% and never goes backwards.
pub fn validate_sequence(animation: &str, keyframes: &[Keyframe]) -> ThemeResult<()> {
    let (first, last) = match (keyframes.first(), keyframes.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ThemeError::invalid_keyframes(animation, "no keyframes")),
    };

    if let Some(bad) = keyframes
        .iter()
        .find(|k| !(0.0..=100.0).contains(&k.offset_percent))
    {
        return Err(ThemeError::invalid_keyframes(
            animation,
            format!("offset {}% is outside 0%..100%", bad.offset_percent),
        ));
    }

    if let Some(pair) = keyframes
        .windows(2)
        .find(|pair| pair[1].offset_percent < pair[0].offset_percent)
    {
        return Err(ThemeError::invalid_keyframes(
            animation,
            format!(
                "offsets must not decrease ({}% follows {}%)",
                pair[1].offset_percent, pair[0].offset_percent
            ),
        ));
    }

    if first.offset_percent != 0.0 {
        return Err(ThemeError::invalid_keyframes(
            animation,
            format!("first keyframe must be at 0%, found {}%", first.offset_percent),
        ));
    }
    if last.offset_percent != 100.0 {
        return Err(ThemeError::invalid_keyframes(
            animation,
            format!("last keyframe must be at 100%, found {}%", last.offset_percent),
        ));
    }

    Ok(())
}

fn parse_selector(selector: &str) -> Result<Vec<f64>, String> {
    selector
        .split(',')
        .map(str::trim)
        .map(|part| match part {
            "from" => Ok(0.0),
            "to" => Ok(100.0),
            _ => {
                let offset = part
                    .strip_suffix('%')
                    .and_then(|number| number.trim().parse::<f64>().ok())
                    .filter(|offset| offset.is_finite())
                    .ok_or_else(|| format!("invalid keyframe selector '{}'", part))?;
                if !(0.0..=100.0).contains(&offset) {
                    return Err(format!("offset {}% is outside 0%..100%", offset));
                }
                Ok(offset)
            }
        })
        .collect()
}

/// `backgroundPosition` → `background-position`; kebab-case passes through
pub(crate) fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
