//! Core types for Petal

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationDefinition;

/// Kind of design value a token holds
///
/// Token names are unique within a category, so `gold` may exist both as a
/// color and as a spacing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Font,
    Spacing,
    Animation,
}

impl TokenCategory {
    /// All categories, in stylesheet order
    pub const ALL: [TokenCategory; 4] = [
        TokenCategory::Color,
        TokenCategory::Font,
        TokenCategory::Spacing,
        TokenCategory::Animation,
    ];

    /// Lowercase name, also used as the CSS custom property prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Font => "font",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Animation => "animation",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" | "colors" => Ok(TokenCategory::Color),
            "font" | "fonts" | "fontFamily" => Ok(TokenCategory::Font),
            "spacing" => Ok(TokenCategory::Spacing),
            "animation" | "animations" => Ok(TokenCategory::Animation),
            other => Err(format!("unknown token category '{}'", other)),
        }
    }
}

/// Value stored for a token
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A single CSS value (colors, spacing)
    Scalar(String),
    /// Ordered font fallback stack
    FontStack(Vec<String>),
    /// Timing plus keyframe sequence
    Animation(AnimationDefinition),
}

impl TokenValue {
    /// Whether this value has the shape the category expects
    pub fn fits(&self, category: TokenCategory) -> bool {
        matches!(
            (category, self),
            (TokenCategory::Color, TokenValue::Scalar(_))
                | (TokenCategory::Spacing, TokenValue::Scalar(_))
                | (TokenCategory::Font, TokenValue::FontStack(_))
                | (TokenCategory::Animation, TokenValue::Animation(_))
        )
    }

    /// Render the value as it appears on the right of a CSS declaration
    pub fn to_css_value(&self) -> String {
        match self {
            TokenValue::Scalar(value) => value.clone(),
            TokenValue::FontStack(stack) => stack.join(", "),
            TokenValue::Animation(definition) => definition.to_css_value(),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            TokenValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_animation(&self) -> Option<&AnimationDefinition> {
        match self {
            TokenValue::Animation(definition) => Some(definition),
            _ => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Scalar(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Scalar(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(stack: Vec<String>) -> Self {
        TokenValue::FontStack(stack)
    }
}

impl From<AnimationDefinition> for TokenValue {
    fn from(definition: AnimationDefinition) -> Self {
        TokenValue::Animation(definition)
    }
}

/// A named token as seen when iterating a registry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub name: &'a str,
    pub category: TokenCategory,
    pub value: &'a TokenValue,
}

impl Token<'_> {
    /// Name of the CSS custom property exposing this token (`--color-gold`)
    pub fn custom_property(&self) -> String {
        format!("--{}-{}", self.category, self.name)
    }
}

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}
