//! Utility class grammar
//!
//! ```text
//! class    := (variant ":")* utility "-" token ("/" opacity)?
//! variant  := hover | focus | focus-visible | active | disabled | visited
//!           | first | last | sm | md | lg | xl | 2xl
//! opacity  := 0..=100            (color utilities only)
//! ```
//!
//! The utility prefix is matched longest-first, so `gap-x-4` parses as the
//! `gap-x` utility with token `4` rather than `gap` with token `x-4`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ThemeError, ThemeResult};
use crate::types::TokenCategory;

/// Recognized utility prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    // Color
    Background,
    Text,
    Border,
    Outline,
    Fill,
    Stroke,
    Decoration,
    // Font
    FontFamily,
    // Spacing
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Gap,
    GapX,
    GapY,
    Width,
    Height,
    MinHeight,
    MaxWidth,
    // Animation
    Animate,
}

impl Utility {
    pub const ALL: [Utility; 30] = [
        Utility::Background,
        Utility::Text,
        Utility::Border,
        Utility::Outline,
        Utility::Fill,
        Utility::Stroke,
        Utility::Decoration,
        Utility::FontFamily,
        Utility::Padding,
        Utility::PaddingX,
        Utility::PaddingY,
        Utility::PaddingTop,
        Utility::PaddingRight,
        Utility::PaddingBottom,
        Utility::PaddingLeft,
        Utility::Margin,
        Utility::MarginX,
        Utility::MarginY,
        Utility::MarginTop,
        Utility::MarginRight,
        Utility::MarginBottom,
        Utility::MarginLeft,
        Utility::Gap,
        Utility::GapX,
        Utility::GapY,
        Utility::Width,
        Utility::Height,
        Utility::MinHeight,
        Utility::MaxWidth,
        Utility::Animate,
    ];

    /// Class name prefix, without the trailing `-`
    pub fn prefix(&self) -> &'static str {
        match self {
            Utility::Background => "bg",
            Utility::Text => "text",
            Utility::Border => "border",
            Utility::Outline => "outline",
            Utility::Fill => "fill",
            Utility::Stroke => "stroke",
            Utility::Decoration => "decoration",
            Utility::FontFamily => "font",
            Utility::Padding => "p",
            Utility::PaddingX => "px",
            Utility::PaddingY => "py",
            Utility::PaddingTop => "pt",
            Utility::PaddingRight => "pr",
            Utility::PaddingBottom => "pb",
            Utility::PaddingLeft => "pl",
            Utility::Margin => "m",
            Utility::MarginX => "mx",
            Utility::MarginY => "my",
            Utility::MarginTop => "mt",
            Utility::MarginRight => "mr",
            Utility::MarginBottom => "mb",
            Utility::MarginLeft => "ml",
            Utility::Gap => "gap",
            Utility::GapX => "gap-x",
            Utility::GapY => "gap-y",
            Utility::Width => "w",
            Utility::Height => "h",
            Utility::MinHeight => "min-h",
            Utility::MaxWidth => "max-w",
            Utility::Animate => "animate",
        }
    }

    /// Token category the utility draws its value from
    pub fn category(&self) -> TokenCategory {
        match self {
            Utility::Background
            | Utility::Text
            | Utility::Border
            | Utility::Outline
            | Utility::Fill
            | Utility::Stroke
            | Utility::Decoration => TokenCategory::Color,
            Utility::FontFamily => TokenCategory::Font,
            Utility::Animate => TokenCategory::Animation,
            _ => TokenCategory::Spacing,
        }
    }

    /// CSS properties the utility sets, in output order
    pub fn properties(&self) -> &'static [&'static str] {
        match self {
            Utility::Background => &["background-color"],
            Utility::Text => &["color"],
            Utility::Border => &["border-color"],
            Utility::Outline => &["outline-color"],
            Utility::Fill => &["fill"],
            Utility::Stroke => &["stroke"],
            Utility::Decoration => &["text-decoration-color"],
            Utility::FontFamily => &["font-family"],
            Utility::Padding => &["padding"],
            Utility::PaddingX => &["padding-left", "padding-right"],
            Utility::PaddingY => &["padding-top", "padding-bottom"],
            Utility::PaddingTop => &["padding-top"],
            Utility::PaddingRight => &["padding-right"],
            Utility::PaddingBottom => &["padding-bottom"],
            Utility::PaddingLeft => &["padding-left"],
            Utility::Margin => &["margin"],
            Utility::MarginX => &["margin-left", "margin-right"],
            Utility::MarginY => &["margin-top", "margin-bottom"],
            Utility::MarginTop => &["margin-top"],
            Utility::MarginRight => &["margin-right"],
            Utility::MarginBottom => &["margin-bottom"],
            Utility::MarginLeft => &["margin-left"],
            Utility::Gap => &["gap"],
            Utility::GapX => &["column-gap"],
            Utility::GapY => &["row-gap"],
            Utility::Width => &["width"],
            Utility::Height => &["height"],
            Utility::MinHeight => &["min-height"],
            Utility::MaxWidth => &["max-width"],
            Utility::Animate => &["animation"],
        }
    }

    /// Split `body` into the longest matching utility and its token
    fn split(body: &str) -> Option<(Utility, &str)> {
        Utility::ALL
            .iter()
            .filter_map(|utility| {
                body.strip_prefix(utility.prefix())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .map(|token| (*utility, token))
            })
            .max_by_key(|(utility, _)| utility.prefix().len())
    }
}

/// State or breakpoint a utility is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Hover,
    Focus,
    FocusVisible,
    Active,
    Disabled,
    Visited,
    First,
    Last,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Variant {
    /// Pseudo-class appended to the selector, for state variants
    pub fn pseudo_class(&self) -> Option<&'static str> {
        match self {
            Variant::Hover => Some(":hover"),
            Variant::Focus => Some(":focus"),
            Variant::FocusVisible => Some(":focus-visible"),
            Variant::Active => Some(":active"),
            Variant::Disabled => Some(":disabled"),
            Variant::Visited => Some(":visited"),
            Variant::First => Some(":first-child"),
            Variant::Last => Some(":last-child"),
            _ => None,
        }
    }

    /// Minimum viewport width, for breakpoint variants
    pub fn min_width_px(&self) -> Option<u32> {
        match self {
            Variant::Sm => Some(640),
            Variant::Md => Some(768),
            Variant::Lg => Some(1024),
            Variant::Xl => Some(1280),
            Variant::Xxl => Some(1536),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Hover => "hover",
            Variant::Focus => "focus",
            Variant::FocusVisible => "focus-visible",
            Variant::Active => "active",
            Variant::Disabled => "disabled",
            Variant::Visited => "visited",
            Variant::First => "first",
            Variant::Last => "last",
            Variant::Sm => "sm",
            Variant::Md => "md",
            Variant::Lg => "lg",
            Variant::Xl => "xl",
            Variant::Xxl => "2xl",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hover" => Ok(Variant::Hover),
            "focus" => Ok(Variant::Focus),
            "focus-visible" => Ok(Variant::FocusVisible),
            "active" => Ok(Variant::Active),
            "disabled" => Ok(Variant::Disabled),
            "visited" => Ok(Variant::Visited),
            "first" => Ok(Variant::First),
            "last" => Ok(Variant::Last),
            "sm" => Ok(Variant::Sm),
            "md" => Ok(Variant::Md),
            "lg" => Ok(Variant::Lg),
            "xl" => Ok(Variant::Xl),
            "2xl" => Ok(Variant::Xxl),
            other => Err(format!("unknown variant '{}'", other)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class name broken into its grammar parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUtility {
    pub variants: Vec<Variant>,
    pub utility: Utility,
    pub token: String,
    /// Opacity modifier in percent
    pub opacity: Option<u8>,
}

impl ParsedUtility {
    /// Parse a class name.
    ///
    /// # Errors
    ///
    /// `ThemeError::UnrecognizedUtility` for an unknown prefix or variant, a
    /// missing token, or a malformed or misplaced opacity modifier.
    pub fn parse(class: &str) -> ThemeResult<Self> {
        let mut segments: Vec<&str> = class.split(':').collect();
        let body = segments.pop().unwrap_or_default();

        let variants = segments
            .into_iter()
            .map(|segment| {
                segment
                    .parse::<Variant>()
                    .map_err(|reason| ThemeError::unrecognized(class, reason))
            })
            .collect::<ThemeResult<Vec<_>>>()?;

        let (body, opacity) = match body.rsplit_once('/') {
            Some((body, modifier)) => (body, Some(parse_opacity(class, modifier)?)),
            None => (body, None),
        };

        let (utility, token) = Utility::split(body).ok_or_else(|| {
            ThemeError::unrecognized(class, format!("no utility matches '{}'", body))
        })?;

        if token.is_empty() {
            return Err(ThemeError::unrecognized(class, "missing token name"));
        }
        if opacity.is_some() && utility.category() != TokenCategory::Color {
            return Err(ThemeError::unrecognized(
                class,
                format!("opacity modifier is only valid on color utilities, not '{}'", utility.prefix()),
            ));
        }

        Ok(Self {
            variants,
            utility,
            token: token.to_string(),
            opacity,
        })
    }
}

fn parse_opacity(class: &str, modifier: &str) -> ThemeResult<u8> {
    modifier
        .parse::<u8>()
        .ok()
        .filter(|opacity| *opacity <= 100)
        .ok_or_else(|| {
            ThemeError::unrecognized(class, format!("opacity must be 0-100, found '{}'", modifier))
        })
}
