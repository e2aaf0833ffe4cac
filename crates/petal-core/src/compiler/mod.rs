//! Utility class compilation
//!
//! Turns class names such as `bg-gold/90` or `md:hover:text-blush` into
//! concrete declarations using the tokens of a [`Theme`].

mod color;
mod utility;

pub use color::apply_opacity;
pub use utility::{ParsedUtility, Utility, Variant};

use tracing::trace;

use crate::animation::AnimationAssembler;
use crate::error::ThemeResult;
use crate::theme::Theme;
use crate::types::{StyleDeclaration, TokenCategory};

/// A utility class expanded into declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUtility {
    pub class_name: String,
    pub variants: Vec<Variant>,
    pub declarations: Vec<StyleDeclaration>,
}

impl CompiledUtility {
    /// The first declaration; every utility produces at least one
    pub fn declaration(&self) -> Option<&StyleDeclaration> {
        self.declarations.first()
    }

    /// Escaped class selector with state pseudo-classes appended
    pub fn selector(&self) -> String {
        let mut selector = format!(".{}", escape_class_name(&self.class_name));
        for pseudo in self.variants.iter().filter_map(Variant::pseudo_class) {
            selector.push_str(pseudo);
        }
        selector
    }

    /// Media condition for breakpoint variants, if any
    pub fn media_query(&self) -> Option<String> {
        let conditions: Vec<String> = self
            .variants
            .iter()
            .filter_map(Variant::min_width_px)
            .map(|px| format!("(min-width: {}px)", px))
            .collect();
        if conditions.is_empty() {
            None
        } else {
            Some(conditions.join(" and "))
        }
    }

    /// Render the complete rule, wrapped in `@media` when needed
    pub fn to_css(&self) -> String {
        let indent = if self.media_query().is_some() { "  " } else { "" };

        let mut rule = format!("{}{} {{\n", indent, self.selector());
        for declaration in &self.declarations {
            rule.push_str(&format!("{}  {}\n", indent, declaration));
        }
        rule.push_str(&format!("{}}}\n", indent));

        match self.media_query() {
            Some(query) => format!("@media {} {{\n{}}}\n", query, rule),
            None => rule,
        }
    }
}

/// Compiles utility class names against a theme
#[derive(Debug, Clone, Copy)]
pub struct ClassNameCompiler<'t> {
    theme: &'t Theme,
}

impl<'t> ClassNameCompiler<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    /// Compile one class name.
    ///
    /// The token name is passed through the theme's aliases before lookup.
    ///
    /// # Errors
    ///
    /// - `ThemeError::UnrecognizedUtility` if the class does not match the grammar
    /// - `ThemeError::UnknownToken` if the token is missing from the theme
    /// - `ThemeError::UnknownAnimation` for an unknown `animate-*` name
    pub fn compile(&self, class: &str) -> ThemeResult<CompiledUtility> {
        let parsed = ParsedUtility::parse(class)?;
        let category = parsed.utility.category();

        let value = match category {
            TokenCategory::Animation => AnimationAssembler::new(self.theme)
                .resolve(&parsed.token)?
                .to_css_value(),
            _ => self.theme.lookup(category, &parsed.token)?.to_css_value(),
        };
        let value = match parsed.opacity {
            Some(opacity) => apply_opacity(&value, opacity),
            None => value,
        };

        trace!(class, %value, "Compiled utility");

        Ok(CompiledUtility {
            class_name: class.to_string(),
            variants: parsed.variants,
            declarations: parsed
                .utility
                .properties()
                .iter()
                .map(|property| StyleDeclaration::new(*property, value.clone()))
                .collect(),
        })
    }

    /// Compile a whitespace separated class list, skipping repeats.
    ///
    /// Stops at the first class that fails to compile.
    pub fn compile_all(&self, classes: &str) -> ThemeResult<Vec<CompiledUtility>> {
        let mut seen = std::collections::HashSet::new();
        classes
            .split_whitespace()
            .filter(|class| seen.insert(*class))
            .map(|class| self.compile(class))
            .collect()
    }
}

/// Escape a class name for use in a CSS selector
fn escape_class_name(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() + 4);
    for (i, ch) in class.chars().enumerate() {
        if i == 0 && ch.is_ascii_digit() {
            // Identifiers cannot start with a digit; use a code point escape
            escaped.push_str(&format!("\\{:x} ", u32::from(ch)));
        } else if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
            escaped.push(ch);
        } else {
            escaped.push('\\');
            escaped.push(ch);
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    fn theme() -> Theme {
        Theme::wedding().unwrap()
    }

    #[test]
    fn test_compile_bg_gold() {
        let theme = theme();
        let compiler = ClassNameCompiler::new(&theme);

        let compiled = compiler.compile("bg-gold").unwrap();
        assert_eq!(
            compiled.declaration(),
            Some(&StyleDeclaration::new("background-color", "#C9A85B"))
        );
    }

    #[test]
    fn test_compile_opacity() {
        let theme = theme();
        let compiled = ClassNameCompiler::new(&theme).compile("bg-gold/90").unwrap();
        assert_eq!(
            compiled.declarations,
            vec![StyleDeclaration::new("background-color", "rgb(201 168 91 / 0.9)")]
        );
    }

    #[test]
    fn test_compile_font_heading() {
        let theme = theme();
        let compiled = ClassNameCompiler::new(&theme).compile("font-heading").unwrap();
        assert_eq!(
            compiled.declaration(),
            Some(&StyleDeclaration::new("font-family", "Playfair Display, Georgia, serif"))
        );
    }

    #[test]
    fn test_alias_applied_before_lookup() {
        let theme = theme();
        let compiler = ClassNameCompiler::new(&theme);
        let via_alias = compiler.compile("text-accent").unwrap();
        let direct = compiler.compile("text-blush").unwrap();
        assert_eq!(via_alias.declarations, direct.declarations);
    }

    #[test]
    fn test_multi_property_spacing() {
        let theme = theme();
        let compiled = ClassNameCompiler::new(&theme).compile("px-section").unwrap();
        let properties: Vec<&str> = compiled
            .declarations
            .iter()
            .map(|d| d.property.as_str())
            .collect();
        assert_eq!(properties, vec!["padding-left", "padding-right"]);
        assert!(compiled.declarations.iter().all(|d| d.value == "6rem"));
    }

    #[test]
    fn test_compile_animation() {
        let theme = theme();
        let compiled = ClassNameCompiler::new(&theme).compile("animate-fade-in").unwrap();
        assert_eq!(
            compiled.declaration(),
            Some(&StyleDeclaration::new("animation", "fadeIn 800ms ease-out forwards"))
        );
    }

    #[test]
    fn test_compile_errors() {
        let theme = theme();
        let compiler = ClassNameCompiler::new(&theme);

        assert!(matches!(
            compiler.compile("shadow-gold").unwrap_err(),
            ThemeError::UnrecognizedUtility { .. }
        ));
        assert!(matches!(
            compiler.compile("bg-mauve").unwrap_err(),
            ThemeError::UnknownToken { category: TokenCategory::Color, .. }
        ));
        assert!(matches!(
            compiler.compile("animate-wiggle").unwrap_err(),
            ThemeError::UnknownAnimation(_)
        ));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let theme = theme();
        let compiler = ClassNameCompiler::new(&theme);
        assert_eq!(
            compiler.compile("hover:bg-blush/50").unwrap(),
            compiler.compile("hover:bg-blush/50").unwrap()
        );
    }

    #[test]
    fn test_rule_rendering() {
        let theme = theme();
        let compiler = ClassNameCompiler::new(&theme);

        assert_eq!(
            compiler.compile("bg-gold/90").unwrap().to_css(),
            ".bg-gold\\/90 {\n  background-color: rgb(201 168 91 / 0.9);\n}\n"
        );
        assert_eq!(
            compiler.compile("md:hover:text-gold").unwrap().to_css(),
            "@media (min-width: 768px) {\n  .md\\:hover\\:text-gold:hover {\n    color: #C9A85B;\n  }\n}\n"
        );
    }

    #[test]
    fn test_escape_leading_digit() {
        assert_eq!(escape_class_name("2xl:p-4"), "\\32 xl\\:p-4");
    }

    #[test]
    fn test_compile_all_dedupes_and_fails_fast() {
        let theme = theme();
        let compiler = ClassNameCompiler::new(&theme);

        let compiled = compiler
            .compile_all("bg-ivory  text-charcoal bg-ivory\nfont-body")
            .unwrap();
        assert_eq!(compiled.len(), 3);

        assert!(compiler.compile_all("bg-ivory bg-nope").is_err());
    }
}
