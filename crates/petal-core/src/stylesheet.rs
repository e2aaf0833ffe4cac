//! CSS text generation
//!
//! A stylesheet has three sections, each optional:
//!
//! ```text
//! /* === Custom Properties === */   :root { --color-gold: #C9A85B; ... }
//! /* === Keyframes === */           @keyframes fadeIn { ... }
//! /* === Utilities === */           .bg-gold { background-color: #C9A85B; }
//! ```

use std::collections::BTreeSet;

use crate::compiler::CompiledUtility;
use crate::error::ThemeResult;
use crate::theme::Theme;
use crate::types::TokenCategory;

/// Categories exposed as CSS custom properties
const PROPERTY_CATEGORIES: [TokenCategory; 3] = [
    TokenCategory::Color,
    TokenCategory::Font,
    TokenCategory::Spacing,
];

/// Renders a theme and a set of utility classes to CSS
#[derive(Debug, Clone)]
pub struct Stylesheet<'t> {
    theme: &'t Theme,
    utilities: Vec<CompiledUtility>,
}

impl<'t> Stylesheet<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            utilities: Vec::new(),
        }
    }

    /// Compile and add a whitespace separated class list.
    ///
    /// Classes already present are skipped. Fails on the first class that
    /// does not compile; the stylesheet is consumed either way.
    pub fn with_classes(mut self, classes: &str) -> ThemeResult<Self> {
        let compiled = self.theme.compiler().compile_all(classes)?;
        for utility in compiled {
            if !self
                .utilities
                .iter()
                .any(|existing| existing.class_name == utility.class_name)
            {
                self.utilities.push(utility);
            }
        }
        Ok(self)
    }

    pub fn utilities(&self) -> &[CompiledUtility] {
        &self.utilities
    }

    /// `:root` block with one custom property per token.
    ///
    /// Aliases are emitted as `var()` references to their canonical token.
    pub fn custom_properties(&self) -> String {
        let registry = self.theme.registry();
        let mut css = String::from(":root {\n");

        for category in PROPERTY_CATEGORIES {
            for token in registry.iter(category) {
                css.push_str(&format!(
                    "  --{}-{}: {};\n",
                    category,
                    escape_ident(token.name),
                    token.value.to_css_value()
                ));
            }
            for (alias, canonical) in self.theme.aliases().iter() {
                if registry.contains(category, canonical) {
                    css.push_str(&format!(
                        "  --{0}-{1}: var(--{0}-{2});\n",
                        category,
                        escape_ident(alias),
                        escape_ident(canonical)
                    ));
                }
            }
        }

        css.push_str("}\n");
        css
    }

    /// One `@keyframes` block per distinct keyframes name
    pub fn keyframes(&self) -> String {
        let mut emitted = BTreeSet::new();
        self.theme
            .animations()
            .iter()
            .filter(|definition| emitted.insert(definition.keyframes_name.clone()))
            .map(|definition| definition.keyframes_css())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rules for the compiled utilities, in insertion order
    pub fn utility_rules(&self) -> String {
        self.utilities
            .iter()
            .map(CompiledUtility::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The complete stylesheet
    pub fn render(&self) -> String {
        let mut sections = vec![format!(
            "/* === Custom Properties === */\n{}",
            self.custom_properties()
        )];

        let keyframes = self.keyframes();
        if !keyframes.is_empty() {
            sections.push(format!("/* === Keyframes === */\n{}", keyframes));
        }
        if !self.utilities.is_empty() {
            sections.push(format!("/* === Utilities === */\n{}", self.utility_rules()));
        }

        sections.join("\n")
    }
}

/// Escape characters that are not valid inside a custom property name
fn escape_ident(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
            escaped.push(ch);
        } else {
            escaped.push('\\');
            escaped.push(ch);
        }
    }
    escaped
}
