//! The theme context
//!
//! A [`Theme`] owns the token registry and alias table. It is built once from
//! a [`ThemeConfig`] and never mutated afterwards, so consumers share it by
//! reference (or `Arc<Theme>`) across threads without locking.
//!
//! Loading is all-or-nothing: the first validation failure aborts the build
//! and no partially populated theme is ever returned.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::alias::AliasResolver;
use crate::animation::AnimationAssembler;
use crate::compiler::ClassNameCompiler;
use crate::config::ThemeConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::registry::TokenRegistry;
use crate::stylesheet::Stylesheet;
use crate::types::{TokenCategory, TokenValue};

/// Immutable, validated set of design tokens
#[derive(Debug, Clone)]
pub struct Theme {
    registry: TokenRegistry,
    aliases: AliasResolver,
}

impl Theme {
    /// Build and validate a theme from configuration.
    ///
    /// Tokens are registered in category order (colors, fonts, spacing,
    /// animations), then aliases, then alias targets are checked.
    pub fn from_config(config: &ThemeConfig) -> ThemeResult<Self> {
        let mut registry = TokenRegistry::new();

        for (name, value) in config.color_tokens() {
            registry.register(TokenCategory::Color, name, value)?;
        }
        for (name, entry) in &config.font_family {
            registry.register(TokenCategory::Font, name.as_str(), entry.stack())?;
        }
        for (name, value) in &config.spacing {
            registry.register(TokenCategory::Spacing, name.as_str(), value.as_str())?;
        }
        for (name, shorthand) in &config.animation {
            let definition = AnimationAssembler::assemble(name, shorthand, &config.keyframes)?;
            registry.register(TokenCategory::Animation, name.as_str(), definition)?;
        }

        let unused_keyframes = config
            .keyframes
            .keys()
            .filter(|keyframes_name| {
                !registry
                    .iter(TokenCategory::Animation)
                    .filter_map(|token| token.value.as_animation())
                    .any(|definition| &definition.keyframes_name == *keyframes_name)
            })
            .count();
        if unused_keyframes > 0 {
            debug!(unused_keyframes, "Keyframes not bound to any animation");
        }

        let mut aliases = AliasResolver::new();
        for (alias, canonical) in &config.aliases {
            aliases.register(alias.as_str(), canonical.as_str())?;
        }
        validate_aliases(&registry, &aliases)?;

        if !config.plugins.is_empty() {
            warn!(
                plugins = config.plugins.len(),
                "Theme plugins are not supported and will be ignored"
            );
        }

        info!(
            colors = registry.count(TokenCategory::Color),
            fonts = registry.count(TokenCategory::Font),
            spacing = registry.count(TokenCategory::Spacing),
            animations = registry.count(TokenCategory::Animation),
            aliases = aliases.len(),
            "Theme loaded"
        );

        Ok(Self { registry, aliases })
    }

    /// Load and validate a theme configuration file
    pub fn from_path(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Loading theme configuration");
        Self::from_config(&ThemeConfig::from_path(path)?)
    }

    /// The bundled wedding theme
    pub fn wedding() -> ThemeResult<Self> {
        Self::from_config(&ThemeConfig::wedding()?)
    }

    /// Look up a token, resolving aliases first.
    ///
    /// A failed lookup names the token as the caller wrote it, followed by
    /// the canonical name when `name` is an alias.
    pub fn lookup(&self, category: TokenCategory, name: &str) -> ThemeResult<&TokenValue> {
        let canonical = self.aliases.resolve_alias(name);
        self.registry
            .lookup(category, canonical)
            .map_err(|err| match err {
                ThemeError::UnknownToken { category, .. } if canonical != name => {
                    ThemeError::UnknownToken {
                        category,
                        name: format!("{} (alias of {})", name, canonical),
                    }
                }
                other => other,
            })
    }

    /// Canonical name for `name`
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.resolve_alias(name)
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn aliases(&self) -> &AliasResolver {
        &self.aliases
    }

    pub fn compiler(&self) -> ClassNameCompiler<'_> {
        ClassNameCompiler::new(self)
    }

    pub fn animations(&self) -> AnimationAssembler<'_> {
        AnimationAssembler::new(self)
    }

    pub fn stylesheet(&self) -> Stylesheet<'_> {
        Stylesheet::new(self)
    }
}

/// Every alias must land on a real token and must not shadow one
fn validate_aliases(registry: &TokenRegistry, aliases: &AliasResolver) -> ThemeResult<()> {
    for (alias, canonical) in aliases.iter() {
        if let Some(category) = TokenCategory::ALL
            .into_iter()
            .find(|category| registry.contains(*category, alias))
        {
            return Err(ThemeError::DuplicateToken {
                category,
                name: alias.to_string(),
            });
        }

        let defined = TokenCategory::ALL
            .into_iter()
            .any(|category| registry.contains(category, canonical));
        if !defined {
            return Err(ThemeError::DanglingAlias {
                alias: alias.to_string(),
                canonical: canonical.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn config(json: &str) -> ThemeConfig {
        ThemeConfig::from_json_str(json).unwrap()
    }

    #[test]
    fn test_wedding_theme_loads() {
        let theme = Theme::wedding().unwrap();
        assert_eq!(
            theme.lookup(TokenCategory::Color, "gold").unwrap(),
            &TokenValue::from("#C9A85B")
        );
        assert_eq!(
            theme.lookup(TokenCategory::Color, "gold-light").unwrap(),
            &TokenValue::from("#E0C98F")
        );
        assert!(theme.registry().count(TokenCategory::Animation) >= 1);
    }

    #[test]
    fn test_lookup_through_alias() {
        let theme = Theme::wedding().unwrap();
        assert_eq!(theme.resolve_alias("accent"), "blush");
        assert_eq!(
            theme.lookup(TokenCategory::Color, "accent").unwrap(),
            theme.lookup(TokenCategory::Color, "blush").unwrap()
        );
    }

    #[test]
    fn test_alias_cycle_rejects_load() {
        let err = Theme::from_config(&config(
            r##"{ "colors": { "blush": "#E8C4C4" }, "aliases": { "accent": "blush", "blush": "accent" } }"##,
        ))
        .unwrap_err();
        assert!(matches!(err, ThemeError::AliasCycle { .. }));
    }

    #[test]
    fn test_dangling_alias_rejects_load() {
        let err = Theme::from_config(&config(r#"{ "aliases": { "accent": "blush" } }"#)).unwrap_err();
        assert!(matches!(err, ThemeError::DanglingAlias { alias, .. } if alias == "accent"));
    }

    #[test]
    fn test_alias_shadowing_token_rejected() {
        let err = Theme::from_config(&config(
            r##"{ "colors": { "blush": "#E8C4C4", "accent": "#F00" }, "aliases": { "accent": "blush" } }"##,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::DuplicateToken { category: TokenCategory::Color, .. }
        ));
    }

    #[test]
    fn test_duplicate_color_after_flattening() {
        // "gold-light" as a plain color collides with the "light" shade of "gold"
        let err = Theme::from_config(&config(
            r##"{ "colors": { "gold": { "DEFAULT": "#C9A85B", "light": "#E0C98F" }, "gold-light": "#EEE" } }"##,
        ))
        .unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateToken { .. }));
    }

    #[test]
    fn test_bad_keyframes_reject_whole_load() {
        let err = Theme::from_config(&config(
            r##"{
                "colors": { "gold": "#C9A85B" },
                "animation": { "fade-in": "fadeIn 1s" },
                "keyframes": { "fadeIn": { "10%": { "opacity": "0" }, "100%": { "opacity": "1" } } }
            }"##,
        ))
        .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidKeyframeSequence { .. }));
    }

    #[test]
    fn test_blank_values_reject_whole_load() {
        for json in [
            r##"{ "colors": { "gold": "#C9A85B", "void": "" } }"##,
            r#"{ "fontFamily": { "none": [] } }"#,
            r#"{ "fontFamily": { "none": "" } }"#,
            r#"{ "spacing": { "gap": "" } }"#,
        ] {
            let err = Theme::from_config(&config(json)).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidValue { .. }), "{}", json);
        }
    }

    #[test]
    fn test_unknown_token_names_the_requested_alias() {
        let theme = Theme::from_config(&config(
            r#"{ "fontFamily": { "heading": ["Georgia", "serif"] }, "aliases": { "primary": "heading" } }"#,
        ))
        .unwrap();

        let err = theme.lookup(TokenCategory::Color, "primary").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown color token: primary (alias of heading)"
        );

        let err = theme.compiler().compile("bg-primary").unwrap_err();
        assert!(err.to_string().contains("primary"));

        let err = theme.lookup(TokenCategory::Color, "lilac").unwrap_err();
        assert_eq!(err.to_string(), "Unknown color token: lilac");
    }

    #[test]
    fn test_plugins_are_ignored() {
        let theme = Theme::from_config(&config(r#"{ "plugins": ["forms"] }"#)).unwrap();
        assert!(theme.registry().is_empty());
    }

    #[test]
    fn test_theme_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Theme>();

        let theme = Arc::new(Theme::wedding().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let theme = Arc::clone(&theme);
                std::thread::spawn(move || {
                    theme
                        .compiler()
                        .compile("bg-gold")
                        .map(|compiled| compiled.declarations[0].value.clone())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "#C9A85B");
        }
    }
}
