//! Property-based tests for token registration, aliases and compilation
//!
//! Uses proptest to verify invariants of the registry, the alias table and
//! the class-name compiler.

use std::collections::BTreeMap;

use petal_core::compiler::apply_opacity;
use petal_core::{
    AliasResolver, Theme, ThemeConfig, ThemeError, TokenCategory, TokenRegistry, TokenValue,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Token names as they appear in configuration
fn token_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,6})?").expect("valid regex")
}

fn category_strategy() -> impl Strategy<Value = TokenCategory> {
    prop_oneof![
        Just(TokenCategory::Color),
        Just(TokenCategory::Spacing),
        Just(TokenCategory::Font),
    ]
}

fn hex_color_strategy() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

/// A value with the right shape for the category
fn value_for(category: TokenCategory, seed: &str) -> TokenValue {
    match category {
        TokenCategory::Font => TokenValue::FontStack(vec![seed.to_string(), "serif".to_string()]),
        _ => TokenValue::Scalar(format!("{}-value", seed)),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every registered token reads back exactly as provided
    #[test]
    fn register_lookup_roundtrip(
        entries in prop::collection::btree_map(
            (category_strategy(), token_name_strategy()),
            token_name_strategy(),
            1..30,
        )
    ) {
        let mut registry = TokenRegistry::new();
        for ((category, name), seed) in &entries {
            registry.register(*category, name.as_str(), value_for(*category, seed)).unwrap();
        }

        prop_assert_eq!(registry.len(), entries.len());
        for ((category, name), seed) in &entries {
            let value = registry.lookup(*category, name).unwrap();
            prop_assert_eq!(value, &value_for(*category, seed));
        }
    }

    /// Registering the same name twice in a category always fails
    #[test]
    fn duplicate_registration_fails(category in category_strategy(), name in token_name_strategy()) {
        let mut registry = TokenRegistry::new();
        registry.register(category, name.as_str(), value_for(category, "a")).unwrap();
        let is_duplicate = matches!(
            registry.register(category, name.as_str(), value_for(category, "b")),
            Err(ThemeError::DuplicateToken { .. })
        );
        prop_assert!(is_duplicate);
    }

    /// resolve_alias(resolve_alias(x)) == resolve_alias(x), whatever was accepted
    #[test]
    fn alias_resolution_is_idempotent(
        pairs in prop::collection::vec((token_name_strategy(), token_name_strategy()), 0..20),
        probes in prop::collection::vec(token_name_strategy(), 1..10)
    ) {
        let mut aliases = AliasResolver::new();
        for (alias, canonical) in &pairs {
            // Cycles and duplicates are rejected; the table stays consistent
            let _ = aliases.register(alias.as_str(), canonical.as_str());
        }

        for name in pairs.iter().flat_map(|(a, c)| [a, c]).chain(probes.iter()) {
            let once = aliases.resolve_alias(name);
            prop_assert_eq!(aliases.resolve_alias(once), once);
        }
    }

    /// No accepted alias ever resolves to itself
    #[test]
    fn accepted_aliases_never_loop(
        pairs in prop::collection::vec((token_name_strategy(), token_name_strategy()), 0..20)
    ) {
        let mut aliases = AliasResolver::new();
        for (alias, canonical) in &pairs {
            let _ = aliases.register(alias.as_str(), canonical.as_str());
        }
        for (alias, canonical) in aliases.iter() {
            prop_assert_ne!(alias, canonical);
            prop_assert!(!aliases.is_alias(canonical));
        }
    }

    /// Hex colors at any opacity become rgb() with the same channels
    #[test]
    fn opacity_keeps_channels((r, g, b) in hex_color_strategy(), opacity in 0u8..=100) {
        let hex = format!("#{:02X}{:02X}{:02X}", r, g, b);
        let expected_prefix = format!("rgb({} {} {} / ", r, g, b);
        let applied = apply_opacity(&hex, opacity);
        prop_assert!(applied.starts_with(&expected_prefix));
    }

    /// Compiling any configured color through any color prefix yields its value
    #[test]
    fn color_utilities_use_token_value(
        colors in prop::collection::btree_map(token_name_strategy(), hex_color_strategy(), 1..10),
        prefix in prop::sample::select(vec!["bg", "text", "border", "outline", "fill", "stroke", "decoration"])
    ) {
        let hex: BTreeMap<String, String> = colors
            .iter()
            .map(|(name, (r, g, b))| (name.clone(), format!("#{:02X}{:02X}{:02X}", r, g, b)))
            .collect();
        let config = ThemeConfig::from_json_str(
            &serde_json::json!({ "colors": hex }).to_string()
        ).unwrap();
        let theme = Theme::from_config(&config).unwrap();
        let compiler = theme.compiler();

        for (name, value) in &hex {
            let compiled = compiler.compile(&format!("{}-{}", prefix, name)).unwrap();
            prop_assert_eq!(&compiled.declarations[0].value, value);
        }
    }
}
