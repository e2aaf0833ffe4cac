//! Token registry keyed by category and semantic name
//!
//! The registry is populated once while a [`Theme`](crate::Theme) is being
//! assembled and is read-only afterwards. Names are stored in sorted maps so
//! that iteration, and therefore generated CSS, is deterministic.

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{ThemeError, ThemeResult};
use crate::types::{Token, TokenCategory, TokenValue};

/// Named design tokens grouped by category
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: BTreeMap<TokenCategory, BTreeMap<String, TokenValue>>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token.
    ///
    /// # Errors
    ///
    /// - `ThemeError::DuplicateToken` if `name` already exists in `category`
    /// - `ThemeError::InvalidValue` if the value's shape does not fit the
    ///   category (e.g. a scalar registered as a font), or if it is blank
    ///   (an empty scalar, an empty font stack, or a blank stack entry)
    pub fn register(
        &mut self,
        category: TokenCategory,
        name: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> ThemeResult<()> {
        let name = name.into();
        let value = value.into();

        if name.is_empty() {
            return Err(ThemeError::invalid_value(
                category.as_str(),
                "token name must not be empty",
            ));
        }
        if !value.fits(category) {
            return Err(ThemeError::invalid_value(
                &name,
                format!("value does not fit the {} category", category),
            ));
        }
        match &value {
            TokenValue::Scalar(scalar) if scalar.trim().is_empty() => {
                return Err(ThemeError::invalid_value(&name, "value must not be blank"));
            }
            TokenValue::FontStack(stack) if stack.is_empty() => {
                return Err(ThemeError::invalid_value(&name, "font stack must not be empty"));
            }
            TokenValue::FontStack(stack) if stack.iter().any(|family| family.trim().is_empty()) => {
                return Err(ThemeError::invalid_value(
                    &name,
                    "font stack contains a blank family",
                ));
            }
            _ => {}
        }

        let bucket = self.tokens.entry(category).or_default();
        if bucket.contains_key(&name) {
            return Err(ThemeError::DuplicateToken { category, name });
        }

        trace!(%category, %name, "Registered token");
        bucket.insert(name, value);
        Ok(())
    }

    /// Look up a token by exact name.
    ///
    /// Aliases are not consulted here; see [`Theme::lookup`](crate::Theme::lookup).
    pub fn lookup(&self, category: TokenCategory, name: &str) -> ThemeResult<&TokenValue> {
        self.tokens
            .get(&category)
            .and_then(|bucket| bucket.get(name))
            .ok_or_else(|| ThemeError::UnknownToken {
                category,
                name: name.to_string(),
            })
    }

    pub fn contains(&self, category: TokenCategory, name: &str) -> bool {
        self.tokens
            .get(&category)
            .is_some_and(|bucket| bucket.contains_key(name))
    }

    /// Iterate the tokens of one category in name order
    pub fn iter(&self, category: TokenCategory) -> impl Iterator<Item = Token<'_>> {
        self.tokens
            .get(&category)
            .into_iter()
            .flat_map(move |bucket| {
                bucket.iter().map(move |(name, value)| Token {
                    name,
                    category,
                    value,
                })
            })
    }

    /// Number of tokens in one category
    pub fn count(&self, category: TokenCategory) -> usize {
        self.tokens.get(&category).map_or(0, BTreeMap::len)
    }

    /// Total number of tokens across all categories
    pub fn len(&self) -> usize {
        self.tokens.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
