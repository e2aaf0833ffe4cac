//! Alias table mapping legacy token names to canonical ones
//!
//! Chains are flattened as aliases are registered: every stored target is a
//! canonical name, never another alias. Resolution is therefore one map
//! lookup, and cycle detection happens at registration time only.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{ThemeError, ThemeResult};

/// Resolves alias names to canonical token names
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    aliases: BTreeMap<String, String>,
}

impl AliasResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` as another name for `canonical`.
    ///
    /// `canonical` may itself be an alias; it is resolved before storing.
    /// Existing aliases that pointed at `alias` are re-pointed to the new
    /// canonical name.
    ///
    /// # Errors
    ///
    /// - `ThemeError::DuplicateAlias` if `alias` is already registered
    /// - `ThemeError::AliasCycle` if `canonical` resolves back to `alias`
    pub fn register(
        &mut self,
        alias: impl Into<String>,
        canonical: impl Into<String>,
    ) -> ThemeResult<()> {
        let alias = alias.into();
        let canonical = canonical.into();

        let target = self.resolve_alias(&canonical).to_string();
        if target == alias {
            return Err(ThemeError::AliasCycle { alias, canonical });
        }
        if self.aliases.contains_key(&alias) {
            return Err(ThemeError::DuplicateAlias(alias));
        }

        for existing in self.aliases.values_mut() {
            if *existing == alias {
                *existing = target.clone();
            }
        }

        debug!(%alias, %target, "Registered alias");
        self.aliases.insert(alias, target);
        Ok(())
    }

    /// Canonical name for `name`, or `name` itself if it is not an alias
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Iterate `(alias, canonical)` pairs in alias order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
