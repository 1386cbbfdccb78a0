//! Lookup of strategies by name with a designated default.

use std::collections::BTreeMap;

use log::warn;

use crate::{Strategy, StrategyError};

/// Named strategies plus the one used for unrecognised names.
///
/// # Examples
/// ```
/// use cadence_scorer::StrategyRegistry;
///
/// let registry = StrategyRegistry::builtin();
/// assert_eq!(registry.resolve("mood_first").name, "mood_first");
/// assert_eq!(registry.resolve("no_such_mode").name, "balanced");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRegistry {
    strategies: BTreeMap<String, Strategy>,
    fallback: Strategy,
}

impl StrategyRegistry {
    /// Registry containing `balanced`, `genre_first`, `mood_first`, and
    /// `energy_focused`, defaulting to `balanced`.
    #[must_use]
    pub fn builtin() -> Self {
        let strategies = [
            Strategy::balanced(),
            Strategy::genre_first(),
            Strategy::mood_first(),
            Strategy::energy_focused(),
        ]
        .into_iter()
        .map(|strategy| (strategy.name.clone(), strategy))
        .collect();
        Self {
            strategies,
            fallback: Strategy::balanced(),
        }
    }

    /// Register a strategy, replacing any with the same name.
    ///
    /// Returns the replaced strategy, if any.
    ///
    /// # Errors
    /// Propagates [`Strategy::validate`] failures.
    pub fn insert(&mut self, strategy: Strategy) -> Result<Option<Strategy>, StrategyError> {
        let validated = strategy.validate()?;
        if validated.name == self.fallback.name {
            self.fallback.clone_from(&validated);
        }
        Ok(self.strategies.insert(validated.name.clone(), validated))
    }

    /// Register strategies while consuming `self`, enabling chaining.
    ///
    /// # Errors
    /// Stops at the first strategy that fails validation.
    pub fn with_strategies<I>(mut self, strategies: I) -> Result<Self, StrategyError>
    where
        I: IntoIterator<Item = Strategy>,
    {
        for strategy in strategies {
            self.insert(strategy)?;
        }
        Ok(self)
    }

    /// Choose which registered strategy acts as the fallback.
    ///
    /// # Errors
    /// Returns [`StrategyError::UnknownDefault`] when `name` is not
    /// registered.
    pub fn set_default(&mut self, name: &str) -> Result<(), StrategyError> {
        let strategy = self
            .strategies
            .get(name)
            .ok_or_else(|| StrategyError::UnknownDefault {
                name: name.to_owned(),
            })?;
        self.fallback.clone_from(strategy);
        Ok(())
    }

    /// Look up a strategy by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Strategy> {
        self.strategies.get(name)
    }

    /// Look up a strategy, falling back to the default for unknown names.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &Strategy {
        self.get(name).unwrap_or_else(|| {
            warn!(
                "unknown strategy `{name}`, falling back to `{}`",
                self.fallback.name
            );
            &self.fallback
        })
    }

    /// The fallback strategy.
    #[must_use]
    pub const fn default_strategy(&self) -> &Strategy {
        &self.fallback
    }

    /// Name of the fallback strategy.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.fallback.name
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    /// Registered strategies in lexical order of name.
    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.values()
    }

    /// Number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Report whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
