//! Configuration of the operation engine.

use crate::primitive::{int, DEFAULT_MAX_INTEGER};
use rug::Integer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling which operations the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// The largest magnitude a numerator or denominator may reach. An operation that produces a
    /// larger one on any term is rolled back.
    ///
    /// The default is `1_000_000_000`.
    pub max_integer: Integer,

    /// Whether multiplying both sides by zero is allowed.
    ///
    /// Multiplying by zero is always balanced, but it throws away the equation, so it is
    /// disabled by default.
    pub allow_times_zero: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_integer: int(DEFAULT_MAX_INTEGER),
            allow_times_zero: false,
        }
    }
}

impl EngineConfig {
    /// Wraps the given [`EngineConfig`] into a builder for further customization.
    pub fn into_builder(self) -> EngineConfigBuilder {
        EngineConfigBuilder(self)
    }
}

/// Helper struct to build an [`EngineConfig`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EngineConfigBuilder(EngineConfig);

impl EngineConfigBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overflow limit. See [`EngineConfig::max_integer`] for more information.
    pub fn max_integer(mut self, max_integer: impl Into<Integer>) -> Self {
        self.0.max_integer = max_integer.into();
        self
    }

    /// Sets whether multiplying by zero is allowed. See [`EngineConfig::allow_times_zero`] for
    /// more information.
    pub fn allow_times_zero(mut self, allow_times_zero: bool) -> Self {
        self.0.allow_times_zero = allow_times_zero;
        self
    }

    /// Builds the [`EngineConfig`] struct.
    pub fn build(self) -> EngineConfig {
        self.0
    }
}
