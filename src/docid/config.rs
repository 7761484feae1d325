//! Encoder configuration
//!
//! The defaults reproduce the identifier grammar exactly; the presets only change how
//! malformed or ambiguous descriptors are treated.

/// How a generic parameter is attributed to the declaring type or to the method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenericScope {
    /// A parameter whose name is declared by the declaring type renders with one back-tick,
    /// every other parameter with two
    #[default]
    NameMatch,
    /// The name must be declared by exactly one of the two scopes, otherwise the descriptor is
    /// rejected
    Strict,
}

/// Configuration of a [`crate::docid::DocIdEncoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Maximum nesting of generic arguments, arrays and pointers (default: 64)
    pub max_depth: usize,
    /// Generic parameter attribution rule
    pub generic_scope: GenericScope,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            generic_scope: GenericScope::NameMatch,
        }
    }
}

impl EncoderConfig {
    /// Creates a configuration that rejects generic parameters that cannot be attributed
    /// unambiguously by name
    #[must_use]
    pub fn strict() -> Self {
        Self {
            generic_scope: GenericScope::Strict,
            ..Self::default()
        }
    }

    /// Override the recursion bound
    ///
    /// ## Arguments
    /// * 'max_depth' - Deepest allowed nesting of the type graph
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
