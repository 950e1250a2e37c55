//! Context-free L-System grammar over single-character symbols.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An axiom plus per-symbol production rules.
///
/// Symbols without a rule are terminal and copied through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    axiom: String,
    rules: HashMap<char, String>,
}

impl Grammar {
    /// Creates a grammar with the given seed string and no rules.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            axiom: axiom.into(),
            rules: HashMap::new(),
        }
    }

    /// Adds a rule, replacing any existing rule for `symbol`.
    pub fn add_rule(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// Builder form of [`add_rule`](Self::add_rule).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.add_rule(symbol, replacement);
        self
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn rules(&self) -> &HashMap<char, String> {
        &self.rules
    }

    /// Applies every rule once, in parallel, across `input`.
    pub fn step(&self, input: &str) -> String {
        let mut next = String::with_capacity(input.len());
        for c in input.chars() {
            match self.rules.get(&c) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(c),
            }
        }
        next
    }

    /// Rewrites the axiom `generations` times and returns the final string.
    ///
    /// Every call starts over from the axiom. There is no length cap: a rule
    /// set that grows on average grows exponentially with `generations`.
    pub fn rewrite(&self, generations: u32) -> String {
        let mut current = self.axiom.clone();
        for generation in 1..=generations {
            current = self.step(&current);
            debug!(generation, length = current.len(), "rewrote generation");
        }
        current
    }
}
