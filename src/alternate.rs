#![deny(missing_docs)]

//! # Alternate Types
//!
//! Upstream configuration may document a type as something else: framework
//! wrappers such as `Json<T>` are unwrapped to their payload, and opaque types
//! can be substituted wholesale.

use crate::types::ResolvedType;
use serde::{Deserialize, Serialize};

/// Upper bound on rewrite passes, guarding against substitution cycles.
const MAX_PASSES: usize = 8;

/// Maps a declared type to the type that is actually documented.
pub trait AlternateTypeProvider {
    /// Returns the effective type for `ty` (or a clone of `ty` when nothing applies).
    fn alternate_for(&self, ty: &ResolvedType) -> ResolvedType;
}

/// Documents every type as declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAlternates;

impl AlternateTypeProvider for NoAlternates {
    fn alternate_for(&self, ty: &ResolvedType) -> ResolvedType {
        ty.clone()
    }
}

/// A single rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternateTypeRule {
    /// Replaces `Wrapper<T, ..>` by `T`.
    Unwrap(String),
    /// Replaces `from` by `to` when the whole type matches exactly.
    Substitute {
        /// The declared type.
        from: ResolvedType,
        /// The documented type.
        to: ResolvedType,
    },
}

impl AlternateTypeRule {
    fn rewrite(&self, ty: &ResolvedType) -> Option<ResolvedType> {
        match self {
            AlternateTypeRule::Unwrap(wrapper) => match ty {
                ResolvedType::Named { name, args } if name == wrapper => args.first().cloned(),
                _ => None,
            },
            AlternateTypeRule::Substitute { from, to } if from == ty => Some(to.clone()),
            AlternateTypeRule::Substitute { .. } => None,
        }
    }
}

/// An ordered list of rewrite rules.
///
/// Each pass applies the first matching rule; passes repeat until no rule
/// matches, so `Json<Result<Vec<User>, E>>` resolves to `Vec<User>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateTypeRules {
    rules: Vec<AlternateTypeRule>,
}

impl AlternateTypeRules {
    /// An empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwraps the response wrappers common to Rust web frameworks.
    pub fn web_defaults() -> Self {
        ["Json", "Result", "Box", "Arc", "Rc", "Cow", "Option"]
            .into_iter()
            .fold(Self::new(), |rules, wrapper| rules.unwrap_wrapper(wrapper))
    }

    /// Adds an unwrap rule.
    pub fn unwrap_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.rules.push(AlternateTypeRule::Unwrap(wrapper.into()));
        self
    }

    /// Adds a substitution rule.
    pub fn substitute(mut self, from: ResolvedType, to: ResolvedType) -> Self {
        self.rules.push(AlternateTypeRule::Substitute { from, to });
        self
    }

    /// The configured rules, in priority order.
    pub fn rules(&self) -> &[AlternateTypeRule] {
        &self.rules
    }
}

impl AlternateTypeProvider for AlternateTypeRules {
    fn alternate_for(&self, ty: &ResolvedType) -> ResolvedType {
        let mut current = ty.clone();
        for _ in 0..MAX_PASSES {
            match self.rules.iter().find_map(|rule| rule.rewrite(&current)) {
                Some(next) => {
                    tracing::trace!(from = %current, to = %next, "alternate type applied");
                    current = next;
                }
                None => break,
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(s: &str) -> ResolvedType {
        ResolvedType::parse(s).unwrap()
    }

    #[test]
    fn test_no_alternates_is_identity() {
        assert_eq!(NoAlternates.alternate_for(&ty("Json<User>")), ty("Json<User>"));
    }

    #[test]
    fn test_web_defaults_unwrap_nested_wrappers() {
        let rules = AlternateTypeRules::web_defaults();
        assert_eq!(
            rules.alternate_for(&ty("web::Json<Result<Vec<User>, ApiError>>")),
            ty("Vec<User>")
        );
        assert_eq!(rules.alternate_for(&ty("Result<(), ApiError>")), ty("()"));
        // Containers are not wrappers
        assert_eq!(rules.alternate_for(&ty("Vec<Json<User>>")), ty("Vec<Json<User>>"));
    }

    #[test]
    fn test_substitution() {
        let rules = AlternateTypeRules::new().substitute(ty("NaiveDate"), ty("String"));
        assert_eq!(rules.alternate_for(&ty("NaiveDate")), ty("String"));
        assert_eq!(rules.alternate_for(&ty("Vec<NaiveDate>")), ty("Vec<NaiveDate>"));
    }

    #[test]
    fn test_cyclic_substitutions_terminate() {
        let rules = AlternateTypeRules::new()
            .substitute(ty("A"), ty("B"))
            .substitute(ty("B"), ty("A"));
        let out = rules.alternate_for(&ty("A"));
        assert!(out == ty("A") || out == ty("B"));
    }

    #[test]
    fn test_rules_from_json() {
        let json = r#"{"rules": [{"unwrap": "Json"}, {"substitute": {"from": "Money", "to": "String"}}]}"#;
        let rules: AlternateTypeRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.rules().len(), 2);
        assert_eq!(rules.alternate_for(&ty("Json<Money>")), ty("String"));
    }
}
