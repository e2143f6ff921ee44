//! Modifier templates.
//!
//! A modifier is a recipe applied to a freshly drawn item clone: an
//! optional name template plus per-property transformation values. Values
//! are classified once, at registration time, into the closed set of
//! [`ModifierValue`] kinds; application never re-parses strings.

use std::fmt;

use crate::item::{Item, PropValue};
use crate::range::{RangeSpec, is_range_str};
use crate::rule::ModifierRule;

/// A function-valued modifier entry: computes a replacement value from the
/// item being modified.
pub type ModifierFn = Box<dyn Fn(&Item) -> PropValue + Send + Sync>;

/// One per-property transformation inside a modifier.
pub enum ModifierValue {
    /// An arithmetic rule applied to the item's current value at the key.
    Rule(ModifierRule),
    /// A range to sample a fresh value from.
    Range(RangeSpec),
    /// A plain number `n`, sampled as a uniform integer in `0..=n`.
    Upto(i64),
    /// A literal string assigned as-is.
    Text(String),
    /// A function invoked with the item; its result is assigned.
    Callable(ModifierFn),
}

impl ModifierValue {
    /// Wrap a function as a modifier value.
    pub fn callable(f: impl Fn(&Item) -> PropValue + Send + Sync + 'static) -> Self {
        Self::Callable(Box::new(f))
    }
}

impl fmt::Debug for ModifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule(rule) => f.debug_tuple("Rule").field(rule).finish(),
            Self::Range(spec) => f.debug_tuple("Range").field(spec).finish(),
            Self::Upto(n) => f.debug_tuple("Upto").field(n).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Callable(_) => f.write_str("Callable(<fn>)"),
        }
    }
}

impl From<&str> for ModifierValue {
    /// Classify a string value: arithmetic rule first, then a strict
    /// `a-b` range, otherwise a literal.
    fn from(value: &str) -> Self {
        if let Some(rule) = ModifierRule::parse(value) {
            Self::Rule(rule)
        } else if is_range_str(value) {
            match RangeSpec::parse(value) {
                Some(spec) => Self::Range(spec),
                None => Self::Text(value.to_owned()),
            }
        } else {
            Self::Text(value.to_owned())
        }
    }
}

impl From<i64> for ModifierValue {
    fn from(value: i64) -> Self {
        Self::Upto(value)
    }
}

/// A modifier template: an optional name rule plus property entries in
/// registration order.
///
/// The name rule is special. If it contains `$token` placeholders, the new
/// item name is built by substituting each token with the lower-cased
/// value of the item's property of that name. Otherwise the value is
/// appended to the existing name as a suffix.
#[derive(Debug, Default)]
pub struct Modifier {
    name: Option<String>,
    entries: Vec<(String, ModifierValue)>,
}

impl Modifier {
    /// Create a modifier with a name template or suffix.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
        }
    }

    /// Builder-style entry setter. String values are classified into rule,
    /// range, or literal; integers become `0..=n` samples.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ModifierValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Builder-style function entry.
    pub fn set_fn(
        mut self,
        key: impl Into<String>,
        f: impl Fn(&Item) -> PropValue + Send + Sync + 'static,
    ) -> Self {
        self.entries.push((key.into(), ModifierValue::callable(f)));
        self
    }

    /// The name template or suffix, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Property entries in registration order.
    pub fn entries(&self) -> &[(String, ModifierValue)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_string_values() {
        assert!(matches!(ModifierValue::from("*10"), ModifierValue::Rule(_)));
        assert!(matches!(ModifierValue::from("4-10"), ModifierValue::Range(_)));
        assert!(matches!(ModifierValue::from("10"), ModifierValue::Text(_)));
        assert!(matches!(
            ModifierValue::from("of the sun"),
            ModifierValue::Text(_)
        ));
    }

    #[test]
    fn zero_operand_rule_is_not_a_rule() {
        // "+0" fails the rule grammar and is not a range either, so it
        // degrades to a literal instead of crashing a loot roll.
        assert!(matches!(ModifierValue::from("+0"), ModifierValue::Text(_)));
    }

    #[test]
    fn builder_keeps_entry_order() {
        let modifier = Modifier::named("$name of the sun")
            .set("intel", "*10")
            .set("agility", "4-10");
        assert_eq!(modifier.name(), Some("$name of the sun"));
        let keys: Vec<&str> = modifier.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["intel", "agility"]);
    }
}
