//! Items: open-ended property bags with a mandatory name.
//!
//! An item stored in the catalog is a template. Every draw clones it before
//! any modifier touches it, so the stored template is never mutated.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar property value on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// A text value.
    String(String),
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
}

impl PropValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::String(_) | Self::Boolean(_) => None,
        }
    }

    /// Build a value from an arithmetic result, collapsing integral floats
    /// to [`PropValue::Integer`].
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&value) {
            Self::Integer(value as i64)
        } else {
            Self::Float(value)
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// An item in the catalog: a name plus free-form scalar properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the item.
    pub name: String,
    /// Additional free-form properties.
    #[serde(flatten)]
    pub props: HashMap<String, PropValue>,
}

impl Item {
    /// Create an item with the given name and no extra properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: HashMap::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Look up a property. The `name` key resolves to the item's name.
    pub fn get(&self, key: &str) -> Option<PropValue> {
        if key == "name" {
            Some(PropValue::String(self.name.clone()))
        } else {
            self.props.get(key).cloned()
        }
    }

    /// Set a property.
    pub fn set(&mut self, key: impl Into<String>, value: PropValue) {
        self.props.insert(key.into(), value);
    }
}
