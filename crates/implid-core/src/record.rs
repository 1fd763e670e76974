//! # Implementation Identifier Record
//!
//! The candidate record a host hands to the validator. Every attribute is
//! optional so that a record in any state of partial construction, including
//! a completely blank one, can be represented and inspected.
//!
//! ## Fields
//!
//! | Field | Required | Validated |
//! |-------|----------|-----------|
//! | `code` | yes | non-blank, no `^` or `|` |
//! | `name` | no | never |
//! | `passphrase` | yes | non-blank |
//! | `description` | no | never |

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ImplIdError;

/// An implementation identifier as submitted for persistence.
///
/// Construct it with struct literal syntax, [`Default`], or the chainable
/// `with_*` methods, in any order.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationIdRecord {
    /// The identifier string itself.
    #[serde(
        alias = "implementationId",
        deserialize_with = "scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    /// Human-readable name of the installation.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shared secret used for mutual authentication during exchange.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Free text.
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reads a string or a number as text, so `code: 12345` in a YAML file
/// yields `Some("12345")` instead of a type error. `null` is `None`.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or number")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_owned()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }
    }

    deserializer.deserialize_option(ScalarText)
}

impl ImplementationIdRecord {
    /// A record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the installation name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the passphrase.
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Raw value of a field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Code => self.code.as_deref(),
            Field::Name => self.name.as_deref(),
            Field::Passphrase => self.passphrase.as_deref(),
            Field::Description => self.description.as_deref(),
        }
    }
}

// The passphrase must not end up in logs through `{:?}`.
impl fmt::Debug for ImplementationIdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationIdRecord")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .field("description", &self.description)
            .finish()
    }
}

/// Names of the record's fields, used as keys in the error accumulator.
///
/// Variant order is declaration order of the record and defines the order
/// in which accumulated errors are iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// `code`
    Code,
    /// `name`
    Name,
    /// `passphrase`
    Passphrase,
    /// `description`
    Description,
}

impl Field {
    /// Every field in declaration order.
    pub fn all() -> &'static [Field] {
        &[Self::Code, Self::Name, Self::Passphrase, Self::Description]
    }

    /// The serialized field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::Passphrase => "passphrase",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ImplIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" | "implementationId" => Ok(Self::Code),
            "name" => Ok(Self::Name),
            "passphrase" => Ok(Self::Passphrase),
            "description" => Ok(Self::Description),
            other => Err(ImplIdError::UnknownField(other.to_string())),
        }
    }
}
