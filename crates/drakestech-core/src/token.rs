//! Tagged ingredient references.
//!
//! Every recipe input and output is a [`Token`]: either a raw, ungenerated
//! material supplied by the game world (`material:COBBLESTONE`) or a generated
//! catalog item (`item:copper_dust_t1`). [`Token::normalize`] is the only place
//! an untagged string is turned into a token.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::naming::title_case;

pub const ITEM_PREFIX: &str = "item:";
pub const MATERIAL_PREFIX: &str = "material:";

/// A reference to a raw material or a generated item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// A raw material name, e.g. `COBBLESTONE`.
    Material(String),
    /// A generated item id, e.g. `copper_dust_t1`.
    Item(String),
}

impl Token {
    pub fn material(name: impl Into<String>) -> Self {
        Token::Material(name.into())
    }

    pub fn item(id: impl Into<String>) -> Self {
        Token::Item(id.into())
    }

    /// Parse a raw reference. An explicit `item:` or `material:` prefix is
    /// kept; anything else is treated as a material name.
    pub fn normalize(raw: &str) -> Self {
        let clean = raw.trim();
        if let Some(id) = clean.strip_prefix(ITEM_PREFIX) {
            Token::Item(id.to_string())
        } else if let Some(name) = clean.strip_prefix(MATERIAL_PREFIX) {
            Token::Material(name.to_string())
        } else {
            Token::Material(clean.to_string())
        }
    }

    /// Text shown inside guide recipe listings.
    ///
    /// Item tokens are emitted verbatim (the guide resolves them to display
    /// names at runtime); materials are title-cased.
    pub fn display_text(&self) -> String {
        match self {
            Token::Item(_) => self.to_string(),
            Token::Material(name) => title_case(name),
        }
    }

    /// The bare name or id without its namespace prefix.
    pub fn name(&self) -> &str {
        match self {
            Token::Material(name) | Token::Item(name) => name,
        }
    }

    pub fn is_material(&self) -> bool {
        matches!(self, Token::Material(_))
    }

    pub fn as_item(&self) -> Option<&str> {
        match self {
            Token::Item(id) => Some(id),
            Token::Material(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Material(name) => write!(f, "{MATERIAL_PREFIX}{name}"),
            Token::Item(id) => write!(f, "{ITEM_PREFIX}{id}"),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Token::normalize(&raw))
    }
}
