//! Attachment alias rules
//!
//! In TOML the rules are a plain table mapping a canonical attachment
//! name to its glob patterns:
//!
//! ```toml
//! [attachments.aliases]
//! Piano = ["*piano*"]
//! Drums = ["*drum*", "*.mid"]
//! ```
//!
//! Precedence follows the order of the table in the file, so the rules
//! are kept as a list rather than a map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A canonical attachment name and the patterns that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub name: String,
    pub patterns: Vec<String>,
}

impl AliasRule {
    pub fn new<I, S>(name: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered alias rules; the first rule with a matching pattern wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRules(Vec<AliasRule>);

impl AliasRules {
    pub fn new(rules: Vec<AliasRule>) -> Self {
        Self(rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasRule> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<AliasRule> for AliasRules {
    fn from_iter<T: IntoIterator<Item = AliasRule>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for AliasRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rule in &self.0 {
            map.serialize_entry(&rule.name, &rule.patterns)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AliasRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = AliasRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of attachment names to glob pattern lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut rules = Vec::new();
                while let Some((name, patterns)) = access.next_entry::<String, Vec<String>>()? {
                    rules.push(AliasRule { name, patterns });
                }
                Ok(AliasRules(rules))
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}
