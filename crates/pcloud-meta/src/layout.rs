//! Local layout mode

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How downloaded documents are arranged under the storage root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// `<root>/[<group>/]<album>/<document>.pdf`
    #[default]
    Nested,

    /// `<root>/<document>.pdf`; identically named documents from
    /// different albums collide.
    Flat,
}

impl FromStr for LayoutMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" => Ok(LayoutMode::Nested),
            "flat" => Ok(LayoutMode::Flat),
            _ => Err(Error::InvalidLayout {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Nested => write!(f, "nested"),
            LayoutMode::Flat => write!(f, "flat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_default() {
        assert_eq!(LayoutMode::default(), LayoutMode::Nested);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("nested".parse::<LayoutMode>().unwrap(), LayoutMode::Nested);
        assert_eq!("FLAT".parse::<LayoutMode>().unwrap(), LayoutMode::Flat);
        assert!("tree".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [LayoutMode::Nested, LayoutMode::Flat] {
            assert_eq!(mode.to_string().parse::<LayoutMode>().unwrap(), mode);
        }
    }
}
