//! Serializable dialog options.

use std::{fmt, result::Result as StdResult, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{Error, Result};

/// Dialog width category. Serializes as `sm`, `md` or `lg`, and reads any
/// spelling [`FromStr`] accepts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Size {
    /// Narrow dialog.
    #[serde(rename = "sm")]
    Small,
    /// Standard width. Carries no modifier class.
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Wide dialog.
    #[serde(rename = "lg")]
    Large,
}

impl Size {
    /// The modifier class for this size, if any.
    pub fn modifier(&self) -> Option<&'static str> {
        match self {
            Self::Small => Some("rf-modal--sm"),
            Self::Medium => None,
            Self::Large => Some("rf-modal--lg"),
        }
    }

    /// Short name: `sm`, `md` or `lg`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(Self::Small),
            "md" | "medium" => Ok(Self::Medium),
            "lg" | "large" => Ok(Self::Large),
            _ => Err(Error::Invalid(format!("unknown size: {s}"))),
        }
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The data part of a dialog's configuration. Callbacks and children cannot be
/// serialized and are supplied through
/// [`ModalPropsBuilder`](crate::controller::ModalPropsBuilder).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ModalOptions {
    /// Width category.
    pub size: Size,
    /// Whether the dialog starts open.
    #[serde(alias = "is_open")]
    pub is_open: bool,
}

impl ModalOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize options to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
