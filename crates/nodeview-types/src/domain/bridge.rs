use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use url::Url;

use crate::{Error, Result, new_id};

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

/// Case-normalized bridge (and task type) name.
///
/// Names are trimmed and lower-cased on construction, so `"HapAx"` and
/// `"hapax"` refer to the same bridge. This is the stable display and lookup
/// key; uniqueness is enforced by whatever store holds the bridges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BridgeName(String);

impl BridgeName {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let normalized = name.as_ref().trim().to_lowercase();
        if !NAME_REGEX.is_match(&normalized) {
            return Err(Error::InvalidBridgeName(name.as_ref().to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BridgeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BridgeName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BridgeName> for String {
    fn from(name: BridgeName) -> Self {
        name.0
    }
}

impl std::str::FromStr for BridgeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// External adapter the node calls out to while running job tasks.
///
/// `incoming_token` authenticates the bridge when it calls back into the
/// node; `outgoing_token` is sent by the node with every request to the bridge.
/// Both are secrets: list output must never show them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeType {
    pub name: BridgeName,
    pub url: Url,
    #[serde(default)]
    pub default_confirmations: u64,
    #[serde(default)]
    pub incoming_token: String,
    #[serde(default)]
    pub outgoing_token: String,
}

impl BridgeType {
    /// Create a bridge with freshly generated access tokens.
    pub fn new(name: BridgeName, url: Url) -> Self {
        Self {
            name,
            url,
            default_confirmations: 0,
            incoming_token: new_id(),
            outgoing_token: new_id(),
        }
    }

    /// Parse name and URL from raw operator input.
    pub fn parse(name: &str, url: &str) -> Result<Self> {
        let name = BridgeName::new(name)?;
        let url = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self::new(name, url))
    }

    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.default_confirmations = confirmations;
        self
    }
}
