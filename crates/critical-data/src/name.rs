//! Validated identifiers for individual pieces of critical data.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CriticalDataError, Result};

/// Identifier of one piece of critical data within a store.
///
/// Names are value-compared and are guaranteed to be usable as a file stem:
/// 1 to [`DataName::MAX_LEN`] ASCII alphanumerics, `_`, `-` or `.`, not
/// starting with `.`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DataName(String);

impl DataName {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        match Self::check(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(CriticalDataError::InvalidName { name, reason }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn check(name: &str) -> std::result::Result<(), &'static str> {
        if name.is_empty() {
            return Err("name is empty");
        }
        if name.len() > Self::MAX_LEN {
            return Err("name exceeds 64 bytes");
        }
        if name.starts_with('.') {
            return Err("name starts with '.'");
        }
        if !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
        {
            return Err("name contains characters outside [A-Za-z0-9_.-]");
        }
        Ok(())
    }
}

impl fmt::Display for DataName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DataName {
    type Err = CriticalDataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for DataName {
    type Error = CriticalDataError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for DataName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DataName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DataName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DataName::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Parses a list of names, failing on the first invalid entry.
pub fn names<I, S>(raw: I) -> Result<Vec<DataName>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    raw.into_iter().map(DataName::new).collect()
}
