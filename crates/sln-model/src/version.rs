//! Version value types for the solution header.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The file format version from the first header line, e.g. `12.00`.
///
/// The minor component is rendered zero-padded to two digits, which is how
/// the reference toolchain writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatVersion {
    pub major: u32,
    pub minor: u32,
}

impl FormatVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl FromStr for FormatVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedVersion(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(malformed)?;
        Ok(Self {
            major: major.parse().map_err(|_| malformed())?,
            minor: minor.parse().map_err(|_| malformed())?,
        })
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

/// A dotted product version such as `17.0.31903.59`.
///
/// Visual Studio versions carry up to four numeric components; semver does
/// not fit, so components are kept as-is and rendered with full precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductVersion(pub Vec<u32>);

impl FromStr for ProductVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::MalformedVersion(s.to_string()));
        }
        let components = s
            .split('.')
            .map(|part| {
                part.parse()
                    .map_err(|_| Error::MalformedVersion(s.to_string()))
            })
            .collect::<Result<Vec<u32>>>()?;
        Ok(Self(components))
    }
}

impl fmt::Display for ProductVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
