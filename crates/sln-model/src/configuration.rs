//! Solution build configurations and the closed token sets they draw from.
//!
//! A solution build configuration is a `Name|Platform` pair such as
//! `Debug|Any CPU`. Both halves are validated against small closed
//! enumerations; an unrecognized token is a value error, not a free-form
//! fallback.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build configuration name (the part before `|`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationName {
    Debug,
    Release,
}

impl ConfigurationName {
    /// Canonical token as it appears in a solution file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl FromStr for ConfigurationName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Debug" => Ok(Self::Debug),
            "Release" => Ok(Self::Release),
            other => Err(Error::UnknownConfiguration(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigurationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform target (the part after `|`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformTarget {
    AnyCpu,
    X86,
    X64,
    Win32,
    Arm,
    Arm64,
    MixedPlatforms,
}

impl PlatformTarget {
    /// Canonical token as it appears in a solution file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnyCpu => "Any CPU",
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Win32 => "Win32",
            Self::Arm => "ARM",
            Self::Arm64 => "ARM64",
            Self::MixedPlatforms => "Mixed Platforms",
        }
    }
}

impl FromStr for PlatformTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Any CPU" => Ok(Self::AnyCpu),
            "x86" => Ok(Self::X86),
            "x64" => Ok(Self::X64),
            "Win32" => Ok(Self::Win32),
            "ARM" => Ok(Self::Arm),
            "ARM64" => Ok(Self::Arm64),
            "Mixed Platforms" => Ok(Self::MixedPlatforms),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A solution build configuration: `Name|Platform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildConfiguration {
    pub configuration: ConfigurationName,
    pub platform: PlatformTarget,
}

impl BuildConfiguration {
    pub fn new(configuration: ConfigurationName, platform: PlatformTarget) -> Self {
        Self {
            configuration,
            platform,
        }
    }
}

impl FromStr for BuildConfiguration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (configuration, platform) = s
            .split_once('|')
            .ok_or_else(|| Error::MalformedConfiguration(s.to_string()))?;
        Ok(Self {
            configuration: configuration.trim().parse()?,
            platform: platform.trim().parse()?,
        })
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.configuration, self.platform)
    }
}

/// Indicator token on a project configuration entry (`ActiveCfg`,
/// `Build.0`, `Deploy.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationIndicator {
    ActiveCfg,
    Build,
    Deploy,
}

impl ConfigurationIndicator {
    /// Canonical token as it appears in a solution file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveCfg => "ActiveCfg",
            Self::Build => "Build.0",
            Self::Deploy => "Deploy.0",
        }
    }
}

impl FromStr for ConfigurationIndicator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ActiveCfg" => Ok(Self::ActiveCfg),
            "Build.0" => Ok(Self::Build),
            "Deploy.0" => Ok(Self::Deploy),
            other => Err(Error::UnknownIndicator(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigurationIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_configuration_parse() {
        let cfg: BuildConfiguration = "Debug|Any CPU".parse().unwrap();
        assert_eq!(cfg.configuration, ConfigurationName::Debug);
        assert_eq!(cfg.platform, PlatformTarget::AnyCpu);
        assert_eq!(cfg.to_string(), "Debug|Any CPU");
    }

    #[test]
    fn test_build_configuration_trims_around_separator() {
        let cfg: BuildConfiguration = "Release | x64".parse().unwrap();
        assert_eq!(cfg.to_string(), "Release|x64");
    }

    #[test]
    fn test_unknown_configuration_rejected() {
        let err = "Bogus|Any CPU".parse::<BuildConfiguration>().unwrap_err();
        assert!(matches!(err, Error::UnknownConfiguration(_)));
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let err = "Debug|Commodore64".parse::<BuildConfiguration>().unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform(_)));
    }

    #[test]
    fn test_missing_separator_rejected() {
        let err = "Debug".parse::<BuildConfiguration>().unwrap_err();
        assert!(matches!(err, Error::MalformedConfiguration(_)));
    }

    #[test]
    fn test_indicator_tokens() {
        assert_eq!(
            "ActiveCfg".parse::<ConfigurationIndicator>().unwrap(),
            ConfigurationIndicator::ActiveCfg
        );
        assert_eq!(
            "Build.0".parse::<ConfigurationIndicator>().unwrap(),
            ConfigurationIndicator::Build
        );
        assert_eq!(ConfigurationIndicator::Deploy.to_string(), "Deploy.0");
        assert!("Build.1".parse::<ConfigurationIndicator>().is_err());
    }
}
