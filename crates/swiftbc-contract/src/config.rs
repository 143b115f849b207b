use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

/// Contract registration settings and published metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Namespace used to qualify operation names (`<name>:<operation>`).
    pub name: String,
    /// When `true`, operations also resolve by their bare name.
    pub default: bool,
    pub info: ContractInfo,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            name: "basic".into(),
            default: true,
            info: ContractInfo::default(),
        }
    }
}

impl ContractConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> ContractResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ContractError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ContractResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ContractError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// The contract name must be non-empty and must not contain the `:`
    /// namespace separator.
    pub fn validate(&self) -> ContractResult<()> {
        if self.name.trim().is_empty() {
            return Err(ContractError::Config("contract name must not be empty".into()));
        }
        if self.name.contains(':') {
            return Err(ContractError::Config(format!(
                "contract name '{}' must not contain ':'",
                self.name
            )));
        }
        Ok(())
    }
}

/// Descriptive metadata published alongside the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub license: LicenseInfo,
    pub contact: Option<ContactInfo>,
}

impl Default for ContractInfo {
    fn default() -> Self {
        Self {
            title: "Swift Blockchain".into(),
            description: "Instead of the Swift System".into(),
            version: "0.0.1-SNAPSHOT".into(),
            license: LicenseInfo::default(),
            contact: Some(ContactInfo::default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub name: String,
    pub url: String,
}

impl Default for LicenseInfo {
    fn default() -> Self {
        Self {
            name: "Apache 2.0 License".into(),
            url: "http://www.apache.org/licenses/LICENSE-2.0.html".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: Option<String>,
    pub url: Option<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            name: "DF_BC_1".into(),
            email: Some("dobby@woorifis.com".into()),
            url: Some("https://github.com/wgjeong/swiftbc".into()),
        }
    }
}
