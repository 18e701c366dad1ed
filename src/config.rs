//! Loading factory settings from TOML.
//!
//! ```toml
//! region = "westus"
//! subscription_key = "..."
//! language = "en-US"
//!
//! [parameters]
//! CustomFlag = true
//! Retries = 3
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stt::{ParameterValue, RecognizerFactory};
use crate::Result;

/// Settings applied to a [`RecognizerFactory`] when it is created.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Region of the service to connect to.
    pub region: Option<String>,
    /// Subscription key used when connecting to the service.
    pub subscription_key: Option<String>,
    /// Authorization token used when connecting to the service.
    pub authorization_token: Option<String>,
    /// Endpoint URL of the service.
    pub endpoint: Option<String>,
    /// Spoken language for recognizers created without an explicit one.
    pub language: Option<String>,
    /// Any other factory parameters, by name.
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl FactoryConfig {
    /// Parses the configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "loading factory configuration");
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Copies every setting present in this configuration into the factory.
    pub fn apply(&self, factory: &mut RecognizerFactory) {
        for (name, value) in &self.parameters {
            factory.parameters_mut().set(name, value.clone());
        }
        if let Some(region) = &self.region {
            factory.set_region(region.as_str());
        }
        if let Some(key) = &self.subscription_key {
            factory.set_subscription_key(key.as_str());
        }
        if let Some(token) = &self.authorization_token {
            factory.set_authorization_token(token.as_str());
        }
        if let Some(endpoint) = &self.endpoint {
            factory.set_endpoint_url(endpoint.as_str());
        }
        if let Some(language) = &self.language {
            factory.set_default_language(Some(language.as_str()));
        }
    }
}
