use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// Well-known parameters shared by all recognizers a factory creates.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FactoryParameter {
    /// Region of the service to connect to.
    Region,
    /// Subscription key used when connecting to the service.
    SubscriptionKey,
    /// Authorization token used when connecting to the service.
    AuthorizationToken,
    /// Endpoint URL of the service.
    Endpoint,
}

/// Well-known parameters of an individual recognizer.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RecognizerParameter {
    /// Identifier of a custom speech model deployment.
    DeploymentId,
}

/// The value of a named parameter.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum ParameterValue {
    Bool(bool),
    Number(i32),
    String(String),
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A collection of named parameters, each holding a string, a number, or a bool.
///
/// Names can be plain strings or one of the well-known parameter enums, e.g.
/// [`FactoryParameter::Region`].
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Parameters {
    values: BTreeMap<String, ParameterValue>,
}

impl Parameters {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the named parameter, whatever its type.
    pub fn get<N: AsRef<str>>(&self, name: N) -> Option<&ParameterValue> {
        self.values.get(name.as_ref())
    }

    /// Sets the named parameter, replacing any previous value regardless of its type.
    pub fn set<N: AsRef<str>, V: Into<ParameterValue>>(&mut self, name: N, value: V) {
        self.values.insert(name.as_ref().to_string(), value.into());
    }

    /// Removes the named parameter, returning its value.
    pub fn remove<N: AsRef<str>>(&mut self, name: N) -> Option<ParameterValue> {
        self.values.remove(name.as_ref())
    }

    /// Returns `true` if the named parameter holds a string.
    pub fn contains_string<N: AsRef<str>>(&self, name: N) -> bool {
        self.string(name).is_some()
    }

    /// Returns the string value of the named parameter.
    pub fn string<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        match self.get(name) {
            Some(ParameterValue::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the string value of the named parameter, or `default` if it holds no string.
    pub fn get_string<N: AsRef<str>>(&self, name: N, default: &str) -> String {
        self.string(name).unwrap_or(default).to_string()
    }

    /// Sets the named parameter to a string value.
    pub fn set_string<N: AsRef<str>, S: Into<String>>(&mut self, name: N, value: S) {
        self.set(name, ParameterValue::String(value.into()))
    }

    /// Returns `true` if the named parameter holds a number.
    pub fn contains_number<N: AsRef<str>>(&self, name: N) -> bool {
        self.number(name).is_some()
    }

    /// Returns the numeric value of the named parameter.
    pub fn number<N: AsRef<str>>(&self, name: N) -> Option<i32> {
        match self.get(name) {
            Some(ParameterValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric value of the named parameter, or `default` if it holds no number.
    pub fn get_number<N: AsRef<str>>(&self, name: N, default: i32) -> i32 {
        self.number(name).unwrap_or(default)
    }

    /// Sets the named parameter to a numeric value.
    pub fn set_number<N: AsRef<str>>(&mut self, name: N, value: i32) {
        self.set(name, ParameterValue::Number(value))
    }

    /// Returns `true` if the named parameter holds a bool.
    pub fn contains_bool<N: AsRef<str>>(&self, name: N) -> bool {
        self.bool(name).is_some()
    }

    /// Returns the boolean value of the named parameter.
    pub fn bool<N: AsRef<str>>(&self, name: N) -> Option<bool> {
        match self.get(name) {
            Some(ParameterValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value of the named parameter, or `default` if it holds no bool.
    pub fn get_bool<N: AsRef<str>>(&self, name: N, default: bool) -> bool {
        self.bool(name).unwrap_or(default)
    }

    /// Sets the named parameter to a boolean value.
    pub fn set_bool<N: AsRef<str>>(&mut self, name: N, value: bool) {
        self.set(name, ParameterValue::Bool(value))
    }

    /// Iterates over all parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of parameters in the collection.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the collection holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
