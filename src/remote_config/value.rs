//! Remote Config value types exchanged with the SDK.
//!
//! [`DefaultValue`] is the typed form of a client default handed to the SDK, while
//! [`RemoteConfigValue`] is what the SDK returns when a parameter is read back.

use serde::Serialize;

/// A strongly typed default value accepted by the Remote Config defaults API.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Int64(i64),
    Float64(f64),
    String(String),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl DefaultValue {
    /// Short name of the variant, used in log lines and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DefaultValue::Int64(_) => "int64",
            DefaultValue::Float64(_) => "float64",
            DefaultValue::String(_) => "string",
            DefaultValue::Bool(_) => "bool",
            DefaultValue::Bytes(_) => "bytes",
        }
    }

    /// Returns the string form the SDK stores for this default.
    ///
    /// Byte sequences are interpreted as UTF-8; invalid sequences are replaced.
    pub fn to_config_string(&self) -> String {
        match self {
            DefaultValue::Int64(value) => value.to_string(),
            DefaultValue::Float64(value) => value.to_string(),
            DefaultValue::String(value) => value.clone(),
            DefaultValue::Bool(value) => value.to_string(),
            DefaultValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int64(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        DefaultValue::Float64(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::String(value.to_owned())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        DefaultValue::String(value)
    }
}

impl From<Vec<u8>> for DefaultValue {
    fn from(value: Vec<u8>) -> Self {
        DefaultValue::Bytes(value)
    }
}

/// Indicates where a Remote Config value originated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteConfigValueSource {
    /// Value fetched from the Remote Config backend and activated.
    Remote,
    /// Default value supplied by the client via `set_defaults`.
    Default,
    /// Static fallback used when the key has no remote or default entry.
    Static,
}

impl RemoteConfigValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteConfigValueSource::Remote => "remote",
            RemoteConfigValueSource::Default => "default",
            RemoteConfigValueSource::Static => "static",
        }
    }
}

/// A Remote Config parameter value as reported by the SDK, with typed accessors.
///
/// Missing keys map to a static source whose accessors yield empty or zero values, so a
/// read always produces something.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfigValue {
    source: RemoteConfigValueSource,
    value: String,
}

impl RemoteConfigValue {
    const DEFAULT_BOOLEAN: bool = false;
    const DEFAULT_NUMBER: f64 = 0.0;
    const BOOLEAN_TRUTHY_VALUES: [&'static str; 6] = ["1", "true", "t", "yes", "y", "on"];

    pub fn new(source: RemoteConfigValueSource, value: impl Into<String>) -> Self {
        Self {
            source,
            value: value.into(),
        }
    }

    pub fn static_value() -> Self {
        Self::new(RemoteConfigValueSource::Static, String::new())
    }

    /// Returns the raw value as a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use firebase_config_bridge::remote_config::value::RemoteConfigValue;
    ///
    /// let value = RemoteConfigValue::default();
    /// assert_eq!(value.as_string(), "");
    /// ```
    pub fn as_string(&self) -> String {
        self.value.clone()
    }

    /// Returns `true` for case-insensitive values in `{"1", "true", "t", "yes", "y", "on"}`
    /// when the source is remote or default, otherwise `false`.
    pub fn as_bool(&self) -> bool {
        if self.source == RemoteConfigValueSource::Static {
            return Self::DEFAULT_BOOLEAN;
        }
        Self::BOOLEAN_TRUTHY_VALUES
            .iter()
            .any(|truthy| self.value.eq_ignore_ascii_case(truthy))
    }

    /// Returns the value interpreted as a number; parsing failures fall back to `0.0`.
    pub fn as_number(&self) -> f64 {
        if self.source == RemoteConfigValueSource::Static {
            return Self::DEFAULT_NUMBER;
        }
        match self.value.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_nan() => Self::DEFAULT_NUMBER,
            Ok(parsed) => parsed,
            Err(_) => Self::DEFAULT_NUMBER,
        }
    }

    /// Returns the UTF-8 bytes of the value; static values yield an empty sequence.
    pub fn as_bytes(&self) -> Vec<u8> {
        if self.source == RemoteConfigValueSource::Static {
            return Vec::new();
        }
        self.value.as_bytes().to_vec()
    }

    pub fn source(&self) -> RemoteConfigValueSource {
        self.source.clone()
    }
}

impl Default for RemoteConfigValue {
    fn default() -> Self {
        Self::static_value()
    }
}
