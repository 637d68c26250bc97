//! Remote Config settings surface.
//!
//! Hosts send settings as a loose JSON object; only positive values are applied and
//! everything else keeps the SDK default.

use serde_json::Value as JsonValue;

use crate::remote_config::error::{malformed_input, RemoteConfigResult};

/// Default timeout for fetch operations (60 seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 60;
/// Default minimum interval between successful fetches (12 hours).
pub const DEFAULT_MINIMUM_FETCH_INTERVAL_SECONDS: u64 = 12 * 60 * 60;

pub const FETCH_TIMEOUT_KEY: &str = "fetchTimeoutInSeconds";
pub const MINIMUM_FETCH_INTERVAL_KEY: &str = "minimumFetchIntervalInSeconds";

/// Configuration options for Remote Config fetch behaviour, as handed to the SDK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfigSettings {
    fetch_timeout_seconds: u64,
    minimum_fetch_interval_seconds: u64,
}

impl RemoteConfigSettings {
    pub fn fetch_timeout_seconds(&self) -> u64 {
        self.fetch_timeout_seconds
    }

    pub fn minimum_fetch_interval_seconds(&self) -> u64 {
        self.minimum_fetch_interval_seconds
    }
}

impl Default for RemoteConfigSettings {
    fn default() -> Self {
        Self {
            fetch_timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
            minimum_fetch_interval_seconds: DEFAULT_MINIMUM_FETCH_INTERVAL_SECONDS,
        }
    }
}

/// Partial settings requested by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemoteConfigSettingsUpdate {
    pub fetch_timeout_seconds: Option<u64>,
    pub minimum_fetch_interval_seconds: Option<u64>,
}

impl RemoteConfigSettingsUpdate {
    /// Reads the update from the host settings object.
    ///
    /// Each field is read leniently: integers, floats (truncated) and numeric strings are
    /// accepted. Missing, unparsable, zero or negative values leave the field unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use firebase_config_bridge::remote_config::settings::RemoteConfigSettingsUpdate;
    /// use serde_json::json;
    ///
    /// let update = RemoteConfigSettingsUpdate::from_json(&json!({
    ///     "fetchTimeoutInSeconds": -1,
    ///     "minimumFetchIntervalInSeconds": 3600
    /// }))
    /// .unwrap();
    /// assert_eq!(update.fetch_timeout_seconds, None);
    /// assert_eq!(update.minimum_fetch_interval_seconds, Some(3600));
    /// ```
    pub fn from_json(config: &JsonValue) -> RemoteConfigResult<Self> {
        let object = config
            .as_object()
            .ok_or_else(|| malformed_input("config settings must be a JSON object"))?;

        Ok(Self {
            fetch_timeout_seconds: object.get(FETCH_TIMEOUT_KEY).and_then(positive_seconds),
            minimum_fetch_interval_seconds: object
                .get(MINIMUM_FETCH_INTERVAL_KEY)
                .and_then(positive_seconds),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.fetch_timeout_seconds.is_none() && self.minimum_fetch_interval_seconds.is_none()
    }

    /// Builds full settings from the SDK defaults with this update applied on top.
    pub fn to_settings(&self) -> RemoteConfigSettings {
        let mut settings = RemoteConfigSettings::default();
        if let Some(timeout) = self.fetch_timeout_seconds {
            settings.fetch_timeout_seconds = timeout;
        }
        if let Some(interval) = self.minimum_fetch_interval_seconds {
            settings.minimum_fetch_interval_seconds = interval;
        }
        settings
    }
}

fn positive_seconds(value: &JsonValue) -> Option<u64> {
    let seconds = match value {
        JsonValue::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        JsonValue::String(text) => text.trim().parse::<f64>().ok().map(|float| float as i64),
        _ => None,
    }?;
    u64::try_from(seconds).ok().filter(|seconds| *seconds > 0)
}
