//! Host preferences read when the bridge starts.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::remote_config::constants::DEFAULTS_RESOURCE_PREFERENCE;
use crate::remote_config::error::{malformed_input, RemoteConfigResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BridgePreferences {
    /// Name of the bundled defaults resource, e.g. `remote_config_defaults`.
    #[serde(default, rename = "FirebaseRemoteConfigDefaults")]
    pub defaults_resource: Option<String>,
}

impl BridgePreferences {
    /// Builds preferences from the host's flat string preference map.
    pub fn from_map(preferences: &HashMap<String, String>) -> Self {
        Self {
            defaults_resource: preferences.get(DEFAULTS_RESOURCE_PREFERENCE).cloned(),
        }
    }

    pub fn from_json(value: &JsonValue) -> RemoteConfigResult<Self> {
        Self::deserialize(value)
            .map_err(|err| malformed_input(format!("invalid bridge preferences: {err}")))
    }

    /// Returns the configured resource name, treating blank values as absent.
    pub fn defaults_resource(&self) -> Option<&str> {
        self.defaults_resource
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
